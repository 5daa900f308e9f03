use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Column width of `firstname` / `lastname`.
pub const NAME_MAX_LEN: usize = 50;

fn check_name(field: &str, value: &str) -> Result<(), ModelError> {
    if value.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("{field} longer than {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a row and return the id the database assigned.
pub async fn insert(
    db: &DatabaseConnection,
    firstname: &str,
    lastname: &str,
    number: i64,
    balance: i64,
    created_at: DateTimeWithTimeZone,
) -> Result<i32, ModelError> {
    check_name("firstname", firstname)?;
    check_name("lastname", lastname)?;
    let am = ActiveModel {
        id: NotSet,
        firstname: Set(firstname.to_string()),
        lastname: Set(lastname.to_string()),
        number: Set(number),
        balance: Set(balance),
        created_at: Set(created_at),
    };
    let res = Entity::insert(am).exec(db).await?;
    Ok(res.last_insert_id)
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Overwrite the mutable columns of one row. Returns the number of rows matched.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    firstname: &str,
    lastname: &str,
    number: i64,
    balance: i64,
) -> Result<u64, ModelError> {
    check_name("firstname", firstname)?;
    check_name("lastname", lastname)?;
    let res = Entity::update_many()
        .col_expr(Column::Firstname, Expr::value(firstname.to_string()))
        .col_expr(Column::Lastname, Expr::value(lastname.to_string()))
        .col_expr(Column::Number, Expr::value(number))
        .col_expr(Column::Balance, Expr::value(balance))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Delete by id. Zero matched rows is not an error.
pub async fn hard_delete(db: &DatabaseConnection, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
