//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub identity_number: String,
    pub birth_date: Date,
    pub phone_number: String,
    pub address: String,
    pub role_id: i64,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub salary: Decimal,
    pub password_hash: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            identity_number: model.identity_number,
            birth_date: model.birth_date,
            phone_number: model.phone_number,
            address: model.address,
            role_id: model.role_id,
            salary: model.salary,
            password_hash: model.password_hash,
        }
    }
}

/// Build an insertable row; a missing surrogate id gets a fresh v4 UUID.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id.unwrap_or_else(Uuid::new_v4)),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            identity_number: Set(user.identity_number),
            birth_date: Set(user.birth_date),
            phone_number: Set(user.phone_number),
            address: Set(user.address),
            role_id: Set(user.role_id),
            salary: Set(user.salary),
            password_hash: Set(user.password_hash),
            created_at: Set(chrono::Utc::now()),
        }
    }
}
