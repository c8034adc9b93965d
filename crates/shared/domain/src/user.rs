//! User domain entity and the role catalogue.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    MAX_SALARY, MIN_SALARY, ROLE_ADMIN, ROLE_ADMIN_ID, ROLE_ADVISOR, ROLE_ADVISOR_ID, ROLE_CLIENT,
    ROLE_CLIENT_ID, SALARY_OUT_OF_RANGE,
};
use crate::error::{DomainError, DomainResult};

/// Closed catalogue of roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Advisor,
    Client,
}

impl Role {
    /// Numeric identifier stored with the user
    pub fn id(&self) -> i64 {
        match self {
            Role::Admin => ROLE_ADMIN_ID,
            Role::Advisor => ROLE_ADVISOR_ID,
            Role::Client => ROLE_CLIENT_ID,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Advisor => ROLE_ADVISOR,
            Role::Client => ROLE_CLIENT,
        }
    }
}

/// Unknown ids are an error, never a default role.
impl TryFrom<i64> for Role {
    type Error = DomainError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            ROLE_ADMIN_ID => Ok(Role::Admin),
            ROLE_ADVISOR_ID => Ok(Role::Advisor),
            ROLE_CLIENT_ID => Ok(Role::Client),
            other => Err(DomainError::UnknownRole(other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate key, assigned by the store on save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// National identification number (digits only)
    pub identity_number: String,
    pub birth_date: NaiveDate,
    pub phone_number: String,
    pub address: String,
    pub role_id: i64,
    /// Base salary in currency units
    pub salary: Decimal,
    /// Opaque password hash; `None` before hashing
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
}

impl User {
    /// Check the base salary against the registration bounds.
    pub fn validate_salary(&self) -> DomainResult<()> {
        if self.salary < Decimal::from(MIN_SALARY) || self.salary > Decimal::from(MAX_SALARY) {
            return Err(DomainError::invalid_user_data(SALARY_OUT_OF_RANGE));
        }
        Ok(())
    }

    /// Resolve the user's role from its stored id.
    pub fn role(&self) -> DomainResult<Role> {
        Role::try_from(self.role_id)
    }
}
