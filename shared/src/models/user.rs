//! Staff user and login token models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token returned by `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Form-encoded credentials for `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

/// Staff profile (`GET /users/me/`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub role_id: u32,
    pub staff_id: Uuid,
    pub username: String,
    pub full_name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub created_at: NaiveDateTime,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
