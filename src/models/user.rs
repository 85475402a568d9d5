use serde::Serialize;
use crate::metrics::Recency;
use crate::models::timestamp::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub create_date: Timestamp,
    pub last_login: Timestamp,
    pub last_pwd_change: Timestamp,
    pub days_since_login: Recency,
    pub days_since_pwd: Recency,
    pub mfa_enabled: bool,
}
