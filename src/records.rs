// src/records.rs
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::dates::parse_date;
use crate::metrics::days_since;
use crate::models::row::Row;
use crate::models::timestamp::Timestamp;
use crate::models::user::User;

/// Column indices of the account sheet.
mod cols {
    pub const NAME: usize = 0;
    pub const CREATE_DATE: usize = 1;
    pub const PWD_CHANGE_DATE: usize = 2;
    pub const LAST_LOGIN_DATE: usize = 4;
    pub const MFA: usize = 6;
}

/// Rows narrower than this are skipped.
pub const MIN_COLUMNS: usize = 7;

/// Maps sheet rows (header first) to users, preserving row order.
///
/// `now` is sampled once per row.
pub fn build_users<F>(rows: &[Row], now: F) -> Vec<User>
where
    F: Fn() -> DateTime<Local>,
{
    let mut users = Vec::new();

    // Skip header row
    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.len() < MIN_COLUMNS {
            warn!(row = index, columns = row.len(), "Row has insufficient columns, skipping");
            continue;
        }

        let user = build_user(index, row, now());
        debug!(?user, "Added user");
        users.push(user);
    }

    info!(count = users.len(), "Built users from sheet");
    users
}

fn build_user(index: usize, row: &Row, now: DateTime<Local>) -> User {
    let create_date = date_cell(index, row, cols::CREATE_DATE, "create date");
    let last_pwd_change = date_cell(index, row, cols::PWD_CHANGE_DATE, "password change date");
    let last_login = date_cell(index, row, cols::LAST_LOGIN_DATE, "last login date");

    User {
        id: index.to_string(),
        name: row.text(cols::NAME).to_string(),
        create_date,
        last_login,
        last_pwd_change,
        days_since_login: days_since(now, create_date, last_login),
        days_since_pwd: days_since(now, create_date, last_pwd_change),
        mfa_enabled: row.cell(cols::MFA) == Some("Yes"),
    }
}

fn date_cell(index: usize, row: &Row, col: usize, label: &str) -> Timestamp {
    let raw = row.text(col);
    match parse_date(raw) {
        Ok(dt) => Timestamp::Known(dt),
        Err(e) => {
            warn!(row = index, column = label, value = raw, error = %e, "Unparseable date, using unknown timestamp");
            Timestamp::Unknown
        }
    }
}
