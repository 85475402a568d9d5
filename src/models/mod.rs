pub mod row;
pub mod timestamp;
pub mod user;
