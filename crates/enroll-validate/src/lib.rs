//! Roster validation: pure field normalizers and the row validator.

pub mod date;
pub mod phone;
pub mod validator;

pub use date::normalize_date;
pub use phone::normalize_phone;
pub use validator::validate_row;
