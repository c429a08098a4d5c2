//! MySQL column type defaults for Rust
//!
//! Default display length (flen) and decimal precision for MySQL column
//! types. These apply when a DDL statement declares no length, or when a
//! result column is typed from an expression rather than a table column.
//!
//! Types without a default answer [`UNSPECIFIED_LENGTH`] (`-1`); callers
//! decide their own fallback.
//!
//! # Example
//!
//! ```
//! use mysql_field_type::{default_decimal, default_field_length, FieldType, MysqlType};
//!
//! // SELECT COUNT(*) FROM t
//! assert_eq!(default_field_length(MysqlType::LongLong), 21);
//! assert_eq!(default_decimal(MysqlType::Long), -1);
//!
//! let ft = FieldType::with_defaults(MysqlType::NewDecimal);
//! assert_eq!(ft.to_string(), "decimal(10,0)");
//! ```

pub mod error;
pub mod protocol;

// Re-export main types
pub use error::{Error, Result};
pub use protocol::constants::UNSPECIFIED_LENGTH;
pub use protocol::types::{
    default_decimal, default_decimal_for_code, default_field_length,
    default_field_length_for_code, FieldType, MysqlType,
};
