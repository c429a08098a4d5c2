//! MySQL column types and their default lengths.

pub mod constants;
pub mod types;

pub use types::{
    default_decimal, default_decimal_for_code, default_field_length,
    default_field_length_for_code, FieldType, MysqlType,
};
