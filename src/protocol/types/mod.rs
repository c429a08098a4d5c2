//! MySQL column type metadata.

mod defaults;
mod field_type;
mod mysql_type;

pub use defaults::{
    default_decimal, default_decimal_for_code, default_field_length,
    default_field_length_for_code,
};
pub use field_type::FieldType;
pub use mysql_type::MysqlType;
