//! MySQL column type codes.
//!
//! Each variant corresponds to one value of the `type` byte in a column
//! definition. Length and precision live on `FieldType`, not here.

use crate::error::{Error, Result};
use crate::protocol::constants::*;

use super::defaults;

/// MySQL column storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MysqlType {
    /// Pre-5.0 DECIMAL.
    Decimal,
    /// TINYINT.
    Tiny,
    /// SMALLINT.
    Short,
    /// INT.
    Long,
    /// FLOAT.
    Float,
    /// DOUBLE.
    Double,
    /// NULL literal type.
    Null,
    /// TIMESTAMP.
    Timestamp,
    /// BIGINT.
    LongLong,
    /// MEDIUMINT.
    Int24,
    /// DATE.
    Date,
    /// TIME.
    Duration,
    /// DATETIME.
    Datetime,
    /// YEAR.
    Year,
    /// Internal DATE storage format.
    NewDate,
    /// VARCHAR.
    Varchar,
    /// BIT.
    Bit,
    /// JSON.
    Json,
    /// DECIMAL / NUMERIC.
    NewDecimal,
    /// ENUM.
    Enum,
    /// SET.
    Set,
    /// TINYBLOB / TINYTEXT.
    TinyBlob,
    /// MEDIUMBLOB / MEDIUMTEXT.
    MediumBlob,
    /// LONGBLOB / LONGTEXT.
    LongBlob,
    /// BLOB / TEXT.
    Blob,
    /// VARCHAR / VARBINARY as sent in result sets.
    VarString,
    /// CHAR / BINARY.
    String,
    /// GEOMETRY.
    Geometry,
}

impl MysqlType {
    /// Create from a raw MySQL type code.
    ///
    /// Returns `Err(Error::UnsupportedType)` for codes that name no type.
    pub fn from_raw(type_num: u8) -> Result<Self> {
        match type_num {
            MYSQL_TYPE_DECIMAL => Ok(MysqlType::Decimal),
            MYSQL_TYPE_TINY => Ok(MysqlType::Tiny),
            MYSQL_TYPE_SHORT => Ok(MysqlType::Short),
            MYSQL_TYPE_LONG => Ok(MysqlType::Long),
            MYSQL_TYPE_FLOAT => Ok(MysqlType::Float),
            MYSQL_TYPE_DOUBLE => Ok(MysqlType::Double),
            MYSQL_TYPE_NULL => Ok(MysqlType::Null),
            MYSQL_TYPE_TIMESTAMP => Ok(MysqlType::Timestamp),
            MYSQL_TYPE_LONGLONG => Ok(MysqlType::LongLong),
            MYSQL_TYPE_INT24 => Ok(MysqlType::Int24),
            MYSQL_TYPE_DATE => Ok(MysqlType::Date),
            MYSQL_TYPE_DURATION => Ok(MysqlType::Duration),
            MYSQL_TYPE_DATETIME => Ok(MysqlType::Datetime),
            MYSQL_TYPE_YEAR => Ok(MysqlType::Year),
            MYSQL_TYPE_NEWDATE => Ok(MysqlType::NewDate),
            MYSQL_TYPE_VARCHAR => Ok(MysqlType::Varchar),
            MYSQL_TYPE_BIT => Ok(MysqlType::Bit),
            MYSQL_TYPE_JSON => Ok(MysqlType::Json),
            MYSQL_TYPE_NEWDECIMAL => Ok(MysqlType::NewDecimal),
            MYSQL_TYPE_ENUM => Ok(MysqlType::Enum),
            MYSQL_TYPE_SET => Ok(MysqlType::Set),
            MYSQL_TYPE_TINY_BLOB => Ok(MysqlType::TinyBlob),
            MYSQL_TYPE_MEDIUM_BLOB => Ok(MysqlType::MediumBlob),
            MYSQL_TYPE_LONG_BLOB => Ok(MysqlType::LongBlob),
            MYSQL_TYPE_BLOB => Ok(MysqlType::Blob),
            MYSQL_TYPE_VAR_STRING => Ok(MysqlType::VarString),
            MYSQL_TYPE_STRING => Ok(MysqlType::String),
            MYSQL_TYPE_GEOMETRY => Ok(MysqlType::Geometry),
            _ => Err(Error::UnsupportedType { type_num }),
        }
    }

    /// Get the MySQL type code.
    pub fn type_num(&self) -> u8 {
        match self {
            MysqlType::Decimal => MYSQL_TYPE_DECIMAL,
            MysqlType::Tiny => MYSQL_TYPE_TINY,
            MysqlType::Short => MYSQL_TYPE_SHORT,
            MysqlType::Long => MYSQL_TYPE_LONG,
            MysqlType::Float => MYSQL_TYPE_FLOAT,
            MysqlType::Double => MYSQL_TYPE_DOUBLE,
            MysqlType::Null => MYSQL_TYPE_NULL,
            MysqlType::Timestamp => MYSQL_TYPE_TIMESTAMP,
            MysqlType::LongLong => MYSQL_TYPE_LONGLONG,
            MysqlType::Int24 => MYSQL_TYPE_INT24,
            MysqlType::Date => MYSQL_TYPE_DATE,
            MysqlType::Duration => MYSQL_TYPE_DURATION,
            MysqlType::Datetime => MYSQL_TYPE_DATETIME,
            MysqlType::Year => MYSQL_TYPE_YEAR,
            MysqlType::NewDate => MYSQL_TYPE_NEWDATE,
            MysqlType::Varchar => MYSQL_TYPE_VARCHAR,
            MysqlType::Bit => MYSQL_TYPE_BIT,
            MysqlType::Json => MYSQL_TYPE_JSON,
            MysqlType::NewDecimal => MYSQL_TYPE_NEWDECIMAL,
            MysqlType::Enum => MYSQL_TYPE_ENUM,
            MysqlType::Set => MYSQL_TYPE_SET,
            MysqlType::TinyBlob => MYSQL_TYPE_TINY_BLOB,
            MysqlType::MediumBlob => MYSQL_TYPE_MEDIUM_BLOB,
            MysqlType::LongBlob => MYSQL_TYPE_LONG_BLOB,
            MysqlType::Blob => MYSQL_TYPE_BLOB,
            MysqlType::VarString => MYSQL_TYPE_VAR_STRING,
            MysqlType::String => MYSQL_TYPE_STRING,
            MysqlType::Geometry => MYSQL_TYPE_GEOMETRY,
        }
    }

    /// Default display length, or `UNSPECIFIED_LENGTH` when none applies.
    pub fn default_flen(&self) -> i64 {
        defaults::default_field_length(*self)
    }

    /// Default number of fractional digits, or `UNSPECIFIED_LENGTH`.
    pub fn default_decimal(&self) -> i64 {
        defaults::default_decimal(*self)
    }

    /// Whether this is an integer type (TINYINT through BIGINT, and YEAR).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            MysqlType::Tiny
                | MysqlType::Short
                | MysqlType::Int24
                | MysqlType::Long
                | MysqlType::LongLong
                | MysqlType::Year
        )
    }
}

impl TryFrom<u8> for MysqlType {
    type Error = Error;

    fn try_from(type_num: u8) -> Result<Self> {
        MysqlType::from_raw(type_num)
    }
}

impl std::fmt::Display for MysqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MysqlType::Decimal | MysqlType::NewDecimal => "DECIMAL",
            MysqlType::Tiny => "TINYINT",
            MysqlType::Short => "SMALLINT",
            MysqlType::Long => "INT",
            MysqlType::Float => "FLOAT",
            MysqlType::Double => "DOUBLE",
            MysqlType::Null => "NULL",
            MysqlType::Timestamp => "TIMESTAMP",
            MysqlType::LongLong => "BIGINT",
            MysqlType::Int24 => "MEDIUMINT",
            MysqlType::Date | MysqlType::NewDate => "DATE",
            MysqlType::Duration => "TIME",
            MysqlType::Datetime => "DATETIME",
            MysqlType::Year => "YEAR",
            MysqlType::Varchar | MysqlType::VarString => "VARCHAR",
            MysqlType::Bit => "BIT",
            MysqlType::Json => "JSON",
            MysqlType::Enum => "ENUM",
            MysqlType::Set => "SET",
            MysqlType::TinyBlob => "TINYBLOB",
            MysqlType::MediumBlob => "MEDIUMBLOB",
            MysqlType::LongBlob => "LONGBLOB",
            MysqlType::Blob => "BLOB",
            MysqlType::String => "CHAR",
            MysqlType::Geometry => "GEOMETRY",
        };
        f.write_str(name)
    }
}
