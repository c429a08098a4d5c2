//! MySQL column type constants.
//!
//! Type codes are the values MySQL uses to tag a column's storage type.

// Column type codes
pub const MYSQL_TYPE_DECIMAL: u8 = 0x00;
pub const MYSQL_TYPE_TINY: u8 = 0x01;
pub const MYSQL_TYPE_SHORT: u8 = 0x02;
pub const MYSQL_TYPE_LONG: u8 = 0x03;
pub const MYSQL_TYPE_FLOAT: u8 = 0x04;
pub const MYSQL_TYPE_DOUBLE: u8 = 0x05;
pub const MYSQL_TYPE_NULL: u8 = 0x06;
pub const MYSQL_TYPE_TIMESTAMP: u8 = 0x07;
pub const MYSQL_TYPE_LONGLONG: u8 = 0x08;
pub const MYSQL_TYPE_INT24: u8 = 0x09;
pub const MYSQL_TYPE_DATE: u8 = 0x0a;
pub const MYSQL_TYPE_DURATION: u8 = 0x0b;
pub const MYSQL_TYPE_DATETIME: u8 = 0x0c;
pub const MYSQL_TYPE_YEAR: u8 = 0x0d;
pub const MYSQL_TYPE_NEWDATE: u8 = 0x0e;
pub const MYSQL_TYPE_VARCHAR: u8 = 0x0f;
pub const MYSQL_TYPE_BIT: u8 = 0x10;
pub const MYSQL_TYPE_JSON: u8 = 0xf5;
pub const MYSQL_TYPE_NEWDECIMAL: u8 = 0xf6;
pub const MYSQL_TYPE_ENUM: u8 = 0xf7;
pub const MYSQL_TYPE_SET: u8 = 0xf8;
pub const MYSQL_TYPE_TINY_BLOB: u8 = 0xf9;
pub const MYSQL_TYPE_MEDIUM_BLOB: u8 = 0xfa;
pub const MYSQL_TYPE_LONG_BLOB: u8 = 0xfb;
pub const MYSQL_TYPE_BLOB: u8 = 0xfc;
pub const MYSQL_TYPE_VAR_STRING: u8 = 0xfd;
pub const MYSQL_TYPE_STRING: u8 = 0xfe;
pub const MYSQL_TYPE_GEOMETRY: u8 = 0xff;

/// Flen or decimal is not declared and has no default.
pub const UNSPECIFIED_LENGTH: i64 = -1;

// Default display lengths
pub const DEFAULT_FLEN_TINY: i64 = 4;
pub const DEFAULT_FLEN_SHORT: i64 = 6;
pub const DEFAULT_FLEN_INT24: i64 = 9;
pub const DEFAULT_FLEN_LONG: i64 = 11;
pub const DEFAULT_FLEN_LONGLONG: i64 = 21;
pub const DEFAULT_FLEN_FLOAT: i64 = 12;
pub const DEFAULT_FLEN_DOUBLE: i64 = 22;
pub const DEFAULT_FLEN_DATE: i64 = 10;
pub const DEFAULT_FLEN_DATETIME: i64 = 19;
pub const DEFAULT_FLEN_CHAR: i64 = 1;
pub const DEFAULT_FLEN_DECIMAL: i64 = 10;
pub const DEFAULT_FLEN_BLOB: i64 = 65535;
pub const DEFAULT_FLEN_JSON: i64 = u32::MAX as i64;

// Column flags
pub const UNSIGNED_FLAG: u16 = 0x0020;
