//! Default display length and decimal precision per column type.
//!
//! Used when a DDL statement declares no length, or when a column type is
//! inferred from an expression. For example `SELECT COUNT(*) FROM t` yields
//! a BIGINT column whose flen is 21.
//!
//! Values follow <https://dev.mysql.com/doc/refman/5.7/en/storage-requirements.html>.
//! Types without an entry answer `UNSPECIFIED_LENGTH` so callers can supply
//! their own fallback.

use crate::protocol::constants::*;

use super::mysql_type::MysqlType;

/// Default display length (flen) for a column of type `tp`.
pub fn default_field_length(tp: MysqlType) -> i64 {
    match tp {
        MysqlType::Tiny => DEFAULT_FLEN_TINY,
        MysqlType::Short => DEFAULT_FLEN_SHORT,
        MysqlType::Int24 => DEFAULT_FLEN_INT24,
        MysqlType::Long => DEFAULT_FLEN_LONG,
        MysqlType::LongLong => DEFAULT_FLEN_LONGLONG,
        MysqlType::Float => DEFAULT_FLEN_FLOAT,
        MysqlType::Double => DEFAULT_FLEN_DOUBLE,
        MysqlType::Date | MysqlType::Duration => DEFAULT_FLEN_DATE,
        MysqlType::Datetime | MysqlType::Timestamp => DEFAULT_FLEN_DATETIME,
        MysqlType::String | MysqlType::Bit => DEFAULT_FLEN_CHAR,
        // https://dev.mysql.com/doc/refman/5.7/en/fixed-point-types.html
        MysqlType::NewDecimal => DEFAULT_FLEN_DECIMAL,
        MysqlType::Blob => DEFAULT_FLEN_BLOB,
        MysqlType::Json => DEFAULT_FLEN_JSON,
        _ => {
            tracing::trace!(tp = %tp, "no default field length");
            UNSPECIFIED_LENGTH
        }
    }
}

/// Default number of fractional digits for a column of type `tp`.
pub fn default_decimal(tp: MysqlType) -> i64 {
    match tp {
        MysqlType::NewDecimal => 0,
        MysqlType::Datetime | MysqlType::Duration => 0,
        _ => UNSPECIFIED_LENGTH,
    }
}

/// Same as [`default_field_length`], keyed by raw type code.
///
/// Codes that name no MySQL type answer `UNSPECIFIED_LENGTH`.
pub fn default_field_length_for_code(type_num: u8) -> i64 {
    match MysqlType::from_raw(type_num) {
        Ok(tp) => default_field_length(tp),
        Err(_) => {
            tracing::trace!(type_num, "unknown type code, no default field length");
            UNSPECIFIED_LENGTH
        }
    }
}

/// Same as [`default_decimal`], keyed by raw type code.
pub fn default_decimal_for_code(type_num: u8) -> i64 {
    match MysqlType::from_raw(type_num) {
        Ok(tp) => default_decimal(tp),
        Err(_) => {
            tracing::trace!(type_num, "unknown type code, no default decimal");
            UNSPECIFIED_LENGTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_lengths() {
        assert_eq!(default_field_length(MysqlType::Tiny), 4);
        assert_eq!(default_field_length(MysqlType::Short), 6);
        assert_eq!(default_field_length(MysqlType::Int24), 9);
        assert_eq!(default_field_length(MysqlType::Long), 11);
        assert_eq!(default_field_length(MysqlType::LongLong), 21);
    }

    #[test]
    fn test_float_lengths() {
        assert_eq!(default_field_length(MysqlType::Float), 12);
        assert_eq!(default_field_length(MysqlType::Double), 22);
        assert_eq!(default_field_length(MysqlType::NewDecimal), 10);
    }

    #[test]
    fn test_temporal_lengths() {
        assert_eq!(default_field_length(MysqlType::Date), 10);
        assert_eq!(default_field_length(MysqlType::Duration), 10);
        assert_eq!(default_field_length(MysqlType::Datetime), 19);
        assert_eq!(default_field_length(MysqlType::Timestamp), 19);
    }

    #[test]
    fn test_string_lengths() {
        assert_eq!(default_field_length(MysqlType::String), 1);
        assert_eq!(default_field_length(MysqlType::Bit), 1);
        assert_eq!(default_field_length(MysqlType::Blob), 65535);
        assert_eq!(default_field_length(MysqlType::Json), 4294967295);
    }

    #[test]
    fn test_unmapped_lengths() {
        for tp in [
            MysqlType::Decimal,
            MysqlType::Null,
            MysqlType::Year,
            MysqlType::NewDate,
            MysqlType::Varchar,
            MysqlType::Enum,
            MysqlType::Set,
            MysqlType::TinyBlob,
            MysqlType::MediumBlob,
            MysqlType::LongBlob,
            MysqlType::VarString,
            MysqlType::Geometry,
        ] {
            assert_eq!(default_field_length(tp), UNSPECIFIED_LENGTH, "{tp:?}");
        }
    }

    #[test]
    fn test_decimals() {
        assert_eq!(default_decimal(MysqlType::NewDecimal), 0);
        assert_eq!(default_decimal(MysqlType::Datetime), 0);
        assert_eq!(default_decimal(MysqlType::Duration), 0);
        assert_eq!(default_decimal(MysqlType::Long), -1);
        // No decimal default for these even though they have a flen.
        assert_eq!(default_decimal(MysqlType::Timestamp), -1);
        assert_eq!(default_decimal(MysqlType::Date), -1);
        assert_eq!(default_decimal(MysqlType::Double), -1);
    }

    #[test]
    fn test_raw_codes() {
        assert_eq!(default_field_length_for_code(MYSQL_TYPE_LONGLONG), 21);
        assert_eq!(default_field_length_for_code(0x42), -1);
        assert_eq!(default_decimal_for_code(MYSQL_TYPE_NEWDECIMAL), 0);
        assert_eq!(default_decimal_for_code(0x42), -1);
    }
}
