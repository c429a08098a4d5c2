//! Column field type with display length and decimal precision.
//!
//! Schema builders and expression type inference create a `FieldType` and
//! fill whatever the DDL left out from the per-type defaults.

use crate::protocol::constants::*;

use super::mysql_type::MysqlType;

/// Type metadata for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType {
    /// Storage type.
    pub tp: MysqlType,
    /// Display length, `UNSPECIFIED_LENGTH` if not declared.
    pub flen: i64,
    /// Fractional digits, `UNSPECIFIED_LENGTH` if not declared.
    pub decimal: i64,
    /// Column flags (`UNSIGNED_FLAG`).
    pub flag: u16,
}

impl FieldType {
    /// Create a field type with nothing declared.
    pub fn new(tp: MysqlType) -> Self {
        Self {
            tp,
            flen: UNSPECIFIED_LENGTH,
            decimal: UNSPECIFIED_LENGTH,
            flag: 0,
        }
    }

    /// Create a field type carrying the default flen and decimal for `tp`.
    ///
    /// This is the shape given to columns computed from expressions.
    pub fn with_defaults(tp: MysqlType) -> Self {
        let mut ft = Self::new(tp);
        ft.fill_defaults();
        ft
    }

    /// Set the declared display length.
    pub fn with_flen(mut self, flen: i64) -> Self {
        self.flen = flen;
        self
    }

    /// Set the declared number of fractional digits.
    pub fn with_decimal(mut self, decimal: i64) -> Self {
        self.decimal = decimal;
        self
    }

    /// Set the column flags.
    pub fn with_flag(mut self, flag: u16) -> Self {
        self.flag = flag;
        self
    }

    pub fn is_flen_unspecified(&self) -> bool {
        self.flen == UNSPECIFIED_LENGTH
    }

    pub fn is_decimal_unspecified(&self) -> bool {
        self.decimal == UNSPECIFIED_LENGTH
    }

    /// Replace unspecified flen and decimal with the type defaults.
    ///
    /// Declared values are kept. A component stays unspecified when the
    /// type has no default for it.
    pub fn fill_defaults(&mut self) {
        if self.is_flen_unspecified() {
            self.flen = self.tp.default_flen();
        }
        if self.is_decimal_unspecified() {
            self.decimal = self.tp.default_decimal();
        }
    }

    fn shows_flen(&self) -> bool {
        self.tp.is_integer()
            || matches!(
                self.tp,
                MysqlType::Bit
                    | MysqlType::Float
                    | MysqlType::Double
                    | MysqlType::Decimal
                    | MysqlType::NewDecimal
                    | MysqlType::String
                    | MysqlType::Varchar
                    | MysqlType::VarString
            )
    }

    fn shows_decimal(&self) -> bool {
        matches!(
            self.tp,
            MysqlType::Float | MysqlType::Double | MysqlType::Decimal | MysqlType::NewDecimal
        )
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tp.to_string().to_lowercase())?;
        if self.shows_flen() && !self.is_flen_unspecified() {
            if self.shows_decimal() && !self.is_decimal_unspecified() {
                write!(f, "({},{})", self.flen, self.decimal)?;
            } else {
                write!(f, "({})", self.flen)?;
            }
        }
        if self.flag & UNSIGNED_FLAG != 0 {
            write!(f, " unsigned")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unspecified() {
        let ft = FieldType::new(MysqlType::Long);
        assert!(ft.is_flen_unspecified());
        assert!(ft.is_decimal_unspecified());
    }

    #[test]
    fn test_with_defaults() {
        let ft = FieldType::with_defaults(MysqlType::NewDecimal);
        assert_eq!(ft.flen, 10);
        assert_eq!(ft.decimal, 0);

        let ft = FieldType::with_defaults(MysqlType::Enum);
        assert!(ft.is_flen_unspecified());
        assert!(ft.is_decimal_unspecified());
    }

    #[test]
    fn test_fill_defaults_keeps_declared() {
        let mut ft = FieldType::new(MysqlType::NewDecimal).with_flen(18);
        ft.fill_defaults();
        assert_eq!(ft.flen, 18);
        assert_eq!(ft.decimal, 0);

        let mut ft = FieldType::new(MysqlType::Datetime).with_decimal(6);
        ft.fill_defaults();
        assert_eq!(ft.flen, 19);
        assert_eq!(ft.decimal, 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", FieldType::with_defaults(MysqlType::LongLong)),
            "bigint(21)"
        );
        assert_eq!(
            format!("{}", FieldType::with_defaults(MysqlType::NewDecimal)),
            "decimal(10,0)"
        );
        assert_eq!(
            format!("{}", FieldType::with_defaults(MysqlType::Datetime)),
            "datetime"
        );
        assert_eq!(
            format!("{}", FieldType::with_defaults(MysqlType::Json)),
            "json"
        );
        assert_eq!(
            format!(
                "{}",
                FieldType::with_defaults(MysqlType::Long).with_flag(UNSIGNED_FLAG)
            ),
            "int(11) unsigned"
        );
        assert_eq!(format!("{}", FieldType::new(MysqlType::Double)), "double");
    }
}
