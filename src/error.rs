//! Error types for MySQL field type handling.

use thiserror::Error;

/// Result type alias for field type operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for field type conversions.
///
/// The default length lookups never produce one of these; they answer
/// `UNSPECIFIED_LENGTH` instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Unsupported MySQL type code.
    #[error("Unsupported MySQL type code: {type_num:#04x}")]
    UnsupportedType { type_num: u8 },
}
