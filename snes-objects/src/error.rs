//! Error types for THINGS encoding and writing

use std::io;

/// Errors that can occur when encoding, decoding or writing THINGS lumps
///
/// Decoding OBJECTS data never fails, so there is no counterpart for it.
#[derive(Debug, thiserror::Error)]
pub enum ThingsError {
    /// Object type index has no DoomEd number
    #[error(
        "Object {index} has unknown type {kind} (table has {count} entries)",
        count = crate::TYPE_COUNT
    )]
    UnknownType {
        /// Position of the record in its collection
        index: usize,
        /// Raw type byte
        kind: u8,
    },

    /// THINGS data is not a whole number of records
    #[error(
        "Invalid THINGS lump length: {0} (must be a multiple of {size})",
        size = crate::THING_SIZE
    )]
    InvalidLength(usize),

    /// IO error while writing the destination
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ThingsError::UnknownType { index: 3, kind: 64 }.to_string(),
            "Object 3 has unknown type 64 (table has 64 entries)"
        );
        assert_eq!(
            ThingsError::InvalidLength(15).to_string(),
            "Invalid THINGS lump length: 15 (must be a multiple of 10)"
        );
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = ThingsError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, ThingsError::Io(_)));
        assert!(err.source().is_some());
    }
}
