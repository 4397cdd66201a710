//! Error types for the Planar workspace.
//!
//! Organized by subsystem: layout description (shared by the arena and the
//! value types) and native engine readiness. Arena errors live in
//! `planar-arena` and wrap [`LayoutError`] where a descriptor is at fault.

use std::error::Error;
use std::fmt;

/// A [`LayoutDescriptor`](crate::LayoutDescriptor) that cannot describe a
/// real foreign struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no bytes.
    ZeroSize {
        /// Name of the offending layout.
        layout: &'static str,
    },
    /// The alignment is zero or not a power of two.
    InvalidAlignment {
        /// Name of the offending layout.
        layout: &'static str,
        /// The rejected alignment.
        align: usize,
    },
    /// The size is not a multiple of the alignment, so arrays of the
    /// struct would be misaligned.
    SizeNotMultipleOfAlign {
        /// Name of the offending layout.
        layout: &'static str,
        /// Declared size in bytes.
        size: usize,
        /// Declared alignment in bytes.
        align: usize,
    },
    /// A field extends past the end of its layout.
    FieldOutOfBounds {
        /// The field name.
        field: &'static str,
        /// One past the last byte of the field.
        end: usize,
        /// Size of the enclosing layout.
        size: usize,
    },
    /// A field offset does not satisfy the field's alignment.
    MisalignedField {
        /// The field name.
        field: &'static str,
        /// Byte offset of the field.
        offset: usize,
        /// Required alignment of the field.
        align: usize,
    },
    /// Two fields share bytes, or are declared out of offset order.
    OverlappingFields {
        /// The earlier field in declaration order.
        first: &'static str,
        /// The later field in declaration order.
        second: &'static str,
    },
    /// The same field name was declared twice.
    DuplicateField {
        /// The repeated field name.
        field: &'static str,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { layout } => write!(f, "layout '{layout}' has zero size"),
            Self::InvalidAlignment { layout, align } => {
                write!(f, "layout '{layout}' has invalid alignment {align}")
            }
            Self::SizeNotMultipleOfAlign {
                layout,
                size,
                align,
            } => {
                write!(
                    f,
                    "layout '{layout}' size {size} is not a multiple of alignment {align}"
                )
            }
            Self::FieldOutOfBounds { field, end, size } => {
                write!(f, "field '{field}' ends at byte {end}, past layout size {size}")
            }
            Self::MisalignedField {
                field,
                offset,
                align,
            } => {
                write!(
                    f,
                    "field '{field}' at offset {offset} is not aligned to {align} bytes"
                )
            }
            Self::OverlappingFields { first, second } => {
                write!(f, "fields '{first}' and '{second}' overlap or are out of order")
            }
            Self::DuplicateField { field } => write!(f, "field '{field}' declared twice"),
        }
    }
}

impl Error for LayoutError {}

/// The native engine could not be made ready.
///
/// Fatal at initialization: no value type may reach the validity gateway
/// until an engine has loaded. The loader is not retried automatically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The running platform has no engine build.
    UnsupportedPlatform {
        /// Platform identifier reported by the loader.
        os: String,
    },
    /// The engine library could not be located or opened.
    LibraryUnavailable {
        /// Library name or path the loader tried.
        name: String,
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The library loaded but does not export a required symbol.
    MissingSymbol {
        /// The missing symbol.
        symbol: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform { os } => {
                write!(f, "unsupported platform for native engine: {os}")
            }
            Self::LibraryUnavailable { name, reason } => {
                write!(f, "native engine library '{name}' unavailable: {reason}")
            }
            Self::MissingSymbol { symbol } => {
                write!(f, "native engine is missing symbol '{symbol}'")
            }
        }
    }
}

impl Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_error_messages_name_the_field() {
        let e = LayoutError::FieldOutOfBounds {
            field: "q",
            end: 20,
            size: 16,
        };
        assert_eq!(e.to_string(), "field 'q' ends at byte 20, past layout size 16");

        let e = LayoutError::OverlappingFields {
            first: "p",
            second: "q",
        };
        assert!(e.to_string().contains("'p'"));
        assert!(e.to_string().contains("'q'"));
    }

    #[test]
    fn engine_error_messages() {
        let e = EngineError::UnsupportedPlatform { os: "haiku".into() };
        assert_eq!(e.to_string(), "unsupported platform for native engine: haiku");

        let e = EngineError::MissingSymbol {
            symbol: "planar_is_valid_rotation".into(),
        };
        assert!(e.to_string().contains("planar_is_valid_rotation"));
    }
}
