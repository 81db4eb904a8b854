// This module provides the type width table: the static mapping from Mint's symbolic
// integer type tags to bit width and signedness. The table covers exactly the eight
// fixed-width integer types the language has (i8/i16/i32/i64 and u8/u16/u32/u64) and
// is the only place type tags are resolved — literal values never imply a type. A tag
// outside the table fails with UnknownType. Lookup has no side effects and nothing here
// mutates after initialization.

//! The type width table for Mint's fixed-width integer types.

use crate::error::{CodegenError, CodegenResult};

/// Bit width and signedness of an integer type, as declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntWidth {
    pub bits: u32,
    pub signed: bool,
}

impl IntWidth {
    pub const fn new(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }
}

/// Resolve a type tag to its width descriptor.
///
/// Fails with [`CodegenError::UnknownType`] for anything outside the eight
/// integer tags.
pub fn width_of(tag: &str) -> CodegenResult<IntWidth> {
    match tag {
        "i8" => Ok(IntWidth::new(8, true)),
        "i16" => Ok(IntWidth::new(16, true)),
        "i32" => Ok(IntWidth::new(32, true)),
        "i64" => Ok(IntWidth::new(64, true)),
        "u8" => Ok(IntWidth::new(8, false)),
        "u16" => Ok(IntWidth::new(16, false)),
        "u32" => Ok(IntWidth::new(32, false)),
        "u64" => Ok(IntWidth::new(64, false)),
        _ => Err(CodegenError::UnknownType {
            name: tag.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;

    #[test]
    fn resolves_all_eight_tags() {
        let cases = [
            ("i8", 8, true),
            ("i16", 16, true),
            ("i32", 32, true),
            ("i64", 64, true),
            ("u8", 8, false),
            ("u16", 16, false),
            ("u32", 32, false),
            ("u64", 64, false),
        ];
        for (tag, bits, signed) in cases {
            let width = width_of(tag).unwrap();
            assert_eq!(width.bits, bits, "width of {tag}");
            assert_eq!(width.signed, signed, "signedness of {tag}");
        }
    }

    #[test]
    fn rejects_unknown_tags() {
        for tag in ["f32", "bool", "int", ""] {
            match width_of(tag) {
                Err(CodegenError::UnknownType { name }) => assert_eq!(name, tag),
                other => panic!("expected UnknownType for {tag:?}, got {other:?}"),
            }
        }
    }
}
