//! Symbol output sizes.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Supported symbol edge lengths in pixels.
///
/// The generator offers a fixed menu of square output sizes rather than a
/// free-form dimension field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolSize {
    /// Small (128px).
    Small,
    /// Medium (256px).
    #[default]
    Medium,
    /// Large (512px).
    Large,
    /// Extra large (1024px).
    ExtraLarge,
}

impl SymbolSize {
    /// Edge length in pixels.
    #[must_use]
    pub const fn pixels(self) -> u32 {
        match self {
            Self::Small => 128,
            Self::Medium => 256,
            Self::Large => 512,
            Self::ExtraLarge => 1024,
        }
    }

    /// Convert a raw pixel value back to a size variant.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedSize`] for values outside the
    /// supported set.
    pub fn from_pixels(px: u32) -> CoreResult<Self> {
        match px {
            128 => Ok(Self::Small),
            256 => Ok(Self::Medium),
            512 => Ok(Self::Large),
            1024 => Ok(Self::ExtraLarge),
            other => Err(CoreError::UnsupportedSize(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(SymbolSize::default(), SymbolSize::Medium);
        assert_eq!(SymbolSize::default().pixels(), 256);
    }

    #[test]
    fn test_pixel_round_trip() {
        for size in [
            SymbolSize::Small,
            SymbolSize::Medium,
            SymbolSize::Large,
            SymbolSize::ExtraLarge,
        ] {
            assert_eq!(SymbolSize::from_pixels(size.pixels()).expect("round trip"), size);
        }
    }

    #[test]
    fn test_rejects_unsupported_pixels() {
        for px in [0, 100, 255, 2048] {
            assert!(SymbolSize::from_pixels(px).is_err());
        }
    }
}
