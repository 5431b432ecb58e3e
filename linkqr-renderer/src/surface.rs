//! Rendered symbol surfaces.
//!
//! [`render_symbol`] maps a committed value plus display options to an RGBA
//! bitmap: the `qrcode` crate produces the module grid at error-correction
//! level H, a quiet zone is painted around it, and the result is scaled
//! with nearest-neighbor filtering to the exact requested pixel size so
//! module edges stay crisp.

use linkqr_core::{Color, SymbolSize};
use qrcode::{EcLevel, QrCode};

use crate::error::{RenderError, RenderResult};

/// Quiet zone width in modules, per the QR standard.
const QUIET_ZONE_MODULES: u32 = 4;

/// An RGBA bitmap holding a rendered symbol.
#[derive(Debug, Clone)]
pub struct Surface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA pixel data (4 bytes per pixel, row-major).
    pub data: Vec<u8>,
}

impl Surface {
    /// The RGBA bytes of the pixel at `(x, y)`.
    ///
    /// Returns `None` when the coordinates are out of bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        self.data.get(idx..idx + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Render `text` as a QR symbol surface of exactly `size × size` pixels.
///
/// The symbol is encoded at error-correction level H and painted in
/// `foreground` on `background` with a four-module quiet zone.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if the text exceeds the symbol capacity.
pub fn render_symbol(
    text: &str,
    size: SymbolSize,
    foreground: Color,
    background: Color,
) -> RenderResult<Surface> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)
        .map_err(|e| RenderError::Encode(e.to_string()))?;

    let modules = module_image(&code, foreground, background);
    let px = size.pixels();
    let scaled = image::imageops::resize(&modules, px, px, image::imageops::FilterType::Nearest);

    tracing::debug!(size = px, modules = code.width(), "rendered symbol");

    Ok(Surface {
        width: px,
        height: px,
        data: scaled.into_raw(),
    })
}

/// Paint the module grid plus quiet zone at one pixel per module.
#[allow(clippy::cast_possible_truncation)]
fn module_image(code: &QrCode, foreground: Color, background: Color) -> image::RgbaImage {
    let width = code.width() as u32;
    let colors = code.to_colors();
    let total = width + 2 * QUIET_ZONE_MODULES;

    let fg = image::Rgba(foreground.to_bytes());
    let bg = image::Rgba(background.to_bytes());

    let mut img = image::RgbaImage::from_pixel(total, total, bg);
    for (idx, module) in colors.iter().enumerate() {
        if *module == qrcode::Color::Dark {
            let x = idx as u32 % width + QUIET_ZONE_MODULES;
            let y = idx as u32 / width + QUIET_ZONE_MODULES;
            img.put_pixel(x, y, fg);
        }
    }
    img
}
