//! Surface export to downloadable file formats.
//!
//! Converts a rendered [`Surface`] into PNG bytes, JPEG bytes (flattened
//! onto the background color, since JPEG has no alpha channel), or an SVG
//! container embedding the PNG as a base64 data URI.

use std::fmt::Write;

use image::ImageEncoder;
use linkqr_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::surface::Surface;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG image, lossless.
    Png,
    /// JPEG image, flattened onto the background color.
    Jpeg,
    /// SVG container with the PNG embedded as a data URI.
    ///
    /// A compatibility shim: the output scales only as well as a raster
    /// image does. The module grid is deliberately not re-encoded as
    /// vector paths.
    Svg,
}

impl ExportFormat {
    /// Suggested file name for artifacts of this format.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Png => "qrcode.png",
            Self::Jpeg => "qrcode.jpg",
            Self::Svg => "qrcode.svg",
        }
    }
}

/// A downloadable file produced by one export action.
///
/// Created on demand, handed to the save step, then dropped. Never cached.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// The format of `bytes`.
    pub format: ExportFormat,
    /// Encoded file content.
    pub bytes: Vec<u8>,
    /// Suggested file name for the save step.
    pub file_name: &'static str,
}

/// Configuration for surface export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// JPEG quality 1-100 (default: 95).
    pub jpeg_quality: u8,
    /// Background color flattened under JPEG output.
    pub background: Color,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 95,
            background: Color::WHITE,
        }
    }
}

/// Exports a [`Surface`] to downloadable artifacts.
#[derive(Debug)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// The current export configuration.
    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Set the background flattened under JPEG output.
    pub fn set_background(&mut self, background: Color) {
        self.config.background = background;
    }

    /// Export a surface to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be encoded.
    pub fn export(&self, surface: &Surface, format: ExportFormat) -> RenderResult<ExportArtifact> {
        let bytes = match format {
            ExportFormat::Png => Self::encode_png(surface)?,
            ExportFormat::Jpeg => self.encode_jpeg(surface)?,
            ExportFormat::Svg => Self::wrap_svg(surface)?.into_bytes(),
        };
        Ok(ExportArtifact {
            format,
            bytes,
            file_name: format.file_name(),
        })
    }

    /// Encode the surface losslessly as PNG.
    fn encode_png(surface: &Surface) -> RenderResult<Vec<u8>> {
        let mut buf = std::io::Cursor::new(Vec::new());
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        encoder
            .write_image(
                &surface.data,
                surface.width,
                surface.height,
                image::ColorType::Rgba8.into(),
            )
            .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))?;
        Ok(buf.into_inner())
    }

    /// Flatten the surface onto the configured background and encode as
    /// JPEG. The output never contains transparent pixels, even when the
    /// background color itself carries alpha.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn encode_jpeg(&self, surface: &Surface) -> RenderResult<Vec<u8>> {
        let bg = self.config.background.to_bytes();
        let mut rgb_data = Vec::with_capacity((surface.width * surface.height * 3) as usize);
        for pixel in surface.data.chunks_exact(4) {
            let alpha = f32::from(pixel[3]) / 255.0;
            let inv = 1.0 - alpha;
            rgb_data.push((f32::from(pixel[0]).mul_add(alpha, f32::from(bg[0]) * inv)) as u8);
            rgb_data.push((f32::from(pixel[1]).mul_add(alpha, f32::from(bg[1]) * inv)) as u8);
            rgb_data.push((f32::from(pixel[2]).mul_add(alpha, f32::from(bg[2]) * inv)) as u8);
        }

        let mut buf = std::io::Cursor::new(Vec::new());
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, self.config.jpeg_quality);
        encoder
            .write_image(
                &rgb_data,
                surface.width,
                surface.height,
                image::ColorType::Rgb8.into(),
            )
            .map_err(|e| RenderError::Export(format!("JPEG encoding failed: {e}")))?;
        Ok(buf.into_inner())
    }

    /// Wrap the PNG-encoded surface in an SVG container sized to the
    /// surface, with the raster inlined as a base64 data URI.
    fn wrap_svg(surface: &Surface) -> RenderResult<String> {
        use base64::Engine;

        let png = Self::encode_png(surface)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        let (w, h) = (surface.width, surface.height);

        let mut svg = String::with_capacity(encoded.len() + 256);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\">",
        );
        let _ = write!(
            svg,
            "<image width=\"{w}\" height=\"{h}\" href=\"data:image/png;base64,{encoded}\"/>",
        );
        svg.push_str("</svg>");
        Ok(svg)
    }
}
