//! # Linkqr Renderer
//!
//! Symbol rendering and export for the linkqr generator. Turns a committed
//! link into an RGBA surface (QR at error-correction level H with quiet
//! zone) and converts that surface into downloadable artifacts.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────────┐
//! │ linkqr-core  │──▶│   Surface    │──▶│   ExportArtifact     │
//! │ form state   │   │ RGBA bitmap  │   │ PNG / JPEG / SVG     │
//! └──────────────┘   └──────────────┘   └──────────────────────┘
//!                                                  │
//!                                          save_artifact (disk)
//! ```
//!
//! The QR encoding itself is delegated to the `qrcode` crate; this crate
//! owns the surface painting, format encoding, and the session glue.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod download;
pub mod error;
pub mod export;
pub mod session;
pub mod surface;

pub use download::save_artifact;
pub use error::{RenderError, RenderResult};
pub use export::{ExportArtifact, ExportConfig, ExportFormat, Exporter};
pub use session::GeneratorSession;
pub use surface::{render_symbol, Surface};

/// Renderer crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
