//! # Linkqr Core
//!
//! Form state machine for the linkqr generator: a user types a link,
//! commits it with Generate (or Enter), and styles the resulting QR symbol
//! with a fixed size menu and two color pickers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                linkqr-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Form Events     │  State Machine           │
//! │  - text edits    │  - Empty / Rendered      │
//! │  - Enter commit  │  - commit on generate    │
//! │  - option picks  │  - reset on clear        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Rendering and export live in `linkqr-renderer`; this crate holds no
//! image or I/O dependencies so the state machine stays trivially testable.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod error;
pub mod event;
pub mod size;
pub mod state;

pub use color::Color;
pub use error::{CoreError, CoreResult};
pub use event::{FormEvent, COMMIT_KEY};
pub use size::SymbolSize;
pub use state::{GeneratorState, Phase};

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
