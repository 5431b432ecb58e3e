//! Generator form state management.
//!
//! The form is a two-phase state machine: [`Phase::Empty`] until a non-blank
//! input is committed, [`Phase::Rendered`] while a committed value exists.
//! Display options (size, colors) are orthogonal to the phase and never
//! trigger a commit on their own.

use serde::{Deserialize, Serialize};

use crate::{Color, FormEvent, SymbolSize};

/// Observable phase of the generator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No committed value; nothing to render or export.
    Empty,
    /// A committed value exists and a symbol is displayed.
    Rendered,
}

/// The complete generator form state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorState {
    /// Free text as currently typed; never validated.
    raw_input: String,
    /// The committed value being encoded; empty in [`Phase::Empty`].
    committed: String,
    /// Output edge length.
    pub size: SymbolSize,
    /// Module (dark) color.
    pub foreground: Color,
    /// Background (light) color.
    pub background: Color,
}

impl GeneratorState {
    /// Create a fresh form state: empty input, 256px, black on white.
    #[must_use]
    pub fn new() -> Self {
        Self {
            raw_input: String::new(),
            committed: String::new(),
            size: SymbolSize::default(),
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }

    /// Apply a single input event.
    pub fn apply(&mut self, event: &FormEvent) {
        if event.is_commit() {
            self.generate();
            return;
        }

        match event {
            FormEvent::InputChanged(text) => self.update_input(text.clone()),
            FormEvent::ClearRequested => self.clear(),
            FormEvent::SizeSelected(size) => self.set_size(*size),
            FormEvent::ForegroundPicked(color) => self.set_foreground(*color),
            FormEvent::BackgroundPicked(color) => self.set_background(*color),
            // Non-commit keys and commit variants already handled above.
            FormEvent::KeyPressed { .. } | FormEvent::GenerateRequested => {}
        };
    }

    /// Replace the raw input text. No validation, no other effects.
    pub fn update_input(&mut self, text: String) {
        self.raw_input = text;
    }

    /// Commit the trimmed input as the value to encode.
    ///
    /// A blank (empty or whitespace-only) input is a silent no-op; the UI
    /// disables the trigger in that case, but the state machine must
    /// tolerate the call regardless.
    pub fn generate(&mut self) {
        let trimmed = self.raw_input.trim();
        if trimmed.is_empty() {
            tracing::debug!("generate ignored: blank input");
            return;
        }
        self.committed = trimmed.to_string();
        tracing::debug!(value = %self.committed, "committed input");
    }

    /// Reset both the input and the committed value, discarding any
    /// rendered symbol.
    pub fn clear(&mut self) {
        self.raw_input.clear();
        self.committed.clear();
    }

    /// Set the output size. Takes effect on the next render; the committed
    /// value is untouched.
    pub fn set_size(&mut self, size: SymbolSize) {
        self.size = size;
    }

    /// Set the module color. Takes effect on the next render.
    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    /// Set the background color. Takes effect on the next render.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// The raw input as currently typed.
    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// The committed value, if a generate action has succeeded.
    #[must_use]
    pub fn committed_value(&self) -> Option<&str> {
        if self.committed.is_empty() {
            None
        } else {
            Some(&self.committed)
        }
    }

    /// Whether a generate action would commit (non-blank input). Lets a
    /// caller disable the trigger control.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.raw_input.trim().is_empty()
    }

    /// Current phase of the form.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.committed.is_empty() {
            Phase::Empty
        } else {
            Phase::Rendered
        }
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new()
    }
}
