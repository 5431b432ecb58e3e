//! Generator session: form state wired to rendering and export.
//!
//! A [`GeneratorSession`] owns the form state, the currently rendered
//! surface (if any), and an exporter. Events flow in one direction: form
//! event, state transition, surface reconciliation. Exports read the
//! surface at the moment of invocation and never mutate it.

use std::path::{Path, PathBuf};

use linkqr_core::{FormEvent, GeneratorState};

use crate::download::save_artifact;
use crate::error::RenderResult;
use crate::export::{ExportArtifact, ExportConfig, ExportFormat, Exporter};
use crate::surface::{render_symbol, Surface};

/// A single-user generator session.
#[derive(Debug)]
pub struct GeneratorSession {
    state: GeneratorState,
    exporter: Exporter,
    surface: Option<Surface>,
}

impl GeneratorSession {
    /// Create a session with a fresh form state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GeneratorState::new(),
            exporter: Exporter::with_defaults(),
            surface: None,
        }
    }

    /// Apply a form event and reconcile the rendered surface.
    ///
    /// A commit with non-blank input renders a symbol; size and color picks
    /// re-render an already-committed symbol; clear drops it. Text edits
    /// never touch the surface (no live preview).
    ///
    /// # Errors
    ///
    /// Returns [`crate::RenderError::Encode`] if the committed value
    /// exceeds the symbol capacity.
    pub fn apply(&mut self, event: &FormEvent) -> RenderResult<()> {
        self.state.apply(event);

        let affects_surface = event.is_commit()
            || matches!(
                event,
                FormEvent::ClearRequested
                    | FormEvent::SizeSelected(_)
                    | FormEvent::ForegroundPicked(_)
                    | FormEvent::BackgroundPicked(_)
            );
        if affects_surface {
            self.exporter.set_background(self.state.background);
            self.reconcile()?;
        }
        Ok(())
    }

    /// Re-render the surface from the current state, or drop it when no
    /// value is committed.
    fn reconcile(&mut self) -> RenderResult<()> {
        self.surface = None;
        if let Some(value) = self.state.committed_value() {
            self.surface = Some(render_symbol(
                value,
                self.state.size,
                self.state.foreground,
                self.state.background,
            )?);
        }
        Ok(())
    }

    /// Export the rendered surface as a downloadable artifact.
    ///
    /// Returns `None` when nothing has been rendered yet, or when encoding
    /// fails; both are absorbed as no-ops and logged, mirroring a download
    /// button that simply does nothing.
    #[must_use]
    pub fn export(&self, format: ExportFormat) -> Option<ExportArtifact> {
        let Some(surface) = &self.surface else {
            tracing::debug!(?format, "export ignored: no rendered symbol");
            return None;
        };
        match self.exporter.export(surface, format) {
            Ok(artifact) => Some(artifact),
            Err(e) => {
                tracing::warn!(error = %e, ?format, "export failed");
                None
            }
        }
    }

    /// Export and save into `dir`. Returns the written path, or `Ok(None)`
    /// when there is nothing to export.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RenderError::Io`] if the write fails.
    pub fn export_to(&self, dir: &Path, format: ExportFormat) -> RenderResult<Option<PathBuf>> {
        match self.export(format) {
            Some(artifact) => save_artifact(&artifact, dir).map(Some),
            None => Ok(None),
        }
    }

    /// Whether an export would produce an artifact. Lets a caller disable
    /// the download controls.
    #[must_use]
    pub fn can_export(&self) -> bool {
        self.surface.is_some()
    }

    /// The form state.
    #[must_use]
    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    /// The currently rendered surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// The export configuration in effect.
    #[must_use]
    pub fn export_config(&self) -> &ExportConfig {
        self.exporter.config()
    }
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkqr_core::{Color, Phase, SymbolSize};

    fn input(text: &str) -> FormEvent {
        FormEvent::InputChanged(text.to_string())
    }

    #[test]
    fn test_commit_renders_surface() {
        let mut session = GeneratorSession::new();
        session.apply(&input("https://example.com")).expect("apply");
        assert!(session.surface().is_none());

        session.apply(&FormEvent::GenerateRequested).expect("apply");
        let surface = session.surface().expect("surface");
        assert_eq!(surface.width, 256);
        assert_eq!(session.state().phase(), Phase::Rendered);
    }

    #[test]
    fn test_blank_commit_renders_nothing() {
        let mut session = GeneratorSession::new();
        session.apply(&input("   ")).expect("apply");
        session.apply(&FormEvent::GenerateRequested).expect("apply");
        assert!(session.surface().is_none());
        assert!(!session.can_export());
    }

    #[test]
    fn test_text_edits_do_not_rerender() {
        let mut session = GeneratorSession::new();
        session.apply(&input("abc")).expect("apply");
        session.apply(&FormEvent::GenerateRequested).expect("apply");
        let before = session.surface().expect("surface").data.clone();

        session.apply(&input("something new")).expect("apply");
        assert_eq!(session.surface().expect("surface").data, before);
    }

    #[test]
    fn test_size_change_rerenders_committed_symbol() {
        let mut session = GeneratorSession::new();
        session.apply(&input("abc")).expect("apply");
        session.apply(&FormEvent::GenerateRequested).expect("apply");
        session
            .apply(&FormEvent::SizeSelected(SymbolSize::Large))
            .expect("apply");

        let surface = session.surface().expect("surface");
        assert_eq!(surface.width, 512);
        assert_eq!(surface.height, 512);
    }

    #[test]
    fn test_color_change_rerenders_committed_symbol() {
        let mut session = GeneratorSession::new();
        session.apply(&input("abc")).expect("apply");
        session.apply(&FormEvent::GenerateRequested).expect("apply");

        let fg = Color::rgb(0, 0, 200);
        session.apply(&FormEvent::ForegroundPicked(fg)).expect("apply");
        let surface = session.surface().expect("surface");
        let pixels: Vec<[u8; 4]> = surface.data.chunks_exact(4).map(|p| [p[0], p[1], p[2], p[3]]).collect();
        assert!(pixels.contains(&fg.to_bytes()));
    }

    #[test]
    fn test_clear_drops_surface() {
        let mut session = GeneratorSession::new();
        session.apply(&input("abc")).expect("apply");
        session.apply(&FormEvent::GenerateRequested).expect("apply");
        assert!(session.can_export());

        session.apply(&FormEvent::ClearRequested).expect("apply");
        assert!(session.surface().is_none());
        assert!(session.export(ExportFormat::Png).is_none());
    }

    #[test]
    fn test_export_before_generate_is_noop() {
        let session = GeneratorSession::new();
        for format in [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Svg] {
            assert!(session.export(format).is_none());
        }
    }

    #[test]
    fn test_export_after_commit() {
        let mut session = GeneratorSession::new();
        session.apply(&input("abc")).expect("apply");
        session
            .apply(&FormEvent::KeyPressed {
                key: "Enter".to_string(),
            })
            .expect("apply");

        let artifact = session.export(ExportFormat::Png).expect("artifact");
        assert_eq!(artifact.file_name, "qrcode.png");
        assert_eq!(&artifact.bytes[0..4], &[137, 80, 78, 71]);
    }

    #[test]
    fn test_export_to_writes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut session = GeneratorSession::new();
        session.apply(&input("abc")).expect("apply");
        session.apply(&FormEvent::GenerateRequested).expect("apply");

        let path = session
            .export_to(dir.path(), ExportFormat::Jpeg)
            .expect("export_to")
            .expect("path");
        assert_eq!(path, dir.path().join("qrcode.jpg"));
    }

    #[test]
    fn test_export_to_without_surface() {
        let dir = tempfile::tempdir().expect("tempdir");
        let session = GeneratorSession::new();
        let result = session
            .export_to(dir.path(), ExportFormat::Png)
            .expect("export_to");
        assert!(result.is_none());
        assert!(!dir.path().join("qrcode.png").exists());
    }

    #[test]
    fn test_background_pick_flows_into_jpeg_flattening() {
        let mut session = GeneratorSession::new();
        session.apply(&input("abc")).expect("apply");
        session.apply(&FormEvent::GenerateRequested).expect("apply");

        let bg = Color::rgba(0, 128, 255, 64);
        session.apply(&FormEvent::BackgroundPicked(bg)).expect("apply");
        assert_eq!(session.export_config().background, bg);

        let artifact = session.export(ExportFormat::Jpeg).expect("jpeg");
        let decoded = image::load_from_memory(&artifact.bytes).expect("decode");
        assert!(decoded.to_rgba8().pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_oversized_commit_propagates_encode_error() {
        let mut session = GeneratorSession::new();
        session.apply(&input(&"x".repeat(3000))).expect("apply");
        let result = session.apply(&FormEvent::GenerateRequested);
        assert!(result.is_err());
        // No stale surface survives a failed render.
        assert!(session.surface().is_none());
    }
}
