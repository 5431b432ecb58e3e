//! Generate a QR code for a link and save it in all three formats.
//!
//! Usage: cargo run --example generate_and_export

use linkqr_core::{Color, FormEvent, SymbolSize};
use linkqr_renderer::{ExportFormat, GeneratorSession, RenderResult};

fn main() -> RenderResult<()> {
    tracing_subscriber::fmt::init();

    let mut session = GeneratorSession::new();
    session.apply(&FormEvent::InputChanged(
        "https://maps.google.com/?q=somewhere".to_string(),
    ))?;
    session.apply(&FormEvent::SizeSelected(SymbolSize::Large))?;
    session.apply(&FormEvent::ForegroundPicked(Color::from_hex("#1A237E").expect("hex")))?;
    session.apply(&FormEvent::GenerateRequested)?;

    let dir = std::path::Path::new("generated");
    for format in [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Svg] {
        if let Some(path) = session.export_to(dir, format)? {
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
