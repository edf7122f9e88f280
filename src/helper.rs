//! High-level convenience for encoding text and rendering it in one call,
//! plus the crate error type.

use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

use crate::grid::ModuleGrid;
use crate::render::{render, RenderOptions, SvgData};

/// Errors returned by this crate.
///
/// Rendering itself never fails; the only fallible step is handing the
/// content to the QR encoder.
#[derive(Debug, Error)]
pub enum Error {
    /// The QR encoder rejected the content (too long for any version at
    /// the requested error correction level, or not encodable).
    #[error("QR encoding failed: {0}")]
    Encode(#[from] QrError),
}

/// Convenience alias for results with the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Encodes `content` as a QR symbol and renders it to SVG path data.
///
/// # Arguments
///
/// * `content` - The content to encode into the QR Code.
/// * `level` - Optional error correction level. Defaults to Medium.
/// * `options` - Rendering options (logical size, excavation, styles).
///
/// # Errors
///
/// Returns [`Error::Encode`] if the content cannot be encoded, for example
/// when it exceeds the capacity of the largest symbol version at the
/// requested error correction level.
///
/// # Example
///
/// ```rust
/// use qrsvg::helper::generate_svg_data;
/// use qrsvg::render::RenderOptions;
///
/// let svg = generate_svg_data("https://example.com", None, &RenderOptions::default()).unwrap();
/// let document = format!(
///     r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {0} {0}"><path d="{1}"/></svg>"#,
///     svg.length, svg.path,
/// );
/// assert!(document.contains("<path"));
/// ```
pub fn generate_svg_data(
    content: &str,
    level: Option<EcLevel>,
    options: &RenderOptions,
) -> Result<SvgData> {
    let code = match level {
        Some(level) => QrCode::with_error_correction_level(content, level)?,
        None => QrCode::new(content)?,
    };
    let grid = ModuleGrid::from(&code);
    Ok(render(&grid, options))
}
