//! # qrsvg
//!
//! A Rust library for rendering QR codes as SVG vector paths.
//!
//! `qrsvg` turns an encoded QR symbol into a single SVG path string with
//! stylized modules: isolated modules become dots, runs of modules get
//! neighbor-aware rounded corners, and the three finder patterns ("eyes")
//! are drawn from one template reflected into place. A centered area of the
//! symbol can be excavated to leave room for an overlaid logo. Encoding
//! itself is delegated to the `qrcode` crate; this library only renders.
//!
//! ## Features
//!
//! - Render a module grid to one composable SVG path string.
//! - Neighbor-aware module rounding, or plain square/circle bodies.
//! - Independent square/rounded styling for eyeballs and eyeframes.
//! - Excavate a centered rectangle for logo overlays.
//! - Optional `serde` feature for (de)serializing the public data types.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrsvg = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Render a QR code with space excavated for a logo:
//!
//! ```rust
//! use qrsvg::grid::Excavate;
//! use qrsvg::helper::generate_svg_data;
//! use qrsvg::render::RenderOptions;
//!
//! let options = RenderOptions {
//!     size: Some(200.0),
//!     excavate: Some(Excavate { width: 50.0, height: 50.0 }),
//!     ..RenderOptions::default()
//! };
//! let svg = generate_svg_data("https://example.com", None, &options).unwrap();
//!
//! // One path unit is one module; scale with a viewBox of the grid length.
//! let document = format!(
//!     r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 {0} {0}"><path d="{1}"/></svg>"#,
//!     svg.length, svg.path,
//! );
//! assert!(document.starts_with("<svg"));
//! ```
//!
//! Render a grid you already have:
//!
//! ```rust
//! use qrsvg::grid::ModuleGrid;
//! use qrsvg::render::{render, RenderOptions};
//!
//! let grid = ModuleGrid::new(21, vec![false; 21 * 21]);
//! let svg = render(&grid, &RenderOptions::default());
//! assert_eq!(svg.length, 21);
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: Module grid storage, neighbor reads, and excavation.
//! - [`shapes`]: Body tile and eye shape catalog and styles.
//! - [`render`]: Grid traversal and path assembly.
//! - [`helper`]: One-call encoding plus rendering, and the error type.

#![forbid(unsafe_code)]

pub mod grid;
pub mod helper;
pub mod render;
pub mod shapes;
