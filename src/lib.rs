//! Mood Canvas — procedural vector art from emotional parameters.
//!
//! Turns a style tag, a color palette, an intensity and an energy level
//! into a self-contained SVG document using local geometry only: seeded
//! randomness, style-specific composition strategies, and organic curve
//! synthesis. No network calls and no raster encoding.

pub mod core;
pub mod schema;
