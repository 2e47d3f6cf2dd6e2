pub mod color;
pub mod generator;
pub mod geometry;
pub mod preset;
pub mod styles;
pub mod svg;
