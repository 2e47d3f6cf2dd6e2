pub mod directive;
pub mod element;
pub mod mood;
