/// Named mood presets — RON-backed (directive, mood) pairs.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::directive::ArtDirective;
use crate::schema::mood::MoodParameters;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// A saved pairing of art direction and mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub directive: ArtDirective,
    pub mood: MoodParameters,
}

/// A set of named presets.
#[derive(Debug, Clone, Default)]
pub struct PresetBook {
    presets: FxHashMap<String, Preset>,
}

impl PresetBook {
    /// Load presets from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<PresetBook, PresetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse presets from a RON map of name → `(directive: ..., mood: ...)`.
    pub fn parse_ron(input: &str) -> Result<PresetBook, PresetError> {
        let presets: FxHashMap<String, Preset> = ron::from_str(input)?;
        Ok(PresetBook { presets })
    }

    /// Merge another book into this one. Presets from `other` override
    /// presets in `self` with the same name.
    pub fn merge(&mut self, other: PresetBook) {
        self.presets.extend(other.presets);
    }

    pub fn insert(&mut self, name: impl Into<String>, preset: Preset) {
        self.presets.insert(name.into(), preset);
    }

    pub fn get(&self, name: &str) -> Result<&Preset, PresetError> {
        self.presets
            .get(name)
            .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Preset)> {
        self.presets.iter().map(|(name, preset)| (name.as_str(), preset))
    }
}
