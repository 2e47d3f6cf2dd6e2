use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::color::Rgb;

/// Color used when the palette is empty.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// The four composition strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArtStyle {
    Expressionist,
    Minimalist,
    Surreal,
    Abstract,
}

impl ArtStyle {
    pub const ALL: [ArtStyle; 4] = [
        Self::Expressionist,
        Self::Minimalist,
        Self::Surreal,
        Self::Abstract,
    ];

    /// Case-insensitive lookup. Anything unrecognized, including names with
    /// surrounding whitespace, maps to `Abstract`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "expressionist" => Self::Expressionist,
            "minimalist" => Self::Minimalist,
            "surreal" => Self::Surreal,
            _ => Self::Abstract,
        }
    }

    /// Returns true if `name` names one of the four styles exactly
    /// (ignoring case), rather than falling back.
    pub fn is_known(name: &str) -> bool {
        Self::ALL
            .iter()
            .any(|style| style.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Expressionist => "expressionist",
            Self::Minimalist => "minimalist",
            Self::Surreal => "surreal",
            Self::Abstract => "abstract",
        }
    }
}

impl From<String> for ArtStyle {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<ArtStyle> for String {
    fn from(style: ArtStyle) -> String {
        style.name().to_string()
    }
}

impl fmt::Display for ArtStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered color list. Index 0 is the background; every lookup wraps
/// around the palette length.
///
/// Entries are passed through verbatim; malformed colors are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(colors.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    /// Color for the `index`-th element, cycling through the palette.
    /// An empty palette yields [`DEFAULT_COLOR`].
    pub fn color(&self, index: usize) -> &str {
        if self.0.is_empty() {
            return DEFAULT_COLOR;
        }
        &self.0[index % self.0.len()]
    }

    pub fn background(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or(DEFAULT_COLOR)
    }

    /// Entries that do not parse as hex colors.
    pub fn malformed(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|c| Rgb::from_hex(c).is_none())
            .collect()
    }
}

/// Art direction supplied by the art-prompt collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtDirective {
    /// Raw style label as supplied; resolved through [`ArtStyle::from_name`].
    #[serde(alias = "artStyle")]
    pub style: String,
    #[serde(rename = "colorPalette", default)]
    pub color_palette: Palette,
}

impl ArtDirective {
    pub fn new(style: impl Into<String>, color_palette: Palette) -> Self {
        Self {
            style: style.into(),
            color_palette,
        }
    }

    pub fn art_style(&self) -> ArtStyle {
        ArtStyle::from_name(&self.style)
    }
}
