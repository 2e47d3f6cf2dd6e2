/// The mood-to-art orchestrator: directive + mood → SVG document.
///
/// Builds the background, dispatches to the style strategy, declares the
/// blur and rough-paper filters, and wraps the result with metadata.
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::preset::PresetError;
use crate::core::styles::Dials;
use crate::core::svg::{Document, Filter};
use crate::schema::directive::ArtDirective;
use crate::schema::element::{Canvas, Element};
use crate::schema::mood::{EnergyLevel, Intensity, MoodError, MoodParameters};

/// Gallery thumbnail size.
pub const THUMBNAIL_WIDTH: u32 = 200;
pub const THUMBNAIL_HEIGHT: u32 = 150;

/// Prime offset between derived variant seeds.
const VARIANT_SEED_STRIDE: u64 = 7919;

#[derive(Debug, Error)]
pub enum ArtError {
    #[error("invalid mood parameters: {0}")]
    Mood(#[from] MoodError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("preset error: {0}")]
    Preset(#[from] PresetError),
}

/// Record of the inputs an artwork was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtMetadata {
    /// Style label exactly as supplied, before fallback resolution.
    pub style: String,
    pub colors: Vec<String>,
    pub emotion: String,
    pub intensity: Intensity,
    pub energy: EnergyLevel,
    pub generated_at: DateTime<Utc>,
}

/// A finished artwork. Owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArt {
    #[serde(rename = "svg")]
    pub markup: String,
    pub metadata: ArtMetadata,
}

impl GeneratedArt {
    /// Resize by rewriting the root element's `width`/`height` attributes.
    /// The root's `viewBox` keeps the drawing scaled rather than cropped.
    pub fn thumbnail(&self, width: u32, height: u32) -> String {
        let resized = replace_first_attr(&self.markup, "width", width);
        replace_first_attr(&resized, "height", height)
    }

    pub fn gallery_thumbnail(&self) -> String {
        self.thumbnail(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT)
    }

    pub fn to_json(&self) -> Result<String, ArtError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Replace the value of the first ` attr="<digits>"` occurrence.
fn replace_first_attr(markup: &str, attr: &str, value: u32) -> String {
    let needle = format!(" {}=\"", attr);
    let mut search_from = 0;
    while let Some(offset) = markup[search_from..].find(&needle) {
        let value_start = search_from + offset + needle.len();
        let digits = markup[value_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits > 0 && markup[value_start + digits..].starts_with('"') {
            return format!(
                "{}{}{}",
                &markup[..value_start],
                value,
                &markup[value_start + digits..]
            );
        }
        search_from = value_start;
    }
    markup.to_string()
}

/// Assemble the full document for one artwork, drawing randomness from `rng`.
pub fn compose_document<R: Rng + ?Sized>(
    directive: &ArtDirective,
    mood: &MoodParameters,
    canvas: Canvas,
    rng: &mut R,
) -> Document {
    let style = directive.art_style();
    let palette = &directive.color_palette;
    let dials = Dials {
        intensity: mood.emotion_intensity.as_f64(),
        energy: mood.energy_level.multiplier(),
    };

    let mut doc = Document::new(canvas);
    doc.filters.push(Filter::blur_for_intensity(dials.intensity));
    doc.filters.push(Filter::rough_paper());
    doc.elements.push(Element::background(palette.background()));

    let shapes = style.compose(palette, dials, canvas, rng);
    debug!(
        requested = %directive.style,
        resolved = %style,
        intensity = dials.intensity,
        energy = dials.energy,
        elements = shapes.len(),
        "composed artwork"
    );
    doc.elements.extend(shapes);
    doc
}

/// Generate an artwork on the default 800×600 canvas.
pub fn generate<R: Rng + ?Sized>(
    directive: &ArtDirective,
    mood: &MoodParameters,
    rng: &mut R,
) -> GeneratedArt {
    generate_on(directive, mood, Canvas::DEFAULT, rng)
}

fn generate_on<R: Rng + ?Sized>(
    directive: &ArtDirective,
    mood: &MoodParameters,
    canvas: Canvas,
    rng: &mut R,
) -> GeneratedArt {
    let markup = compose_document(directive, mood, canvas, rng).render();
    GeneratedArt {
        markup,
        metadata: ArtMetadata {
            style: directive.style.clone(),
            colors: directive.color_palette.colors().to_vec(),
            emotion: mood.primary_emotion.clone(),
            intensity: mood.emotion_intensity,
            energy: mood.energy_level,
            generated_at: Utc::now(),
        },
    }
}

/// Holds canvas and seeding policy. Built via `ArtGenerator::builder()`.
///
/// Stateless across calls: a seeded generator returns the same markup for
/// the same inputs every time, an unseeded one draws fresh OS entropy.
#[derive(Debug, Clone)]
pub struct ArtGenerator {
    canvas: Canvas,
    seed: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct ArtGeneratorBuilder {
    canvas: Option<Canvas>,
    seed: Option<u64>,
}

impl ArtGenerator {
    pub fn builder() -> ArtGeneratorBuilder {
        ArtGeneratorBuilder::default()
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generate(&self, directive: &ArtDirective, mood: &MoodParameters) -> GeneratedArt {
        let mut rng = self.rng_for(0);
        self.generate_with_rng(directive, mood, &mut rng)
    }

    /// Generate using a caller-supplied randomness source.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        directive: &ArtDirective,
        mood: &MoodParameters,
        rng: &mut R,
    ) -> GeneratedArt {
        generate_on(directive, mood, self.canvas, rng)
    }

    /// Generate `count` independent artworks for the same inputs.
    pub fn generate_variants(
        &self,
        directive: &ArtDirective,
        mood: &MoodParameters,
        count: usize,
    ) -> Vec<GeneratedArt> {
        (0..count)
            .map(|i| {
                let mut rng = self.rng_for(i as u64);
                self.generate_with_rng(directive, mood, &mut rng)
            })
            .collect()
    }

    /// Parse collaborator JSON for both inputs, then generate.
    pub fn generate_from_json(
        &self,
        directive_json: &str,
        mood_json: &str,
    ) -> Result<GeneratedArt, ArtError> {
        let directive: ArtDirective = serde_json::from_str(directive_json)?;
        let mood: MoodParameters = serde_json::from_str(mood_json)?;
        Ok(self.generate(&directive, &mood))
    }

    fn rng_for(&self, variant: u64) -> StdRng {
        match self.seed {
            Some(seed) => {
                let derived = seed.wrapping_add(variant.wrapping_mul(VARIANT_SEED_STRIDE));
                trace!(seed, derived, "seeding generator");
                StdRng::seed_from_u64(derived)
            }
            None => StdRng::from_entropy(),
        }
    }
}

impl ArtGeneratorBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn build(self) -> ArtGenerator {
        ArtGenerator {
            canvas: self.canvas.unwrap_or_default(),
            seed: self.seed,
        }
    }
}
