//! WASM bindings for mood-canvas — renders artwork in the browser.

use wasm_bindgen::prelude::*;

use mood_canvas::core::generator::ArtGenerator;
use mood_canvas::core::preset::PresetBook;
use mood_canvas::schema::directive::{ArtDirective, ArtStyle, Palette};
use mood_canvas::schema::mood::{EnergyLevel, MoodParameters};

// ---------------------------------------------------------------------------
// Embedded preset data — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const MOOD_PRESETS: &str = include_str!("../../presets/moods.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtRequest {
    #[serde(alias = "artStyle")]
    style: String,
    #[serde(default)]
    color_palette: Vec<String>,
    primary_emotion: String,
    emotion_intensity: i64,
    energy_level: String,
}

#[derive(serde::Serialize)]
struct PresetInfo {
    name: String,
    style: String,
    emotion: String,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------
fn parse_request(json: &str) -> Result<(ArtDirective, MoodParameters), JsError> {
    let request: ArtRequest = serde_json::from_str(json)
        .map_err(|e| JsError::new(&format!("Invalid request JSON: {e}")))?;
    let directive = ArtDirective::new(
        request.style,
        Palette::new(request.color_palette),
    );
    let mood = MoodParameters::new(
        request.primary_emotion,
        request.emotion_intensity,
        &request.energy_level,
    )
    .map_err(|e| JsError::new(&format!("Invalid mood: {e}")))?;
    Ok((directive, mood))
}

// ---------------------------------------------------------------------------
// MoodCanvas — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct MoodCanvas {
    generator: ArtGenerator,
    presets: PresetBook,
}

#[wasm_bindgen]
impl MoodCanvas {
    /// Create a seeded canvas. The same seed and request always render
    /// the same SVG.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<MoodCanvas, JsError> {
        let presets = PresetBook::parse_ron(data::MOOD_PRESETS)
            .map_err(|e| JsError::new(&format!("Preset parse error: {e}")))?;
        Ok(MoodCanvas {
            generator: ArtGenerator::builder().seed(seed).build(),
            presets,
        })
    }

    /// Render an artwork from a flat JSON request. Returns JSON with
    /// `svg` and `metadata`.
    ///
    /// Expected JSON shape:
    /// ```json
    /// {
    ///   "style": "surreal",
    ///   "colorPalette": ["#fef6e4", "#f582ae"],
    ///   "primaryEmotion": "wonder",
    ///   "emotionIntensity": 5,
    ///   "energyLevel": "moderate"
    /// }
    /// ```
    pub fn render(&self, request_json: &str) -> Result<String, JsError> {
        let (directive, mood) = parse_request(request_json)?;
        self.generator
            .generate(&directive, &mood)
            .to_json()
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Render a 200×150 gallery thumbnail SVG at moderate energy.
    pub fn thumbnail(&self, request_json: &str) -> Result<String, JsError> {
        let (directive, mood) = parse_request(request_json)?;
        Ok(self
            .generator
            .generate(&directive, &mood.for_thumbnail())
            .gallery_thumbnail())
    }

    /// Render `count` variants. Returns a JSON array of SVG strings.
    pub fn render_variants(&self, request_json: &str, count: usize) -> Result<String, JsError> {
        let (directive, mood) = parse_request(request_json)?;
        let svgs: Vec<String> = self
            .generator
            .generate_variants(&directive, &mood, count)
            .into_iter()
            .map(|art| art.markup)
            .collect();
        serde_json::to_string(&svgs)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Render a built-in preset by name. Returns the SVG string.
    pub fn render_preset(&self, name: &str) -> Result<String, JsError> {
        let preset = self
            .presets
            .get(name)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(self
            .generator
            .generate(&preset.directive, &preset.mood)
            .markup)
    }

    /// Return a JSON array describing the built-in presets.
    pub fn presets(&self) -> String {
        let info: Vec<PresetInfo> = self
            .presets
            .names()
            .into_iter()
            .filter_map(|name| {
                let preset = self.presets.get(name).ok()?;
                Some(PresetInfo {
                    name: name.to_string(),
                    style: preset.directive.art_style().to_string(),
                    emotion: preset.mood.primary_emotion.clone(),
                })
            })
            .collect();
        serde_json::to_string(&info).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of style names.
    pub fn styles() -> String {
        let names: Vec<&str> = ArtStyle::ALL.iter().map(ArtStyle::name).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of energy level labels.
    pub fn energy_levels() -> String {
        let labels: Vec<&str> = EnergyLevel::ALL.iter().map(EnergyLevel::label).collect();
        serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string())
    }

    /// Reseed the generator.
    pub fn reset(&mut self, seed: u64) {
        self.generator = ArtGenerator::builder().seed(seed).build();
    }
}
