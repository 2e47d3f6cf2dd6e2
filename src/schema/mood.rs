use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodError {
    #[error("emotion intensity must be between 1 and 10, got {0}")]
    IntensityOutOfRange(i64),
    #[error("emotion intensity must be an integer, got '{0}'")]
    NonNumericIntensity(String),
    #[error("unknown energy level: '{0}'")]
    UnknownEnergyLevel(String),
}

/// Emotion intensity on the 1–10 scale produced by mood analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, MoodError> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(MoodError::IntensityOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The intensity as a numeric dial for the composition formulas.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl TryFrom<i64> for Intensity {
    type Error = MoodError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Intensity {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| MoodError::NonNumericIntensity(s.to_string()))?;
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> u8 {
        intensity.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Energy level label. Each label maps to a numeric multiplier
/// (1 for very-low up to 5 for very-high) used by the style strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EnergyLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl EnergyLevel {
    pub const ALL: [EnergyLevel; 5] = [
        Self::VeryLow,
        Self::Low,
        Self::Moderate,
        Self::High,
        Self::VeryHigh,
    ];

    /// Wire label: "very-low", "low", "moderate", "high", "very-high".
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "very-low",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::VeryLow => 1.0,
            Self::Low => 2.0,
            Self::Moderate => 3.0,
            Self::High => 4.0,
            Self::VeryHigh => 5.0,
        }
    }
}

impl FromStr for EnergyLevel {
    type Err = MoodError;

    /// Exact match against the wire labels; no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.label() == s)
            .ok_or_else(|| MoodError::UnknownEnergyLevel(s.to_string()))
    }
}

impl TryFrom<String> for EnergyLevel {
    type Error = MoodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EnergyLevel> for String {
    fn from(level: EnergyLevel) -> String {
        level.label().to_string()
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured output of mood analysis, consumed as-is by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodParameters {
    pub primary_emotion: String,
    pub emotion_intensity: Intensity,
    pub energy_level: EnergyLevel,
}

impl MoodParameters {
    /// Build from raw collaborator values, validating intensity and energy label.
    pub fn new(
        primary_emotion: impl Into<String>,
        emotion_intensity: i64,
        energy_level: &str,
    ) -> Result<Self, MoodError> {
        Ok(Self {
            primary_emotion: primary_emotion.into(),
            emotion_intensity: Intensity::new(emotion_intensity)?,
            energy_level: energy_level.parse()?,
        })
    }

    /// Gallery thumbnails are rendered at moderate energy regardless of
    /// the recorded level.
    pub fn for_thumbnail(&self) -> Self {
        Self {
            energy_level: EnergyLevel::Moderate,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_bounds() {
        assert!(Intensity::new(1).is_ok());
        assert!(Intensity::new(10).is_ok());
        assert_eq!(Intensity::new(0), Err(MoodError::IntensityOutOfRange(0)));
        assert_eq!(Intensity::new(11), Err(MoodError::IntensityOutOfRange(11)));
        assert_eq!(Intensity::new(7).unwrap().as_f64(), 7.0);
    }

    #[test]
    fn intensity_from_str() {
        assert_eq!("4".parse::<Intensity>().map(Intensity::get), Ok(4));
        assert_eq!(
            "loud".parse::<Intensity>(),
            Err(MoodError::NonNumericIntensity("loud".to_string()))
        );
        assert_eq!("12".parse::<Intensity>(), Err(MoodError::IntensityOutOfRange(12)));
    }

    #[test]
    fn energy_multipliers() {
        assert_eq!(EnergyLevel::VeryLow.multiplier(), 1.0);
        assert_eq!(EnergyLevel::Moderate.multiplier(), 3.0);
        assert_eq!(EnergyLevel::VeryHigh.multiplier(), 5.0);
    }

    #[test]
    fn energy_parse_labels() {
        assert_eq!("very-low".parse::<EnergyLevel>(), Ok(EnergyLevel::VeryLow));
        for label in ["very-low", "low", "moderate", "high", "very-high"] {
            assert_eq!(label.parse::<EnergyLevel>().map(|l| l.label()), Ok(label));
        }
        assert_eq!(
            "frantic".parse::<EnergyLevel>(),
            Err(MoodError::UnknownEnergyLevel("frantic".to_string()))
        );
    }

    #[test]
    fn energy_labels_are_not_coerced() {
        for label in ["Moderate", "very_high", "VERY_HIGH", " moderate ", "veryhigh"] {
            assert_eq!(
                label.parse::<EnergyLevel>(),
                Err(MoodError::UnknownEnergyLevel(label.to_string())),
                "{label:?}"
            );
        }
        assert!(MoodParameters::new("calm", 3, "Low").is_err());
    }

    #[test]
    fn mood_from_json_wire_names() {
        let json = r#"{"primaryEmotion":"calm","emotionIntensity":3,"energyLevel":"low"}"#;
        let mood: MoodParameters = serde_json::from_str(json).unwrap();
        assert_eq!(mood.primary_emotion, "calm");
        assert_eq!(mood.emotion_intensity.get(), 3);
        assert_eq!(mood.energy_level, EnergyLevel::Low);

        let back = serde_json::to_string(&mood).unwrap();
        assert!(back.contains(r#""energyLevel":"low""#));
        assert!(back.contains(r#""emotionIntensity":3"#));
    }

    #[test]
    fn mood_json_rejects_bad_input() {
        let non_numeric =
            r#"{"primaryEmotion":"calm","emotionIntensity":"high","energyLevel":"low"}"#;
        assert!(serde_json::from_str::<MoodParameters>(non_numeric).is_err());

        let out_of_range = r#"{"primaryEmotion":"calm","emotionIntensity":42,"energyLevel":"low"}"#;
        assert!(serde_json::from_str::<MoodParameters>(out_of_range).is_err());

        let bad_energy =
            r#"{"primaryEmotion":"calm","emotionIntensity":3,"energyLevel":"frantic"}"#;
        assert!(serde_json::from_str::<MoodParameters>(bad_energy).is_err());

        let near_miss =
            r#"{"primaryEmotion":"calm","emotionIntensity":3,"energyLevel":"Very_Low"}"#;
        let err = serde_json::from_str::<MoodParameters>(near_miss).unwrap_err();
        assert!(err.to_string().contains("unknown energy level: 'Very_Low'"));
    }

    #[test]
    fn thumbnail_mood_is_moderate() {
        let mood = MoodParameters::new("joy", 8, "very-high").unwrap();
        let thumb = mood.for_thumbnail();
        assert_eq!(thumb.energy_level, EnergyLevel::Moderate);
        assert_eq!(thumb.emotion_intensity, mood.emotion_intensity);
        assert_eq!(thumb.primary_emotion, "joy");
    }
}
