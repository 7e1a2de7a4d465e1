use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::ZapError;

pub const INTENSITY_MIN: i64 = 1;
pub const INTENSITY_MAX: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StimulusType {
    #[default]
    Zap,
    Vibe,
    Beep,
}

impl StimulusType {
    pub const ALL: [StimulusType; 3] = [StimulusType::Zap, StimulusType::Vibe, StimulusType::Beep];

    pub fn as_str(&self) -> &'static str {
        match self {
            StimulusType::Zap => "zap",
            StimulusType::Vibe => "vibe",
            StimulusType::Beep => "beep",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StimulusType::Zap => "Zap",
            StimulusType::Vibe => "Vibe",
            StimulusType::Beep => "Beep",
        }
    }

    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(StimulusType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for StimulusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive.
impl FromStr for StimulusType {
    type Err = ZapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zap" => Ok(StimulusType::Zap),
            "vibe" => Ok(StimulusType::Vibe),
            "beep" => Ok(StimulusType::Beep),
            other => Err(ZapError::InvalidStimulusType {
                given: other.to_string(),
            }),
        }
    }
}

/// Stimulus strength, always within `INTENSITY_MIN..=INTENSITY_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Intensity(u8);

impl Intensity {
    pub const DEFAULT: Intensity = Intensity(50);

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Intensity {
    type Error = ZapError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(INTENSITY_MIN..=INTENSITY_MAX).contains(&value) {
            return Err(ZapError::IntensityOutOfRange {
                given: value.to_string(),
            });
        }
        // In range, so it fits.
        Ok(Intensity(value as u8))
    }
}

/// An integer read from the command line, not yet range-checked.
///
/// `value` is `None` when the number does not fit in an i64; such input is
/// still a number and fails the range check, not the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncheckedIntensity {
    value: Option<i64>,
    text: String,
}

impl FromStr for UncheckedIntensity {
    type Err = ZapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use std::num::IntErrorKind;

        let trimmed = s.trim();
        let value = match trimmed.parse::<i64>() {
            Ok(value) => Some(value),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                None
            }
            Err(_) => {
                return Err(ZapError::InvalidIntensity {
                    given: s.to_string(),
                })
            }
        };

        Ok(Self {
            value,
            text: trimmed.to_string(),
        })
    }
}

impl TryFrom<UncheckedIntensity> for Intensity {
    type Error = ZapError;

    fn try_from(unchecked: UncheckedIntensity) -> Result<Self, Self::Error> {
        match unchecked.value {
            Some(value) => Intensity::try_from(value),
            None => Err(ZapError::IntensityOutOfRange {
                given: unchecked.text,
            }),
        }
    }
}

/// Parse and range check in one step.
impl FromStr for Intensity {
    type Err = ZapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::try_from(s.parse::<UncheckedIntensity>()?)
    }
}

/// A validated stimulus, consumed by a single send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StimulusRequest {
    pub stimulus_type: StimulusType,
    pub intensity: Intensity,
}

impl StimulusRequest {
    pub fn new(stimulus_type: StimulusType, intensity: Intensity) -> Self {
        Self {
            stimulus_type,
            intensity,
        }
    }

    /// The wire body: `{"stimulus":{"stimulusType":..,"stimulusValue":..}}`.
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "stimulus": {
                "stimulusType": self.stimulus_type.as_str(),
                "stimulusValue": self.intensity.value(),
            }
        })
    }
}

/// Whatever JSON document the API answered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(pub serde_json::Value);

impl ApiResponse {
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}
