use std::time::Duration;

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::constants::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontSize {
    Small,
    #[default]
    Large,
}

impl FontSize {
    fn from_hint(hint: &str) -> Self {
        if hint.trim().eq_ignore_ascii_case("small") {
            FontSize::Small
        } else {
            FontSize::Large
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GaugeConfig {
    pub circle_gap_deg: f64,
    pub circle_thickness_px: f64,
    pub transition_ms: f64,
    pub base_color: String,
    pub text_color: String,
    pub automation_id: Option<String>,
    pub font_size: FontSize,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            circle_gap_deg: DEFAULT_CIRCLE_GAP_DEG,
            circle_thickness_px: DEFAULT_CIRCLE_THICKNESS_PX,
            transition_ms: DEFAULT_TRANSITION_MS,
            base_color: DEFAULT_BASE_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            automation_id: Some(DEFAULT_AUTOMATION_ID.to_string()),
            font_size: FontSize::Large,
        }
    }
}

/// A number the host may send as a JSON number or as text.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl NumberLike {
    fn value(&self) -> Option<f64> {
        let v = match self {
            NumberLike::Number(n) => *n,
            NumberLike::Text(s) => s.trim().parse::<f64>().ok()?,
            NumberLike::Other(_) => return None,
        };
        v.is_finite().then_some(v)
    }
}

/// A string setting; anything else is treated as unset.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum TextLike {
    Text(String),
    Other(IgnoredAny),
}

impl TextLike {
    fn as_str(&self) -> Option<&str> {
        match self {
            TextLike::Text(s) => Some(s),
            TextLike::Other(_) => None,
        }
    }
}

/// Host configuration as received. Unknown keys are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGaugeConfig {
    pub circle_gap: Option<NumberLike>,
    pub circle_thickness: Option<NumberLike>,
    pub transition_duration: Option<NumberLike>,
    pub base_color: Option<TextLike>,
    pub text_color: Option<TextLike>,
    pub automation_id: Option<TextLike>,
    #[serde(rename = "font_size")]
    pub font_size: Option<TextLike>,
}

impl RawGaugeConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() || json.trim() == "null" {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }
}

impl GaugeConfig {
    /// Overlay `raw` on the defaults. Numeric fields are clamped to the ranges
    /// declared in the options schema.
    pub fn merge(raw: &RawGaugeConfig) -> Self {
        let defaults = Self::default();
        let circle_gap_deg = merge_number(
            "circleGap",
            raw.circle_gap.as_ref(),
            defaults.circle_gap_deg,
            CIRCLE_GAP_MIN_DEG,
            CIRCLE_GAP_MAX_DEG,
        );
        let circle_thickness_px = merge_number(
            "circleThickness",
            raw.circle_thickness.as_ref(),
            defaults.circle_thickness_px,
            CIRCLE_THICKNESS_MIN_PX,
            CIRCLE_THICKNESS_MAX_PX,
        );
        let transition_ms = merge_number(
            "transitionDuration",
            raw.transition_duration.as_ref(),
            defaults.transition_ms,
            TRANSITION_MIN_MS,
            f64::INFINITY,
        );
        Self {
            circle_gap_deg,
            circle_thickness_px,
            transition_ms,
            base_color: non_blank(&raw.base_color).unwrap_or(defaults.base_color),
            text_color: non_blank(&raw.text_color).unwrap_or(defaults.text_color),
            automation_id: match raw.automation_id.as_ref().and_then(TextLike::as_str) {
                Some(id) if id.trim().is_empty() => None,
                Some(id) => Some(id.trim().to_string()),
                None => defaults.automation_id,
            },
            font_size: raw
                .font_size
                .as_ref()
                .and_then(TextLike::as_str)
                .map(FontSize::from_hint)
                .unwrap_or_default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        RawGaugeConfig::from_json(json).map(|raw| Self::merge(&raw))
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.transition_ms.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
    }
}

fn non_blank(value: &Option<TextLike>) -> Option<String> {
    value
        .as_ref()
        .and_then(TextLike::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn merge_number(key: &str, raw: Option<&NumberLike>, default: f64, min: f64, max: f64) -> f64 {
    let Some(value) = raw.and_then(NumberLike::value) else {
        return default;
    };
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("[config] {} = {} outside {}..={}, using {}", key, value, min, max, clamped);
    }
    clamped
}
