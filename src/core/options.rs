use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use super::constants::*;

/// One entry of the settings panel the host renders for the visualization.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct OptionSpec {
    pub label: &'static str,
    pub section: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub default: Value,
    pub order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<BTreeMap<&'static str, &'static str>>,
}

impl OptionSpec {
    fn new(label: &'static str, section: &'static str, kind: &'static str, default: Value, order: u32) -> Self {
        Self {
            label,
            section,
            kind,
            default,
            order,
            display: None,
            placeholder: None,
            min: None,
            max: None,
            values: Vec::new(),
        }
    }

    fn range(mut self, min: f64, max: Option<f64>) -> Self {
        self.min = Some(min);
        self.max = max;
        self
    }
}

/// Options keyed by the config key the host sends back.
pub fn gauge_options() -> BTreeMap<&'static str, OptionSpec> {
    let mut options = BTreeMap::new();
    options.insert(
        "transitionDuration",
        OptionSpec {
            placeholder: Some("Delay in milliseconds"),
            ..OptionSpec::new(
                "Transition duration (milliseconds)",
                "Config",
                "number",
                json!(DEFAULT_TRANSITION_MS),
                1,
            )
            .range(TRANSITION_MIN_MS, None)
        },
    );
    options.insert(
        "circleThickness",
        OptionSpec::new(
            "Circle thickness (1-20)",
            "Config",
            "number",
            json!(DEFAULT_CIRCLE_THICKNESS_PX),
            2,
        )
        .range(CIRCLE_THICKNESS_MIN_PX, Some(CIRCLE_THICKNESS_MAX_PX)),
    );
    options.insert(
        "circleGap",
        OptionSpec::new(
            "Circle gap in degrees (0-180)",
            "Config",
            "number",
            json!(DEFAULT_CIRCLE_GAP_DEG),
            3,
        )
        .range(CIRCLE_GAP_MIN_DEG, Some(CIRCLE_GAP_MAX_DEG)),
    );
    options.insert(
        "automationId",
        OptionSpec::new(
            "Automation ID (For automated testing)",
            "Config",
            "string",
            json!(DEFAULT_AUTOMATION_ID),
            4,
        ),
    );
    options.insert(
        "baseColor",
        OptionSpec {
            display: Some("color"),
            ..OptionSpec::new("Base color", "Style", "string", json!(DEFAULT_BASE_COLOR), 5)
        },
    );
    options.insert(
        "textColor",
        OptionSpec {
            display: Some("color"),
            ..OptionSpec::new("Text color", "Style", "string", json!(DEFAULT_TEXT_COLOR), 6)
        },
    );
    options.insert(
        "font_size",
        OptionSpec {
            display: Some("select"),
            values: vec![
                BTreeMap::from([("Large", "large")]),
                BTreeMap::from([("Small", "small")]),
            ],
            ..OptionSpec::new("Font size", "Style", "string", json!("large"), 7)
        },
    );
    options
}

pub fn gauge_options_json() -> Result<String, serde_json::Error> {
    serde_json::to_string(&gauge_options())
}
