use thiserror::Error;

/// Reasons an update is refused before anything is drawn.
///
/// Every variant is recoverable: the host shows `title`/`message` to the user
/// and the next update with a good query clears it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaugeError {
    #[error("this chart requires 2 measures, the query has {found}")]
    InsufficientMeasures { found: usize },
    #[error("the query returned no rows")]
    NoResults,
    #[error("measure `{field}` is missing from the first row")]
    MissingMeasure { field: String },
    #[error("measure `{field}` does not hold a number")]
    NonNumeric { field: String },
}

impl GaugeError {
    pub fn title(&self) -> &'static str {
        match self {
            GaugeError::InsufficientMeasures { .. } => "Not enough measures",
            GaugeError::NoResults => "No results",
            GaugeError::MissingMeasure { .. } => "Missing measure",
            GaugeError::NonNumeric { .. } => "Invalid measure value",
        }
    }

    pub fn message(&self) -> String {
        match self {
            GaugeError::InsufficientMeasures { .. } => "This chart requires 2 measures.".to_string(),
            other => {
                let mut msg = other.to_string();
                if let Some(first) = msg.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                msg.push('.');
                msg
            }
        }
    }
}
