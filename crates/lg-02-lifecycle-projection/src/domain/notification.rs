//! User-facing notifications derived from projections.

use serde::{Deserialize, Serialize};

/// Title plus optional description. No other options are recognised.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Notification {
    /// Headline.
    pub title: String,
    /// Detail line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notification {
    /// Title only.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Levels at which advisories fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvisoryThresholds {
    /// Warn when projected water is at or below this level.
    pub critical_water_level: u8,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            critical_water_level: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_only() {
        let n: Notification = serde_json::from_str(r#"{"title":"Water critically low"}"#).unwrap();
        assert_eq!(n, Notification::new("Water critically low"));
    }

    #[test]
    fn test_title_and_description() {
        let n: Notification =
            serde_json::from_str(r#"{"title":"Ready to harvest","description":"Plant 3"}"#)
                .unwrap();
        assert_eq!(n.description.as_deref(), Some("Plant 3"));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result =
            serde_json::from_str::<Notification>(r#"{"title":"x","variant":"destructive"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_title_required() {
        assert!(serde_json::from_str::<Notification>(r#"{"description":"x"}"#).is_err());
    }
}
