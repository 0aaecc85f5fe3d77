//! Snapping configuration.

use crate::error::{SnapError, SnapResult};
use crate::snap::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Half-length of rendered guide lines, enough to cover the canvas at any
/// zoom or pan the editor allows.
pub const DEFAULT_GUIDE_EXTENT: f64 = 6000.0;

/// Tunables for the alignment guide engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Distance (exclusive) under which a stop captures an anchor.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Stroke compensation: pulls the start and end anchors inward.
    #[serde(default)]
    pub anchor_inset: f64,
    /// Only shapes carrying this tag contribute stops. `None` means all shapes.
    /// Set it to `"object"` to snap against blocks only and ignore walls,
    /// the way the floor plan prototype filtered its references.
    #[serde(default)]
    pub candidate_tag: Option<String>,
    /// Half-length of the transient guide lines.
    #[serde(default = "default_guide_extent")]
    pub guide_extent: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_guide_extent() -> f64 {
    DEFAULT_GUIDE_EXTENT
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            anchor_inset: 0.0,
            candidate_tag: None,
            guide_extent: DEFAULT_GUIDE_EXTENT,
        }
    }
}

impl SnapConfig {
    /// Set the snap threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the stroke compensation inset.
    pub fn with_anchor_inset(mut self, inset: f64) -> Self {
        self.anchor_inset = inset;
        self
    }

    /// Restrict reference shapes to those carrying `tag`.
    pub fn with_candidate_tag(mut self, tag: impl Into<String>) -> Self {
        self.candidate_tag = Some(tag.into());
        self
    }

    /// Check every field is usable by the engine.
    pub fn validate(&self) -> SnapResult<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(SnapError::InvalidThreshold(self.threshold));
        }
        if !(self.guide_extent.is_finite() && self.guide_extent > 0.0) {
            return Err(SnapError::InvalidExtent(self.guide_extent));
        }
        if !(self.anchor_inset.is_finite() && self.anchor_inset >= 0.0) {
            return Err(SnapError::InvalidInset(self.anchor_inset));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SnapResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SnapError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SnapConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.threshold - 5.0).abs() < f64::EPSILON);
        assert!((config.guide_extent - 6000.0).abs() < f64::EPSILON);
        assert!(config.candidate_tag.is_none());
    }

    #[test]
    fn test_rejects_bad_threshold() {
        assert_eq!(
            SnapConfig::default().with_threshold(0.0).validate(),
            Err(SnapError::InvalidThreshold(0.0))
        );
        assert!(SnapConfig::default().with_threshold(-1.0).validate().is_err());
        assert!(SnapConfig::default().with_threshold(f64::NAN).validate().is_err());
        assert!(SnapConfig::default().with_threshold(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_rejects_negative_inset() {
        assert_eq!(
            SnapConfig::default().with_anchor_inset(-2.0).validate(),
            Err(SnapError::InvalidInset(-2.0))
        );
        assert!(SnapConfig::default().with_anchor_inset(2.0).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SnapConfig::from_json(r#"{ "threshold": 12 }"#).expect("parse");
        assert!((config.threshold - 12.0).abs() < f64::EPSILON);
        assert!((config.guide_extent - DEFAULT_GUIDE_EXTENT).abs() < f64::EPSILON);
        assert!(config.anchor_inset.abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_validation_runs() {
        let err = SnapConfig::from_json(r#"{ "guide_extent": 0 }"#).unwrap_err();
        assert_eq!(err, SnapError::InvalidExtent(0.0));
        assert!(matches!(SnapConfig::from_json("{"), Err(SnapError::Parse(_))));
    }
}
