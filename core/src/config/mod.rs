//! Tunable pager behaviour: zoom limits, commit thresholds, and animation descriptors.
//!
//! Every field has a default so hosts can ship a partial JSON document (or none at all). The
//! easing curves are descriptors only; interpolation is up to the renderer.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::PagerError;

use super::Result;

/// Easing curve a renderer should use for an animated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Curve plus duration for one animated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub easing: Easing,
    pub duration_ms: u32,
}

impl AnimationSpec {
    pub const fn new(easing: Easing, duration_ms: u32) -> Self {
        Self { easing, duration_ms }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Smallest pinch scale. Also the resting scale of a fresh page.
    pub min_scale: f32,
    /// Largest pinch scale.
    pub max_scale: f32,
    /// Fraction of the page width the predicted end translation must exceed to turn the page.
    pub page_turn_fraction: f32,
    /// Fraction of the page height the predicted end translation must exceed to dismiss.
    pub dismiss_fraction: f32,
    /// Used for page turns, page snap-back and the dismiss slide.
    pub page_animation: AnimationSpec,
    /// Used when an over-drag is cancelled and when a pinch re-clamps the pan offset.
    pub settle_animation: AnimationSpec,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 2.5,
            page_turn_fraction: 0.5,
            dismiss_fraction: 0.25,
            page_animation: AnimationSpec::new(Easing::EaseOut, 300),
            settle_animation: AnimationSpec::new(Easing::EaseInOut, 250),
        }
    }
}

impl PagerConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PagerConfig = serde_json::from_str(json).context("parsing pager config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading pager config at {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("loading {}", path.display()))
    }

    pub fn validate(&self) -> std::result::Result<(), PagerError> {
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(PagerError::InvalidConfig(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if !(self.max_scale.is_finite() && self.max_scale >= self.min_scale) {
            return Err(PagerError::InvalidConfig(format!(
                "max_scale {} is below min_scale {}",
                self.max_scale, self.min_scale
            )));
        }
        let fractions = [
            ("page_turn_fraction", self.page_turn_fraction),
            ("dismiss_fraction", self.dismiss_fraction),
        ];
        for (name, value) in fractions {
            if !(value.is_finite() && value > 0.0) {
                return Err(PagerError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
