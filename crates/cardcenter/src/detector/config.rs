use std::path::Path;

use crate::error::ConfigError;

/// Smoothing and edge thresholds shared by both detectors.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Gaussian sigma of the smoothing pass (pixels). `0` disables smoothing.
    ///
    /// The default matches a 5x5 kernel with automatically derived sigma.
    pub blur_sigma: f32,
    /// Canny hysteresis low threshold.
    pub canny_low: f32,
    /// Canny hysteresis high threshold.
    pub canny_high: f32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            blur_sigma: 1.1,
            canny_low: 50.0,
            canny_high: 150.0,
        }
    }
}

/// Parameters of the contour-based rectangle detectors.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub edges: EdgeConfig,
    /// Polygon simplification tolerance as a fraction of contour perimeter.
    pub approx_epsilon_frac: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            edges: EdgeConfig::default(),
            approx_epsilon_frac: 0.02,
        }
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    pub detector: DetectorConfig,
    /// Analyze front and back on separate worker threads.
    pub parallel_sides: bool,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            detector: DetectorConfig::default(),
            parallel_sides: true,
        }
    }
}

impl AnalyzeConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject parameter combinations the detectors cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let edges = &self.detector.edges;
        if !edges.blur_sigma.is_finite() || edges.blur_sigma < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "blur_sigma must be finite and >= 0, got {}",
                edges.blur_sigma
            )));
        }
        if !(edges.canny_low >= 0.0) || !(edges.canny_high >= edges.canny_low) {
            return Err(ConfigError::Invalid(format!(
                "canny thresholds must satisfy 0 <= low <= high, got low={} high={}",
                edges.canny_low, edges.canny_high
            )));
        }
        let eps = self.detector.approx_epsilon_frac;
        if !(eps > 0.0 && eps < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "approx_epsilon_frac must lie in (0, 1), got {eps}"
            )));
        }
        Ok(())
    }
}
