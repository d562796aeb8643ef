//! Error types for detection, analysis, and configuration.

use thiserror::Error;

/// Which face of the card an analysis stage was working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Front,
    Back,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
        }
    }
}

/// Pipeline stage that produced a detection failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    OuterBorder,
    Artwork,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OuterBorder => write!(f, "outer border"),
            Self::Artwork => write!(f, "artwork"),
        }
    }
}

/// Failure of a single rectangle detector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    /// The edge map contained no external contour.
    #[error("no outer border found")]
    NoOuterBorder,
    /// Fewer than two contours inside the card region.
    #[error("artwork not distinguishable from border: need 2 contours, found {found}")]
    ArtworkNotDistinguishable { found: usize },
    /// The outer rectangle does not overlap the image.
    #[error("card region {width}x{height} at ({x}, {y}) is empty inside the image")]
    EmptyRegion {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Failure of a full front/back analysis.
#[derive(Debug, Error)]
pub enum CenteringError {
    #[error("{side} image could not be decoded: {source}")]
    ImageDecode {
        side: Side,
        #[source]
        source: image::ImageError,
    },
    #[error("{side} {stage} detection failed: {source}")]
    Detection {
        side: Side,
        stage: Stage,
        #[source]
        source: DetectionError,
    },
}

impl CenteringError {
    /// Card face on which the failure happened.
    pub fn side(&self) -> Side {
        match self {
            Self::ImageDecode { side, .. } | Self::Detection { side, .. } => *side,
        }
    }
}

/// Invalid or unreadable analysis configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
