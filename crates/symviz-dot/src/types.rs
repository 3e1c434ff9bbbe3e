//! Render configuration.

use std::str::FromStr;

use strum_macros::{Display, EnumString, IntoStaticStr};

use symviz_error::{Error, Result};

// Direction

/// Flow direction of the laid-out graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// Inputs at the top, outputs at the bottom (default)
    #[default]
    #[strum(serialize = "TD")]
    TopDown,
    /// Inputs on the left, outputs on the right
    #[strum(serialize = "LR")]
    LeftRight,
}

impl Direction {
    /// Parse `TD` or `LR` (any case).
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value.trim()).map_err(|_| {
            Error::config_invalid("direction", value).with_operation("render::parse_direction")
        })
    }

    /// Graphviz `rankdir` value.
    pub fn rankdir(&self) -> &'static str {
        match self {
            Self::TopDown => "TB",
            Self::LeftRight => "LR",
        }
    }

    /// vis-network hierarchical layout direction.
    pub fn vis_direction(&self) -> &'static str {
        match self {
            Self::TopDown => "UD",
            Self::LeftRight => "LR",
        }
    }
}

// Backend

/// Rendering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Backend {
    /// Static Graphviz DOT document (default)
    #[default]
    Graph,
    /// Interactive vis-network JSON document
    Vis,
}

impl Backend {
    /// Parse `graph` or `vis` (any case). Other names are a configuration
    /// error; there is no fallback backend.
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value.trim()).map_err(|_| {
            Error::config_invalid("backend", value).with_operation("render::parse_backend")
        })
    }

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

// Render Options

/// Options for rendering a display graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub direction: Direction,
    pub backend: Backend,
    /// Output width in pixels.
    pub width: Option<u32>,
    /// Output height in pixels.
    pub height: Option<u32>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from the textual direction and backend names.
    pub fn parse(direction: &str, backend: &str) -> Result<Self> {
        Ok(Self {
            direction: Direction::parse(direction)?,
            backend: Backend::parse(backend)?,
            ..Self::default()
        })
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Option<u32>) -> Self {
        self.height = height;
        self
    }
}
