use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Settings for the human-readable dump of vectors and matrices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Significant digits for `General`, digits after the point otherwise.
    pub precision: usize,
    /// Minimum field width of every entry.
    pub width: usize,
    pub notation: Notation,
    /// Print the dimension line and the surrounding rules for matrices.
    pub show_header: bool,
}

/// Number formatting used when rendering entries.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Shortest of fixed and scientific, like C's `%g`.
    #[default]
    General,
    Fixed,
    Scientific,
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Notation::General),
            "fixed" => Ok(Notation::Fixed),
            "scientific" => Ok(Notation::Scientific),
            _ => Err(format!(
                "Unknown notation: {}. Expected one of `general`, `fixed` or `scientific`",
                s
            )),
        }
    }
}

impl RenderConfig {
    pub fn new(precision: usize, width: usize, notation: Notation) -> Self {
        Self {
            precision,
            width,
            notation,
            show_header: true,
        }
    }

    /// Same settings without the dimension line and rules.
    pub fn compact(mut self) -> Self {
        self.show_header = false;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            width: 10,
            notation: Notation::General,
            show_header: true,
        }
    }
}
