//! Design tokens shared by every card fragment.

use serde::Serialize;
use std::fmt;

/// A named color value, rendered verbatim into CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    pub const fn new(css: &'static str) -> Self {
        Self(css)
    }

    pub fn as_css(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const WHITE: Color = Color::new("hsl(0deg 0% 100%)");
pub const PRIMARY: Color = Color::new("hsl(340deg 65% 47%)");
pub const SECONDARY: Color = Color::new("hsl(240deg 60% 63%)");

pub const GRAY_700: Color = Color::new("hsl(220deg 5% 40%)");
pub const GRAY_900: Color = Color::new("hsl(220deg 3% 20%)");

/// Font weight scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    Normal,
    Medium,
    Bold,
}

impl Weight {
    pub fn value(&self) -> u16 {
        match self {
            Weight::Normal => 500,
            Weight::Medium => 600,
            Weight::Bold => 800,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
