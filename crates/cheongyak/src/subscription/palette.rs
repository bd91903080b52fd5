//! Color tokens handed to presentation layers alongside grades and strategies.

use super::domain::Difficulty;

pub const GREEN: &str = "#4CAF50";
pub const ORANGE: &str = "#FF9800";
pub const RED: &str = "#F44336";

const STRONG_SUCCESS_RATE: f64 = 70.0;
const FAIR_SUCCESS_RATE: f64 = 50.0;

impl Difficulty {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Easy => GREEN,
            Self::Medium => ORANGE,
            Self::Hard => RED,
        }
    }
}

pub fn success_rate_color(rate: f64) -> &'static str {
    if rate >= STRONG_SUCCESS_RATE {
        GREEN
    } else if rate >= FAIR_SUCCESS_RATE {
        ORANGE
    } else {
        RED
    }
}
