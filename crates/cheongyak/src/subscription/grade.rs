use super::palette;
use serde::{Deserialize, Serialize};

const HIGH_GRADE_FLOOR: f64 = 80.0;
const MEDIUM_GRADE_FLOOR: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeLevel {
    Low,
    Medium,
    High,
}

impl GradeLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "consider alternative strategies",
            Self::Medium => "a strategic approach is needed",
            Self::High => "competitiveness is excellent",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => palette::RED,
            Self::Medium => palette::ORANGE,
            Self::High => palette::GREEN,
        }
    }
}

/// Qualitative grade attached to a total point value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointGrade {
    pub grade: GradeLevel,
    pub description: &'static str,
    pub color: &'static str,
}

impl From<GradeLevel> for PointGrade {
    fn from(grade: GradeLevel) -> Self {
        Self {
            grade,
            description: grade.description(),
            color: grade.color(),
        }
    }
}

/// Buckets a total into low/medium/high. Bands are closed below: 60 is medium, 80 is high.
/// Anything failing both comparisons, NaN included, is low.
pub fn point_grade(total_points: f64) -> PointGrade {
    let level = if total_points >= HIGH_GRADE_FLOOR {
        GradeLevel::High
    } else if total_points >= MEDIUM_GRADE_FLOOR {
        GradeLevel::Medium
    } else {
        GradeLevel::Low
    };

    PointGrade::from(level)
}
