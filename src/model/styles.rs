//! Shared display-style literals for expression lines, points, and labels.

use serde::{Deserialize, Serialize};

use super::Latex;

/// Stroke style for plotted curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Marker style for plotted points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointStyle {
    Point,
    Open,
    Cross,
}

/// How a point responds to dragging in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DragMode {
    None,
    X,
    Y,
    Xy,
    Auto,
}

/// Label size: one of three named sizes, or an arbitrary Latex expression.
///
/// The wire value is always a plain string; anything that is not one of the
/// three literals is carried as [`LabelSize::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LabelSize {
    Small,
    Medium,
    Large,
    Custom(Latex),
}

impl From<String> for LabelSize {
    fn from(s: String) -> Self {
        match s.as_str() {
            "SMALL" => LabelSize::Small,
            "MEDIUM" => LabelSize::Medium,
            "LARGE" => LabelSize::Large,
            _ => LabelSize::Custom(s),
        }
    }
}

impl From<LabelSize> for String {
    fn from(v: LabelSize) -> Self {
        match v {
            LabelSize::Small => "SMALL".to_owned(),
            LabelSize::Medium => "MEDIUM".to_owned(),
            LabelSize::Large => "LARGE".to_owned(),
            LabelSize::Custom(s) => s,
        }
    }
}

/// Label placement relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrientation {
    Default,
    Center,
    CenterAuto,
    AutoCenter,
    Above,
    AboveLeft,
    AboveRight,
    AboveAuto,
    Below,
    BelowLeft,
    BelowRight,
    BelowAuto,
    Left,
    AutoLeft,
    Right,
    AutoRight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_wire_literals() {
        assert_eq!(serde_json::to_value(LineStyle::Dashed).unwrap(), "DASHED");
        assert_eq!(serde_json::to_value(DragMode::Xy).unwrap(), "XY");
        assert_eq!(
            serde_json::to_value(LabelOrientation::AboveLeft).unwrap(),
            "above_left"
        );
    }

    #[test]
    fn test_label_size_literal_or_latex() {
        let small: LabelSize = serde_json::from_value(serde_json::json!("SMALL")).unwrap();
        assert_eq!(small, LabelSize::Small);

        let custom: LabelSize = serde_json::from_value(serde_json::json!("2.5")).unwrap();
        assert_eq!(custom, LabelSize::Custom("2.5".into()));
        assert_eq!(serde_json::to_value(&custom).unwrap(), "2.5");
    }
}
