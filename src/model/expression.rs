//! Expression items: plotted curves, points, sliders, regressions, and
//! statistical visualizations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::clickable::ClickableInfo;
use super::styles::{DragMode, LabelOrientation, LabelSize, LineStyle, PointStyle};
use super::{Id, Latex};

/// Slider playback loop behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoopMode {
    LoopForwardReverse,
    LoopForward,
    PlayOnce,
    PlayIndefinitely,
}

/// Slider playback direction. On the wire this is the integer `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum PlayDirection {
    Forward,
    Reverse,
}

impl From<PlayDirection> for i8 {
    fn from(v: PlayDirection) -> Self {
        match v {
            PlayDirection::Forward => 1,
            PlayDirection::Reverse => -1,
        }
    }
}

impl TryFrom<i8> for PlayDirection {
    type Error = String;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(PlayDirection::Forward),
            -1 => Ok(PlayDirection::Reverse),
            other => Err(format!("playDirection must be 1 or -1, got {other}")),
        }
    }
}

/// Slider configuration on an expression. Bounds and step are Latex so they
/// can depend on other sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_min: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_max: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_period: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_mode: Option<LoopMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_direction: Option<PlayDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_playing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<Latex>,
}

/// Inclusive domain override, bounds as Latex expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: Latex,
    pub max: Latex,
}

impl Domain {
    pub fn new(min: impl Into<Latex>, max: impl Into<Latex>) -> Self {
        Self { min: min.into(), max: max.into() }
    }
}

/// Cumulative-distribution shading on a distribution expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cdf {
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Latex>,
}

/// `MATH` or `TEXT` editing mode for interactive labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditableLabelMode {
    Math,
    Text,
}

/// Which axis a statistical plot is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignedAxis {
    X,
    Y,
}

/// Legacy dot plot point size. Removed in state version 9 in favor of an
/// explicit `pointSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotplotSize {
    Small,
    Large,
}

impl DotplotSize {
    /// The `pointSize` each legacy literal maps to: small is 9, large is 20.
    pub fn point_size(self) -> f64 {
        match self {
            DotplotSize::Small => 9.0,
            DotplotSize::Large => 20.0,
        }
    }
}

/// Histogram bin alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinAlignment {
    Left,
    Center,
}

/// Dot plot x-mode. The engine only ever checks for `"exact"`; any other
/// string behaves as binned, so decoding maps everything else to `Binned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DotplotXMode {
    Exact,
    Binned,
}

impl From<String> for DotplotXMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "exact" => DotplotXMode::Exact,
            _ => DotplotXMode::Binned,
        }
    }
}

impl From<DotplotXMode> for String {
    fn from(v: DotplotXMode) -> Self {
        match v {
            DotplotXMode::Exact => "exact".to_owned(),
            DotplotXMode::Binned => "binned".to_owned(),
        }
    }
}

/// Histogram y-mode. The engine checks for `"relative"` and `"density"`;
/// anything else behaves as count, so decoding maps everything else to
/// `Count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HistogramMode {
    Count,
    Relative,
    Density,
}

impl From<String> for HistogramMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "relative" => HistogramMode::Relative,
            "density" => HistogramMode::Density,
            _ => HistogramMode::Count,
        }
    }
}

impl From<HistogramMode> for String {
    fn from(v: HistogramMode) -> Self {
        match v {
            HistogramMode::Count => "count".to_owned(),
            HistogramMode::Relative => "relative".to_owned(),
            HistogramMode::Density => "density".to_owned(),
        }
    }
}

/// Styling for statistical visualizations (box plots, dot plots, histograms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VizProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadth: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_offset: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aligned_axis: Option<AlignedAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_boxplot_outliers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dotplot_size: Option<DotplotSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_alignment: Option<BinAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dotplot_x_mode: Option<DotplotXMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histogram_mode: Option<HistogramMode>,
}

impl VizProps {
    /// Effective dot plot mode: absence infers binned.
    pub fn effective_dotplot_x_mode(&self) -> DotplotXMode {
        self.dotplot_x_mode.unwrap_or(DotplotXMode::Binned)
    }

    /// Effective histogram mode: absence infers count.
    pub fn effective_histogram_mode(&self) -> HistogramMode {
        self.histogram_mode.unwrap_or(HistogramMode::Count)
    }
}

/// A plottable expression line: curve, point list, slider, regression, or
/// statistical plot. `color` is the only required display field; everything
/// optional inherits an engine default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionState {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Id>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latex: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_label: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_style: Option<PointStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_mode: Option<DragMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_size: Option<LabelSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_orientation: Option<LabelOrientation>,
    /// Renamed to `labelOrientation` in state version 9; both are carried
    /// independently here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_label_orientation: Option<LabelOrientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_text_outline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_label: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable_label_mode: Option<EditableLabelMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual_variable: Option<Latex>,
    /// Regression output: key is a Latex identifier, value the fitted number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regression_parameters: Option<HashMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_log_mode_regression: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_evaluation_as_fraction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider: Option<Slider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polar_domain: Option<Domain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parametric_domain: Option<Domain>,
    /// Historical twin of `parametricDomain`; both are preserved on the wire
    /// and never merged. See [`ExpressionState::effective_parametric_domain`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdf: Option<Cdf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_latex: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_opacity: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_opacity: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_size: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_angle: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viz_props: Option<VizProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable_info: Option<ClickableInfo>,
}

impl ExpressionState {
    /// A bare expression line with the two required fields set.
    pub fn new(id: impl Into<Id>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: None,
            folder_id: None,
            color: color.into(),
            latex: None,
            show_label: None,
            label: None,
            hidden: None,
            points: None,
            lines: None,
            line_style: None,
            point_style: None,
            fill: None,
            drag_mode: None,
            label_size: None,
            label_orientation: None,
            extended_label_orientation: None,
            suppress_text_outline: None,
            interactive_label: None,
            editable_label_mode: None,
            residual_variable: None,
            regression_parameters: None,
            is_log_mode_regression: None,
            display_evaluation_as_fraction: None,
            slider: None,
            polar_domain: None,
            parametric_domain: None,
            domain: None,
            cdf: None,
            color_latex: None,
            fill_opacity: None,
            line_opacity: None,
            point_opacity: None,
            point_size: None,
            line_width: None,
            label_angle: None,
            viz_props: None,
            clickable_info: None,
        }
    }

    pub fn with_latex(mut self, latex: impl Into<Latex>) -> Self {
        self.latex = Some(latex.into());
        self
    }

    pub fn with_folder(mut self, folder_id: impl Into<Id>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// The domain override that applies to parametric plotting:
    /// `parametricDomain` wins when both it and its historical twin
    /// `domain` are present.
    pub fn effective_parametric_domain(&self) -> Option<&Domain> {
        self.parametric_domain.as_ref().or(self.domain.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_direction_wire_integers() {
        assert_eq!(serde_json::to_value(PlayDirection::Reverse).unwrap(), -1);
        let fwd: PlayDirection = serde_json::from_value(serde_json::json!(1)).unwrap();
        assert_eq!(fwd, PlayDirection::Forward);
        assert!(serde_json::from_value::<PlayDirection>(serde_json::json!(2)).is_err());
    }

    #[test]
    fn test_viz_props_inferred_defaults() {
        let empty: VizProps = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(empty.effective_dotplot_x_mode(), DotplotXMode::Binned);
        assert_eq!(empty.effective_histogram_mode(), HistogramMode::Count);

        // the inference is by absence of the checked literals, so anything
        // unrecognized decodes to the inferred variant
        let odd: VizProps = serde_json::from_value(serde_json::json!({
            "dotplotXMode": "whatever",
            "histogramMode": "weird",
        }))
        .unwrap();
        assert_eq!(odd.dotplot_x_mode, Some(DotplotXMode::Binned));
        assert_eq!(odd.histogram_mode, Some(HistogramMode::Count));
    }

    #[test]
    fn test_dotplot_size_legacy_point_size() {
        assert_eq!(DotplotSize::Small.point_size(), 9.0);
        assert_eq!(DotplotSize::Large.point_size(), 20.0);
    }

    #[test]
    fn test_domain_precedence() {
        let mut expr = ExpressionState::new("1", "#000");
        expr.domain = Some(Domain::new("0", "1"));
        assert_eq!(expr.effective_parametric_domain().unwrap().max, "1");
        expr.parametric_domain = Some(Domain::new("0", "2\\pi"));
        assert_eq!(expr.effective_parametric_domain().unwrap().max, "2\\pi");
    }
}
