//! Root state document and grapher (viewport + axis) settings.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use super::ItemState;

/// The schema version tag. Serializes as the literal integer `8` and
/// refuses to deserialize anything else — older versions are the job of a
/// migration tool, not this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SchemaVersion;

impl SchemaVersion {
    /// The version number this schema describes.
    pub const NUMBER: u64 = 8;
}

impl Serialize for SchemaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(Self::NUMBER)
    }
}

impl<'de> Deserialize<'de> for SchemaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = u64::deserialize(deserializer)?;
        if v == Self::NUMBER {
            Ok(SchemaVersion)
        } else {
            Err(de::Error::custom(format!(
                "unsupported state version {v}, expected {}",
                Self::NUMBER
            )))
        }
    }
}

/// Root of a persisted graph state document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub version: SchemaVersion,
    /// Opaque seed for reproducible randomness in the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<String>,
    pub graph: GrapherState,
    pub expressions: Expressions,
}

impl State {
    /// Fresh document: standard viewport, empty expression list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: impl Into<ItemState>) -> Self {
        self.expressions.list.push(item.into());
        self
    }

    /// Look up an item by id. Ids share one namespace across all variants.
    pub fn item(&self, id: &str) -> Option<&ItemState> {
        self.expressions.list.iter().find(|it| it.id() == id)
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemState> {
        self.expressions.list.iter()
    }
}

/// Wrapper around the ordered item list. Insertion order is display and
/// evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Expressions {
    pub list: Vec<ItemState>,
}

/// Axis arrowhead rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrowMode {
    None,
    Positive,
    Both,
}

/// The rectangular region of the coordinate plane currently displayed.
///
/// `xmin < xmax` and `ymin < ymax` are expected but not enforced by the
/// schema itself; see [`Viewport::is_well_formed`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Viewport {
    /// The default ±10 window.
    pub fn standard() -> Self {
        Self { xmin: -10.0, ymin: -10.0, xmax: 10.0, ymax: 10.0 }
    }

    /// Finite bounds and non-empty in both dimensions.
    pub fn is_well_formed(&self) -> bool {
        [self.xmin, self.ymin, self.xmax, self.ymax]
            .iter()
            .all(|v| v.is_finite())
            && self.xmin < self.xmax
            && self.ymin < self.ymax
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::standard()
    }
}

/// Viewport plus axis configuration. Every field except `viewport` is
/// optional; absence means "use the engine default", not "disabled".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GrapherState {
    pub viewport: Viewport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_minor_subdivisions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_minor_subdivisions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_x_axis: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_y_axis: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polar_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_tabindex: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_arrow_mode: Option<ArrowMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_arrow_mode: Option<ArrowMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_axes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_grid_to_first_quadrant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polar_mode: Option<bool>,
}

impl GrapherState {
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self { viewport, ..Self::default() }
    }
}
