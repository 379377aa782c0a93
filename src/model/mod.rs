//! # Graph State Model
//!
//! Clean DTOs that define the version-8 graph state document.
//! These types cross every boundary: storage ↔ validator ↔ consumer.
//!
//! Design rule: NO validation logic, NO engine types here.
//! This module is pure data — no I/O, no state, no async.

pub mod state;
pub mod item;
pub mod expression;
pub mod styles;
pub mod image;
pub mod table;
pub mod clickable;

pub use state::{State, SchemaVersion, Expressions, GrapherState, Viewport, ArrowMode};
pub use item::{ItemState, FolderState, TextState, SimulationState};
pub use expression::{
    ExpressionState, Slider, LoopMode, PlayDirection, Domain, Cdf,
    VizProps, DotplotSize, BinAlignment, DotplotXMode, HistogramMode,
    AlignedAxis, EditableLabelMode,
};
pub use styles::{LineStyle, PointStyle, DragMode, LabelSize, LabelOrientation};
pub use image::ImageState;
pub use table::{TableState, TableColumn};
pub use clickable::{ClickableInfo, SimulationClickableInfo, ClickableRule, RuleId};

/// A math expression in LaTeX-like notation, evaluated by the external
/// graphing engine. Used wherever a value may depend on variables or
/// sliders instead of being a fixed literal.
pub type Latex = String;

/// Item identifier. Unique across the whole expression list — all variants
/// share one id namespace, since `folderId` references resolve against it.
pub type Id = String;
