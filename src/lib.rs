//! # desmos-state-rs — Clean Rust Graph State Schema
//!
//! A typed model of the Desmos graph state document (state version 8):
//! the JSON contract between a persistence layer and the graphing engine.
//!
//! ## Design Principles
//!
//! 1. **Closed union**: `ItemState` is a sum type keyed on the `type`
//!    discriminant, one case per variant — never one optional-everything record
//! 2. **Clean DTOs**: `State`, `GrapherState`, `ItemState` cross all boundaries;
//!    the model holds no validation logic and does no I/O
//! 3. **Validator owns nothing**: document → report is a pure function that
//!    collects every violation with its path, tolerating unknown fields
//! 4. **Absence is meaningful**: an optional field left out means "inherit the
//!    engine default", so options are never silently filled in
//!
//! ## Quick Start
//!
//! ```rust
//! use desmos_state::{parse_state, ItemState};
//!
//! # fn main() -> desmos_state::Result<()> {
//! let state = parse_state(r##"{
//!     "version": 8,
//!     "graph": { "viewport": { "xmin": -10, "ymin": -10, "xmax": 10, "ymax": 10 } },
//!     "expressions": { "list": [
//!         { "id": "1", "type": "expression", "color": "#c74440", "latex": "y=x^2" }
//!     ] }
//! }"##)?;
//!
//! match &state.expressions.list[0] {
//!     ItemState::Expression(e) => assert_eq!(e.latex.as_deref(), Some("y=x^2")),
//!     other => panic!("unexpected item {:?}", other.type_name()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Out of scope by design: Latex evaluation, rendering, and migration from
//! state versions below 8. A migration tool targets this shape; it does not
//! live here.

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod validate;
pub mod folder;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    State, SchemaVersion, Expressions, GrapherState, Viewport, ArrowMode,
    ItemState, ExpressionState, ImageState, TableState, TableColumn,
    FolderState, TextState, SimulationState,
    Slider, LoopMode, PlayDirection, Domain, Cdf,
    VizProps, DotplotSize, BinAlignment, DotplotXMode, HistogramMode,
    LineStyle, PointStyle, DragMode, LabelSize, LabelOrientation,
    ClickableInfo, SimulationClickableInfo, ClickableRule, RuleId,
    Latex, Id,
};

// ============================================================================
// Re-exports: Validation & folder resolution
// ============================================================================

pub use validate::{validate_document, ValidationReport, Violation, ViolationKind};
pub use folder::{resolve_folders, FolderGroup, FolderMembership};

// ============================================================================
// Top-level entry points
// ============================================================================

/// Parse and validate a state document from JSON text.
///
/// Phase 1 parses the raw tree, phase 2 runs structural validation
/// (collecting every violation), phase 3 decodes into the typed model.
/// A document with any violation is rejected with [`Error::Invalid`] —
/// best-effort coercion belongs to a migration collaborator, not here.
pub fn parse_state(json: &str) -> Result<State> {
    let doc: serde_json::Value = serde_json::from_str(json)?;
    parse_state_value(doc)
}

/// Same as [`parse_state`], starting from an already-parsed JSON tree.
pub fn parse_state_value(doc: serde_json::Value) -> Result<State> {
    let report = validate_document(&doc);
    if !report.is_valid() {
        return Err(Error::Invalid(report));
    }
    Ok(serde_json::from_value(doc)?)
}

/// Serialize a state document to JSON text. Absent optional fields are
/// omitted, never written as `null`.
pub fn to_json_string(state: &State) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Serialize a state document to a JSON tree.
pub fn to_json_value(state: &State) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(state)?)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid state document: {0}")]
    Invalid(ValidationReport),
}

pub type Result<T> = std::result::Result<T, Error>;
