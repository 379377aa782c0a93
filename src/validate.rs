//! Structural validation of raw state documents.
//!
//! Validation is a pure function from a raw [`serde_json::Value`] tree to a
//! [`ValidationReport`]. Every violation is collected and reported with the
//! path of the offending value (`expressions.list[3].type`) — the walk never
//! fails fast and never drops data. Unknown extra fields are tolerated:
//! fields come and go between state versions, and a version-8 reader must
//! accept documents written by newer producers.

use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::model::ItemState;

// ============================================================================
// Permitted literal sets
// ============================================================================

const ARROW_MODES: &[&str] = &["NONE", "POSITIVE", "BOTH"];
const LINE_STYLES: &[&str] = &["SOLID", "DASHED", "DOTTED"];
const POINT_STYLES: &[&str] = &["POINT", "OPEN", "CROSS"];
const DRAG_MODES: &[&str] = &["NONE", "X", "Y", "XY", "AUTO"];
const LABEL_ORIENTATIONS: &[&str] = &[
    "default",
    "center",
    "center_auto",
    "auto_center",
    "above",
    "above_left",
    "above_right",
    "above_auto",
    "below",
    "below_left",
    "below_right",
    "below_auto",
    "left",
    "auto_left",
    "right",
    "auto_right",
];
const EDITABLE_LABEL_MODES: &[&str] = &["MATH", "TEXT"];
const LOOP_MODES: &[&str] = &[
    "LOOP_FORWARD_REVERSE",
    "LOOP_FORWARD",
    "PLAY_ONCE",
    "PLAY_INDEFINITELY",
];
const PLAY_DIRECTIONS: &[&str] = &["1", "-1"];
const ALIGNED_AXES: &[&str] = &["x", "y"];
const DOTPLOT_SIZES: &[&str] = &["small", "large"];
const BIN_ALIGNMENTS: &[&str] = &["left", "center"];
const DOTPLOT_X_MODES: &[&str] = &["exact", "binned"];
const HISTOGRAM_MODES: &[&str] = &["count", "relative", "density"];

// ============================================================================
// Violations
// ============================================================================

/// What went wrong at one path of the document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViolationKind {
    /// A required field is absent.
    #[error("required field is missing")]
    MissingField,

    /// `type` is not one of the six item literals.
    #[error("`{found}` is not an item type (expected one of {:?})", ItemState::TYPE_NAMES)]
    UnknownDiscriminant { found: String },

    /// A literal-restricted field holds a value outside its permitted set.
    #[error("`{found}` is not in the permitted set {allowed:?}")]
    EnumViolation {
        found: String,
        allowed: &'static [&'static str],
    },

    /// A field is present with the wrong primitive kind.
    #[error("expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// `version` is not the literal `8`.
    #[error("state version must be the literal 8")]
    BadVersion,

    /// Two items share one id. Ids are one namespace across all variants.
    #[error("id `{id}` is used by more than one item")]
    DuplicateId { id: String },

    /// A folder item carries a `folderId` — folders cannot nest.
    #[error("folders cannot be nested inside folders")]
    NestedFolder,
}

/// One violation, tied to the path of the offending value.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Dotted/indexed path, e.g. `expressions.list[3].type`.
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// The outcome of validating one document. Empty means conformant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "; {v}")?;
        }
        Ok(())
    }
}

/// Validate an arbitrary document claiming to be version-8 state.
///
/// Collects every violation; callers decide whether to reject outright or
/// hand the document to a migration collaborator.
pub fn validate_document(doc: &Value) -> ValidationReport {
    let mut w = Walker::default();
    w.root(doc);
    debug!(violations = w.violations.len(), "validated state document");
    ValidationReport { violations: w.violations }
}

// ============================================================================
// The walker
// ============================================================================

#[derive(Default)]
struct Walker {
    violations: Vec<Violation>,
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

impl Walker {
    fn push(&mut self, path: impl Into<String>, kind: ViolationKind) {
        self.violations.push(Violation { path: path.into(), kind });
    }

    fn mismatch(&mut self, path: impl Into<String>, expected: &'static str, got: &Value) {
        self.push(path, ViolationKind::TypeMismatch { expected, got: json_kind(got) });
    }

    // ---- field primitives ---------------------------------------------------

    /// Required string field; returns it when well-formed.
    fn req_str<'a>(&mut self, obj: &'a Map<String, Value>, path: &str, key: &str) -> Option<&'a str> {
        match obj.get(key) {
            None => {
                self.push(join(path, key), ViolationKind::MissingField);
                None
            }
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                self.mismatch(join(path, key), "string", other);
                None
            }
        }
    }

    fn opt_str(&mut self, obj: &Map<String, Value>, path: &str, key: &str) {
        if let Some(v) = obj.get(key) {
            if !v.is_string() {
                self.mismatch(join(path, key), "string", v);
            }
        }
    }

    fn opt_bool(&mut self, obj: &Map<String, Value>, path: &str, key: &str) {
        if let Some(v) = obj.get(key) {
            if !v.is_boolean() {
                self.mismatch(join(path, key), "boolean", v);
            }
        }
    }

    fn opt_num(&mut self, obj: &Map<String, Value>, path: &str, key: &str) {
        if let Some(v) = obj.get(key) {
            if !v.is_number() {
                self.mismatch(join(path, key), "number", v);
            }
        }
    }

    fn req_finite_num(&mut self, obj: &Map<String, Value>, path: &str, key: &str) {
        match obj.get(key) {
            None => self.push(join(path, key), ViolationKind::MissingField),
            Some(Value::Number(n)) => {
                if !n.as_f64().is_some_and(f64::is_finite) {
                    self.mismatch(join(path, key), "finite number", &Value::Number(n.clone()));
                }
            }
            Some(other) => self.mismatch(join(path, key), "finite number", other),
        }
    }

    fn opt_enum(
        &mut self,
        obj: &Map<String, Value>,
        path: &str,
        key: &str,
        allowed: &'static [&'static str],
    ) {
        match obj.get(key) {
            None => {}
            Some(Value::String(s)) => {
                if !allowed.contains(&s.as_str()) {
                    self.push(
                        join(path, key),
                        ViolationKind::EnumViolation { found: s.clone(), allowed },
                    );
                }
            }
            Some(other) => self.mismatch(join(path, key), "string", other),
        }
    }

    /// Required sub-object; returns it when well-formed.
    fn req_obj<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        path: &str,
        key: &str,
    ) -> Option<&'a Map<String, Value>> {
        match obj.get(key) {
            None => {
                self.push(join(path, key), ViolationKind::MissingField);
                None
            }
            Some(Value::Object(m)) => Some(m),
            Some(other) => {
                self.mismatch(join(path, key), "object", other);
                None
            }
        }
    }

    fn opt_obj<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        path: &str,
        key: &str,
    ) -> Option<&'a Map<String, Value>> {
        match obj.get(key) {
            None => None,
            Some(Value::Object(m)) => Some(m),
            Some(other) => {
                self.mismatch(join(path, key), "object", other);
                None
            }
        }
    }

    // ---- document structure -------------------------------------------------

    fn root(&mut self, doc: &Value) {
        let Some(root) = doc.as_object() else {
            self.mismatch("$", "object", doc);
            return;
        };

        match root.get("version") {
            None => self.push("version", ViolationKind::MissingField),
            Some(Value::Number(n)) if n.as_u64() == Some(8) => {}
            Some(_) => self.push("version", ViolationKind::BadVersion),
        }

        self.opt_str(root, "", "randomSeed");

        if let Some(graph) = self.req_obj(root, "", "graph") {
            self.grapher(graph, "graph");
        }

        if let Some(expressions) = self.req_obj(root, "", "expressions") {
            match expressions.get("list") {
                None => self.push("expressions.list", ViolationKind::MissingField),
                Some(Value::Array(items)) => self.item_list(items),
                Some(other) => self.mismatch("expressions.list", "array", other),
            }
        }
    }

    fn grapher(&mut self, obj: &Map<String, Value>, path: &str) {
        if let Some(viewport) = self.req_obj(obj, path, "viewport") {
            let vp = join(path, "viewport");
            for key in ["xmin", "ymin", "xmax", "ymax"] {
                self.req_finite_num(viewport, &vp, key);
            }
        }

        for key in ["xAxisMinorSubdivisions", "yAxisMinorSubdivisions", "xAxisStep", "yAxisStep"] {
            self.opt_num(obj, path, key);
        }
        for key in [
            "degreeMode",
            "showGrid",
            "showXAxis",
            "showYAxis",
            "xAxisNumbers",
            "yAxisNumbers",
            "polarNumbers",
            "enableTabindex",
            "squareAxes",
            "restrictGridToFirstQuadrant",
            "polarMode",
        ] {
            self.opt_bool(obj, path, key);
        }
        self.opt_str(obj, path, "xAxisLabel");
        self.opt_str(obj, path, "yAxisLabel");
        self.opt_enum(obj, path, "xAxisArrowMode", ARROW_MODES);
        self.opt_enum(obj, path, "yAxisArrowMode", ARROW_MODES);
    }

    fn item_list(&mut self, items: &[Value]) {
        let mut seen: HashSet<&str> = HashSet::new();
        for (i, item) in items.iter().enumerate() {
            let path = format!("expressions.list[{i}]");
            let Some(obj) = item.as_object() else {
                self.mismatch(path, "object", item);
                continue;
            };

            if let Some(id) = self.req_str(obj, &path, "id") {
                if !seen.insert(id) {
                    self.push(
                        join(&path, "id"),
                        ViolationKind::DuplicateId { id: id.to_owned() },
                    );
                }
            }
            self.opt_bool(obj, &path, "secret");

            match obj.get("type") {
                None => self.push(join(&path, "type"), ViolationKind::MissingField),
                Some(Value::String(t)) => self.item_fields(obj, &path, t),
                Some(other) => self.mismatch(join(&path, "type"), "string", other),
            }
        }
    }

    fn item_fields(&mut self, obj: &Map<String, Value>, path: &str, ty: &str) {
        // every variant except folder may point back at a folder
        if ty != "folder" {
            self.opt_str(obj, path, "folderId");
        }
        match ty {
            "expression" => self.expression(obj, path),
            "image" => self.image(obj, path),
            "table" => self.table(obj, path),
            "folder" => {
                if obj.contains_key("folderId") {
                    self.push(join(path, "folderId"), ViolationKind::NestedFolder);
                }
                self.opt_bool(obj, path, "hidden");
                self.opt_bool(obj, path, "collapsed");
                self.opt_str(obj, path, "title");
            }
            "text" => self.opt_str(obj, path, "text"),
            "simulation" => {
                self.opt_bool(obj, path, "isPlaying");
                self.opt_str(obj, path, "fps");
                if let Some(info) = self.opt_obj(obj, path, "clickableInfo") {
                    self.clickable_info(info, &join(path, "clickableInfo"), true);
                }
            }
            other => self.push(
                join(path, "type"),
                ViolationKind::UnknownDiscriminant { found: other.to_owned() },
            ),
        }
    }

    fn expression(&mut self, obj: &Map<String, Value>, path: &str) {
        self.req_str(obj, path, "color");
        for key in ["latex", "label", "labelSize", "residualVariable"] {
            self.opt_str(obj, path, key);
        }
        for key in [
            "showLabel",
            "hidden",
            "points",
            "lines",
            "fill",
            "suppressTextOutline",
            "interactiveLabel",
            "isLogModeRegression",
            "displayEvaluationAsFraction",
        ] {
            self.opt_bool(obj, path, key);
        }
        self.opt_enum(obj, path, "lineStyle", LINE_STYLES);
        self.opt_enum(obj, path, "pointStyle", POINT_STYLES);
        self.opt_enum(obj, path, "dragMode", DRAG_MODES);
        self.opt_enum(obj, path, "labelOrientation", LABEL_ORIENTATIONS);
        self.opt_enum(obj, path, "extendedLabelOrientation", LABEL_ORIENTATIONS);
        self.opt_enum(obj, path, "editableLabelMode", EDITABLE_LABEL_MODES);
        for key in [
            "colorLatex",
            "fillOpacity",
            "lineOpacity",
            "pointOpacity",
            "pointSize",
            "lineWidth",
            "labelAngle",
        ] {
            self.opt_str(obj, path, key);
        }

        if let Some(params) = self.opt_obj(obj, path, "regressionParameters") {
            let ppath = join(path, "regressionParameters");
            for (key, value) in params {
                if !value.is_number() {
                    self.mismatch(join(&ppath, key), "number", value);
                }
            }
        }

        if let Some(slider) = self.opt_obj(obj, path, "slider") {
            self.slider(slider, &join(path, "slider"));
        }
        for key in ["polarDomain", "parametricDomain", "domain"] {
            if let Some(domain) = self.opt_obj(obj, path, key) {
                let dpath = join(path, key);
                self.req_str(domain, &dpath, "min");
                self.req_str(domain, &dpath, "max");
            }
        }
        if let Some(cdf) = self.opt_obj(obj, path, "cdf") {
            let cpath = join(path, "cdf");
            match cdf.get("show") {
                None => self.push(join(&cpath, "show"), ViolationKind::MissingField),
                Some(Value::Bool(_)) => {}
                Some(other) => self.mismatch(join(&cpath, "show"), "boolean", other),
            }
            self.opt_str(cdf, &cpath, "min");
            self.opt_str(cdf, &cpath, "max");
        }
        if let Some(viz) = self.opt_obj(obj, path, "vizProps") {
            self.viz_props(viz, &join(path, "vizProps"));
        }
        if let Some(info) = self.opt_obj(obj, path, "clickableInfo") {
            self.clickable_info(info, &join(path, "clickableInfo"), false);
        }
    }

    fn slider(&mut self, obj: &Map<String, Value>, path: &str) {
        self.opt_bool(obj, path, "hardMin");
        self.opt_bool(obj, path, "hardMax");
        self.opt_bool(obj, path, "isPlaying");
        self.opt_num(obj, path, "animationPeriod");
        self.opt_enum(obj, path, "loopMode", LOOP_MODES);
        match obj.get("playDirection") {
            None => {}
            Some(Value::Number(n)) => {
                if !matches!(n.as_i64(), Some(1) | Some(-1)) {
                    self.push(
                        join(path, "playDirection"),
                        ViolationKind::EnumViolation {
                            found: n.to_string(),
                            allowed: PLAY_DIRECTIONS,
                        },
                    );
                }
            }
            Some(other) => self.mismatch(join(path, "playDirection"), "number", other),
        }
        self.opt_str(obj, path, "min");
        self.opt_str(obj, path, "max");
        self.opt_str(obj, path, "step");
    }

    fn viz_props(&mut self, obj: &Map<String, Value>, path: &str) {
        self.opt_str(obj, path, "breadth");
        self.opt_str(obj, path, "axisOffset");
        self.opt_enum(obj, path, "alignedAxis", ALIGNED_AXES);
        self.opt_bool(obj, path, "showBoxplotOutliers");
        self.opt_enum(obj, path, "dotplotSize", DOTPLOT_SIZES);
        self.opt_enum(obj, path, "binAlignment", BIN_ALIGNMENTS);
        // the typed decoder is deliberately lenient on these two (absence of
        // the checked literal infers the default); the strict surface still
        // reports out-of-set literals so consumers can choose to reject
        self.opt_enum(obj, path, "dotplotXMode", DOTPLOT_X_MODES);
        self.opt_enum(obj, path, "histogramMode", HISTOGRAM_MODES);
    }

    fn image(&mut self, obj: &Map<String, Value>, path: &str) {
        self.req_str(obj, path, "image_url");
        self.req_str(obj, path, "name");
        for key in ["width", "height", "center", "angle", "opacity"] {
            self.opt_str(obj, path, key);
        }
        for key in ["hidden", "foreground", "draggable"] {
            self.opt_bool(obj, path, key);
        }
        if let Some(info) = self.opt_obj(obj, path, "clickableInfo") {
            self.clickable_info(info, &join(path, "clickableInfo"), false);
        }
    }

    fn table(&mut self, obj: &Map<String, Value>, path: &str) {
        match obj.get("columns") {
            None => self.push(join(path, "columns"), ViolationKind::MissingField),
            Some(Value::Array(columns)) => {
                for (i, column) in columns.iter().enumerate() {
                    let cpath = format!("{path}.columns[{i}]");
                    let Some(col) = column.as_object() else {
                        self.mismatch(cpath, "object", column);
                        continue;
                    };
                    self.column(col, &cpath);
                }
            }
            Some(other) => self.mismatch(join(path, "columns"), "array", other),
        }
    }

    fn column(&mut self, obj: &Map<String, Value>, path: &str) {
        self.req_str(obj, path, "id");
        self.req_str(obj, path, "color");
        match obj.get("values") {
            None => self.push(join(path, "values"), ViolationKind::MissingField),
            Some(Value::Array(values)) => {
                for (i, v) in values.iter().enumerate() {
                    if !v.is_string() {
                        self.mismatch(format!("{path}.values[{i}]"), "string", v);
                    }
                }
            }
            Some(other) => self.mismatch(join(path, "values"), "array", other),
        }
        self.opt_str(obj, path, "latex");
        for key in ["hidden", "points", "lines"] {
            self.opt_bool(obj, path, key);
        }
        self.opt_enum(obj, path, "dragMode", DRAG_MODES);
        self.opt_enum(obj, path, "lineStyle", LINE_STYLES);
        self.opt_enum(obj, path, "pointStyle", POINT_STYLES);
        for key in ["colorLatex", "lineOpacity", "lineWidth", "pointSize", "pointOpacity"] {
            self.opt_str(obj, path, key);
        }
    }

    fn clickable_info(&mut self, obj: &Map<String, Value>, path: &str, rules_required: bool) {
        self.opt_bool(obj, path, "enabled");
        self.opt_str(obj, path, "description");
        match obj.get("rules") {
            None if rules_required => self.push(join(path, "rules"), ViolationKind::MissingField),
            None => {}
            Some(Value::Array(rules)) => {
                for (i, rule) in rules.iter().enumerate() {
                    let rpath = format!("{path}.rules[{i}]");
                    let Some(r) = rule.as_object() else {
                        self.mismatch(rpath, "object", rule);
                        continue;
                    };
                    // legacy documents carry numeric rule ids
                    match r.get("id") {
                        None => self.push(join(&rpath, "id"), ViolationKind::MissingField),
                        Some(Value::String(_)) | Some(Value::Number(_)) => {}
                        Some(other) => self.mismatch(join(&rpath, "id"), "string or number", other),
                    }
                    self.req_str(r, &rpath, "expression");
                    self.req_str(r, &rpath, "assignment");
                }
            }
            Some(other) => self.mismatch(join(path, "rules"), "array", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "version": 8,
            "graph": { "viewport": { "xmin": -10, "ymin": -10, "xmax": 10, "ymax": 10 } },
            "expressions": { "list": [] }
        })
    }

    #[test]
    fn test_minimal_document_is_valid() {
        assert!(validate_document(&minimal()).is_valid());
    }

    #[test]
    fn test_missing_viewport_bound() {
        let mut doc = minimal();
        doc["graph"]["viewport"].as_object_mut().unwrap().remove("ymax");
        let report = validate_document(&doc);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, "graph.viewport.ymax");
        assert_eq!(report.violations[0].kind, ViolationKind::MissingField);
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let mut doc = minimal();
        doc["graph"]["threeDMode"] = json!(true);
        doc["someFutureField"] = json!({ "x": 1 });
        assert!(validate_document(&doc).is_valid());
    }

    #[test]
    fn test_wrong_version() {
        let mut doc = minimal();
        doc["version"] = json!(9);
        let report = validate_document(&doc);
        assert_eq!(report.violations[0].kind, ViolationKind::BadVersion);
    }

    #[test]
    fn test_violations_all_collected() {
        let doc = json!({
            "graph": { "viewport": { "xmin": "left", "ymin": -10, "xmax": 10 } },
            "expressions": { "list": [ { "id": "1", "type": "expression" } ] }
        });
        let report = validate_document(&doc);
        let paths: Vec<&str> = report.violations.iter().map(|v| v.path.as_str()).collect();
        assert!(paths.contains(&"version"));
        assert!(paths.contains(&"graph.viewport.xmin"));
        assert!(paths.contains(&"graph.viewport.ymax"));
        assert!(paths.contains(&"expressions.list[0].color"));
    }
}
