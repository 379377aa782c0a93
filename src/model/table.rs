//! Table items: columns of Latex values plotted as point lists.

use serde::{Deserialize, Serialize};

use super::styles::{DragMode, LineStyle, PointStyle};
use super::{Id, Latex};

/// One table column — an independent mini expression line with its own id,
/// color, and point/line styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub id: Id,
    pub values: Vec<Latex>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latex: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_mode: Option<DragMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_style: Option<PointStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_latex: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_opacity: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_size: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_opacity: Option<Latex>,
}

impl TableColumn {
    pub fn new(id: impl Into<Id>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: Vec::new(),
            color: color.into(),
            latex: None,
            hidden: None,
            points: None,
            lines: None,
            drag_mode: None,
            line_style: None,
            point_style: None,
            color_latex: None,
            line_opacity: None,
            line_width: None,
            point_size: None,
            point_opacity: None,
        }
    }

    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<Latex>>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// A table item: an ordered set of columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Id>,
    pub columns: Vec<TableColumn>,
}

impl TableState {
    pub fn new(id: impl Into<Id>) -> Self {
        Self { id: id.into(), secret: None, folder_id: None, columns: Vec::new() }
    }

    pub fn with_column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_roundtrip() {
        let table = TableState::new("t1")
            .with_column(TableColumn::new("c1", "#2d70b3").with_values(["1", "2", "3"]))
            .with_column(TableColumn::new("c2", "#388c46").with_values(["1", "4", "9"]));
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["columns"][1]["values"][2], "9");
        let back: TableState = serde_json::from_value(json).unwrap();
        assert_eq!(back, table);
    }
}
