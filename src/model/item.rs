//! The item union: everything that can appear in the expression list.

use serde::{Deserialize, Serialize};

use super::clickable::SimulationClickableInfo;
use super::expression::ExpressionState;
use super::image::ImageState;
use super::table::TableState;
use super::{Id, Latex};

/// A grouping container. Folders do not own their children — membership is
/// the child pointing back via `folderId` — and a folder carries no
/// `folderId` of its own, so folders cannot nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderState {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl FolderState {
    pub fn new(id: impl Into<Id>) -> Self {
        Self { id: id.into(), secret: None, hidden: None, collapsed: None, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A plain text note between expression lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextState {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TextState {
    pub fn new(id: impl Into<Id>) -> Self {
        Self { id: id.into(), secret: None, folder_id: None, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A ticker-driven simulation. Its `clickableInfo` requires `rules`, unlike
/// every other variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_playing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable_info: Option<SimulationClickableInfo>,
}

impl SimulationState {
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            secret: None,
            folder_id: None,
            is_playing: None,
            fps: None,
            clickable_info: None,
        }
    }
}

/// Closed tagged union over the `type` discriminant. The discriminant fully
/// determines which fields are meaningful and is immutable once set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemState {
    Expression(ExpressionState),
    Image(ImageState),
    Table(TableState),
    Folder(FolderState),
    Text(TextState),
    Simulation(SimulationState),
}

impl ItemState {
    /// The wire discriminant literals, in declaration order.
    pub const TYPE_NAMES: [&'static str; 6] =
        ["expression", "image", "table", "folder", "text", "simulation"];

    pub fn type_name(&self) -> &'static str {
        match self {
            ItemState::Expression(_) => "expression",
            ItemState::Image(_) => "image",
            ItemState::Table(_) => "table",
            ItemState::Folder(_) => "folder",
            ItemState::Text(_) => "text",
            ItemState::Simulation(_) => "simulation",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ItemState::Expression(e) => &e.id,
            ItemState::Image(i) => &i.id,
            ItemState::Table(t) => &t.id,
            ItemState::Folder(f) => &f.id,
            ItemState::Text(t) => &t.id,
            ItemState::Simulation(s) => &s.id,
        }
    }

    pub fn secret(&self) -> Option<bool> {
        match self {
            ItemState::Expression(e) => e.secret,
            ItemState::Image(i) => i.secret,
            ItemState::Table(t) => t.secret,
            ItemState::Folder(f) => f.secret,
            ItemState::Text(t) => t.secret,
            ItemState::Simulation(s) => s.secret,
        }
    }

    /// The non-owning back-reference to a folder item, if any. Always `None`
    /// for folders themselves.
    pub fn folder_id(&self) -> Option<&str> {
        match self {
            ItemState::Expression(e) => e.folder_id.as_deref(),
            ItemState::Image(i) => i.folder_id.as_deref(),
            ItemState::Table(t) => t.folder_id.as_deref(),
            ItemState::Folder(_) => None,
            ItemState::Text(t) => t.folder_id.as_deref(),
            ItemState::Simulation(s) => s.folder_id.as_deref(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, ItemState::Folder(_))
    }
}

impl From<ExpressionState> for ItemState {
    fn from(v: ExpressionState) -> Self { ItemState::Expression(v) }
}
impl From<ImageState> for ItemState {
    fn from(v: ImageState) -> Self { ItemState::Image(v) }
}
impl From<TableState> for ItemState {
    fn from(v: TableState) -> Self { ItemState::Table(v) }
}
impl From<FolderState> for ItemState {
    fn from(v: FolderState) -> Self { ItemState::Folder(v) }
}
impl From<TextState> for ItemState {
    fn from(v: TextState) -> Self { ItemState::Text(v) }
}
impl From<SimulationState> for ItemState {
    fn from(v: SimulationState) -> Self { ItemState::Simulation(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminant_on_wire() {
        let item: ItemState = FolderState::new("f1").with_title("shapes").into();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "folder");
        assert_eq!(json["title"], "shapes");

        let back: ItemState = serde_json::from_value(json).unwrap();
        assert_eq!(back.type_name(), "folder");
        assert_eq!(back.id(), "f1");
    }

    #[test]
    fn test_unknown_discriminant_rejected() {
        let bad = serde_json::json!({ "id": "1", "type": "widget" });
        assert!(serde_json::from_value::<ItemState>(bad).is_err());
    }

    #[test]
    fn test_folder_has_no_folder_id() {
        let folder: ItemState = FolderState::new("f1").into();
        assert_eq!(folder.folder_id(), None);
        // a folderId key on a folder document is ignored by the typed model;
        // the validator reports it separately
        let sneaky = serde_json::json!({ "id": "f2", "type": "folder", "folderId": "f1" });
        let parsed: ItemState = serde_json::from_value(sneaky).unwrap();
        assert_eq!(parsed.folder_id(), None);
    }
}
