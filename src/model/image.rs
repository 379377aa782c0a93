//! Image items pinned onto the graph paper.

use serde::{Deserialize, Serialize};

use super::clickable::ClickableInfo;
use super::{Id, Latex};

/// An image placed on the graph. Geometry fields are Latex so position and
/// size can track sliders. The legacy snake_case `image_url` key is
/// preserved as-is on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageState {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Id>,
    #[serde(rename = "image_url")]
    pub image_url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Latex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable_info: Option<ClickableInfo>,
}

impl ImageState {
    pub fn new(
        id: impl Into<Id>,
        image_url: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            secret: None,
            folder_id: None,
            image_url: image_url.into(),
            name: name.into(),
            width: None,
            height: None,
            hidden: None,
            center: None,
            angle: None,
            opacity: None,
            foreground: None,
            draggable: None,
            clickable_info: None,
        }
    }

    pub fn with_center(mut self, center: impl Into<Latex>) -> Self {
        self.center = Some(center.into());
        self
    }
}
