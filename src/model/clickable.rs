//! Clickable-object metadata carried by expressions, images, and simulations.

use serde::{Deserialize, Serialize};

use super::Latex;

/// Rule identifier.
///
/// Legacy documents carry numeric ids, current ones strings. The two kinds
/// are distinct wire values: `7` and `"7"` never compare equal and are never
/// coerced into one another, so documents round-trip byte-faithfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleId {
    Str(String),
    Num(serde_json::Number),
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        RuleId::Str(s.to_owned())
    }
}

impl From<i64> for RuleId {
    fn from(n: i64) -> Self {
        RuleId::Num(n.into())
    }
}

/// One interactive rule: on activation, `expression` is evaluated and bound
/// under the `assignment` identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickableRule {
    pub id: RuleId,
    pub expression: Latex,
    pub assignment: Latex,
}

/// Interaction metadata on expression and image items. All fields optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClickableInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Screen reader label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ClickableRule>>,
}

/// The simulation flavor of [`ClickableInfo`]: `rules` is required here,
/// unlike on every other variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationClickableInfo {
    pub rules: Vec<ClickableRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
