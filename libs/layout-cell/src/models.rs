// libs/layout-cell/src/models.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const REMOVED_DUPLICATE_ATTR: &str = "data-removed-duplicate";

/// Child-index path from the document root. The root itself is `[]`.
pub type NodePath = Vec<usize>;

// ==============================================================================
// DOCUMENT TREE
// ==============================================================================

/// A rendered element as seen by the header pass. `top` is the element's vertical
/// offset in px, standing in for its bounding rect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default)]
    pub top: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn at(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute lookup that also answers for `id` and `class`.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.clone(),
            "class" if !self.classes.is_empty() => Some(self.classes.join(" ")),
            "class" => None,
            _ => self.attributes.get(name).cloned(),
        }
    }

    /// Own text followed by every descendant's, in document order.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// All strict descendants, depth first.
    pub fn descendants(&self) -> Vec<&ElementNode> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&ElementNode> {
        path.iter().try_fold(self, |node, &i| node.children.get(i))
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut ElementNode> {
        path.iter().try_fold(self, |node, &i| node.children.get_mut(i))
    }

    /// Declared `display` value from the inline style, if any.
    pub fn display(&self) -> Option<String> {
        self.attributes.get("style").and_then(|style| {
            style_declarations(style)
                .into_iter()
                .find(|(prop, _)| prop == "display")
                .map(|(_, value)| value)
        })
    }

    pub fn set_display(&mut self, value: &str) {
        let mut declarations = self
            .attributes
            .get("style")
            .map(|s| style_declarations(s))
            .unwrap_or_default();

        match declarations.iter_mut().find(|(prop, _)| prop == "display") {
            Some(entry) => entry.1 = value.to_string(),
            None => declarations.push(("display".to_string(), value.to_string())),
        }

        let style = declarations
            .iter()
            .map(|(prop, value)| format!("{}: {}", prop, value))
            .collect::<Vec<_>>()
            .join("; ");
        self.attributes.insert("style".to_string(), style);
    }

    pub fn is_hidden(&self) -> bool {
        self.display().as_deref() == Some("none")
    }

    pub fn is_removed_duplicate(&self) -> bool {
        self.attributes.get(REMOVED_DUPLICATE_ATTR).map(String::as_str) == Some("true")
    }

    pub fn mark_removed_duplicate(&mut self) {
        self.set_display("none");
        self.attributes
            .insert(REMOVED_DUPLICATE_ATTR.to_string(), "true".to_string());
    }
}

fn style_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            (!prop.is_empty()).then(|| (prop.to_ascii_lowercase(), value.trim().to_string()))
        })
        .collect()
}

// ==============================================================================
// CONSOLIDATION
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsolidationMode {
    #[default]
    Basic,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationReport {
    /// Surviving branded header; `None` when no branded header was found.
    pub kept: Option<NodePath>,
    pub removed: Vec<NodePath>,
    /// Branded headers considered in this pass.
    pub candidates: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidateHeadersRequest {
    pub document: ElementNode,
    #[serde(default)]
    pub mode: ConsolidationMode,
    #[serde(default)]
    pub custom_selectors: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidateHeadersResponse {
    pub document: ElementNode,
    #[serde(flatten)]
    pub report: ConsolidationReport,
}

/// A childList mutation: `added` nodes were appended under the element at `parent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationRecord {
    pub parent: NodePath,
    pub added: Vec<ElementNode>,
}

#[derive(Debug, Error, PartialEq)]
pub enum SelectorError {
    #[error("Empty selector in '{0}'")]
    Empty(String),

    #[error("Expected a name at position {position} in '{selector}'")]
    ExpectedName { selector: String, position: usize },

    #[error("Unexpected character '{ch}' at position {position} in '{selector}'")]
    UnexpectedCharacter {
        selector: String,
        ch: char,
        position: usize,
    },

    #[error("Unterminated attribute selector in '{0}'")]
    UnterminatedAttribute(String),

    #[error("Combinators are not supported: '{0}'")]
    UnsupportedCombinator(String),
}

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("Header observer has stopped")]
    Stopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_display_preserves_other_declarations() {
        let mut node = ElementNode::new("header").with_attribute("style", "color: red; display: flex");
        node.set_display("none");

        assert_eq!(node.attributes["style"], "color: red; display: none");
        assert!(node.is_hidden());
    }

    #[test]
    fn text_content_walks_descendants() {
        let node = ElementNode::new("header")
            .with_child(ElementNode::new("span").with_text("Sequoia"))
            .with_child(ElementNode::new("span").with_text("Health"));

        assert_eq!(node.text_content(), "SequoiaHealth");
    }

    #[test]
    fn node_at_follows_child_indices() {
        let doc = ElementNode::new("body")
            .with_child(ElementNode::new("div").with_child(ElementNode::new("nav")));

        assert_eq!(doc.node_at(&[0, 0]).map(|n| n.tag.as_str()), Some("nav"));
        assert!(doc.node_at(&[1]).is_none());
        assert_eq!(doc.node_at(&[]).map(|n| n.tag.as_str()), Some("body"));
    }

    #[test]
    fn document_deserializes_with_defaults() {
        let node: ElementNode = serde_json::from_value(serde_json::json!({
            "tag": "header",
            "classes": ["app-header"]
        }))
        .unwrap();

        assert_eq!(node.top, 0.0);
        assert!(node.children.is_empty());
        assert!(node.has_class("app-header"));
    }
}
