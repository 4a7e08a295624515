//! Navigation (sidebar) configuration model and id collection.
//!
//! The configuration is a map from sidebar name to an ordered tree of items.
//! Each item is either a bare string (a doc id) or a node of shape
//! `{ type, id?, items? }`. Anything else is tolerated and ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::error::CheckError;

/// Node discriminator marking a direct document reference.
pub const DOC_NODE_TYPE: &str = "doc";

/// One entry of a sidebar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Shorthand for a document reference.
    Doc(String),
    /// A structured node (doc, category, link, ...).
    Node(NavNode),
    /// Any other value; contributes nothing.
    Other(Value),
}

/// A structured sidebar node.
///
/// Any object deserializes as a node. A `type` or `id` that is not a string
/// reads as absent and non-array `items` as no children, so one odd field
/// never hides the rest of the node.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NavNode {
    #[serde(rename = "type", default, deserialize_with = "string_or_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "items_or_none")]
    pub items: Option<Vec<NavItem>>,
}

fn string_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn items_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<NavItem>>, D::Error> {
    match Value::deserialize(deserializer)? {
        items @ Value::Array(_) => serde_json::from_value(items)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

impl NavNode {
    /// The doc id this node references directly, if it is a `doc` node.
    #[must_use]
    pub fn doc_id(&self) -> Option<&str> {
        match (self.kind.as_deref(), self.id.as_deref()) {
            (Some(DOC_NODE_TYPE), Some(id)) => Some(id),
            _ => None,
        }
    }
}

/// A parsed navigation configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationConfig {
    /// Where the configuration came from, used in diagnostics.
    pub source: PathBuf,
    /// Sidebars by name.
    pub sidebars: BTreeMap<String, Vec<NavItem>>,
}

impl NavigationConfig {
    /// Build from an already deserialized value.
    ///
    /// The value must be an object; each member holding an array is a
    /// sidebar. Other members are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an object or a sidebar's items
    /// cannot be interpreted.
    pub fn from_value(value: Value, source: impl Into<PathBuf>) -> Result<Self, CheckError> {
        let source = source.into();
        let Value::Object(members) = value else {
            return Err(CheckError::NavigationParse {
                path: source,
                message: "top level must be an object of sidebars".to_owned(),
            });
        };

        let mut sidebars = BTreeMap::new();
        for (name, items) in members {
            if !items.is_array() {
                warn!(sidebar = %name, "skipping non-array member of navigation config");
                continue;
            }
            let items: Vec<NavItem> =
                serde_json::from_value(items).map_err(|e| CheckError::NavigationParse {
                    path: source.clone(),
                    message: format!("sidebar '{name}': {e}"),
                })?;
            sidebars.insert(name, items);
        }

        Ok(Self { source, sidebars })
    }

    /// Parse configuration text; YAML when `source` ends in `.yaml`/`.yml`,
    /// JSON otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON/YAML or has the wrong shape.
    pub fn from_str_for(content: &str, source: &Path) -> Result<Self, CheckError> {
        let parse_error = |message: String| CheckError::NavigationParse {
            path: source.to_owned(),
            message,
        };

        let value: Value = match source.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => serde_saphyr::from_str(content)
                .map_err(|e| parse_error(format!("YAML parse error: {e}")))?,
            _ => serde_json::from_str(content)
                .map_err(|e| parse_error(format!("JSON parse error: {e}")))?,
        };

        Self::from_value(value, source)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let content = std::fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_str_for(&content, path)
    }

    /// Items of the named sidebar.
    #[must_use]
    pub fn sidebar(&self, name: &str) -> Option<&[NavItem]> {
        self.sidebars.get(name).map(Vec::as_slice)
    }
}

/// Collect every doc id referenced by `items`, depth-first, in declaration order.
///
/// Bare strings and `doc` nodes contribute their id; any node with `items`
/// is recursed into regardless of its type.
#[must_use]
pub fn collect_doc_ids(items: &[NavItem]) -> Vec<String> {
    let mut collected = Vec::new();
    collect_into(items, &mut collected);
    collected
}

fn collect_into(items: &[NavItem], collected: &mut Vec<String>) {
    for item in items {
        match item {
            NavItem::Doc(id) => collected.push(id.clone()),
            NavItem::Node(node) => {
                if let Some(id) = node.doc_id() {
                    collected.push(id.to_owned());
                }
                if let Some(children) = &node.items {
                    collect_into(children, collected);
                }
            }
            NavItem::Other(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(value: Value) -> Vec<NavItem> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_collect_bare_strings_and_doc_nodes() {
        let sidebar = items(json!([
            "index",
            {"type": "doc", "id": "guide/setup"},
            {"type": "link", "href": "https://example.com", "label": "Site"}
        ]));
        assert_eq!(collect_doc_ids(&sidebar), vec!["index", "guide/setup"]);
    }

    #[test]
    fn test_collect_recurses_three_levels() {
        let sidebar = items(json!([
            {"type": "category", "label": "A", "items": [
                {"type": "category", "label": "B", "items": [
                    {"type": "category", "label": "C", "items": ["deep/page"]}
                ]}
            ]}
        ]));
        assert_eq!(collect_doc_ids(&sidebar), vec!["deep/page"]);
    }

    #[test]
    fn test_collect_doc_node_with_children() {
        let sidebar = items(json!([
            {"type": "doc", "id": "parent", "items": ["child"]}
        ]));
        assert_eq!(collect_doc_ids(&sidebar), vec!["parent", "child"]);
    }

    #[test]
    fn test_collect_ignores_headers_and_odd_values() {
        let sidebar = items(json!([
            {"type": "category", "label": "Empty"},
            {"type": "html", "value": "<hr/>"},
            {"id": "no-type"},
            42,
            null
        ]));
        assert!(collect_doc_ids(&sidebar).is_empty());
    }

    #[test]
    fn test_collect_tolerates_odd_node_fields() {
        let sidebar = items(json!([
            {"type": "category", "label": {"message": "Guide"}, "items": [
                "guide/setup",
                {"type": "doc", "id": 7, "items": ["guide/child"]}
            ]},
            {"type": ["doc"], "id": "not-a-doc", "items": "oops"},
            {"type": "doc", "id": "after", "items": null}
        ]));
        assert_eq!(
            collect_doc_ids(&sidebar),
            vec!["guide/setup", "guide/child", "after"]
        );
    }

    #[test]
    fn test_from_value_skips_non_array_members() {
        let config = NavigationConfig::from_value(
            json!({"docsSidebar": ["index"], "version": 2}),
            "sidebars.json",
        )
        .unwrap();
        assert_eq!(config.sidebars.len(), 1);
        assert_eq!(
            config.sidebar("docsSidebar"),
            Some(&[NavItem::Doc("index".to_owned())][..])
        );
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = NavigationConfig::from_value(json!(["index"]), "sidebars.json").unwrap_err();
        assert!(matches!(err, CheckError::NavigationParse { .. }));
    }

    #[test]
    fn test_from_str_yaml() {
        let yaml = "docsSidebar:\n  - index\n  - type: category\n    label: Guide\n    items:\n      - guide/setup\n";
        let config = NavigationConfig::from_str_for(yaml, Path::new("sidebars.yaml")).unwrap();
        let sidebar = config.sidebar("docsSidebar").unwrap();
        assert_eq!(collect_doc_ids(sidebar), vec!["index", "guide/setup"]);
    }

    #[test]
    fn test_from_str_invalid_json() {
        let err =
            NavigationConfig::from_str_for("{not json", Path::new("sidebars.json")).unwrap_err();
        assert!(err.to_string().contains("JSON parse error"), "got: {err}");
    }
}
