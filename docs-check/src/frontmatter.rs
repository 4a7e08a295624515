//! Minimal front-matter reader.
//!
//! Only a `---`-delimited block of `key: value` lines at the very top of a
//! document is recognised. This is deliberately not a YAML parser: the only
//! key ever consulted is `id`, and a missing or unterminated block simply
//! means there is no metadata.

use std::path::Path;

use crate::fs::relative_id_path;

/// Delimiter line opening and closing the block.
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// The raw lines between the two delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    lines: Vec<&'a str>,
}

impl<'a> FrontMatter<'a> {
    /// Value of the first line whose trimmed form starts with `key:`.
    ///
    /// The value is trimmed and one surrounding quote character is removed
    /// from each end. An empty value counts as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        let prefix = format!("{key}:");
        let raw = self
            .lines
            .iter()
            .copied()
            .map(str::trim)
            .find_map(|line| line.strip_prefix(prefix.as_str()))?;
        let value = unquote(raw.trim());
        if value.is_empty() { None } else { Some(value) }
    }
}

fn unquote(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

/// Parse the front-matter block at the top of `content`, if any.
#[must_use]
pub fn parse_front_matter(content: &str) -> Option<FrontMatter<'_>> {
    let mut lines = content.lines();
    if lines.next()?.trim_end() != FRONT_MATTER_DELIMITER {
        return None;
    }

    let mut body = Vec::new();
    for line in lines {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Some(FrontMatter { lines: body });
        }
        body.push(line);
    }
    None
}

/// Resolve the id of the document at `path` under `root`.
///
/// An explicit front-matter `id` wins; otherwise the id is the relative path
/// with the extension stripped.
#[must_use]
pub fn resolve_doc_id(root: &Path, path: &Path, content: &str) -> String {
    parse_front_matter(content)
        .and_then(|fm| fm.get("id"))
        .map_or_else(|| relative_id_path(root, path), ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter_block() {
        let content = "---\ntitle: Setup\nid: setup-guide\n---\n# Body\n";
        let fm = parse_front_matter(content).unwrap();
        assert_eq!(fm.get("id"), Some("setup-guide"));
        assert_eq!(fm.get("title"), Some("Setup"));
        assert_eq!(fm.get("slug"), None);
    }

    #[test]
    fn test_parse_front_matter_missing() {
        assert!(parse_front_matter("# Just a title\n---\n").is_none());
        assert!(parse_front_matter("").is_none());
    }

    #[test]
    fn test_parse_front_matter_unterminated() {
        assert!(parse_front_matter("---\nid: x\n# no end\n").is_none());
    }

    #[test]
    fn test_parse_front_matter_crlf() {
        let fm = parse_front_matter("---\r\nid: win\r\n---\r\nbody").unwrap();
        assert_eq!(fm.get("id"), Some("win"));
    }

    #[test]
    fn test_get_strips_one_quote_layer() {
        let fm = parse_front_matter("---\nid: \"custom-id\"\n---\n").unwrap();
        assert_eq!(fm.get("id"), Some("custom-id"));

        let fm = parse_front_matter("---\nid: 'single'\n---\n").unwrap();
        assert_eq!(fm.get("id"), Some("single"));

        let fm = parse_front_matter("---\nid: \"'nested'\"\n---\n").unwrap();
        assert_eq!(fm.get("id"), Some("'nested'"));
    }

    #[test]
    fn test_get_keeps_colons_in_value() {
        let fm = parse_front_matter("---\nid: ns:page\n---\n").unwrap();
        assert_eq!(fm.get("id"), Some("ns:page"));
    }

    #[test]
    fn test_get_indented_key_and_empty_value() {
        let fm = parse_front_matter("---\n  id:   spaced  \n---\n").unwrap();
        assert_eq!(fm.get("id"), Some("spaced"));

        let fm = parse_front_matter("---\nid: \"\"\n---\n").unwrap();
        assert_eq!(fm.get("id"), None);
    }

    #[test]
    fn test_get_does_not_match_longer_key() {
        let fm = parse_front_matter("---\nidentifier: nope\n---\n").unwrap();
        assert_eq!(fm.get("id"), None);
    }

    #[test]
    fn test_resolve_doc_id_precedence() {
        let root = Path::new("docs");
        assert_eq!(
            resolve_doc_id(
                root,
                Path::new("docs/guide/setup.md"),
                "---\nid: \"custom-id\"\n---\n"
            ),
            "custom-id"
        );
        assert_eq!(
            resolve_doc_id(root, Path::new("docs/guide/setup.md"), "# Setup\n"),
            "guide/setup"
        );
    }
}
