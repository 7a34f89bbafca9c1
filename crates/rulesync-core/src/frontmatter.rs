use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Split a markdown document into its YAML frontmatter block and body.
///
/// Returns `(None, content)` when the document has no `---` fence at the
/// very start; a lone opening fence without a closing one is malformed.
pub fn split(content: &str) -> Result<(Option<&str>, &str)> {
    let Some(rest) = content.strip_prefix("---\n").or_else(|| {
        content
            .strip_prefix("---\r\n")
    }) else {
        return Ok((None, content));
    };

    // An empty block ("---" immediately followed by "---") is legal
    if let Some(body) = rest.strip_prefix("---\n").or_else(|| rest.strip_prefix("---\r\n")) {
        return Ok((Some(""), body));
    }

    for fence in ["\n---\n", "\n---\r\n"] {
        if let Some(end) = rest.find(fence) {
            let body = &rest[end + fence.len()..];
            return Ok((Some(&rest[..end]), body));
        }
    }

    // Closing fence at end of file with no trailing newline; a fence
    // followed by one is caught by the loop above.
    if let Some(yaml) = rest.strip_suffix("\n---") {
        return Ok((Some(yaml), ""));
    }

    Err(Error::Frontmatter(
        "Unterminated frontmatter block (missing closing ---)".to_string(),
    ))
}

/// Parse a markdown document into typed frontmatter plus body.
pub fn parse<T: DeserializeOwned>(content: &str) -> Result<(Option<T>, &str)> {
    let (yaml, body) = split(content)?;
    match yaml {
        Some(yaml) if yaml.trim().is_empty() => Ok((None, body)),
        Some(yaml) => {
            let parsed =
                serde_yaml::from_str(yaml).map_err(|e| Error::Frontmatter(e.to_string()))?;
            Ok((Some(parsed), body))
        }
        None => Ok((None, body)),
    }
}

/// Render typed frontmatter plus body back into a markdown document.
pub fn render<T: Serialize>(frontmatter: &T, body: &str) -> Result<String> {
    let yaml =
        serde_yaml::to_string(frontmatter).map_err(|e| Error::Frontmatter(e.to_string()))?;
    Ok(format!("---\n{}---\n\n{}", yaml, body.trim_start_matches('\n')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn document_without_frontmatter_is_all_body() {
        let (yaml, body) = split("# Title\n\nbody").unwrap();
        assert!(yaml.is_none());
        assert_eq!(body, "# Title\n\nbody");
    }

    #[test]
    fn frontmatter_and_body_are_separated() {
        let (yaml, body) = split("---\nroot: true\n---\n# Title\n").unwrap();
        assert_eq!(yaml, Some("root: true"));
        assert_eq!(body, "# Title\n");
    }

    #[test]
    fn empty_frontmatter_block_is_not_an_error() {
        let (yaml, body) = split("---\n---\nbody\n").unwrap();
        assert_eq!(yaml, Some(""));
        assert_eq!(body, "body\n");

        let (parsed, _): (Option<BTreeMap<String, String>>, &str) =
            parse("---\n---\nbody\n").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn closing_fence_at_end_of_file_leaves_an_empty_body() {
        let (yaml, body) = split("---\nroot: true\n---").unwrap();
        assert_eq!(yaml, Some("root: true"));
        assert_eq!(body, "");
    }

    #[test]
    fn unterminated_frontmatter_is_an_error() {
        assert!(split("---\nroot: true\n# Title").is_err());
    }

    #[test]
    fn parse_and_render_round_trip() {
        let mut fm = BTreeMap::new();
        fm.insert("description".to_string(), "style guide".to_string());
        let doc = render(&fm, "Use tabs.\n").unwrap();

        let (parsed, body): (Option<BTreeMap<String, String>>, &str) = parse(&doc).unwrap();
        assert_eq!(parsed.unwrap()["description"], "style guide");
        assert_eq!(body.trim(), "Use tabs.");
    }
}
