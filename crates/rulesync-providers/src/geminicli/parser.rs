use crate::markdown::strip_reference_table;
use rulesync_core::{file_exists, find_files, read_file_content};
use rulesync_types::{McpConfig, ParseResult, Rule, RuleFrontmatter, TargetSpec, ToolTarget};
use serde_json::Value;
use std::path::Path;

pub(crate) fn parse_geminicli_configuration(base_dir: &Path) -> ParseResult {
    let mut result = ParseResult::default();

    let gemini_md = base_dir.join("GEMINI.md");
    if file_exists(&gemini_md) {
        match read_file_content(&gemini_md) {
            Ok(content) => {
                let body = strip_reference_table(&content);
                if !body.trim().is_empty() {
                    result.rules.push(Rule {
                        frontmatter: RuleFrontmatter {
                            root: true,
                            targets: vec![TargetSpec::Tool(ToolTarget::Geminicli)],
                            ..Default::default()
                        },
                        content: body,
                        filename: "main".to_string(),
                        filepath: gemini_md.clone(),
                    });
                }
            }
            Err(e) => result
                .errors
                .push(format!("Failed to read {}: {}", gemini_md.display(), e)),
        }
    }

    for path in find_files(&base_dir.join(".gemini/memories"), "md") {
        match read_file_content(&path) {
            Ok(content) => result.rules.push(Rule {
                frontmatter: RuleFrontmatter {
                    targets: vec![TargetSpec::Tool(ToolTarget::Geminicli)],
                    ..Default::default()
                },
                content,
                filename: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default(),
                filepath: path,
            }),
            Err(e) => result
                .errors
                .push(format!("Failed to read {}: {}", path.display(), e)),
        }
    }

    // MCP servers are one key inside settings.json, not a file of their own
    let settings_path = base_dir.join(".gemini/settings.json");
    if file_exists(&settings_path) {
        match read_file_content(&settings_path)
            .map_err(|e| e.to_string())
            .and_then(|c| serde_json::from_str::<Value>(&c).map_err(|e| e.to_string()))
        {
            Ok(settings) => {
                if let Some(servers) = settings.get("mcpServers") {
                    match serde_json::from_value(servers.clone()) {
                        Ok(servers) => {
                            result.mcp_servers = Some(McpConfig {
                                mcp_servers: servers,
                            })
                        }
                        Err(e) => result.errors.push(format!(
                            "Malformed mcpServers in {}: {}",
                            settings_path.display(),
                            e
                        )),
                    }
                }
            }
            Err(e) => result
                .errors
                .push(format!("Malformed {}: {}", settings_path.display(), e)),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_md_and_memories_are_parsed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("GEMINI.md"), "# Root\n").unwrap();
        let memories = dir.path().join(".gemini/memories");
        std::fs::create_dir_all(&memories).unwrap();
        std::fs::write(memories.join("style.md"), "Style.").unwrap();

        let result = parse_geminicli_configuration(dir.path());
        assert_eq!(result.rules.len(), 2);
        assert!(result.rules[0].frontmatter.root);
        assert_eq!(result.rules[1].filename, "style");
    }

    #[test]
    fn mcp_servers_are_lifted_out_of_settings() {
        let dir = tempfile::tempdir().unwrap();
        let gemini_dir = dir.path().join(".gemini");
        std::fs::create_dir_all(&gemini_dir).unwrap();
        std::fs::write(
            gemini_dir.join("settings.json"),
            r#"{"theme": "dark", "mcpServers": {"fs": {"command": "npx"}}}"#,
        )
        .unwrap();

        let result = parse_geminicli_configuration(dir.path());
        let config = result.mcp_servers.unwrap();
        assert_eq!(config.mcp_servers["fs"].command, "npx");
    }

    #[test]
    fn settings_without_mcp_key_yield_no_servers() {
        let dir = tempfile::tempdir().unwrap();
        let gemini_dir = dir.path().join(".gemini");
        std::fs::create_dir_all(&gemini_dir).unwrap();
        std::fs::write(gemini_dir.join("settings.json"), r#"{"theme": "dark"}"#).unwrap();

        let result = parse_geminicli_configuration(dir.path());
        assert!(result.mcp_servers.is_none());
        assert!(result.errors.is_empty());
    }
}
