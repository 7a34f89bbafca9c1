use anyhow::Result;
use rulesync_core::{file_exists, read_file_content, write_file_content};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::path::Path;

/// Merge `Read(<pattern>)` deny rules into `.claude/settings.json`.
///
/// Read-modify-write: only the permissions deny list is touched, everything
/// else in the document is preserved. Entries for the current pattern set
/// are replaced rather than appended so repeated runs do not grow the list,
/// and the final list is deduplicated in insertion order.
pub fn update_claude_settings(settings_path: &Path, ignore_patterns: &[String]) -> Result<()> {
    let mut settings: Value = if file_exists(settings_path) {
        let content = read_file_content(settings_path)?;
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(_) => {
                eprintln!(
                    "Failed to parse existing {}, creating new settings",
                    settings_path.display()
                );
                json!({})
            }
        }
    } else {
        json!({})
    };

    if !settings.is_object() {
        settings = json!({});
    }

    let existing_deny: Vec<String> = settings["permissions"]["deny"]
        .as_array()
        .map(|deny| {
            deny.iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    // Drop Read() rules for patterns we are about to re-add; keep everything
    // else (hand-written deny rules, Read() rules for other patterns).
    let mut deny: Vec<String> = existing_deny
        .into_iter()
        .filter(|rule| {
            let Some(pattern) = rule
                .strip_prefix("Read(")
                .and_then(|r| r.strip_suffix(')'))
            else {
                return true;
            };
            !ignore_patterns.iter().any(|p| p == pattern)
        })
        .collect();

    deny.extend(ignore_patterns.iter().map(|p| format!("Read({})", p)));

    let mut seen = HashSet::new();
    deny.retain(|rule| seen.insert(rule.clone()));

    if let Value::Object(map) = &mut settings {
        let permissions = map.entry("permissions").or_insert_with(|| json!({}));
        if !permissions.is_object() {
            *permissions = json!({});
        }
        permissions["deny"] = json!(deny);
    }

    write_file_content(settings_path, &serde_json::to_string_pretty(&settings)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deny_list(path: &Path) -> Vec<String> {
        let settings: Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        settings["permissions"]["deny"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn creates_settings_from_scratch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".claude/settings.json");

        update_claude_settings(&path, &[".env".to_string()]).unwrap();
        assert_eq!(deny_list(&path), vec!["Read(.env)"]);
    }

    #[test]
    fn unrelated_settings_and_deny_rules_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"model": "opus", "permissions": {"deny": ["Bash(rm:*)"], "allow": ["Read(docs/**)"]}}"#,
        )
        .unwrap();

        update_claude_settings(&path, &[".env".to_string()]).unwrap();

        let settings: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(settings["model"], "opus");
        assert_eq!(settings["permissions"]["allow"][0], "Read(docs/**)");
        assert_eq!(deny_list(&path), vec!["Bash(rm:*)", "Read(.env)"]);
    }

    #[test]
    fn repeated_merges_do_not_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let patterns = vec![".env".to_string(), "secrets/**".to_string()];

        update_claude_settings(&path, &patterns).unwrap();
        let first = deny_list(&path);
        update_claude_settings(&path, &patterns).unwrap();
        let second = deny_list(&path);

        assert_eq!(first, second);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn unparsable_settings_are_rebuilt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{broken").unwrap();

        update_claude_settings(&path, &[".env".to_string()]).unwrap();
        assert_eq!(deny_list(&path), vec!["Read(.env)"]);
    }
}
