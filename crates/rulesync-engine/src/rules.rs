use anyhow::{Context, Result, bail};
use rulesync_core::{Config, find_files, frontmatter, read_file_content};
use rulesync_types::{Rule, RuleFrontmatter};
use std::collections::HashSet;
use std::path::Path;

/// Read every canonical rule from the project's rules directory
/// (`.rulesync/` unless overridden), sorted by filename.
///
/// Each file is markdown with optional YAML frontmatter; a file without
/// frontmatter gets the defaults (non-root, wildcard targets). Filenames
/// must be unique since they become per-tool output file names.
pub fn parse_rules_from_directory(config: &Config, base_dir: &Path) -> Result<Vec<Rule>> {
    let rules_dir = base_dir.join(&config.ai_rules_dir);
    if !rules_dir.is_dir() {
        bail!(
            "Rules directory not found: {} (run `rulesync init` to create it)",
            rules_dir.display()
        );
    }

    let mut rules = Vec::new();
    let mut seen = HashSet::new();

    for path in find_files(&rules_dir, "md") {
        let content = read_file_content(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let (parsed, body) = frontmatter::parse::<RuleFrontmatter>(&content)
            .with_context(|| format!("Invalid frontmatter in {}", path.display()))?;

        let fm = parsed.unwrap_or_default();
        if fm.targets.is_empty() {
            bail!("Rule {} has an empty targets list", path.display());
        }

        let filename = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        if !seen.insert(filename.clone()) {
            bail!("Duplicate rule filename: {}", filename);
        }

        rules.push(Rule {
            frontmatter: fm,
            content: body.to_string(),
            filename,
            filepath: path,
        });
    }

    rules.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulesync_types::TargetSpec;

    fn rules_dir(dir: &Path) -> std::path::PathBuf {
        let rules = dir.join(".rulesync");
        std::fs::create_dir_all(&rules).unwrap();
        rules
    }

    #[test]
    fn rules_are_parsed_and_sorted_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        let rules = rules_dir(dir.path());
        std::fs::write(
            rules.join("style.md"),
            "---\ndescription: Code style\nglobs:\n  - \"**/*.rs\"\n---\n\nPrefer iterators.\n",
        )
        .unwrap();
        std::fs::write(
            rules.join("overview.md"),
            "---\nroot: true\n---\n\n# Project\n",
        )
        .unwrap();

        let parsed = parse_rules_from_directory(&Config::default(), dir.path()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].filename, "overview");
        assert!(parsed[0].frontmatter.root);
        assert_eq!(parsed[1].frontmatter.globs, vec!["**/*.rs"]);
    }

    #[test]
    fn file_without_frontmatter_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let rules = rules_dir(dir.path());
        std::fs::write(rules.join("plain.md"), "Just guidance.\n").unwrap();

        let parsed = parse_rules_from_directory(&Config::default(), dir.path()).unwrap();
        assert_eq!(parsed[0].frontmatter.targets, vec![TargetSpec::Wildcard]);
        assert!(!parsed[0].frontmatter.root);
    }

    #[test]
    fn missing_rules_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_rules_from_directory(&Config::default(), dir.path()).unwrap_err();
        assert!(err.to_string().contains("Rules directory not found"));
    }

    #[test]
    fn malformed_frontmatter_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let rules = rules_dir(dir.path());
        std::fs::write(rules.join("broken.md"), "---\nroot: true\nno closing fence").unwrap();

        let err = parse_rules_from_directory(&Config::default(), dir.path()).unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }
}
