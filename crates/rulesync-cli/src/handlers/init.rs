use crate::views;
use anyhow::Result;
use rulesync_core::{Config, file_exists, write_file_content};
use std::path::Path;

const STARTER_RULE: &str = r#"---
root: true
targets: ["*"]
description: Project overview
globs: []
---

# Project Rules

Describe your project's conventions here. Add more rules as separate
markdown files in this directory; give each one frontmatter to control
which tools it applies to.
"#;

pub fn handle(base_dir: &Path) -> Result<()> {
    let config = Config::load(base_dir)?;
    let rules_dir = base_dir.join(&config.ai_rules_dir);
    let starter = rules_dir.join("overview.md");

    if file_exists(&starter) {
        views::warn(&format!(
            "{} already exists, leaving it untouched",
            starter.display()
        ));
        return Ok(());
    }

    write_file_content(&starter, STARTER_RULE)?;
    views::success(&format!("Created {}", starter.display()));
    views::info("Edit the rules, then run `rulesync generate`.");
    Ok(())
}
