use rulesync_core::{file_exists, find_files, frontmatter, read_file_content};
use rulesync_types::{ParseResult, Rule, RuleFrontmatter, TargetSpec, ToolTarget};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct InstructionsFrontmatter {
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "applyTo", default)]
    apply_to: Option<String>,
}

pub(crate) fn parse_copilot_configuration(base_dir: &Path) -> ParseResult {
    let mut result = ParseResult::default();

    let main = base_dir.join(".github/copilot-instructions.md");
    if file_exists(&main) {
        match read_file_content(&main) {
            Ok(content) => {
                if !content.trim().is_empty() {
                    result.rules.push(Rule {
                        frontmatter: RuleFrontmatter {
                            root: true,
                            targets: vec![TargetSpec::Tool(ToolTarget::Copilot)],
                            ..Default::default()
                        },
                        content,
                        filename: "copilot-instructions".to_string(),
                        filepath: main.clone(),
                    });
                }
            }
            Err(e) => result
                .errors
                .push(format!("Failed to read {}: {}", main.display(), e)),
        }
    }

    for path in find_files(&base_dir.join(".github/instructions"), "md") {
        let content = match read_file_content(&path) {
            Ok(c) => c,
            Err(e) => {
                result
                    .errors
                    .push(format!("Failed to read {}: {}", path.display(), e));
                continue;
            }
        };

        match frontmatter::parse::<InstructionsFrontmatter>(&content) {
            Ok((fm, body)) => {
                let fm = fm.unwrap_or_default();
                let globs = fm
                    .apply_to
                    .map(|a| {
                        a.split(',')
                            .map(str::trim)
                            .filter(|g| !g.is_empty() && *g != "**")
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();

                result.rules.push(Rule {
                    frontmatter: RuleFrontmatter {
                        targets: vec![TargetSpec::Tool(ToolTarget::Copilot)],
                        description: fm.description.unwrap_or_default(),
                        globs,
                        ..Default::default()
                    },
                    content: body.to_string(),
                    filename: instruction_stem(&path),
                    filepath: path,
                });
            }
            Err(e) => result
                .errors
                .push(format!("Malformed frontmatter in {}: {}", path.display(), e)),
        }
    }

    result
}

/// `style.instructions.md` -> `style`
fn instruction_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
        .trim_end_matches(".instructions")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_instructions_become_root_rule() {
        let dir = tempfile::tempdir().unwrap();
        let github = dir.path().join(".github");
        std::fs::create_dir_all(&github).unwrap();
        std::fs::write(github.join("copilot-instructions.md"), "Overall guidance.").unwrap();

        let result = parse_copilot_configuration(dir.path());
        assert_eq!(result.rules.len(), 1);
        assert!(result.rules[0].frontmatter.root);
        assert_eq!(result.rules[0].filename, "copilot-instructions");
    }

    #[test]
    fn apply_to_globs_are_split_and_wildcard_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let instructions = dir.path().join(".github/instructions");
        std::fs::create_dir_all(&instructions).unwrap();
        std::fs::write(
            instructions.join("frontend.instructions.md"),
            "---\ndescription: Frontend\napplyTo: \"src/**/*.tsx, src/**/*.css\"\n---\nFrontend rules.\n",
        )
        .unwrap();

        let result = parse_copilot_configuration(dir.path());
        let rule = &result.rules[0];
        assert_eq!(rule.filename, "frontend");
        assert_eq!(rule.frontmatter.globs, vec!["src/**/*.tsx", "src/**/*.css"]);
        assert_eq!(rule.frontmatter.description, "Frontend");
    }

    #[test]
    fn apply_to_everything_means_no_glob_restriction() {
        let dir = tempfile::tempdir().unwrap();
        let instructions = dir.path().join(".github/instructions");
        std::fs::create_dir_all(&instructions).unwrap();
        std::fs::write(
            instructions.join("general.instructions.md"),
            "---\napplyTo: \"**\"\n---\nGeneral.\n",
        )
        .unwrap();

        let result = parse_copilot_configuration(dir.path());
        assert!(result.rules[0].frontmatter.globs.is_empty());
    }
}
