use crate::tool::{TargetSpec, ToolTarget};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Cursor's rule activation taxonomy, carried on rules parsed from
/// `.cursor/rules/*.mdc` so conversions can note the original mode.
/// No other tool has an equivalent concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CursorRuleType {
    Always,
    Manual,
    SpecificFiles,
    Intelligently,
}

impl CursorRuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorRuleType::Always => "always",
            CursorRuleType::Manual => "manual",
            CursorRuleType::SpecificFiles => "specificFiles",
            CursorRuleType::Intelligently => "intelligently",
        }
    }
}

impl fmt::Display for CursorRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata block of a canonical rule.
///
/// `root` marks the single top-level rule for tools with a file hierarchy
/// (an umbrella file plus detail files). The model does not enforce
/// uniqueness; renderers concatenate multiple root rules in filename order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleFrontmatter {
    #[serde(default)]
    pub root: bool,
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetSpec>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub globs: Vec<String>,
    #[serde(rename = "cursorRuleType", default, skip_serializing_if = "Option::is_none")]
    pub cursor_rule_type: Option<CursorRuleType>,
}

fn default_targets() -> Vec<TargetSpec> {
    vec![TargetSpec::Wildcard]
}

impl Default for RuleFrontmatter {
    fn default() -> Self {
        Self {
            root: false,
            targets: default_targets(),
            description: String::new(),
            globs: Vec::new(),
            cursor_rule_type: None,
        }
    }
}

/// One unit of AI assistant guidance: metadata plus an opaque markdown body.
///
/// `filename` is the stable identifier used to construct per-tool output
/// file names and must be unique within one source set. `filepath` is
/// provenance only, used for diagnostics and never for logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub frontmatter: RuleFrontmatter,
    pub content: String,
    pub filename: String,
    pub filepath: PathBuf,
}

impl Rule {
    /// Whether this rule should be rendered for the given tool.
    pub fn applies_to(&self, tool: ToolTarget) -> bool {
        self.frontmatter.targets.iter().any(|t| t.matches(tool))
    }
}
