use crate::{Error, Result};
use rulesync_types::ToolTarget;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "rulesync.toml";

/// Project-local configuration: where canonical rules live, which tools to
/// generate for by default, and optional per-tool output path overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_rules_dir")]
    pub ai_rules_dir: PathBuf,

    #[serde(default = "default_targets")]
    pub default_targets: Vec<ToolTarget>,

    /// Overrides for the built-in per-tool output locations.
    #[serde(default)]
    pub output_paths: BTreeMap<ToolTarget, PathBuf>,
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from(".rulesync")
}

fn default_targets() -> Vec<ToolTarget> {
    ToolTarget::ALL.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_rules_dir: default_rules_dir(),
            default_targets: default_targets(),
            output_paths: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load `rulesync.toml` from the project root. A missing file means
    /// defaults; a malformed file is a hard error rather than a silent
    /// fallback.
    pub fn load(project_root: &Path) -> Result<Self> {
        Self::load_from(&project_root.join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Directory (relative to the base dir) a tool's rule files are written
    /// under. Tools whose umbrella file sits at the project root return ".".
    pub fn output_path(&self, tool: ToolTarget) -> PathBuf {
        if let Some(path) = self.output_paths.get(&tool) {
            return path.clone();
        }

        PathBuf::from(match tool {
            ToolTarget::Claudecode => ".",
            ToolTarget::Cursor => ".cursor/rules",
            ToolTarget::Copilot => ".github/instructions",
            ToolTarget::Cline => ".clinerules",
            ToolTarget::Roo => ".roo/rules",
            ToolTarget::Geminicli => ".",
            ToolTarget::Kiro => ".kiro/steering",
        })
    }
}
