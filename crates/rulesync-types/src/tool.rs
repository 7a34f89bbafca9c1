use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AI coding tools that rulesync can read configuration from and write
/// configuration for.
///
/// Adding a tool here forces every dispatch site (adapter construction,
/// compatibility matrix, output path table) to handle it: all of them match
/// exhaustively on this enum rather than looking the tool up in a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolTarget {
    Claudecode,
    Cursor,
    Copilot,
    Cline,
    Roo,
    Geminicli,
    Kiro,
}

impl ToolTarget {
    pub const ALL: [ToolTarget; 7] = [
        ToolTarget::Claudecode,
        ToolTarget::Cursor,
        ToolTarget::Copilot,
        ToolTarget::Cline,
        ToolTarget::Roo,
        ToolTarget::Geminicli,
        ToolTarget::Kiro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolTarget::Claudecode => "claudecode",
            ToolTarget::Cursor => "cursor",
            ToolTarget::Copilot => "copilot",
            ToolTarget::Cline => "cline",
            ToolTarget::Roo => "roo",
            ToolTarget::Geminicli => "geminicli",
            ToolTarget::Kiro => "kiro",
        }
    }

    /// Whether the tool has a native MCP server configuration file that
    /// rulesync knows how to populate.
    pub fn supports_mcp(&self) -> bool {
        matches!(
            self,
            ToolTarget::Claudecode | ToolTarget::Cursor | ToolTarget::Cline
        )
    }
}

impl fmt::Display for ToolTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToolTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claudecode" => Ok(ToolTarget::Claudecode),
            "cursor" => Ok(ToolTarget::Cursor),
            "copilot" => Ok(ToolTarget::Copilot),
            "cline" => Ok(ToolTarget::Cline),
            "roo" => Ok(ToolTarget::Roo),
            "geminicli" => Ok(ToolTarget::Geminicli),
            "kiro" => Ok(ToolTarget::Kiro),
            other => Err(format!("Unknown tool: {}", other)),
        }
    }
}

/// One entry of a rule's `targets` list: either a concrete tool or the
/// wildcard `"*"` meaning every tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSpec {
    Wildcard,
    Tool(ToolTarget),
}

impl TargetSpec {
    pub fn matches(&self, tool: ToolTarget) -> bool {
        match self {
            TargetSpec::Wildcard => true,
            TargetSpec::Tool(t) => *t == tool,
        }
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSpec::Wildcard => write!(f, "*"),
            TargetSpec::Tool(t) => write!(f, "{}", t),
        }
    }
}

impl FromStr for TargetSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            Ok(TargetSpec::Wildcard)
        } else {
            s.parse().map(TargetSpec::Tool)
        }
    }
}

impl Serialize for TargetSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TargetSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
