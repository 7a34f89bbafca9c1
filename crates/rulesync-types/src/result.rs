use crate::mcp::McpConfig;
use crate::rule::Rule;
use crate::tool::ToolTarget;
use serde::Serialize;
use std::path::PathBuf;

/// Output of one parser invocation. Parsers never fail hard: expected
/// absence of configuration yields empty rules with no error, and malformed
/// input is reported as error strings next to whatever did parse.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub rules: Vec<Rule>,
    pub errors: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub mcp_servers: Option<McpConfig>,
}

impl ParseResult {
    /// Result for a tool with no real parser implementation, so the
    /// orchestrator can report it uniformly instead of special-casing.
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            ..Default::default()
        }
    }
}

/// One physical file to write, produced by a generator and written by the
/// caller. Generators render; they do not perform I/O for rule files.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedOutput {
    pub tool: ToolTarget,
    pub filepath: PathBuf,
    pub content: String,
}

/// Aggregate outcome of one `convert_tool_configurations` call. Fully
/// populated by the time the call returns; errors and warnings accumulate
/// instead of aborting the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ConversionResult {
    pub source_rules: Vec<Rule>,
    pub outputs: Vec<GeneratedOutput>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Per-target outcome of the MCP fan-out. Each target succeeds, skips, or
/// fails independently of every other target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum McpStatus {
    Success,
    Skipped,
    Error,
}

#[derive(Debug, Clone)]
pub struct McpGenerationResult {
    pub tool: String,
    pub path: PathBuf,
    pub status: McpStatus,
    pub error: Option<String>,
}
