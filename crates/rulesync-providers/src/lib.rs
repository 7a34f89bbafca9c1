pub mod claudecode;
pub mod cline;
pub mod copilot;
pub mod cursor;
pub mod geminicli;
pub mod kiro;
mod markdown;
pub mod mcp;
pub mod registry;
pub mod roo;
pub mod traits;

pub use mcp::{MCP_TARGETS, McpTarget, McpWriteMode, RenderedMcp};
pub use registry::{ToolMetadata, get_all_tools, get_tool_metadata, get_tool_names};
pub use traits::{RuleGenerator, RuleParser, ToolAdapter};
