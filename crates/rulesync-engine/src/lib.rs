//! Conversion orchestration on top of the per-tool adapters: reading the
//! canonical rule directory, batched generation for a set of target tools,
//! tool-to-tool conversion with compatibility warnings, and the MCP
//! configuration fan-out.

pub mod compat;
pub mod convert;
pub mod generate;
pub mod mcp_fanout;
pub mod rules;

pub use compat::warnings_for;
pub use convert::{ConversionRequest, convert_tool_configurations, transform_rules_for_targets};
pub use generate::{generate_configurations, write_outputs};
pub use mcp_fanout::generate_mcp_configs;
pub use rules::parse_rules_from_directory;
