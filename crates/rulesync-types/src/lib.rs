pub mod mcp;
pub mod result;
pub mod rule;
pub mod tool;

pub use mcp::*;
pub use result::*;
pub use rule::*;
pub use tool::*;
