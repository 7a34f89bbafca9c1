use rulesync_types::ToolTarget;

/// Known lossy or semantically-shifted conversions between a source and a
/// target tool. Pure lookup; warnings are advisory and never suppress
/// generation.
///
/// Independent of the pair table, converting away from a tool with MCP
/// server support to one without it always warns, since the server
/// definitions have nowhere to go.
pub fn warnings_for(source: ToolTarget, target: ToolTarget) -> Vec<String> {
    let mut warnings = Vec::new();

    match (source, target) {
        (ToolTarget::Cursor, ToolTarget::Copilot) => warnings.push(
            "Cursor rule types (always/manual/specificFiles/intelligently) will be noted in descriptions"
                .to_string(),
        ),
        (ToolTarget::Cursor, ToolTarget::Claudecode) => warnings
            .push("Cursor .mdc files will be converted to standard markdown format".to_string()),
        (ToolTarget::Cursor, ToolTarget::Cline) => warnings.push(
            "Cursor ignore patterns may not translate directly to Cline format".to_string(),
        ),
        (ToolTarget::Copilot, ToolTarget::Cursor) => warnings.push(
            "GitHub Copilot instructions will be converted to Cursor rules format".to_string(),
        ),
        (ToolTarget::Copilot, ToolTarget::Claudecode) => warnings.push(
            "Copilot-specific formatting may need manual adjustment for Claude Code".to_string(),
        ),
        _ => {}
    }

    if source.supports_mcp() && !target.supports_mcp() {
        warnings
            .push("MCP server configurations are not supported in the target tool".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_to_copilot_warns_about_rule_types_and_mcp() {
        let warnings = warnings_for(ToolTarget::Cursor, ToolTarget::Copilot);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("rule types"));
        assert!(warnings[1].contains("MCP server configurations"));
    }

    #[test]
    fn cursor_to_cline_has_no_mcp_warning() {
        let warnings = warnings_for(ToolTarget::Cursor, ToolTarget::Cline);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ignore patterns"));
    }

    #[test]
    fn unrelated_pair_without_mcp_gap_is_clean() {
        assert!(warnings_for(ToolTarget::Roo, ToolTarget::Copilot).is_empty());
        assert!(warnings_for(ToolTarget::Copilot, ToolTarget::Roo).is_empty());
    }

    #[test]
    fn mcp_gap_alone_still_warns() {
        let warnings = warnings_for(ToolTarget::Claudecode, ToolTarget::Roo);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not supported in the target tool"));
    }
}
