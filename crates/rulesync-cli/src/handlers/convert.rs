use crate::views;
use anyhow::{Result, bail};
use rulesync_engine::{ConversionRequest, convert_tool_configurations, write_outputs};
use rulesync_types::ToolTarget;
use std::path::Path;

pub fn handle(
    base_dir: &Path,
    from: ToolTarget,
    to: &[ToolTarget],
    verbose: bool,
) -> Result<()> {
    if to.contains(&from) {
        bail!("Cannot convert from {} to itself", from);
    }

    if verbose {
        views::info(&format!(
            "Converting from {} to {}",
            from,
            to.iter()
                .map(ToolTarget::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ));
        views::info(&format!("Base directory: {}", base_dir.display()));
    }

    let request = ConversionRequest {
        source_tool: from,
        target_tools: to.to_vec(),
        base_dir: base_dir.to_path_buf(),
    };
    let result = convert_tool_configurations(&request);

    if !result.errors.is_empty() {
        views::error("Conversion completed with errors:");
        for error in &result.errors {
            views::detail(error);
        }
    }

    if !result.warnings.is_empty() {
        views::warn("Conversion completed with warnings:");
        for warning in &result.warnings {
            views::detail(warning);
        }
    }

    if result.outputs.is_empty() {
        views::warn("No configurations generated");
        return Ok(());
    }

    write_outputs(&result.outputs)?;
    views::success(&format!(
        "Successfully converted {} rule(s) from {}",
        result.source_rules.len(),
        from
    ));
    for output in &result.outputs {
        views::success(&format!(
            "Generated {} configuration: {}",
            output.tool,
            output.filepath.display()
        ));
    }

    views::info(&format!(
        "\n🎉 Conversion complete! Generated {} configuration file(s).",
        result.outputs.len()
    ));
    Ok(())
}
