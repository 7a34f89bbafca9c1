use crate::views;
use anyhow::{Result, bail};
use rulesync_core::{Config, remove_directory, remove_file_if_exists};
use rulesync_engine::{
    generate_configurations, generate_mcp_configs, parse_rules_from_directory, write_outputs,
};
use rulesync_providers::get_tool_metadata;
use rulesync_types::{McpStatus, ToolTarget};
use std::path::Path;

pub fn handle(
    base_dir: &Path,
    tools: Option<&[ToolTarget]>,
    delete: bool,
    verbose: bool,
) -> Result<()> {
    let config = Config::load(base_dir)?;
    views::info("Generating configuration files...");

    let rules_dir = base_dir.join(&config.ai_rules_dir);
    if !rules_dir.is_dir() {
        bail!(".rulesync directory not found. Run 'rulesync init' first.");
    }

    if verbose {
        views::info(&format!("Parsing rules from {}...", rules_dir.display()));
    }
    let rules = parse_rules_from_directory(&config, base_dir)?;
    if rules.is_empty() {
        views::warn("No rules found in .rulesync directory");
        return Ok(());
    }
    if verbose {
        views::info(&format!("Found {} rule(s)", rules.len()));
    }

    let targets: Vec<ToolTarget> = tools
        .map(<[ToolTarget]>::to_vec)
        .unwrap_or_else(|| config.default_targets.clone());

    if verbose {
        for &tool in &targets {
            if let Some(meta) = get_tool_metadata(tool) {
                views::detail(&format!(
                    "{} ({}) -> {}",
                    tool, meta.description, meta.config_location
                ));
            }
        }
    }

    if delete {
        clean_outputs(&config, &targets, base_dir)?;
        if verbose {
            views::info("Deleted existing output directories");
        }
    }

    let outputs = generate_configurations(&rules, &config, &targets, base_dir)?;
    if outputs.is_empty() {
        views::warn("No configurations generated");
        return Ok(());
    }

    write_outputs(&outputs)?;
    for output in &outputs {
        views::success(&format!(
            "Generated {} configuration: {}",
            output.tool,
            output.filepath.display()
        ));
    }

    let mcp_results = generate_mcp_configs(base_dir, None)?;
    let mut mcp_written = 0;
    for result in &mcp_results {
        match result.status {
            McpStatus::Success => {
                mcp_written += 1;
                views::success(&format!(
                    "Generated {} MCP configuration: {}",
                    result.tool,
                    result.path.display()
                ));
            }
            McpStatus::Error => views::error(&format!(
                "Failed to generate {} MCP configuration: {}",
                result.tool,
                result.error.as_deref().unwrap_or("unknown error")
            )),
            McpStatus::Skipped => {
                if verbose {
                    views::info(&format!(
                        "Skipped {} MCP configuration (no servers configured)",
                        result.tool
                    ));
                }
            }
        }
    }

    views::info(&format!(
        "\n🎉 All done! Generated {} file(s) total ({} configurations + {} MCP configurations)",
        outputs.len() + mcp_written,
        outputs.len(),
        mcp_written
    ));
    Ok(())
}

/// Remove previous outputs for the requested tools. Tools whose umbrella
/// file sits at the project root are cleaned file by file so the rest of
/// the root is never touched.
fn clean_outputs(config: &Config, targets: &[ToolTarget], base_dir: &Path) -> Result<()> {
    for &tool in targets {
        match tool {
            ToolTarget::Claudecode => {
                remove_file_if_exists(&base_dir.join("CLAUDE.md"))?;
                remove_directory(&base_dir.join(".claude/memories"))?;
            }
            ToolTarget::Geminicli => {
                remove_file_if_exists(&base_dir.join("GEMINI.md"))?;
                remove_directory(&base_dir.join(".gemini/memories"))?;
            }
            _ => remove_directory(&base_dir.join(config.output_path(tool)))?,
        }
    }
    Ok(())
}
