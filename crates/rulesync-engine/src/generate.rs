use anyhow::Result;
use rulesync_core::{Config, write_file_content};
use rulesync_providers::ToolAdapter;
use rulesync_types::{GeneratedOutput, Rule, ToolTarget};
use std::path::Path;

/// Render the given rules for every requested target tool in one batched
/// call. Rules are filtered per target by their `targets` frontmatter; a
/// target that ends up with zero applicable rules contributes zero outputs.
pub fn generate_configurations(
    rules: &[Rule],
    config: &Config,
    targets: &[ToolTarget],
    base_dir: &Path,
) -> Result<Vec<GeneratedOutput>> {
    let mut outputs = Vec::new();

    for &target in targets {
        let applicable: Vec<Rule> = rules
            .iter()
            .filter(|rule| rule.applies_to(target))
            .cloned()
            .collect();

        let adapter = ToolAdapter::for_tool(target);
        outputs.extend(adapter.generator.generate(&applicable, config, base_dir)?);
    }

    Ok(outputs)
}

/// Write rendered outputs to disk, creating parent directories as needed.
/// Generators render; this is the single place rule files touch the FS.
pub fn write_outputs(outputs: &[GeneratedOutput]) -> Result<()> {
    for output in outputs {
        write_file_content(&output.filepath, &output.content)?;
    }
    Ok(())
}
