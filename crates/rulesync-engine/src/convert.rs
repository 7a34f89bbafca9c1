use crate::compat::warnings_for;
use crate::generate::generate_configurations;
use rulesync_core::Config;
use rulesync_providers::ToolAdapter;
use rulesync_types::{ConversionResult, Rule, TargetSpec, ToolTarget};
use std::path::PathBuf;

/// One conversion: read `source_tool`'s native configuration under
/// `base_dir` and re-emit it for `target_tools`. Target distinct from
/// source is a caller-level precondition, enforced upstream.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source_tool: ToolTarget,
    pub target_tools: Vec<ToolTarget>,
    pub base_dir: PathBuf,
}

/// Parse, transform, generate, and warn. Errors accumulate in the result
/// instead of aborting: parse errors are collected next to whatever did
/// parse, and a failure during generation becomes a single summarizing
/// entry. The function itself never fails.
pub fn convert_tool_configurations(request: &ConversionRequest) -> ConversionResult {
    let mut result = ConversionResult::default();

    let adapter = ToolAdapter::for_tool(request.source_tool);
    let parsed = adapter.parser.parse(&request.base_dir);
    result.errors.extend(parsed.errors.iter().cloned());

    // No generation on empty input, so converting from an unconfigured
    // tool never produces empty-shell files.
    if parsed.rules.is_empty() {
        result.errors.push(format!(
            "No configuration found for {} in {}",
            request.source_tool,
            request.base_dir.display()
        ));
        return result;
    }

    result.source_rules = parsed.rules.clone();

    let transformed = transform_rules_for_targets(&parsed.rules, request.source_tool);

    match generate_configurations(
        &transformed,
        &Config::default(),
        &request.target_tools,
        &request.base_dir,
    ) {
        Ok(outputs) => result.outputs = outputs,
        Err(e) => {
            result.errors.push(format!("Conversion failed: {}", e));
            return result;
        }
    }

    for &target in &request.target_tools {
        for caveat in warnings_for(request.source_tool, target) {
            result
                .warnings
                .push(format!("{} → {}: {}", request.source_tool, target, caveat));
        }
    }

    result
}

/// Normalize parsed rules for re-emission. Produces new Rule values; the
/// input is never mutated and `content` passes through byte-identical.
///
/// Two adjustments:
/// - targets naming the source tool become `["*"]` — a tool-scoped rule,
///   once exported, should apply broadly rather than staying scoped to the
///   tool it is being converted away from
/// - a Cursor activation mode is noted in the description as
///   `[Converted from Cursor <type> rule]`, on a new paragraph when a
///   description already exists
pub fn transform_rules_for_targets(rules: &[Rule], source_tool: ToolTarget) -> Vec<Rule> {
    rules
        .iter()
        .map(|rule| {
            let mut transformed = rule.clone();

            if transformed
                .frontmatter
                .targets
                .iter()
                .any(|t| *t == TargetSpec::Tool(source_tool))
            {
                transformed.frontmatter.targets = vec![TargetSpec::Wildcard];
            }

            if source_tool == ToolTarget::Cursor {
                if let Some(rule_type) = transformed.frontmatter.cursor_rule_type {
                    let note = format!("[Converted from Cursor {} rule]", rule_type);
                    transformed.frontmatter.description =
                        if transformed.frontmatter.description.is_empty() {
                            note
                        } else {
                            format!("{}\n\n{}", transformed.frontmatter.description, note)
                        };
                }
            }

            transformed
        })
        .collect()
}
