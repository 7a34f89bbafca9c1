use std::path::Path;

pub const IGNORE_FILE: &str = ".rulesyncignore";

/// Glob patterns from a project's `.rulesyncignore`, in file order.
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    pub patterns: Vec<String>,
}

/// Load `.rulesyncignore` from `base_dir`. A missing file means no
/// patterns; comment lines (`#`) and blank lines are skipped.
pub fn load_ignore_patterns(base_dir: &Path) -> IgnorePatterns {
    let path = base_dir.join(IGNORE_FILE);
    let Ok(content) = std::fs::read_to_string(&path) else {
        return IgnorePatterns::default();
    };

    let patterns = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    IgnorePatterns { patterns }
}
