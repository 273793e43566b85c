use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Patterns that are always active, independent of project configuration.
const DEFAULT_PATTERNS: &[&str] = &[
    // Build artifacts
    "target",
    "node_modules",
    "dist",
    // Version control
    ".git",
    // Environment and logs
    ".env",
    "*.log",
    // Lock files
    "*.lock",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    // Coverage output
    "coverage",
    // OS metadata
    ".DS_Store",
    "thumbs.db",
    // Reserved output directory
    "summarize/**/*",
];

/// Ignore file names loaded from the project root, in merge order.
const IGNORE_FILES: &[&str] = &[".gitignore", ".summaryignore"];

/// Merged exclusion rules deciding which paths the traversal skips.
///
/// Patterns use the gitignore dialect: `*`/`**` wildcards, trailing-slash
/// directory anchors, and line-order-sensitive `!` negation. Sources are
/// merged in a fixed order (defaults, `.gitignore`, `.summaryignore`), so a
/// later file can re-include what an earlier source excluded.
pub struct IgnoreRules {
    root: PathBuf,
    patterns: Vec<String>,
    matcher: Gitignore,
    initialized: bool,
}

impl IgnoreRules {
    pub fn new() -> Self {
        let patterns: Vec<String> = DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect();
        let root = PathBuf::new();
        let matcher = Self::compile(&root, &patterns);
        Self {
            root,
            patterns,
            matcher,
            initialized: false,
        }
    }

    /// Load `.gitignore` and `.summaryignore` from the project root.
    ///
    /// Runs at most once per instance; later calls are no-ops, which binds an
    /// instance to the first root it saw. Missing files are skipped.
    pub fn initialize(&mut self, project_root: &Path) {
        if self.initialized {
            return;
        }
        self.root = project_root.to_path_buf();

        for &name in IGNORE_FILES {
            let path = project_root.join(name);
            match fs::read_to_string(&path) {
                Ok(content) => {
                    let before = self.patterns.len();
                    self.patterns.extend(
                        content
                            .lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty() && !line.starts_with('#'))
                            .map(String::from),
                    );
                    info!(
                        path = %path.display(),
                        patterns = self.patterns.len() - before,
                        "Loaded ignore file"
                    );
                }
                Err(_) => {
                    info!(file = name, "Ignore file not found");
                }
            }
        }

        self.matcher = Self::compile(&self.root, &self.patterns);
        self.initialized = true;
    }

    /// Append a pattern programmatically, after any already-loaded sources.
    pub fn add_pattern(&mut self, pattern: impl Into<String>) {
        self.patterns.push(pattern.into());
        self.matcher = Self::compile(&self.root, &self.patterns);
    }

    /// Whether a root-relative path is excluded from the traversal.
    pub fn should_ignore(&self, relative_path: &str, is_dir: bool) -> bool {
        let normalized = relative_path.replace('\\', "/");
        self.matcher
            .matched(Path::new(&normalized), is_dir)
            .is_ignore()
    }

    fn compile(root: &Path, patterns: &[String]) -> Gitignore {
        let mut builder = GitignoreBuilder::new(root);
        for pattern in patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                warn!(pattern = %pattern, error = %e, "Skipping invalid ignore pattern");
            }
        }
        builder.build().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to build ignore matcher, ignoring nothing");
            Gitignore::empty()
        })
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_excludes_build_artifacts() {
        let rules = IgnoreRules::new();

        assert!(rules.should_ignore("target", true));
        assert!(rules.should_ignore("node_modules", true));
        assert!(rules.should_ignore("dist", true));
        assert!(!rules.should_ignore("src", true));
    }

    #[test]
    fn test_default_excludes_at_any_depth() {
        let rules = IgnoreRules::new();

        assert!(rules.should_ignore("packages/app/node_modules", true));
        assert!(rules.should_ignore("deep/nested/.git", true));
    }

    #[test]
    fn test_default_excludes_logs_and_locks() {
        let rules = IgnoreRules::new();

        assert!(rules.should_ignore("debug.log", false));
        assert!(rules.should_ignore("Cargo.lock", false));
        assert!(rules.should_ignore("package-lock.json", false));
        assert!(!rules.should_ignore("main.rs", false));
    }

    #[test]
    fn test_default_excludes_reserved_output_dir() {
        let rules = IgnoreRules::new();

        assert!(rules.should_ignore("summarize/out.md", false));
        assert!(rules.should_ignore("summarize/deep/out.md", false));
    }

    #[test]
    fn test_initialize_loads_gitignore() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "build/\n*.tmp\n").unwrap();

        let mut rules = IgnoreRules::new();
        rules.initialize(dir.path());

        assert!(rules.should_ignore("build", true));
        assert!(rules.should_ignore("scratch.tmp", false));
        assert!(!rules.should_ignore("src/main.rs", false));
    }

    #[test]
    fn test_initialize_loads_summaryignore() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".summaryignore"), "docs\n").unwrap();

        let mut rules = IgnoreRules::new();
        rules.initialize(dir.path());

        assert!(rules.should_ignore("docs", true));
    }

    #[test]
    fn test_initialize_skips_comments_and_blank_lines() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "# comment\n\n*.tmp\n").unwrap();

        let mut rules = IgnoreRules::new();
        rules.initialize(dir.path());

        assert!(rules.should_ignore("a.tmp", false));
        assert!(!rules.should_ignore("# comment", false));
    }

    #[test]
    fn test_initialize_missing_files_is_not_an_error() {
        let dir = TempDir::new().unwrap();

        let mut rules = IgnoreRules::new();
        rules.initialize(dir.path());

        assert!(!rules.should_ignore("src/main.rs", false));
        assert!(rules.should_ignore("node_modules", true));
    }

    #[test]
    fn test_initialize_runs_once() {
        let first = TempDir::new().unwrap();
        fs::write(first.path().join(".gitignore"), "alpha\n").unwrap();
        let second = TempDir::new().unwrap();
        fs::write(second.path().join(".gitignore"), "beta\n").unwrap();

        let mut rules = IgnoreRules::new();
        rules.initialize(first.path());
        rules.initialize(second.path());

        assert!(rules.should_ignore("alpha", true));
        assert!(!rules.should_ignore("beta", true));
    }

    #[test]
    fn test_negation_reincludes_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "!keep.log\n").unwrap();

        let mut rules = IgnoreRules::new();
        rules.initialize(dir.path());

        // Defaults exclude *.log; the later negation wins for keep.log only.
        assert!(!rules.should_ignore("keep.log", false));
        assert!(rules.should_ignore("other.log", false));
    }

    #[test]
    fn test_add_pattern() {
        let mut rules = IgnoreRules::new();
        assert!(!rules.should_ignore("backup.bak", false));

        rules.add_pattern("*.bak");
        assert!(rules.should_ignore("backup.bak", false));
    }

    #[test]
    fn test_normalizes_backslash_separators() {
        let rules = IgnoreRules::new();

        assert!(rules.should_ignore("packages\\app\\node_modules", true));
    }
}
