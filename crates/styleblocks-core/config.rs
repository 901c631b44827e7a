//! Compiler configuration passed through to definition-file passes
//!
//! Carries the settings needed to compute display paths for diagnostics.
//! Passes treat the configuration as opaque beyond path display, so the
//! surrounding pipeline can grow settings without touching pass signatures.

use std::path::{Path, PathBuf};

/// Configuration for definition-file processing
///
/// # Example
///
/// ```rust
/// use styleblocks_core::CompilerConfig;
///
/// let config = CompilerConfig::new().with_root("/project");
/// assert_eq!(config.display_path("/project/blocks/nav.block"), "blocks/nav.block");
/// assert_eq!(config.display_path("elsewhere/nav.block"), "elsewhere/nav.block");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompilerConfig {
    /// Project root that diagnostic paths are made relative to
    root: Option<PathBuf>,
}

impl CompilerConfig {
    /// Create a configuration with no project root
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project root for diagnostic path display
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Configured project root, if any
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Path as shown in diagnostics
    ///
    /// Relative to the configured root when the path lives under it;
    /// otherwise the path is shown as given.
    #[must_use]
    pub fn display_path(&self, path: &str) -> String {
        if let Some(root) = &self.root {
            if let Ok(stripped) = Path::new(path).strip_prefix(root) {
                let display = stripped.to_string_lossy();
                if !display.is_empty() {
                    return display.into_owned();
                }
            }
        }
        path.to_string()
    }
}
