//! API layer configuration
//!
//! Session-wide settings plus a global singleton for CLI convenience.
//! Library users should construct sessions with explicit config instead.

use godel_config::EditorConfig;
use godel_log::Logger;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Session configuration
#[derive(Clone)]
pub struct SessionConfig {
    /// Editor-facing behavior
    pub editor: EditorConfig,
    /// Logger (noop by default)
    pub logger: Arc<Logger>,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("editor", &self.editor)
            .finish()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            logger: Logger::noop(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<SessionConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: SessionConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static SessionConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_config() {
        let cfg = SessionConfig::default();
        assert!(cfg.editor.compile_on_change);
        assert!(cfg.editor.forward_whitespace);
    }

    #[test]
    fn test_session_config_debug() {
        let debug_str = format!("{:?}", SessionConfig::default());
        assert!(debug_str.contains("editor"));
    }

    #[test]
    fn test_global_config_init_and_get() {
        // Global state: skip quietly if another test initialized first
        if !is_initialized() {
            init(SessionConfig::default());
            assert!(is_initialized());
            assert!(config().editor.compile_on_change);
        }
    }
}
