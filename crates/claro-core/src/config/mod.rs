//! Pipeline configuration management.
//!
//! Provides optional YAML config loading, the global verbose flag, and
//! the tuning defaults used when no config file is present.

mod defaults;


pub use defaults::EnhanceDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["claro.yml", "claro.yaml"];

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct ClaroConfigHandle {
    pub config: ClaroConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl ClaroConfigHandle {
    fn with_config(config: ClaroConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ClaroConfig {
    pub defaults: EnhanceDefaults,
}

impl ClaroConfig {
    fn sanitize(mut self, warnings: &mut Vec<String>) -> Self {
        self.defaults.sanitize(warnings);
        self
    }
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// A missing config file is not an error; the built-in defaults are used
/// and a note is appended to the warning list.
pub fn load_claro_config(custom_path: Option<&Path>) -> ClaroConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<ClaroConfig>(&contents) {
                Ok(config) => {
                    let sanitized = config.sanitize(&mut warnings);
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return ClaroConfigHandle::with_config(sanitized, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No config file found; using built-in defaults.".to_string());
    ClaroConfigHandle::with_config(ClaroConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("CLARO_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join(".claro").join(name));
        }
    }

    candidates
}

static CLARO_CONFIG_HANDLE: OnceLock<ClaroConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global configuration (loaded once per process).
pub fn claro_config_handle() -> &'static ClaroConfigHandle {
    CLARO_CONFIG_HANDLE.get_or_init(|| load_claro_config(None))
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = claro_config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[claro] Loaded config from {}", source.display());
        } else {
            eprintln!("[claro] Using built-in defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[claro] Config warning: {}", warning);
        }
    });
}
