// SPDX-License-Identifier: MPL-2.0
//! Where settings and session state live on disk.
//!
//! Both directories resolve in the same order:
//! 1. an explicit override passed to a `_with_override()` function (tests)
//! 2. `--config-dir` / `--data-dir`, registered once via [`init_cli_overrides`]
//! 3. `INLINE_LENS_CONFIG_DIR` / `INLINE_LENS_DATA_DIR`
//! 4. the platform directory from `dirs`, with the application name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "InlineLens";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "INLINE_LENS_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "INLINE_LENS_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the directories given on the command line.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("directory overrides were already initialized");
    }
}

/// Which of the two application directories is being resolved.
#[derive(Debug, Clone, Copy)]
enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            DirKind::Data => &CLI_DATA_DIR,
            DirKind::Config => &CLI_CONFIG_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            DirKind::Data => ENV_DATA_DIR,
            DirKind::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform_dir(self) -> Option<PathBuf> {
        match self {
            DirKind::Data => dirs::data_dir(),
            DirKind::Config => dirs::config_dir(),
        }
    }
}

fn resolve(kind: DirKind, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path.or_else(|| kind.cli_override()) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(kind.env_var()) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    kind.platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding `state.cbor`.
pub fn get_app_data_dir() -> Option<PathBuf> {
    resolve(DirKind::Data, None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Data, override_path)
}

/// Returns the directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    resolve(DirKind::Config, None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Config, override_path)
}
