use crate::error::{Result, ScopeError};
use crate::types::config::ScopeConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "scopecheck.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".scopecheck/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/scopecheck/config.toml";

/// Sources a configuration is assembled from, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayer {
    Global,
    Project,
    Local,
}

impl ConfigLayer {
    const ORDER: [ConfigLayer; 3] = [Self::Global, Self::Project, Self::Local];

    fn path(self, root: &Path, global: Option<&Path>) -> Option<PathBuf> {
        match self {
            Self::Global => global.map(Path::to_path_buf),
            Self::Project => Some(root.join(DEFAULT_CONFIG_FILE)),
            Self::Local => Some(root.join(DEFAULT_LOCAL_FILE)),
        }
    }
}

pub fn load_config(root: &Path) -> Result<Option<ScopeConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Without a project file nothing is loaded, so a stray global file never
/// changes scoring.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ScopeConfig>> {
    if !root.join(DEFAULT_CONFIG_FILE).is_file() {
        return Ok(None);
    }

    let mut merged = Table::new();
    for layer in ConfigLayer::ORDER {
        let Some(path) = layer.path(root, global_path).filter(|path| path.is_file()) else {
            continue;
        };
        debug!(?layer, path = %path.display(), "merging config layer");
        overlay_table(&mut merged, read_layer(&path)?);
    }

    let cfg: ScopeConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| ScopeError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str::<Table>(&content)
        .map_err(|e| ScopeError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Nested tables merge key by key; any other value in `overlay` replaces the base.
fn overlay_table(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match value {
            Value::Table(nested) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => overlay_table(existing, nested),
                _ => {
                    base.insert(key, Value::Table(nested));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}
