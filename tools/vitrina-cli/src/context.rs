//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use vitrina_data::{CatalogSource, HttpCatalogSource, StaticCatalog};
use vitrina_list::{FileStorage, ShoppingListStore};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config_file(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }

    /// Open the file-backed shopping list.
    pub fn open_list(&self) -> Result<ShoppingListStore<FileStorage>> {
        let dir = self.resolve_path(&self.config.storage.dir);
        let storage = FileStorage::open(&dir)
            .with_context(|| format!("Failed to open list storage: {}", dir.display()))?;
        Ok(ShoppingListStore::load(storage))
    }

    /// The catalog source: a snapshot file when given, otherwise the
    /// configured remote service.
    pub fn catalog_source(&self, snapshot: Option<&str>) -> Result<Box<dyn CatalogSource>> {
        if let Some(path) = snapshot {
            let path = self.resolve_path(path);
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
            let catalog = StaticCatalog::from_json(&json)
                .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
            self.output.debug(&format!("Using snapshot {}", path.display()));
            return Ok(Box::new(catalog));
        }

        let Some(base_url) = &self.config.data.base_url else {
            bail!("No catalog source. Pass --snapshot or set data.base_url in vitrina.toml.");
        };

        self.output.debug(&format!("Using remote catalog {}", base_url));
        let mut source = HttpCatalogSource::new(base_url.as_str());
        if let Some(key) = &self.config.data.api_key {
            source = source.with_api_key(key.as_str());
        }
        Ok(Box::new(source))
    }
}

/// Find a config file in the directory tree.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".vitrina.toml"), "").unwrap();

        assert_eq!(
            find_config_file(&nested),
            Some(root.path().join(".vitrina.toml"))
        );
    }

    #[test]
    fn test_find_config_prefers_plain_name() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("vitrina.toml"), "").unwrap();
        std::fs::write(root.path().join("vitrina.json"), "{}").unwrap();
        assert_eq!(
            find_config_file(root.path()),
            Some(root.path().join("vitrina.toml"))
        );
    }
}
