//! Map catalog - the backgrounds a board session can be opened on.
//!
//! Loads from a JSON config file when present, otherwise falls back to the
//! built-in competitive map pool.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A selectable map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapInfo {
    pub id: String,
    pub name: String,
}

/// Ordered, id-keyed catalog of maps.
#[derive(Debug, Clone)]
pub struct MapCatalog {
    maps: Vec<MapInfo>,
}

impl MapCatalog {
    /// The built-in map pool.
    pub fn builtin() -> Self {
        let maps = [
            ("bind", "BIND"),
            ("haven", "HAVEN"),
            ("split", "SPLIT"),
            ("ascent", "ASCENT"),
            ("icebox", "ICEBOX"),
            ("breeze", "BREEZE"),
            ("fracture", "FRACTURE"),
            ("pearl", "PEARL"),
            ("lotus", "LOTUS"),
            ("sunset", "SUNSET"),
            ("abyss", "ABYSS"),
        ]
        .into_iter()
        .map(|(id, name)| MapInfo {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();
        Self { maps }
    }

    /// Load the catalog from the config directory, falling back to the
    /// built-in pool when the file is missing or unusable.
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            match Self::load_from(&path) {
                Ok(catalog) => {
                    debug!("loaded {} maps from {}", catalog.len(), path.display());
                    return catalog;
                }
                Err(e) => {
                    warn!("ignoring map catalog at {}: {:#}", path.display(), e);
                }
            }
        }
        Self::builtin()
    }

    /// Load the catalog from an explicit file. Unlike `load`, errors here
    /// are reported to the caller.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading map catalog {}", path.display()))?;
        let maps: Vec<MapInfo> = serde_json::from_str(&content)
            .with_context(|| format!("parsing map catalog {}", path.display()))?;
        if maps.is_empty() {
            bail!("map catalog {} lists no maps", path.display());
        }
        Ok(Self { maps })
    }

    /// Get the config file path.
    fn config_path() -> PathBuf {
        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            });
        config_dir.join("stratboard").join("maps.json")
    }

    /// Index of the map with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.maps.iter().position(|map| map.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&MapInfo> {
        self.maps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapInfo> {
        self.maps.iter()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_pool_is_ordered_and_keyed() {
        let catalog = MapCatalog::builtin();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.position("bind"), Some(0));
        assert_eq!(catalog.position("abyss"), Some(10));
        assert_eq!(catalog.position("range"), None);
        assert_eq!(catalog.get(3).map(|m| m.name.as_str()), Some("ASCENT"));
    }

    #[test]
    fn load_from_reads_a_json_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "foundry", "name": "FOUNDRY"}}, {{"id": "drift", "name": "DRIFT"}}]"#
        )
        .unwrap();

        let catalog = MapCatalog::load_from(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position("drift"), Some(1));
    }

    #[test]
    fn load_from_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(MapCatalog::load_from(file.path()).is_err());
    }

    #[test]
    fn load_from_rejects_an_empty_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(MapCatalog::load_from(file.path()).is_err());
    }

    #[test]
    fn load_from_reports_missing_files() {
        assert!(MapCatalog::load_from(Path::new("/nonexistent/maps.json")).is_err());
    }
}
