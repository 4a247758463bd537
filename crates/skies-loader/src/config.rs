use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::{DEFAULT_EXTENSION, Dataset, DatasetKind};
use crate::error::LoadError;
use crate::game_data::GameData;
use crate::loader::load_from;

/// Where the loader finds each dataset's backing file.
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────┐
/// │ Field      │ Purpose                                          │
/// ├────────────┼──────────────────────────────────────────────────┤
/// │ root       │ Directory holding the conventionally named files │
/// │ extension  │ File extension appended to each dataset name     │
/// │ overrides  │ Explicit paths for datasets with unusual names   │
/// └────────────┴──────────────────────────────────────────────────┘
/// ```
///
/// An override is used as given; it is not joined onto `root`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    pub root: PathBuf,
    pub extension: String,
    pub overrides: BTreeMap<DatasetKind, PathBuf>,
}

impl Default for LoaderConfig {
    /// Current directory, `.dat` files, no overrides.
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_owned(),
            overrides: BTreeMap::new(),
        }
    }
}

impl LoaderConfig {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Read `kind` from `path` instead of its conventional location.
    #[must_use]
    pub fn with_override(mut self, kind: DatasetKind, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(kind, path.into());
        self
    }

    /// Resolve the backing file for `kind`.
    #[must_use]
    pub fn path_for(&self, kind: DatasetKind) -> PathBuf {
        match self.overrides.get(&kind) {
            Some(path) => path.clone(),
            None => self.root.join(Path::new(kind.name()).with_extension(&self.extension)),
        }
    }

    /// Load one dataset from its resolved path.
    ///
    /// # Errors
    ///
    /// See [`load_from`].
    pub fn load(&self, kind: DatasetKind) -> Result<Dataset, LoadError> {
        load_from(kind, &self.path_for(kind))
    }

    /// Load every dataset in catalog order.
    ///
    /// Each dataset is loaded independently: a missing or corrupt file is
    /// recorded against its own dataset and the rest still load.
    #[must_use]
    pub fn load_all(&self) -> GameData {
        let mut data = GameData::default();
        for kind in DatasetKind::ALL {
            data.insert(kind, self.load(kind));
        }
        data
    }
}
