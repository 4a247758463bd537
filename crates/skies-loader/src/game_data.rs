use std::collections::BTreeMap;

use crate::catalog::{Dataset, DatasetKind};
use crate::error::LoadError;

/// Outcome of loading every dataset: one result per catalog entry.
///
/// Failures are kept per dataset instead of aborting the whole load.
/// Iteration follows catalog order.
#[derive(Debug, Default)]
pub struct GameData {
    results: BTreeMap<DatasetKind, Result<Dataset, LoadError>>,
}

impl GameData {
    pub(crate) fn insert(&mut self, kind: DatasetKind, result: Result<Dataset, LoadError>) {
        if let Err(err) = &result {
            tracing::warn!(dataset = %kind, error = %err, "dataset failed to load");
        }
        self.results.insert(kind, result);
    }

    #[must_use]
    pub fn get(&self, kind: DatasetKind) -> Option<&Result<Dataset, LoadError>> {
        self.results.get(&kind)
    }

    /// Look up by dataset name. `None` for names outside the catalog.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Result<Dataset, LoadError>> {
        self.get(DatasetKind::from_name(name)?)
    }

    /// The decoded dataset, if it loaded.
    #[must_use]
    pub fn dataset(&self, kind: DatasetKind) -> Option<&Dataset> {
        self.get(kind)?.as_ref().ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DatasetKind, &Result<Dataset, LoadError>)> {
        self.results.iter().map(|(kind, result)| (*kind, result))
    }

    /// Every failed dataset with its error, in catalog order.
    pub fn errors(&self) -> impl Iterator<Item = (DatasetKind, &LoadError)> {
        self.iter()
            .filter_map(|(kind, result)| result.as_ref().err().map(|err| (kind, err)))
    }

    /// Whether every catalog dataset is present and loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.results.len() == DatasetKind::ALL.len() && self.results.values().all(Result::is_ok)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Take ownership of the per-dataset results.
    #[must_use]
    pub fn into_results(self) -> BTreeMap<DatasetKind, Result<Dataset, LoadError>> {
        self.results
    }
}
