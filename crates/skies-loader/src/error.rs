use std::path::PathBuf;

use skies_types::DecodeError;

use crate::catalog::DatasetKind;

/// Errors raised while turning a dataset name into decoded records.
///
/// ```text
///   LoadError
///   ├── UnknownDataset   name not in the catalog
///   ├── MissingSource    backing file does not exist
///   ├── Io               backing file exists but could not be read
///   ├── Decode           bytes read, structure did not decode
///   └── WorkerFailed     concurrent decode worker panicked
/// ```
///
/// Everything except `UnknownDataset` names the dataset it belongs to, so
/// a [`GameData`](crate::GameData) can report each failure on its own.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unknown dataset {name:?}")]
    UnknownDataset { name: String },

    #[error("{dataset}: source {} not found", path.display())]
    MissingSource { dataset: DatasetKind, path: PathBuf },

    #[error("{dataset}: failed to read {}", path.display())]
    Io {
        dataset: DatasetKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{dataset}: {source}")]
    Decode {
        dataset: DatasetKind,
        #[source]
        source: DecodeError,
    },

    #[error("{dataset}: decode worker failed")]
    WorkerFailed {
        dataset: DatasetKind,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl LoadError {
    /// Classify an I/O failure opening or reading `path`.
    pub(crate) fn from_io(dataset: DatasetKind, path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingSource { dataset, path }
        } else {
            Self::Io {
                dataset,
                path,
                source,
            }
        }
    }

    /// The dataset this error belongs to, if it got far enough to have one.
    #[must_use]
    pub fn dataset(&self) -> Option<DatasetKind> {
        match self {
            Self::UnknownDataset { .. } => None,
            Self::MissingSource { dataset, .. }
            | Self::Io { dataset, .. }
            | Self::Decode { dataset, .. }
            | Self::WorkerFailed { dataset, .. } => Some(*dataset),
        }
    }
}
