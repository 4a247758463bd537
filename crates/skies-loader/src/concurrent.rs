use std::path::PathBuf;

use crate::catalog::{Dataset, DatasetKind};
use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::game_data::GameData;
use crate::loader::decode_dataset;

/// Load every dataset concurrently, one task per dataset.
///
/// Datasets live in separate files and share nothing, so each task reads
/// its own file and decodes it on the blocking pool. The result is the
/// same as [`LoaderConfig::load_all`]; only the wall-clock time differs.
///
/// Must be called from within a Tokio runtime.
///
/// # Example
///
/// ```rust,no_run
/// # async fn run() {
/// let config = skies_loader::LoaderConfig::new("/games/skies/data");
/// let data = skies_loader::load_all_concurrent(&config).await;
/// for (kind, err) in data.errors() {
///     eprintln!("{kind}: {err}");
/// }
/// # }
/// ```
pub async fn load_all_concurrent(config: &LoaderConfig) -> GameData {
    let handles: Vec<_> = DatasetKind::ALL
        .into_iter()
        .map(|kind| (kind, tokio::spawn(load_task(kind, config.path_for(kind)))))
        .collect();

    let mut data = GameData::default();
    for (kind, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(source) => Err(LoadError::WorkerFailed {
                dataset: kind,
                source,
            }),
        };
        data.insert(kind, result);
    }
    data
}

async fn load_task(kind: DatasetKind, path: PathBuf) -> Result<Dataset, LoadError> {
    tracing::debug!(dataset = %kind, path = %path.display(), "opening source");
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| LoadError::from_io(kind, path, e))?;

    tokio::task::spawn_blocking(move || decode_dataset(kind, &bytes))
        .await
        .map_err(|source| LoadError::WorkerFailed {
            dataset: kind,
            source,
        })?
        .map_err(|source| LoadError::Decode {
            dataset: kind,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matches_sequential_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("backers.dat"), b"Ada\r\nGrace\r\n").unwrap();
        std::fs::write(dir.path().join("areas.dat"), [0u8, 0, 0, 0]).unwrap();
        std::fs::write(dir.path().join("events.dat"), [5u8, 0]).unwrap();

        let config = LoaderConfig::new(dir.path());
        let concurrent = load_all_concurrent(&config).await;
        let sequential = config.load_all();

        for kind in DatasetKind::ALL {
            let a = concurrent.get(kind).unwrap();
            let b = sequential.get(kind).unwrap();
            match (a, b) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
                _ => panic!("{kind}: concurrent and sequential loads disagree"),
            }
        }

        assert_eq!(concurrent.dataset(DatasetKind::Backers).unwrap().len(), 2);
        assert!(matches!(
            concurrent.get(DatasetKind::Events),
            Some(Err(LoadError::Decode { .. }))
        ));
        assert!(matches!(
            concurrent.get(DatasetKind::Settings),
            Some(Err(LoadError::MissingSource { .. }))
        ));
    }
}
