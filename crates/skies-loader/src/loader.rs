use std::path::{Path, PathBuf};

use skies_types::decode::read_array_of_optional_object;
use skies_types::{DecodeError, RecordType};
use skies_wire::{Cursor, WireError};

use crate::catalog::{Dataset, DatasetKind};
use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::game_data::GameData;

/// Line terminator of the backers list.
const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Load one dataset by name.
///
/// `path` defaults to the conventional file name (`<name>.dat`) in the
/// current directory.
///
/// # Errors
///
/// - [`LoadError::UnknownDataset`] if `name` is not in the catalog.
/// - [`LoadError::MissingSource`] / [`LoadError::Io`] if the file cannot
///   be read.
/// - [`LoadError::Decode`] if its contents do not decode.
///
/// # Example
///
/// ```rust,no_run
/// let qualities = skies_loader::load("qualities", None).unwrap();
/// println!("{} qualities", qualities.len());
/// ```
pub fn load(name: &str, path: Option<&Path>) -> Result<Dataset, LoadError> {
    let kind: DatasetKind = name.parse()?;
    let path = path.map_or_else(|| PathBuf::from(kind.file_name()), Path::to_path_buf);
    load_from(kind, &path)
}

/// Load every dataset from `root`, using conventional file names.
///
/// Never fails as a whole; see [`LoaderConfig::load_all`].
#[must_use]
pub fn load_all(root: &Path) -> GameData {
    LoaderConfig::new(root).load_all()
}

/// Read `path` and decode it as `kind`.
///
/// The whole file is read into memory and released before this returns,
/// on success and failure alike.
///
/// # Errors
///
/// See [`load`].
pub fn load_from(kind: DatasetKind, path: &Path) -> Result<Dataset, LoadError> {
    tracing::debug!(dataset = %kind, path = %path.display(), "opening source");
    let bytes = std::fs::read(path).map_err(|e| LoadError::from_io(kind, path.to_path_buf(), e))?;
    decode_dataset(kind, &bytes).map_err(|source| LoadError::Decode {
        dataset: kind,
        source,
    })
}

/// Decode the full contents of a backing source as `kind`.
///
/// Runs framing-block detection first. Bytes left over after the array
/// are not an error; their count is logged.
///
/// # Errors
///
/// Any [`DecodeError`] from the record array, or a
/// [`WireError::TextDecode`] from the backers list.
pub fn decode_dataset(kind: DatasetKind, bytes: &[u8]) -> Result<Dataset, DecodeError> {
    let mut cursor = Cursor::with_preamble(bytes);
    let dataset = match kind {
        DatasetKind::Areas => Dataset::Areas(decode_records(&mut cursor)?),
        DatasetKind::Backers => Dataset::Backers(read_lines(&mut cursor)?),
        DatasetKind::Bargains => Dataset::Bargains(decode_records(&mut cursor)?),
        DatasetKind::Events => Dataset::Events(decode_records(&mut cursor)?),
        DatasetKind::Exchanges => Dataset::Exchanges(decode_records(&mut cursor)?),
        DatasetKind::Personas => Dataset::Personas(decode_records(&mut cursor)?),
        DatasetKind::Prospects => Dataset::Prospects(decode_records(&mut cursor)?),
        DatasetKind::Qualities => Dataset::Qualities(decode_records(&mut cursor)?),
        DatasetKind::Settings => Dataset::Settings(decode_records(&mut cursor)?),
    };

    tracing::info!(
        dataset = %kind,
        entries = dataset.len(),
        framed = cursor.preamble().is_some(),
        trailing = cursor.remaining().len(),
        "dataset decoded"
    );
    Ok(dataset)
}

/// Decode a raw (no presence byte) array of `R` from the cursor.
///
/// # Errors
///
/// See [`read_array_of_optional_object`].
pub fn decode_records<R: RecordType>(
    cursor: &mut Cursor<'_>,
) -> Result<Vec<Option<R>>, DecodeError> {
    read_array_of_optional_object(cursor)
}

/// Split the rest of the stream into CRLF-separated UTF-8 lines.
///
/// The list ends with a terminator artifact: a last segment that is empty
/// or made only of NUL bytes. That segment is dropped. Empty lines
/// anywhere else are kept.
fn read_lines(cursor: &mut Cursor<'_>) -> Result<Vec<String>, WireError> {
    let start = cursor.position();
    let body = cursor.read(cursor.remaining().len())?;

    let mut lines = Vec::new();
    let mut offset = start;
    for segment in split_on(body, LINE_TERMINATOR) {
        let line = std::str::from_utf8(segment)
            .map_err(|source| WireError::TextDecode { offset, source })?;
        lines.push(line.to_owned());
        offset += segment.len() + LINE_TERMINATOR.len();
    }

    if lines.last().is_some_and(|last| last.bytes().all(|b| b == 0)) {
        lines.pop();
    }
    Ok(lines)
}

/// Split on every occurrence of `sep`. Always yields at least one segment.
fn split_on<'a>(mut buf: &'a [u8], sep: &[u8]) -> Vec<&'a [u8]> {
    let mut out = Vec::new();
    while let Some(at) = buf.windows(sep.len()).position(|w| w == sep) {
        out.push(&buf[..at]);
        buf = &buf[at + sep.len()..];
    }
    out.push(buf);
    out
}
