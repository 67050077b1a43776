//! Loading training corpora from disk.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use crate::error::{BytepieceError, Result};

/// Default cap on bytes read from a corpus file.
///
/// Training cost grows with the cube of the corpus length, so the default
/// stays small.
pub const DEFAULT_MAX_BYTES: usize = 1024;

/// Read at most `max_bytes` bytes from the file at `path`.
///
/// The returned buffer's length is the number of bytes actually read, which
/// is less than `max_bytes` when the file is shorter.
///
/// # Errors
/// - [`BytepieceError::FileNotFound`] if `path` is missing, unreadable or not
///   a regular file.
/// - [`BytepieceError::Allocation`] if the read buffer cannot be reserved.
/// - [`BytepieceError::Read`] for any other IO failure.
pub fn read_corpus(path: impl AsRef<Path>, max_bytes: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let not_found = || BytepieceError::FileNotFound {
        path: path.to_path_buf(),
    };
    let read_err = |source: io::Error| BytepieceError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => not_found(),
        _ => read_err(err),
    })?;
    let metadata = file.metadata().map_err(read_err)?;
    if !metadata.is_file() {
        return Err(not_found());
    }

    let expected = usize::try_from(metadata.len()).map_or(max_bytes, |len| len.min(max_bytes));
    let mut data = Vec::new();
    data.try_reserve_exact(expected)?;

    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    file.take(limit).read_to_end(&mut data).map_err(read_err)?;

    debug!("read {} of at most {} bytes from {:?}", data.len(), max_bytes, path);
    Ok(data)
}
