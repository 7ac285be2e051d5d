//! Archive locator: find the tweets entry inside an export zip by suffix.
//!
//! Twitter exports nest the interesting file under a folder named after the
//! archive itself (e.g. `twitter-2024-01-01/data/tweets.js`), and that folder
//! name varies per export. Matching on a path suffix instead of joining an
//! exact path keeps the locator robust against those naming differences.

use std::io::{Cursor, Read};

use tracing::debug;

use crate::error::ExtractError;

/// Entry suffix used when the caller does not override it.
pub const DEFAULT_ENTRY_SUFFIX: &str = "data/tweets.js";

/// Return the raw bytes of the first entry whose path ends with `suffix`,
/// scanning in archive directory order.
pub fn locate_entry(archive_bytes: &[u8], suffix: &str) -> Result<Vec<u8>, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes))?;
    debug!(entries = archive.len(), suffix, "scanning archive");

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !entry.name().ends_with(suffix) {
            continue;
        }
        debug!(name = entry.name(), size = entry.size(), "matched entry");
        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut buf)
            .map_err(zip::result::ZipError::Io)?;
        return Ok(buf);
    }

    Err(ExtractError::EntryNotFound {
        suffix: suffix.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn make_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn locates_entry_by_suffix() {
        let bytes = make_zip(&[
            ("twitter-2024-01-01/data/account.js", b"ignored"),
            ("twitter-2024-01-01/data/tweets.js", b"payload"),
        ]);
        let found = locate_entry(&bytes, "data/tweets.js").unwrap();
        assert_eq!(found, b"payload");
    }

    #[test]
    fn first_match_wins_in_directory_order() {
        let bytes = make_zip(&[
            ("a/data/tweets.js", b"first"),
            ("b/data/tweets.js", b"second"),
        ]);
        let found = locate_entry(&bytes, "data/tweets.js").unwrap();
        assert_eq!(found, b"first");
    }

    #[test]
    fn locator_is_deterministic() {
        let bytes = make_zip(&[
            ("a/data/tweets.js", b"first"),
            ("b/data/tweets.js", b"second"),
        ]);
        let once = locate_entry(&bytes, "data/tweets.js").unwrap();
        let twice = locate_entry(&bytes, "data/tweets.js").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_entry_is_reported() {
        let bytes = make_zip(&[("twitter-2024-01-01/data/account.js", b"ignored")]);
        let err = locate_entry(&bytes, "data/tweets.js").unwrap_err();
        assert!(matches!(err, ExtractError::EntryNotFound { .. }));
        assert!(err.to_string().contains("data/tweets.js"));
    }

    #[test]
    fn garbage_bytes_are_not_an_archive() {
        let err = locate_entry(b"definitely not a zip", "data/tweets.js").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidArchive(_)));
    }
}
