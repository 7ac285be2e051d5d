//! Tweet export extraction and normalization library.
//!
//! Pipeline for turning a Twitter/X data export zip into a flat presentation
//! table: locate the `tweets.js` entry inside the archive, slice the JSON
//! array out of its assignment wrapper, flatten each wrapped tweet down to a
//! fixed allow-list of fields, then project the survivors into a fixed-column
//! table ready for CSV download.
//!
//! The core is pure: callers hand in bytes and get back a `Table` or a typed
//! `ExtractError`. Nothing is persisted and nothing is shared across calls.

pub mod archive;
pub mod error;
pub mod extract;
pub mod flatten;
pub mod table;

pub use archive::{locate_entry, DEFAULT_ENTRY_SUFFIX};
pub use error::ExtractError;
pub use extract::{extract_records, Record, KEYS_TO_KEEP};
pub use table::Table;

/// Run the full pipeline on raw archive bytes: locate the entry matching
/// `entry_suffix`, extract and flatten its records, and project them into the
/// presentation table. The first failing step aborts the run.
pub fn process_archive(archive_bytes: &[u8], entry_suffix: &str) -> Result<Table, ExtractError> {
    let entry = archive::locate_entry(archive_bytes, entry_suffix)?;
    let records = extract::extract_records(&entry)?;
    Table::from_records(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn export_zip(tweets_js: &[u8]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("twitter-2024-01-01/data/account.js", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"window.YTD.account.part0 = []").unwrap();
        writer
            .start_file("twitter-2024-01-01/data/tweets.js", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(tweets_js).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn end_to_end_single_tweet() {
        let bytes = export_zip(
            br#"window.YTD.tweets.part0 = [
                {"tweet": {
                    "id_str": "1",
                    "full_text": "hello",
                    "favorite_count": 2,
                    "retweet_count": 0,
                    "created_at": "Wed Oct 10 20:19:24 +0000 2018"
                }}
            ];"#,
        );
        let table = process_archive(&bytes, DEFAULT_ENTRY_SUFFIX).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][5], "https://x.com/u/status/1");
    }

    #[test]
    fn end_to_end_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.zip");
        std::fs::write(
            &path,
            export_zip(br#"var x = [{"tweet": {"id_str": "7", "full_text": "hi"}}];"#),
        )
        .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let table = process_archive(&bytes, DEFAULT_ENTRY_SUFFIX).unwrap();
        assert_eq!(table.rows[0][1], "hi");
    }

    #[test]
    fn empty_export_surfaces_as_empty_result() {
        let bytes = export_zip(b"window.YTD.tweets.part0 = [];");
        let err = process_archive(&bytes, DEFAULT_ENTRY_SUFFIX).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyResult));
    }

    #[test]
    fn archive_without_tweets_entry_fails_lookup() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("twitter-2024-01-01/data/account.js", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"[]").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = process_archive(&bytes, DEFAULT_ENTRY_SUFFIX).unwrap_err();
        assert!(matches!(err, ExtractError::EntryNotFound { .. }));
    }
}
