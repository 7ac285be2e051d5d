//! Record extractor: wrapper text in, flattened tweet records out.
//!
//! The export file is not plain JSON — the array is preceded by an assignment
//! fragment (`window.YTD.tweets.part0 = [ ... ]`), so the payload is whatever
//! sits between the first `[` and the last `]`. Each array element wraps the
//! actual tweet under a `"tweet"` key.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ExtractError;
use crate::flatten::{filtered_flatten, SEP};

/// Key each array element wraps the actual record under.
pub const INNER_KEY: &str = "tweet";

/// Fields retained by the filtered flatten. Paths are checked after joining,
/// so `entities_user_mentions` only survives if the source ever stores it as
/// a literal top-level key.
pub const KEYS_TO_KEEP: [&str; 8] = [
    "entities_user_mentions",
    "favorite_count",
    "in_reply_to_status_id_str",
    "id_str",
    "retweet_count",
    "created_at",
    "full_text",
    "in_reply_to_screen_name",
];

/// One flattened, filtered tweet. Key order follows the source object.
pub type Record = Map<String, Value>;

/// Decode, isolate, parse, and flatten. Records whose filtered result is
/// empty are dropped; order otherwise follows the source array. Any step
/// failure aborts the whole extraction.
pub fn extract_records(bytes: &[u8]) -> Result<Vec<Record>, ExtractError> {
    let text = std::str::from_utf8(bytes)?;
    let payload = isolate_payload(text)?;
    let data: Vec<Value> = serde_json::from_str(payload)?;

    let mut records = Vec::new();
    for wrapper in &data {
        let flattened = match wrapper.get(INNER_KEY).and_then(Value::as_object) {
            Some(tweet) => filtered_flatten(tweet, &KEYS_TO_KEEP, "", SEP),
            None => Map::new(),
        };
        if !flattened.is_empty() {
            records.push(flattened);
        }
    }
    debug!(
        parsed = data.len(),
        kept = records.len(),
        "flattened tweet records"
    );
    Ok(records)
}

/// Slice out the JSON array between the first `[` and the last `]`, both
/// inclusive.
fn isolate_payload(text: &str) -> Result<&str, ExtractError> {
    let start = text.find('[').ok_or(ExtractError::MalformedInput)?;
    let end = text.rfind(']').ok_or(ExtractError::MalformedInput)?;
    if end < start {
        return Err(ExtractError::MalformedInput);
    }
    Ok(&text[start..=end])
}
