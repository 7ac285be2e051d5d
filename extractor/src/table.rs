//! Tabular projection: flattened records into the fixed presentation table,
//! plus CSV serialization.

use serde_json::Value;
use tracing::debug;

use crate::error::ExtractError;
use crate::extract::Record;

/// Prefix for the synthesized per-tweet link.
pub const LINK_PREFIX: &str = "https://x.com/u/status/";

/// Twitter export timestamp format, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// How parsed timestamps are rendered in the output table.
const CREATED_AT_RENDER_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Presentation column order. The raw `id_str` is consumed by the `link`
/// synthesis and never appears; the two reply fields carry their user-facing
/// names.
pub const OUTPUT_COLUMNS: [&str; 7] = [
    "created_at",
    "full_text",
    "favorite_count",
    "retweet_count",
    "user_replying_to",
    "link",
    "tweet_replying_to",
];

/// The finished table: fixed columns, one row of rendered cells per record.
/// An empty string is a null cell.
#[derive(Debug)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Project flattened records into the presentation table. Fails with
    /// `EmptyResult` when no records survived filtering and `DateParse` when
    /// any present `created_at` does not match the export format. Columns
    /// absent from every record still appear, with empty cells.
    pub fn from_records(records: &[Record]) -> Result<Table, ExtractError> {
        if records.is_empty() {
            return Err(ExtractError::EmptyResult);
        }

        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let created_at = render_created_at(record.get("created_at"))?;
            let link = match record.get("id_str") {
                None | Some(Value::Null) => String::new(),
                Some(id) => format!("{LINK_PREFIX}{}", render_cell(id)),
            };
            let cell = |key: &str| record.get(key).map(render_cell).unwrap_or_default();
            rows.push(vec![
                created_at,
                cell("full_text"),
                cell("favorite_count"),
                cell("retweet_count"),
                cell("in_reply_to_screen_name"),
                link,
                cell("in_reply_to_status_id_str"),
            ]);
        }

        debug!(rows = rows.len(), "projected table");
        Ok(Table {
            columns: OUTPUT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    /// Serialize to CSV text: header row, comma-delimited, standard quoting,
    /// no index column.
    pub fn to_csv(&self) -> Result<String, ExtractError> {
        let mut buf = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buf);
            writer.write_record(&self.columns)?;
            for row in &self.rows {
                writer.write_record(row)?;
            }
            writer.flush().map_err(csv::Error::from)?;
        }
        String::from_utf8(buf).map_err(|e| ExtractError::Decode(e.utf8_error()))
    }
}

fn render_created_at(value: Option<&Value>) -> Result<String, ExtractError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(v) => {
            let raw = render_cell(v);
            let parsed = chrono::DateTime::parse_from_str(&raw, CREATED_AT_FORMAT)
                .map_err(|_| ExtractError::DateParse { value: raw.clone() })?;
            Ok(parsed.format(CREATED_AT_RENDER_FORMAT).to_string())
        }
    }
}

/// Render a JSON value as a table cell: strings verbatim, numbers and bools
/// via display, null empty, anything nested as compact JSON text.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
