use thiserror::Error;

/// Everything that can go wrong between raw archive bytes and a finished
/// table. Every variant is terminal for the current run: the pipeline aborts
/// on the first failure and never produces a partial CSV.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("archive is not a readable zip: {0}")]
    InvalidArchive(#[from] zip::result::ZipError),

    #[error("archive has no entry ending in '{suffix}'")]
    EntryNotFound { suffix: String },

    #[error("entry is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("no JSON array found in wrapper text")]
    MalformedInput,

    #[error("invalid JSON payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("created_at value '{value}' does not match the expected Twitter timestamp format")]
    DateParse { value: String },

    #[error("no usable tweet records after filtering")]
    EmptyResult,

    #[error("failed to serialize CSV: {0}")]
    Csv(#[from] csv::Error),
}
