use thiserror::Error;

/// The single failure kind row normalization recognizes. Any variant aborts
/// the offending row; the driver never lets one escape the row boundary.
#[derive(Debug, Clone, Error)]
pub enum InvalidDataFormat {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("timestamp '{value}' is not a valid M/d/yy h:mm:ss AM/PM time")]
    Timestamp { value: String },

    #[error("zip '{value}' does not normalize to five digits")]
    Zip { value: String },

    #[error("duration '{value}' is not in H:MM:SS.mmm form")]
    Duration { value: String },
}
