use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The error type for normalizing raw race records.
///
/// A raw record is rejected as a whole when one of its fields
/// cannot be converted into its typed representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The place is not an unsigned integer.
    InvalidPlace { value: String },

    /// The race time is not in the `minutes:seconds` form, the seconds
    /// are 60 or more, or the total reaches 24 hours.
    InvalidTime { value: String },
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let record_error = "record error:";

        match self {
            RecordError::InvalidPlace { value } => {
                write!(f, "{record_error} the place \"{value}\" is not a valid rank")
            }
            RecordError::InvalidTime { value } => write!(
                f,
                "{record_error} the time \"{value}\" is not a valid minutes:seconds value"
            ),
        }
    }
}

impl Error for RecordError {}
