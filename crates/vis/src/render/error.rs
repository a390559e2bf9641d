use std::error::Error;
use std::fmt::Display;
use std::io;

/// The error type for writing chart elements to an [`OutputStream`].
///
/// [`OutputStream`]: crate::render::OutputStream
#[derive(Debug)]
#[non_exhaustive]
pub enum RenderError {
    /// Writing to the underlying output failed.
    Io(io::Error),

    /// The tooltip settings handed to the page script could not be serialized.
    JsonSerialization(serde_json::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Io(inner) => write!(f, "writing the output failed: {inner}"),
            RenderError::JsonSerialization(inner) => {
                write!(f, "serializing the page settings failed: {inner}")
            }
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::Io(inner) => Some(inner),
            RenderError::JsonSerialization(inner) => Some(inner),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(error: io::Error) -> Self {
        RenderError::Io(error)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(error: serde_json::Error) -> Self {
        RenderError::JsonSerialization(error)
    }
}
