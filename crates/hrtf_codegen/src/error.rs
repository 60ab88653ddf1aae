use std::path::{Path, PathBuf};

use crate::dataset::ShapeError;

#[derive(Debug, derive_more::Display, derive_more::IsVariant)]
enum ErrorPayload {
    #[display(fmt = "Unable to decode HRTF dataset: {}", _0)]
    Decode(serde_json::Error),

    #[display(fmt = "HRTF dataset has an inconsistent shape: {}", _0)]
    Shape(ShapeError),

    #[display(fmt = "I/O error on {}: {}", "path.display()", source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("{payload}")]
pub struct Error {
    payload: ErrorPayload,
}

macro_rules! conv {
    ($variant: ident, $from_err: path) => {
        impl From<$from_err> for Error {
            fn from(value: $from_err) -> Error {
                Error {
                    payload: ErrorPayload::$variant(value),
                }
            }
        }
    };
}

conv!(Decode, serde_json::Error);
conv!(Shape, ShapeError);

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Error {
        Error {
            payload: ErrorPayload::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Was the dataset unreadable, for example because a field was missing?
    pub fn is_decode(&self) -> bool {
        self.payload.is_decode()
    }

    /// Did the dataset disagree with itself about its dimensions?
    pub fn is_shape(&self) -> bool {
        self.payload.is_shape()
    }

    /// Did reading or writing a file fail?
    pub fn is_io(&self) -> bool {
        self.payload.is_io()
    }

    /// The shape problem, if this is a shape error.
    pub fn shape_error(&self) -> Option<&ShapeError> {
        match &self.payload {
            ErrorPayload::Shape(s) => Some(s),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
