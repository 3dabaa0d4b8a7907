use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (file layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    RfcError(#[from] cardshift_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] cardshift_core::error::CoreError),
}

impl AppError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
