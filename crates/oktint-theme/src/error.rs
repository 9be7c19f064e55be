use std::io;
use std::path::PathBuf;

use oktint_color::ParseColorError;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid theme table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown theme {0:?}")]
    UnknownTheme(String),

    #[error("unknown mode {0:?}: expected `light` or `dark`")]
    UnknownMode(String),

    #[error("theme {theme:?} has no {mode} token {token:?}")]
    UnknownToken {
        theme: String,
        mode: crate::Mode,
        token: String,
    },

    /// Two names map to the same identifier in the generated module.
    #[error("{first:?} and {second:?} both generate `{ident}` in {scope}")]
    IdentifierCollision {
        scope: String,
        ident: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Color(#[from] ParseColorError),
}
