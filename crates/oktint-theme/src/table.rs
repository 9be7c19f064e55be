//! The theme token table and its JSON file format.
//!
//! ```json
//! {
//!   "tokens": ["background", "primary-foreground"],
//!   "themes": {
//!     "default": {
//!       "light": { "background": "0 0% 100%", ... },
//!       "dark":  { "background": "222.2 84% 4.9%", ... }
//!     }
//!   }
//! }
//! ```
//!
//! Document order is preserved on rewrite, and unknown top-level fields are
//! carried through untouched.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Token name → color string, in document order.
pub type TokenMap = IndexMap<String, String>;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Light or dark variant of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownMode(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeModes
// ---------------------------------------------------------------------------

/// The light and dark token maps of one theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeModes {
    #[serde(default)]
    pub light: TokenMap,
    #[serde(default)]
    pub dark: TokenMap,
}

impl ThemeModes {
    #[must_use]
    pub const fn get(&self, mode: Mode) -> &TokenMap {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Build a `ThemeModes` by mapping every cell of `self`.
    pub fn map_cells(&self, mut f: impl FnMut(Mode, &str, &str) -> String) -> Self {
        let mut map = |mode: Mode| -> TokenMap {
            self.get(mode)
                .iter()
                .map(|(token, value)| (token.clone(), f(mode, token, value)))
                .collect()
        };
        let light = map(Mode::Light);
        let dark = map(Mode::Dark);
        Self { light, dark }
    }
}

// ---------------------------------------------------------------------------
// ThemeTable
// ---------------------------------------------------------------------------

/// Theme name × mode × token name → color string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeTable {
    /// Ordered list of semantic token names.
    #[serde(default)]
    pub tokens: Vec<String>,

    /// Theme name → light/dark token maps.
    pub themes: IndexMap<String, ThemeModes>,

    /// Any other top-level fields, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ThemeTable {
    /// Parse a table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] if the text is not a valid table.
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize with two-space indentation and a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ThemeError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Read and parse a table file.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Read`] on I/O failure, [`ThemeError::Json`] on bad JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize and write a table file, replacing any existing content.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Write`] on I/O failure.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ThemeError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|source| ThemeError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Theme names in document order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Number of (theme, mode, token) cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.themes.values().map(|m| m.light.len() + m.dark.len()).sum()
    }

    /// All token colors of one theme and mode.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownTheme`] if the theme does not exist.
    pub fn colors(&self, theme: &str, mode: Mode) -> Result<&TokenMap, ThemeError> {
        self.themes
            .get(theme)
            .map(|modes| modes.get(mode))
            .ok_or_else(|| ThemeError::UnknownTheme(theme.to_owned()))
    }

    /// A single token color.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownTheme`] or [`ThemeError::UnknownToken`].
    pub fn color(&self, theme: &str, mode: Mode, token: &str) -> Result<&str, ThemeError> {
        self.colors(theme, mode)?
            .get(token)
            .map(String::as_str)
            .ok_or_else(|| ThemeError::UnknownToken {
                theme: theme.to_owned(),
                mode,
                token: token.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
