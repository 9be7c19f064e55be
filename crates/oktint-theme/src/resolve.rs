//! Runtime token resolution for renderers that cannot take OKLCH.
//!
//! A component asks for a semantic token plus a literal fallback. The
//! resolver looks the token up in the active theme and mode and converts
//! it to `rgba(...)`. Any failure (unknown theme, missing token, malformed
//! OKLCH cell) returns the fallback unchanged; the render never fails.

use oktint_color::pipeline::oklch_to_rgba;
use tracing::warn;

use crate::error::ThemeError;
use crate::table::{Mode, ThemeTable};

/// Resolves tokens against one theme and mode of a table.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver<'a> {
    table: &'a ThemeTable,
    theme: &'a str,
    mode: Mode,
}

impl<'a> ColorResolver<'a> {
    #[must_use]
    pub const fn new(table: &'a ThemeTable, theme: &'a str, mode: Mode) -> Self {
        Self { table, theme, mode }
    }

    #[must_use]
    pub const fn theme(&self) -> &'a str {
        self.theme
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Same resolver, other mode.
    #[must_use]
    pub const fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Strict lookup and conversion.
    ///
    /// # Errors
    ///
    /// Unknown theme or token, or a cell that is not `oklch(L C H)`.
    pub fn try_resolve(&self, token: &str, alpha: f64) -> Result<String, ThemeError> {
        let oklch = self.table.color(self.theme, self.mode, token)?;
        Ok(oklch_to_rgba(oklch, alpha)?)
    }

    /// Resolve `token` to `rgba(r, g, b, 1)`, or return `fallback`.
    #[must_use]
    pub fn resolve(&self, token: &str, fallback: &str) -> String {
        self.resolve_with_alpha(token, 1.0, fallback)
    }

    /// Resolve `token` with an explicit alpha, or return `fallback`.
    #[must_use]
    pub fn resolve_with_alpha(&self, token: &str, alpha: f64, fallback: &str) -> String {
        self.try_resolve(token, alpha).unwrap_or_else(|err| {
            warn!(theme = self.theme, mode = %self.mode, token, %err, "falling back to literal color");
            fallback.to_owned()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> ThemeTable {
        ThemeTable::from_json_str(
            r#"{
  "tokens": ["primary", "accent", "legacy"],
  "themes": {
    "default": {
      "light": { "primary": "oklch(0.628 0.2577 29.23)", "accent": "oklch(0.5 0.1 200)", "legacy": "0 100% 50%" },
      "dark": { "primary": "oklch(1 0 0)" }
    }
  }
}"#,
        )
        .unwrap()
    }

    #[test]
    fn resolves_active_theme_and_mode() {
        let t = table();
        let r = ColorResolver::new(&t, "default", Mode::Light);
        assert_eq!(r.resolve("primary", "#000"), "rgba(255, 0, 0, 1)");
        assert_eq!(r.resolve_with_alpha("accent", 0.5, "#000"), "rgba(0, 116, 122, 0.5)");
        assert_eq!(r.with_mode(Mode::Dark).resolve("primary", "#000"), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn falls_back_on_missing_token_or_theme() {
        let t = table();
        let light = ColorResolver::new(&t, "default", Mode::Light);
        assert_eq!(light.resolve("nonexistent", "#123456"), "#123456");
        assert_eq!(light.with_mode(Mode::Dark).resolve("accent", "tomato"), "tomato");
        assert_eq!(ColorResolver::new(&t, "nope", Mode::Light).resolve("primary", "red"), "red");
    }

    #[test]
    fn falls_back_on_unmigrated_cell() {
        let t = table();
        let r = ColorResolver::new(&t, "default", Mode::Light);
        assert_eq!(r.resolve("legacy", "#ff0000"), "#ff0000");
        assert!(matches!(r.try_resolve("legacy", 1.0), Err(ThemeError::Color(_))));
    }

    #[test]
    fn accessors() {
        let t = table();
        let r = ColorResolver::new(&t, "default", Mode::Dark);
        assert_eq!(r.theme(), "default");
        assert_eq!(r.mode(), Mode::Dark);
    }
}
