//! Generated module emission.
//!
//! The rendering backends import theme colors from a TypeScript module, so
//! after migration the table is re-emitted as:
//!
//! - one `<theme>Colors` block per theme, with `light` and `dark` token
//!   maps keyed by camelCase token name
//! - a `themes` lookup table keyed by the original theme name
//! - `getThemeColors(theme, mode)` plus the `oklchWithAlpha`,
//!   `oklchToRgb` and `oklchToRgba` helpers (static template)

use std::collections::HashMap;
use std::fmt::Write as _;

use heck::ToLowerCamelCase;

use crate::error::ThemeError;
use crate::table::{Mode, ThemeTable, TokenMap};

const HEADER: &str = "\
// This file is generated by `oktint migrate`. Do not edit it by hand;
// change themes.json and re-run the migration instead.
";

const RUNTIME: &str = include_str!("runtime.ts");

/// Render the full module source for `table`.
///
/// # Errors
///
/// [`ThemeError::IdentifierCollision`] when two theme names, or two tokens
/// of the same theme and mode, camelCase to the same identifier.
pub fn render_module(table: &ThemeTable) -> Result<String, ThemeError> {
    let mut out = String::from(HEADER);
    out.push_str("\nexport type ThemeMode = \"light\" | \"dark\";\n");

    let mut exports = Idents::new("module exports");
    for (theme, modes) in &table.themes {
        let ident = exports.claim(theme_ident(theme), theme)?;
        let _ = writeln!(out, "\nexport const {ident} = {{");
        for mode in Mode::ALL {
            render_mode(&mut out, theme, mode, modes.get(mode))?;
        }
        out.push_str("} as const;\n");
    }

    out.push_str("\nexport const themes = {\n");
    for theme in table.theme_names() {
        let _ = writeln!(out, "  {}: {},", quote(theme), theme_ident(theme));
    }
    out.push_str("} as const;\n");

    out.push_str(
        "\nexport type ThemeName = keyof typeof themes;\n\
         \nexport function getThemeColors(theme: ThemeName, mode: ThemeMode) {\n  \
         return themes[theme][mode];\n}\n\n",
    );
    out.push_str(RUNTIME);
    Ok(out)
}

fn render_mode(out: &mut String, theme: &str, mode: Mode, tokens: &TokenMap) -> Result<(), ThemeError> {
    let mut keys = Idents::new(format!("{theme}.{mode}"));
    let _ = writeln!(out, "  {mode}: {{");
    for (token, value) in tokens {
        let key = keys.claim(token.to_lower_camel_case(), token)?;
        let _ = writeln!(out, "    {}: {},", property_key(&key), quote(value));
    }
    out.push_str("  },\n");
    Ok(())
}

/// Generated identifiers of one scope, and the names they came from.
struct Idents<'a> {
    scope: String,
    seen: HashMap<String, &'a str>,
}

impl<'a> Idents<'a> {
    fn new(scope: impl Into<String>) -> Self {
        Self { scope: scope.into(), seen: HashMap::new() }
    }

    fn claim(&mut self, ident: String, name: &'a str) -> Result<String, ThemeError> {
        match self.seen.insert(ident.clone(), name) {
            Some(first) => Err(ThemeError::IdentifierCollision {
                scope: self.scope.clone(),
                ident,
                first: first.to_owned(),
                second: name.to_owned(),
            }),
            None => Ok(ident),
        }
    }
}

/// `"dark-blue"` → `darkBlueColors`. A leading digit gets a `theme` prefix.
fn theme_ident(theme: &str) -> String {
    let camel = theme.to_lower_camel_case();
    if camel.starts_with(|c: char| c.is_ascii_digit()) || camel.is_empty() {
        format!("theme{camel}Colors")
    } else {
        format!("{camel}Colors")
    }
}

/// Bare identifier when possible, quoted string otherwise.
fn property_key(key: &str) -> String {
    let is_ident = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident { key.to_owned() } else { quote(key) }
}

/// A double-quoted, escaped string literal (JSON string syntax is valid TS).
fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
