//! HSL → OKLCH batch migration of a theme table.
//!
//! [`migrate_table`] is a pure function from the old table to a new one;
//! [`run`] wraps it with the file I/O (load, regenerate the module, rewrite
//! the JSON).
//!
//! Cells are not validated. A malformed triplet converts to a visibly
//! broken `oklch(NaN NaN NaN)` instead of aborting the run, and the
//! migration is not idempotent: OKLCH cells fed back in are garbage HSL.

use std::path::{Path, PathBuf};

use oktint_color::pipeline::hsl_string_to_oklch;
use tracing::{debug, info};

use crate::codegen;
use crate::error::ThemeError;
use crate::table::ThemeTable;

/// Result of converting a table in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Migration {
    pub table: ThemeTable,
    /// Number of cells converted.
    pub converted: usize,
}

/// Convert every (theme, mode, token) cell from `"H S% L%"` to
/// `"oklch(L C H)"`, leaving `table` untouched.
#[must_use]
pub fn migrate_table(table: &ThemeTable) -> Migration {
    let mut converted = 0;
    let themes = table
        .themes
        .iter()
        .map(|(theme, modes)| {
            let modes = modes.map_cells(|mode, token, value| {
                let oklch = hsl_string_to_oklch(value);
                debug!(theme = %theme, %mode, token, from = value, to = %oklch, "converted token");
                converted += 1;
                oklch
            });
            (theme.clone(), modes)
        })
        .collect();

    Migration {
        table: ThemeTable {
            tokens: table.tokens.clone(),
            themes,
            extra: table.extra.clone(),
        },
        converted,
    }
}

// ---------------------------------------------------------------------------
// File-level run
// ---------------------------------------------------------------------------

/// Where to read the table from and where to write the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateConfig {
    /// Source theme table (HSL cells).
    pub input: PathBuf,
    /// Where the migrated table is written. Usually the input itself.
    pub output: PathBuf,
    /// Generated module path, or `None` to skip code generation.
    pub module: Option<PathBuf>,
    /// Convert and report without writing anything.
    pub dry_run: bool,
}

impl MigrateConfig {
    /// Rewrite `input` in place and generate a `.ts` module next to it.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        Self {
            output: input.clone(),
            module: Some(input.with_extension("ts")),
            input,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    #[must_use]
    pub fn with_module(mut self, module: Option<PathBuf>) -> Self {
        self.module = module;
        self
    }

    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What a [`run`] did.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationReport {
    pub converted: usize,
    pub themes: usize,
    /// Paths actually written (empty on a dry run).
    pub written: Vec<PathBuf>,
    /// The migrated table.
    pub table: ThemeTable,
}

/// Load → migrate → render module → write module → write table.
///
/// The table is written last. Until it is rewritten the input still holds
/// HSL cells, so a failed run can be retried without migrating twice.
///
/// # Errors
///
/// Any read, parse, render or write failure. Nothing is written if loading
/// or rendering fails, and the table is not written if writing the module
/// fails.
pub fn run(config: &MigrateConfig) -> Result<MigrationReport, ThemeError> {
    let source = ThemeTable::load(&config.input)?;
    let Migration { table, converted } = migrate_table(&source);
    let themes = table.themes.len();
    let module = config
        .module
        .as_ref()
        .map(|path| codegen::render_module(&table).map(|src| (path, src)))
        .transpose()?;

    let mut written = Vec::new();
    if config.dry_run {
        info!(converted, themes, "dry run, nothing written");
    } else {
        if let Some((path, src)) = module {
            write_file(path, src)?;
            written.push(path.clone());
        }
        table.save(&config.output)?;
        written.push(config.output.clone());
        info!(
            converted,
            themes,
            output = %config.output.display(),
            module = ?config.module,
            "migrated theme table"
        );
    }

    Ok(MigrationReport { converted, themes, written, table })
}

fn write_file(path: &Path, contents: String) -> Result<(), ThemeError> {
    std::fs::write(path, contents).map_err(|source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Mode;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
  "tokens": ["background", "primary", "destructive"],
  "themes": {
    "default": {
      "light": { "background": "0 0% 100%", "primary": "262.1 83.3% 57.8%", "destructive": "0 84.2% 60.2%" },
      "dark": { "background": "222.2 84% 4.9%", "primary": "0 0% 50%" }
    },
    "broken": {
      "light": { "background": "not a color" },
      "dark": {}
    }
  }
}"#;

    fn sample() -> ThemeTable {
        ThemeTable::from_json_str(SAMPLE).unwrap()
    }

    #[test]
    fn converts_every_cell() {
        let m = migrate_table(&sample());
        assert_eq!(m.converted, 6);

        let light = m.table.colors("default", Mode::Light).unwrap();
        assert_eq!(light["background"], "oklch(1 0 0)");
        assert_eq!(light["primary"], "oklch(0.5409 0.2494 293.01)");
        assert_eq!(light["destructive"], "oklch(0.6368 0.2076 26.3)");

        let dark = m.table.colors("default", Mode::Dark).unwrap();
        assert_eq!(dark["background"], "oklch(0.1371 0.0355 257.89)");
        assert_eq!(dark["primary"], "oklch(0.5982 0 0)");
    }

    #[test]
    fn input_table_is_untouched() {
        let before = sample();
        let _ = migrate_table(&before);
        assert_eq!(before, sample());
    }

    #[test]
    fn keeps_tokens_order_and_structure() {
        let m = migrate_table(&sample());
        assert_eq!(m.table.tokens, sample().tokens);
        assert_eq!(m.table.theme_names().collect::<Vec<_>>(), vec!["default", "broken"]);
        let keys: Vec<_> = m.table.colors("default", Mode::Light).unwrap().keys().collect();
        assert_eq!(keys, vec!["background", "primary", "destructive"]);
    }

    #[test]
    fn bad_cell_degrades_without_failing() {
        let m = migrate_table(&sample());
        assert_eq!(
            m.table.color("broken", Mode::Light, "background").unwrap(),
            "oklch(NaN NaN NaN)"
        );
    }

    #[test]
    fn migration_is_not_idempotent() {
        let once = migrate_table(&sample()).table;
        let twice = migrate_table(&once).table;
        assert_ne!(once, twice);
        assert_eq!(
            twice.color("default", Mode::Light, "primary").unwrap(),
            "oklch(NaN NaN NaN)"
        );
    }

    #[test]
    fn config_defaults() {
        let c = MigrateConfig::new("assets/themes.json");
        assert_eq!(c.output, PathBuf::from("assets/themes.json"));
        assert_eq!(c.module, Some(PathBuf::from("assets/themes.ts")));
        assert!(!c.dry_run);
    }

    #[test]
    fn run_rewrites_table_and_module() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("themes.json");
        std::fs::write(&input, SAMPLE).unwrap();

        let report = run(&MigrateConfig::new(&input)).unwrap();
        assert_eq!(report.converted, 6);
        assert_eq!(report.themes, 2);
        assert_eq!(report.written, vec![dir.path().join("themes.ts"), input.clone()]);

        let rewritten = ThemeTable::load(&input).unwrap();
        assert_eq!(rewritten, report.table);
        let module = std::fs::read_to_string(dir.path().join("themes.ts")).unwrap();
        assert!(module.contains("export const defaultColors"));
        assert!(module.contains("\"oklch(0.5409 0.2494 293.01)\""));
    }

    #[test]
    fn run_to_separate_output_without_module() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("themes.json");
        let output = dir.path().join("out.json");
        std::fs::write(&input, SAMPLE).unwrap();

        let config = MigrateConfig::new(&input).with_output(&output).with_module(None);
        let report = run(&config).unwrap();
        assert_eq!(report.written, vec![output.clone()]);
        assert_eq!(std::fs::read_to_string(&input).unwrap(), SAMPLE);
        assert!(!dir.path().join("themes.ts").exists());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("themes.json");
        std::fs::write(&input, SAMPLE).unwrap();

        let report = run(&MigrateConfig::new(&input).dry_run(true)).unwrap();
        assert_eq!(report.converted, 6);
        assert!(report.written.is_empty());
        assert_eq!(std::fs::read_to_string(&input).unwrap(), SAMPLE);
        assert!(!dir.path().join("themes.ts").exists());
    }

    #[test]
    fn failed_module_write_leaves_input_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("themes.json");
        std::fs::write(&input, SAMPLE).unwrap();
        let module = dir.path().join("themes.ts");
        std::fs::create_dir(&module).unwrap();

        let config = MigrateConfig::new(&input);
        let err = run(&config).unwrap_err();
        assert!(matches!(err, ThemeError::Write { ref path, .. } if *path == module));
        assert_eq!(std::fs::read_to_string(&input).unwrap(), SAMPLE);

        // Once the module path is usable, a retry migrates the HSL source once.
        std::fs::remove_dir(&module).unwrap();
        let report = run(&config).unwrap();
        assert_eq!(
            report.table.color("default", Mode::Light, "primary").unwrap(),
            "oklch(0.5409 0.2494 293.01)"
        );
    }

    #[test]
    fn identifier_collision_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("themes.json");
        let source = r#"{"themes": {"dark-blue": {"light": {"a": "0 0% 50%"}}, "dark_blue": {}}}"#;
        std::fs::write(&input, source).unwrap();

        let err = run(&MigrateConfig::new(&input)).unwrap_err();
        assert!(matches!(err, ThemeError::IdentifierCollision { .. }));
        assert_eq!(std::fs::read_to_string(&input).unwrap(), source);
        assert!(!dir.path().join("themes.ts").exists());

        // Without a module there is nothing to collide.
        let report = run(&MigrateConfig::new(&input).with_module(None)).unwrap();
        assert_eq!(report.written, vec![input]);
    }

    #[test]
    fn run_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&MigrateConfig::new(dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ThemeError::Read { .. }));
    }
}
