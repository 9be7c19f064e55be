// SPDX-License-Identifier: MIT
//
// oktint: OKLCH theme token migration and color conversion.
//
// This is the main binary that wires together the two crates:
//
//   oktint-color → pure conversions (HSL, hex, sRGB, Oklab, OKLCH)
//   oktint-theme → theme table I/O, migration, codegen, runtime resolution
//
// Subcommands:
//
//   migrate   themes.json (HSL) → themes.json (OKLCH) + themes.ts
//   convert   one-off conversions, result on stdout
//   resolve   look up a token the way a renderer would
//
// Logs go to stderr so stdout only ever carries results.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oktint_color::{Hsl, hsl, pipeline};
use oktint_theme::{ColorResolver, MigrateConfig, Mode, ThemeTable, migrate};
use tracing::{debug, error};
use tracing_subscriber::prelude::*;

// ─── CLI ────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "oktint", about = "OKLCH theme token migration and color conversion", version)]
struct Cli {
    /// More logging (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert every HSL cell of a theme table to OKLCH. Run once only.
    Migrate {
        /// Theme table to read.
        #[arg(long, env = "OKTINT_INPUT", default_value = "themes.json")]
        input: PathBuf,

        /// Where to write the migrated table [default: the input file].
        #[arg(long, env = "OKTINT_OUTPUT")]
        output: Option<PathBuf>,

        /// Generated module path [default: the input path with a .ts extension].
        #[arg(long, env = "OKTINT_MODULE")]
        module: Option<PathBuf>,

        /// Skip generating the module.
        #[arg(long, conflicts_with = "module")]
        no_module: bool,

        /// Convert and report without writing anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Convert a single color.
    Convert {
        #[command(subcommand)]
        conversion: Conversion,
    },

    /// Resolve a token to `rgba(...)`, printing the fallback on failure.
    Resolve {
        /// Migrated theme table.
        #[arg(long, env = "OKTINT_INPUT", default_value = "themes.json")]
        input: PathBuf,

        #[arg(long, default_value = "default")]
        theme: String,

        #[arg(long, default_value = "light", value_parser = parse_mode)]
        mode: Mode,

        /// Returned unchanged when the token cannot be resolved.
        #[arg(long, default_value = "#000000")]
        fallback: String,

        #[arg(long, default_value_t = 1.0)]
        alpha: f64,

        /// Semantic token name, e.g. `primary`.
        token: String,
    },
}

#[derive(Subcommand, Debug)]
enum Conversion {
    /// "H S% L%" → "oklch(L C H)".
    HslToOklch { hsl: String },

    /// "oklch(L C H)" → "rgba(r, g, b, a)".
    OklchToRgba {
        oklch: String,
        #[arg(long, default_value_t = 1.0)]
        alpha: f64,
    },

    /// "oklch(L C H)" → "#rrggbb".
    OklchToHex { oklch: String },

    /// "#rrggbb" → "H S% L%". Invalid input prints "0 0% 0%".
    HexToHsl { hex: String },

    /// H S L → "#rrggbb".
    HslToHex {
        #[arg(allow_negative_numbers = true)]
        h: f64,
        s: f64,
        l: f64,
    },

    /// "oklch(L C H)" → "oklch(L C H / A)".
    WithAlpha { oklch: String, alpha: f64 },
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse().map_err(|e: oktint_theme::ThemeError| e.to_string())
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(command: Command) -> Result<()> {
    match command {
        Command::Migrate { input, output, module, no_module, dry_run } => {
            let mut config = MigrateConfig::new(&input).dry_run(dry_run);
            if let Some(output) = output {
                config = config.with_output(output);
            }
            if no_module {
                config = config.with_module(None);
            } else if let Some(module) = module {
                config = config.with_module(Some(module));
            }
            debug!(?config, "migrating");

            let report = migrate::run(&config)
                .with_context(|| format!("failed to migrate {}", input.display()))?;
            println!("converted {} colors across {} themes", report.converted, report.themes);
            for path in &report.written {
                println!("wrote {}", path.display());
            }
        }

        Command::Convert { conversion } => println!("{}", convert(conversion)?),

        Command::Resolve { input, theme, mode, fallback, alpha, token } => {
            let table = ThemeTable::load(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;
            let resolver = ColorResolver::new(&table, &theme, mode);
            println!("{}", resolver.resolve_with_alpha(&token, alpha, &fallback));
        }
    }
    Ok(())
}

fn convert(conversion: Conversion) -> Result<String> {
    Ok(match conversion {
        Conversion::HslToOklch { hsl } => pipeline::hsl_string_to_oklch(&hsl),
        Conversion::OklchToRgba { oklch, alpha } => pipeline::oklch_to_rgba(&oklch, alpha)?,
        Conversion::OklchToHex { oklch } => pipeline::oklch_to_hex(&oklch)?,
        Conversion::HexToHsl { hex } => hsl::hex_to_hsl(&hex).to_string(),
        Conversion::HslToHex { h, s, l } => hsl::hsl_to_hex(h, s, l),
        Conversion::WithAlpha { oklch, alpha } => pipeline::oklch_with_alpha(&oklch, alpha),
    })
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
