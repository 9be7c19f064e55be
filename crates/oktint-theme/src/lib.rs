//! # oktint-theme: theme token tables
//!
//! Loads the theme token table, migrates it from HSL to OKLCH, emits the
//! generated module consumed by the rendering backends, and resolves tokens
//! to renderer-ready colors at runtime.
//!
//! # Architecture
//!
//! ```text
//! themes.json ("H S% L%" cells)
//!     │
//!     ▼
//! table.rs:    ThemeTable (tokens + theme → light/dark → token → color)
//!     │
//!     ▼
//! migrate.rs:  pure transform, old table → new table ("oklch(L C H)" cells)
//!     │
//!     ▼
//! codegen.rs:  themes.ts (per-theme color blocks, lookup table, helpers)
//!     │
//!     ▼
//! table.rs:    rewrite themes.json (last, so a failed run leaves HSL input)
//!
//! resolve.rs:  (theme, mode, token) → "rgba(r, g, b, a)" or a fallback
//! ```
//!
//! Migration is a one-shot step: OKLCH cells are not valid HSL triplets, so
//! running it twice corrupts the table.

pub mod codegen;
pub mod error;
pub mod migrate;
pub mod resolve;
pub mod table;

pub use error::ThemeError;
pub use migrate::{MigrateConfig, Migration, MigrationReport};
pub use resolve::ColorResolver;
pub use table::{Mode, ThemeModes, ThemeTable, TokenMap};
