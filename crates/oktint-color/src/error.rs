// SPDX-License-Identifier: MIT

use thiserror::Error;

/// A color string that could not be parsed by one of the strict parsers.
///
/// Only the strict entry points return this. The lenient ones
/// ([`hex_to_hsl`](crate::hsl::hex_to_hsl),
/// [`Hsl::parse_triplet`](crate::Hsl::parse_triplet)) fall back to
/// sentinel values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("invalid OKLCH color {0:?}: expected `oklch(L C H)`")]
    Oklch(String),

    #[error("invalid hex color {0:?}: expected `#RRGGBB`")]
    Hex(String),
}
