// SPDX-License-Identifier: MIT
//
// oktint-color: the color conversion engine behind oktint.
//
// Pure, stateless numeric conversions between the color spaces used by
// theme tokens:
//
//   HSL → sRGB ↔ Linear sRGB ↔ Oklab ↔ OKLCH
//
// plus the hex ↔ HSL helpers used by color pickers. Internally every
// step passes a typed value (`Hsl`, `Srgb`, `LinearRgb`, `Oklab`,
// `Oklch`); strings only appear at the edges, in `pipeline`, where theme
// files and renderers expect `"H S% L%"`, `"oklch(L C H)"`, `"#rrggbb"`
// and `"rgba(r, g, b, a)"` literals.
//
// Two parse policies live side by side:
//
//   lenient: HSL triplets and hex strings degrade to NaN / zero values
//            (migration data, live picker keystrokes)
//   strict:  OKLCH strings return `ParseColorError` (render time)

pub mod color;
pub mod error;
pub mod gamma;
pub mod hsl;
pub mod oklab;
pub mod pipeline;

mod num;

pub use color::{Color, Hsl, LinearRgb, Oklab, Oklch, Rgb8, Srgb};
pub use error::ParseColorError;
