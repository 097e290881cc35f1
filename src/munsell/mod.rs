/// Munsell layer: notation parsing and conversion to display sRGB.
///
/// Architecture:
/// ```text
///   "10YR 3/2" / "N 5"
///          │
///          ▼
///    ┌──────────┐
///    │ notation  │  parse string → MunsellNotation (Neutral | Chromatic)
///    └──────────┘
///          │
///          ▼
///    ┌────────────┐
///    │ renotation  │  Chromatic → CIE xyY (embedded chromaticity grid)
///    └────────────┘
///          │
///          ▼
///    ┌──────────┐
///    │ convert   │  xyY → XYZ → sRGB (palette), clamp, scale to 0–255
///    └──────────┘
/// ```
pub mod convert;
pub mod notation;
pub mod renotation;
