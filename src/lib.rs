//! # munsell-tone
//!
//! Maps categorical color-tone names, as recorded in field-survey tables, to
//! Munsell notation and a display-ready sRGB triplet.
//!
//! The conversion runs in two stages:
//! 1. tone label → Munsell notation, via the immutable [`ToneTable`]
//!    (composite labels like `灰白～淡` resolve by their primary segment);
//! 2. Munsell notation → sRGB, with neutral grays mapped linearly and
//!    chromatic colors going through CIE xyY → XYZ → sRGB.
//!
//! Both stages are pure functions of their input; a batch of N labels always
//! yields N results, each independently populated or left missing.
//!
//! ## Example
//!
//! ```rust
//! use munsell_tone::{annotate_label, ToneTable};
//!
//! let tones = ToneTable::builtin();
//! let result = annotate_label(&tones, "暗灰");
//! assert_eq!(result.munsell.as_deref(), Some("N 3"));
//! assert_eq!(result.r, Some(77));
//! ```

pub mod annotate;
pub mod data;
pub mod munsell;
pub mod tone;

pub use annotate::{
    annotate_label, annotate_labels, annotate_table, AnnotationSummary, ConversionResult,
    MissingColumn, RESULT_HEADERS,
};
pub use munsell::convert::{convert, to_srgb, ConvertError};
pub use munsell::notation::{MunsellNotation, ParseNotationError};
pub use munsell::renotation::RenotationError;
pub use tone::{ToneTable, TONE_SEPARATOR};
