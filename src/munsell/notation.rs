use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// MunsellNotation – parsed form of a notation string
// ---------------------------------------------------------------------------

/// The ten Munsell hue families, clockwise from red.
const HUE_FAMILIES: &[&str] = &["R", "YR", "Y", "GY", "G", "BG", "B", "PB", "P", "RP"];

/// A Munsell notation, parsed once into its tagged form.
///
/// Two textual shapes exist:
/// * neutral, `N <value>`: achromatic grays with no hue or chroma
/// * chromatic, `<hue> <value>/<chroma>`: e.g. `10YR 3/2`, `5PB 5/2`
///
/// Classification follows recording practice: any notation whose trimmed
/// text starts with `N` is taken as neutral, everything else as chromatic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MunsellNotation {
    /// Achromatic gray, value in [0, 10].
    Neutral { value: f32 },
    /// Hue leaf (e.g. `10YR`), value in [0, 10], non-negative chroma.
    Chromatic {
        hue: String,
        value: f32,
        chroma: f32,
    },
}

/// Why a notation string failed to parse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseNotationError {
    #[error("neutral notation '{0}' must be two tokens: \"N <value>\"")]
    NeutralShape(String),

    #[error("'{token}' in '{notation}' is not a number")]
    BadNumber { notation: String, token: String },

    #[error("chromatic notation '{0}' must look like \"<hue> <value>/<chroma>\"")]
    ChromaticShape(String),

    #[error("'{hue}' in '{notation}' is not a Munsell hue code")]
    BadHue { notation: String, hue: String },

    #[error("chroma in '{0}' must not be negative")]
    NegativeChroma(String),
}

impl FromStr for MunsellNotation {
    type Err = ParseNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('N') {
            parse_neutral(s)
        } else {
            parse_chromatic(s)
        }
    }
}

impl fmt::Display for MunsellNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MunsellNotation::Neutral { value } => write!(f, "N {value}"),
            MunsellNotation::Chromatic { hue, value, chroma } => {
                write!(f, "{hue} {value}/{chroma}")
            }
        }
    }
}

impl MunsellNotation {
    /// Whether this is an achromatic (neutral) notation.
    pub fn is_neutral(&self) -> bool {
        matches!(self, MunsellNotation::Neutral { .. })
    }
}

fn parse_neutral(s: &str) -> Result<MunsellNotation, ParseNotationError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ParseNotationError::NeutralShape(s.to_string()));
    }
    // Tolerate a stray chroma suffix on the value token (`N 5/0`).
    let token = tokens[1];
    let value_str = token.split('/').next().unwrap_or(token);
    let value = parse_finite(s, value_str)?;
    Ok(MunsellNotation::Neutral { value })
}

/// Parse a numeric token, rejecting NaN and infinities along with plain
/// garbage; survey data never carries non-finite numbers on purpose.
fn parse_finite(notation: &str, token: &str) -> Result<f32, ParseNotationError> {
    token
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseNotationError::BadNumber {
            notation: notation.to_string(),
            token: token.to_string(),
        })
}

fn parse_chromatic(s: &str) -> Result<MunsellNotation, ParseNotationError> {
    let mut tokens = s.split_whitespace();
    let (Some(hue), Some(vc), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(ParseNotationError::ChromaticShape(s.to_string()));
    };

    validate_hue(s, hue)?;

    let Some((value_str, chroma_str)) = vc.split_once('/') else {
        return Err(ParseNotationError::ChromaticShape(s.to_string()));
    };
    let value = parse_finite(s, value_str)?;
    let chroma = parse_finite(s, chroma_str)?;
    if chroma < 0.0 {
        return Err(ParseNotationError::NegativeChroma(s.to_string()));
    }

    Ok(MunsellNotation::Chromatic {
        hue: hue.to_string(),
        value,
        chroma,
    })
}

/// A hue code is a numeric step followed by a family, e.g. `10YR`, `7.5YR`.
fn validate_hue(notation: &str, hue: &str) -> Result<(), ParseNotationError> {
    let bad_hue = || ParseNotationError::BadHue {
        notation: notation.to_string(),
        hue: hue.to_string(),
    };

    let family_start = hue
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(bad_hue)?;
    let (step, family) = hue.split_at(family_start);
    if step.parse::<f32>().is_err() || !HUE_FAMILIES.contains(&family) {
        return Err(bad_hue());
    }
    Ok(())
}
