use palette::{IntoColor, Srgb, Yxy};
use thiserror::Error;

use super::notation::{MunsellNotation, ParseNotationError};
use super::renotation::{self, RenotationError};

// ---------------------------------------------------------------------------
// Munsell notation → display sRGB
// ---------------------------------------------------------------------------

/// Why a notation could not be converted to RGB.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The notation text does not match either Munsell shape.
    #[error("malformed Munsell notation: {0}")]
    Malformed(#[from] ParseNotationError),

    /// The chromatic color-math primitive rejected the notation.
    #[error("color conversion failed: {0}")]
    ColorMath(#[from] RenotationError),
}

/// Convert a notation string to an sRGB triplet in 0–255.
///
/// Parses the string once into its tagged form and dispatches on it; see
/// [`to_srgb`] for the two branches.
pub fn convert(notation: &str) -> Result<[u8; 3], ConvertError> {
    let parsed: MunsellNotation = notation.parse()?;
    to_srgb(&parsed)
}

/// Convert a parsed notation to an sRGB triplet in 0–255.
///
/// Neutral grays map linearly: value 0 → 0, value 10 → 255, on all three
/// channels. The Munsell-to-xyY transform is undefined for achromatic
/// colors, so this branch never touches the chromatic path.
///
/// Chromatic colors go through CIE xyY → XYZ → sRGB; each channel is
/// clipped to [0.0, 1.0] (plain clamp, no gamut remapping) before scaling.
pub fn to_srgb(notation: &MunsellNotation) -> Result<[u8; 3], ConvertError> {
    match notation {
        MunsellNotation::Neutral { value } => Ok(neutral_gray(*value)),
        MunsellNotation::Chromatic { hue, value, chroma } => {
            let (x, y, luma) = renotation::munsell_to_xyy(hue, *value, *chroma)?;
            let srgb: Srgb = Yxy::new(x, y, luma).into_color();
            Ok([
                channel_to_u8(srgb.red),
                channel_to_u8(srgb.green),
                channel_to_u8(srgb.blue),
            ])
        }
    }
}

/// Grayscale level for a neutral value. The saturating cast absorbs values
/// outside [0, 10], which occur in slightly irregular survey data.
fn neutral_gray(value: f32) -> [u8; 3] {
    let level = ((value / 10.0) * 255.0).round() as u8;
    [level; 3]
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
