//! Fixed-point YCrCb to RGB conversion (BT.601, full range).
//!
//! Coefficients are the BT.601 inverse-matrix terms scaled by 2^14:
//!
//! ```text
//! R = Y + 1.403 * (Cr - 128)
//! G = Y - 0.714 * (Cr - 128) - 0.344 * (Cb - 128)
//! B = Y + 1.773 * (Cb - 128)
//! ```
//!
//! Each chroma term is descaled with round-half-up (`(x + 2^13) >> 14`,
//! arithmetic shift) before Y is added, and the sum is clamped to 0..=255.
//! This reproduces the integer path of the common computer-vision
//! conversion tables bit for bit.

const SHIFT: i32 = 14;
const HALF: i32 = 1 << (SHIFT - 1);
const CHROMA_OFFSET: i32 = 128;

const CR_TO_R: i32 = 22987;
const CR_TO_G: i32 = -11698;
const CB_TO_G: i32 = -5636;
const CB_TO_B: i32 = 29049;

#[inline]
fn descale(x: i32) -> i32 {
    (x + HALF) >> SHIFT
}

#[inline]
fn saturate(x: i32) -> u8 {
    x.clamp(0, 255) as u8
}

/// Convert one `[Y, Cr, Cb]` pixel to `[R, G, B]`.
///
/// # Example
///
/// ```
/// use color_grid::ycrcb_to_rgb;
///
/// assert_eq!(ycrcb_to_rgb([0, 0, 0]), [0, 135, 0]);
/// assert_eq!(ycrcb_to_rgb([0, 255, 255]), [178, 0, 225]);
/// assert_eq!(ycrcb_to_rgb([90, 128, 128]), [90, 90, 90]);
/// ```
#[inline]
pub fn ycrcb_to_rgb(pixel: [u8; 3]) -> [u8; 3] {
    let y = pixel[0] as i32;
    let cr = pixel[1] as i32 - CHROMA_OFFSET;
    let cb = pixel[2] as i32 - CHROMA_OFFSET;

    let r = y + descale(cr * CR_TO_R);
    let g = y + descale(cr * CR_TO_G + cb * CB_TO_G);
    let b = y + descale(cb * CB_TO_B);

    [saturate(r), saturate(g), saturate(b)]
}
