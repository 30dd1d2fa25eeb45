//! Unit conversion utilities.
//!
//! WordprocessingML sizes drawings in EMUs and page geometry in twips.
//! Pixel sizes assume 96 DPI, so one pixel is exactly 9525 EMUs and the
//! conversion is lossless for integer inputs.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_PIXEL: i64 = 9_525;
pub const TWIPS_PER_INCH: u32 = 1_440;

#[inline]
pub fn px_to_emu(px: u32) -> i64 {
    i64::from(px) * EMUS_PER_PIXEL
}

#[inline]
pub fn emu_to_px(emu: i64) -> i64 {
    emu / EMUS_PER_PIXEL
}

#[inline]
pub fn inches_to_twips(inches: f64) -> u32 {
    (inches * f64::from(TWIPS_PER_INCH)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_emu_is_exact() {
        assert_eq!(px_to_emu(0), 0);
        assert_eq!(px_to_emu(1), 9_525);
        assert_eq!(px_to_emu(96), EMUS_PER_INCH);
        assert_eq!(px_to_emu(u32::MAX), i64::from(u32::MAX) * 9_525);
    }

    #[test]
    fn test_emu_to_px() {
        assert_eq!(emu_to_px(952_500), 100);
        assert_eq!(emu_to_px(EMUS_PER_INCH), 96);
    }

    #[test]
    fn test_inches_to_twips() {
        assert_eq!(inches_to_twips(1.0), 1_440);
        assert_eq!(inches_to_twips(0.5), 720);
        assert_eq!(inches_to_twips(8.5), 12_240);
    }

    #[test]
    fn test_pt_and_pixel_agree_at_96_dpi() {
        // 72pt == 96px == 1in
        assert_eq!(72 * EMUS_PER_PT, px_to_emu(96));
    }
}
