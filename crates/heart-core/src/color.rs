//! Colour conversions used by the material and lights.
//!
//! Authoring values (hex literals, HSL) are sRGB; shading happens in linear
//! space, so everything handed to the renderer goes through [`srgb_to_linear`].

use glam::Vec3;

/// Split a `0xRRGGBB` literal into sRGB components in `[0, 1]`.
#[inline]
pub fn hex_to_srgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[inline]
fn channel_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.077_399_38
    } else {
        (c * 0.947_867_3 + 0.052_132_7).powf(2.4)
    }
}

#[inline]
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    Vec3::new(
        channel_to_linear(c.x),
        channel_to_linear(c.y),
        channel_to_linear(c.z),
    )
}

#[inline]
pub fn hex_to_linear(hex: u32) -> Vec3 {
    srgb_to_linear(hex_to_srgb(hex))
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * 6.0 * (2.0 / 3.0 - t);
    }
    p
}

/// HSL to sRGB. Hue wraps into `[0, 1)`, saturation and lightness clamp.
pub fn hsl_to_srgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let q = 2.0 * l - p;
    Vec3::new(
        hue_to_channel(q, p, h + 1.0 / 3.0),
        hue_to_channel(q, p, h),
        hue_to_channel(q, p, h - 1.0 / 3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hex_splits_channels() {
        let c = hex_to_srgb(0xff1744);
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 0x17 as f32 / 255.0);
        assert_relative_eq!(c.z, 0x44 as f32 / 255.0);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        let c = srgb_to_linear(Vec3::new(0.0, 1.0, 0.5));
        assert_relative_eq!(c.x, 0.0);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(c.z, 0.214, epsilon = 1e-3);
    }

    #[test]
    fn hsl_primaries() {
        let red = hsl_to_srgb(0.0, 1.0, 0.5);
        assert!(red.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));
        let green = hsl_to_srgb(1.0 / 3.0, 1.0, 0.5);
        assert!(green.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), 1e-6));
        let grey = hsl_to_srgb(0.7, 0.0, 0.25);
        assert!(grey.abs_diff_eq(Vec3::splat(0.25), 1e-6));
    }

    #[test]
    fn hue_wraps_around() {
        let a = hsl_to_srgb(0.98, 0.9, 0.6);
        let b = hsl_to_srgb(-0.02, 0.9, 0.6);
        assert!(a.abs_diff_eq(b, 1e-5), "{a:?} vs {b:?}");
    }
}
