use image::{Rgba, RgbaImage};

/// Blends `target` over `source` on a transparent canvas.
///
/// `source` is drawn first at `1 - opacity`, then `target` at `opacity`, both
/// with straight-alpha source-over. Both rasters must share dimensions.
pub fn cross_fade(source: &RgbaImage, target: &RgbaImage, opacity: f32) -> RgbaImage {
    debug_assert_eq!(source.dimensions(), target.dimensions());
    let opacity = opacity.clamp(0.0, 1.0);
    let (width, height) = source.dimensions();

    let mut canvas = RgbaImage::new(width, height);
    for ((out, s), t) in canvas.pixels_mut().zip(source.pixels()).zip(target.pixels()) {
        *out = blend_pixel(s, t, opacity);
    }
    canvas
}

fn blend_pixel(source: &Rgba<u8>, target: &Rgba<u8>, opacity: f32) -> Rgba<u8> {
    let source_alpha = (1.0 - opacity) * source[3] as f32 / 255.0;
    let target_alpha = opacity * target[3] as f32 / 255.0;

    // Empty canvas under the source, so the source keeps its own weight
    let alpha = target_alpha + source_alpha * (1.0 - target_alpha);
    if alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let premul = target[i] as f32 * target_alpha
            + source[i] as f32 * source_alpha * (1.0 - target_alpha);
        to_u8(premul / alpha)
    };
    Rgba([channel(0), channel(1), channel(2), to_u8(alpha * 255.0)])
}

fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
