/// HSV (all components in [0, 1]) to linear RGB
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let chroma = v * s;
    let sector = (h.rem_euclid(1.0)) * 6.0;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match sector as i32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Same as [`hsv_to_rgb`] with an alpha channel appended
pub fn hsva_to_rgba(h: f32, s: f32, v: f32, a: f32) -> [f32; 4] {
    let [r, g, b] = hsv_to_rgb(h, s, v);
    [r, g, b, a]
}
