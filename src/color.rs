use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// "Blues" sequential colour map
// ---------------------------------------------------------------------------

/// ColorBrewer "Blues" anchors, light to dark (as used by matplotlib).
const BLUES: [(u8, u8, u8); 9] = [
    (247, 251, 255),
    (222, 235, 247),
    (198, 219, 239),
    (158, 202, 225),
    (107, 174, 214),
    (66, 146, 198),
    (33, 113, 181),
    (8, 81, 156),
    (8, 48, 107),
];

/// `n` colours sampled at evenly spaced interior points of the Blues map,
/// skipping the two extremes (same sampling as seaborn's `color_palette`).
pub fn blues_palette(n: usize) -> Vec<Color32> {
    (1..=n)
        .map(|i| sample_blues(i as f32 / (n + 1) as f32))
        .collect()
}

/// Colour at position `t` in `[0, 1]`, linearly interpolated in sRGB.
fn sample_blues(t: f32) -> Color32 {
    let scaled = t.clamp(0.0, 1.0) * (BLUES.len() - 1) as f32;
    let lower = (scaled.floor() as usize).min(BLUES.len() - 2);
    let frac = scaled - lower as f32;

    let (r0, g0, b0) = BLUES[lower];
    let (r1, g1, b1) = BLUES[lower + 1];
    let a: Srgb<f32> = Srgb::new(r0, g0, b0).into_format();
    let b: Srgb<f32> = Srgb::new(r1, g1, b1).into_format();

    let mixed = Srgb::new(
        a.red + (b.red - a.red) * frac,
        a.green + (b.green - a.green) * frac,
        a.blue + (b.blue - a.blue) * frac,
    );
    let rgb: Srgb<u8> = mixed.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Shades used by the chart
// ---------------------------------------------------------------------------

/// Bar fill, resolved to a colour only when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Medium,
    /// Highlights the largest bar of a panel.
    Dark,
}

#[derive(Debug, Clone, Copy)]
pub struct Shades {
    pub medium: Color32,
    pub dark: Color32,
}

impl Default for Shades {
    fn default() -> Self {
        let palette = blues_palette(4);
        Self {
            medium: palette[2],
            dark: palette[3],
        }
    }
}

impl Shades {
    pub fn color(&self, shade: Shade) -> Color32 {
        match shade {
            Shade::Medium => self.medium,
            Shade::Dark => self.dark,
        }
    }
}

/// Wage parity marker: red at 40% opacity.
pub fn reference_line() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 0, 0, 102)
}

/// Seaborn "dark" style axes background.
pub const AXES_FACE: Color32 = Color32::from_rgb(0xEA, 0xEA, 0xF2);
