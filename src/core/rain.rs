//! Shared glyph-rain model behind the hero and gate canvases.
//!
//! Both surfaces run the same effect with different tuning, so the column
//! state and stepping live here once, parameterized by `RainParams`.
//! Randomness is seeded per loop, which keeps host tests reproducible.

use rand::prelude::*;

/// Tuning for one rain surface.
#[derive(Clone, Copy, Debug)]
pub struct RainParams {
    /// Character set glyphs are drawn from.
    pub glyphs: &'static str,
    /// Opaque-ish fill painted once at (re)setup.
    pub settle_fill: &'static str,
    /// Translucent full-surface fill per frame, producing the fade trail.
    pub trail_fill: &'static str,
    /// Glyph color as an `r, g, b` fragment; alpha varies per glyph.
    pub glyph_rgb: &'static str,
    /// Minimum milliseconds between drawn frames (~24fps throttle).
    pub min_frame_ms: f64,
    pub narrow_font_px: f32,
    pub wide_font_px: f32,
    /// Width threshold below which the narrow font applies.
    pub narrow_below_px: f32,
    pub alpha_base: f32,
    pub alpha_span: f32,
    pub fall_base: f32,
    pub fall_span: f32,
    /// Per-frame probability of keeping a column below the bottom edge;
    /// it resets to the top with probability `1 - reset_keep`.
    pub reset_keep: f32,
}

pub const HERO_RAIN: RainParams = RainParams {
    glyphs: "01{}[]<>/\\*#%&$+-=アイウエオカキクケコ",
    settle_fill: "rgba(4, 10, 22, 0.22)",
    trail_fill: "rgba(4, 10, 22, 0.16)",
    glyph_rgb: "0, 255, 157",
    min_frame_ms: 42.0,
    narrow_font_px: 12.0,
    wide_font_px: 14.0,
    narrow_below_px: 680.0,
    alpha_base: 0.35,
    alpha_span: 0.5,
    fall_base: 0.8,
    fall_span: 0.65,
    reset_keep: 0.975,
};

pub const GATE_RAIN: RainParams = RainParams {
    glyphs: "01{}[]<>/\\*#%&$+-=アイウエオカキクケコサシスセソ",
    settle_fill: "rgba(3, 8, 18, 0.3)",
    trail_fill: "rgba(3, 8, 18, 0.17)",
    glyph_rgb: "0, 255, 157",
    min_frame_ms: 40.0,
    narrow_font_px: 12.0,
    wide_font_px: 14.0,
    narrow_below_px: 680.0,
    alpha_base: 0.32,
    alpha_span: 0.5,
    fall_base: 0.72,
    fall_span: 0.62,
    reset_keep: 0.975,
};

/// One glyph to draw this frame.
#[derive(Clone, Copy, Debug)]
pub struct RainGlyph {
    pub x: f32,
    pub y: f32,
    pub ch: char,
    pub alpha: f32,
}

/// Column fall state for one surface.
pub struct RainField {
    glyphs: Vec<char>,
    font_size: f32,
    columns: usize,
    drops: Vec<f32>,
    rng: StdRng,
}

impl RainField {
    pub fn new(width: f32, height: f32, params: &RainParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let font_size = if width < params.narrow_below_px {
            params.narrow_font_px
        } else {
            params.wide_font_px
        };
        let columns = ((width / font_size).floor() as usize).max(1);
        let drops = (0..columns)
            .map(|_| rng.gen::<f32>() * (height / font_size))
            .collect();
        Self {
            glyphs: params.glyphs.chars().collect(),
            font_size,
            columns,
            drops,
            rng,
        }
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn drops(&self) -> &[f32] {
        &self.drops
    }

    /// Advance every column one step and report the glyphs to draw.
    pub fn step(&mut self, height: f32, params: &RainParams) -> Vec<RainGlyph> {
        let mut out = Vec::with_capacity(self.columns);
        for i in 0..self.columns {
            let ch = self.glyphs[self.rng.gen_range(0..self.glyphs.len())];
            let x = i as f32 * self.font_size;
            let y = self.drops[i] * self.font_size;
            let alpha = params.alpha_base + self.rng.gen::<f32>() * params.alpha_span;
            out.push(RainGlyph { x, y, ch, alpha });

            if y > height && self.rng.gen::<f32>() > params.reset_keep {
                self.drops[i] = 0.0;
            } else {
                self.drops[i] += params.fall_base + self.rng.gen::<f32>() * params.fall_span;
            }
        }
        out
    }
}
