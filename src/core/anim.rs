//! Pure animation math for the decorator and gate effects.
//!
//! Kept free of DOM types so host-side tests can drive it directly.

/// Quadratic ease-in-out over `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Exponentially approach `target` from `current`. `duration` is the
/// smoothing time constant in seconds, floored at 1 ms so a zero or negative
/// configuration cannot stall or explode the step.
pub fn approach(current: f32, target: f32, duration: f32, delta: f32) -> f32 {
    let safe = duration.max(0.001);
    let alpha = 1.0 - (-delta / safe).exp();
    current + (target - current) * alpha
}

/// Shader progress for the burn reveal. The visible range starts at `floor`
/// so the paper ignites immediately instead of idling near zero.
pub fn burn_progress(normalized: f32, floor: f32) -> f32 {
    floor + (1.0 - floor) * ease_in_out(normalized.clamp(0.0, 1.0))
}

/// Normalized reading progress through an article. The window opens slightly
/// before the article top and closes near its bottom; the result is clamped
/// to `[0, 1]`, hitting the extremes exactly at the window boundaries.
pub fn progress_fraction(
    scroll_y: f64,
    article_top: f64,
    article_height: f64,
    viewport_height: f64,
    start_frac: f64,
    end_frac: f64,
) -> f64 {
    let start = article_top - viewport_height * start_frac;
    let end = article_top + article_height - viewport_height * end_frac;
    ((scroll_y - start) / (end - start).max(1.0)).clamp(0.0, 1.0)
}

/// Staggered reveal delay by DOM order, capped so late cards do not lag.
pub fn reveal_delay_ms(index: usize, step_ms: u32, max_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms).min(max_ms)
}

/// Uniform set driven into the noise-button shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonParams {
    pub speed: f32,
    pub amplitude: f32,
    pub pulse_min: f32,
    pub pulse_max: f32,
    pub tap: f32,
}

impl ButtonParams {
    /// Ease every field toward `target` with the shared time constant.
    pub fn approach_toward(&mut self, target: &ButtonParams, duration: f32, delta: f32) {
        self.speed = approach(self.speed, target.speed, duration, delta);
        self.amplitude = approach(self.amplitude, target.amplitude, duration, delta);
        self.pulse_min = approach(self.pulse_min, target.pulse_min, duration, delta);
        self.pulse_max = approach(self.pulse_max, target.pulse_max, duration, delta);
        self.tap = approach(self.tap, target.tap, duration, delta);
    }
}

// Resting and pressed parameter sets for the noise button.
pub const BUTTON_RESTING: ButtonParams = ButtonParams {
    speed: 0.35,
    amplitude: 80.0,
    pulse_min: 0.05,
    pulse_max: 0.2,
    tap: 1.0,
};
pub const BUTTON_ACTIVE: ButtonParams = ButtonParams {
    speed: 2.8,
    amplitude: 10.0,
    pulse_min: 0.05,
    pulse_max: 0.4,
    tap: 1.0,
};

// Easing time constants (seconds): press snaps, release drifts back.
pub const BUTTON_PRESS_EASE_SEC: f32 = 0.26;
pub const BUTTON_RELEASE_EASE_SEC: f32 = 3.0;
