/// DOM contract and timing tunables for the decorator and gate.
///
/// Selector and class names mirror the theme's templates and stylesheet;
/// timings express intended behavior and keep magic numbers out of the
/// wiring code.
// Query flag that requests the welcome gate on the next load
pub const WELCOME_PARAM: &str = "welcome";
pub const WELCOME_VALUE: &str = "1";
// Rewrite target when the brand link's href cannot be parsed
pub const FALLBACK_WELCOME_HREF: &str = "/?welcome=1";

// Document-root classes owned by the gate lifecycle
pub const GATE_PENDING_CLASS: &str = "welcome-gate-pending";
pub const GATE_OPEN_CLASS: &str = "welcome-gate-open";
pub const GATE_ID: &str = "welcomeGate";

// Decorator selectors (external contract with the page templates)
pub const MAIN_MENU_SELECTOR: &str = ".main-menu";
pub const HERO_SELECTOR: &str =
    ".relative.flex.flex-col.items-center.justify-center.px-1.py-1.text-center";
pub const HERO_MARKER_SELECTOR: &str = ".glitter-lyric";
pub const ARTICLE_SELECTOR: &str = ".article-content";
pub const CARD_SELECTOR: &str = ".article-link--card";
pub const REVEAL_SELECTOR: &str = ".article-link--card, #single_header, .toc-right, .toc-inside";

// Backing-store resolution cap (device pixels per CSS pixel)
pub const DPR_CAP: f64 = 2.0;

// Rain glyph font
pub const RAIN_FONT_FAMILY: &str = "\"JetBrains Mono\", monospace";

// Reading progress window, as fractions of the viewport height
pub const PROGRESS_START_VIEWPORT_FRAC: f64 = 0.18;
pub const PROGRESS_END_VIEWPORT_FRAC: f64 = 0.55;
// Visibility hysteresis at the extremes
pub const PROGRESS_SHOW_MIN: f64 = 0.01;
pub const PROGRESS_SHOW_MAX: f64 = 0.995;

// Reveal stagger and observer tuning
pub const REVEAL_DELAY_STEP_MS: u32 = 45;
pub const REVEAL_DELAY_MAX_MS: u32 = 240;
pub const REVEAL_THRESHOLD: f64 = 0.02;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -8% 0px";

// Burn transition timing (milliseconds)
pub const BURN_DURATION_MS: f64 = 1220.0;
pub const BURN_MIN_DURATION_MS: f64 = 100.0;
// Close runs this long after the reveal's duration
pub const CLOSE_BUFFER_MS: f64 = 120.0;
// Close delay when the reveal could not start (no WebGL)
pub const CLOSE_FALLBACK_MS: f64 = 620.0;
// Shader progress at normalized time zero
pub const BURN_PROGRESS_FLOOR: f32 = 0.3;

// Noise button frame delta clamp (seconds)
pub const BUTTON_DELTA_MIN_SEC: f32 = 0.001;
pub const BUTTON_DELTA_MAX_SEC: f32 = 0.08;
// Delta used for single static draws under reduced motion
pub const BUTTON_STATIC_DELTA_SEC: f32 = 1.0 / 60.0;
// Inset between the button box and its canvas (CSS pixels)
pub const BUTTON_CANVAS_INSET_PX: f64 = 4.0;
// Noise flavour selector fed to the shader (1.0 = trigonometric)
pub const BUTTON_NOISE_TYPE: f32 = 1.0;
// Phase wraps here to keep the time uniform small
pub const BUTTON_PHASE_WRAP: f32 = 1000.0;
