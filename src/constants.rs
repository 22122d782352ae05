// src/constants.rs

use plotters::style::colors::{BLACK, WHITE};
use plotters::style::RGBColor;

// Sampling. The generator always emits SAMPLE_COUNT samples (t = 0..16 s).
pub const SAMPLE_COUNT: usize = 17;
pub const DEFAULT_INTERVAL_S: f64 = 1.0;
pub const DEFAULT_ITERATIONS: usize = 16;
pub const INITIAL_SPEED: f64 = 0.0; // Object starts from rest

// Plot dimensions (16 x 2 inch figure at 100 dpi).
pub const PLOT_WIDTH: u32 = 1600;
pub const PLOT_HEIGHT: u32 = 240;
pub const DEFAULT_OUTPUT_FILE: &str = "tickertape.png";

// Fraction of the data span added on each side of the x range.
pub const RANGE_PADDING_RATIO: f64 = 0.05;
// Padding used when the data span is (nearly) zero.
pub const RANGE_PADDING_MIN: f64 = 0.5;
// The tape is a single line at y = 0; this is its half-height in data units.
pub const TAPE_HALF_HEIGHT: f64 = 1.0;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 22;
pub const FONT_SIZE_CHART_TITLE: i32 = 16;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;

// --- Plot Color Assignments ---
pub const COLOR_TICKERTAPE_DOT: RGBColor = RGBColor(0xFF, 0x80, 0x00);
pub const COLOR_BACKGROUND: RGBColor = WHITE;
pub const COLOR_TEXT: RGBColor = BLACK;
pub const COLOR_GRID: RGBColor = RGBColor(200, 200, 200);

// Dot radius in pixels.
pub const DOT_RADIUS: i32 = 2;

// Text labels for the tickertape plot.
pub const TICKERTAPE_TITLE: &str = "Tickertape Gravity Simulation";
pub const TICKERTAPE_SUBTITLE: &str = "(each dot is 1 second)";
pub const TICKERTAPE_X_LABEL: &str = "Displacements (metres)";

// src/constants.rs
