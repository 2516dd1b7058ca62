// Page-wide constants: canvas geometry, grid pitches, log cap and cosmetic timings.

/// Selector demo canvas.
pub const DEMO_CANVAS_WIDTH: u32 = 300;
pub const DEMO_CANVAS_HEIGHT: u32 = 300;
pub const DEMO_GRID_PITCH: f64 = 20.0;
pub const DEMO_GRID_STYLE: &str = "#e5e7eb";
pub const DEMO_STROKE_STYLE: &str = "#374151";

/// Playground canvas.
pub const PLAYGROUND_CANVAS_WIDTH: u32 = 600;
pub const PLAYGROUND_CANVAS_HEIGHT: u32 = 400;
pub const PLAYGROUND_GRID_PITCH: f64 = 40.0;
pub const PLAYGROUND_GRID_STYLE: &str = "#f0f0f0";
/// Half extent of a shape drawn on the playground (circle radius, half side).
pub const PLAYGROUND_SHAPE_SIZE: f64 = 30.0;
/// Keeps randomly placed shapes from clipping the canvas edge.
pub const PLACEMENT_MARGIN: f64 = 50.0;

pub const SHAPE_LINE_WIDTH: f64 = 3.0;
pub const GRID_LINE_WIDTH: f64 = 1.0;

pub const CALL_LOG_CAPACITY: usize = 8;

pub const PULSE_MS: i32 = 200;
pub const MODAL_CLOSE_MS: i32 = 300;
pub const ANNOUNCE_CLEAR_MS: i32 = 1000;
