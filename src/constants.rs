/// Front-end constants: DOM wiring and logging cadence.
///
/// Simulation tuning lives in `fireworks_core::constants`.
// Canvas element the effect draws into
pub const CANVAS_ID: &str = "fireworksCanvas";

// How often the frame loop reports scene statistics (seconds)
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0;

// Level used when the page does not ask for a different one
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
