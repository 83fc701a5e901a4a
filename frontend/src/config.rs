use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tuning knobs for the scroll and pointer effects.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Added to the scroll offset before looking for the active section.
    pub lookahead_bias: f64,
    pub capture_radius: f64,
    pub max_displacement: f64,
    /// Fraction of an element that must be visible before it reveals.
    pub reveal_threshold: f64,
    pub scroll_top_threshold: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            lookahead_bias: 100.0,
            capture_radius: 200.0,
            max_displacement: 20.0,
            reveal_threshold: 0.1,
            scroll_top_threshold: 300.0,
        }
    }
}
