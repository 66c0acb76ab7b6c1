//! Grouped runtime configuration.
//!
//! Every field defaults to the matching value in [`crate::constants`]; the
//! web front-end builds its components from `Default::default()`.

use crate::constants::*;

/// Object density of the background scene, picked from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    Full,
    Reduced,
}

impl Density {
    /// Narrow viewports (strictly below the breakpoint) get fewer objects.
    pub fn for_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Density::Reduced
        } else {
            Density::Full
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DensityCounts {
    pub particles: usize,
    pub shapes: usize,
    pub lines: usize,
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub full: DensityCounts,
    pub reduced: DensityCounts,
    pub particle_volume: f32,
    pub shape_volume: f32,
    pub line_volume: f32,
    pub camera_z: f32,
    pub camera_smoothing: f32,
    pub camera_reach: f32,
}

impl SceneConfig {
    pub fn counts(&self, density: Density) -> DensityCounts {
        match density {
            Density::Full => self.full,
            Density::Reduced => self.reduced,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            full: DensityCounts {
                particles: PARTICLE_COUNTS.0,
                shapes: SHAPE_COUNTS.0,
                lines: LINE_COUNTS.0,
            },
            reduced: DensityCounts {
                particles: PARTICLE_COUNTS.1,
                shapes: SHAPE_COUNTS.1,
                lines: LINE_COUNTS.1,
            },
            particle_volume: PARTICLE_VOLUME,
            shape_volume: SHAPE_VOLUME,
            line_volume: LINE_VOLUME,
            camera_z: CAMERA_Z,
            camera_smoothing: CAMERA_SMOOTHING,
            camera_reach: CAMERA_POINTER_REACH,
        }
    }
}

/// Timing and geometry knobs for the page controller.
#[derive(Clone, Debug)]
pub struct InteractionConfig {
    pub breakpoint_px: f64,
    pub nav_scroll_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub reveal_stagger_ms: u32,
    pub feature_icon_stagger_ms: u32,
    pub counter_duration_ms: f64,
    pub scroll_pulse_ms: u32,
    pub cursor_smoothing: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            nav_scroll_threshold_px: NAV_SCROLL_THRESHOLD_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN,
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            feature_icon_stagger_ms: FEATURE_ICON_STAGGER_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            scroll_pulse_ms: SCROLL_PULSE_MS,
            cursor_smoothing: CURSOR_SMOOTHING,
        }
    }
}
