use crate::constants::{HERO_PARALLAX_FACTOR, STATS_PARALLAX_FACTOR};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxOffsets {
    pub hero_px: f64,
    pub stats_px: f64,
}

/// Hero content drifts down, the stats card drifts up, both proportional to
/// the scroll offset.
#[inline]
pub fn parallax_offsets(scroll_y: f64) -> ParallaxOffsets {
    ParallaxOffsets {
        hero_px: scroll_y * HERO_PARALLAX_FACTOR,
        stats_px: scroll_y * STATS_PARALLAX_FACTOR,
    }
}

#[inline]
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_scale_with_scroll() {
        let o = parallax_offsets(200.0);
        assert!((o.hero_px - 20.0).abs() < 1e-9);
        assert!((o.stats_px + 10.0).abs() < 1e-9);
        assert_eq!(translate_y(20.0), "translateY(20px)");
    }
}
