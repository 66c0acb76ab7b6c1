/// Ease-out-quartic: `1 - (1 - t)^4`, clamped to `[0, 1]`.
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// One step of exponential smoothing: move `current` a `factor` fraction of
/// the way toward `target`.
#[inline]
pub fn approach(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

#[inline]
pub fn approach_f32(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_quart_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(-3.0), 0.0);
        assert_eq!(ease_out_quart(7.0), 1.0);
    }

    #[test]
    fn ease_out_quart_front_loads_progress() {
        // Half the time covers 15/16 of the distance.
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn approach_converges() {
        let mut x = 0.0;
        for _ in 0..200 {
            x = approach(x, 100.0, 0.1);
        }
        assert!((x - 100.0).abs() < 1e-6);
    }
}
