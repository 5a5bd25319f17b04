use crate::domain::SeesawConfig;

/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// xorshift32 never leaves 0, so remap it
pub(super) fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { 0x9E37_79B9 } else { seed }
}

/// A weight and color offered for the next click
#[derive(Clone, Debug, PartialEq)]
pub struct WeightDraw {
    pub weight: f64,
    pub color: String,
}

pub(super) fn draw_weight(state: &mut u32, config: &SeesawConfig) -> WeightDraw {
    let span = config.max_weight - config.min_weight + 1;
    let weight = config.min_weight + xorshift32(state) % span;
    let hue = xorshift32(state) % 360;

    WeightDraw {
        weight: weight as f64,
        color: format!("hsl({}, 80%, 55%)", hue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_configured_range() {
        let config = SeesawConfig::default();
        let mut state = sanitize_seed(42);

        for _ in 0..500 {
            let draw = draw_weight(&mut state, &config);
            assert!((1.0..=10.0).contains(&draw.weight));
            assert_eq!(draw.weight.fract(), 0.0);
            assert!(draw.color.starts_with("hsl("));
            assert!(draw.color.ends_with(", 80%, 55%)"));
        }
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut state = sanitize_seed(0);
        let a = xorshift32(&mut state);
        let b = xorshift32(&mut state);
        assert_ne!(a, 0);
        assert_ne!(a, b);
    }
}
