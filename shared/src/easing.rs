use serde::{Serialize, Deserialize};

/// Progress curve mapping `t ∈ [0, 1]` to `[0, 1]`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    OutCubic,
    /// 1 - (1-t)^4, a long slow finish.
    #[default]
    OutQuart,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => clamp_unit(t),
            Self::OutCubic => ease_out_cubic(t),
            Self::OutQuart => ease_out_quart(t),
        }
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - clamp_unit(t)).powi(3)
}

pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - clamp_unit(t)).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::OutCubic, Easing::OutQuart] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
    }

    #[test]
    fn test_decelerates() {
        // first tenth of the time covers more ground than the last tenth
        let early = ease_out_quart(0.1) - ease_out_quart(0.0);
        let late = ease_out_quart(1.0) - ease_out_quart(0.9);
        assert!(early > late * 10.0);
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0.0;
        for i in 0..=1000 {
            let v = Easing::OutCubic.apply(i as f64 / 1000.0);
            assert!(v >= last);
            last = v;
        }
    }
}
