use serde::Deserialize;

/// Timing curves used by the tween engine and handed to the chart library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Easing {
    #[default]
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "easeOutQuad")]
    OutQuad,
    #[serde(rename = "easeOutCubic")]
    OutCubic,
    #[serde(rename = "easeOutExpo")]
    OutExpo,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve. Out-of-range input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }

    /// Name the chart library uses for the same curve.
    pub fn echarts_name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::OutQuad => "quadraticOut",
            Easing::OutCubic => "cubicOut",
            Easing::OutExpo => "exponentialOut",
        }
    }
}
