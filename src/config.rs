//! Literal page configuration.
//!
//! `Default` for every struct here reproduces the stock page. A page may ship a
//! `<script type="application/json" id="fx-config">` block to override any field;
//! missing fields keep their defaults.

use serde::Deserialize;

use crate::easing::Easing;
use crate::error::UiError;

/// Element ids the page is expected to carry.
pub mod ids {
    pub const NAVBAR: &str = "navbar";
    pub const MOBILE_MENU_BTN: &str = "mobile-menu-btn";
    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const SKILLS_CHART: &str = "skills-chart";
    pub const PARTICLE_CONTAINER: &str = "particle-container";
    pub const HERO_TITLE: &str = "hero-title";
    pub const FX_CONFIG: &str = "fx-config";
}

/// Class names read from or written to the page.
pub mod classes {
    pub const CARD: &str = "card-hover";
    pub const SKILL_ITEM: &str = "skill-item";
    pub const BADGE: &str = "achievement-badge";
    pub const ELEVATED: &str = "shadow-lg";
    pub const HIDDEN: &str = "hidden";
    pub const REVEALED: &str = "animate-fade-in";
    pub const BOUNCE: &str = "animate-bounce";
    pub const TYPING_CURSOR: &str = "typing-effect";
    pub const RIPPLE: &str = "ripple-overlay absolute inset-0 bg-blue-100 rounded-lg opacity-0";
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub nav: NavConfig,
    pub entrance: EntranceConfig,
    pub chart: ChartConfig,
    pub particles: ParticleConfig,
    pub typing: TypingConfig,
    pub reveal: RevealConfig,
    pub ripple: RippleConfig,
}

impl PortfolioConfig {
    /// Parse a JSON override block on top of the defaults.
    pub fn from_json(src: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(src)?)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset (px) past which the navbar is drawn elevated.
    pub elevate_after: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { elevate_after: 100.0 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    pub card_offset_px: f64,
    pub card_duration_ms: f64,
    pub card_stagger_ms: f64,
    pub card_easing: Easing,
    pub hover_scale: f64,
    pub hover_duration_ms: f64,
    pub hover_easing: Easing,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            card_offset_px: 50.0,
            card_duration_ms: 800.0,
            card_stagger_ms: 200.0,
            card_easing: Easing::OutExpo,
            hover_scale: 1.02,
            hover_duration_ms: 300.0,
            hover_easing: Easing::OutQuad,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub animation_ms: u32,
    pub animation_easing: Easing,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            animation_ms: 2000,
            animation_easing: Easing::OutCubic,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    /// Each velocity component is drawn from `[-max_speed, max_speed]`.
    pub max_speed: f64,
    pub size_range: (f64, f64),
    pub opacity_range: (f64, f64),
    /// Pairs closer than this are joined by a line.
    pub link_distance: f64,
    /// Stroke alpha (0-255 scale) of a zero-length link.
    pub link_alpha: f64,
    pub link_width: f64,
}

impl ParticleConfig {
    /// Above this count the pairwise link scan gets noticeably expensive.
    pub const LINK_SCAN_BUDGET: usize = 150;
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            max_speed: 0.5,
            size_range: (2.0, 6.0),
            opacity_range: (0.1, 0.3),
            link_distance: 100.0,
            link_alpha: 50.0,
            link_width: 0.5,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u32,
    pub char_interval_ms: u32,
    pub cursor_linger_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            char_interval_ms: 150,
            cursor_linger_ms: 2000,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that counts as "entered".
    pub threshold: f64,
    /// The observed viewport is shrunk by this much at the bottom.
    pub bottom_inset_px: u32,
    pub badge_stagger_ms: u32,
}

impl RevealConfig {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_inset_px)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_inset_px: 50,
            badge_stagger_ms: 500,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub duration_ms: f64,
    pub easing: Easing,
    pub opacity: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            duration_ms: 600.0,
            easing: Easing::OutQuad,
            opacity: vec![0.0, 0.3, 0.0],
            scale: vec![0.8, 1.2],
        }
    }
}
