//! Drifting point particles joined by fading lines.
//!
//! Particles move a fixed velocity per frame and bounce off the field edges by
//! flipping the offending velocity component. Bounces are not clamped, so a
//! particle may sit up to one step outside the field for a single frame.

use fastrand::Rng;

use crate::config::ParticleConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Diameter.
    pub size: f64,
    /// 0..1
    pub opacity: f64,
}

impl Particle {
    /// Advance one frame inside a `width` x `height` field.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }

    /// Fill alpha on the 0-255 scale.
    pub fn fill_alpha(&self) -> f64 {
        self.opacity * 255.0
    }

    pub fn distance(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A line to draw between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// Stroke alpha on the 0-255 scale.
    pub alpha: f64,
}

/// Stroke alpha for a pair `distance` apart, or `None` when too far to link.
pub fn link_alpha(distance: f64, config: &ParticleConfig) -> Option<f64> {
    (distance < config.link_distance)
        .then(|| (1.0 - distance / config.link_distance) * config.link_alpha)
}

fn uniform(rng: &mut Rng, lo: f64, hi: f64) -> f64 {
    lo + rng.f64() * (hi - lo)
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    config: ParticleConfig,
}

impl ParticleField {
    /// Scatter `config.count` particles uniformly over the field.
    pub fn new(config: ParticleConfig, width: f64, height: f64, rng: &mut Rng) -> Self {
        if config.count > ParticleConfig::LINK_SCAN_BUDGET {
            log::warn!(
                "{} particles: link scan is quadratic ({} distance checks per frame)",
                config.count,
                config.count * config.count
            );
        }
        let particles = (0..config.count)
            .map(|_| Particle {
                x: uniform(rng, 0.0, width),
                y: uniform(rng, 0.0, height),
                vx: uniform(rng, -config.max_speed, config.max_speed),
                vy: uniform(rng, -config.max_speed, config.max_speed),
                size: uniform(rng, config.size_range.0, config.size_range.1),
                opacity: uniform(rng, config.opacity_range.0, config.opacity_range.1),
            })
            .collect();
        Self {
            particles,
            width,
            height,
            config,
        }
    }

    pub fn from_particles(
        config: ParticleConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            particles,
            width,
            height,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    /// Change the field bounds. Particle positions are left alone.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Every ordered pair (self-pairs included) closer than the link distance.
    ///
    /// This is a full n² scan; fine for the stock 50 particles, not meant to scale.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.particles.iter().flat_map(move |a| {
            self.particles.iter().filter_map(move |b| {
                link_alpha(a.distance(b), &self.config).map(|alpha| Link {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    alpha,
                })
            })
        })
    }
}
