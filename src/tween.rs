//! Keyframe tweens over a small set of element properties.
//!
//! A [`Tween`] describes what to animate; [`Tween::resolve`] fixes its start
//! values against an element's current [`Pose`] and returns a [`Motion`] that can
//! be sampled at any elapsed time.

use crate::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    /// Vertical offset in px.
    TranslateY,
    Scale,
}

/// Current value of every animatable property of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }
}

impl Pose {
    pub fn get(&self, property: Property) -> f64 {
        match property {
            Property::Opacity => self.opacity,
            Property::TranslateY => self.translate_y,
            Property::Scale => self.scale,
        }
    }

    pub fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::TranslateY => self.translate_y = value,
            Property::Scale => self.scale = value,
        }
    }

    /// CSS `transform` for the positional part of the pose.
    pub fn transform(&self) -> String {
        format!("translateY({}px) scale({})", self.translate_y, self.scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Keyframes {
    Values(Vec<f64>),
    To(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    property: Property,
    keyframes: Keyframes,
}

impl Track {
    /// Explicit keyframes, evenly spaced over the duration.
    pub fn values(property: Property, values: &[f64]) -> Self {
        Self {
            property,
            keyframes: Keyframes::Values(values.to_vec()),
        }
    }

    /// Animate from wherever the property currently is to `target`.
    pub fn to(property: Property, target: f64) -> Self {
        Self {
            property,
            keyframes: Keyframes::To(target),
        }
    }

    pub fn property(&self) -> Property {
        self.property
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    tracks: Vec<Track>,
    duration_ms: f64,
    delay_ms: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            tracks: Vec::new(),
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.tracks.iter().map(Track::property)
    }

    /// Fix `to` tracks against the element's current values.
    pub fn resolve(&self, from: &Pose) -> Motion {
        let tracks = self
            .tracks
            .iter()
            .map(|t| {
                let keys = match &t.keyframes {
                    Keyframes::Values(v) if !v.is_empty() => v.clone(),
                    Keyframes::Values(_) => vec![from.get(t.property)],
                    Keyframes::To(target) => vec![from.get(t.property), *target],
                };
                (t.property, keys)
            })
            .collect();
        Motion {
            tracks,
            duration_ms: self.duration_ms,
            delay_ms: self.delay_ms,
            easing: self.easing,
        }
    }
}

/// A tween with concrete keyframes, ready to be sampled.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    tracks: Vec<(Property, Vec<f64>)>,
    duration_ms: f64,
    delay_ms: f64,
    easing: Easing,
}

impl Motion {
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.tracks.iter().map(|(p, _)| *p)
    }

    pub fn touches(&self, property: Property) -> bool {
        self.properties().any(|p| p == property)
    }

    /// Write every track's value at `elapsed_ms` into `pose`. Returns `true` once
    /// the tween has run its full course.
    pub fn sample_into(&self, elapsed_ms: f64, pose: &mut Pose) -> bool {
        let local = elapsed_ms - self.delay_ms;
        let progress = if local <= 0.0 {
            0.0
        } else if self.duration_ms <= 0.0 {
            1.0
        } else {
            (local / self.duration_ms).min(1.0)
        };
        for (property, keys) in &self.tracks {
            pose.set(*property, sample_keyframes(keys, progress, self.easing));
        }
        local >= self.duration_ms
    }
}

/// Value of evenly spaced keyframes at linear progress `t`; each segment is eased
/// on its own.
pub fn sample_keyframes(keys: &[f64], t: f64, easing: Easing) -> f64 {
    match keys {
        [] => 0.0,
        [only] => *only,
        [first, ..] if t <= 0.0 => *first,
        [.., last] if t >= 1.0 => *last,
        _ => {
            let segments = (keys.len() - 1) as f64;
            let scaled = t.clamp(0.0, 1.0) * segments;
            let index = (scaled.floor() as usize).min(keys.len() - 2);
            let local = scaled - index as f64;
            let (a, b) = (keys[index], keys[index + 1]);
            a + (b - a) * easing.apply(local)
        }
    }
}

/// Start offset of the `index`-th element in a staggered batch.
pub fn stagger(index: usize, step_ms: f64) -> f64 {
    index as f64 * step_ms
}
