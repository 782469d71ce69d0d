// src/terrain/heightmap.rs

use serde::{Deserialize, Serialize};

use crate::terrain::error::{Result, TerrainError};

/// A rectangular grid of normalized height samples, indexed `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl HeightField {
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> Self {
        debug_assert!(width >= 2 && height >= 2, "height field must be at least 2x2");
        debug_assert_eq!(data.len(), width * height, "height field must be fully populated");
        Self { data, width, height }
    }

    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self::new(vec![value; width * height], width, height)
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::new(data, width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    pub fn samples(&self) -> &[f32] {
        &self.data
    }
}

/// Remaps a raw height sample before it is scaled by the height multiplier.
pub trait HeightCurve {
    fn evaluate(&self, t: f32) -> f32;
}

impl<F> HeightCurve for F
where
    F: Fn(f32) -> f32,
{
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Piecewise-linear curve through sorted keyframes, clamped at both ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyframeCurve {
    keys: Vec<Keyframe>,
}

impl KeyframeCurve {
    pub fn new(keys: Vec<Keyframe>) -> Result<Self> {
        let curve = Self { keys };
        curve.validate()?;
        Ok(curve)
    }

    pub fn linear() -> Self {
        Self {
            keys: vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)],
        }
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn validate(&self) -> Result<()> {
        if self.keys.is_empty() {
            return Err(TerrainError::InvalidCurve("curve has no keyframes".into()));
        }
        if self.keys.iter().any(|k| !k.time.is_finite() || !k.value.is_finite()) {
            return Err(TerrainError::InvalidCurve(
                "keyframe times and values must be finite".into(),
            ));
        }
        if self.keys.windows(2).any(|w| w[0].time >= w[1].time) {
            return Err(TerrainError::InvalidCurve(
                "keyframe times must be strictly increasing".into(),
            ));
        }
        Ok(())
    }
}

impl Default for KeyframeCurve {
    fn default() -> Self {
        Self::linear()
    }
}

impl HeightCurve for KeyframeCurve {
    fn evaluate(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return t,
        };
        if t.is_nan() || self.keys.len() == 1 {
            return first.value;
        }
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // first key with time > t; t is strictly inside the curve here
        let hi = self
            .keys
            .partition_point(|k| k.time <= t)
            .clamp(1, self.keys.len() - 1);
        let (a, b) = (self.keys[hi - 1], self.keys[hi]);
        let s = (t - a.time) / (b.time - a.time);
        a.value + (b.value - a.value) * s
    }
}
