use crate::error::{Error, Result};

/// Maps `fraction` in `[0, 1]` onto `[min, max]`.
pub fn fraction_to_value(fraction: f32, min: f32, max: f32) -> f32 {
    (max - min) * fraction + min
}

/// Inverse of `fraction_to_value`. An empty span maps everything to 0.
pub fn value_to_fraction(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    (value - min) / span
}

/// Logical value range a slider selects from. Always non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    min: i32,
    max: i32,
}

impl Domain {
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min >= max {
            return Err(Error::EmptyDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn fraction_of(&self, value: f32) -> f32 {
        value_to_fraction(value, self.min as f32, self.max as f32)
    }

    pub fn value_at(&self, fraction: f32) -> f32 {
        fraction_to_value(fraction, self.min as f32, self.max as f32)
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min as f32, self.max as f32)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self { min: 0, max: 10000 }
    }
}
