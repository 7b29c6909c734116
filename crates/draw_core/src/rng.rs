//! Uniform `[0, 1)` random sources feeding the drawer.

use rand::{rngs::StdRng, Rng, SeedableRng};

pub trait UnitRandom: Send {
    /// Next sample, uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<T: UnitRandom + ?Sized> UnitRandom for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// `StdRng`-backed source, seeded from the OS or from a fixed seed.
#[derive(Debug, Clone)]
pub struct StdUnitRandom {
    rng: StdRng,
}

impl StdUnitRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl UnitRandom for StdUnitRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Maps `unit` onto a slot index in `[0, slots)`.
///
/// `slots` must be positive. The result is clamped to the last slot since
/// `unit * slots` may round up to `slots` for very wide ranges.
pub fn scale_unit(unit: f64, slots: i128) -> i128 {
    let scaled = (unit * slots as f64).floor() as i128;
    scaled.clamp(0, slots - 1)
}

/// Replays a fixed list of samples, cycling when exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedUnits {
    values: Vec<f64>,
    index: usize,
}

#[cfg(test)]
impl ScriptedUnits {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, index: 0 }
    }
}

#[cfg(test)]
impl UnitRandom for ScriptedUnits {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
