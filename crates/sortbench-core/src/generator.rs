//! Pseudo-random value generators.
//!
//! A benchmark consumes values through [`ValueGenerator`]; every
//! `FnMut() -> T` closure qualifies. The bundled generators draw from an
//! [`Engine`] produced by [`seeded_engine`]. Engines are seeded from OS
//! entropy unless a fixed seed is requested, so two benchmark runs never
//! share a seed by accident.

use std::fmt::Debug;

use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, StandardUniform, Uniform};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generator construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("invalid range: min {min} must not exceed max {max}, and both must be finite")]
    InvalidRange { min: String, max: String },
}

/// Produces one value per call.
pub trait ValueGenerator<T> {
    /// Produces the next value.
    fn generate(&mut self) -> T;

    /// Produces `len` values, one call per element, in index order.
    fn generate_vec(&mut self, len: usize) -> Vec<T> {
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            values.push(self.generate());
        }
        values
    }

    /// Views the generator as an endless iterator.
    fn iter(&mut self) -> impl Iterator<Item = T> + '_
    where
        Self: Sized,
    {
        std::iter::repeat_with(move || self.generate())
    }
}

impl<T, F> ValueGenerator<T> for F
where
    F: FnMut() -> T,
{
    fn generate(&mut self) -> T {
        self()
    }
}

/// How an engine obtains its seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedStrategy {
    /// Fresh operating-system entropy for every engine.
    #[default]
    Entropy,
    /// A fixed seed, for reproducible runs.
    Fixed(u64),
}

impl From<Option<u64>> for SeedStrategy {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(SeedStrategy::Entropy, SeedStrategy::Fixed)
    }
}

/// Pseudo-random engine family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// `rand`'s standard generator.
    #[default]
    Std,
    /// ChaCha with 8 rounds.
    #[serde(rename = "chacha8")]
    ChaCha8,
}

/// A seeded pseudo-random engine.
#[derive(Debug, Clone)]
pub enum Engine {
    Std(StdRng),
    ChaCha8(ChaCha8Rng),
}

/// Creates an engine of the given family, seeded per `seed`.
///
/// # Example
///
/// ```
/// use rand::RngCore;
/// use sortbench_core::{seeded_engine, EngineKind, SeedStrategy};
///
/// let mut a = seeded_engine(EngineKind::ChaCha8, SeedStrategy::Fixed(7));
/// let mut b = seeded_engine(EngineKind::ChaCha8, SeedStrategy::Fixed(7));
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
pub fn seeded_engine(kind: EngineKind, seed: SeedStrategy) -> Engine {
    match (kind, seed) {
        (EngineKind::Std, SeedStrategy::Entropy) => Engine::Std(StdRng::from_os_rng()),
        (EngineKind::Std, SeedStrategy::Fixed(seed)) => Engine::Std(StdRng::seed_from_u64(seed)),
        (EngineKind::ChaCha8, SeedStrategy::Entropy) => {
            Engine::ChaCha8(ChaCha8Rng::from_os_rng())
        }
        (EngineKind::ChaCha8, SeedStrategy::Fixed(seed)) => {
            Engine::ChaCha8(ChaCha8Rng::seed_from_u64(seed))
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        seeded_engine(EngineKind::default(), SeedStrategy::Entropy)
    }
}

impl RngCore for Engine {
    fn next_u32(&mut self) -> u32 {
        match self {
            Engine::Std(rng) => rng.next_u32(),
            Engine::ChaCha8(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Engine::Std(rng) => rng.next_u64(),
            Engine::ChaCha8(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            Engine::Std(rng) => rng.fill_bytes(dst),
            Engine::ChaCha8(rng) => rng.fill_bytes(dst),
        }
    }
}

/// Draws values from `rand`'s standard distribution for `T`.
///
/// Integers cover their full range; floats fall in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct UniformGenerator<T, R = Engine> {
    rng: R,
    _value: std::marker::PhantomData<fn() -> T>,
}

impl<T, R: RngCore> UniformGenerator<T, R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            _value: std::marker::PhantomData,
        }
    }
}

impl<T> UniformGenerator<T, Engine> {
    /// Creates a generator on a fresh entropy-seeded standard engine.
    pub fn from_entropy() -> Self {
        Self::new(Engine::default())
    }
}

impl<T> Default for UniformGenerator<T, Engine> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<T, R> ValueGenerator<T> for UniformGenerator<T, R>
where
    R: RngCore,
    StandardUniform: Distribution<T>,
{
    fn generate(&mut self) -> T {
        StandardUniform.sample(&mut self.rng)
    }
}

/// Draws values uniformly from the closed interval `[min, max]`.
///
/// # Example
///
/// ```
/// use sortbench_core::{seeded_engine, EngineKind, RangeGenerator, SeedStrategy, ValueGenerator};
///
/// let engine = seeded_engine(EngineKind::Std, SeedStrategy::Fixed(1));
/// let mut dice = RangeGenerator::new(1_u8, 6, engine).unwrap();
/// assert!(dice.iter().take(100).all(|v| (1..=6).contains(&v)));
/// ```
pub struct RangeGenerator<T: SampleUniform, R = Engine> {
    rng: R,
    distribution: Uniform<T>,
    min: T,
    max: T,
}

impl<T, R> RangeGenerator<T, R>
where
    T: SampleUniform + Clone + Debug,
    R: RngCore,
{
    /// Creates a generator for `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidRange`] if `min > max` or a bound is
    /// not finite.
    pub fn new(min: T, max: T, rng: R) -> Result<Self, GeneratorError> {
        let distribution =
            Uniform::new_inclusive(min.clone(), max.clone()).map_err(|_| {
                GeneratorError::InvalidRange {
                    min: format!("{:?}", min),
                    max: format!("{:?}", max),
                }
            })?;
        Ok(Self {
            rng,
            distribution,
            min,
            max,
        })
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }
}

impl<T: SampleUniform + Debug, R> Debug for RangeGenerator<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeGenerator")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

impl<T, R> ValueGenerator<T> for RangeGenerator<T, R>
where
    T: SampleUniform,
    R: RngCore,
{
    fn generate(&mut self) -> T {
        self.distribution.sample(&mut self.rng)
    }
}

/// A range-bounded generating function, taking its bounds by value or by
/// reference.
#[derive(Debug)]
pub enum RangeFn<T> {
    ByValue(fn(T, T) -> T),
    ByRef(fn(&T, &T) -> T),
}

impl<T> Clone for RangeFn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RangeFn<T> {}

/// Calls a plain generating function with fixed bounds.
///
/// ```
/// use sortbench_core::{FnGenerator, RangeFn, ValueGenerator};
///
/// fn midpoint(min: &i32, max: &i32) -> i32 {
///     min + (max - min) / 2
/// }
///
/// let mut gen = FnGenerator::new(RangeFn::ByRef(midpoint), 10, 20);
/// assert_eq!(gen.generate(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct FnGenerator<T> {
    func: RangeFn<T>,
    min: T,
    max: T,
}

impl<T> FnGenerator<T> {
    pub fn new(func: RangeFn<T>, min: T, max: T) -> Self {
        Self { func, min, max }
    }
}

impl<T: Clone> ValueGenerator<T> for FnGenerator<T> {
    fn generate(&mut self) -> T {
        match self.func {
            RangeFn::ByValue(f) => f(self.min.clone(), self.max.clone()),
            RangeFn::ByRef(f) => f(&self.min, &self.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_seed_is_reproducible() {
        for kind in [EngineKind::Std, EngineKind::ChaCha8] {
            let mut a = UniformGenerator::<u64>::new(seeded_engine(kind, SeedStrategy::Fixed(42)));
            let mut b = UniformGenerator::<u64>::new(seeded_engine(kind, SeedStrategy::Fixed(42)));
            assert_eq!(a.generate_vec(16), b.generate_vec(16));
        }
    }

    #[test]
    fn test_entropy_seeds_differ() {
        let mut a = UniformGenerator::<u64>::from_entropy();
        let mut b = UniformGenerator::<u64>::from_entropy();
        assert_ne!(a.generate_vec(4), b.generate_vec(4));
    }

    #[test]
    fn test_seed_strategy_from_option() {
        assert_eq!(SeedStrategy::from(None), SeedStrategy::Entropy);
        assert_eq!(SeedStrategy::from(Some(9)), SeedStrategy::Fixed(9));
    }

    #[test]
    fn test_uniform_floats_stay_in_unit_interval() {
        let mut gen = UniformGenerator::<f64>::new(seeded_engine(EngineKind::Std, SeedStrategy::Fixed(3)));
        assert!(gen.iter().take(1000).all(|v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = RangeGenerator::new(10_i32, 1, Engine::default()).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::InvalidRange {
                min: "10".to_string(),
                max: "1".to_string()
            }
        );
    }

    #[test]
    fn test_range_rejects_infinite_bounds() {
        assert!(RangeGenerator::new(0.0_f64, f64::INFINITY, Engine::default()).is_err());
    }

    #[test]
    fn test_degenerate_range_yields_its_only_value() {
        let mut gen = RangeGenerator::new(5_i16, 5, Engine::default()).unwrap();
        assert_eq!(gen.generate_vec(10), vec![5; 10]);
        assert_eq!(*gen.min(), 5);
        assert_eq!(*gen.max(), 5);
    }

    #[test]
    fn test_fn_generator_by_value() {
        fn upper(_: u32, max: u32) -> u32 {
            max
        }
        let mut gen = FnGenerator::new(RangeFn::ByValue(upper), 1, 99);
        assert_eq!(gen.generate(), 99);
    }

    #[test]
    fn test_closure_is_a_generator() {
        let mut next = 0;
        let mut counting = || {
            next += 1;
            next
        };
        assert_eq!(counting.generate_vec(3), vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_range_values_within_bounds(a in -1000i64..1000, b in -1000i64..1000, seed in any::<u64>()) {
            let (min, max) = if a <= b { (a, b) } else { (b, a) };
            let engine = seeded_engine(EngineKind::ChaCha8, SeedStrategy::Fixed(seed));
            let mut gen = RangeGenerator::new(min, max, engine).unwrap();
            for value in gen.generate_vec(64) {
                prop_assert!(value >= min && value <= max);
            }
        }
    }
}
