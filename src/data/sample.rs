//! Synthetic day series for demo sheets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use crate::domain::DaySeries;
use crate::error::SheetError;

/// Draw `days` standard-normal values and shift them so the minimum is zero.
///
/// The result is non-negative and always contains at least one exact `0.0`.
pub fn generate_day_series<R: Rng + ?Sized>(days: usize, rng: &mut R) -> Result<DaySeries, SheetError> {
    let mut values: Vec<f64> = (0..days).map(|_| -> f64 { StandardNormal.sample(rng) }).collect();

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    if min.is_finite() {
        for v in values.iter_mut() {
            *v -= min;
        }
    }

    DaySeries::new(values)
}

/// Random source for synthetic data: seeded when reproducible output is wanted.
pub fn sample_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
