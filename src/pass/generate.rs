//! Password generation.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use zeroize::Zeroizing;

use super::charset::CharacterPool;
use super::strength::{Strength, StrengthEstimator};
use crate::error::{EstimateError, LengthError, Result};

/// Generated password, wiped from memory on drop.
pub type Password = Zeroizing<String>;

/// A password together with its strength classification.
#[derive(Debug)]
pub struct Generated {
    pub password: Password,
    /// Estimator failures land here; the password is still valid.
    pub strength: std::result::Result<Strength, EstimateError>,
}

/// Thread-local generator, or a seeded one for reproducible output.
pub fn random_source(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

/// Draw `length` characters from `pool`, each index uniform and independent.
pub fn generate<R: Rng + ?Sized>(
    pool: &CharacterPool,
    length: usize,
    rng: &mut R,
) -> Result<Password> {
    let chars = pool.as_slice();
    if chars.is_empty() {
        return Err(crate::Error::EmptyPool);
    }
    if length == 0 {
        return Err(LengthError::Zero.into());
    }

    let mut password = Zeroizing::new(String::with_capacity(length * 4));
    for _ in 0..length {
        password.push(chars[rng.gen_range(0..chars.len())]);
    }
    Ok(password)
}

/// Generate and classify.
pub fn generate_password<R, E>(
    pool: &CharacterPool,
    length: usize,
    rng: &mut R,
    estimator: &E,
) -> Result<Generated>
where
    R: Rng + ?Sized,
    E: StrengthEstimator + ?Sized,
{
    let password = generate(pool, length, rng)?;
    let strength = estimator.estimate(&password).map(Strength::from);
    if let Err(e) = &strength {
        tracing::warn!(error = %e, "strength estimate unavailable");
    }
    Ok(Generated { password, strength })
}
