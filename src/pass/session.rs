//! Update-on-change pipeline.
//!
//! A [`Session`] owns the current configuration and pool. Every control
//! change rebuilds the pool from scratch and draws a fresh password; nothing
//! from the previous password is kept.

use rand::Rng;

use super::charset::{self, CharClass, CharacterPool, ClassConfig, CustomSymbols, Toggle};
use super::generate::{Generated, generate_password};
use super::strength::StrengthEstimator;
use crate::error::Result;
use crate::settings::{LengthBounds, Settings};

/// Pool and password produced by a configuration change.
#[derive(Debug)]
pub struct Update {
    pub pool: CharacterPool,
    pub generated: Generated,
}

/// Rebuild the pool for `config` and generate from it.
pub fn update<R, E>(config: &ClassConfig, length: usize, rng: &mut R, estimator: &E) -> Result<Update>
where
    R: Rng + ?Sized,
    E: StrengthEstimator + ?Sized,
{
    let pool = charset::build(config);
    tracing::debug!(pool_len = pool.len(), length, "pool rebuilt");
    let generated = generate_password(&pool, length, rng, estimator)?;
    Ok(Update { pool, generated })
}

pub struct Session<E, R> {
    config: ClassConfig,
    length: usize,
    bounds: LengthBounds,
    pool: CharacterPool,
    estimator: E,
    rng: R,
}

impl<E, R> Session<E, R> {
    pub fn config(&self) -> &ClassConfig {
        &self.config
    }

    pub fn pool(&self) -> &CharacterPool {
        &self.pool
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }
}

impl<E: StrengthEstimator, R: Rng> Session<E, R> {
    pub fn new(settings: &Settings, estimator: E, rng: R) -> Self {
        Self {
            pool: charset::build(&settings.classes),
            config: settings.classes.clone(),
            length: settings.pass_length,
            bounds: settings.bounds,
            estimator,
            rng,
        }
    }

    /// Replace the configuration, rebuild the pool and generate.
    pub fn on_config_change(&mut self, config: ClassConfig) -> Result<Generated> {
        self.config = config;
        self.rebuild()
    }

    /// Flip a class. A rejected toggle still regenerates.
    pub fn toggle(&mut self, class: CharClass) -> Result<(Toggle, Generated)> {
        let toggle = self.config.toggle(class);
        if toggle == Toggle::Rejected {
            tracing::debug!(class = class.name(), "last enabled class kept on");
        }
        Ok((toggle, self.rebuild()?))
    }

    pub fn set_custom_symbols(&mut self, text: &str) -> Result<Generated> {
        self.config.set_symbols(CustomSymbols::parse(text));
        self.rebuild()
    }

    pub fn reset_symbols(&mut self) -> Result<Generated> {
        self.config.set_symbols(CustomSymbols::default());
        self.rebuild()
    }

    /// Set an explicit length. Out-of-bounds values are an error and leave
    /// the current length untouched.
    pub fn set_length(&mut self, length: usize) -> Result<Generated> {
        self.length = self.bounds.check(length)?;
        self.refresh()
    }

    pub fn set_length_str(&mut self, text: &str) -> Result<Generated> {
        self.length = self.bounds.parse(text)?;
        self.refresh()
    }

    /// One step up; `None` when already at the maximum.
    pub fn increase_length(&mut self) -> Result<Option<Generated>> {
        if self.length >= self.bounds.max {
            return Ok(None);
        }
        self.length += 1;
        self.refresh().map(Some)
    }

    /// One step down; `None` when already at the minimum.
    pub fn decrease_length(&mut self) -> Result<Option<Generated>> {
        if self.length <= self.bounds.min {
            return Ok(None);
        }
        self.length -= 1;
        self.refresh().map(Some)
    }

    /// New password from the current pool. A length outside the bounds,
    /// e.g. from the initial settings, is an error.
    pub fn refresh(&mut self) -> Result<Generated> {
        self.bounds.check(self.length)?;
        generate_password(&self.pool, self.length, &mut self.rng, &self.estimator)
    }

    fn rebuild(&mut self) -> Result<Generated> {
        self.pool = charset::build(&self.config);
        tracing::debug!(pool_len = self.pool.len(), length = self.length, "pool rebuilt");
        self.refresh()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::{EstimateError, LengthError};
    use crate::pass::strength::{Score, Severity};
    use crate::Error;

    fn fixed(score: u8) -> impl Fn(&str) -> std::result::Result<Score, EstimateError> {
        move |_: &str| Score::new(score)
    }

    fn session(score: u8) -> Session<impl StrengthEstimator, StdRng> {
        Session::new(&Settings::default(), fixed(score), StdRng::seed_from_u64(42))
    }

    #[test]
    fn toggle_rebuilds_pool() {
        let mut s = session(3);
        assert_eq!(s.pool().len(), 24 + 24 + 9);

        let (toggle, generated) = s.toggle(CharClass::Numbers).unwrap();
        assert_eq!(toggle, Toggle::Applied);
        assert_eq!(s.pool().len(), 48);
        assert!(generated.password.chars().all(|c| !c.is_ascii_digit()));
        assert_eq!(generated.strength.unwrap().severity, Severity::Medium);
    }

    #[test]
    fn rejected_toggle_keeps_one_class() {
        let mut settings = Settings::default();
        settings.classes = ClassConfig::only(CharClass::Uppercase);
        let mut s = Session::new(&settings, fixed(1), StdRng::seed_from_u64(1));

        let (toggle, generated) = s.toggle(CharClass::Uppercase).unwrap();
        assert_eq!(toggle, Toggle::Rejected);
        assert_eq!(s.config().enabled_classes().count(), 1);
        assert!(generated.password.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn symbols_only_with_empty_field_is_empty_pool() {
        let mut s = session(4);
        let config = ClassConfig::only(CharClass::Symbols).with_symbols(CustomSymbols::parse(""));
        assert_eq!(s.on_config_change(config).unwrap_err(), Error::EmptyPool);
        assert!(s.pool().is_empty());
        assert_eq!(s.refresh().unwrap_err(), Error::EmptyPool);

        let generated = s.reset_symbols().unwrap();
        assert!(generated.password.chars().all(|c| charset::DEFAULT_SYMBOLS.contains(c)));
    }

    #[test]
    fn custom_symbols_feed_the_pool() {
        let mut s = session(2);
        s.on_config_change(ClassConfig::only(CharClass::Symbols)).unwrap();
        let generated = s.set_custom_symbols("$ $ %").unwrap();
        assert_eq!(s.pool().as_slice(), &['$', '%']);
        assert!(generated.password.chars().all(|c| c == '$' || c == '%'));
    }

    #[test]
    fn set_length_out_of_bounds_is_rejected() {
        let mut s = session(0);
        let err = s.set_length(51).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength(LengthError::OutOfRange { length: 51, min: 1, max: 50 })
        );
        assert_eq!(s.length(), 12);

        assert!(matches!(
            s.set_length_str("abc"),
            Err(Error::InvalidLength(LengthError::NotNumeric(_)))
        ));
        assert_eq!(s.set_length(20).unwrap().password.chars().count(), 20);
    }

    #[test]
    fn initial_length_outside_bounds_fails() {
        let settings = Settings { pass_length: 500, ..Settings::default() };
        let mut s = Session::new(&settings, fixed(2), StdRng::seed_from_u64(3));
        let expected = Error::InvalidLength(LengthError::OutOfRange { length: 500, min: 1, max: 50 });
        assert_eq!(s.refresh().unwrap_err(), expected);
        assert_eq!(s.toggle(CharClass::Numbers).unwrap_err(), expected);

        assert_eq!(s.set_length(30).unwrap().password.chars().count(), 30);
    }

    #[test]
    fn stepping_stops_at_bounds() {
        let mut s = session(0);
        s.set_length(50).unwrap();
        assert!(s.increase_length().unwrap().is_none());
        assert_eq!(s.length(), 50);
        assert_eq!(s.decrease_length().unwrap().unwrap().password.len(), 49);

        s.set_length(1).unwrap();
        assert!(s.decrease_length().unwrap().is_none());
        assert_eq!(s.increase_length().unwrap().unwrap().password.len(), 2);
    }
}
