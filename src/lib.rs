//! Password generator with unambiguous character sets and a strength meter.
//!
//! [`pass::build_pool`] turns a [`pass::ClassConfig`] into a pool,
//! [`pass::generate_password`] draws from it and scores the result through an
//! injected [`pass::StrengthEstimator`]. [`pass::Session`] wires both behind
//! the update-on-change operations a front end calls.

pub mod error;
pub mod logging;
pub mod pass;
pub mod settings;

pub use error::{Error, EstimateError, LengthError, Result};
pub use settings::Settings;
