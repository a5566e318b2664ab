//! Password pool building, generation and strength classification.

pub mod charset;
mod generate;
mod session;
pub mod strength;

pub use charset::{CharClass, CharacterPool, ClassConfig, CustomSymbols, Toggle, build as build_pool};
pub use generate::{Generated, Password, generate, generate_password, random_source};
pub use session::{Session, Update, update};
pub use strength::{Score, Severity, Strength, StrengthEstimator, Zxcvbn};
