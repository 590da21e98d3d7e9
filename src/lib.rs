// src/lib.rs

pub mod classifier;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod training;

pub use crate::classifier::{classify, classify_stream};
pub use crate::core::alphabet::Alphabet;
pub use crate::core::scorer::avg_transition_prob;
pub use crate::core::types::{Model, Score};
pub use crate::error::{GibberishError, Result};
pub use crate::training::{Calibration, Trainer};
