//! Core types for race modelling.
//!
//! This module provides:
//! - [`Compound`]: the closed set of tire compounds
//! - [`TireModel`] and [`TireModelSet`]: per-compound degradation curves
//! - [`RaceParams`]: race-level constants
//! - [`Strategy1Stop`] and [`CompoundPair`]: one-stop strategy candidates
//! - Error types for parameter and strategy validation

pub mod compound;
pub mod error;
pub mod race;
pub mod strategy;
pub mod tire;

pub use compound::Compound;
pub use error::{CompoundError, ParamError, StrategyError};
pub use race::RaceParams;
pub use strategy::{CompoundPair, Strategy1Stop};
pub use tire::{TireModel, TireModelSet};
