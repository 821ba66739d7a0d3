//! # pitstop_core: Race Foundation Types
//!
//! ## Layer 1 (Foundation) Role
//!
//! pitstop_core is the bottom layer of the pit strategy simulator, providing:
//! - Tire compounds and their degradation curves (`types::compound`, `types::tire`)
//! - Race-level constants: lap count, base lap time, pit loss, fuel and noise (`types::race`)
//! - One-stop strategy candidates and compound pairings (`types::strategy`)
//! - Error types: `ParamError`, `StrategyError`, `CompoundError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pitstop_* crates:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pitstop_core::types::{Compound, RaceParams, Strategy1Stop, TireModelSet};
//!
//! let params = RaceParams::default();
//! assert!(params.validate().is_ok());
//!
//! let tires = TireModelSet::default();
//! let soft = tires.model(Compound::Soft);
//! assert!(soft.degradation(10) > soft.degradation(0));
//!
//! let strategy = Strategy1Stop::new(18, Compound::Soft, Compound::Medium);
//! assert_eq!(strategy.label(), "1-stop S->M @L18");
//! assert!(strategy.validate(params.laps).is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Compound`, `TireModel`, `TireModelSet`, `RaceParams`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::{
    Compound, CompoundError, CompoundPair, ParamError, RaceParams, Strategy1Stop, StrategyError,
    TireModel, TireModelSet,
};
