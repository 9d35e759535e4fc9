//! Logic modules: the configuration-and-pricing engine.
//!
//! Everything here is pure: no I/O, no shared state, safe to call on every
//! render.
//!
//! # Modules
//!
//! - `compatibility` - which options fit the selected vehicle
//! - `pricing` - base + options aggregation under both perspectives
//! - `analysis` - dealer margin breakdown of a priced configuration

pub mod analysis;
pub mod compatibility;
pub mod pricing;
