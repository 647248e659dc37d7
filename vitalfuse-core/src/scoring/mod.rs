//! Score Transforms Feeding the Wellness Filter
//!
//! ## Overview
//!
//! Two stateless transforms turn upstream signals into the 0-100 scale the
//! fusion filter consumes:
//!
//! - [`comfort`]: maps smoothed temperature/humidity to a comfort score
//! - [`risk`]: maps a classifier probability to an inverted risk score
//!
//! ## One Polarity Everywhere
//!
//! Every score in the engine reads the same way: **100 is the best state**
//! (calm voice, ideal room, full wellness) and 0 is the worst. The risk
//! normalizer performs the inversion at the boundary so no downstream
//! consumer ever has to remember which scale it is holding.

pub mod comfort;
pub mod risk;

pub use comfort::ComfortModel;
pub use risk::normalize_risk;
