//! Flight itinerary planner.
//!
//! Answers: "Which combinations of flights take me from A to B (and back),
//! carrying my bags, with layovers I can actually make?"
//!
//! A schedule is read by the [`loader`], searched by the [`planner`] and
//! rendered by [`output`].

pub mod domain;
pub mod loader;
pub mod output;
pub mod planner;
