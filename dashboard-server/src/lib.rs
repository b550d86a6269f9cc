//! Live transit dashboard server.
//!
//! Computes the three panels of a wall-mounted dashboard: an analog/digital
//! clock, the next few bus departures with countdowns, and a three-day
//! weather summary fetched from a public forecast API. The results are
//! served as a JSON snapshot for an external display shell to render.

pub mod clock;
pub mod departures;
pub mod domain;
pub mod scheduler;
pub mod startup;
pub mod weather;
pub mod web;
