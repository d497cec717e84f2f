//! Core library for the Paisa personal budgeting service.
//!
//! The `emi` module hosts the installment-loan engine: amortized payment
//! math, multi-criteria plan scoring, and recommendation selection. The
//! `budget` module owns the mutable budget state, the expense optimizer and
//! advisor, and the HTTP surface the api binary mounts.

pub mod budget;
pub mod config;
pub mod emi;
pub mod error;
pub mod telemetry;
