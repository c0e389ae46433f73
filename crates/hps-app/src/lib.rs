//! # hps-app
//!
//! Use cases and composition root for the HPS sandbox shell. Use cases
//! depend only on the port traits from `hps-core`; the binary wires in
//! concrete adapters through [`AppDeps`].

pub mod builder;
pub mod deps;
pub mod startup;
pub mod usecases;

pub use builder::{App, AppBuilder};
pub use deps::AppDeps;
pub use startup::StartupState;
