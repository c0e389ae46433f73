//! # hps-infra
//!
//! Infrastructure adapters for the HPS sandbox shell: filesystem
//! catalog and document store, bundled-asset materialization, HTTP
//! downloads, content resolution, and JSON persistence for settings and
//! viewer state.

pub mod assets;
pub mod content;
pub mod download;
pub mod fs;
pub mod settings;
pub mod viewer;
