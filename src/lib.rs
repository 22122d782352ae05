// src/lib.rs - Library interface for internal module access

pub mod bodies;
pub mod constants;
pub mod data_analysis;
pub mod data_output;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

// Expose crate version from the package manifest.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
