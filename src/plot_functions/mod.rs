// src/plot_functions/mod.rs

pub mod plot_tickertape;

// src/plot_functions/mod.rs
