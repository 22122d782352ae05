// src/data_output/mod.rs

pub mod table;

// src/data_output/mod.rs
