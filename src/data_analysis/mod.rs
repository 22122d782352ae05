// src/data_analysis/mod.rs

pub mod gravity;
pub mod kinematics;

// src/data_analysis/mod.rs
