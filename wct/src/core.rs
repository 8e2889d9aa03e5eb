// src/core.rs
pub mod config;
pub mod counter;
pub mod extract;
pub mod output;
pub mod preprocess;
