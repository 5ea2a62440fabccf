// src/lib.rs

// Top-level modules (each has its own mod.rs or file):
pub mod error;
pub mod params;
pub mod database;
pub mod geometry;
pub mod parser;
pub mod writer;
