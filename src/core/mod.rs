// @file: src/core/mod.rs
// @description: Exports domain logic and data structures.
// @author: LAS.

pub mod errors;
pub mod interfaces;
pub mod matrix;
pub mod models;
pub mod normalizer;
pub mod query;
