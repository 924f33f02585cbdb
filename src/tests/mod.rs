// @file: src/tests/mod.rs
// @description: Test suites, one per component.
// @author: LAS.

#[cfg(test)]
mod support;

pub mod matrix_tests;
