//! ckvscan library crate
//!
//! This crate provides both a CLI binary and a library API for programmatic use

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod skip_codes;
