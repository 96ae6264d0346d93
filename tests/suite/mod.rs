//! Integration test suite modules.

mod config;
mod flow;
mod strip;
