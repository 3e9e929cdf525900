//! shortcut-hub library — exposes modules for the binary and integration tests.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod api;
pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;
