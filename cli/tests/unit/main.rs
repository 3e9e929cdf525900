//! Unit tests for shortcut-hub
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod config_service;
mod dispatch_service;
mod mocks;
mod shortcut_crud_service;
