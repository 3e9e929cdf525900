//! Integration tests for shortcut-hub
//!
//! These tests spawn real processes, touch temp files, and drive the binary
//! end to end. They are slower and should be run separately from unit tests.

mod cli_tests;
mod launcher;
