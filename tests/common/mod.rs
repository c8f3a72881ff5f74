//! Common test utilities for apk-deploy integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project, config home and fake Android SDK
//! - Fixtures: canned `adb devices` listings

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
