//! Terminal output for the `apk-deploy` binary.

pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod sink;
pub mod terminal;
pub mod theme;
