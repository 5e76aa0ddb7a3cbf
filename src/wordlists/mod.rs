//! Word list loading
//!
//! The file format is one word per line. Loading stays dumb on purpose: it hands
//! raw strings to the core so validation errors surface there instead of being
//! silently skipped here.

pub mod loader;
