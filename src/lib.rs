//! critique - an AI code review pad
//!
//! A dual-layer code editor core: the raw text drives a debounced,
//! generation-guarded syntax highlighting pipeline, and on demand the
//! code is submitted to a remote review endpoint.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod remote;
pub mod runtime;
pub mod syntax;
pub mod trace;
pub mod update;
