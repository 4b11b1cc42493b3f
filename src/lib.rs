//! maintainer-map: map subsystem ownership and git activity
//!
//! Parses a MAINTAINERS-style manifest into ownership records, scores each
//! record by the commits touching its files over a time window, and renders
//! the result as a Freeplane mind map.

pub mod activity;
pub mod cli;
pub mod config;
pub mod domain;
pub mod manifest;
pub mod render;
pub mod utils;
