//! Utility Module
//! Author: kartik4091
//!
//! Byte-pattern helpers shared by the passes, and logging setup for the
//! command-line tool.

pub mod logging;
pub mod pattern_utils;

pub use self::{
    logging::{init_logging, LogLevel},
    pattern_utils::{count_pattern, find_pattern_positions, replace_pattern},
};
