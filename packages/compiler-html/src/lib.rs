//! # Mailcraft HTML Compiler
//!
//! Turns an ordered block list and canvas settings into a standalone,
//! right-to-left HTML email: inline styles only, `@font-face` rules for the
//! registered Persian fonts, and conditional tables where Outlook needs them.
//!
//! Compilation never fails. Unknown icons, unknown patterns and unreadable
//! countdown targets render as neutral output.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use mailcraft_blocks::{Block, BlockType, GlobalSettings};
//! use mailcraft_compiler_html::{compile_to_html, CompileOptions};
//!
//! let blocks = vec![Block::new(BlockType::Header), Block::new(BlockType::Footer)];
//! let options = CompileOptions {
//!     now: Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
//!     ..CompileOptions::default()
//! };
//! let html = compile_to_html(&blocks, &GlobalSettings::default(), &options);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

mod compiler;
mod context;
pub mod countdown;
pub mod render;

pub use compiler::{compile, compile_to_html, CompileOptions};
pub use countdown::{parse_target, time_left, time_left_until, TimeLeft};
pub use render::{render_block, MSO_TABLE_CLOSE, MSO_TABLE_OPEN};
