//! Birthday greeting page.
//!
//! A Dioxus desktop application showing a tilted, endlessly scrolling strip of
//! greeting cards over floating sparkles, with a looping music player that
//! switches track when a card is clicked.

pub mod components;
pub mod player;
pub mod timers;

/// Page styles embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");
