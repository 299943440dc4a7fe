//! gridsnek - grid snake for the terminal
//!
//! - `game`: rules, state and food placement, free of any I/O
//! - `score`: best-score persistence
//! - `input`: key and swipe decoding
//! - `render`: terminal drawing
//! - `app`: the fixed-interval loop tying them together

pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod score;
