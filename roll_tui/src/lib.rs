//! roll_tui - Interactive dice roller and character quick rolls

pub mod app;
pub mod ui;
