//! GUI module - Native chart windows

mod app;

pub use app::{show_blocking, FigureWindow, WINDOW_SIZE};
