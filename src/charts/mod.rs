//! Charts module - static scatter chart rendering

mod renderer;

pub use renderer::{chart_path, render_scatter, ChartError};
