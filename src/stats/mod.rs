//! Stats module - ordinary least squares fitting

mod fitter;

pub use fitter::{fit_line, LinearFit};
