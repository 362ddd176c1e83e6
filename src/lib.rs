//! # curvecast - Training Curve Plotting
//!
//! curvecast draws the metric curves of a training run. Given a history
//! record (metric name to one value per epoch) it produces one chart per
//! training metric, overlaying the validation curve whenever a `val_`
//! counterpart was recorded.
//!
//! ## Quick Start
//!
//! ```rust
//! use curvecast::history;
//! use curvecast::config::PlotConfig;
//! use curvecast::plot::HistoryPlotter;
//! use curvecast::render::RecordingPresenter;
//!
//! let record = history! {
//!     "loss" => [0.92, 0.61, 0.44, 0.37],
//!     "val_loss" => [0.95, 0.70, 0.58, 0.55],
//!     "accuracy" => [0.61, 0.74, 0.81, 0.85],
//! };
//!
//! let config = PlotConfig::default().with_skip(1);
//! let mut plotter = HistoryPlotter::new(config, RecordingPresenter::new());
//! let charts = plotter.plot(&record).unwrap();
//! assert_eq!(charts, 2);
//! assert_eq!(plotter.presenter().charts()[0].title, "Training and validation loss");
//! ```
//!
//! ## Module Organization
//!
//! - [`chart`] - Chart model and the reusable canvas
//! - [`config`] - Plot settings
//! - [`error`] - Error types and result handling
//! - [`history`] - History records and the recorder that builds them
//! - [`plot`] - The per-metric plotting pass
//! - [`render`] - Terminal and SVG presenters
//! - [`utils`] - Every utility behind one import, plus the name registry

#[macro_use]
pub mod macros;

pub mod chart;
pub mod config;
pub mod error;
pub mod history;
pub mod plot;
pub mod render;
pub mod utils;

pub use error::{PlotError, Result};
pub use utils::{plot_history, summarize_history};

#[cfg(test)]
mod tests;
