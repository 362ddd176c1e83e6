//! Plot the curves of a short simulated training run in the terminal.
//!
//! Run with `RUST_LOG=debug` to see what the plotter does.

use curvecast::history::HistoryRecorder;
use curvecast::{plot_history, summarize_history};

fn main() -> curvecast::Result<()> {
    env_logger::init();

    let mut recorder = HistoryRecorder::new();
    for epoch in 0..20 {
        let t = epoch as f64;
        let loss = 1.2 * (-0.15 * t).exp() + 0.1;
        let val_loss = loss + 0.05 + 0.004 * t;
        recorder.on_epoch_end([
            ("loss", loss),
            ("val_loss", val_loss),
            ("accuracy", 1.0 - 0.8 * loss),
            ("val_accuracy", 1.0 - 0.8 * val_loss),
        ]);
    }
    let history = recorder.finish();

    println!("{}", summarize_history(&history));

    // The first epochs dominate the scale, leave them out
    plot_history(&history, 2)?;
    Ok(())
}
