use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curvecast::config::PlotConfig;
use curvecast::history::HistoryRecord;
use curvecast::plot::HistoryPlotter;
use curvecast::render::{render_svg, render_text, RecordingPresenter};

fn synthetic_history(epochs: usize) -> HistoryRecord {
    let curve = |scale: f64| -> Vec<f64> {
        (0..epochs).map(|e| scale / (1.0 + e as f64)).collect()
    };
    let mut record = HistoryRecord::new();
    record.insert("loss", curve(1.0));
    record.insert("val_loss", curve(1.2));
    record.insert("accuracy", curve(0.5).into_iter().map(|v| 1.0 - v).collect());
    record.insert("val_accuracy", curve(0.6).into_iter().map(|v| 1.0 - v).collect());
    record
}

fn benchmark_plot_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_pass");
    for epochs in [10, 100, 1000] {
        let record = synthetic_history(epochs);
        group.bench_with_input(BenchmarkId::from_parameter(epochs), &record, |b, record| {
            b.iter(|| {
                let mut plotter =
                    HistoryPlotter::new(PlotConfig::default(), RecordingPresenter::new());
                black_box(plotter.plot(record).unwrap())
            });
        });
    }
    group.finish();
}

fn benchmark_renderers(c: &mut Criterion) {
    let record = synthetic_history(200);
    let mut plotter = HistoryPlotter::new(PlotConfig::default(), RecordingPresenter::new());
    plotter.plot(&record).unwrap();
    let chart = plotter.presenter().charts()[0].clone();

    c.bench_function("render_text", |b| {
        b.iter(|| black_box(render_text(&chart, 60, 15).unwrap()))
    });
    c.bench_function("render_svg", |b| {
        b.iter(|| black_box(render_svg(&chart, 800, 600).unwrap()))
    });
}

criterion_group!(benches, benchmark_plot_pass, benchmark_renderers);
criterion_main!(benches);
