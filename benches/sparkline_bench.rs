use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use membar::glyph::StatusGlyph;
use membar::sparkline::algorithm::layout;
use membar::sparkline::node::PlotRect;
use membar::system::history::{CAPACITY, RollingHistory};
use membar::system::snapshot::PressureLevel;
use membar::ui::status_glyph::{self, GlyphStyle};
use membar::ui::theme::Theme;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use std::hint::black_box;

fn make_history(n: usize, phase: f64) -> RollingHistory {
    let mut history = RollingHistory::new();
    for i in 0..n {
        history.push(50.0 + 45.0 * ((i as f64 + phase) / 3.0).sin());
    }
    history
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparkline_layout_1_15_30");
    let bounds = PlotRect::new(0.0, 0.0, 56.0, 8.0);
    for n in [1usize, 15, CAPACITY] {
        let values = make_history(n, 0.0).to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| black_box(layout(black_box(values), &bounds, CAPACITY)));
        });
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let memory = make_history(CAPACITY, 0.0);
    let cpu = make_history(CAPACITY, 1.5);
    let bounds = PlotRect::new(0.0, 0.0, 58.0, 8.0);
    c.bench_function("status_glyph_compose", |b| {
        b.iter(|| {
            black_box(StatusGlyph::compose(
                &memory,
                &cpu,
                PressureLevel::Warning,
                &bounds,
                2.0,
            ))
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let memory = make_history(CAPACITY, 0.0);
    let cpu = make_history(CAPACITY, 1.5);
    let theme = Theme::dark();
    let style = GlyphStyle {
        gap: 1,
        fill_opacity: 0.35,
    };
    let backend = TestBackend::new(29, 2);
    let mut terminal = Terminal::new(backend).expect("test backend");

    c.bench_function("status_glyph_render", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| {
                    status_glyph::render(
                        frame,
                        Rect::new(0, 0, 29, 2),
                        &memory,
                        &cpu,
                        PressureLevel::Normal,
                        &style,
                        &theme,
                    );
                })
                .expect("draw");
        });
    });
}

criterion_group!(benches, bench_layout, bench_compose, bench_render);
criterion_main!(benches);
