// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Point, Rect, Size};
use understory_connector::{ConnectorParams, build_path};
use understory_placement::{Anchor, AnchorSpec, MenuStyle, ScreenContext, solve};
use understory_popover::{MenuModel, PopoverConfig, PopoverSession};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn phone() -> ScreenContext {
    ScreenContext::new(Size::new(390.0, 844.0)).with_safe_area(Insets::new(0.0, 47.0, 0.0, 34.0))
}

fn gen_anchors(count: usize, screen: &ScreenContext) -> Vec<AnchorSpec> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.next_f64() * (screen.width() - 44.0);
        let y = rng.next_f64() * (screen.height() - 44.0);
        out.push(AnchorSpec::new(Anchor::View(Rect::new(x, y, x + 44.0, y + 44.0))));
    }
    out
}

fn bench_solve(c: &mut Criterion) {
    let screen = phone();
    let anchors = gen_anchors(1_000, &screen);
    let mut group = c.benchmark_group("solve");
    for rows in [3_usize, 40] {
        let style = MenuStyle {
            menu_width: 200.0,
            row_height: 44.0,
            row_count: rows,
            margin: 8.0,
            ..MenuStyle::default()
        };
        group.bench_function(format!("rows_{rows}"), |b| {
            b.iter(|| {
                for spec in &anchors {
                    let _ = black_box(solve(black_box(spec), &screen, &style));
                }
            });
        });
    }
    group.finish();
}

fn bench_build_path(c: &mut Criterion) {
    let screen = phone();
    let style = MenuStyle {
        menu_width: 200.0,
        row_height: 44.0,
        row_count: 6,
        margin: 8.0,
        ..MenuStyle::default()
    };
    let spec = AnchorSpec::new(Anchor::Touch(Point::new(120.0, 200.0)));
    let Ok(placement) = solve(&spec, &screen, &style) else {
        return;
    };
    let params = ConnectorParams::from_placement(&placement, &style);
    c.bench_function("build_path", |b| {
        b.iter(|| black_box(build_path(black_box(&params))));
    });
    let path = build_path(&params);
    c.bench_function("to_bez_path", |b| {
        b.iter(|| black_box(path.to_bez_path(black_box(0.1))));
    });
}

fn bench_session(c: &mut Criterion) {
    let screen = phone();
    let anchors = gen_anchors(64, &screen);
    let config = PopoverConfig {
        menu_width: 200.0,
        row_height: 44.0,
        margin: 8.0,
        ..PopoverConfig::default()
    };
    c.bench_function("session_show_and_tap", |b| {
        b.iter_batched(
            || anchors.clone(),
            |anchors| {
                for spec in anchors {
                    let model: MenuModel = MenuModel::from_titles(["Copy", "Paste", "Share"]);
                    if let Ok(mut session) = PopoverSession::show(spec, model, config, &screen) {
                        let frame = session.geometry().placement.frame;
                        black_box(session.tap(frame.center()));
                    }
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve, bench_build_path, bench_session);
criterion_main!(benches);
