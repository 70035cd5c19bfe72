// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio::model::TemplateKind;
use folio::ops::{update_field, PortfolioField};
use folio::render::{render_document, render_template};

mod fixtures;

// Benchmark identity (keep stable):
// - Group names in this file: `render.template`, `render.document`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `modern/small`, `creative/large`).
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.template");
    for case in [fixtures::Case::Small, fixtures::Case::Large] {
        for template in TemplateKind::ALL {
            let data = update_field(
                &fixtures::portfolio(case),
                PortfolioField::Template(template),
            );
            group.bench_function(format!("{}/{}", template.name(), case.id()), move |b| {
                b.iter(|| black_box(render_template(black_box(&data))).len())
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("render.document");
    for case in [fixtures::Case::Empty, fixtures::Case::Small, fixtures::Case::Large] {
        let data = fixtures::portfolio(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(render_document(black_box(&data))).len())
        });
    }
    group.finish();
}

criterion_group!(benches, benches_render);
criterion_main!(benches);
