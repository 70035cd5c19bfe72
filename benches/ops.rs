// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio::model::{EntryIdSource, SkillLevel};
use folio::ops::{
    commit_draft, patch_entry, remove_entry, update_field, PortfolioField, SkillDraft,
};

mod fixtures;

// Benchmark identity (keep stable):
// - Group names in this file: `ops.update_field`, `ops.collection`
// - Case IDs must remain stable across refactors (`replace_skills`,
//   `commit_skill`, `remove_by_id`, `patch_by_id`).
fn benches_ops(c: &mut Criterion) {
    let data = fixtures::portfolio(fixtures::Case::Large);

    let mut group = c.benchmark_group("ops.update_field");
    {
        let data = data.clone();
        group.bench_function("replace_skills", move |b| {
            b.iter(|| {
                let skills = data.skills().to_vec();
                black_box(update_field(&data, PortfolioField::Skills(black_box(skills))))
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("ops.collection");
    {
        let data = data.clone();
        group.bench_function("commit_skill", move |b| {
            let mut ids = EntryIdSource::new();
            let draft = SkillDraft { name: "Kubernetes".to_owned(), ..SkillDraft::default() };
            b.iter(|| {
                black_box(commit_draft(&draft, data.skills(), &mut ids)).map(|skills| skills.len())
            })
        });
    }
    {
        let data = data.clone();
        let target = data.skills()[data.skills().len() / 2].id().clone();
        group.bench_function("remove_by_id", move |b| {
            b.iter(|| black_box(remove_entry(data.skills(), black_box(&target))).len())
        });
    }
    {
        let data = data.clone();
        let target = data.skills()[data.skills().len() / 2].id().clone();
        group.bench_function("patch_by_id", move |b| {
            b.iter(|| {
                black_box(patch_entry(data.skills(), black_box(&target), |skill| {
                    skill.set_level(SkillLevel::MAX);
                }))
                .len()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benches_ops);
criterion_main!(benches);
