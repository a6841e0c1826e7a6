use criterion::{criterion_group, criterion_main, Criterion};
use saju::chart::{Chart, Pillar};
use saju::config::Config;
use saju::relations;
use saju::scorer::{CandidateName, ChartProfile, FavorableElementSet, NameCharacter, Scorer, StrengthLevel};
use saju::tables::{Branch, Element, Stem};
use std::hint::black_box;

fn setup() -> (Scorer, Chart, ChartProfile) {
    let chart = Chart::new(
        Pillar::new(Stem::Gap, Branch::Ja),
        Pillar::new(Stem::Byeong, Branch::In),
        Pillar::new(Stem::Gap, Branch::O),
        Pillar::new(Stem::Byeong, Branch::In),
    );
    let profile = ChartProfile::builder()
        .favorable(FavorableElementSet {
            yongshin: Some(Element::Water),
            heeshin: Some(Element::Metal),
            gishin: Some(Element::Fire),
            gushin: Some(Element::Wood),
        })
        .strength(StrengthLevel::Strong)
        .build();
    let scorer = Scorer::new(Config::default()).expect("Failed to build scorer");
    (scorer, chart, profile)
}

fn random_candidates(count: usize) -> Vec<CandidateName> {
    let mut rng = fastrand::Rng::with_seed(42);
    (0..count)
        .map(|i| {
            let len = rng.usize(1..=3);
            let characters = (0..len)
                .map(|j| NameCharacter::new(format!("{}{}", i, j), Element::ALL[rng.usize(0..5)]))
                .collect();
            CandidateName::new(format!("n{}", i), characters)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let (scorer, chart, profile) = setup();
    let single = random_candidates(1).remove(0);
    let batch = random_candidates(2_000);

    c.bench_function("evaluate (single)", |b| {
        b.iter(|| scorer.evaluate(black_box(&chart), black_box(&profile), black_box(&single)))
    });

    c.bench_function("score_batch (2k candidates)", |b| {
        b.iter(|| scorer.score_batch(black_box(&chart), black_box(&profile), black_box(&batch)))
    });

    let branches = chart.branches();
    c.bench_function("relations::scan (4 branches)", |b| {
        b.iter(|| relations::scan(black_box(&branches)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
