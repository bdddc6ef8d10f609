use criterion::{criterion_group, criterion_main, Criterion};
use engine::{InteractionKind, RecommendationEngine, DEFAULT_DECAY_FACTOR};

fn build_engine(users: usize, products: usize) -> RecommendationEngine {
    let mut eng = RecommendationEngine::new();
    for p in 0..products {
        eng.add_product(&format!("p{p}"), &format!("product {p}"), "bench");
    }
    for u in 0..users {
        let user = format!("u{u}");
        // Deterministic spread: each user touches every seventh product.
        for p in (u % 7..products).step_by(7) {
            eng.add_interaction(&user, &format!("p{p}"), (p % 5 + 1) as f64, InteractionKind::View);
        }
    }
    eng
}

fn bench_recommendations(c: &mut Criterion) {
    let eng = build_engine(200, 100);
    c.bench_function("recommend_top10_200users", |b| {
        b.iter(|| eng.get_recommendations("u0", 10, DEFAULT_DECAY_FACTOR))
    });
}

criterion_group!(benches, bench_recommendations);
criterion_main!(benches);
