use criterion::{criterion_group, criterion_main, Criterion};
use engine::tokenizer::tokenize;
use engine::TextMatcher;

fn synthetic_corpus(n: usize) -> Vec<String> {
    let colors = ["black", "brown", "red", "blue", "green", "silver", "white"];
    let items = ["wallet", "backpack", "umbrella", "phone", "keys", "scarf", "watch"];
    let places = ["station", "library", "cafeteria", "park", "gym", "bus", "lab"];
    (0..n)
        .map(|i| {
            format!(
                "a {} {} was lost near the {} on monday, serial {}",
                colors[i % colors.len()],
                items[i % items.len()],
                places[i % places.len()],
                i
            )
        })
        .collect()
}

fn bench_matcher(c: &mut Criterion) {
    let corpus = synthetic_corpus(500);

    c.bench_function("tokenize_item", |b| {
        b.iter(|| tokenize("Black leather wallet lost near the central station"))
    });

    c.bench_function("fit_500_docs", |b| {
        b.iter(|| {
            let m = TextMatcher::new();
            m.fit(&corpus);
        })
    });

    let m = TextMatcher::new();
    m.fit(&corpus);
    c.bench_function("query_500_docs", |b| {
        b.iter(|| m.query("black wallet near the station", 5).unwrap())
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
