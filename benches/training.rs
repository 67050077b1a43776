//! Benchmarks for substring training and trie queries.

use bytepiece::{train_unigram, Trie, TrainerConfig, UnigramTrainer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn random_corpus(len: usize, alphabet: u8, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..alphabet)).collect()
}

fn bench_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("train_unigram");
    group.sample_size(20);

    for size in [64, 128, 256] {
        let corpus = random_corpus(size, 16, 42);

        group.bench_with_input(BenchmarkId::new("whole", size), &corpus, |b, corpus| {
            b.iter(|| {
                let mut trie = Trie::new();
                train_unigram(&mut trie, corpus).unwrap();
                black_box(trie.len())
            });
        });

        let chunked = UnigramTrainer::new(TrainerConfig {
            chunk_length: Some(16),
            ..TrainerConfig::default()
        })
        .unwrap();
        group.bench_with_input(BenchmarkId::new("chunk16", size), &corpus, |b, corpus| {
            b.iter(|| {
                let mut trie = Trie::new();
                chunked.train(&mut trie, corpus).unwrap();
                black_box(trie.len())
            });
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let corpus = random_corpus(256, 16, 7);
    let mut trie = Trie::new();
    train_unigram(&mut trie, &corpus).unwrap();
    let probes: Vec<&[u8]> = corpus.windows(8).collect();

    group.bench_function("search", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for probe in &probes {
                if trie.search(probe) {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });

    group.bench_function("entries", |b| {
        b.iter(|| black_box(trie.entries().count()));
    });

    group.finish();
}

criterion_group!(benches, bench_train, bench_queries);
criterion_main!(benches);
