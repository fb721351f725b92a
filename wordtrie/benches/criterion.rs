use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wordtrie::wordlist::parse_word_list;
use wordtrie::{Trie, WordListOptions};

/// Deterministic pseudo-words so the benchmarks don't need a word file.
fn make_words(nr: usize) -> Vec<String> {
    let mut seed = 0x2545_f491_u32;
    (0..nr)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let len = 3 + (seed % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((seed >> (i * 3)) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn insert_words(c: &mut Criterion) {
    let words = make_words(10_000);

    c.bench_function("insert_10k", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            trie.insert_all(black_box(&words)).unwrap();
            trie
        })
    });
}

fn lookup_words(c: &mut Criterion) {
    let words = make_words(10_000);
    let mut trie = Trie::new();
    trie.insert_all(&words).unwrap();

    c.bench_function("lookup_10k", |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| trie.occurrences(black_box(w)))
                .sum::<usize>()
        })
    });

    c.bench_function("lookup_miss", |b| {
        b.iter(|| trie.occurrences(black_box("notawordatall")))
    });
}

fn destroy_trie(c: &mut Criterion) {
    let words = make_words(10_000);

    c.bench_function("destroy_10k", |b| {
        b.iter_batched(
            || {
                let mut trie = Trie::new();
                trie.insert_all(&words).unwrap();
                trie
            },
            |trie| trie.destroy(),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn parse_list(c: &mut Criterion) {
    let text = make_words(10_000).join("\n");

    c.bench_function("parse_10k", |b| {
        b.iter(|| parse_word_list(black_box(&text), &WordListOptions::default()))
    });
}

criterion_group!(benches, insert_words, lookup_words, destroy_trie, parse_list);
criterion_main!(benches);
