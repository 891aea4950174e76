use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use icelandic_phonetic::{transliterate, transliterate_all};

const WORDS: [&str; 8] = [
    "þingvellir",
    "reykjavík",
    "eyjafjallajökull",
    "hafnarfjörður",
    "sauðárkrókur",
    "ófeigur",
    "Björk",
    "hvalur",
];

fn single_words(c: &mut Criterion) {
    c.bench_function("transliterate", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(transliterate(black_box(word)));
            }
        });
    });
}

fn word_list(c: &mut Criterion) {
    let words: Vec<_> = WORDS.iter().copied().cycle().take(10_000).collect();

    c.bench_function("transliterate_all", |b| {
        b.iter(|| transliterate_all(black_box(&words)));
    });
}

criterion_group!(benches, single_words, word_list);
criterion_main!(benches);
