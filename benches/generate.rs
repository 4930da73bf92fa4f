use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diceware_roller::{
    entropy::SecureRandom,
    passphrase::generate,
    wordlist::{WordLookup, WORDLIST_SIZE},
};

fn bench_generate(c: &mut Criterion) {
    let lookup = WordLookup::from_words((0..WORDLIST_SIZE).map(|n| format!("word{n}")));
    let mut source = SecureRandom::from_os_entropy();

    c.bench_function("generate 6 words", |b| {
        b.iter(|| generate(black_box(6), &lookup, &mut source))
    });

    c.bench_function("validate lookup", |b| b.iter(|| lookup.validate()));
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
