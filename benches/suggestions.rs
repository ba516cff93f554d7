use criterion::{black_box, criterion_group, criterion_main, Criterion};

use huncheck::HunspellChecker;

const AFF: &str = "\
SET UTF-8
TRY esiarntolcdugmphbyfvkwzESIARNTOLCDUGMPHBYFVKWZ'
KEY qwertyuiop|asdfghjkl|zxcvbnm
SFX S Y 1
SFX S 0 s .
";

const DIC: &str = "\
3
nereid/S
naiad/S
dryad/S
";

fn criterion_benchmark(c: &mut Criterion) {
    let checker = HunspellChecker::from_str(AFF, DIC).unwrap();

    c.bench_function("related", |b| {
        b.iter(|| checker.suggest(black_box("Nereide")).take(3).collect::<Vec<_>>())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
