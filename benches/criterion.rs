use caseless::default_case_fold_str;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use huncheck::ngram::ngram as ngram_fn;
use huncheck::HunspellChecker;

// A small embedded dictionary stands in for the external wordlists the
// upstream benchmarks loaded from disk; it's enough to keep every stage
// of the suggestion pipeline (edits, compounds, n-gram, phonetic) warm.
const AFF: &str = "\
SET UTF-8
TRY esiarntolcdugmphbyfvkwzESIARNTOLCDUGMPHBYFVKWZ'
KEY qwertyuiop|asdfghjkl|zxcvbnm
REP 2
REP ph f
REP hte the
MAP 2
MAP aá
MAP eé
COMPOUNDFLAG C
COMPOUNDMIN 3
PHONE 1
PHONE PH F
SFX S Y 2
SFX S 0 s .
SFX S 0 es [sxz]
SFX D Y 1
SFX D 0 ed [^y]
PFX U Y 1
PFX U 0 un .
";

const DIC: &str = "\
14
the
quick/S
brown
fox/S
jump/SD
over/S
lazy/S
dog/SD
house/SC
boat/SC
appear/SDU
disappear/SD
correspond/SD
reference/SD
";

fn checker() -> HunspellChecker {
    HunspellChecker::from_str(AFF, DIC).unwrap()
}

fn load_dict(c: &mut Criterion) {
    c.bench_function("load_dict", |b| b.iter(|| HunspellChecker::from_str(AFF, DIC)));
}

fn suggest_disappearance(c: &mut Criterion) {
    let checker = checker();

    dbg!(checker.suggest("disapearance").map(|s| s.text).collect::<Vec<_>>());

    c.bench_function("suggest_disapearance", |b| {
        b.iter(|| checker.suggest(black_box("disapearance")).collect::<Vec<_>>())
    });
}

fn suggest_compound(c: &mut Criterion) {
    let checker = checker();

    dbg!(checker.suggest("houseboet").map(|s| s.text).collect::<Vec<_>>());

    c.bench_function("suggest_compound", |b| {
        b.iter(|| checker.suggest(black_box("houseboet")).collect::<Vec<_>>())
    });
}

fn suggest_ngram_fallback(c: &mut Criterion) {
    let checker = checker();

    // Far enough from every root that the edit rounds come up empty and
    // the n-gram/phonetic fallback actually runs.
    dbg!(checker.suggest("korespond").map(|s| s.text).collect::<Vec<_>>());

    c.bench_function("suggest_ngram_fallback", |b| {
        b.iter(|| checker.suggest(black_box("korespond")).collect::<Vec<_>>())
    });
}

fn ngram_loop(c: &mut Criterion) {
    let words: Vec<Vec<char>> = DIC
        .lines()
        .skip(1)
        .map(|line| line.split_once('/').map(|(w, _)| w).unwrap_or(line).chars().collect())
        .collect();

    c.bench_function("ngram_loop", |b| {
        b.iter(|| {
            for w1 in &words {
                for w2 in &words {
                    black_box(ngram_fn(3, w1, w2));
                }
            }
        });
    });
}

fn casefold_loop(c: &mut Criterion) {
    c.bench_function("default_case_fold_str", |b| {
        b.iter(|| {
            black_box(default_case_fold_str(black_box("Daniel")));
            black_box(default_case_fold_str(black_box("LICHTENSTEIN")));
            black_box(default_case_fold_str(black_box("marmalade")));
            black_box(default_case_fold_str(black_box("Île-de-France")));
            black_box(default_case_fold_str(black_box("PTOLÉMÉE")));
            black_box(default_case_fold_str(black_box("palissandre")));
        });
    });
    c.bench_function("default_case_fold_str_short", |b| {
        b.iter(|| {
            black_box(default_case_fold_str(black_box("I")));
            black_box(default_case_fold_str(black_box("Hz")));
            black_box(default_case_fold_str(black_box("Öl")));
        });
    });
    // Compare with tolower as a reference point.
    c.bench_function("tolower", |b| {
        b.iter(|| {
            black_box(black_box("Daniel").to_lowercase());
            black_box(black_box("LICHTENSTEIN").to_lowercase());
            black_box(black_box("marmalade").to_lowercase());
            black_box(black_box("Île-de-France").to_lowercase());
            black_box(black_box("PTOLÉMÉE").to_lowercase());
            black_box(black_box("palissandre").to_lowercase());
        });
    });
    c.bench_function("tolower_short", |b| {
        b.iter(|| {
            black_box(black_box("I").to_lowercase());
            black_box(black_box("Hz").to_lowercase());
            black_box(black_box("Öl").to_lowercase());
        });
    });
}

fn spellcheck_sample(c: &mut Criterion) {
    let checker = checker();

    // A small sample standing in for a corpus sweep, with a few
    // deliberate misspellings mixed in.
    let words = [
        "the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog", "hte", "jupms",
        "overr", "lasy", "dgo", "houseboat", "housboat", "apearance", "disapearance",
        "korespond", "referance",
    ];

    c.bench_function("spellcheck_sample", |b| {
        b.iter(|| {
            for word in &words {
                black_box(checker.check(word));
            }
        })
    });
}

criterion_group!(spellcheck, spellcheck_sample);
criterion_group!(casefold, casefold_loop);
criterion_group!(ngram, ngram_loop);
criterion_group!(load, load_dict);
criterion_group!(suggest, suggest_disappearance, suggest_compound, suggest_ngram_fallback);
criterion_main!(suggest, load, ngram, casefold, spellcheck);
