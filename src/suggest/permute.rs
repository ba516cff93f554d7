//! Permutation generators: pure functions over the misspelled word (plus
//! whichever affix-file table each needs) producing candidate texts.
//! None of these consult the dictionary — that happens in `filter`.
//!
//! Grounded on the teacher's `hunspell/suggestions.rs` generator
//! functions, restructured to build plain `Vec<Candidate>` batches (each
//! generator is naturally small and bounded) instead of pushing into a
//! shared collector, since bounding now happens once, in the engine's
//! `.take(limit)` over the chained iterator.

use itertools::Itertools;

use crate::aff::Aff;
use crate::suggest::{Candidate, MultiWordSuggestion, Suggestion, SuggestionKind};

/// Run every generator in spec order and chain their output into one
/// sequence, which the caller (`edits`) then filters and takes from.
pub fn permutations(word: &str, aff: &Aff) -> Vec<Candidate> {
    let mut out = Vec::new();
    uppercase(word, &mut out);
    replchars(word, aff, &mut out);
    spaceword(word, aff, &mut out);
    mapchars(word, aff, &mut out);
    swapchar(word, &mut out);
    longswapchar(word, &mut out);
    badcharkey(word, &aff.key, &mut out);
    extrachar(word, &mut out);
    forgotchar(word, &aff.try_chars, &mut out);
    movechar(word, &mut out);
    badchar(word, &aff.try_chars, &mut out);
    doubletwochars(word, &mut out);
    if !aff.nosplitsugs {
        twowords(word, aff.dashes(), &mut out);
    }
    out
}

fn single(out: &mut Vec<Candidate>, text: String, kind: SuggestionKind) {
    out.push(Candidate::Single(Suggestion::new(text, kind)));
}

fn uppercase(word: &str, out: &mut Vec<Candidate>) {
    single(out, crate::aff::casing::upper(word), SuggestionKind::Uppercase);
}

fn replchars(word: &str, aff: &Aff, out: &mut Vec<Candidate>) {
    aff.rep.suggest(word, |sugg| {
        if let Some((a, b)) = sugg.split_once(' ') {
            out.push(Candidate::Single(Suggestion::new(sugg.clone(), SuggestionKind::ReplChars)));
            out.push(Candidate::Multi(MultiWordSuggestion::new(
                vec![a.to_string(), b.to_string()],
                SuggestionKind::ReplChars,
                false,
            )));
        } else {
            single(out, sugg, SuggestionKind::ReplChars);
        }
        true
    });
}

fn spaceword(word: &str, aff: &Aff, out: &mut Vec<Candidate>) {
    let dashes = aff.dashes();
    for ((_, c1), (i2, c2)) in word.char_indices().tuple_windows() {
        if c1 == '-' || c2 == '-' {
            continue;
        }
        out.push(Candidate::Multi(MultiWordSuggestion::new(
            vec![word[..i2].to_string(), word[i2..].to_string()],
            SuggestionKind::SpaceWord,
            dashes,
        )));
    }
}

fn mapchars(word: &str, aff: &Aff, out: &mut Vec<Candidate>) {
    let wvec: Vec<char> = word.chars().collect();
    let mut sugg = String::with_capacity(word.len() + 3);
    for class in &aff.map {
        for (i, &c) in wvec.iter().enumerate() {
            if !class.contains(c) {
                continue;
            }
            for newc in class.chars() {
                if newc == c {
                    continue;
                }
                sugg.clear();
                for (j, &wc) in wvec.iter().enumerate() {
                    if j == i {
                        sugg.push(newc);
                    } else {
                        sugg.push(wc);
                    }
                }
                single(out, sugg.clone(), SuggestionKind::MapChars);
            }
        }
    }
}

/// Adjacent-pair swaps, plus Hunspell's corner-swap quirk for four
/// letter words (swap positions 0↔2 and 1↔3).
fn swapchar(word: &str, out: &mut Vec<Candidate>) {
    let mut sugg = String::with_capacity(word.len());
    for ((i1, c1), (i2, c2)) in word.char_indices().tuple_windows() {
        sugg.clear();
        sugg.push_str(&word[..i1]);
        sugg.push(c2);
        sugg.push(c1);
        sugg.push_str(&word[i2 + c2.len_utf8()..]);
        single(out, sugg.clone(), SuggestionKind::SwapChar);
    }

    let chars: Vec<char> = word.chars().collect();
    if chars.len() == 4 {
        let corner = |order: [usize; 4]| -> String { order.iter().map(|&i| chars[i]).collect() };
        single(out, corner([2, 1, 0, 3]), SuggestionKind::SwapChar);
        single(out, corner([0, 3, 2, 1]), SuggestionKind::SwapChar);
    }
}

/// Swaps of non-adjacent character pairs, and double adjacent swaps,
/// regardless of distance — Hunspell's `longswapchar`.
fn longswapchar(word: &str, out: &mut Vec<Candidate>) {
    let mut sugg = String::with_capacity(word.len());
    for (i1, c1) in word.char_indices() {
        let after_i1 = i1 + c1.len_utf8();
        for (i2, c2) in word[after_i1..].char_indices() {
            if i2 == 0 {
                continue;
            }
            let real_i2 = after_i1 + i2;
            let after_i2 = real_i2 + c2.len_utf8();
            sugg.clear();
            sugg.push_str(&word[..i1]);
            sugg.push(c2);
            sugg.push_str(&word[after_i1..real_i2]);
            sugg.push(c1);
            sugg.push_str(&word[after_i2..]);
            single(out, sugg.clone(), SuggestionKind::LongSwapChar);
        }
    }

    for ((i1, c1), (_, c2)) in word.char_indices().tuple_windows() {
        sugg.clear();
        sugg.push_str(&word[..i1]);
        sugg.push(c2);
        sugg.push(c1);
        let len = sugg.len();
        for ((i3, c3), (i4, c4)) in word[len..].char_indices().tuple_windows() {
            sugg.truncate(len);
            sugg.push_str(&word[len..len + i3]);
            sugg.push(c4);
            sugg.push(c3);
            sugg.push_str(&word[len + i4 + c4.len_utf8()..]);
            single(out, sugg.clone(), SuggestionKind::LongSwapChar);
        }
    }
}

/// `keyboard` is a `|`-separated list of horizontally adjacent keys; a
/// character occurring in more than one row has more than two
/// neighbors. For each position, also try swapping the case of the
/// char itself, on the theory the user fat-fingered shift.
fn badcharkey(word: &str, keyboard: &str, out: &mut Vec<Candidate>) {
    if !keyboard.is_empty() {
        for (i, c) in word.char_indices() {
            for (kc1, kc2) in keyboard.chars().tuple_windows() {
                if kc1 == c && kc2 != '|' {
                    let mut sugg = String::with_capacity(word.len());
                    sugg.push_str(&word[..i]);
                    sugg.push(kc2);
                    sugg.push_str(&word[i + c.len_utf8()..]);
                    single(out, sugg, SuggestionKind::BadCharKey);
                }
                if kc2 == c && kc1 != '|' {
                    let mut sugg = String::with_capacity(word.len());
                    sugg.push_str(&word[..i]);
                    sugg.push(kc1);
                    sugg.push_str(&word[i + c.len_utf8()..]);
                    single(out, sugg, SuggestionKind::BadCharKey);
                }
            }
        }
    }

    for (i, c) in word.char_indices() {
        let swapped: String = if c.is_uppercase() {
            c.to_lowercase().collect()
        } else {
            c.to_uppercase().collect()
        };
        let mut sugg = String::with_capacity(word.len());
        sugg.push_str(&word[..i]);
        sugg.push_str(&swapped);
        sugg.push_str(&word[i + c.len_utf8()..]);
        single(out, sugg, SuggestionKind::BadCharKey);
    }
}

fn extrachar(word: &str, out: &mut Vec<Candidate>) {
    let mut sugg = String::with_capacity(word.len());
    for (i, c) in word.char_indices() {
        sugg.clear();
        sugg.push_str(&word[..i]);
        sugg.push_str(&word[i + c.len_utf8()..]);
        single(out, sugg.clone(), SuggestionKind::ExtraChar);
    }
}

fn forgotchar(word: &str, try_chars: &str, out: &mut Vec<Candidate>) {
    for tc in try_chars.chars() {
        if tc == '-' {
            continue;
        }
        for (i, _) in word.char_indices() {
            let mut sugg = String::with_capacity(word.len() + tc.len_utf8());
            sugg.push_str(&word[..i]);
            sugg.push(tc);
            sugg.push_str(&word[i..]);
            single(out, sugg, SuggestionKind::ForgotChar);
        }
        single(out, format!("{word}{tc}"), SuggestionKind::ForgotChar);
    }
}

fn movechar(word: &str, out: &mut Vec<Candidate>) {
    let mut sugg = String::with_capacity(word.len());
    for (i1, c1) in word.char_indices() {
        let after_i1 = i1 + c1.len_utf8();
        for (i2, c2) in word[after_i1..].char_indices() {
            if i2 == 0 {
                continue;
            }
            let real_i2 = after_i1 + i2;
            let after_i2 = real_i2 + c2.len_utf8();
            sugg.clear();
            sugg.push_str(&word[..i1]);
            sugg.push_str(&word[after_i1..after_i2]);
            sugg.push(c1);
            sugg.push_str(&word[after_i2..]);
            single(out, sugg.clone(), SuggestionKind::MoveChar);

            sugg.clear();
            sugg.push_str(&word[..i1]);
            sugg.push(c2);
            sugg.push_str(&word[i1..real_i2]);
            sugg.push_str(&word[after_i2..]);
            single(out, sugg.clone(), SuggestionKind::MoveChar);
        }
    }
}

fn badchar(word: &str, try_chars: &str, out: &mut Vec<Candidate>) {
    let mut sugg = String::with_capacity(word.len() + 3);
    for tc in try_chars.chars() {
        if tc == '-' {
            continue;
        }
        for (i, c) in word.char_indices() {
            if c == tc {
                continue;
            }
            sugg.clear();
            sugg.push_str(&word[..i]);
            sugg.push(tc);
            sugg.push_str(&word[i + c.len_utf8()..]);
            single(out, sugg.clone(), SuggestionKind::BadChar);
        }
    }
}

/// Collapse tripled-pair patterns like `abab` that look like a typo of
/// `ab` (e.g. `bananana` -> `banana`).
fn doubletwochars(word: &str, out: &mut Vec<Candidate>) {
    for ((i1, c1), (_, c2), (i3, c3), (_, c4)) in word.char_indices().tuple_windows() {
        if c1 == c3 && c2 == c4 {
            let mut sugg = String::with_capacity(word.len());
            sugg.push_str(&word[..i1]);
            sugg.push_str(&word[i3..]);
            single(out, sugg, SuggestionKind::DoubleTwoChars);
        }
    }
}

fn twowords(word: &str, allow_dash: bool, out: &mut Vec<Candidate>) {
    for (_, (i2, _)) in word.char_indices().tuple_windows() {
        let words = vec![word[..i2].to_string(), word[i2..].to_string()];
        out.push(Candidate::Multi(MultiWordSuggestion::new(
            words,
            SuggestionKind::TwoWords,
            allow_dash,
        )));
    }
}
