/// Caseness classification and case-repair helpers used by the suggestion
/// engine's casing round and by `handle`'s case coercion step.
///
/// Hunspell distinguishes five "caseness" classes for a word; which class
/// a misspelling falls into decides which recapitalized variants are worth
/// retrying and how a dictionary-cased suggestion should be recased before
/// it is shown back to the user.
use unicode_titlecase::StrTitleCase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapType {
    /// All-lowercase (no cased letter is uppercase).
    No,
    /// Initial letter uppercase, rest lowercase.
    Init,
    /// Every cased letter is uppercase.
    All,
    /// Mixed case that isn't any of the above.
    Huh,
    /// Mixed case like `Huh`, but the first letter happens to be upper.
    HuhInit,
}

fn first_char_upper(word: &str) -> bool {
    word.chars().next().map(char::is_uppercase).unwrap_or(false)
}

/// Classify `word`'s caseness. Mirrors Hunspell's `get_captype`.
pub fn captype(word: &str) -> CapType {
    let mut chars = word.chars().filter(|c| c.is_alphabetic());
    let Some(first) = chars.next() else {
        return CapType::No;
    };
    let first_upper = first.is_uppercase();
    let mut any_upper = first_upper;
    let mut any_lower = first.is_lowercase();
    let mut any_upper_after_first = false;
    for c in chars {
        if c.is_uppercase() {
            any_upper = true;
            any_upper_after_first = true;
        }
        if c.is_lowercase() {
            any_lower = true;
        }
    }

    if !any_upper {
        CapType::No
    } else if !any_lower {
        CapType::All
    } else if first_upper && !any_upper_after_first {
        CapType::Init
    } else if first_upper {
        CapType::HuhInit
    } else {
        CapType::Huh
    }
}

/// Uppercase the whole word (Unicode-aware full case folding upward).
pub fn upper(word: &str) -> String {
    word.to_uppercase()
}

/// Lowercase the whole word.
pub fn lower(word: &str) -> String {
    word.to_lowercase()
}

/// Initial letter upper, rest lower.
pub fn titlecase(word: &str) -> String {
    word.to_titlecase_lower_rest()
}

/// Returns `(captype, variants)` with `variants[0]` equal to `word` and
/// any further entries being alternative recapitalizations worth retrying,
/// per spec.md 4.1 step 1.
pub fn corrections(word: &str) -> (CapType, Vec<String>) {
    let ct = captype(word);
    let mut variants = vec![word.to_string()];
    match ct {
        CapType::No => {}
        CapType::Init => {
            variants.push(lower(word));
        }
        CapType::All => {
            variants.push(lower(word));
            let tc = titlecase(word);
            if tc != word {
                variants.push(tc);
            }
        }
        CapType::Huh | CapType::HuhInit => {
            if let Some(first) = word.chars().next() {
                if first.is_uppercase() {
                    let rest: String = word.chars().skip(1).collect();
                    let mut v = first.to_lowercase().collect::<String>();
                    v.push_str(&rest);
                    variants.push(v);
                }
            }
        }
    }
    variants
        .dedup_by(|a, b| a == b);
    (ct, variants)
}

/// Candidate all-uppercase spellings to try under `FORCEUCASE`, tried in
/// order until one passes `correct`.
pub fn capitalize(word: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(2);
    let tc = titlecase(word);
    out.push(tc);
    let uc = upper(word);
    if !out.contains(&uc) {
        out.push(uc);
    }
    out
}

/// Recase `text` to match `captype`, the classification of the original
/// misspelling. `Huh`/`HuhInit` are deliberately left untouched here: per
/// spec.md 4.5 step 2c, their case repair is a narrower splice applied
/// directly in `handle`, not a blanket recoercion.
pub fn coerce(text: &str, captype: CapType) -> String {
    match captype {
        CapType::No => text.to_string(),
        CapType::Init => titlecase(text),
        CapType::All => upper(text),
        CapType::Huh | CapType::HuhInit => text.to_string(),
    }
}

/// Detects the German sharp-s special case: a candidate whose only
/// difference from a correctly-cased dictionary form is `ß` rendered as
/// `ss` (or vice versa) must not have its case coerced, since `ß` has no
/// uppercase-invariant single-character form in most fonts/keyboards.
pub fn is_sharps(text: &str) -> bool {
    text.contains('ß') || text.to_lowercase().contains("ss") && text.contains("SS")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_captype() {
        assert_eq!(captype("hello"), CapType::No);
        assert_eq!(captype("Hello"), CapType::Init);
        assert_eq!(captype("HELLO"), CapType::All);
        assert_eq!(captype("HeLLo"), CapType::HuhInit);
        assert_eq!(captype("heLLo"), CapType::Huh);
        assert_eq!(captype("123"), CapType::No);
    }

    #[test]
    fn test_corrections_init_tries_lowercase() {
        let (ct, variants) = corrections("Hte");
        assert_eq!(ct, CapType::Init);
        assert!(variants.contains(&"hte".to_string()));
    }

    #[test]
    fn test_corrections_all_tries_lower_and_title() {
        let (ct, variants) = corrections("HELLO");
        assert_eq!(ct, CapType::All);
        assert!(variants.contains(&"hello".to_string()));
        assert!(variants.contains(&"Hello".to_string()));
    }

    #[test]
    fn test_coerce() {
        assert_eq!(coerce("the", CapType::Init), "The");
        assert_eq!(coerce("the", CapType::All), "THE");
        assert_eq!(coerce("the", CapType::No), "the");
    }
}
