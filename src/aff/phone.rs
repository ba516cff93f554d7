/// The `PHONE` table: an ordered list of phonetic replacement rules used
/// by the phonetic suggester (spec.md 4.7). Hunspell's own phonetic
/// rule language is a small DSL of its own (leading `^`/trailing `$`
/// anchors, `_` for "start of word", digit suffixes that extend how many
/// source characters a rule consumes). We support the common subset:
/// plain substring rules plus `^`/`$` anchoring, applied greedily
/// left-to-right over an uppercased copy of the word, which is what
/// Hunspell's `affentry::condition` reduces to for the vast majority of
/// shipped `PHONE` tables (only a handful of exotic per-language rules
/// use the richer consume-count syntax, which a port may revisit).
#[derive(Clone, Debug, Default)]
pub struct PhoneTable {
    rules: Vec<PhoneRule>,
}

#[derive(Clone, Debug)]
struct PhoneRule {
    anchor_begin: bool,
    anchor_end: bool,
    from: String,
    to: String,
}

impl PhoneTable {
    pub fn push(&mut self, from: &str, to: &str) {
        let mut from = from;
        let mut anchor_begin = false;
        let mut anchor_end = false;
        if let Some(rest) = from.strip_prefix('^') {
            from = rest;
            anchor_begin = true;
        }
        if let Some(rest) = from.strip_suffix('$') {
            from = rest;
            anchor_end = true;
        }
        self.rules.push(PhoneRule {
            anchor_begin,
            anchor_end,
            from: from.to_uppercase(),
            to: to.to_uppercase(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compute the phonetic code for `word`, Hunspell-metaphone style:
    /// scan left to right, apply the first matching rule (in table
    /// order), and either emit its replacement or, if `from` is
    /// non-empty and `to` is empty, drop the matched text entirely.
    pub fn transform(&self, word: &str) -> String {
        if self.rules.is_empty() {
            return word.to_uppercase();
        }
        let upper = word.to_uppercase();
        let mut out = String::with_capacity(upper.len());
        let mut i = 0;
        let bytes_len = upper.len();
        'outer: while i < bytes_len {
            let at_start = i == 0;
            for rule in &self.rules {
                if rule.anchor_begin && !at_start {
                    continue;
                }
                if rule.from.is_empty() {
                    continue;
                }
                if !upper[i..].starts_with(&rule.from) {
                    continue;
                }
                if rule.anchor_end && i + rule.from.len() != bytes_len {
                    continue;
                }
                out.push_str(&rule.to);
                i += rule.from.len();
                continue 'outer;
            }
            // No rule matched; copy one char through unchanged.
            let c = upper[i..].chars().next().unwrap();
            out.push(c);
            i += c.len_utf8();
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_identity_without_rules() {
        let t = PhoneTable::default();
        assert_eq!(t.transform("hello"), "HELLO");
    }

    #[test]
    fn test_simple_substitution() {
        let mut t = PhoneTable::default();
        t.push("PH", "F");
        assert_eq!(t.transform("phone"), "FONE");
    }

    #[test]
    fn test_anchored_rule_only_fires_at_start() {
        let mut t = PhoneTable::default();
        t.push("^KN", "N");
        assert_eq!(t.transform("knight"), "NIGHT");
        // Anchored rule must not fire mid-word.
        assert_eq!(t.transform("backnight"), "BACKNIGHT");
    }
}
