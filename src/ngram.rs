/// Score the similarity between `s1` and `s2` by n-gram overlap, for `n`
/// from 1 up to `nmax`. Matches (a non-erroring port of) Hunspell's
/// `ngram()`: count exact single-character matches first, then for each
/// increasing n count exact n-length substring matches, weighting each
/// hit by n, and stop early once a size stops producing more than one
/// hit (larger sizes can't do better).
pub fn ngram(nmax: usize, s1: &[char], s2: &[char]) -> usize {
    let len1 = s1.len();
    let len2 = s2.len();

    let mut score = 0;
    for c1 in s1 {
        for c2 in s2 {
            score += (c1 == c2) as usize;
        }
    }
    if nmax == 1 || score <= 1 {
        return score;
    }

    for n in 2..=nmax {
        if n > len1 || n > len2 {
            break;
        }
        let mut nscore = 0;
        for i1 in 0..=len1 - n {
            for i2 in 0..=len2 - n {
                if s1[i1..i1 + n] == s2[i2..i2 + n] {
                    nscore += 1;
                }
            }
        }
        score += nscore * n;
        if nscore <= 1 {
            break;
        }
    }

    score
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_ngram_scores() {
        assert_eq!(0, ngram(1, &chars("foo"), &chars("bar")));
        assert_eq!(6, ngram(1, &chars("awooo"), &chars("foo")));
        assert_eq!(10, ngram(2, &chars("awooo"), &chars("foo")));
        assert_eq!(10, ngram(3, &chars("awooo"), &chars("foo")));
        assert_eq!(9, ngram(1, &chars("awooo"), &chars("awooga")));
        assert_eq!(17, ngram(2, &chars("awooo"), &chars("awooga")));
        assert_eq!(23, ngram(3, &chars("awooo"), &chars("awooga")));
        assert_eq!(27, ngram(4, &chars("awooo"), &chars("awooga")));
        assert_eq!(27, ngram(5, &chars("awooo"), &chars("awooga")));
    }
}
