/// Parser for Hunspell-format `.aff` files.
///
/// Simple `KEYWORD value` lines are parsed with `nom`, the way the
/// teacher's `hunspell/parse_aff.rs` does it. The multi-line tables
/// (`REP`, `MAP`, `PHONE`, `PFX`, `SFX`, `COMPOUNDRULE`, `ICONV`/`OCONV`)
/// are each introduced by a `KEYWORD count` header followed by exactly
/// `count` data lines; the teacher's parser never grew support for these,
/// so this part reads them with a plain line-by-line state machine
/// instead of forcing them through `nom`'s single-line combinators.
use anyhow::{anyhow, Result};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::space1;
use nom::combinator::{cut, map, value};
use nom::error::{Error as NomError, ErrorKind, ParseError};
use nom::{Compare, Err, Finish, IResult, InputLength, Parser};

use crate::aff::condition::AffixCondition;
use crate::aff::flag::FlagMode;
use crate::aff::{Aff, AffixRule};

type Input<'a> = &'a str;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

struct AffError {
    message: String,
}

impl AffError {
    fn new(message: &str) -> Self {
        AffError { message: message.to_string() }
    }

    fn wrapped(message: &str) -> Err<Self> {
        Err::Error(Self::new(message))
    }
}

impl<'a> ParseError<Input<'a>> for AffError {
    fn from_error_kind(input: Input, kind: ErrorKind) -> Self {
        AffError { message: format!("{:?}:\t{}\n", kind, input) }
    }

    fn append(_input: Input, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ToString for AffError {
    fn to_string(&self) -> String {
        self.message.to_string()
    }
}

fn value_string(s: &str) -> IResult<&str, &str, AffError> {
    take_till1(|c: char| c.is_whitespace())(s)
}

/// Parse a `KEYWORD value` line. Ported verbatim from the teacher.
fn keyword<'a, T, O, E: ParseError<Input<'a>>, F>(
    key: T,
    mut value: F,
) -> impl FnMut(Input<'a>) -> IResult<Input<'a>, O, E>
where
    F: Parser<Input<'a>, O, E>,
    Input<'a>: Compare<T>,
    T: InputLength + Copy,
{
    move |s: Input<'a>| {
        let (s, _) = tag(key).parse(s)?;
        let (s, _) = space1.parse(s)?;
        match value.parse(s) {
            Err(Err::Error(e)) => Err(Err::Failure(e)),
            rest => rest,
        }
    }
}

fn flag_mode_value(s: &str) -> IResult<&str, FlagMode, AffError> {
    alt((
        value(FlagMode::DoubleCharFlags, tag("long")),
        value(FlagMode::NumericFlags, tag("num")),
        value(FlagMode::Utf8Flags, tag("UTF-8")),
    ))(s)
}

fn set_flag_mode(s: &str) -> IResult<&str, FlagMode, AffError> {
    keyword("FLAG", flag_mode_value)(s)
}

/// One-word/one-arg keywords that we just want the raw trailing value of.
fn simple_keyword<'a>(key: &'static str) -> impl FnMut(Input<'a>) -> IResult<Input<'a>, &'a str, AffError> {
    keyword(key, cut(value_string))
}

const SINGLE_FLAG_NAMES: &[&str] = &[
    "FORBIDDENWORD",
    "NOSUGGEST",
    "ONLYINCOMPOUND",
    "KEEPCASE",
    "FORCEUCASE",
    "WARN",
    "COMPOUNDBEGIN",
    "COMPOUNDMIDDLE",
    "COMPOUNDEND",
    "COMPOUNDPERMITFLAG",
    "COMPOUNDFLAG",
    "CIRCUMFIX",
    "NEEDAFFIX",
];

/// Everything except byte-order-mark stripping, comment/blank skipping and
/// the header-counted tables lives in this single pass over lines.
pub fn parse_affix_data(text: &str) -> Result<Aff> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut aff = Aff::default();
    aff.maxcpdsugs = 3;
    aff.maxngramsugs = 4;
    aff.maxdiff = 5;

    let lines: Vec<&str> = text.lines().collect();
    let mut i = 0;
    while i < lines.len() {
        let raw = lines[i];
        let line = raw.split('#').next().unwrap_or(raw).trim_end();
        i += 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let keyword_name = match tokens.next() {
            Some(k) => k,
            None => continue,
        };

        match keyword_name {
            "SET" => {
                let (_, enc) = simple_keyword("SET")(line).finish().map_err(to_anyhow)?;
                if enc != "UTF-8" {
                    return Err(anyhow!("unsupported encoding {:?}", enc));
                }
            }
            "FLAG" => {
                let (_, fm) = set_flag_mode(line).finish().map_err(to_anyhow)?;
                aff.flag_mode = fm;
            }
            "KEY" => {
                let (_, v) = simple_keyword("KEY")(line).finish().map_err(to_anyhow)?;
                aff.key = v.to_string();
            }
            "TRY" => {
                let (_, v) = simple_keyword("TRY")(line).finish().map_err(to_anyhow)?;
                aff.try_chars = v.to_string();
            }
            "WORDCHARS" => {
                // Parsed but not currently consulted by the suggestion engine.
                let _ = simple_keyword("WORDCHARS")(line).finish();
            }
            "COMPOUNDMIN" => {
                let v: &str = tokens.next().ok_or_else(|| anyhow!("COMPOUNDMIN: missing value"))?;
                aff.compound_min = v.parse()?;
            }
            "MAXCPDSUGS" => {
                aff.maxcpdsugs = next_usize(&mut tokens, "MAXCPDSUGS")?;
            }
            "MAXNGRAMSUGS" => {
                aff.maxngramsugs = next_usize(&mut tokens, "MAXNGRAMSUGS")?;
            }
            "MAXDIFF" => {
                aff.maxdiff = next_usize(&mut tokens, "MAXDIFF")?;
            }
            "ONLYMAXDIFF" => {
                aff.onlymaxdiff = true;
            }
            "NOSPLITSUGS" => {
                aff.nosplitsugs = true;
            }
            k if SINGLE_FLAG_NAMES.contains(&k) => {
                let v: &str = tokens.next().ok_or_else(|| anyhow!("{}: missing flag", k))?;
                let flag = aff.flag_mode.parse_one(v)?;
                match k {
                    "FORBIDDENWORD" => aff.forbiddenword = Some(flag),
                    "NOSUGGEST" => aff.nosuggest = Some(flag),
                    "ONLYINCOMPOUND" => aff.onlyincompound = Some(flag),
                    "KEEPCASE" => aff.keepcase = Some(flag),
                    "FORCEUCASE" => aff.forceucase = Some(flag),
                    "WARN" => aff.warn = Some(flag),
                    "COMPOUNDBEGIN" => aff.compoundbegin = Some(flag),
                    "COMPOUNDMIDDLE" => aff.compoundmiddle = Some(flag),
                    "COMPOUNDEND" => aff.compoundend = Some(flag),
                    "COMPOUNDPERMITFLAG" => aff.compoundpermit = Some(flag),
                    "COMPOUNDFLAG" => aff.compoundflag = Some(flag),
                    "CIRCUMFIX" => aff.circumfix = Some(flag),
                    "NEEDAFFIX" => aff.needaffix = Some(flag),
                    _ => unreachable!(),
                }
            }
            "REP" => {
                let count = next_usize(&mut tokens, "REP")?;
                for _ in 0..count {
                    let data_line = lines.get(i).ok_or_else(|| anyhow!("REP: truncated table"))?;
                    i += 1;
                    let mut t = data_line.split_whitespace();
                    let _ = t.next(); // "REP"
                    let from = t.next().ok_or_else(|| anyhow!("REP: missing from"))?;
                    let to = t.next().ok_or_else(|| anyhow!("REP: missing to"))?;
                    aff.rep.push(&from.replace('_', " "), &to.replace('_', " "));
                }
            }
            "MAP" => {
                let count = next_usize(&mut tokens, "MAP")?;
                for _ in 0..count {
                    let data_line = lines.get(i).ok_or_else(|| anyhow!("MAP: truncated table"))?;
                    i += 1;
                    let mut t = data_line.split_whitespace();
                    let _ = t.next();
                    let class = t.next().ok_or_else(|| anyhow!("MAP: missing class"))?;
                    aff.map.push(strip_parens(class).to_string());
                }
            }
            "PHONE" => {
                let count = next_usize(&mut tokens, "PHONE")?;
                for _ in 0..count {
                    let data_line = lines.get(i).ok_or_else(|| anyhow!("PHONE: truncated table"))?;
                    i += 1;
                    let mut t = data_line.split_whitespace();
                    let _ = t.next();
                    let from = t.next().ok_or_else(|| anyhow!("PHONE: missing from"))?;
                    let to = t.next().unwrap_or("");
                    aff.phone.push(from, to);
                }
            }
            "ICONV" | "OCONV" => {
                let count = next_usize(&mut tokens, keyword_name)?;
                let mut table = crate::aff::replacements::Replacements::default();
                for _ in 0..count {
                    let data_line = lines
                        .get(i)
                        .ok_or_else(|| anyhow!("{}: truncated table", keyword_name))?;
                    i += 1;
                    let mut t = data_line.split_whitespace();
                    let _ = t.next();
                    let from = t.next().ok_or_else(|| anyhow!("{}: missing from", keyword_name))?;
                    let to = t.next().ok_or_else(|| anyhow!("{}: missing to", keyword_name))?;
                    table.push(from, to);
                }
                if keyword_name == "OCONV" {
                    aff.oconv = Some(table);
                }
                // ICONV (input normalization) is applied before lookup by
                // the dictionary loader, which is out of the suggestion
                // engine's scope; we parse it for completeness but don't
                // currently apply it ourselves.
            }
            "COMPOUNDRULE" => {
                let count = next_usize(&mut tokens, "COMPOUNDRULE")?;
                for _ in 0..count {
                    let data_line = lines
                        .get(i)
                        .ok_or_else(|| anyhow!("COMPOUNDRULE: truncated table"))?;
                    i += 1;
                    let mut t = data_line.split_whitespace();
                    let _ = t.next();
                    let rule_str = t.next().ok_or_else(|| anyhow!("COMPOUNDRULE: missing rule"))?;
                    aff.compoundrules
                        .push(CompoundRule::from_str(rule_str, &aff.flag_mode)?);
                }
            }
            "PFX" | "SFX" => {
                let flag_str: &str = tokens.next().ok_or_else(|| anyhow!("{}: missing flag", keyword_name))?;
                let flag = aff.flag_mode.parse_one(flag_str)?;
                let cross_product = tokens.next().map(|s| s == "Y").unwrap_or(false);
                let count = next_usize(&mut tokens, keyword_name)?;
                for _ in 0..count {
                    let data_line = lines
                        .get(i)
                        .ok_or_else(|| anyhow!("{}: truncated table", keyword_name))?;
                    i += 1;
                    let mut t = data_line.split_whitespace();
                    let _ = t.next(); // PFX/SFX
                    let _flag2 = t.next(); // repeated flag
                    let strip_tok = t.next().ok_or_else(|| anyhow!("{}: missing strip", keyword_name))?;
                    let affix_tok = t.next().ok_or_else(|| anyhow!("{}: missing affix", keyword_name))?;
                    let cond_tok = t.next().unwrap_or(".");

                    let strip = if strip_tok == "0" { String::new() } else { strip_tok.to_string() };
                    let (affix, cond_tok) = match affix_tok.split_once('/') {
                        Some((a, _continuation)) => (a, cond_tok),
                        None => (affix_tok, cond_tok),
                    };
                    let affix = if affix == "0" { String::new() } else { affix.to_string() };

                    let rule = AffixRule {
                        flag,
                        strip,
                        affix,
                        condition: AffixCondition::new(cond_tok),
                    };

                    if keyword_name == "PFX" {
                        let idx = aff.prefixes.rules.len();
                        if !rule.affix.is_empty() {
                            aff.prefix_trie.insert(&rule.affix, idx);
                        } else {
                            aff.prefix_trie.insert("", idx);
                        }
                        aff.prefixes.push(rule, cross_product);
                    } else {
                        let idx = aff.suffixes.rules.len();
                        if !rule.affix.is_empty() {
                            aff.suffix_trie.insert(&rule.affix, idx);
                        } else {
                            aff.suffix_trie.insert("", idx);
                        }
                        aff.suffixes.push(rule, cross_product);
                    }
                }
            }
            _ => {
                // Unrecognized directive (NAME, HOME, VERSION, AF, AM,
                // BREAK, CHECKCOMPOUNDxxx, ...): not consulted by the
                // suggestion engine, ignore it.
            }
        }
    }

    Ok(aff)
}

fn next_usize<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    keyword_name: &str,
) -> Result<usize> {
    let v = tokens
        .next()
        .ok_or_else(|| anyhow!("{}: missing numeric argument", keyword_name))?;
    v.parse()
        .map_err(|_| anyhow!("{}: bad numeric argument {:?}", keyword_name, v))
}

fn strip_parens(s: &str) -> &str {
    s.strip_prefix('(').and_then(|s| s.strip_suffix(')')).unwrap_or(s)
}

fn to_anyhow(e: AffError) -> anyhow::Error {
    anyhow!(e.to_string())
}

use crate::aff::compoundrule::CompoundRule;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_simple_fields() {
        let text = "SET UTF-8\nTRY esianrtolcdugmphbyfvkwzESIANRTOLCDUGMPHBYFVKWZ'-\nKEY qwertyuiop|asdfghjkl|zxcvbnm\nFORBIDDENWORD !\n";
        let aff = parse_affix_data(text).unwrap();
        assert!(aff.try_chars.starts_with("esianrtolcdugmphbyfvkwz"));
        assert_eq!(aff.key, "qwertyuiop|asdfghjkl|zxcvbnm");
        assert!(aff.forbiddenword.is_some());
    }

    #[test]
    fn test_parse_rep_table() {
        let text = "REP 2\nREP ie ei\nREP alot a_lot\n";
        let aff = parse_affix_data(text).unwrap();
        assert_eq!(aff.rep.conv("recieve"), "receive");
        assert_eq!(aff.rep.conv("alot"), "a lot");
    }

    #[test]
    fn test_parse_affixes() {
        let text = "SFX S Y 1\nSFX S 0 s .\n";
        let aff = parse_affix_data(text).unwrap();
        assert_eq!(aff.suffixes.rules.len(), 1);
        let flag = aff.flag_mode.parse_one("S").unwrap();
        let mut got = Vec::new();
        aff.generate_words_from_root("cat", &[flag], false, |w| got.push(w.to_string()));
        assert!(got.contains(&"cat".to_string()));
        assert!(got.contains(&"cats".to_string()));
    }
}
