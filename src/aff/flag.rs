use anyhow::{anyhow, Result};

/// How flags are spelled out after words in the `.dic` file and after
/// rule lines in the `.aff` file. Hunspell supports four encodings;
/// whichever one `FLAG` selects in the affix file applies to the whole
/// dictionary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlagMode {
    /// Single ASCII/Latin-1 character flags (the default).
    #[default]
    CharFlags,
    /// Two-character flags, e.g. `FLAG long`.
    DoubleCharFlags,
    /// Comma-separated decimal numbers, e.g. `FLAG num`.
    NumericFlags,
    /// Flags are single Unicode codepoints, e.g. `FLAG UTF-8`.
    Utf8Flags,
}

/// A single affix/word flag, normalized to a `u32` regardless of the
/// source `FlagMode`. Numeric flags are stored as-is; char flags store
/// the codepoint; long flags pack both characters into the low 16 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AffixFlag(pub u32);

impl FlagMode {
    /// Parse the flags attached to one dictionary or affix-rule entry.
    pub fn parse(&self, s: &str) -> Result<Vec<AffixFlag>> {
        if s.is_empty() {
            return Ok(Vec::new());
        }
        match self {
            FlagMode::CharFlags => {
                Ok(s.chars().map(|c| AffixFlag(c as u32)).collect())
            }
            FlagMode::Utf8Flags => {
                Ok(s.chars().map(|c| AffixFlag(c as u32)).collect())
            }
            FlagMode::DoubleCharFlags => {
                let chars: Vec<char> = s.chars().collect();
                if chars.len() % 2 != 0 {
                    return Err(anyhow!(
                        "long flag string has odd length: {:?}",
                        s
                    ));
                }
                Ok(chars
                    .chunks(2)
                    .map(|pair| {
                        let hi = pair[0] as u32;
                        let lo = pair[1] as u32;
                        AffixFlag((hi << 16) | lo)
                    })
                    .collect())
            }
            FlagMode::NumericFlags => {
                let mut flags = Vec::new();
                for part in s.split(',') {
                    let part = part.trim();
                    if part.is_empty() {
                        continue;
                    }
                    let n: u32 = part
                        .parse()
                        .map_err(|_| anyhow!("bad numeric flag: {:?}", part))?;
                    flags.push(AffixFlag(n));
                }
                Ok(flags)
            }
        }
    }

    /// Parse a single flag, as used for the global `XXXFLAG` assignment
    /// lines in the affix file (`COMPOUNDBEGIN`, `FORBIDDENWORD`, ...).
    pub fn parse_one(&self, s: &str) -> Result<AffixFlag> {
        let flags = self.parse(s)?;
        if flags.len() != 1 {
            return Err(anyhow!("expected exactly one flag in {:?}", s));
        }
        Ok(flags[0])
    }
}
