use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::RuleParseError;

/// Largest neighbor count a Moore neighborhood can produce.
pub const MAX_NEIGHBORS: u8 = 8;

/// Birth/survive rule in the usual `B3/S23` notation.
///
/// Both sets are stored as bitmasks indexed by neighbor count. Counts above
/// [`MAX_NEIGHBORS`] are never members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    birth: u16,
    survive: u16,
}

impl Rule {
    /// Conway's B3/S23.
    pub const CONWAY: Rule = Rule {
        birth: 1 << 3,
        survive: (1 << 2) | (1 << 3),
    };

    /// Counts above [`MAX_NEIGHBORS`] are dropped.
    pub fn new(birth: &[u8], survive: &[u8]) -> Self {
        Self {
            birth: to_mask(birth),
            survive: to_mask(survive),
        }
    }

    pub fn births(&self, alive_neighbor_count: u8) -> bool {
        contains(self.birth, alive_neighbor_count)
    }

    pub fn survives(&self, alive_neighbor_count: u8) -> bool {
        contains(self.survive, alive_neighbor_count)
    }

    pub fn next_alive_state(&self, alive: bool, alive_neighbor_count: u8) -> bool {
        if alive {
            self.survives(alive_neighbor_count)
        } else {
            self.births(alive_neighbor_count)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::CONWAY
    }
}

fn to_mask(counts: &[u8]) -> u16 {
    counts
        .iter()
        .filter(|count| **count <= MAX_NEIGHBORS)
        .fold(0, |mask, count| mask | (1u16 << *count))
}

fn contains(mask: u16, count: u8) -> bool {
    count <= MAX_NEIGHBORS && mask & (1u16 << count) != 0
}

fn write_counts(f: &mut fmt::Formatter<'_>, mask: u16) -> fmt::Result {
    for count in 0..=MAX_NEIGHBORS {
        if contains(mask, count) {
            write!(f, "{count}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        write_counts(f, self.birth)?;
        f.write_str("/S")?;
        write_counts(f, self.survive)
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut birth = None;
        let mut survive = None;

        for part in s.trim().split('/') {
            let mut chars = part.chars();
            let prefix = chars.next().ok_or(RuleParseError::EmptyPart)?;

            let slot = match prefix.to_ascii_uppercase() {
                'B' => &mut birth,
                'S' => &mut survive,
                other => return Err(RuleParseError::UnknownPrefix(other)),
            };

            if slot.is_some() {
                return Err(RuleParseError::DuplicatePart(prefix.to_ascii_uppercase()));
            }

            let mut mask = 0u16;
            for digit in chars {
                let count = digit
                    .to_digit(10)
                    .filter(|count| *count <= MAX_NEIGHBORS as u32)
                    .ok_or(RuleParseError::InvalidCount(digit))?;
                mask |= 1u16 << count;
            }
            *slot = Some(mask);
        }

        Ok(Self {
            birth: birth.ok_or(RuleParseError::MissingPart('B'))?,
            survive: survive.ok_or(RuleParseError::MissingPart('S'))?,
        })
    }
}

impl TryFrom<String> for Rule {
    type Error = RuleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(value: Rule) -> Self {
        value.to_string()
    }
}
