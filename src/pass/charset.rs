//! Character pools, one per mode.
//!
//! Pools never contain a visually ambiguous character, nor two characters
//! that render alike (Latin `A` and Cyrillic `А`). [`validate_pools`] is
//! called once at startup and refuses to run if a table breaks either rule.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::Mode;
use crate::error::{AegurError, Result};

const DIGITS: &str = "23456789";
const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghjkmnpqrstuvwxyz";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

const UNICODE_SYMBOLS: &str = "ΔΘΛΞΠΣΦΨΩ≠≤≥±∫∏√€₹₽₺←→↑↓↔↵¶§";
const GREEK_LOWERCASE: &str = "βγδεζηθλμξπστφψω";
const CYRILLIC_UPPERCASE: &str = "БГДЖИЙЛЦЧШЩЪЫЬЭЮЯ";
const CYRILLIC_LOWERCASE: &str = "бвгджийклмнптцчшщъыьэюя";

/// Zero, one and the letters that pass for them, including Greek and
/// Cyrillic homoglyphs.
pub const AMBIGUOUS: &[char] = &[
    '0', 'O', 'o', '1', 'l', 'I', 'i', // Latin
    'Ο', 'ο', 'Ι', 'ι', // Greek
    'О', 'о', 'І', 'і', // Cyrillic
];

/// Characters that render like another character a pool may hold.
/// A pool may contain at most one side of each pair.
pub const LOOKALIKES: &[(char, char)] = &[
    ('А', 'A'), ('В', 'B'), ('Е', 'E'), ('З', '3'), ('К', 'K'), ('М', 'M'),
    ('Н', 'H'), ('Р', 'P'), ('С', 'C'), ('Т', 'T'), ('У', 'Y'), ('Х', 'X'),
    ('а', 'a'), ('е', 'e'), ('з', '3'), ('р', 'p'), ('с', 'c'), ('у', 'y'),
    ('х', 'x'),
    ('α', 'a'), ('κ', 'k'), ('ν', 'v'), ('ρ', 'p'), ('υ', 'u'), ('χ', 'x'),
    ('П', 'Π'), ('Ф', 'Φ'), ('ф', 'φ'),
];

static BANK: LazyLock<Vec<char>> = LazyLock::new(|| build(&[DIGITS, UPPERCASE, LOWERCASE]));

static ASCII: LazyLock<Vec<char>> =
    LazyLock::new(|| build(&[DIGITS, UPPERCASE, LOWERCASE, SYMBOLS]));

static STRONG: LazyLock<Vec<char>> = LazyLock::new(|| {
    build(&[
        DIGITS,
        UPPERCASE,
        LOWERCASE,
        SYMBOLS,
        UNICODE_SYMBOLS,
        GREEK_LOWERCASE,
        CYRILLIC_UPPERCASE,
        CYRILLIC_LOWERCASE,
    ])
});

fn build(parts: &[&str]) -> Vec<char> {
    parts.iter().flat_map(|p| p.chars()).collect()
}

/// The pool a mode draws from. Paranoid shares the ASCII pool.
pub fn pool_for(mode: Mode) -> &'static [char] {
    match mode {
        Mode::Bank => BANK.as_slice(),
        Mode::AsciiOnly | Mode::Paranoid => ASCII.as_slice(),
        Mode::Strong => STRONG.as_slice(),
    }
}

/// Declared pool size, used for entropy.
pub fn size(mode: Mode) -> usize {
    pool_for(mode).len()
}

/// Check every mode's pool. Run once at startup.
pub fn validate_pools() -> Result<()> {
    for mode in Mode::ALL {
        check_pool(mode.name(), pool_for(mode), AMBIGUOUS, LOOKALIKES)?;
    }
    Ok(())
}

/// Reject an empty pool, a duplicate, any member of `ambiguous`, or both
/// sides of a `lookalikes` pair.
pub fn check_pool(
    name: &str,
    pool: &[char],
    ambiguous: &[char],
    lookalikes: &[(char, char)],
) -> Result<()> {
    if pool.is_empty() {
        return Err(AegurError::pool_integrity(format!("pool '{name}' is empty")));
    }

    if let Some(c) = pool.iter().find(|c| ambiguous.contains(c)) {
        return Err(AegurError::pool_integrity(format!(
            "ambiguous character '{c}' (U+{:04X}) found in pool '{name}'",
            *c as u32
        )));
    }

    if let Some((a, b)) = lookalikes
        .iter()
        .find(|(a, b)| pool.contains(a) && pool.contains(b))
    {
        return Err(AegurError::pool_integrity(format!(
            "look-alike characters '{a}' (U+{:04X}) and '{b}' (U+{:04X}) both in pool '{name}'",
            *a as u32, *b as u32
        )));
    }

    let mut seen = HashSet::with_capacity(pool.len());
    if let Some(c) = pool.iter().find(|c| !seen.insert(**c)) {
        return Err(AegurError::pool_integrity(format!(
            "duplicate character '{c}' in pool '{name}'"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_pools_are_valid() {
        validate_pools().unwrap();
    }

    #[test]
    fn pools_have_no_ambiguous_or_duplicate_chars() {
        for mode in Mode::ALL {
            let pool = pool_for(mode);
            assert!(pool.iter().all(|c| !AMBIGUOUS.contains(c)), "{mode}");
            let unique: HashSet<_> = pool.iter().collect();
            assert_eq!(unique.len(), pool.len(), "{mode}");
        }
    }

    #[test]
    fn declared_sizes() {
        assert_eq!(size(Mode::Bank), 55);
        assert_eq!(size(Mode::AsciiOnly), 81);
        assert_eq!(size(Mode::Paranoid), 81);
        assert_eq!(size(Mode::Strong), 165);
    }

    #[test]
    fn pool_for_is_stable() {
        for mode in Mode::ALL {
            assert!(std::ptr::eq(pool_for(mode), pool_for(mode)));
        }
    }

    #[test]
    fn paranoid_shares_ascii_pool() {
        assert_eq!(pool_for(Mode::Paranoid), pool_for(Mode::AsciiOnly));
    }

    #[test]
    fn bank_pool_is_alphanumeric() {
        assert!(pool_for(Mode::Bank).iter().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn ambiguous_char_is_rejected() {
        let dirty: Vec<char> = "abc0".chars().collect();
        let err = check_pool("dirty", &dirty, AMBIGUOUS, LOOKALIKES).unwrap_err();
        assert!(matches!(err, AegurError::PoolIntegrity { .. }));
        assert!(err.to_string().contains("'0'"));
    }

    #[test]
    fn cyrillic_homoglyph_is_rejected() {
        let dirty: Vec<char> = "abО".chars().collect();
        assert!(check_pool("dirty", &dirty, AMBIGUOUS, LOOKALIKES).is_err());
    }

    #[test]
    fn no_pool_holds_both_sides_of_a_lookalike_pair() {
        for mode in Mode::ALL {
            let pool = pool_for(mode);
            let pairs: Vec<_> = LOOKALIKES
                .iter()
                .filter(|(a, b)| pool.contains(a) && pool.contains(b))
                .collect();
            assert!(pairs.is_empty(), "{mode}: {pairs:?}");
        }
    }

    #[test]
    fn strong_pool_has_no_latin_twins() {
        let pool = pool_for(Mode::Strong);
        for twin in ['А', 'В', 'Е', 'а', 'р', 'х', 'κ', 'ρ', 'χ', 'Ф'] {
            assert!(!pool.contains(&twin), "{twin}");
        }
    }

    #[test]
    fn lookalike_pair_is_rejected() {
        let dirty: Vec<char> = "ABCА".chars().collect();
        let err = check_pool("dirty", &dirty, AMBIGUOUS, LOOKALIKES).unwrap_err();
        assert!(matches!(err, AegurError::PoolIntegrity { .. }));
        assert!(err.to_string().contains("look-alike"));
    }

    #[test]
    fn one_side_of_a_pair_is_allowed() {
        let pool: Vec<char> = "БА".chars().collect();
        check_pool("cyrillic", &pool, AMBIGUOUS, LOOKALIKES).unwrap();
    }

    #[test]
    fn duplicate_is_rejected() {
        let dup: Vec<char> = "abca".chars().collect();
        let err = check_pool("dup", &dup, AMBIGUOUS, LOOKALIKES).unwrap_err();
        assert!(err.to_string().contains("duplicate character 'a'"));
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(check_pool("empty", &[], AMBIGUOUS, LOOKALIKES).is_err());
    }
}
