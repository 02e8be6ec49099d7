//! Entropy and brute-force estimates.
//!
//! Entropy assumes independent uniform draws from the pool the mode declares,
//! never from the characters that happen to appear in the output.

use std::fmt;

use crate::pass::{Mode, charset};

pub const DEFAULT_GUESSES_PER_SECOND: u64 = 1_000_000_000_000;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// `length * log2(pool_size)`.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Qualitative label for an entropy figure.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Average time to find the password by exhaustive search: half the
/// keyspace at `guesses_per_second`.
pub fn brute_force_estimate(bits: f64, guesses_per_second: u64) -> String {
    let rate = guesses_per_second.max(1) as f64;
    let total_combinations = bits.exp2();
    let expected_attempts = total_combinations / 2.0;
    let seconds = expected_attempts / rate;

    if seconds.is_finite() {
        return format_duration(seconds);
    }

    // 2^bits overflowed f64; work in log10 instead.
    let log10_seconds = (bits - 1.0) * std::f64::consts::LOG10_2 - rate.log10();
    let log10_millions = log10_seconds - YEAR.log10() - 6.0;
    let mut exponent = log10_millions.floor();
    let mut mantissa = 10f64.powf(log10_millions - exponent);
    if mantissa >= 9.95 {
        mantissa /= 10.0;
        exponent += 1.0;
    }
    format!("{mantissa:.1}e{exponent} million years")
}

/// Render a duration in the largest fitting unit, one decimal place.
pub fn format_duration(seconds: f64) -> String {
    if seconds < MINUTE {
        return format!("{seconds:.1} seconds");
    }
    if seconds < HOUR {
        return format!("{:.1} minutes", seconds / MINUTE);
    }
    if seconds < DAY {
        return format!("{:.1} hours", seconds / HOUR);
    }
    if seconds < YEAR {
        return format!("{:.1} days", seconds / DAY);
    }

    let years = seconds / YEAR;
    if years < 1_000.0 {
        format!("{years:.1} years")
    } else if years < 1_000_000.0 {
        format!("{:.1} thousand years", years / 1_000.0)
    } else {
        let millions = years / 1_000_000.0;
        if millions < 1_000_000.0 {
            format!("{millions:.1} million years")
        } else {
            format!("{millions:.1e} million years")
        }
    }
}

/// Statistics for one generated password.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub length: usize,
    pub pool_size: usize,
    pub bits: f64,
    pub guesses_per_second: u64,
}

impl Report {
    pub fn new(length: usize, mode: Mode, guesses_per_second: u64) -> Self {
        let pool_size = charset::size(mode);
        Self {
            length,
            pool_size,
            bits: entropy_bits(length, pool_size),
            guesses_per_second,
        }
    }

    pub fn estimate(&self) -> String {
        brute_force_estimate(self.bits, self.guesses_per_second)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Length: {}", self.length)?;
        writeln!(f, "Character pool: {}", self.pool_size)?;
        writeln!(f, "Estimated entropy: {:.1} bits", self.bits)?;
        writeln!(f, "Strength: {}", strength(self.bits))?;
        write!(
            f,
            "Brute-force resistance ({} guesses/s): {}",
            rate_label(self.guesses_per_second),
            self.estimate()
        )
    }
}

/// `10^k` for exact powers of ten, otherwise comma-grouped digits.
fn rate_label(rate: u64) -> String {
    let mut n = rate;
    let mut k = 0;
    while n >= 10 && n.is_multiple_of(10) {
        n /= 10;
        k += 1;
    }
    if n == 1 && k > 0 {
        format!("10^{k}")
    } else {
        format_number(rate)
    }
}

pub fn format_number(num: u64) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
