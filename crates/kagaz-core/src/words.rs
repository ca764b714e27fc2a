//! # Amount-in-Words Formatter
//!
//! Spells out an integer rupee amount in English words using the Indian
//! numbering system.
//!
//! ## Indian Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Western:  123,456,789   →  million / thousand (3-digit groups)         │
//! │  Indian:  12,34,56,789   →  crore / lakh / thousand (2-2-3 groups)      │
//! │                                                                         │
//! │  12,34,56,789 = 12 Crore  34 Lakh  56 Thousand  7 Hundred  89           │
//! │                 (10^7)    (10^5)   (10^3)       (10^2)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Groups are extracted crore-first by integer division; each non-zero
//! group contributes its words plus the place name. A final 1-99 remainder
//! is joined with "and" only when some higher group was emitted:
//! `1,00,001` → "One Lakh and One", but `21` → "Twenty One".
//!
//! The formatter is total: zero and out-of-range amounts return sentinel
//! words rather than errors, and nothing here can panic.

use crate::MAX_WORDS_AMOUNT;

/// Word returned for an amount of exactly zero.
pub const ZERO_WORD: &str = "Zero";

/// Sentinel returned for amounts above [`MAX_WORDS_AMOUNT`].
///
/// An explicit upper-bound policy: the caller decides whether to show it
/// or reject the export.
pub const OVERFLOW_WORD: &str = "Overflow";

/// Direct words for 0-19. Index 0 is empty: zero is only spelled at the
/// top level, never inside a group.
const ONES: [&str; 20] = [
    "",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

/// Tens words indexed by the tens digit; 0 and 1 are unused (covered by
/// the direct table).
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Words for a 0-99 value: direct lookup below twenty, otherwise
/// tens word plus units word, with the units word omitted when the units
/// digit is zero.
fn two_digit_words(n: u64) -> String {
    debug_assert!(n < 100);

    if n < 20 {
        return ONES[n as usize].to_string();
    }

    let units = n % 10;
    if units == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[units as usize])
    }
}

/// Spells a non-negative rupee amount in English words, Indian grouping.
///
/// ## Edge Policy
/// - `0` → `"Zero"`
/// - anything above `999,999,999` → `"Overflow"` (never an error)
///
/// ## Examples
/// ```rust
/// use kagaz_core::words::amount_to_words;
///
/// assert_eq!(amount_to_words(20), "Twenty");
/// assert_eq!(amount_to_words(100), "One Hundred");
/// assert_eq!(
///     amount_to_words(1_234_567),
///     "Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven"
/// );
/// ```
pub fn amount_to_words(amount: u64) -> String {
    if amount == 0 {
        return ZERO_WORD.to_string();
    }
    if amount > MAX_WORDS_AMOUNT {
        return OVERFLOW_WORD.to_string();
    }

    let mut rem = amount;
    let crore = rem / 10_000_000;
    rem %= 10_000_000;
    let lakh = rem / 100_000;
    rem %= 100_000;
    let thousand = rem / 1_000;
    rem %= 1_000;
    let hundred = rem / 100;
    rem %= 100;

    let mut out = String::new();

    if crore > 0 {
        out.push_str(&two_digit_words(crore));
        out.push_str(" Crore ");
    }
    if lakh > 0 {
        out.push_str(&two_digit_words(lakh));
        out.push_str(" Lakh ");
    }
    if thousand > 0 {
        out.push_str(&two_digit_words(thousand));
        out.push_str(" Thousand ");
    }
    if hundred > 0 {
        // The hundreds group is a single digit, direct lookup.
        out.push_str(ONES[hundred as usize]);
        out.push_str(" Hundred ");
    }
    if rem > 0 {
        if !out.is_empty() {
            out.push_str("and ");
        }
        out.push_str(&two_digit_words(rem));
    }

    out.trim_end().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
