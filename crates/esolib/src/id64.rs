//! 64-bit identifiers carried through Lua numbers.
//!
//! Lua 5.1 only has doubles, which cannot represent every `u64`. Instead of
//! converting, an identifier's raw bits are stored in the 8-byte number slot
//! and pulled back out bit for bit. The resulting Lua number is meaningless
//! as a quantity and must only be passed back into these functions.
//!
//! Parsing never fails: text without leading digits yields zero and values
//! beyond `u64::MAX` saturate.

use crate::config::NumberPolicy;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Longest decimal form of an identifier (`18446744073709551615`).
pub const MAX_DECIMAL_LEN: usize = 20;

const _: () = assert!(std::mem::size_of::<f64>() == std::mem::size_of::<u64>());

/// An opaque 64-bit identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Id64(pub u64);

impl Id64 {
    pub const ZERO: Id64 = Id64(0);
    pub const MAX: Id64 = Id64(u64::MAX);

    /// Reinterpret a carrier number's bits as an identifier.
    pub fn from_carrier(carrier: f64) -> Self {
        Id64(carrier.to_bits())
    }

    /// Reinterpret the identifier's bits as a carrier number.
    pub fn to_carrier(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Derive an identifier from an actual numeric quantity.
    pub fn from_number(value: f64, policy: NumberPolicy) -> Self {
        match policy {
            // `as` saturates: NaN and negatives map to 0, +inf to u64::MAX.
            NumberPolicy::TruncatingCast => Id64(value as u64),
            NumberPolicy::DecimalText => parse_id64(&format!("{:.0}", value)),
        }
    }
}

impl From<u64> for Id64 {
    fn from(value: u64) -> Self {
        Id64(value)
    }
}

impl From<Id64> for u64 {
    fn from(id: Id64) -> Self {
        id.0
    }
}

impl fmt::Display for Id64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Id64 {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_id64(s))
    }
}

/// Parse the leading decimal digits of `s` the way `strtoull` does.
///
/// Leading whitespace and one sign are accepted and parsing stops at the
/// first non-digit. No digits yields zero. Overflow clamps to `u64::MAX`,
/// otherwise a `-` negates modulo 2^64, so `"-1"` is `u64::MAX`.
pub fn parse_id64(s: &str) -> Id64 {
    let rest = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value = 0u64;
    let mut overflow = false;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
        {
            Some(v) => value = v,
            None => overflow = true,
        }
    }

    if overflow {
        Id64::MAX
    } else if negative {
        Id64(value.wrapping_neg())
    } else {
        Id64(value)
    }
}

/// `StringToId64`: parse decimal text into a carrier number.
pub fn string_to_carrier(s: &str) -> f64 {
    parse_id64(s).to_carrier()
}

/// `Id64ToString`: format a carrier number as decimal text.
pub fn carrier_to_string(carrier: f64) -> String {
    Id64::from_carrier(carrier).to_string()
}

/// `CompareId64s`: unsigned comparison of two carriers, as -1, 0 or 1.
pub fn compare_carriers(a: f64, b: f64) -> i32 {
    ordering_to_int(Id64::from_carrier(a).cmp(&Id64::from_carrier(b)))
}

/// `CompareId64ToNumber`: compare a carrier against a plain number.
///
/// The identifier side is lossy for numbers needing more than 15 significant
/// digits, whichever policy is used.
pub fn compare_carrier_to_number(a: f64, b: f64, policy: NumberPolicy) -> i32 {
    ordering_to_int(Id64::from_carrier(a).cmp(&Id64::from_number(b, policy)))
}

fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
