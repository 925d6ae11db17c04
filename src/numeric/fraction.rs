// ============================================================================
// Exact Fractions
// Parsing, gcd reduction and addition/subtraction of integer fractions
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable integer fraction.
///
/// The denominator is never zero. A `Fraction` is only guaranteed to be in
/// canonical form (positive denominator, coprime terms, zero as `0/1`) when it
/// comes out of [`Fraction::new`], [`simplify_fraction`] or one of the
/// arithmetic operations. [`parse_fraction`] and [`Fraction::from_parts`] keep
/// the terms exactly as given, so `"2/4"` stays `2/4` until it is combined with
/// something.
///
/// Equality is structural: `2/4 != 1/2`. Compare canonical forms when value
/// equality is meant.
///
/// # Example
/// ```
/// use land_calculator::numeric::{add_fractions, parse_fraction, Fraction};
///
/// let a = parse_fraction("1/10").unwrap();
/// let b = parse_fraction("1/30").unwrap();
/// assert_eq!(add_fractions(a, b).unwrap(), Fraction::new(2, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawFraction")
)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Zero in canonical form (0/1)
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// One (1/1)
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Normalizing constructor. Equivalent to [`simplify_fraction`].
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator == 0`.
    #[inline]
    pub fn new(numerator: i64, denominator: i64) -> NumericResult<Self> {
        simplify_fraction(numerator, denominator)
    }

    /// Build a fraction without reducing it.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator == 0`.
    #[inline]
    pub const fn from_parts(numerator: i64, denominator: i64) -> NumericResult<Self> {
        if denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// True when the value (not just one term) is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        (self.numerator < 0) != (self.denominator < 0) && self.numerator != 0
    }

    /// True when the fraction is already in lowest terms with a positive
    /// denominator, and zero is written as `0/1`.
    pub fn is_canonical(&self) -> bool {
        if self.denominator <= 0 {
            return false;
        }
        if self.numerator == 0 {
            return self.denominator == 1;
        }
        gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs()) == 1
    }

    /// Canonical form of this fraction.
    ///
    /// # Errors
    /// Returns `Overflow` for the single unrepresentable case, `i64::MIN/-1`.
    #[inline]
    pub fn simplify(self) -> NumericResult<Self> {
        simplify_fraction(self.numerator, self.denominator)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition, result in canonical form.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        add_fractions(self, rhs)
    }

    /// Checked subtraction, result in canonical form.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        subtract_fractions(self, rhs)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Floating-point value. Used for display only.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Exact decimal value (up to 28 significant digits).
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        Decimal::from(self.numerator)
            .checked_div(Decimal::from(self.denominator))
            .ok_or(NumericError::Overflow)
    }
}

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Fraction {
    type Err = NumericError;

    /// Parse `"<int>/<int>"` without reducing.
    ///
    /// Each side is read with [`parse_integer_prefix`], so anything after the
    /// leading integer is ignored.
    ///
    /// # Examples
    /// - "3/10" -> 3/10
    /// - "-2/4" -> -2/4
    /// - "1.5/2" -> 1/2
    /// - "3/4 acres" -> 3/4
    /// - "1/0"  -> Err(DivisionByZero)
    /// - "1/2/3" -> Err(InvalidInput)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let (numerator, denominator) = match (parts.next(), parts.next(), parts.next()) {
            (Some(numerator), Some(denominator), None) => (numerator, denominator),
            _ => return Err(NumericError::InvalidInput),
        };

        let numerator = parse_integer_prefix(numerator).ok_or(NumericError::InvalidInput)?;
        let denominator = parse_integer_prefix(denominator).ok_or(NumericError::InvalidInput)?;

        Self::from_parts(numerator, denominator)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawFraction {
    numerator: i64,
    denominator: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFraction> for Fraction {
    type Error = NumericError;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Self::from_parts(raw.numerator, raw.denominator)
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Parse a user-supplied fraction.
///
/// Returns `None` unless there is exactly one `/` and both sides start with
/// an integer, and for a zero denominator. The result is not reduced.
#[inline]
pub fn parse_fraction(text: &str) -> Option<Fraction> {
    text.parse().ok()
}

/// Read the leading base-10 integer of `text`.
///
/// Leading whitespace is skipped and an optional `+`/`-` sign is accepted;
/// reading stops at the first non-digit. Returns `None` when no digit
/// follows, or when the digits do not fit in an i64.
///
/// - "12" -> 12
/// - " -3abc" -> -3
/// - "2.5" -> 2
/// - "abc" -> None
pub fn parse_integer_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits_len = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }
    text[..sign_len + digits_len].parse().ok()
}

/// Greatest common divisor (Euclid). `gcd(a, 0) == a`.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

const fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Reduce `numerator/denominator` to canonical form.
///
/// # Errors
/// - `DivisionByZero` if `denominator == 0`
/// - `Overflow` if the reduced terms do not fit in an i64 (only `i64::MIN/-1`)
#[inline]
pub fn simplify_fraction(numerator: i64, denominator: i64) -> NumericResult<Fraction> {
    reduce(numerator as i128, denominator as i128)
}

/// `f1 + f2` in canonical form.
///
/// Cross products are taken in i128, so only a result whose reduced terms
/// exceed i64 fails.
pub fn add_fractions(f1: Fraction, f2: Fraction) -> NumericResult<Fraction> {
    let (n1, d1, n2, d2) = widen(f1, f2);
    let numerator = (n1 * d2)
        .checked_add(n2 * d1)
        .ok_or(NumericError::Overflow)?;
    reduce(numerator, d1 * d2)
}

/// `f1 - f2` in canonical form.
pub fn subtract_fractions(f1: Fraction, f2: Fraction) -> NumericResult<Fraction> {
    let (n1, d1, n2, d2) = widen(f1, f2);
    let numerator = (n1 * d2)
        .checked_sub(n2 * d1)
        .ok_or(NumericError::Overflow)?;
    reduce(numerator, d1 * d2)
}

#[inline]
fn widen(f1: Fraction, f2: Fraction) -> (i128, i128, i128, i128) {
    (
        f1.numerator as i128,
        f1.denominator as i128,
        f2.numerator as i128,
        f2.denominator as i128,
    )
}

fn reduce(numerator: i128, denominator: i128) -> NumericResult<Fraction> {
    if denominator == 0 {
        return Err(NumericError::DivisionByZero);
    }
    if numerator == 0 {
        return Ok(Fraction::ZERO);
    }

    let divisor = gcd_wide(numerator.unsigned_abs(), denominator.unsigned_abs());
    let divisor = i128::try_from(divisor).map_err(|_| NumericError::Overflow)?;
    let mut num = numerator / divisor;
    let mut den = denominator / divisor;

    if den < 0 {
        num = num.checked_neg().ok_or(NumericError::Overflow)?;
        den = den.checked_neg().ok_or(NumericError::Overflow)?;
    }

    Ok(Fraction {
        numerator: i64::try_from(num).map_err(|_| NumericError::Overflow)?,
        denominator: i64::try_from(den).map_err(|_| NumericError::Overflow)?,
    })
}

// ============================================================================
// Tests
// ============================================================================
