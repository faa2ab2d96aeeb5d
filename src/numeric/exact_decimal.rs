// ============================================================================
// Exact Decimal
// Arbitrary-precision base-10 arithmetic with explicit rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding_mode::RoundingMode;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Arbitrary-precision decimal number.
///
/// Internally stores `unscaled × 10^-scale` where `unscaled` is an unbounded
/// signed integer. Addition, subtraction and multiplication are exact; the
/// only operations that can discard digits are [`ExactDecimal::round_to`] and
/// [`ExactDecimal::checked_div`], both of which take an explicit scale and
/// [`RoundingMode`].
///
/// Equality and ordering compare numeric values, so `1.50 == 1.5`. The scale
/// is still observable through [`ExactDecimal::scale`] and the `Display`
/// output, which keeps every stored fractional digit.
///
/// # Example
/// ```
/// use decimal_calculator::numeric::{ExactDecimal, RoundingMode};
///
/// let a: ExactDecimal = "10".parse().unwrap();
/// let b: ExactDecimal = "3".parse().unwrap();
/// let q = a.checked_div(&b, 6, RoundingMode::HalfUp).unwrap();
/// assert_eq!(q.to_string(), "3.333333");
/// ```
#[derive(Clone)]
pub struct ExactDecimal {
    unscaled: BigInt,
    scale: u32,
}

/// Largest scale rust_decimal::Decimal can carry
const DECIMAL_MAX_SCALE: u32 = 28;

/// Compute 10^n as a BigInt
fn pow10(n: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u32), n as usize)
}

/// Divide `num` by `den` (non-zero), resolving the remainder with `mode`.
fn div_rounded(num: &BigInt, den: &BigInt, mode: RoundingMode) -> BigInt {
    // Truncating division: quotient rounds toward zero
    let (quotient, remainder) = num.div_rem(den);
    if remainder.is_zero() {
        return quotient;
    }

    let twice_remainder = remainder.abs() * BigInt::from(2u32);
    let divisor = den.abs();

    let away_from_zero = match mode {
        RoundingMode::Down => false,
        RoundingMode::Up => true,
        RoundingMode::HalfUp => twice_remainder >= divisor,
        RoundingMode::HalfEven => match twice_remainder.cmp(&divisor) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => quotient.is_odd(),
        },
    };

    if !away_from_zero {
        quotient
    } else if num.is_negative() != den.is_negative() {
        quotient - BigInt::one()
    } else {
        quotient + BigInt::one()
    }
}

impl ExactDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an unscaled integer and a scale: `unscaled × 10^-scale`.
    pub fn new(unscaled: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }

    /// Zero with scale 0
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// One with scale 0
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// Create an integral value with scale 0.
    pub fn from_integer(value: i64) -> Self {
        Self::new(value, 0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of stored fractional digits.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The unscaled integer (`self × 10^scale`).
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.unscaled.is_positive()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.unscaled.abs(), self.scale)
    }

    /// Integer part, truncated toward zero, with scale 0.
    pub fn trunc(&self) -> Self {
        self.round_to(0, RoundingMode::Down)
    }

    /// Fractional part, carrying the sign of `self` (`-2.5 -> -0.5`).
    pub fn fract(&self) -> Self {
        self - &self.trunc()
    }

    /// True if the value is a whole number.
    pub fn is_integer(&self) -> bool {
        self.fract().is_zero()
    }

    /// True if the value is a whole number divisible by two.
    pub fn is_even_integer(&self) -> bool {
        self.is_integer() && self.trunc().unscaled.is_even()
    }

    /// Same value with trailing fractional zeros removed.
    pub fn normalized(&self) -> Self {
        let ten = BigInt::from(10u32);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;

        while scale > 0 {
            let (quotient, remainder) = unscaled.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            unscaled = quotient;
            scale -= 1;
        }

        Self { unscaled, scale }
    }

    /// Unscaled value expressed at a scale no smaller than `self.scale`.
    fn unscaled_at(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            self.unscaled.clone()
        } else {
            &self.unscaled * pow10(scale - self.scale)
        }
    }

    // ========================================================================
    // Rounding and Division
    // ========================================================================

    /// Bring the value to exactly `scale` fractional digits.
    ///
    /// Increasing the scale is exact; decreasing it resolves the discarded
    /// digits with `mode`.
    pub fn round_to(&self, scale: u32, mode: RoundingMode) -> Self {
        if scale >= self.scale {
            return Self::new(self.unscaled_at(scale), scale);
        }

        let divisor = pow10(self.scale - scale);
        Self::new(div_rounded(&self.unscaled, &divisor, mode), scale)
    }

    /// Divide, producing a quotient with exactly `scale` fractional digits.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(
        &self,
        rhs: &Self,
        scale: u32,
        mode: RoundingMode,
    ) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        // self / rhs * 10^scale = (a / b) * 10^(scale + rhs.scale - self.scale)
        let exponent = i64::from(scale) + i64::from(rhs.scale) - i64::from(self.scale);
        let shift = u32::try_from(exponent.unsigned_abs()).map_err(|_| NumericError::Overflow)?;

        let (numerator, denominator) = if exponent >= 0 {
            (&self.unscaled * pow10(shift), rhs.unscaled.clone())
        } else {
            (self.unscaled.clone(), &rhs.unscaled * pow10(shift))
        };

        Ok(Self::new(div_rounded(&numerator, &denominator, mode), scale))
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

// ============================================================================
// Arithmetic Operators (exact)
// ============================================================================

impl Add for &ExactDecimal {
    type Output = ExactDecimal;

    fn add(self, rhs: Self) -> ExactDecimal {
        let scale = self.scale.max(rhs.scale);
        ExactDecimal::new(self.unscaled_at(scale) + rhs.unscaled_at(scale), scale)
    }
}

impl Sub for &ExactDecimal {
    type Output = ExactDecimal;

    fn sub(self, rhs: Self) -> ExactDecimal {
        let scale = self.scale.max(rhs.scale);
        ExactDecimal::new(self.unscaled_at(scale) - rhs.unscaled_at(scale), scale)
    }
}

impl Mul for &ExactDecimal {
    type Output = ExactDecimal;

    fn mul(self, rhs: Self) -> ExactDecimal {
        ExactDecimal::new(&self.unscaled * &rhs.unscaled, self.scale + rhs.scale)
    }
}

impl Add for ExactDecimal {
    type Output = ExactDecimal;

    #[inline]
    fn add(self, rhs: Self) -> ExactDecimal {
        &self + &rhs
    }
}

impl Sub for ExactDecimal {
    type Output = ExactDecimal;

    #[inline]
    fn sub(self, rhs: Self) -> ExactDecimal {
        &self - &rhs
    }
}

impl Mul for ExactDecimal {
    type Output = ExactDecimal;

    #[inline]
    fn mul(self, rhs: Self) -> ExactDecimal {
        &self * &rhs
    }
}

impl Neg for &ExactDecimal {
    type Output = ExactDecimal;

    fn neg(self) -> ExactDecimal {
        ExactDecimal::new(-&self.unscaled, self.scale)
    }
}

impl Neg for ExactDecimal {
    type Output = ExactDecimal;

    fn neg(self) -> ExactDecimal {
        ExactDecimal::new(-self.unscaled, self.scale)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ExactDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for ExactDecimal {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.unscaled.cmp(&other.unscaled),
            Ordering::Less => self.unscaled_at(other.scale).cmp(&other.unscaled),
            Ordering::Greater => self.unscaled.cmp(&other.unscaled_at(self.scale)),
        }
    }
}

impl Hash for ExactDecimal {
    // Hash the normalized form so equal values hash alike
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactDecimal({}, scale={})", self, self.scale)
    }
}

/// Plain positional notation, never exponential. Keeps every stored
/// fractional digit: `ExactDecimal::new(1500, 3)` renders as `1.500`.
impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_string();
        let scale = self.scale as usize;

        if self.unscaled.is_negative() {
            f.write_str("-")?;
        }

        if scale == 0 {
            f.write_str(&digits)
        } else if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", int_part, frac_part)
        } else {
            // Handle 0.00xxx case
            write!(f, "0.{:0>width$}", digits, width = scale)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for ExactDecimal {
    type Err = NumericError;

    /// Parse plain decimal notation: `-?[0-9]+(\.[0-9]*)?`.
    ///
    /// The scale is the number of digits written after the point, trailing
    /// zeros included. Whitespace, a leading `+`, a bare `.5`, and exponents
    /// are all rejected.
    ///
    /// # Examples
    /// - "123" -> 123 (scale 0)
    /// - "123.4500" -> 123.4500 (scale 4)
    /// - "-0.001" -> -0.001 (scale 3)
    /// - "7." -> 7 (scale 0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (is_negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = body.split_once('.').unwrap_or((body, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_str.is_empty() || !all_digits(int_str) || !all_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }

        let digits = format!("{}{}", int_str, frac_str);
        let magnitude =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(NumericError::InvalidInput)?;
        let scale = u32::try_from(frac_str.len()).map_err(|_| NumericError::Overflow)?;

        let unscaled = if is_negative { -magnitude } else { magnitude };
        Ok(Self::new(unscaled, scale))
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl ExactDecimal {
    /// Convert from rust_decimal::Decimal. Always exact.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::new(d.mantissa(), d.scale())
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `Overflow` if the unscaled value does not fit 96 bits
    /// - `PrecisionLoss` if the scale exceeds 28 and cannot be reduced exactly
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let candidate = if self.scale > DECIMAL_MAX_SCALE {
            let normalized = self.normalized();
            if normalized.scale > DECIMAL_MAX_SCALE {
                return Err(NumericError::PrecisionLoss);
            }
            normalized
        } else {
            self.clone()
        };

        let mantissa = candidate.unscaled.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, candidate.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Serde (string form, so no digits are lost in transit)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ExactDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ExactDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_constants() {
        assert!(ExactDecimal::zero().is_zero());
        assert_eq!(ExactDecimal::one(), ExactDecimal::from_integer(1));
        assert_eq!(ExactDecimal::default(), ExactDecimal::zero());
    }

    #[test]
    fn test_from_str() {
        let x = dec("123.456");
        assert_eq!(x.scale(), 3);
        assert_eq!(x.unscaled(), &BigInt::from(123_456));

        let y = dec("-0.001");
        assert!(y.is_negative());
        assert_eq!(y.to_string(), "-0.001");

        let z = dec("42");
        assert_eq!(z.scale(), 0);
        assert_eq!(z, ExactDecimal::from_integer(42));

        // Trailing point, trailing zeros kept in the scale
        assert_eq!(dec("7.").scale(), 0);
        assert_eq!(dec("1.500").scale(), 3);
    }

    #[test]
    fn test_from_str_invalid() {
        for input in ["", "-", ".5", "+1", "1.2.3", "1e5", " 1", "1 ", "--1", "abc", "1,5"] {
            let result: Result<ExactDecimal, _> = input.parse();
            assert_eq!(result, Err(NumericError::InvalidInput), "input {:?}", input);
        }
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let x = dec("-0.000");
        assert!(x.is_zero());
        assert!(!x.is_negative());
        assert_eq!(x.to_string(), "0.000");
    }

    #[test]
    fn test_exact_arithmetic() {
        assert_eq!(&dec("0.1") + &dec("0.2"), dec("0.3"));
        assert_eq!(&dec("1") - &dec("1.0000000001"), dec("-0.0000000001"));

        // 1.5 * 1.5 = 2.25
        let product = &dec("1.5") * &dec("1.5");
        assert_eq!(product.to_string(), "2.25");

        // Scales add on multiplication, nothing is dropped
        let wide = &dec("123456789012.1234567891") * &dec("0.1234567891");
        assert_eq!(wide.scale(), 20);
        assert_eq!(wide.to_string(), "15241578764.03292294797488187881");
    }

    #[test]
    fn test_comparison_by_value() {
        assert_eq!(dec("1.50"), dec("1.5"));
        assert!(dec("-1.01") < dec("-1"));
        assert!(dec("1000000000000.000001") > dec("1000000000000"));
        assert_eq!(dec("2").min(dec("1.999")), dec("1.999"));
        assert_eq!(dec("2").max(dec("1.999")), dec("2"));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(dec("1.50"));
        assert!(set.contains(&dec("1.5")));
        assert!(set.contains(&dec("1.500000")));
    }

    #[test]
    fn test_round_to_modes() {
        let cases = [
            ("2.5", RoundingMode::HalfUp, "3"),
            ("-2.5", RoundingMode::HalfUp, "-3"),
            ("2.5", RoundingMode::HalfEven, "2"),
            ("3.5", RoundingMode::HalfEven, "4"),
            ("-2.5", RoundingMode::HalfEven, "-2"),
            ("2.9", RoundingMode::Down, "2"),
            ("-2.9", RoundingMode::Down, "-2"),
            ("2.1", RoundingMode::Up, "3"),
            ("-2.1", RoundingMode::Up, "-3"),
            ("2.0", RoundingMode::Up, "2"),
        ];

        for (input, mode, expected) in cases {
            assert_eq!(
                dec(input).round_to(0, mode).to_string(),
                expected,
                "{} {}",
                input,
                mode
            );
        }
    }

    #[test]
    fn test_round_to_increases_scale_exactly() {
        let x = dec("1.5").round_to(10, RoundingMode::HalfUp);
        assert_eq!(x.scale(), 10);
        assert_eq!(x.to_string(), "1.5000000000");
    }

    #[test]
    fn test_checked_div() {
        let q = dec("10").checked_div(&dec("3"), 6, RoundingMode::HalfUp).unwrap();
        assert_eq!(q.to_string(), "3.333333");

        let q = dec("2").checked_div(&dec("3"), 6, RoundingMode::HalfUp).unwrap();
        assert_eq!(q.to_string(), "0.666667");

        let q = dec("-2").checked_div(&dec("3"), 6, RoundingMode::HalfUp).unwrap();
        assert_eq!(q.to_string(), "-0.666667");

        // Dividend with more digits than the target scale
        let q = dec("0.0000015").checked_div(&dec("1"), 6, RoundingMode::HalfUp).unwrap();
        assert_eq!(q.to_string(), "0.000002");

        let q = dec("1").checked_div(&dec("0.0001"), 6, RoundingMode::HalfUp).unwrap();
        assert_eq!(q, dec("10000"));
    }

    #[test]
    fn test_checked_div_by_zero() {
        for dividend in ["1", "-1", "0"] {
            let result = dec(dividend).checked_div(&dec("0.000"), 6, RoundingMode::HalfUp);
            assert_eq!(result, Err(NumericError::DivisionByZero));
        }
    }

    #[test]
    fn test_trunc_and_fract() {
        let x = dec("-2.75");
        assert_eq!(x.trunc(), dec("-2"));
        assert_eq!(x.fract(), dec("-0.75"));
        assert!(dec("4.000").is_even_integer());
        assert!(!dec("3").is_even_integer());
        assert!(!dec("4.5").is_even_integer());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExactDecimal::new(123_456, 3).to_string(), "123.456");
        assert_eq!(ExactDecimal::new(5, 4).to_string(), "0.0005");
        assert_eq!(ExactDecimal::new(-5, 4).to_string(), "-0.0005");
        assert_eq!(ExactDecimal::new(0, 2).to_string(), "0.00");

        let large = dec("1000000000000000000000000000000");
        assert!(!large.to_string().contains('e'));
    }

    #[test]
    fn test_normalized() {
        let x = dec("12.3400").normalized();
        assert_eq!(x.scale(), 2);
        assert_eq!(dec("100").normalized().scale(), 0);
        assert_eq!(dec("0.000").normalized().scale(), 0);
    }

    #[test]
    fn test_negation_and_abs() {
        let x = dec("100.5");
        assert_eq!(-&x, dec("-100.5"));
        assert_eq!((-x.clone()).abs(), x);
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2); // 123.45
        let x = ExactDecimal::from_decimal(d);
        assert_eq!(x, dec("123.45"));
        assert_eq!(x.scale(), 2);
    }

    #[test]
    fn test_to_decimal() {
        use rust_decimal::Decimal;

        let x = dec("123.4560");
        assert_eq!(x.to_decimal().unwrap(), Decimal::new(1_234_560, 4));

        let too_wide = dec("1000000000000000000000000000000000");
        assert_eq!(too_wide.to_decimal(), Err(NumericError::Overflow));

        let too_fine = ExactDecimal::new(1, 30);
        assert_eq!(too_fine.to_decimal(), Err(NumericError::PrecisionLoss));

        let reducible = ExactDecimal::new(BigInt::from(10u32).pow(5), 32);
        assert_eq!(reducible.to_decimal().unwrap(), Decimal::new(1, 27));
    }
}
