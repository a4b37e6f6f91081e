use std::fmt;

use crate::{
    config::FractionConfig,
    error::{Error, Result},
};

/// A rational number in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::ZeroDenominator);
        }

        let divisor = gcd(numerator, denominator);
        let (mut numerator, mut denominator) = (numerator / divisor, denominator / divisor);
        if denominator < 0 {
            let value = numerator as f64 / denominator as f64;
            numerator = numerator
                .checked_neg()
                .ok_or(Error::FractionOverflow(value))?;
            denominator = denominator
                .checked_neg()
                .ok_or(Error::FractionOverflow(value))?;
        }

        Ok(Fraction {
            numerator,
            denominator,
        })
    }

    /// Approximates `value` by searching for the smallest denominator that
    /// brings its fractional part within `config.tolerance` of an integer.
    ///
    /// Falls back to the integer part alone if no denominator below
    /// `config.max_denominator` fits.
    pub fn from_decimal(value: f64, config: &FractionConfig) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NonFinite(value));
        }

        let whole = value.trunc();
        if whole.abs() >= i64::MAX as f64 {
            return Err(Error::FractionOverflow(value));
        }
        let whole = whole as i64;
        let remainder = value - whole as f64;

        for denominator in 2..config.max_denominator {
            let scaled = remainder * denominator as f64;
            let rounded = scaled.round();
            if (scaled - rounded).abs() < config.tolerance {
                let numerator = whole
                    .checked_mul(denominator)
                    .and_then(|n| n.checked_add(rounded as i64))
                    .ok_or(Error::FractionOverflow(value))?;
                return Fraction::new(numerator, denominator);
            }
        }

        Fraction::new(whole, 1)
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Non-negative greatest common divisor. `b` must be non-zero.
fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // Only gcd(i64::MIN, i64::MIN) does not fit back into i64.
    i64::try_from(a).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(value: f64) -> Fraction {
        Fraction::from_decimal(value, &FractionConfig::default()).unwrap()
    }

    #[test]
    fn test_reduction() {
        let fraction = Fraction::new(6, 8).unwrap();
        assert_eq!((fraction.numerator(), fraction.denominator()), (3, 4));
        assert_eq!(Fraction::new(0, 5).unwrap(), Fraction::new(0, 1).unwrap());
    }

    #[test]
    fn test_sign_is_on_numerator() {
        let fraction = Fraction::new(1, -2).unwrap();
        assert_eq!((fraction.numerator(), fraction.denominator()), (-1, 2));
        let fraction = Fraction::new(-3, -9).unwrap();
        assert_eq!((fraction.numerator(), fraction.denominator()), (1, 3));
    }

    #[test]
    fn test_zero_denominator() {
        assert!(matches!(Fraction::new(1, 0), Err(Error::ZeroDenominator)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::new(4, 2).unwrap().to_string(), "2");
        assert_eq!(Fraction::new(-7, 3).unwrap().to_string(), "-7/3");
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(convert(0.5), Fraction::new(1, 2).unwrap());
        assert_eq!(convert(2.0), Fraction::new(2, 1).unwrap());
        assert_eq!(convert(2.0).to_string(), "2");
        assert_eq!(convert(0.0).to_string(), "0");
        assert_eq!(convert(1.25), Fraction::new(5, 4).unwrap());
        assert_eq!(convert(-0.5), Fraction::new(-1, 2).unwrap());
        assert_eq!(convert(-2.75), Fraction::new(-11, 4).unwrap());
    }

    #[test]
    fn test_from_decimal_is_approximate() {
        let fraction = convert(0.3333);
        assert!((fraction.to_f64() - 0.3333).abs() < 1e-4);

        let fraction = convert(1.0 / 3.0);
        assert_eq!(fraction, Fraction::new(1, 3).unwrap());

        let fraction = convert(std::f64::consts::PI);
        assert!((fraction.to_f64() - std::f64::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn test_fallback_to_whole_part() {
        let config = FractionConfig {
            tolerance: 1e-12,
            max_denominator: 10,
        };
        let fraction = Fraction::from_decimal(5.4321, &config).unwrap();
        assert_eq!(fraction.to_string(), "5");
    }

    #[test]
    fn test_rejects_unrepresentable() {
        let config = FractionConfig::default();
        assert!(matches!(
            Fraction::from_decimal(f64::NAN, &config),
            Err(Error::NonFinite(_))
        ));
        assert!(matches!(
            Fraction::from_decimal(f64::NEG_INFINITY, &config),
            Err(Error::NonFinite(_))
        ));
        assert!(matches!(
            Fraction::from_decimal(1e300, &config),
            Err(Error::FractionOverflow(_))
        ));
    }
}
