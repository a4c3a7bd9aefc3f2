//! Exact rational arithmetic.
//!
//! A thin wrapper over [`num::BigRational`] so that probabilities never lose
//! precision no matter how many times they are multiplied together. Values
//! are kept in lowest terms by the underlying type after every operation.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num::{BigInt, BigRational, One, ToPrimitive, Zero};

use crate::error::{ArenaError, ArenaResult};

/// An exact fraction with arbitrary precision numerator and denominator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Build `numer / denom` from machine integers.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero. Use [`Rational::checked_div`] for
    /// divisions whose divisor is not a known constant.
    pub fn new(numer: i64, denom: i64) -> Self {
        Self(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    /// The whole number `value`.
    pub fn from_integer(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }

    /// Zero.
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// One.
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Returns true if this value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if this value is exactly one.
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// `1 - self`, the probability of the complementary event.
    pub fn complement(&self) -> Self {
        Self(BigRational::one() - &self.0)
    }

    /// `self * self`.
    pub fn squared(&self) -> Self {
        Self(&self.0 * &self.0)
    }

    /// Divide by `rhs`, failing if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Rational) -> ArenaResult<Self> {
        if rhs.0.is_zero() {
            return Err(ArenaError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// The numerator in lowest terms. Carries the sign.
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// The denominator in lowest terms. Always positive.
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    /// Lossy conversion to a percentage (`0.25` becomes `25.0`).
    pub fn percent(&self) -> f64 {
        let scaled = &self.0 * BigRational::from_integer(BigInt::from(100));
        scaled.to_f64().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0.numer(), self.0.denom())
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, rhs: &'a Rational) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, rhs: &'a Rational) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational(self.0 * rhs.0)
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, rhs: &'a Rational) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}
