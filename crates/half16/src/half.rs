use std::{cmp::Ordering, fmt, ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign}};

use crate::convert;

/// An IEEE-754 binary16 (half-precision) floating-point value.
///
/// The 16 bits are the standard layout: 1 sign bit, 5 exponent bits
/// (bias 15), 10 significand bits. Arithmetic widens to f32, runs there,
/// and rounds the result back to half precision (round to nearest, ties
/// to even).
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct Half(u16);

const SIGN_MASK: u16 = 0x8000;
const EXP_MASK: u16 = 0x7C00;
const MAN_MASK: u16 = 0x03FF;

// --- Constants ---

impl Half {
    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    /// 2⁻¹⁰, the distance from 1.0 to the next representable value.
    pub const EPSILON: Self = Self(0x1400);
    pub const PI: Self = Self(0x4248);
    /// Canonical quiet NaN.
    pub const NAN: Self = Self(0x7E00);
    pub const INFINITY: Self = Self(0x7C00);
    pub const NEG_INFINITY: Self = Self(0xFC00);
    /// Greatest finite value, 65504.
    pub const MAX: Self = Self(0x7BFF);
    pub const MIN: Self = Self(0xFBFF);
    /// Least positive normal value, 2⁻¹⁴.
    pub const MIN_POSITIVE: Self = Self(0x0400);
    /// Least positive subnormal value, 2⁻²⁴.
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);
}

// --- Raw access ---

impl Half {
    /// Reinterpret any 16-bit pattern as a half. No validation.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u16 {
        self.0
    }
}

// --- Float conversions ---

impl Half {
    /// Round to the nearest half (ties to even); out-of-range values
    /// saturate to ±infinity.
    pub fn from_f32(value: f32) -> Self {
        Self(convert::f32_to_bits(value))
    }

    /// Round to the nearest half in a single step (never via f32, so no
    /// double rounding).
    pub fn from_f64(value: f64) -> Self {
        Self(convert::f64_to_bits(value))
    }

    /// Exact widening; every half value is representable in f32.
    pub fn to_f32(self) -> f32 {
        convert::bits_to_f32(self.0)
    }

    pub fn to_f64(self) -> f64 {
        convert::bits_to_f64(self.0)
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> f32 {
        value.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(value: Half) -> f64 {
        value.to_f64()
    }
}

// --- Integer conversions (in) ---

impl Half {
    pub fn from_i8(value: i8) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_i16(value: i16) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_i32(value: i32) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_i64(value: i64) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_isize(value: isize) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_u8(value: u8) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_u16(value: u16) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_u32(value: u32) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_usize(value: usize) -> Self {
        Self::from_f64(value as f64)
    }
}

// Every i8/u8 is exactly representable, so From is lossless here.
impl From<i8> for Half {
    fn from(value: i8) -> Half {
        Half::from_i8(value)
    }
}

impl From<u8> for Half {
    fn from(value: u8) -> Half {
        Half::from_u8(value)
    }
}

// --- Integer conversions (out) ---

// Truncation toward zero; NaN gives 0 and out-of-range values saturate,
// the `as` cast semantics.
impl Half {
    pub fn to_i8(self) -> i8 {
        self.to_f32() as i8
    }

    pub fn to_i16(self) -> i16 {
        self.to_f32() as i16
    }

    pub fn to_i32(self) -> i32 {
        self.to_f32() as i32
    }

    pub fn to_i64(self) -> i64 {
        self.to_f32() as i64
    }

    pub fn to_isize(self) -> isize {
        self.to_f32() as isize
    }

    pub fn to_u8(self) -> u8 {
        self.to_f32() as u8
    }

    pub fn to_u16(self) -> u16 {
        self.to_f32() as u16
    }

    pub fn to_u32(self) -> u32 {
        self.to_f32() as u32
    }

    pub fn to_u64(self) -> u64 {
        self.to_f32() as u64
    }

    pub fn to_usize(self) -> usize {
        self.to_f32() as usize
    }
}

// --- Classification ---

impl Half {
    pub const fn is_nan(self) -> bool {
        self.0 & EXP_MASK == EXP_MASK && self.0 & MAN_MASK != 0
    }

    pub const fn is_infinite(self) -> bool {
        self.0 & EXP_MASK == EXP_MASK && self.0 & MAN_MASK == 0
    }

    pub const fn is_finite(self) -> bool {
        self.0 & EXP_MASK != EXP_MASK
    }

    pub const fn is_normal(self) -> bool {
        self.0 & EXP_MASK != 0 && self.0 & EXP_MASK != EXP_MASK
    }

    pub const fn is_subnormal(self) -> bool {
        self.0 & EXP_MASK == 0 && self.0 & MAN_MASK != 0
    }

    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    pub const fn is_sign_positive(self) -> bool {
        self.0 & SIGN_MASK == 0
    }
}

// --- Unary operations ---

impl Half {
    /// Clears the sign bit only; NaN and infinity payloads pass through.
    pub const fn abs(self) -> Self {
        Self(self.0 & !SIGN_MASK)
    }

    /// Square root via f32, rounded back to half. A negative operand
    /// yields NaN.
    pub fn sqrt(self) -> Self {
        Self::from_f32(self.to_f32().sqrt())
    }

    /// `self × a + b`, computed as a widened f32 multiply-then-add with a
    /// single final rounding to half. The f32 intermediate still rounds,
    /// so this is not a true single-rounding fused multiply-add.
    pub fn mul_add(self, a: Half, b: Half) -> Self {
        Self::from_f32(self.to_f32() * a.to_f32() + b.to_f32())
    }

    /// Least value greater than `self`. NaN and +infinity map to
    /// themselves.
    pub fn next_up(self) -> Self {
        if self.is_nan() || self.0 == Self::INFINITY.0 {
            return self;
        }
        // -0 steps up from +0
        let bits = if self.0 == SIGN_MASK { 0 } else { self.0 };
        let increment = ((bits as i16) >> 15) | 1;
        Self(bits.wrapping_add(increment as u16))
    }

    /// Greatest value less than `self`. NaN and -infinity map to
    /// themselves.
    pub fn next_down(self) -> Self {
        -(-self).next_up()
    }
}

// --- Arithmetic operators ---

// Widen to f32, operate there, round back once.

impl Add for Half {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() + rhs.to_f32())
    }
}

impl Sub for Half {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() - rhs.to_f32())
    }
}

impl Mul for Half {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() * rhs.to_f32())
    }
}

impl Div for Half {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() / rhs.to_f32())
    }
}

impl Rem for Half {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() % rhs.to_f32())
    }
}

impl Neg for Half {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_f32(-self.to_f32())
    }
}

// --- Assign operators ---

impl AddAssign for Half {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Half {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Half {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Half {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Half {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// --- Comparisons ---

// IEEE semantics through f32: NaN compares false to everything, and
// -0 == +0.

impl PartialEq for Half {
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Half").field(&self.to_f32()).finish()
    }
}
