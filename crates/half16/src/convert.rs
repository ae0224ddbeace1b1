// Bit-level conversions between the binary16 layout and f32/f64.
// Narrowing rounds to nearest, ties to even; widening is exact.

const F16_EXP_MASK: u16 = 0x7C00;
const F16_MAN_MASK: u16 = 0x03FF;
const F16_QUIET_BIT: u16 = 0x0200;
const F16_MAX_EXP: i32 = 31;

// --- f32 ---

pub(crate) fn f32_to_bits(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exp = ((bits >> 23) & 0xFF) as i32;
    let man = bits & 0x007F_FFFF;

    if exp == 0xFF {
        if man == 0 {
            return sign | F16_EXP_MASK;
        }
        // NaN: keep the top payload bits, force the quiet bit
        let payload = (man >> 13) as u16 & F16_MAN_MASK;
        return sign | F16_EXP_MASK | F16_QUIET_BIT | payload;
    }

    if exp == 0 && man == 0 {
        return sign;
    }

    // rebias from 127 to 15
    let exp16 = exp - 127 + 15;

    if exp16 >= F16_MAX_EXP {
        return sign | F16_EXP_MASK;
    }

    if exp16 <= 0 {
        // below the subnormal range the result is always a signed zero
        if exp16 < -10 {
            return sign;
        }
        let full = (1u32 << 23) | man;
        let shift = 13 + (1 - exp16) as u32;
        return sign | round_shift_u32(full, shift);
    }

    let man16 = round_shift_u32(man, 13);
    if man16 > F16_MAN_MASK {
        // the carry lands in the exponent field; it may push into infinity
        let exp16 = exp16 + 1;
        if exp16 >= F16_MAX_EXP {
            return sign | F16_EXP_MASK;
        }
        return sign | ((exp16 as u16) << 10);
    }

    sign | ((exp16 as u16) << 10) | man16
}

pub(crate) fn bits_to_f32(bits: u16) -> f32 {
    let sign = ((bits & 0x8000) as u32) << 16;
    let exp = ((bits & F16_EXP_MASK) >> 10) as i32;
    let man = (bits & F16_MAN_MASK) as u32;

    if exp == F16_MAX_EXP {
        if man == 0 {
            return f32::from_bits(sign | 0x7F80_0000);
        }
        return f32::from_bits(sign | 0x7F80_0000 | (man << 13));
    }

    if exp == 0 {
        if man == 0 {
            return f32::from_bits(sign);
        }
        // subnormal: normalize into an f32 normal
        let mut man = man;
        let mut exp = -14i32;
        while man & 0x0400 == 0 {
            man <<= 1;
            exp -= 1;
        }
        man &= 0x03FF;
        return f32::from_bits(sign | (((exp + 127) as u32) << 23) | (man << 13));
    }

    f32::from_bits(sign | (((exp - 15 + 127) as u32) << 23) | (man << 13))
}

// --- f64 ---

// Same scheme as the f32 kernel, done directly on the f64 layout so a
// wide source rounds exactly once.
pub(crate) fn f64_to_bits(value: f64) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 48) & 0x8000) as u16;
    let exp = ((bits >> 52) & 0x7FF) as i32;
    let man = bits & 0x000F_FFFF_FFFF_FFFF;

    if exp == 0x7FF {
        if man == 0 {
            return sign | F16_EXP_MASK;
        }
        let payload = (man >> 42) as u16 & F16_MAN_MASK;
        return sign | F16_EXP_MASK | F16_QUIET_BIT | payload;
    }

    if exp == 0 && man == 0 {
        return sign;
    }

    // rebias from 1023 to 15
    let exp16 = exp - 1023 + 15;

    if exp16 >= F16_MAX_EXP {
        return sign | F16_EXP_MASK;
    }

    if exp16 <= 0 {
        if exp16 < -10 {
            return sign;
        }
        let full = (1u64 << 52) | man;
        let shift = 42 + (1 - exp16) as u32;
        return sign | round_shift_u64(full, shift);
    }

    let man16 = round_shift_u64(man, 42);
    if man16 > F16_MAN_MASK {
        let exp16 = exp16 + 1;
        if exp16 >= F16_MAX_EXP {
            return sign | F16_EXP_MASK;
        }
        return sign | ((exp16 as u16) << 10);
    }

    sign | ((exp16 as u16) << 10) | man16
}

pub(crate) fn bits_to_f64(bits: u16) -> f64 {
    let sign = ((bits & 0x8000) as u64) << 48;
    let exp = ((bits & F16_EXP_MASK) >> 10) as i32;
    let man = (bits & F16_MAN_MASK) as u64;

    if exp == F16_MAX_EXP {
        if man == 0 {
            return f64::from_bits(sign | 0x7FF0_0000_0000_0000);
        }
        return f64::from_bits(sign | 0x7FF0_0000_0000_0000 | (man << 42));
    }

    if exp == 0 {
        if man == 0 {
            return f64::from_bits(sign);
        }
        let mut man = man;
        let mut exp = -14i32;
        while man & 0x0400 == 0 {
            man <<= 1;
            exp -= 1;
        }
        man &= 0x03FF;
        return f64::from_bits(sign | (((exp + 1023) as u64) << 52) | (man << 42));
    }

    f64::from_bits(sign | (((exp - 15 + 1023) as u64) << 52) | (man << 42))
}

// --- Rounding helpers ---

// Shift the mantissa right, rounding to nearest with ties to even.
// The caller adds any exponent carry (the result may exceed 10 bits).
fn round_shift_u32(man: u32, shift: u32) -> u16 {
    let round_bit = 1u32 << (shift - 1);
    let sticky = man & (round_bit - 1) != 0;
    let out = (man >> shift) as u16;
    if man & round_bit != 0 && (sticky || out & 1 == 1) {
        out + 1
    } else {
        out
    }
}

fn round_shift_u64(man: u64, shift: u32) -> u16 {
    let round_bit = 1u64 << (shift - 1);
    let sticky = man & (round_bit - 1) != 0;
    let out = (man >> shift) as u16;
    if man & round_bit != 0 && (sticky || out & 1 == 1) {
        out + 1
    } else {
        out
    }
}
