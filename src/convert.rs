extern crate either;

use either::Either;

use crate::{Exception, Float, FloatConstant, FloatConstructor, FloatFormat, FloatGetter};

/// Converts a binary32 bit pattern to the nearest binary16 bit
/// pattern under round-to-nearest, ties-to-even. Total over all
/// inputs; NaN payloads collapse to a significand of 1.
pub fn narrow_to_binary16(bits: u32) -> u16 {
    Float::new(bits).narrow().bits()
}

impl Float<u32> {
    pub fn narrow(self) -> Float<u16> {
        self.narrow_with_flags().0
    }

    /// Same conversion, also reporting the IEEE exception flags the
    /// operation raises.
    pub fn narrow_with_flags(self) -> (Float<u16>, Exception) {
        let sign = self.sign();

        let (exp, sig) = match self.narrowed_exponent() {
            Either::Left(done) => return done,
            Either::Right(pair) => pair,
        };

        if exp > 0 {
            narrow_normal(sign, exp, sig)
        } else {
            narrow_subnormal(sign, exp, sig)
        }
    }

    /// Separates the inputs whose result is fixed by class or
    /// exponent alone from those that still need rounding. `Right`
    /// carries the target biased exponent and the 23-bit significand.
    fn narrowed_exponent(self) -> Either<(Float<u16>, Exception), (i32, u32)> {
        let sign = self.sign();
        let exp = self.exp() as i32 - Float::<u32>::bias() as i32;

        if self.is_nan() {
            let flags = if self.is_signal_nan() {
                Exception::invalid()
            } else {
                Exception::none()
            };
            let nan = Float::<u16>::constructor(sign, Float::<u16>::exp_max(), 1);
            return Either::Left((nan, flags));
        }

        if self.is_inf() {
            return Either::Left((Float::<u16>::infinite(sign), Exception::none()));
        }

        if self.is_zero() {
            return Either::Left((Float::<u16>::zero(sign), Exception::none()));
        }

        // Below 2^-24 not even the smallest binary16 subnormal can be
        // reached by rounding up. Binary32 subnormal inputs land here
        // as well, their raw biased exponent being 0.
        let min_exp = 1 - i32::from(Float::<u16>::bias()) - i32::from(Float::<u16>::sig_width());
        if exp < min_exp {
            let zero = Float::<u16>::zero(sign);
            return Either::Left((zero, Exception::underflow() | Exception::inexact()));
        }

        // A target biased exponent of 31 sits in the reserved
        // infinity/NaN field range, so the overflow test is inclusive.
        let exp = exp + i32::from(Float::<u16>::bias());
        if exp >= i32::from(Float::<u16>::exp_max()) {
            let inf = Float::<u16>::infinite(sign);
            return Either::Left((inf, Exception::overflow() | Exception::inexact()));
        }

        Either::Right((exp, self.sig()))
    }
}

fn narrow_normal(sign: bool, exp: i32, sig: u32) -> (Float<u16>, Exception) {
    let dropped = Float::<u32>::sig_width() - u32::from(Float::<u16>::sig_width());
    let candidate = (sig >> dropped) as u16;
    let round_bit = sig & (1 << (dropped - 1)) != 0;
    let sticky_bit = sig & ((1 << (dropped - 1)) - 1) != 0;

    let rounded = round_near_even(candidate, round_bit, sticky_bit);
    // Addition lets a significand that rounds up to 0x400 carry into
    // the exponent field, up to and including the infinity encoding.
    let bits = ((sign as u16) << 15) | (((exp as u16) << Float::<u16>::sig_width()) + rounded);

    let result = Float::new(bits);
    let flags = if round_bit || sticky_bit {
        if result.is_inf() {
            Exception::overflow() | Exception::inexact()
        } else {
            Exception::inexact()
        }
    } else {
        Exception::none()
    };

    (result, flags)
}

fn narrow_subnormal(sign: bool, exp: i32, sig: u32) -> (Float<u16>, Exception) {
    let sig = sig | Float::<u32>::hidden_bit();
    // exp is the target biased exponent, in -9..=0 here, giving a
    // shift of 14 up to 23 over the 24-bit significand.
    let shift = (i32::from(Float::<u16>::bias()) - 1 - exp) as u32;
    let candidate = (sig >> shift) as u16;
    let round_bit = sig & (1 << (shift - 1)) != 0;
    let sticky_bit = sig & ((1 << (shift - 1)) - 1) != 0;

    let rounded = round_near_even(candidate, round_bit, sticky_bit);
    // Exponent field stays 0; a full candidate carries into the
    // smallest normal by the same addition.
    let bits = ((sign as u16) << 15) + rounded;

    let result = Float::new(bits);
    let flags = if round_bit || sticky_bit {
        if result.is_subnormal() || result.is_zero() {
            Exception::underflow() | Exception::inexact()
        } else {
            Exception::inexact()
        }
    } else {
        Exception::none()
    };

    (result, flags)
}

/// Round-to-nearest, ties-to-even over a truncated significand.
/// `round_bit` is the highest discarded bit, `sticky_bit` the OR of
/// everything below it.
fn round_near_even(candidate: u16, round_bit: bool, sticky_bit: bool) -> u16 {
    if round_bit && (sticky_bit || candidate & 1 != 0) {
        candidate + 1
    } else {
        candidate
    }
}
