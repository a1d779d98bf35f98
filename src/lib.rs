mod constant;
mod constructor;
mod convert;
mod describe;
mod exception;
mod format;
mod getter;

pub use constant::FloatConstant;
pub use constructor::FloatConstructor;
pub use convert::narrow_to_binary16;
pub use describe::{format_binary16, format_binary32};
pub use exception::Exception;
pub use format::{FloatClass, FloatFormat};
pub use getter::FloatGetter;

/// A floating point value stored as its raw bit pattern. `T` selects
/// the interchange format: `u32` for binary32, `u16` for binary16.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Float<T> {
    pub(crate) v: T,
}

impl<T> Float<T> {
    pub fn new(v: T) -> Float<T> {
        Float { v }
    }

    pub fn bits(self) -> T {
        self.v
    }
}

impl From<f32> for Float<u32> {
    fn from(f: f32) -> Float<u32> {
        Float::new(f.to_bits())
    }
}

impl Into<f32> for Float<u32> {
    fn into(self) -> f32 {
        f32::from_bits(self.v)
    }
}

#[cfg(test)]
mod test {
    extern crate rand;
    extern crate regex;

    use crate::*;
    use rand::Rng;
    use regex::Regex;

    fn describe32(bits: u32) -> String {
        let mut buf = [0u8; 64];
        format_binary32(bits, &mut buf).to_string()
    }

    fn describe16(bits: u16) -> String {
        let mut buf = [0u8; 32];
        format_binary16(bits, &mut buf).to_string()
    }

    #[test]
    fn half_renders_canonical_text() {
        assert_eq!(describe32(0x3F00_0000), "+1.00000000000000000000000 2^-1");
    }

    #[test]
    fn zeros_render_signed() {
        assert_eq!(describe32(0x0000_0000), "+0");
        assert_eq!(describe32(0x8000_0000), "-0");
        assert_eq!(describe16(0x0000), "+0");
        assert_eq!(describe16(0x8000), "-0");
    }

    #[test]
    fn infinities_render_signed() {
        assert_eq!(describe32(0x7F80_0000), "+INF");
        assert_eq!(describe32(0xFF80_0000), "-INF");
        assert_eq!(describe16(0x7C00), "+INF");
        assert_eq!(describe16(0xFC00), "-INF");
    }

    #[test]
    fn nan_renders_unsigned() {
        assert_eq!(describe32(0x7FC0_0000), "NaN");
        assert_eq!(describe32(0xFFC0_0000), "NaN");
        assert_eq!(describe16(0x7C01), "NaN");
        assert_eq!(describe16(0xFE00), "NaN");
    }

    #[test]
    fn smallest_subnormals_render_minimum_exponent() {
        assert_eq!(describe32(0x0000_0001), "+0.00000000000000000000001 2^-126");
        assert_eq!(describe16(0x0001), "+0.0000000001 2^-14");
    }

    #[test]
    fn binary16_normal_renders_its_bits() {
        assert_eq!(describe16(0x3555), "+1.0101010101 2^-2");
        assert_eq!(describe16(0x3C00), "+1.0000000000 2^0");
    }

    #[test]
    fn formatted_binary32_round_trips() {
        let re = Regex::new(r"^([+-])([01])\.([01]{23}) 2\^(-?\d+)$").unwrap();
        let mut rng = rand::thread_rng();

        for _ in 0..10_000 {
            let bits: u32 = rng.gen();
            let f = Float::new(bits);

            match f.classify() {
                FloatClass::Normal | FloatClass::Subnormal => {}
                _ => continue,
            }

            let text = describe32(bits);
            let caps = re.captures(&text).unwrap();
            let sign = caps.get(1).unwrap().as_str() == "-";
            let lead = caps.get(2).unwrap().as_str();
            let sig = u32::from_str_radix(caps.get(3).unwrap().as_str(), 2).unwrap();
            let exp: i32 = caps.get(4).unwrap().as_str().parse().unwrap();

            assert_eq!(sign, f.sign(), "bits = {:#010x}", bits);
            assert_eq!(sig, f.sig(), "bits = {:#010x}", bits);
            if f.classify() == FloatClass::Normal {
                assert_eq!(lead, "1");
                assert_eq!(exp, f.exp() as i32 - 127);
            } else {
                assert_eq!(lead, "0");
                assert_eq!(exp, -126);
            }
        }
    }

    #[test]
    fn formatted_binary16_round_trips_exhaustively() {
        let re = Regex::new(r"^([+-])([01])\.([01]{10}) 2\^(-?\d+)$").unwrap();

        for bits in 0..=u16::MAX {
            let f = Float::new(bits);

            match f.classify() {
                FloatClass::Normal | FloatClass::Subnormal => {}
                _ => continue,
            }

            let text = describe16(bits);
            let caps = re.captures(&text).unwrap();
            let sign = caps.get(1).unwrap().as_str() == "-";
            let sig = u16::from_str_radix(caps.get(3).unwrap().as_str(), 2).unwrap();
            let exp: i32 = caps.get(4).unwrap().as_str().parse().unwrap();

            assert_eq!(sign, f.sign(), "bits = {:#06x}", bits);
            assert_eq!(sig, f.sig(), "bits = {:#06x}", bits);
            if f.classify() == FloatClass::Normal {
                assert_eq!(exp, i32::from(f.exp()) - 15);
            } else {
                assert_eq!(exp, -14);
            }
        }
    }

    #[test]
    fn binary16_classification_is_exhaustive_and_exclusive() {
        for bits in 0..=u16::MAX {
            let f = Float::new(bits);
            let specials = [f.is_zero(), f.is_subnormal(), f.is_inf(), f.is_nan()];
            let count = specials.iter().filter(|b| **b).count();

            match f.classify() {
                FloatClass::Normal => assert_eq!(count, 0, "bits = {:#06x}", bits),
                _ => assert_eq!(count, 1, "bits = {:#06x}", bits),
            }
        }
    }

    #[test]
    fn binary32_boundary_classes() {
        assert_eq!(Float::new(0x0080_0000u32).classify(), FloatClass::Normal);
        assert_eq!(Float::new(0x007F_FFFFu32).classify(), FloatClass::Subnormal);
        assert_eq!(Float::new(0x7F7F_FFFFu32).classify(), FloatClass::Normal);
        assert_eq!(Float::new(0x7F80_0000u32).classify(), FloatClass::Infinite);
        assert_eq!(Float::new(0x7F80_0001u32).classify(), FloatClass::NaN);
    }

    #[test]
    fn truncation_always_nul_terminates() {
        let full = describe32(0x3F00_0000);

        for cap in 0..=40usize {
            let mut buf = vec![0xAAu8; cap];
            let text = format_binary32(0x3F00_0000, &mut buf[..]).to_string();

            if cap == 0 {
                assert!(text.is_empty());
                continue;
            }

            assert!(text.len() <= cap - 1);
            assert_eq!(buf[text.len()], 0);
            assert!(full.starts_with(&text));
        }
    }

    #[test]
    fn narrowing_matches_the_interface_contract() {
        // the free function and the method agree
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let bits: u32 = rng.gen();
            assert_eq!(narrow_to_binary16(bits), Float::new(bits).narrow().bits());
        }
    }

    #[test]
    fn narrowing_preserves_the_sign_for_every_class() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let bits: u32 = rng.gen();
            let f = Float::new(bits);
            assert_eq!(
                f.narrow().sign(),
                f.sign(),
                "bits = {:#010x}",
                bits
            );
        }
    }
}
