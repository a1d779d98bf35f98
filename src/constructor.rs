use crate::{Float, FloatConstant};

pub trait FloatConstructor<T> {
  fn constructor(sign: bool, exp: T, sig: T) -> Float<T>;
  fn zero(sign: bool) -> Float<T>;
  fn infinite(sign: bool) -> Float<T>;
}

impl FloatConstructor<u32> for Float<u32> {
  fn constructor(sign: bool, exp: u32, sig: u32) -> Float<u32> {
    Float::new(((sign as u32) << 31) | (exp << 23) | sig)
  }

  fn zero(sign: bool) -> Float<u32> {
    Float::<u32>::constructor(sign, 0, 0)
  }

  fn infinite(sign: bool) -> Float<u32> {
    Float::<u32>::constructor(sign, Float::<u32>::exp_max(), 0)
  }
}

impl FloatConstructor<u16> for Float<u16> {
  fn constructor(sign: bool, exp: u16, sig: u16) -> Float<u16> {
    Float::new(((sign as u16) << 15) | (exp << 10) | sig)
  }

  fn zero(sign: bool) -> Float<u16> {
    Float::<u16>::constructor(sign, 0, 0)
  }

  fn infinite(sign: bool) -> Float<u16> {
    Float::<u16>::constructor(sign, Float::<u16>::exp_max(), 0)
  }
}
