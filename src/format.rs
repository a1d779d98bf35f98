use std::ops::BitAnd;

use crate::{Float, FloatConstant, FloatGetter};

/// Mutually exclusive classes covering every bit pattern of a format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatClass {
  Zero,
  Subnormal,
  Normal,
  Infinite,
  NaN,
}

pub trait FloatFormat {
  fn is_nan(self) -> bool;
  fn is_signal_nan(self) -> bool;
  fn is_inf(self) -> bool;
  fn is_zero(self) -> bool;
  fn is_subnormal(self) -> bool;
  fn classify(self) -> FloatClass;
}

impl<T> FloatFormat for Float<T>
  where Float<T>: FloatGetter<T> + FloatConstant<T>,
        T: Copy + PartialEq + From<u8> + BitAnd<Output = T>,
{
  fn is_nan(self) -> bool {
    self.exp() == Float::<T>::exp_max() && self.sig() != T::from(0)
  }

  fn is_signal_nan(self) -> bool {
    self.is_nan() && self.sig() & Float::<T>::signal_bit() == T::from(0)
  }

  fn is_inf(self) -> bool {
    self.exp() == Float::<T>::exp_max() && self.sig() == T::from(0)
  }

  fn is_zero(self) -> bool {
    self.exp() == T::from(0) && self.sig() == T::from(0)
  }

  fn is_subnormal(self) -> bool {
    self.exp() == T::from(0) && self.sig() != T::from(0)
  }

  fn classify(self) -> FloatClass {
    if self.is_zero() {
      FloatClass::Zero
    } else if self.is_subnormal() {
      FloatClass::Subnormal
    } else if self.is_inf() {
      FloatClass::Infinite
    } else if self.is_nan() {
      FloatClass::NaN
    } else {
      FloatClass::Normal
    }
  }
}
