use crate::Float;

/// Format parameters shared by everything operating on one width.
/// Binary32 and binary16 differ only in these values.
pub trait FloatConstant<T> {
  fn sig_width() -> T;
  fn exp_width() -> T;
  fn bias() -> T;
  fn exp_max() -> T;
  fn sig_mask() -> T;
  fn hidden_bit() -> T;
  fn signal_bit() -> T;
}

impl FloatConstant<u32> for Float<u32> {
  fn sig_width() -> u32 { 23 }
  fn exp_width() -> u32 { 8 }
  fn bias() -> u32 { 127 }
  fn exp_max() -> u32 { 0xFF }
  fn sig_mask() -> u32 { 0x007F_FFFF }
  fn hidden_bit() -> u32 { 0x0080_0000 }
  fn signal_bit() -> u32 { 0x0040_0000 }
}

impl FloatConstant<u16> for Float<u16> {
  fn sig_width() -> u16 { 10 }
  fn exp_width() -> u16 { 5 }
  fn bias() -> u16 { 15 }
  fn exp_max() -> u16 { 0x1F }
  fn sig_mask() -> u16 { 0x03FF }
  fn hidden_bit() -> u16 { 0x0400 }
  fn signal_bit() -> u16 { 0x0200 }
}
