use std::ops::BitOr;

/// IEEE exception flags raised by the narrowing conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exception(pub u8);

pub const EXCEPTION_NONE: u8 = 0;
pub const EXCEPTION_INEXACT: u8 = 1 << 0;
pub const EXCEPTION_UNDERFLOW: u8 = 1 << 1;
pub const EXCEPTION_OVERFLOW: u8 = 1 << 2;
pub const EXCEPTION_INVALID: u8 = 1 << 3;

impl Exception {
    pub fn none() -> Exception {
        Exception(EXCEPTION_NONE)
    }

    pub fn inexact() -> Exception {
        Exception(EXCEPTION_INEXACT)
    }

    pub fn underflow() -> Exception {
        Exception(EXCEPTION_UNDERFLOW)
    }

    pub fn overflow() -> Exception {
        Exception(EXCEPTION_OVERFLOW)
    }

    pub fn invalid() -> Exception {
        Exception(EXCEPTION_INVALID)
    }

    pub fn is_inexact(self) -> bool {
        self.0 & EXCEPTION_INEXACT != 0
    }

    pub fn is_underflow(self) -> bool {
        self.0 & EXCEPTION_UNDERFLOW != 0
    }

    pub fn is_overflow(self) -> bool {
        self.0 & EXCEPTION_OVERFLOW != 0
    }

    pub fn is_invalid(self) -> bool {
        self.0 & EXCEPTION_INVALID != 0
    }
}

impl BitOr for Exception {
    type Output = Exception;

    fn bitor(self, other: Exception) -> Exception {
        Exception(self.0 | other.0)
    }
}
