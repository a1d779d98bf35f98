use std::fmt::{self, Write};
use std::str;

use crate::{Float, FloatClass, FloatConstant, FloatFormat, FloatGetter};

/// Writes a description of a binary32 bit pattern into `out` and
/// returns the written text.
///
/// Zeros come out as `"+0"`/`"-0"`, infinities as `"+INF"`/`"-INF"`,
/// any NaN as `"NaN"`, and finite nonzero values as
/// `"<sign><digit>.<bits> 2^<exp>"` with the significand written one
/// character per bit. Subnormals carry a leading `0.` and the fixed
/// minimum exponent. The last byte of `out` is reserved for a nul
/// terminator; text that does not fit is truncated, never overflowed.
pub fn format_binary32(bits: u32, out: &mut [u8]) -> &str {
    let f = Float::new(bits);
    let bias = Float::<u32>::bias() as i32;
    let exp = match f.classify() {
        FloatClass::Subnormal => 1 - bias,
        _ => f.exp() as i32 - bias,
    };

    render(f.classify(), f.sign(), f.sig(), Float::<u32>::sig_width(), exp, out)
}

/// Same description for a binary16 bit pattern.
pub fn format_binary16(bits: u16, out: &mut [u8]) -> &str {
    let f = Float::new(bits);
    let bias = i32::from(Float::<u16>::bias());
    let exp = match f.classify() {
        FloatClass::Subnormal => 1 - bias,
        _ => i32::from(f.exp()) - bias,
    };

    render(
        f.classify(),
        f.sign(),
        u32::from(f.sig()),
        u32::from(Float::<u16>::sig_width()),
        exp,
        out,
    )
}

fn render(
    class: FloatClass,
    sign: bool,
    sig: u32,
    sig_width: u32,
    exp: i32,
    out: &mut [u8],
) -> &str {
    let mut w = BoundedWriter::new(out);
    let sign_ch = if sign { '-' } else { '+' };

    // BoundedWriter never errors, so the write! results are moot.
    match class {
        FloatClass::Zero => {
            let _ = write!(w, "{}0", sign_ch);
        }
        FloatClass::Infinite => {
            let _ = write!(w, "{}INF", sign_ch);
        }
        FloatClass::NaN => {
            let _ = w.write_str("NaN");
        }
        FloatClass::Normal | FloatClass::Subnormal => {
            let lead = if class == FloatClass::Normal { '1' } else { '0' };
            let mut mantissa = [b'0'; 23];
            for i in 0..sig_width {
                if sig & (1 << (sig_width - 1 - i)) != 0 {
                    mantissa[i as usize] = b'1';
                }
            }
            let mantissa = str::from_utf8(&mantissa[..sig_width as usize]).unwrap_or("");

            let _ = write!(w, "{}{}.{} 2^{}", sign_ch, lead, mantissa, exp);
        }
    }

    w.finish()
}

/// `fmt::Write` sink over a caller-owned byte buffer. One byte is
/// reserved up front for the nul terminator; anything past it is
/// dropped.
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    fn new(buf: &'a mut [u8]) -> BoundedWriter<'a> {
        BoundedWriter {
            buf,
            len: 0,
            truncated: false,
        }
    }

    fn finish(self) -> &'a str {
        if self.truncated {
            log::trace!("description truncated to {} bytes", self.len);
        }

        let BoundedWriter { buf, len, .. } = self;
        if buf.is_empty() {
            return "";
        }
        buf[len] = 0;

        // only ASCII ever reaches the buffer
        str::from_utf8(&buf[..len]).unwrap_or("")
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len().saturating_sub(1) - self.len;
        let take = s.len().min(room);

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        if take < s.len() {
            self.truncated = true;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::BoundedWriter;
    use std::fmt::Write;

    #[test]
    fn writer_reserves_the_terminator() {
        let mut buf = [0xAAu8; 4];
        {
            let mut w = BoundedWriter::new(&mut buf);
            w.write_str("abcdef").unwrap();
            assert_eq!(w.finish(), "abc");
        }
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn writer_accumulates_across_calls() {
        let mut buf = [0u8; 16];
        let mut w = BoundedWriter::new(&mut buf);
        w.write_str("+1.").unwrap();
        w.write_str("01 2^-1").unwrap();
        assert_eq!(w.finish(), "+1.01 2^-1");
    }

    #[test]
    fn empty_buffer_is_left_untouched() {
        let mut buf: [u8; 0] = [];
        let mut w = BoundedWriter::new(&mut buf);
        w.write_str("xyz").unwrap();
        assert_eq!(w.finish(), "");
    }
}
