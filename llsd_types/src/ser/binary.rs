use crate::ser::WriteLen;
use crate::types::Llsd;
use anyhow::Result;
use std::io::Write;


pub(crate) const BINARY_SIGNATURE: &[u8] = b"<? LLSD/Binary ?>\n";

pub struct BinaryWriter<'a, W: Write> {
    w: &'a mut W,
}

impl<'a, W: Write> BinaryWriter<'a, W> {
    pub fn new(w: &'a mut W) -> Self {
        Self { w }
    }

    /// Signature line, then the value. The binary encoding has no
    /// pretty form.
    pub fn ser(mut self, llsd: &Llsd) -> Result<WriteLen> {
        let mut w_len = 0;
        w_len += self.w.write(BINARY_SIGNATURE)?;
        self.ser_value(llsd, &mut w_len)?;
        Ok(WriteLen(w_len))
    }

    fn ser_value(&mut self, llsd: &Llsd, w_len: &mut usize) -> Result<()> {
        match llsd {
            Llsd::Undef => *w_len += self.w.write(b"!")?,
            Llsd::Boolean(b) => *w_len += self.w.write(if *b { b"1" } else { b"0" })?,
            Llsd::Integer(i) => {
                *w_len += self.w.write(b"i")?;
                *w_len += self.w.write(&i.to_be_bytes())?;
            }
            Llsd::Real(r) => {
                *w_len += self.w.write(b"r")?;
                *w_len += self.w.write(&r.to_be_bytes())?;
            }
            Llsd::Uuid(u) => {
                *w_len += self.w.write(b"u")?;
                *w_len += self.w.write(u.as_bytes())?;
            }
            Llsd::String(s) => self.ser_sized(b"s", s.as_bytes(), w_len)?,
            Llsd::Date(d) => {
                *w_len += self.w.write(b"d")?;
                *w_len += self.w.write(&d.to_be_bytes())?;
            }
            Llsd::Uri(u) => self.ser_sized(b"l", u.as_bytes(), w_len)?,
            Llsd::Binary(b) => self.ser_sized(b"b", b, w_len)?,
            Llsd::Array(members) => {
                *w_len += self.w.write(b"[")?;
                *w_len += self.w.write(&u32::try_from(members.len())?.to_be_bytes())?;
                for member in members {
                    self.ser_value(member, w_len)?;
                }
                *w_len += self.w.write(b"]")?;
            }
            Llsd::Map(map) => {
                *w_len += self.w.write(b"{")?;
                *w_len += self.w.write(&u32::try_from(map.len())?.to_be_bytes())?;
                for (key, value) in map.iter() {
                    /* map keys use the string rule */
                    self.ser_sized(b"s", key.as_bytes(), w_len)?;
                    self.ser_value(value, w_len)?;
                }
                *w_len += self.w.write(b"}")?;
            }
        }
        Ok(())
    }

    fn ser_sized(&mut self, tag: &[u8], body: &[u8], w_len: &mut usize) -> Result<()> {
        *w_len += self.w.write(tag)?;
        *w_len += self.w.write(&u32::try_from(body.len())?.to_be_bytes())?;
        *w_len += self.w.write(body)?;
        Ok(())
    }
}
