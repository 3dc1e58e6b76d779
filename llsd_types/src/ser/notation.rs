use crate::base::encode64;
use crate::ser::WriteLen;
use crate::types::Llsd;
use anyhow::Result;
use std::io::Write;


pub(crate) const NOTATION_SIGNATURE: &[u8] = b"<?llsd/notation?>\n";

const INDENT_SPACES: usize = 4;

pub struct NotationWriter<'a, W: Write> {
    w: &'a mut W,
    pretty: bool,
    indent: usize,
    in_map_value: bool,
    multiline: Vec<bool>,
    member_counts: Vec<u32>,
}

impl<'a, W: Write> NotationWriter<'a, W> {
    pub fn new(w: &'a mut W, pretty: bool) -> Self {
        Self {
            w,
            pretty,
            indent: 0,
            in_map_value: false,
            multiline: Vec::new(),
            member_counts: Vec::new(),
        }
    }

    /// Signature line, then the value.
    pub fn ser(mut self, llsd: &Llsd) -> Result<WriteLen> {
        let mut w_len = 0;
        w_len += self.w.write(NOTATION_SIGNATURE)?;
        self.ser_value(llsd, &mut w_len)?;
        Ok(WriteLen(w_len))
    }

    fn ser_value(&mut self, llsd: &Llsd, w_len: &mut usize) -> Result<()> {
        match llsd {
            Llsd::Undef => *w_len += self.w.write(b"!")?,
            Llsd::Boolean(b) => *w_len += self.w.write(if *b { b"1" } else { b"0" })?,
            Llsd::Integer(i) => *w_len += self.w.write(format!("i{i}").as_bytes())?,
            Llsd::Real(r) => *w_len += self.w.write(format!("r{r:.6}").as_bytes())?,
            Llsd::Uuid(u) => *w_len += self.w.write(format!("u{u}").as_bytes())?,
            Llsd::String(s) => self.ser_string(s, w_len)?,
            Llsd::Date(d) => {
                *w_len += self
                    .w
                    .write(format!("d\"{}\"", d.format_iso8601()).as_bytes())?;
            }
            Llsd::Uri(u) => *w_len += self.w.write(format!("l\"{}\"", &**u).as_bytes())?,
            Llsd::Binary(b) => {
                *w_len += self.w.write(b"b64\"")?;
                *w_len += self.w.write(encode64(b).as_bytes())?;
                *w_len += self.w.write(b"\"")?;
            }
            Llsd::Array(members) => {
                self.open_container(b"[", members.len(), w_len)?;
                for member in members {
                    self.member_separator(w_len)?;
                    self.ser_value(member, w_len)?;
                    self.member_done();
                }
                self.close_container(b"]", w_len)?;
            }
            Llsd::Map(map) => {
                self.open_container(b"{", map.len(), w_len)?;
                for (key, value) in map.iter() {
                    self.member_separator(w_len)?;
                    /* map keys use the string rule */
                    self.ser_string(key, w_len)?;
                    *w_len += self.w.write(b":")?;
                    self.in_map_value = true;
                    self.ser_value(value, w_len)?;
                    self.in_map_value = false;
                    self.member_done();
                }
                self.close_container(b"}", w_len)?;
            }
        }
        Ok(())
    }

    /// `s(<byte length>)"<raw bytes>"`. The parenthesized length makes
    /// escaping unnecessary.
    fn ser_string(&mut self, s: &str, w_len: &mut usize) -> Result<()> {
        *w_len += self.w.write(format!("s({})\"", s.len()).as_bytes())?;
        *w_len += self.w.write(s.as_bytes())?;
        *w_len += self.w.write(b"\"")?;
        Ok(())
    }

    fn open_container(&mut self, bracket: &[u8], len: usize, w_len: &mut usize) -> Result<()> {
        let multiline = len > 1;
        self.member_counts.push(0);
        self.multiline.push(multiline);
        /* a multi-line container standing as a map value opens on a
         * fresh line instead of dangling after the key */
        if self.in_map_value && multiline {
            self.nl(w_len)?;
            self.pad(w_len)?;
        }
        /* The flag applies to this container only, not to its members. */
        self.in_map_value = false;
        *w_len += self.w.write(bracket)?;
        self.inc_indent();
        Ok(())
    }

    fn close_container(&mut self, bracket: &[u8], w_len: &mut usize) -> Result<()> {
        self.nl(w_len)?;
        self.dec_indent();
        self.pad(w_len)?;
        *w_len += self.w.write(bracket)?;
        self.multiline.pop();
        self.member_counts.pop();
        Ok(())
    }

    fn member_separator(&mut self, w_len: &mut usize) -> Result<()> {
        if let Some(count) = self.member_counts.last() {
            if *count > 0 {
                *w_len += self.w.write(b",")?;
            }
        }
        self.nl(w_len)?;
        self.pad(w_len)?;
        Ok(())
    }

    fn member_done(&mut self) {
        if let Some(count) = self.member_counts.last_mut() {
            *count += 1;
        }
    }

    fn nl(&mut self, w_len: &mut usize) -> Result<()> {
        if self.pretty && self.multiline.last() == Some(&true) {
            *w_len += self.w.write(b"\n")?;
        }
        Ok(())
    }

    fn pad(&mut self, w_len: &mut usize) -> Result<()> {
        if self.pretty && self.indent > 0 && self.multiline.last() == Some(&true) {
            let pad = b" ".repeat(self.indent * INDENT_SPACES);
            *w_len += self.w.write(&pad)?;
        }
        Ok(())
    }

    fn inc_indent(&mut self) {
        if self.pretty {
            self.indent += 1;
        }
    }

    fn dec_indent(&mut self) {
        if self.pretty {
            self.indent -= 1;
        }
    }
}
