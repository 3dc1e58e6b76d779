use crate::base::encode64;
use crate::ser::WriteLen;
use crate::types::Llsd;
use anyhow::Result;
use std::io::Write;


pub(crate) const XML_PROLOG: &[u8] = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const INDENT_SPACES: usize = 4;

pub struct XmlWriter<'a, W: Write> {
    w: &'a mut W,
    pretty: bool,
    indent: usize,
    multiline: Vec<bool>,
}

impl<'a, W: Write> XmlWriter<'a, W> {
    pub fn new(w: &'a mut W, pretty: bool) -> Self {
        Self {
            w,
            pretty,
            indent: 1,
            multiline: vec![true],
        }
    }

    /// Prolog, `<llsd>`, the value, `</llsd>`.
    pub fn ser(mut self, llsd: &Llsd) -> Result<WriteLen> {
        let mut w_len = 0;
        w_len += self.w.write(XML_PROLOG)?;
        w_len += self.w.write(b"<llsd>")?;
        self.ser_value(llsd, &mut w_len)?;
        self.nl(&mut w_len)?;
        w_len += self.w.write(b"</llsd>")?;
        Ok(WriteLen(w_len))
    }

    fn ser_value(&mut self, llsd: &Llsd, w_len: &mut usize) -> Result<()> {
        match llsd {
            Llsd::Undef => *w_len += self.w.write(b"<undef />")?,
            Llsd::Boolean(b) => {
                *w_len += self.w.write(b"<boolean>")?;
                *w_len += self.w.write(if *b { b"1" } else { b"0" })?;
                *w_len += self.w.write(b"</boolean>")?;
            }
            Llsd::Integer(0) => *w_len += self.w.write(b"<integer />")?,
            Llsd::Integer(i) => self.ser_element(b"integer", i.to_string().as_bytes(), w_len)?,
            Llsd::Real(r) if *r == 0.0 => *w_len += self.w.write(b"<real />")?,
            Llsd::Real(r) => self.ser_element(b"real", format!("{r:.6}").as_bytes(), w_len)?,
            Llsd::Uuid(u) if u.is_nil() => *w_len += self.w.write(b"<uuid />")?,
            Llsd::Uuid(u) => self.ser_element(b"uuid", u.to_string().as_bytes(), w_len)?,
            Llsd::String(s) if s.is_empty() => *w_len += self.w.write(b"<string />")?,
            Llsd::String(s) => {
                *w_len += self.w.write(b"<string>")?;
                self.ser_text(s.as_bytes(), w_len)?;
                *w_len += self.w.write(b"</string>")?;
            }
            Llsd::Date(d) if d.is_epoch() => *w_len += self.w.write(b"<date />")?,
            Llsd::Date(d) => self.ser_element(b"date", d.format_iso8601().as_bytes(), w_len)?,
            Llsd::Uri(u) if u.is_empty() => *w_len += self.w.write(b"<uri />")?,
            Llsd::Uri(u) => {
                *w_len += self.w.write(b"<uri>")?;
                self.ser_text(u.as_bytes(), w_len)?;
                *w_len += self.w.write(b"</uri>")?;
            }
            Llsd::Binary(b) if b.is_empty() => *w_len += self.w.write(b"<binary />")?,
            Llsd::Binary(b) => {
                *w_len += self.w.write(b"<binary encoding=\"base64\">")?;
                *w_len += self.w.write(encode64(b).as_bytes())?;
                *w_len += self.w.write(b"</binary>")?;
            }
            Llsd::Array(members) => {
                self.nl(w_len)?;
                self.pad(w_len)?;
                self.multiline.push(members.len() > 1);
                if members.is_empty() {
                    *w_len += self.w.write(b"<array />")?;
                } else {
                    *w_len += self.w.write(b"<array>")?;
                }
                self.inc_indent();
                for member in members {
                    self.nl(w_len)?;
                    self.pad(w_len)?;
                    self.ser_value(member, w_len)?;
                }
                self.nl(w_len)?;
                self.dec_indent();
                self.pad(w_len)?;
                if !members.is_empty() {
                    *w_len += self.w.write(b"</array>")?;
                }
                self.multiline.pop();
            }
            Llsd::Map(map) => {
                self.nl(w_len)?;
                self.pad(w_len)?;
                self.multiline.push(map.len() > 1);
                if map.is_empty() {
                    *w_len += self.w.write(b"<map />")?;
                } else {
                    *w_len += self.w.write(b"<map>")?;
                }
                self.inc_indent();
                for (key, value) in map.iter() {
                    self.nl(w_len)?;
                    self.pad(w_len)?;
                    *w_len += self.w.write(b"<key>")?;
                    self.ser_text(key.as_bytes(), w_len)?;
                    *w_len += self.w.write(b"</key>")?;
                    self.ser_value(value, w_len)?;
                }
                self.nl(w_len)?;
                self.dec_indent();
                self.pad(w_len)?;
                if !map.is_empty() {
                    *w_len += self.w.write(b"</map>")?;
                }
                self.multiline.pop();
            }
        }
        Ok(())
    }

    fn ser_element(&mut self, name: &[u8], content: &[u8], w_len: &mut usize) -> Result<()> {
        *w_len += self.w.write(b"<")?;
        *w_len += self.w.write(name)?;
        *w_len += self.w.write(b">")?;
        *w_len += self.w.write(content)?;
        *w_len += self.w.write(b"</")?;
        *w_len += self.w.write(name)?;
        *w_len += self.w.write(b">")?;
        Ok(())
    }

    /// Escapes markup characters, passes tab/newline/carriage-return,
    /// and drops any other control character.
    fn ser_text(&mut self, text: &[u8], w_len: &mut usize) -> Result<()> {
        for byte in text {
            match byte {
                b'<' => *w_len += self.w.write(b"&lt;")?,
                b'>' => *w_len += self.w.write(b"&gt;")?,
                b'&' => *w_len += self.w.write(b"&amp;")?,
                b'\'' => *w_len += self.w.write(b"&apos;")?,
                b'"' => *w_len += self.w.write(b"&quot;")?,
                b'\t' | b'\n' | b'\r' => *w_len += self.w.write(&[*byte])?,
                _ if *byte >= 0x20 => *w_len += self.w.write(&[*byte])?,
                _ => {}
            }
        }
        Ok(())
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
