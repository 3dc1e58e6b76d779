//! Serializes through real file handles and checks the bytes on disk.

use anyhow::{Context, Result};
use llsd_types::ser::{ser_to_sink, Encoding};
use llsd_types::types::{Llsd, LlsdType};
use std::fs::{self, File};
use std::io::{BufWriter, Write};

#[test]
fn undef_through_file_sinks() -> Result<()> {
    let out_dir = std::env::temp_dir().join("llsd_file_sinks_test");
    fs::create_dir_all(&out_dir).with_context(|| format!("Failed to create dir {:?}", out_dir))?;

    let expecteds: [(&str, Encoding, &[u8]); 4] = [
        ("test.binary.llsd", Encoding::Binary, b"<? LLSD/Binary ?>\n!"),
        (
            "test.xml.llsd",
            Encoding::Xml,
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<llsd><undef />\n</llsd>",
        ),
        (
            "test.notation.llsd",
            Encoding::Notation,
            b"<?llsd/notation?>\n!",
        ),
        ("test.json.llsd", Encoding::Json, b"null"),
    ];

    let llsd = Llsd::new(LlsdType::Undef);

    for (file_name, encoding, expected) in expecteds {
        let path = out_dir.join(file_name);
        let file =
            File::create(&path).with_context(|| format!("Failed to create file {:?}", path))?;
        let mut w = BufWriter::new(file);
        let w_len = ser_to_sink(&llsd, &mut w, encoding, true)?;
        w.flush()
            .with_context(|| format!("Failed to flush file {:?}", path))?;

        let actual = fs::read(&path).with_context(|| format!("Failed to read file {:?}", path))?;
        assert_eq!(actual, expected, "{:?}", encoding);
        assert_eq!(actual.len(), *w_len, "{:?}", encoding);
    }

    fs::remove_dir_all(&out_dir).ok();
    Ok(())
}
