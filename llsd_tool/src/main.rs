use anyhow::{Context, Result};
use llsd_types::ser::{ser_to_sink, Encoding};
use llsd_types::types::{Llsd, LlsdType};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

const ENV_VAR_OUT_DIR: &str = "LLSD_OUT_DIR";

const OUT_FILES: [(&str, Encoding); 4] = [
    ("test.binary.llsd", Encoding::Binary),
    ("test.xml.llsd", Encoding::Xml),
    ("test.notation.llsd", Encoding::Notation),
    ("test.json.llsd", Encoding::Json),
];

fn main() -> Result<()> {
    let out_dir = env::var(ENV_VAR_OUT_DIR)
        .map_or_else(|_| env::temp_dir().join("llsd"), |s| PathBuf::from(s));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create dir {:?}", out_dir))?;

    let llsd = Llsd::new(LlsdType::Undef);

    for (file_name, encoding) in OUT_FILES {
        let path = out_dir.join(file_name);
        let file =
            File::create(&path).with_context(|| format!("Failed to create file {:?}", path))?;
        let mut w = BufWriter::new(file);
        ser_to_sink(&llsd, &mut w, encoding, true)?;
        w.flush()
            .with_context(|| format!("Failed to flush file {:?}", path))?;
    }

    Ok(())
}
