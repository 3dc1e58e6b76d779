use anyhow::{anyhow, Result};

/* digits run '!' (33) through 'u' (117) */
const DIGIT_BASE: u32 = 33;
const POWERS: [u32; 5] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

/// Ascii85. A full group of four zero bytes shortens to `z`, a full
/// group of four spaces to `y`; a trailing partial group of n bytes
/// emits its n + 1 high-order digits.
pub fn encode85(data: &[u8]) -> String {
    let mut out = String::new();
    for group in data.chunks(4) {
        let mut word = [0u8; 4];
        word[..group.len()].copy_from_slice(group);
        let value = u32::from_be_bytes(word);
        if group.len() == 4 && value == 0x0000_0000 {
            out.push('z');
        } else if group.len() == 4 && value == 0x2020_2020 {
            out.push('y');
        } else {
            for pow in POWERS.iter().take(group.len() + 1) {
                let digit = (value / pow) % 85;
                out.push(char::from((digit + DIGIT_BASE) as u8));
            }
        }
    }
    out
}

pub fn decode85(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut group = [0u8; 5];
    let mut group_len = 0;
    for byte in text.bytes() {
        match byte {
            b'z' | b'y' if group_len == 0 => {
                let word = if byte == b'z' { [0u8; 4] } else { [0x20u8; 4] };
                out.extend_from_slice(&word);
            }
            b'!'..=b'u' => {
                group[group_len] = byte;
                group_len += 1;
                if group_len == 5 {
                    decode_group(&group[..], &mut out)?;
                    group_len = 0;
                }
            }
            _ => return Err(anyhow!("Invalid base85 digit {byte:#04x}")),
        }
    }
    if group_len == 1 {
        return Err(anyhow!("Truncated base85 group"));
    }
    if group_len > 1 {
        /* missing low digits decode as if padded with the maximal
         * digit 'u', which undoes the encoder's truncation */
        let mut padded = [b'u'; 5];
        padded[..group_len].copy_from_slice(&group[..group_len]);
        let mut word = Vec::new();
        decode_group(&padded[..], &mut word)?;
        out.extend_from_slice(&word[..group_len - 1]);
    }
    Ok(out)
}

fn decode_group(digits: &[u8], out: &mut Vec<u8>) -> Result<()> {
    let mut value: u64 = 0;
    for (digit, pow) in digits.iter().zip(POWERS.iter()) {
        value += u64::from(digit - DIGIT_BASE as u8) * u64::from(*pow);
    }
    let value = u32::try_from(value).map_err(|_| anyhow!("Base85 group out of range"))?;
    out.extend_from_slice(&value.to_be_bytes());
    Ok(())
}
