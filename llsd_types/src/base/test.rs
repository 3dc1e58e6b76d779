#[cfg(test)]
mod test {
    use crate::base::{decode16, decode64, decode85, encode16, encode64, encode85};

    const SAMPLE: [u8; 16] = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05,
        0x06,
    ];

    #[test]
    fn base16_uppercase_canonical_either_case_decoded() {
        assert_eq!(encode16(b"Hello World!"), "48656C6C6F20576F726C6421");
        assert_eq!(
            decode16("48656C6C6F20576F726C6421").unwrap(),
            b"Hello World!"
        );
        assert_eq!(
            decode16("48656c6c6f20576f726c6421").unwrap(),
            b"Hello World!"
        );
        assert!(decode16("jk2e23r3").is_err());
    }

    #[test]
    fn base64_sample_vector() {
        assert_eq!(encode64(&SAMPLE), "AQIDBAUGBwgJAAECAwQFBg==");
        assert_eq!(decode64("AQIDBAUGBwgJAAECAwQFBg==").unwrap(), SAMPLE);
        assert_eq!(encode64(b""), "");
    }

    #[test]
    fn base85_known_group() {
        assert_eq!(encode85(b"Man "), "9jqo^");
        assert_eq!(decode85("9jqo^").unwrap(), b"Man ");
    }

    #[test]
    fn base85_zero_and_space_shortcuts() {
        assert_eq!(encode85(&[0x00, 0x00, 0x00, 0x00]), "z");
        assert_eq!(decode85("z").unwrap(), [0x00, 0x00, 0x00, 0x00]);

        assert_eq!(encode85(&[0x20, 0x20, 0x20, 0x20]), "y");
        assert_eq!(decode85("y").unwrap(), [0x20, 0x20, 0x20, 0x20]);
    }

    #[test]
    fn base85_partial_group_round_trip() {
        for data in [&b"M"[..], b"Ma", b"Man", b"Man M", b"\xff\xff\xff"] {
            let encoded = encode85(data);
            assert_eq!(encoded.len(), data.len() + data.len().div_ceil(4));
            assert_eq!(decode85(&encoded).unwrap(), data, "{encoded}");
        }
    }

    #[test]
    fn base85_rejects_out_of_range_digits() {
        assert!(decode85("9jqo\x7f").is_err());
        assert!(decode85("9").is_err());
    }
}
