#[cfg(test)]
mod test {
    use crate::ser::{ser_to_sink, Encoding};
    use crate::types::{Date, Llsd, LlsdMap, Uri};
    use anyhow::Result;
    use itertools::Itertools;
    use rand::seq::SliceRandom;
    use std::io::{self, Write};
    use uuid::Uuid;

    const ENCODINGS: [Encoding; 4] = [
        Encoding::Binary,
        Encoding::Xml,
        Encoding::Notation,
        Encoding::Json,
    ];

    /// Serializing the same value twice must produce identical bytes,
    /// and the reported length must equal the sink's length.
    fn verify(llsd: &Llsd) -> Result<()> {
        for encoding in ENCODINGS {
            for pretty in [false, true] {
                let mut serialized_a: Vec<u8> = vec![];
                let w_len_a = ser_to_sink(llsd, &mut serialized_a, encoding, pretty)?;
                assert_eq!(
                    serialized_a.len(),
                    *w_len_a,
                    "\n{:?} {:?}\n{:?}\n",
                    encoding,
                    llsd,
                    serialized_a
                );

                let mut serialized_b: Vec<u8> = vec![];
                ser_to_sink(llsd, &mut serialized_b, encoding, pretty)?;
                assert_eq!(
                    serialized_a, serialized_b,
                    "\n{:?} {:?}\n",
                    encoding, llsd
                );
            }
        }
        Ok(())
    }

    fn gen_undef() -> Llsd {
        Llsd::Undef
    }
    fn gen_boolean() -> Llsd {
        Llsd::Boolean(true)
    }
    fn gen_integer() -> Llsd {
        Llsd::Integer(-123)
    }
    fn gen_real() -> Llsd {
        Llsd::Real(0.5)
    }
    fn gen_uuid() -> Llsd {
        Llsd::Uuid(Uuid::from_bytes([
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x00, 0x01, 0x02, 0x03, 0x04,
            0x05, 0x06,
        ]))
    }
    fn gen_string() -> Llsd {
        Llsd::from("asdf \"quoted\" <tagged>")
    }
    fn gen_date() -> Llsd {
        Llsd::Date(Date::from(1234567890.5))
    }
    fn gen_uri() -> Llsd {
        Llsd::Uri(Uri::from("http://www.ixquick.com"))
    }
    fn gen_binary() -> Llsd {
        Llsd::Binary(String::from("asdf").into_bytes())
    }

    #[test]
    fn ser_is_deterministic() -> Result<()> {
        let mut rand_rng = rand::thread_rng();

        let gen_fns = [
            gen_undef,
            gen_boolean,
            gen_integer,
            gen_real,
            gen_uuid,
            gen_string,
            gen_date,
            gen_uri,
            gen_binary,
        ];

        for mut gen_fns in gen_fns.iter().powerset() {
            let arr = gen_fns.iter().map(|gen| gen()).collect::<Llsd>();
            verify(&arr)?;

            gen_fns.shuffle(&mut rand_rng);
            let map = gen_fns
                .iter()
                .enumerate()
                .map(|(i, gen)| (format!("key_{}", i), gen()))
                .collect::<LlsdMap>();
            verify(&Llsd::Map(map))?;
        }

        Ok(())
    }

    #[test]
    fn nested_containers() -> Result<()> {
        let mut inner = LlsdMap::new();
        inner.insert("arr", vec![gen_integer(), gen_string()].into_iter().collect());
        inner.insert("scalar", gen_real());
        let llsd = Llsd::Array(vec![Llsd::Map(inner), Llsd::Array(vec![]), gen_undef()]);
        verify(&llsd)?;
        Ok(())
    }

    /// A sink that rejects every write.
    struct FailWriter;
    impl Write for FailWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "sink rejected write"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejecting_sink_surfaces_the_error() {
        let llsd = Llsd::Array(vec![gen_integer()]);
        for encoding in ENCODINGS {
            let res = ser_to_sink(&llsd, &mut FailWriter, encoding, false);
            assert!(res.is_err(), "{:?}", encoding);
        }
    }
}
