#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use valuebuf::{FormatSpec, GrowableCharBuffer};

#[derive(Arbitrary, Debug)]
enum Op {
    Text(String),
    Char(char),
    Repeat(char, u8),
    Int(i64),
    Fixed(f64, u16),
    Reserve(u16),
}

#[derive(Arbitrary, Debug)]
struct Input {
    region_len: u16,
    ops: Vec<Op>,
}

/// Replays `input` against a buffer and a plain `String`; the two must agree
/// after every step.
fn replay(input: &Input) {
    let mut region = vec![0u8; usize::from(input.region_len % 4_096)];
    let mut buf = GrowableCharBuffer::with_region(&mut region);
    let mut expected = String::new();

    for op in &input.ops {
        match op {
            Op::Text(text) => {
                buf.append_text(text).unwrap();
                expected.push_str(text);
            }
            Op::Char(c) => {
                buf.append_char(*c).unwrap();
                expected.push(*c);
            }
            Op::Repeat(c, count) => {
                buf.append_repeated(*c, usize::from(*count)).unwrap();
                expected.extend(std::iter::repeat_n(*c, usize::from(*count)));
            }
            Op::Int(value) => {
                buf.append_formatted(*value, None).unwrap();
                expected.push_str(&value.to_string());
            }
            Op::Fixed(value, digits) => {
                buf.append_formatted(*value, Some(FormatSpec::Fixed(*digits)))
                    .unwrap();
                let digits = usize::from(*digits);
                expected.push_str(&format!("{value:.digits$}"));
            }
            Op::Reserve(additional) => {
                let before = buf.growth_events();
                buf.reserve(usize::from(*additional)).unwrap();
                assert!(buf.remaining() >= usize::from(*additional));
                assert!(buf.growth_events() <= before + 1);
            }
        }
        assert_eq!(buf.as_str(), expected);
        assert!(buf.len() <= buf.capacity());
    }

    assert_eq!(buf.materialize(), expected);
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    if let Ok(input) = Input::arbitrary(&mut u) {
        replay(&input);
    }
});
