use alloc::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{FormatSpec, GrowableCharBuffer};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: appending any sequence of strings yields exactly their
/// concatenation, whatever the size of the initial region.
#[test]
fn text_appends_match_concatenation() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(pieces: Vec<String>, region_len: u8) -> bool {
        let mut region = vec![0u8; usize::from(region_len)];
        let mut buf = GrowableCharBuffer::with_region(&mut region);
        let mut expected = String::new();
        for piece in &pieces {
            buf.append_text(piece).unwrap();
            expected.push_str(piece);
        }
        buf.len() == expected.len() && buf.materialize() == expected
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<String>, u8) -> bool);
}

/// Property: the buffer reallocates exactly when an append overflows, to
/// `max(len + needed, 2 * capacity)`.
#[test]
fn growth_follows_doubling_policy() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(pieces: Vec<String>, region_len: u8) -> bool {
        let mut region = vec![0u8; usize::from(region_len)];
        let mut buf = GrowableCharBuffer::with_region(&mut region);

        let mut capacity = usize::from(region_len);
        let mut len = 0;
        let mut events = 0;
        for piece in &pieces {
            if len + piece.len() > capacity {
                capacity = (len + piece.len()).max(2 * capacity);
                events += 1;
            }
            len += piece.len();
            buf.append_text(piece).unwrap();
        }

        buf.growth_events() == events
            && buf.capacity() == capacity
            && buf.is_spilled() == (events > 0)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<String>, u8) -> bool);
}

#[quickcheck]
fn integers_match_display(values: Vec<i64>, region_len: u8) -> bool {
    let mut region = vec![0u8; usize::from(region_len)];
    let mut buf = GrowableCharBuffer::with_region(&mut region);
    let mut expected = String::new();
    for value in values {
        buf.append_formatted(value, None).unwrap();
        expected.push_str(&value.to_string());
    }
    buf.materialize() == expected
}

#[quickcheck]
fn fixed_floats_match_format(values: Vec<f64>, digits: u8, region_len: u8) -> bool {
    let digits = u16::from(digits % 8);
    let width = usize::from(digits);
    let mut region = vec![0u8; usize::from(region_len)];
    let mut buf = GrowableCharBuffer::with_region(&mut region);
    let mut expected = String::new();
    for value in values {
        buf.append_formatted(value, Some(FormatSpec::Fixed(digits)))
            .unwrap();
        expected.push_str(&format!("{value:.width$}"));
    }
    buf.materialize() == expected
}

#[quickcheck]
fn mixed_appends_match_string(ops: Vec<(bool, String, i32)>) -> bool {
    let mut region = [0u8; 16];
    let mut buf = GrowableCharBuffer::with_region(&mut region);
    let mut expected = String::new();
    for (as_text, text, number) in ops {
        if as_text {
            buf.append_text(&text).unwrap();
            expected.push_str(&text);
        } else {
            buf.append_formatted(number, Some(FormatSpec::Fixed(1)))
                .unwrap();
            expected.push_str(&format!("{number}.0"));
        }
    }
    buf.as_str() == expected && buf.to_string() == expected
}
