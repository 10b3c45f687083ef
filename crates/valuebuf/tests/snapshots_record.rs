#![allow(missing_docs)]

use core::fmt::Write;

use valuebuf::{BufferError, FixtureOptions, FormatSpec, GrowableCharBuffer, Record, Strategy};

fn small_options() -> FixtureOptions {
    FixtureOptions {
        sequence_terms: 5,
        series_len: 3,
        ..FixtureOptions::default()
    }
}

fn render_all(record: &Record, options: &FixtureOptions) -> String {
    let mut out = String::new();
    for strategy in Strategy::ALL {
        let text = strategy.render(record, options).expect("render failed");
        writeln!(out, "{}: {text}", strategy.name()).unwrap();
    }
    out
}

#[test]
fn snapshot_every_strategy() {
    let options = small_options();
    let record = Record::sample(&options, Record::FIXTURE_INSTANT);

    insta::assert_snapshot!(render_all(&record, &options), @r"
    string_builder: Value1:100 ,Value2:200 ,Value3:333 ,Value4:400 ,Value5:0-1-2-3-4 ,Value6:655.00 ,Value7:2024-01-01 12:00:00 ,Value8:00:00:00 ,Value9:9999-12-31 ,Value10:012
    string_builder_capacity: Value1:100 ,Value2:200 ,Value3:333 ,Value4:400 ,Value5:0-1-2-3-4 ,Value6:655.00 ,Value7:2024-01-01 12:00:00 ,Value8:00:00:00 ,Value9:9999-12-31 ,Value10:012
    interpolated: Value1:100 ,Value2:200 ,Value3:333 ,Value4:400 ,Value5:0-1-2-3-4 ,Value6:655.00 ,Value7:2024-01-01 12:00:00 ,Value8:00:00:00 ,Value9:9999-12-31 ,Value10:012
    concat: Value1:100 ,Value2:200 ,Value3:333 ,Value4:400 ,Value5:0-1-2-3-4 ,Value6:655.00 ,Value7:2024-01-01 12:00:00 ,Value8:00:00:00 ,Value9:9999-12-31 ,Value10:012
    buffer_on_stack: Value1:100 ,Value2:200 ,Value3:333 ,Value4:400 ,Value5:0-1-2-3-4 ,Value6:655.00 ,Value7:2024-01-01 12:00:00 ,Value8:00:00:00 ,Value9:9999-12-31 ,Value10:012
    buffer_on_heap: Value1:100 ,Value2:200 ,Value3:333 ,Value4:400 ,Value5:0-1-2-3-4 ,Value6:655.00 ,Value7:2024-01-01 12:00:00 ,Value8:00:00:00 ,Value9:9999-12-31 ,Value10:012
    ");
}

#[test]
fn snapshot_sparse_record() {
    let options = small_options();
    let mut record = Record::sample(&options, Record::FIXTURE_INSTANT);
    record.value2 = 5;
    record.value5 = None;
    record.value6 = 15.into();
    record.value10 = None;

    let text = Strategy::BufferOnStack.render(&record, &options).unwrap();
    assert_eq!(text, Strategy::Concat.render(&record, &options).unwrap());
    insta::assert_snapshot!(text, @"Value1:100 ,Value3:333 ,Value4:400 ,Value5: ,Value7:2024-01-01 12:00:00 ,Value8:00:00:00 ,Value9:9999-12-31 ,Value10:");
}

#[test]
fn snapshot_error_messages() {
    let mut region = [0u8; 8];
    let mut buf = GrowableCharBuffer::with_region(&mut region);
    let mismatch = buf
        .append_formatted(Record::MAX_DATE, Some(FormatSpec::Fixed(2)))
        .unwrap_err();
    let overflow = BufferError::OutOfCapacity {
        length: 12,
        additional: 34,
    };

    insta::assert_snapshot!(mismatch, @"format spec fixed-point does not apply to date values");
    insta::assert_snapshot!(overflow, @"cannot grow a buffer of 12 bytes by 34 more");
    insta::assert_snapshot!(BufferError::from(core::fmt::Error), @"value formatting failed");
}
