//! The string-building strategies that render a [`Record`].
//!
//! Every strategy produces the same text:
//!
//! ```text
//! Value1:<v1>[ ,Value2:<v2>] ,Value3:<v3> ,Value4:<v4> ,Value5:<v5>[ ,Value6:<v6 F2>]
//!  ,Value7:<%Y-%m-%d %H:%M:%S> ,Value8:<%H:%M:%S> ,Value9:<%Y-%m-%d> ,Value10:<series>
//! ```
//!
//! The `Value2` segment appears only when `value2 > 10`, the `Value6` segment
//! only when `value6 > 20`, and the series is printed with no separator.
use alloc::{
    format,
    string::{String, ToString},
};
use core::fmt::Write;

use crate::{BufferError, FixtureOptions, FormatSpec, GrowableCharBuffer, Record};

/// Pattern of the date-time field.
pub const DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
/// Pattern of the time-of-day field.
pub const TIME_PATTERN: &str = "%H:%M:%S";
/// Pattern of the date field.
pub const DATE_PATTERN: &str = "%Y-%m-%d";
/// Fractional digits of the decimal field.
pub const DECIMAL_DIGITS: u16 = 2;

/// A way of building the record's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Builds a brand-new string for every piece appended.
    Concat,
    /// Appends into a `String` that starts empty.
    StringBuilder,
    /// Appends into a `String` pre-sized to [`FixtureOptions::capacity`].
    StringBuilderWithCapacity,
    /// Like `StringBuilderWithCapacity`, but each formatted field goes
    /// through its own `format!` first.
    Interpolated,
    /// A [`GrowableCharBuffer`] over a stack array of
    /// [`FixtureOptions::STACK_CAPACITY`] bytes.
    BufferOnStack,
    /// A [`GrowableCharBuffer`] owning [`FixtureOptions::capacity`] bytes.
    BufferOnHeap,
}

impl Strategy {
    /// Every strategy, baseline first.
    pub const ALL: [Strategy; 6] = [
        Strategy::StringBuilder,
        Strategy::StringBuilderWithCapacity,
        Strategy::Interpolated,
        Strategy::Concat,
        Strategy::BufferOnStack,
        Strategy::BufferOnHeap,
    ];

    /// Stable label for benchmark ids.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Concat => "concat",
            Strategy::StringBuilder => "string_builder",
            Strategy::StringBuilderWithCapacity => "string_builder_capacity",
            Strategy::Interpolated => "interpolated",
            Strategy::BufferOnStack => "buffer_on_stack",
            Strategy::BufferOnHeap => "buffer_on_heap",
        }
    }

    /// Renders `record` with this strategy.
    ///
    /// # Errors
    ///
    /// Only the buffer strategies can fail, with
    /// [`BufferError::OutOfCapacity`] when the buffer cannot grow. The
    /// `String` strategies surface formatter failures as
    /// [`BufferError::Format`].
    pub fn render(self, record: &Record, options: &FixtureOptions) -> Result<String, BufferError> {
        match self {
            Strategy::Concat => render_concat(record),
            Strategy::StringBuilder => render_string_builder(String::new(), record),
            Strategy::StringBuilderWithCapacity => {
                render_string_builder(String::with_capacity(options.capacity), record)
            }
            Strategy::Interpolated => render_interpolated(record, options.capacity),
            Strategy::BufferOnStack => {
                let mut region = [0u8; FixtureOptions::STACK_CAPACITY];
                let mut buf = GrowableCharBuffer::with_region(&mut region);
                write_record(&mut buf, record)?;
                Ok(buf.materialize())
            }
            Strategy::BufferOnHeap => {
                let mut buf = GrowableCharBuffer::try_with_capacity(options.capacity)?;
                write_record(&mut buf, record)?;
                Ok(buf.materialize())
            }
        }
    }
}

/// Writes `record` into `buf`, formatting scalars in place where possible.
///
/// # Errors
///
/// [`BufferError::OutOfCapacity`] when the buffer cannot grow.
pub fn write_record(buf: &mut GrowableCharBuffer<'_>, record: &Record) -> Result<(), BufferError> {
    buf.append_text("Value1:")?;
    buf.append_formatted(record.value1, None)?;
    if record.includes_value2() {
        buf.append_text(" ,Value2:")?;
        buf.append_formatted(record.value2, None)?;
    }
    buf.append_text(" ,Value3:")?;
    buf.append_formatted(record.value3, None)?;
    buf.append_text(" ,Value4:")?;
    buf.append_formatted(record.value4, None)?;
    buf.append_text(" ,Value5:")?;
    buf.append_text(record.value5.as_deref().unwrap_or_default())?;
    if record.includes_value6() {
        buf.append_text(" ,Value6:")?;
        buf.append_formatted(record.value6, Some(FormatSpec::Fixed(DECIMAL_DIGITS)))?;
    }
    buf.append_text(" ,Value7:")?;
    buf.append_formatted(record.value7, Some(FormatSpec::Pattern(DATE_TIME_PATTERN)))?;
    buf.append_text(" ,Value8:")?;
    buf.append_formatted(record.value8, Some(FormatSpec::Pattern(TIME_PATTERN)))?;
    buf.append_text(" ,Value9:")?;
    buf.append_formatted(record.value9, Some(FormatSpec::Pattern(DATE_PATTERN)))?;
    buf.append_text(" ,Value10:")?;
    for item in record.series() {
        buf.append_formatted(*item, None)?;
    }
    Ok(())
}

fn concat(left: &str, right: &str) -> String {
    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(left);
    joined.push_str(right);
    joined
}

#[allow(clippy::unnecessary_wraps)]
fn render_concat(record: &Record) -> Result<String, BufferError> {
    let mut out = String::new();
    out = concat(&out, "Value1:");
    out = concat(&out, &record.value1.to_string());
    if record.includes_value2() {
        out = concat(&out, " ,Value2:");
        out = concat(&out, &record.value2.to_string());
    }
    out = concat(&out, " ,Value3:");
    out = concat(&out, &record.value3.to_string());
    out = concat(&out, " ,Value4:");
    out = concat(&out, &record.value4.to_string());
    out = concat(&out, " ,Value5:");
    out = concat(&out, record.value5.as_deref().unwrap_or_default());
    if record.includes_value6() {
        out = concat(&out, " ,Value6:");
        out = concat(&out, &format!("{:.2}", record.value6_rounded()));
    }
    out = concat(&out, " ,Value7:");
    out = concat(&out, &record.value7.format(DATE_TIME_PATTERN).to_string());
    out = concat(&out, " ,Value8:");
    out = concat(&out, &record.value8.format(TIME_PATTERN).to_string());
    out = concat(&out, " ,Value9:");
    out = concat(&out, &record.value9.format(DATE_PATTERN).to_string());
    out = concat(&out, " ,Value10:");
    for item in record.series() {
        out = concat(&out, &item.to_string());
    }
    Ok(out)
}

fn render_string_builder(mut out: String, record: &Record) -> Result<String, BufferError> {
    write!(out, "Value1:{}", record.value1)?;
    if record.includes_value2() {
        write!(out, " ,Value2:{}", record.value2)?;
    }
    write!(out, " ,Value3:{}", record.value3)?;
    write!(out, " ,Value4:{}", record.value4)?;
    out.push_str(" ,Value5:");
    out.push_str(record.value5.as_deref().unwrap_or_default());
    if record.includes_value6() {
        write!(out, " ,Value6:{:.2}", record.value6_rounded())?;
    }
    write!(out, " ,Value7:{}", record.value7.format(DATE_TIME_PATTERN))?;
    write!(out, " ,Value8:{}", record.value8.format(TIME_PATTERN))?;
    write!(out, " ,Value9:{}", record.value9.format(DATE_PATTERN))?;
    out.push_str(" ,Value10:");
    for item in record.series() {
        write!(out, "{item}")?;
    }
    Ok(out)
}

#[allow(clippy::unnecessary_wraps)]
fn render_interpolated(record: &Record, capacity: usize) -> Result<String, BufferError> {
    let mut out = String::with_capacity(capacity);
    out.push_str("Value1:");
    out.push_str(&record.value1.to_string());
    if record.includes_value2() {
        out.push_str(" ,Value2:");
        out.push_str(&record.value2.to_string());
    }
    out.push_str(" ,Value3:");
    out.push_str(&record.value3.to_string());
    out.push_str(" ,Value4:");
    out.push_str(&record.value4.to_string());
    out.push_str(" ,Value5:");
    out.push_str(record.value5.as_deref().unwrap_or_default());
    if record.includes_value6() {
        out.push_str(" ,Value6:");
        out.push_str(&format!("{:.2}", record.value6_rounded()));
    }
    out.push_str(" ,Value7:");
    out.push_str(&format!("{}", record.value7.format(DATE_TIME_PATTERN)));
    out.push_str(" ,Value8:");
    out.push_str(&format!("{}", record.value8.format(TIME_PATTERN)));
    out.push_str(" ,Value9:");
    out.push_str(&format!("{}", record.value9.format(DATE_PATTERN)));
    out.push_str(" ,Value10:");
    for item in record.series() {
        out.push_str(&item.to_string());
    }
    Ok(out)
}
