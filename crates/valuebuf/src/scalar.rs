//! Values that [`GrowableCharBuffer::append_formatted`] knows how to render.
//!
//! [`Scalar`] is a closed set: every variant except [`Scalar::Other`] can be
//! written straight into a bounded byte region without first building a
//! `String`. `Other` carries any `Display` value and always goes through a
//! temporary string.
//!
//! [`GrowableCharBuffer::append_formatted`]: crate::GrowableCharBuffer::append_formatted
use alloc::string::String;
use core::fmt::{self, Write};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::BufferError;

/// How a [`Scalar`] should be rendered when the plain `Display` form is not
/// wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSpec<'p> {
    /// Fixed-point notation with exactly this many fractional digits.
    ///
    /// Integers get a zero fraction, floats use Rust's `{:.N}`, and decimals
    /// are rounded half away from zero before printing. The count is a `u16`
    /// because that is the largest precision `core::fmt` accepts.
    Fixed(u16),
    /// A chrono `strftime` pattern, e.g. `"%Y-%m-%d %H:%M:%S"`.
    Pattern(&'p str),
}

impl FormatSpec<'_> {
    fn describe(&self) -> &'static str {
        match self {
            FormatSpec::Fixed(_) => "fixed-point",
            FormatSpec::Pattern(_) => "date/time pattern",
        }
    }
}

/// A value to append with [`GrowableCharBuffer::append_formatted`].
///
/// [`GrowableCharBuffer::append_formatted`]: crate::GrowableCharBuffer::append_formatted
#[derive(Clone, Copy)]
pub enum Scalar<'v> {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A single-precision float.
    Float(f32),
    /// A double-precision float.
    Double(f64),
    /// An exact fixed-point decimal.
    Decimal(Decimal),
    /// A calendar date with a time of day.
    DateTime(NaiveDateTime),
    /// A calendar date.
    Date(NaiveDate),
    /// A time of day.
    Time(NaiveTime),
    /// Anything else that implements `Display`; never written directly.
    Other(&'v dyn fmt::Display),
}

impl<'v> Scalar<'v> {
    /// Wraps an arbitrary `Display` value.
    pub fn display(value: &'v dyn fmt::Display) -> Self {
        Scalar::Other(value)
    }

    /// Whether this value can be formatted straight into the buffer's spare
    /// region. `false` means the buffer formats into a temporary `String`
    /// and copies it.
    #[must_use]
    pub fn supports_direct_write(&self) -> bool {
        !matches!(self, Scalar::Other(_))
    }

    /// Short name of the value's kind, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "integer",
            Scalar::UInt(_) => "unsigned integer",
            Scalar::Float(_) => "float",
            Scalar::Double(_) => "double",
            Scalar::Decimal(_) => "decimal",
            Scalar::DateTime(_) => "date-time",
            Scalar::Date(_) => "date",
            Scalar::Time(_) => "time",
            Scalar::Other(_) => "display",
        }
    }

    /// Renders the value into a fresh `String`.
    ///
    /// This is the general-purpose path; the buffer's direct writes produce
    /// the same bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::FormatSpecMismatch`] if `spec` does not apply to this
    /// kind of value, [`BufferError::Format`] if the formatter fails.
    pub fn render(&self, spec: Option<FormatSpec<'_>>) -> Result<String, BufferError> {
        let mut out = String::new();
        self.write_to(spec, &mut out)?;
        Ok(out)
    }

    /// Checks that `spec` applies to this kind of value without writing
    /// anything.
    pub(crate) fn check_spec(&self, spec: Option<FormatSpec<'_>>) -> Result<(), BufferError> {
        let applies = match spec {
            None => true,
            Some(FormatSpec::Fixed(_)) => matches!(
                self,
                Scalar::Int(_)
                    | Scalar::UInt(_)
                    | Scalar::Float(_)
                    | Scalar::Double(_)
                    | Scalar::Decimal(_)
            ),
            Some(FormatSpec::Pattern(_)) => matches!(
                self,
                Scalar::DateTime(_) | Scalar::Date(_) | Scalar::Time(_)
            ),
        };
        match spec {
            Some(spec) if !applies => Err(BufferError::FormatSpecMismatch {
                kind: self.kind(),
                spec: spec.describe(),
            }),
            _ => Ok(()),
        }
    }

    /// Writes the value into `out`.
    ///
    /// A failing `out` is reported as [`BufferError::Format`]; the bounded
    /// writer used by the buffer tells "out of room" apart on its own.
    pub(crate) fn write_to<W: Write>(
        &self,
        spec: Option<FormatSpec<'_>>,
        out: &mut W,
    ) -> Result<(), BufferError> {
        self.check_spec(spec)?;
        match (*self, spec) {
            (Scalar::Int(v), Some(FormatSpec::Fixed(digits))) => {
                write!(out, "{v}")?;
                write_zero_fraction(out, digits)?;
            }
            (Scalar::UInt(v), Some(FormatSpec::Fixed(digits))) => {
                write!(out, "{v}")?;
                write_zero_fraction(out, digits)?;
            }
            (Scalar::Float(v), Some(FormatSpec::Fixed(digits))) => {
                let digits = usize::from(digits);
                write!(out, "{v:.digits$}")?;
            }
            (Scalar::Double(v), Some(FormatSpec::Fixed(digits))) => {
                let digits = usize::from(digits);
                write!(out, "{v:.digits$}")?;
            }
            (Scalar::Decimal(v), Some(FormatSpec::Fixed(digits))) => {
                let rounded = v.round_dp_with_strategy(
                    u32::from(digits),
                    RoundingStrategy::MidpointAwayFromZero,
                );
                let digits = usize::from(digits);
                write!(out, "{rounded:.digits$}")?;
            }
            // `DelayedFormat`'s `Display` renders into a `String` first;
            // `write_to` goes to the sink piece by piece.
            (Scalar::DateTime(v), Some(FormatSpec::Pattern(pattern))) => {
                v.format(pattern).write_to(out)?;
            }
            (Scalar::Date(v), Some(FormatSpec::Pattern(pattern))) => {
                v.format(pattern).write_to(out)?;
            }
            (Scalar::Time(v), Some(FormatSpec::Pattern(pattern))) => {
                v.format(pattern).write_to(out)?;
            }
            (value, _) => write!(out, "{value}")?,
        }
        Ok(())
    }
}

fn write_zero_fraction<W: Write>(out: &mut W, digits: u16) -> fmt::Result {
    if digits == 0 {
        return Ok(());
    }
    out.write_char('.')?;
    for _ in 0..digits {
        out.write_char('0')?;
    }
    Ok(())
}

/// The plain, spec-less rendering of each variant.
impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::UInt(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Double(v) => write!(f, "{v}"),
            Scalar::Decimal(v) => write!(f, "{v}"),
            Scalar::DateTime(v) => write!(f, "{v}"),
            Scalar::Date(v) => write!(f, "{v}"),
            Scalar::Time(v) => write!(f, "{v}"),
            Scalar::Other(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Debug for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar::{}({self})", self.kind())
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar<'_> {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value.into())
                }
            }
        )*
    };
}

scalar_from! {
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => UInt,
    u16 => UInt,
    u32 => UInt,
    u64 => UInt,
    f32 => Float,
    f64 => Double,
    Decimal => Decimal,
    NaiveDateTime => DateTime,
    NaiveDate => Date,
    NaiveTime => Time,
}
