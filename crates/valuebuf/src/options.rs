/// Sizing knobs for the sample [`Record`](crate::Record) and the strategies
/// that render it.
///
/// # Examples
///
/// ```rust
/// use valuebuf::{FixtureOptions, Record, Strategy};
///
/// let options = FixtureOptions {
///     sequence_terms: 10,
///     ..Default::default()
/// };
/// let record = Record::sample(&options, Record::BASE_INSTANT);
/// let text = Strategy::BufferOnStack.render(&record, &options)?;
/// assert!(text.starts_with("Value1:100 ,Value2:200"));
/// # Ok::<(), valuebuf::BufferError>(())
/// ```
///
/// # Default
///
/// The defaults reproduce the benchmark fixture: a 20 480-byte pre-sized
/// capacity, a 10 000-term dash-joined sequence, and a five-element series.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureOptions {
    /// Capacity handed to the pre-sized strategies
    /// ([`Strategy::StringBuilderWithCapacity`](crate::Strategy::StringBuilderWithCapacity)
    /// and [`Strategy::BufferOnHeap`](crate::Strategy::BufferOnHeap)).
    ///
    /// # Default
    ///
    /// `20_480`
    pub capacity: usize,

    /// Number of integers joined with `-` to build the long text field,
    /// starting from `0`.
    ///
    /// # Default
    ///
    /// `10_000`
    pub sequence_terms: usize,

    /// Length of the integer series field, `0..series_len`.
    ///
    /// # Default
    ///
    /// `5`
    pub series_len: usize,
}

impl FixtureOptions {
    /// Capacity used by the stack-allocated strategy.
    pub const STACK_CAPACITY: usize = 20_480;
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            capacity: Self::STACK_CAPACITY,
            sequence_terms: 10_000,
            series_len: 5,
        }
    }
}
