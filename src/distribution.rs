//! A module for frequency distributions over per-node statistics.

use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
};

/// Number of decimal places real-valued statistics are rounded to before being bucketed.
pub const PRECISION: usize = 10;

const SCALE: f64 = 1e10;

/// A real-valued statistic rounded to [`PRECISION`] decimal places, usable as an ordered key.
///
/// Ordering follows the IEEE total order. Every NaN is stored as the same canonical NaN, so all
/// undefined values share a single bucket which sorts after every finite value. Negative zero is
/// stored as positive zero.
///
/// # Examples
///
/// ```
/// use randnet::distribution::Rounded;
///
/// assert_eq!(Rounded::new(1.0 / 3.0).value(), 0.3333333333);
/// assert_eq!(Rounded::new(f64::NAN), Rounded::new(-f64::NAN));
/// assert!(Rounded::new(1.0) < Rounded::new(f64::NAN));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rounded(f64);

impl Rounded {
    /// Rounds `value` to [`PRECISION`] decimal places.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(f64::NAN);
        }

        // Adding positive zero turns -0.0 into 0.0 and leaves everything else untouched.
        Self((value * SCALE).round() / SCALE + 0.0)
    }

    /// Returns the rounded value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns whether the underlying statistic was undefined.
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl PartialEq for Rounded {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rounded {}

impl PartialOrd for Rounded {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rounded {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Rounded {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Rounded {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", PRECISION, self.0)
    }
}

/// A probability mass function over statistic values, ordered by key.
///
/// Each sample contributes `1 / n` to its key, where `n` is the number of samples, so the
/// frequencies of a non-empty distribution sum to one.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution<K> {
    frequencies: BTreeMap<K, f64>,
}

impl<K: Ord> Distribution<K> {
    /// Tallies the samples and normalises the counts by the number of samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::distribution::Distribution;
    ///
    /// let distribution = Distribution::from_samples([1, 2, 2, 3]);
    ///
    /// assert_eq!(distribution.get(&2), Some(0.5));
    /// assert_eq!(distribution.get(&4), None);
    /// ```
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut counts: BTreeMap<K, usize> = BTreeMap::new();
        let mut total = 0usize;

        for sample in samples {
            *counts.entry(sample).or_default() += 1;
            total += 1;
        }

        let frequencies = counts
            .into_iter()
            .map(|(key, count)| (key, count as f64 / total as f64))
            .collect();

        Self { frequencies }
    }

    /// Returns the frequency recorded for `key`.
    pub fn get(&self, key: &K) -> Option<f64> {
        self.frequencies.get(key).copied()
    }

    /// Iterates over `(key, frequency)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.frequencies.iter().map(|(key, freq)| (key, *freq))
    }

    /// Returns the distinct keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.frequencies.keys()
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns whether the distribution holds no keys, i.e. it was built from no samples.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Returns the sum of all frequencies, one (up to rounding) unless the distribution is
    /// empty.
    pub fn total(&self) -> f64 {
        self.frequencies.values().sum()
    }

    /// Returns the underlying ordered mapping.
    pub fn as_map(&self) -> &BTreeMap<K, f64> {
        &self.frequencies
    }

    /// Consumes the distribution, returning the underlying ordered mapping.
    pub fn into_map(self) -> BTreeMap<K, f64> {
        self.frequencies
    }
}

/// Writes one `key value` line per entry, in ascending key order.
impl<K: fmt::Display> fmt::Display for Distribution<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, freq) in &self.frequencies {
            writeln!(f, "{key} {freq}")?;
        }

        Ok(())
    }
}
