//! Ordered boundary tables.
//!
//! A table is a list of `(lower_bound, coefficient)` pairs sorted by bound in
//! strictly descending order, finishing at the floor bound. Lookups scan from
//! the top and the first bound at or below the value wins, so ties resolve to
//! the highest qualifying boundary.

use tracing::trace;

#[derive(Debug, Clone, Copy)]
pub struct CoefficientTable<B: 'static, C: 'static> {
    name: &'static str,
    entries: &'static [(B, C)],
}

impl<B, C> CoefficientTable<B, C>
where
    B: Copy + PartialOrd + std::fmt::Debug,
    C: Copy + PartialOrd + std::fmt::Debug,
{
    pub const fn new(name: &'static str, entries: &'static [(B, C)]) -> Self {
        assert!(!entries.is_empty(), "coefficient table cannot be empty");
        Self { name, entries }
    }

    pub fn entries(&self) -> &'static [(B, C)] {
        self.entries
    }

    /// Highest entry.
    pub fn top(&self) -> (B, C) {
        self.entries[0]
    }

    /// Floor entry.
    pub fn floor(&self) -> (B, C) {
        self.entries[self.entries.len() - 1]
    }

    /// Entry for the highest bound not exceeding `value`.
    ///
    /// Values below the floor bound resolve to the floor entry; callers reject
    /// those before looking anything up.
    pub fn lookup(&self, value: B) -> (B, C) {
        let entry = self
            .entries
            .iter()
            .copied()
            .find(|(bound, _)| value >= *bound)
            .unwrap_or_else(|| self.floor());
        trace!(table = self.name, ?value, ?entry, "Resolved tier");
        entry
    }

    /// Smallest bound whose tier pays at least `coefficient`.
    ///
    /// Walks down the table and stops at the first entry whose next lower
    /// neighbour pays strictly less than `coefficient`. When every tier pays
    /// at least that much the floor bound is returned.
    pub fn min_bound_for(&self, coefficient: C) -> B {
        let bound = self
            .entries
            .windows(2)
            .find(|pair| pair[1].1 < coefficient)
            .map(|pair| pair[0].0)
            .unwrap_or_else(|| self.floor().0);
        trace!(table = self.name, ?coefficient, ?bound, "Resolved minimum bound");
        bound
    }

    /// Bounds strictly descending and coefficients non-increasing.
    pub fn is_well_formed(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].0 > pair[1].0 && pair[0].1 >= pair[1].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: CoefficientTable<i64, f64> =
        CoefficientTable::new("sample", &[(100, 3.0), (50, 2.0), (10, 1.5), (0, 1.0)]);

    #[test]
    fn test_lookup_floors_to_boundary() {
        assert_eq!(SAMPLE.lookup(100), (100, 3.0));
        assert_eq!(SAMPLE.lookup(99), (50, 2.0));
        assert_eq!(SAMPLE.lookup(50), (50, 2.0));
        assert_eq!(SAMPLE.lookup(10), (10, 1.5));
        assert_eq!(SAMPLE.lookup(9), (0, 1.0));
        assert_eq!(SAMPLE.lookup(0), (0, 1.0));
    }

    #[test]
    fn test_lookup_above_top() {
        assert_eq!(SAMPLE.lookup(1_000), (100, 3.0));
    }

    #[test]
    fn test_lookup_below_floor_uses_floor() {
        assert_eq!(SAMPLE.lookup(-5), (0, 1.0));
    }

    #[test]
    fn test_min_bound_for() {
        assert_eq!(SAMPLE.min_bound_for(3.0), 100);
        assert_eq!(SAMPLE.min_bound_for(2.5), 100);
        assert_eq!(SAMPLE.min_bound_for(2.0), 50);
        assert_eq!(SAMPLE.min_bound_for(1.6), 50);
        assert_eq!(SAMPLE.min_bound_for(1.5), 10);
        assert_eq!(SAMPLE.min_bound_for(1.0), 0);
        assert_eq!(SAMPLE.min_bound_for(0.2), 0);
    }

    #[test]
    fn test_top_and_floor() {
        assert_eq!(SAMPLE.top(), (100, 3.0));
        assert_eq!(SAMPLE.floor(), (0, 1.0));
    }

    #[test]
    fn test_is_well_formed() {
        assert!(SAMPLE.is_well_formed());

        const UNSORTED: CoefficientTable<i64, f64> =
            CoefficientTable::new("unsorted", &[(10, 1.0), (50, 2.0)]);
        assert!(!UNSORTED.is_well_formed());
    }
}
