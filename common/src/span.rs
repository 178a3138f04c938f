//! Inclusive integer spans and span-set merging.

/// A non-empty inclusive range of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub lo: i64,
    pub hi: i64,
}

impl Span {
    pub fn new(lo: i64, hi: i64) -> Self {
        assert!(lo <= hi, "span {}..={} is empty", lo, hi);
        Self { lo, hi }
    }

    pub fn contains(&self, n: i64) -> bool {
        self.lo <= n && n <= self.hi
    }

    /// Number of integers covered.
    pub fn count(&self) -> i64 {
        self.hi - self.lo + 1
    }
}

/// Collapse overlapping or abutting spans into a sorted disjoint set.
pub fn merge(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_unstable();
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());

    for span in spans {
        match merged.last_mut() {
            Some(last) if span.lo <= last.hi + 1 => last.hi = last.hi.max(span.hi),
            _ => merged.push(span),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn spans_of(raw: &[(i16, i16)]) -> Vec<Span> {
        raw.iter()
            .map(|&(a, b)| Span::new(i64::from(a.min(b)), i64::from(a.max(b))))
            .collect()
    }

    #[test]
    fn bridging_span_joins_its_neighbors() {
        let merged = merge(spans_of(&[(3, 5), (10, 14), (16, 20), (12, 18)]));
        assert_eq!(merged, vec![Span::new(3, 5), Span::new(10, 20)]);
        assert_eq!(merged.iter().map(Span::count).sum::<i64>(), 14);
    }

    #[test]
    fn abutting_spans_collapse() {
        assert_eq!(
            merge(spans_of(&[(3, 5), (6, 8)])),
            vec![Span::new(3, 8)]
        );
    }

    quickcheck! {
        fn merge_is_idempotent(raw: Vec<(i16, i16)>) -> bool {
            let once = merge(spans_of(&raw));
            merge(once.clone()) == once
        }

        fn merged_spans_are_disjoint_and_sorted(raw: Vec<(i16, i16)>) -> bool {
            merge(spans_of(&raw))
                .windows(2)
                .all(|pair| pair[0].hi + 1 < pair[1].lo)
        }

        fn merge_preserves_membership(raw: Vec<(i16, i16)>, n: i16) -> bool {
            let spans = spans_of(&raw);
            let n = i64::from(n);
            let covered = spans.iter().any(|s| s.contains(n));
            merge(spans).iter().any(|s| s.contains(n)) == covered
        }
    }
}
