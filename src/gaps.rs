/// A non-trading interval on the minute-of-day axis, `[start, end[`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapSegment {
    /// Gap start in minutes since midnight.
    pub start: i64,
    /// Gap end in minutes since midnight.
    pub end: i64,
    /// Total duration of ALL gaps preceding this one (excluding this one).
    pub cumulative_before: i64,
}

impl GapSegment {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            cumulative_before: 0,
        }
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Index for wall-clock minute <-> logical (compressed) minute transformation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GapIndex {
    segments: Vec<GapSegment>,
}

impl GapIndex {
    /// Creates a new index from non-overlapping segments.
    pub fn new(mut segments: Vec<GapSegment>) -> Self {
        segments.sort_by_key(|s| s.start);

        let mut cumulative = 0;
        for segment in segments.iter_mut() {
            segment.cumulative_before = cumulative;
            cumulative += segment.duration();
        }

        Self { segments }
    }

    /// Converts a wall-clock minute to a logical minute.
    pub fn to_logical(&self, minute: i64) -> i64 {
        if self.segments.is_empty() {
            return minute;
        }

        match self.segments.binary_search_by_key(&minute, |s| s.start) {
            // Exactly at the start of a gap
            Ok(idx) => minute - self.segments[idx].cumulative_before,
            Err(0) => minute,
            Err(idx) => {
                let prev = &self.segments[idx - 1];
                if minute < prev.end {
                    // Inside a gap -> compress to gap start
                    prev.start - prev.cumulative_before
                } else {
                    minute - (prev.cumulative_before + prev.duration())
                }
            }
        }
    }

    /// Converts a logical minute back to wall-clock.
    /// A logical minute sitting on a collapsed gap resolves to the gap end.
    pub fn to_real(&self, logical: i64) -> i64 {
        if self.segments.is_empty() {
            return logical;
        }

        let mut low = 0;
        let mut high = self.segments.len();

        while low < high {
            let mid = low + (high - low) / 2;
            let mid_segment = &self.segments[mid];
            let logical_start = mid_segment.start - mid_segment.cumulative_before;

            if logical_start <= logical {
                low = mid + 1;
            } else {
                high = mid;
            }
        }

        // 'low' is the first segment starting AFTER `logical`.
        if low == 0 {
            logical
        } else {
            let segment = &self.segments[low - 1];
            logical + segment.cumulative_before + segment.duration()
        }
    }

    /// Checks if a wall-clock minute falls strictly inside a gap; both edges are outside.
    pub fn is_inside(&self, minute: i64) -> bool {
        match self.segments.binary_search_by_key(&minute, |s| s.start) {
            Ok(_) => false,
            Err(0) => false,
            Err(idx) => minute < self.segments[idx - 1].end,
        }
    }

    /// Sum of all gap durations.
    pub fn total(&self) -> i64 {
        self.segments
            .last()
            .map(|s| s.cumulative_before + s.duration())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> GapIndex {
        // 11:30 -> 13:00
        GapIndex::new(vec![GapSegment::new(690, 780)])
    }

    #[test]
    fn test_cumulative_offsets() {
        let index = GapIndex::new(vec![GapSegment::new(300, 400), GapSegment::new(100, 200)]);
        assert_eq!(index.to_logical(50), 50);
        assert_eq!(index.to_logical(250), 150);
        assert_eq!(index.to_logical(350), 200);
        assert_eq!(index.to_logical(450), 250);
        assert_eq!(index.total(), 200);
    }

    #[test]
    fn test_mapping() {
        let index = lunch();

        assert_eq!(index.to_logical(600), 600);
        assert_eq!(index.to_logical(690), 690);
        assert_eq!(index.to_logical(735), 690); // Inside the gap
        assert_eq!(index.to_logical(780), 690); // Gap end
        assert_eq!(index.to_logical(800), 710);

        assert_eq!(index.to_real(600), 600);
        assert_eq!(index.to_real(690), 780);
        assert_eq!(index.to_real(710), 800);
    }

    #[test]
    fn test_is_inside() {
        let index = lunch();
        assert!(!index.is_inside(689));
        assert!(!index.is_inside(690));
        assert!(index.is_inside(691));
        assert!(index.is_inside(779));
        assert!(!index.is_inside(780));
    }

    #[test]
    fn test_empty_index_is_identity() {
        let index = GapIndex::default();
        assert_eq!(index.to_logical(42), 42);
        assert_eq!(index.to_real(42), 42);
        assert_eq!(index.total(), 0);
    }
}
