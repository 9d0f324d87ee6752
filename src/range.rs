//! Index/pixel walk primitives over sequences of non-uniform sizes.
//!
//! Rows and columns have per-index sizes (a sparse override map over a
//! default), so every pixel-to-index conversion is a linear walk that
//! accumulates sizes until it reaches a target offset. Both the hit-testing
//! and scroll-snapping paths share the walk in [`range_reduce`].

/// Sum of `size_of(i)` for `i` in `[start, stop)`.
///
/// Returns `0.0` when `start >= stop`.
pub fn range_sum<F>(start: u32, stop: u32, size_of: F) -> f32
where
    F: Fn(u32) -> f32,
{
    let mut total = 0.0;
    for i in start..stop {
        total += size_of(i);
    }
    total
}

/// Walk indices from `start`, accumulating sizes on top of `init_offset`,
/// until the running offset reaches or exceeds `target` (or `stop` is hit).
///
/// Returns `(index, offset, size)`:
/// - `index`: one past the last index consumed, i.e. the first index whose
///   cumulative offset reaches `target`. Equals `start` when `init_offset`
///   already reaches `target`, and saturates at `stop`.
/// - `offset`: the leading edge of the last consumed index (`index - 1`),
///   i.e. the accumulated offset minus that index's size. When nothing was
///   consumed this is `init_offset - init_size`.
/// - `size`: the size of the last consumed index, or `init_size` when
///   nothing was consumed.
///
/// Callers seed `init_offset`/`init_size` with the header band so that a
/// target inside the header resolves without consuming any index.
pub fn range_reduce<F>(
    start: u32,
    stop: u32,
    init_offset: f32,
    init_size: f32,
    target: f32,
    size_of: F,
) -> (u32, f32, f32)
where
    F: Fn(u32) -> f32,
{
    let mut offset = init_offset;
    let mut size = init_size;
    let mut index = start;
    for i in start..stop {
        if offset >= target {
            break;
        }
        index = i + 1;
        size = size_of(i);
        offset += size;
    }
    (index, offset - size, size)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_range_sum_uniform() {
        assert_eq!(range_sum(0, 4, |_| 25.0), 100.0);
    }

    #[test]
    fn test_range_sum_empty() {
        assert_eq!(range_sum(3, 3, |_| 25.0), 0.0);
        assert_eq!(range_sum(5, 2, |_| 25.0), 0.0);
    }

    #[test]
    fn test_range_sum_respects_overrides() {
        let size = |i: u32| if i == 1 { 60.0 } else { 25.0 };
        assert_eq!(range_sum(0, 3, size), 110.0);
    }

    #[test]
    fn test_reduce_target_inside_first_index() {
        // Target 10 inside index 0: consume one, leading edge 0.
        let (index, offset, size) = range_reduce(0, 100, 0.0, 0.0, 10.0, |_| 25.0);
        assert_eq!(index, 1);
        assert_eq!(offset, 0.0);
        assert_eq!(size, 25.0);
    }

    #[test]
    fn test_reduce_exact_boundary_stops_before_next() {
        // Target exactly at the 25px boundary belongs to index 0, not 1.
        let (index, offset, size) = range_reduce(0, 100, 0.0, 0.0, 25.0, |_| 25.0);
        assert_eq!(index, 1);
        assert_eq!(offset, 0.0);
        assert_eq!(size, 25.0);
    }

    #[test]
    fn test_reduce_nothing_consumed_when_init_reaches_target() {
        // Seeded with a 25px header band: a 20px target stays in the header.
        let (index, offset, size) = range_reduce(0, 100, 25.0, 25.0, 20.0, |_| 25.0);
        assert_eq!(index, 0);
        assert_eq!(offset, 0.0);
        assert_eq!(size, 25.0);
    }

    #[test]
    fn test_reduce_saturates_at_stop() {
        let (index, offset, size) = range_reduce(0, 4, 0.0, 0.0, 1_000.0, |_| 25.0);
        assert_eq!(index, 4);
        assert_eq!(offset, 75.0);
        assert_eq!(size, 25.0);
    }

    #[test]
    fn test_reduce_non_uniform_sizes() {
        // Sizes 25, 60, 25: pixel 70 falls inside index 1 (band [25, 85)).
        let size_of = |i: u32| if i == 1 { 60.0 } else { 25.0 };
        let (index, offset, size) = range_reduce(0, 10, 0.0, 0.0, 70.0, size_of);
        assert_eq!(index, 2);
        assert_eq!(offset, 25.0);
        assert_eq!(size, 60.0);
    }

    #[test]
    fn test_reduce_negative_init_offset() {
        // A scrolled walk seeds a negative offset; pixel 30 with 75px scrolled
        // out lands in index 4 (band [100, 125) unscrolled, [25, 50) on screen).
        let (index, offset, size) = range_reduce(0, 100, -75.0, 0.0, 30.0, |_| 25.0);
        assert_eq!(index, 5);
        assert_eq!(offset, 25.0);
        assert_eq!(size, 25.0);
    }

    #[test]
    fn test_reduce_starts_mid_sequence() {
        // Walking from index 3 accumulates only indexes 3 and up.
        let (index, offset, size) = range_reduce(3, 100, 0.0, 0.0, 60.0, |_| 25.0);
        assert_eq!(index, 6);
        assert_eq!(offset, 50.0);
        assert_eq!(size, 25.0);
    }
}
