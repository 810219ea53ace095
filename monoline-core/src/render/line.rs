//! Integer Bresenham rasterization
//!
//! [`LinePoints`] yields the pixels of a segment in driving-axis order.
//! Shallow segments (`|dy| < |dx|`) are driven by `x`, everything else by
//! `y`. Endpoints are reordered so the driving axis always steps by +1,
//! which makes the output independent of the direction the caller gave.
//!
//! The decision arithmetic runs in `i64`, so any pair of `i32` endpoints is
//! accepted without overflow.

/// Iterator over the pixels of a straight segment, both endpoints included
#[derive(Debug, Clone)]
pub struct LinePoints {
    /// `y` drives instead of `x`
    steep: bool,
    /// Current position on the driving axis
    major: i64,
    /// Last position on the driving axis
    major_end: i64,
    /// Current position on the other axis
    minor: i64,
    /// +1 or -1
    minor_step: i64,
    /// Decision variable
    error: i64,
    /// Error update when the minor axis advances: `2 * (d_minor - d_major)`
    advance: i64,
    /// Error update when it holds: `2 * d_minor`
    hold: i64,
    done: bool,
}

impl LinePoints {
    /// Rasterize the segment `(x0, y0)` to `(x1, y1)`
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let dx = x1 - x0;
        let dy = y1 - y0;

        if dy.abs() < dx.abs() {
            if x0 > x1 {
                Self::low(x1, y1, x0, y0)
            } else {
                Self::low(x0, y0, x1, y1)
            }
        } else if y0 > y1 {
            Self::high(x1, y1, x0, y0)
        } else {
            Self::high(x0, y0, x1, y1)
        }
    }

    /// Shallow segment, `x0 <= x1`
    fn low(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let dx = x1 - x0;
        let (dy, step) = magnitude_and_step(y1 - y0);
        Self::driven(false, x0, x1, y0, step, dx, dy)
    }

    /// Steep segment, `y0 <= y1`
    fn high(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let dy = y1 - y0;
        let (dx, step) = magnitude_and_step(x1 - x0);
        Self::driven(true, y0, y1, x0, step, dy, dx)
    }

    fn driven(
        steep: bool,
        major: i64,
        major_end: i64,
        minor: i64,
        minor_step: i64,
        d_major: i64,
        d_minor: i64,
    ) -> Self {
        Self {
            steep,
            major,
            major_end,
            minor,
            minor_step,
            error: 2 * d_minor - d_major,
            advance: 2 * (d_minor - d_major),
            hold: 2 * d_minor,
            done: false,
        }
    }

    /// True when `y` is the driving axis
    pub fn is_steep(&self) -> bool {
        self.steep
    }
}

fn magnitude_and_step(delta: i64) -> (i64, i64) {
    if delta < 0 {
        (-delta, -1)
    } else {
        (delta, 1)
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Both coordinates stay between the i32 endpoints
        let (major, minor) = (self.major as i32, self.minor as i32);
        let point = if self.steep {
            (minor, major)
        } else {
            (major, minor)
        };

        if self.major == self.major_end {
            self.done = true;
        } else {
            if self.error > 0 {
                self.minor += self.minor_step;
                self.error += self.advance;
            } else {
                self.error += self.hold;
            }
            self.major += 1;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.done {
            0
        } else {
            // Saturates only on targets where usize is narrower than 33 bits
            usize::try_from(self.major_end - self.major + 1).unwrap_or(usize::MAX)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

impl core::iter::FusedIterator for LinePoints {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use heapless::Vec;
    use proptest::prelude::*;

    fn collect(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32), 128> {
        LinePoints::new(x0, y0, x1, y1).collect()
    }

    fn sorted(mut points: Vec<(i32, i32), 128>) -> Vec<(i32, i32), 128> {
        points.sort_unstable();
        points
    }

    #[test]
    fn test_single_point() {
        assert_eq!(&collect(4, 4, 4, 4)[..], &[(4, 4)]);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(
            &collect(0, 0, 5, 5)[..],
            &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]
        );
    }

    #[test]
    fn test_diagonal_direction_independent() {
        assert_eq!(sorted(collect(0, 0, 5, 5)), sorted(collect(5, 5, 0, 0)));
    }

    #[test]
    fn test_shallow_reference_output() {
        // D starts at 2*2-6 = -2: hold, +4 -> 2: advance, -8 -> -6 ...
        assert_eq!(
            &collect(0, 0, 6, 2)[..],
            &[(0, 0), (1, 0), (2, 1), (3, 1), (4, 1), (5, 2), (6, 2)]
        );
    }

    #[test]
    fn test_steep_reference_output() {
        assert_eq!(
            &collect(0, 0, 2, 6)[..],
            &[(0, 0), (0, 1), (1, 2), (1, 3), (1, 4), (2, 5), (2, 6)]
        );
    }

    #[test]
    fn test_anti_diagonal_staircase() {
        let points = collect(10, 0, 0, 10);
        assert_eq!(points.len(), 11);
        for (i, &(x, y)) in points.iter().enumerate() {
            assert_eq!(y, i as i32);
            assert_eq!(x, 10 - i as i32);
        }
    }

    #[test]
    fn test_horizontal_and_vertical() {
        let h = collect(3, 7, 0, 7);
        assert!(!LinePoints::new(3, 7, 0, 7).is_steep());
        assert_eq!(&h[..], &[(0, 7), (1, 7), (2, 7), (3, 7)]);

        let v = collect(2, 4, 2, 1);
        assert!(LinePoints::new(2, 4, 2, 1).is_steep());
        assert_eq!(&v[..], &[(2, 1), (2, 2), (2, 3), (2, 4)]);
    }

    #[test]
    fn test_exact_size() {
        let line = LinePoints::new(0, 0, 83, 47);
        assert_eq!(line.len(), 84);
        assert_eq!(line.count(), 84);
    }

    #[test]
    fn test_full_range_endpoints() {
        let span = 1usize << 32;

        let h = LinePoints::new(i32::MAX, 0, i32::MIN, 0);
        assert!(!h.is_steep());
        assert_eq!(h.len(), span);
        let start: Vec<(i32, i32), 3> = h.take(3).collect();
        assert_eq!(&start[..], &[(i32::MIN, 0), (i32::MIN + 1, 0), (i32::MIN + 2, 0)]);

        let d = LinePoints::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(d.len(), span);
        let start: Vec<(i32, i32), 3> = d.take(3).collect();
        assert_eq!(
            &start[..],
            &[(i32::MIN, i32::MIN), (i32::MIN + 1, i32::MIN + 1), (i32::MIN + 2, i32::MIN + 2)]
        );
    }

    #[test]
    fn test_short_segment_at_extremes() {
        assert_eq!(
            &collect(i32::MAX, i32::MIN + 1, i32::MAX - 2, i32::MIN)[..],
            &[(i32::MAX - 2, i32::MIN), (i32::MAX - 1, i32::MIN), (i32::MAX, i32::MIN + 1)]
        );
    }

    proptest! {
        #[test]
        fn prop_endpoints_included(x0 in 0i32..84, y0 in 0i32..48, x1 in 0i32..84, y1 in 0i32..48) {
            let points = collect(x0, y0, x1, y1);
            prop_assert!(points.contains(&(x0, y0)));
            prop_assert!(points.contains(&(x1, y1)));
        }

        #[test]
        fn prop_direction_independent(x0 in 0i32..84, y0 in 0i32..48, x1 in 0i32..84, y1 in 0i32..48) {
            prop_assert_eq!(sorted(collect(x0, y0, x1, y1)), sorted(collect(x1, y1, x0, y0)));
        }

        #[test]
        fn prop_connected_and_bounded(x0 in 0i32..84, y0 in 0i32..48, x1 in 0i32..84, y1 in 0i32..48) {
            let points = collect(x0, y0, x1, y1);
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            prop_assert_eq!(points.len(), expected);

            for pair in points.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!((a.0 - b.0).abs() <= 1);
                prop_assert!((a.1 - b.1).abs() <= 1);
            }
            for &(x, y) in points.iter() {
                prop_assert!(x >= x0.min(x1) && x <= x0.max(x1));
                prop_assert!(y >= y0.min(y1) && y <= y0.max(y1));
            }
        }
    }
}
