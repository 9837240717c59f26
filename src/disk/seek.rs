use crate::common::{Cylinder, SeekDistance};

/// Sums the head movement between consecutive visits.
/// Sequences with fewer than two entries cost nothing.
pub fn total_seek_time(sequence: &[Cylinder]) -> SeekDistance {
    sequence
        .windows(2)
        .map(|pair| SeekDistance::from(pair[0].abs_diff(pair[1])))
        .sum()
}

/// Average head movement per request.
///
/// `request_count` must be non-zero; a zero count yields NaN.
pub fn average_seek_time(total_seek_time: SeekDistance, request_count: usize) -> f64 {
    total_seek_time as f64 / request_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_seek_time_degenerate() {
        assert_eq!(total_seek_time(&[]), 0);
        assert_eq!(total_seek_time(&[53]), 0);
    }

    #[test]
    fn test_total_seek_time_both_directions() {
        // 53 -> 98 -> 37 -> 37
        assert_eq!(total_seek_time(&[53, 98, 37, 37]), 45 + 61);
    }

    #[test]
    fn test_average_seek_time() {
        assert_eq!(average_seek_time(640, 8), 80.0);
        assert_eq!(average_seek_time(183, 8), 22.875);
        assert!(average_seek_time(0, 0).is_nan());
    }
}
