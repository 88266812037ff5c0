//! Distance-to-level conversion for the ultrasonic gauges.
//!
//! A gauge looks DOWN at the water surface from the top of a container
//! of calibrated height: the shorter the measured distance, the higher
//! the water.

/// Convert a gauge distance (cm) to a water level (mm) against the
/// channel's calibrated height.
///
/// The millimetre distance is truncated toward zero (integer-cast
/// semantics).  The result is intentionally NOT clamped: a negative
/// level means the gauge saw past the calibrated range, and a level
/// above the container height means water closer than the gauge
/// minimum — i.e. overflow, which the classifier must see unmodified.
pub fn to_level_mm(distance_cm: f32, height_mm: i32) -> i32 {
    height_mm - (distance_cm * 10.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_truncation_toward_zero() {
        assert_eq!(to_level_mm(8.7, 100), 13); // 100 - 87
        assert_eq!(to_level_mm(8.79, 100), 13); // 87.9 mm truncates to 87
        assert_eq!(to_level_mm(3.0, 140), 110);
    }

    #[test]
    fn zero_distance_reads_as_full_height() {
        assert_eq!(to_level_mm(0.0, 100), 100);
        assert_eq!(to_level_mm(0.0, 140), 140);
    }

    #[test]
    fn out_of_range_levels_are_not_clamped() {
        // Gauge saw past the container floor.
        assert_eq!(to_level_mm(20.0, 100), -100);
        // There is no ceiling either: height is just an offset.
        assert_eq!(to_level_mm(0.5, 140), 135);
    }
}
