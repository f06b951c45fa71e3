//! Tiered encouragement messages for the score screen.

/// Pick the message for a final score.
///
/// Tiers are keyed by score percentage with inclusive lower bounds,
/// highest first, so exactly one matches for any score in `[0, total]`.
pub fn encouragement_message(score: usize, total: usize) -> &'static str {
    let percentage = if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    if percentage == 100.0 {
        "WOW! Perfect score! You're a math star!"
    } else if percentage >= 90.0 {
        "Amazing! You're almost perfect!"
    } else if percentage >= 70.0 {
        "Great job! You're doing awesome!"
    } else if percentage >= 50.0 {
        "Good effort! Keep practicing!"
    } else {
        "Keep trying! You can do it!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        let perfect = encouragement_message(12, 12);
        let second = encouragement_message(9, 10); // exactly 90%
        let third = encouragement_message(7, 10); // exactly 70%
        let fourth = encouragement_message(5, 10); // exactly 50%
        let lowest = encouragement_message(0, 12);

        assert!(perfect.contains("Perfect"));
        assert!(second.contains("Amazing"));
        assert!(third.contains("Great job"));
        assert!(fourth.contains("Good effort"));
        assert!(lowest.contains("Keep trying"));
    }

    #[test]
    fn just_below_a_boundary_falls_to_the_lower_tier() {
        // 89.999% is second-tier territory only at >= 90%.
        assert_eq!(
            encouragement_message(89_999, 100_000),
            encouragement_message(7, 10)
        );
        // 69.999% falls to the fourth tier.
        assert_eq!(
            encouragement_message(69_999, 100_000),
            encouragement_message(5, 10)
        );
        // 49.999% falls to the lowest.
        assert_eq!(
            encouragement_message(49_999, 100_000),
            encouragement_message(0, 10)
        );
    }

    #[test]
    fn every_score_gets_exactly_one_message() {
        for score in 0..=12 {
            // No panic and a non-empty message for the whole range.
            assert!(!encouragement_message(score, 12).is_empty());
        }
    }
}
