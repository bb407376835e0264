//! Display math for one activity card. None of this feeds back into the
//! engine; it only decides what the chart and progress bars show.

use crate::age::AgeStats;
use crate::stats::ActivityProjection;

const EARLY_DEATH_FACTOR: f64 = 0.9;
const FUTURE_DEATH_FACTOR: f64 = 1.1;
/// Headroom above the largest segment on the radial axis.
const RADIAL_HEADROOM: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fill: &'static str,
    pub stroke: &'static str,
}

pub const LIVED: Palette = Palette {
    fill: "rgba(59, 130, 246, 0.7)",
    stroke: "rgba(59, 130, 246, 1)",
};
pub const REMAINING: Palette = Palette {
    fill: "rgba(147, 197, 253, 0.7)",
    stroke: "rgba(147, 197, 253, 1)",
};
pub const EARLY_DEATH: Palette = Palette {
    fill: "rgba(147, 51, 234, 0.7)",
    stroke: "rgba(147, 51, 234, 1)",
};
pub const FUTURE_DEATH: Palette = Palette {
    fill: "rgba(239, 68, 68, 0.7)",
    stroke: "rgba(239, 68, 68, 1)",
};
pub const IMPACT: Palette = Palette {
    fill: "rgba(34, 197, 94, 0.7)",
    stroke: "rgba(34, 197, 94, 1)",
};

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card<'a> {
    pub projection: &'a ActivityProjection,
    pub total: u64,
    pub early_death_total: u64,
    pub future_death_total: u64,
    pub impact_value: f64,
    pub percentage_done: f64,
    pub percentage_left: f64,
    pub radial_max: f64,
    /// Lived, remaining, early death, future death, impact.
    pub segments: [Segment; 5],
}

impl<'a> Card<'a> {
    pub fn new(projection: &'a ActivityProjection, age: &AgeStats) -> Self {
        let done = projection.times_done;
        let total = done.saturating_add(projection.times_left);

        let early_death_total = share_of_done(done, total, EARLY_DEATH_FACTOR);
        let future_death_total = share_of_done(done, total, FUTURE_DEATH_FACTOR);
        let impact_value = f64::from(projection.activity.impact_level) * (total as f64 / 10.0);
        let radial_max =
            total.max(early_death_total).max(future_death_total) as f64 * RADIAL_HEADROOM;

        let segments = [
            Segment {
                label: "Time Lived".to_string(),
                value: done as f64,
                palette: LIVED,
            },
            Segment {
                label: "Time Remaining".to_string(),
                value: projection.times_left as f64,
                palette: REMAINING,
            },
            Segment {
                label: format!("RIP age {}", age.early_death_age),
                value: early_death_total as f64,
                palette: EARLY_DEATH,
            },
            Segment {
                label: format!("RIP age {}", age.future_death_age),
                value: future_death_total as f64,
                palette: FUTURE_DEATH,
            },
            Segment {
                label: "Impact Level".to_string(),
                value: impact_value,
                palette: IMPACT,
            },
        ];

        Self {
            projection,
            total,
            early_death_total,
            future_death_total,
            impact_value,
            percentage_done: percentage(done, total),
            percentage_left: percentage(projection.times_left, total),
            radial_max,
            segments,
        }
    }
}

fn share_of_done(done: u64, total: u64, factor: f64) -> u64 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * total as f64 * factor).floor() as u64
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Format a count with comma thousands separators, e.g. `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::find;
    use crate::age::compute_age_stats_at;
    use chrono::{Duration, NaiveDate};

    fn age_stats(days_lived: i64) -> AgeStats {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        compute_age_stats_at(today - Duration::days(days_lived), today)
    }

    fn projection(name: &str, times_done: u64, times_left: u64) -> ActivityProjection {
        ActivityProjection {
            activity: find(name).unwrap(),
            times_done,
            times_left,
        }
    }

    #[test]
    fn test_card_values() {
        let p = projection("Laughing", 10, 30);
        let card = Card::new(&p, &age_stats(10_000));

        assert_eq!(card.total, 40);
        assert_eq!(card.early_death_total, 9);
        assert_eq!(card.future_death_total, 11);
        assert!((card.impact_value - 28.0).abs() < 1e-9);
        assert!((card.percentage_done - 25.0).abs() < 1e-9);
        assert!((card.percentage_left - 75.0).abs() < 1e-9);
        assert!((card.radial_max - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_labels_use_death_ages() {
        let p = projection("Blinking", 100, 100);
        let card = Card::new(&p, &age_stats(10_000));
        let labels: Vec<_> = card.segments.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(
            labels,
            [
                "Time Lived",
                "Time Remaining",
                "RIP age 17",
                "RIP age 37",
                "Impact Level"
            ]
        );
        assert_eq!(card.segments[2].palette, EARLY_DEATH);
    }

    #[test]
    fn test_empty_total_is_guarded() {
        let p = projection("Hours Slept", 0, 0);
        let card = Card::new(&p, &age_stats(0));

        assert_eq!(card.total, 0);
        assert_eq!(card.early_death_total, 0);
        assert_eq!(card.future_death_total, 0);
        assert_eq!(card.percentage_done, 0.0);
        assert_eq!(card.percentage_left, 0.0);
        assert_eq!(card.radial_max, 0.0);
    }

    #[test]
    fn test_future_death_can_exceed_total() {
        let p = projection("Heart Beats", 1_000, 0);
        let card = Card::new(&p, &age_stats(30_000));

        assert!(card.future_death_total > card.total);
        assert_eq!(card.radial_max, card.future_death_total as f64 * RADIAL_HEADROOM);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(84_920), "84,920");
        assert_eq!(group_thousands(3_260_966_400), "3,260,966,400");
    }
}
