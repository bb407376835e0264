use chrono::NaiveDate;
use serde::Serialize;

use crate::activity::{ACTIVITIES, Activity};
use crate::age::{self, Lifespan};

/// One catalog activity scaled by the time lived and the time left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProjection {
    #[serde(flatten)]
    pub activity: &'static Activity,
    pub times_done: u64,
    pub times_left: u64,
}

impl ActivityProjection {
    fn project(activity: &'static Activity, elapsed_days: f64, days_left: f64) -> Self {
        Self {
            activity,
            times_done: scale(elapsed_days, activity.daily_frequency),
            times_left: scale(days_left, activity.daily_frequency),
        }
    }
}

fn scale(days: f64, daily_frequency: f64) -> u64 {
    (days * daily_frequency).floor() as u64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeStats {
    /// Negative when the birth date is after today.
    pub days_lived: i64,
    pub days_left: f64,
    pub age_in_years: f64,
    pub years_left: f64,
    /// One entry per catalog activity, in catalog order.
    pub activities: Vec<ActivityProjection>,
}

impl LifeStats {
    pub fn activity(&self, name: &str) -> Option<&ActivityProjection> {
        self.activities.iter().find(|p| p.activity.name == name)
    }
}

/// Life statistics for `birth` as of the local date right now.
pub fn compute_life_stats(birth: NaiveDate) -> LifeStats {
    compute_life_stats_at(birth, age::today())
}

pub fn compute_life_stats_at(birth: NaiveDate, today: NaiveDate) -> LifeStats {
    let span = Lifespan::between(birth, today);
    let elapsed = span.elapsed_days();

    let activities = ACTIVITIES
        .iter()
        .map(|activity| ActivityProjection::project(activity, elapsed, span.days_left))
        .collect();

    LifeStats {
        days_lived: span.days_lived,
        days_left: span.days_left,
        age_in_years: span.age_in_years,
        years_left: span.years_left,
        activities,
    }
}
