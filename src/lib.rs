//! Life statistics from a birth date: days lived, days left against an
//! average life expectancy, and how many times everyday activities have
//! happened and are projected to happen.

pub mod activity;
pub mod age;
pub mod card;
pub mod config;
pub mod input;
pub mod stats;
pub mod svg;

pub use activity::{ACTIVITIES, Activity};
pub use age::{AgeStats, CalendarAge, compute_age_stats, compute_age_stats_at};
pub use stats::{ActivityProjection, LifeStats, compute_life_stats, compute_life_stats_at};
