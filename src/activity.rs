use serde::Serialize;

/// A daily human activity and how often it happens on an average day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: &'static str,
    pub daily_frequency: f64,
    pub description: &'static str,
    pub fun_facts: &'static [&'static str],
    /// 1-10, display weight only.
    pub impact_level: u8,
    pub yearly_impact: &'static str,
}

pub static ACTIVITIES: [Activity; 10] = [
    Activity {
        name: "Tying Shoes",
        daily_frequency: 2.0,
        description: "Average times tying shoes per day",
        fun_facts: &[
            "The average person spends 2 minutes per day tying shoes",
            "That's 12 hours per year just on shoelaces!",
        ],
        impact_level: 3,
        yearly_impact: "730 shoe-tying moments",
    },
    Activity {
        name: "Brushing Teeth",
        daily_frequency: 2.0,
        description: "Recommended dental hygiene frequency",
        fun_facts: &[
            "We spend about 108 days of our life brushing teeth",
            "The average person uses 300 toothbrushes in their lifetime",
        ],
        impact_level: 8,
        yearly_impact: "730 minutes of dental care",
    },
    Activity {
        name: "Meals Eaten",
        daily_frequency: 3.0,
        description: "Average meals consumed per day",
        fun_facts: &[
            "Humans spend about 32,098 hours eating in their lifetime",
            "We consume about 35 tons of food in a lifetime",
        ],
        impact_level: 9,
        yearly_impact: "1,095 meals enjoyed",
    },
    Activity {
        name: "Blinking",
        daily_frequency: 28_800.0,
        description: "Average blinks per day",
        fun_facts: &[
            "We blink about 20 times per minute",
            "That's about 28,800 times per day!",
            "We spend about 10% of our waking hours with our eyes closed due to blinking",
        ],
        impact_level: 2,
        yearly_impact: "10,512,000 blinks",
    },
    Activity {
        name: "Laughing",
        daily_frequency: 20.0,
        description: "Average laughs per day",
        fun_facts: &[
            "Children laugh about 300-400 times per day",
            "Adults only laugh about 20 times per day",
            "Laughter is contagious and can strengthen social bonds",
        ],
        impact_level: 7,
        yearly_impact: "7,300 moments of joy",
    },
    Activity {
        name: "Walking Steps",
        daily_frequency: 7_000.0,
        description: "Average steps walked per day",
        fun_facts: &[
            "The average person walks about 7,000 steps per day",
            "In a lifetime, that's like walking around the Earth 4 times!",
            "Each step uses up to 200 muscles",
        ],
        impact_level: 8,
        yearly_impact: "2,555,000 steps forward",
    },
    Activity {
        name: "Breathing",
        daily_frequency: 23_040.0,
        description: "Average breaths taken per day",
        fun_facts: &[
            "We take about 16 breaths per minute",
            "That's about 23,040 breaths per day",
            "The average person takes about 672,768,000 breaths in their lifetime",
        ],
        impact_level: 10,
        yearly_impact: "8,409,600 breaths",
    },
    Activity {
        name: "Heart Beats",
        daily_frequency: 115_200.0,
        description: "Average heartbeats per day",
        fun_facts: &[
            "Your heart beats about 80 times per minute",
            "That's about 115,200 times per day",
            "In a lifetime, your heart will beat about 3 billion times",
        ],
        impact_level: 10,
        yearly_impact: "42,048,000 heartbeats",
    },
    Activity {
        name: "Words Spoken",
        daily_frequency: 7_000.0,
        description: "Average words spoken per day",
        fun_facts: &[
            "The average person speaks about 7,000 words per day",
            "Women tend to speak slightly more words per day than men",
            "The most talkative 5% of people speak over 20,000 words per day",
        ],
        impact_level: 6,
        yearly_impact: "2,555,000 words shared",
    },
    Activity {
        name: "Hours Slept",
        daily_frequency: 8.0,
        description: "Recommended hours of sleep per day",
        fun_facts: &[
            "We spend about 1/3 of our lives sleeping",
            "That's about 229,961 hours in a lifetime",
            "During sleep, your brain processes and stores memories",
        ],
        impact_level: 9,
        yearly_impact: "2,920 hours of rest",
    },
];

/// Look up a catalog entry by its exact name.
pub fn find(name: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ACTIVITIES.iter().map(|a| a.name).collect();
        assert_eq!(names.len(), ACTIVITIES.len());
    }

    #[test]
    fn test_catalog_values_in_range() {
        for activity in &ACTIVITIES {
            assert!(activity.daily_frequency >= 0.0, "{}", activity.name);
            assert!(
                (1..=10).contains(&activity.impact_level),
                "{}",
                activity.name
            );
            assert!(!activity.fun_facts.is_empty(), "{}", activity.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("Heart Beats").map(|a| a.daily_frequency), Some(115_200.0));
        assert!(find("heart beats").is_none());
        assert!(find("Juggling").is_none());
    }
}
