//! Static sample data.
//!
//! The catalog is built once at startup and handed to screen controllers
//! read-only. A real deployment would replace this with a data/service
//! layer; the screens only depend on the shapes, not on where the values
//! come from.

use crate::model::{
    DailyIntake, DashboardStats, FeedingPoint, MealSlot, MealStatus, Notification,
    NotificationKind, Pet, PetId, Species, TimeShare, WeeklySummary,
};

/// Number of leading notifications grouped under "Today".
///
/// The split is positional, not a timestamp comparison.
pub const NOTIFICATIONS_TODAY: usize = 2;

/// Read-only sample collections shared by all screens.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub pets: Vec<Pet>,
    pub notifications: Vec<Notification>,
    pub schedule: Vec<MealSlot>,
    pub feeding_history: Vec<FeedingPoint>,
    pub weekly_intake: Vec<DailyIntake>,
    pub time_distribution: Vec<TimeShare>,
    pub dashboard: DashboardStats,
    pub weekly_summary: WeeklySummary,
}

impl Catalog {
    pub fn sample() -> Self {
        Self {
            pets: sample_pets(),
            notifications: sample_notifications(),
            schedule: sample_schedule(),
            feeding_history: sample_feeding_history(),
            weekly_intake: sample_weekly_intake(),
            time_distribution: sample_time_distribution(),
            dashboard: DashboardStats {
                last_feeding: "2h ago".to_string(),
                next_scheduled: "6:00 PM".to_string(),
                food_remaining_pct: 65,
                feeder_online: true,
            },
            weekly_summary: WeeklySummary {
                total_meals: 14,
                food_used_kg: 2.8,
                on_schedule_pct: 98,
            },
        }
    }

    /// Look up a pet by id.
    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }
}

fn sample_pets() -> Vec<Pet> {
    vec![
        Pet {
            id: PetId(1),
            name: "Luna".to_string(),
            species: Species::Dog,
            tag_id: "#A4F2B8".to_string(),
            weight_kg: 25.0,
            food_type: "Premium Dry Food".to_string(),
            glyph: "🐕",
        },
        Pet {
            id: PetId(2),
            name: "Charlie".to_string(),
            species: Species::Cat,
            tag_id: "#C8D5E9".to_string(),
            weight_kg: 4.5,
            food_type: "Wet Food Mix".to_string(),
            glyph: "🐱",
        },
    ]
}

fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Success,
            title: "Luna has eaten".to_string(),
            message: "Your pet completed their meal at 2:45 PM".to_string(),
            relative_time: "2h ago".to_string(),
            unread: true,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Warning,
            title: "Food reservoir low".to_string(),
            message: "Only 10% food remaining. Please refill soon.".to_string(),
            relative_time: "5h ago".to_string(),
            unread: true,
        },
        Notification {
            id: 3,
            kind: NotificationKind::Info,
            title: "Software update available".to_string(),
            message: "Version 2.4.1 is ready to install".to_string(),
            relative_time: "1d ago".to_string(),
            unread: false,
        },
        Notification {
            id: 4,
            kind: NotificationKind::Success,
            title: "Charlie has eaten".to_string(),
            message: "Your pet completed their meal at 8:30 AM".to_string(),
            relative_time: "1d ago".to_string(),
            unread: false,
        },
        Notification {
            id: 5,
            kind: NotificationKind::Info,
            title: "Schedule reminder".to_string(),
            message: "Next feeding scheduled for 6:00 PM today".to_string(),
            relative_time: "2d ago".to_string(),
            unread: false,
        },
    ]
}

fn sample_schedule() -> Vec<MealSlot> {
    vec![
        MealSlot {
            label: "Morning".to_string(),
            time: "8:00 AM".to_string(),
            grams: 100,
            status: MealStatus::Active,
        },
        MealSlot {
            label: "Evening".to_string(),
            time: "6:00 PM".to_string(),
            grams: 100,
            status: MealStatus::Pending,
        },
    ]
}

fn sample_feeding_history() -> Vec<FeedingPoint> {
    [
        ("Mon", 120),
        ("Tue", 135),
        ("Wed", 110),
        ("Thu", 145),
        ("Fri", 130),
        ("Sat", 125),
        ("Sun", 140),
    ]
    .into_iter()
    .map(|(day, grams)| FeedingPoint { day, grams })
    .collect()
}

fn sample_weekly_intake() -> Vec<DailyIntake> {
    [
        ("Mon", [240, 120]),
        ("Tue", [250, 130]),
        ("Wed", [235, 125]),
        ("Thu", [255, 135]),
        ("Fri", [245, 128]),
        ("Sat", [260, 140]),
        ("Sun", [248, 132]),
    ]
    .into_iter()
    .map(|(day, grams)| DailyIntake {
        day,
        grams: grams.to_vec(),
    })
    .collect()
}

fn sample_time_distribution() -> Vec<TimeShare> {
    vec![
        TimeShare {
            label: "Morning (6-10 AM)",
            percent: 35,
        },
        TimeShare {
            label: "Midday (10-2 PM)",
            percent: 20,
        },
        TimeShare {
            label: "Evening (6-8 PM)",
            percent: 40,
        },
        TimeShare {
            label: "Night (8-10 PM)",
            percent: 5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_ids_and_tags_are_unique() {
        let catalog = Catalog::sample();
        for (i, a) in catalog.pets.iter().enumerate() {
            for b in &catalog.pets[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.tag_id, b.tag_id);
            }
        }
    }

    #[test]
    fn pet_lookup_by_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.pet(PetId(1)).map(|p| p.name.as_str()), Some("Luna"));
        assert!(catalog.pet(PetId(99)).is_none());
    }

    #[test]
    fn intake_series_aligns_with_pets() {
        let catalog = Catalog::sample();
        for day in &catalog.weekly_intake {
            assert_eq!(day.grams.len(), catalog.pets.len());
        }
    }

    #[test]
    fn time_distribution_sums_to_whole() {
        let catalog = Catalog::sample();
        let total: u32 = catalog
            .time_distribution
            .iter()
            .map(|share| u32::from(share.percent))
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn today_partition_is_within_bounds() {
        let catalog = Catalog::sample();
        assert!(NOTIFICATIONS_TODAY <= catalog.notifications.len());
    }
}
