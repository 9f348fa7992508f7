//! Domain entities shown by the app.
//!
//! Everything here is held in memory only. The collections are sample
//! data standing in for a future device/service layer; nothing persists
//! beyond process lifetime.

/// Identifier for a pet in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PetId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
        }
    }
}

/// A pet registered with the feeder.
#[derive(Debug, Clone)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: Species,
    /// RFID-style collar tag identifier.
    pub tag_id: String,
    pub weight_kg: f32,
    pub food_type: String,
    pub glyph: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
}

/// An alert shown on the notifications screen.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub relative_time: String,
    pub unread: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealStatus {
    Active,
    Pending,
}

impl MealStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MealStatus::Active => "Active",
            MealStatus::Pending => "Pending",
        }
    }
}

/// One entry in a pet's feeding schedule.
#[derive(Debug, Clone)]
pub struct MealSlot {
    pub label: String,
    pub time: String,
    pub grams: u32,
    pub status: MealStatus,
}

/// One day of a pet's feeding history (detail chart).
#[derive(Debug, Clone)]
pub struct FeedingPoint {
    pub day: &'static str,
    pub grams: u32,
}

/// One day of per-pet intake for the analytics chart.
///
/// `grams` is aligned with the catalog's pet order.
#[derive(Debug, Clone)]
pub struct DailyIntake {
    pub day: &'static str,
    pub grams: Vec<u32>,
}

/// Share of feedings dispensed in a time-of-day window.
#[derive(Debug, Clone)]
pub struct TimeShare {
    pub label: &'static str,
    pub percent: u8,
}

/// Headline figures shown on the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub last_feeding: String,
    pub next_scheduled: String,
    pub food_remaining_pct: u8,
    pub feeder_online: bool,
}

/// Weekly roll-up figures for the analytics screen.
#[derive(Debug, Clone)]
pub struct WeeklySummary {
    pub total_meals: u32,
    pub food_used_kg: f32,
    pub on_schedule_pct: u8,
}
