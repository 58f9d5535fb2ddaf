use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the four Eisenhower priority buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quadrant {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    NotUrgentNotImportant,
}

impl Quadrant {
    /// All quadrants in grid order (top-left, top-right, bottom-left, bottom-right)
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UrgentImportant,
        Quadrant::NotUrgentImportant,
        Quadrant::UrgentNotImportant,
        Quadrant::NotUrgentNotImportant,
    ];

    /// Numeric code used in the data file
    pub fn code(self) -> u8 {
        match self {
            Quadrant::UrgentImportant => 0,
            Quadrant::NotUrgentImportant => 1,
            Quadrant::UrgentNotImportant => 2,
            Quadrant::NotUrgentNotImportant => 3,
        }
    }

    /// Parse a numeric code into a quadrant
    pub fn from_code(code: u8) -> Option<Quadrant> {
        match code {
            0 => Some(Quadrant::UrgentImportant),
            1 => Some(Quadrant::NotUrgentImportant),
            2 => Some(Quadrant::UrgentNotImportant),
            3 => Some(Quadrant::NotUrgentNotImportant),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::UrgentImportant => "Urgent & Important",
            Quadrant::NotUrgentImportant => "Not Urgent & Important",
            Quadrant::UrgentNotImportant => "Urgent & Not Important",
            Quadrant::NotUrgentNotImportant => "Not Urgent & Not Important",
        }
    }

    /// Short action advice shown when tips are enabled
    pub fn tip(self) -> &'static str {
        match self {
            Quadrant::UrgentImportant => "DO FIRST",
            Quadrant::NotUrgentImportant => "SCHEDULE",
            Quadrant::UrgentNotImportant => "DELEGATE",
            Quadrant::NotUrgentNotImportant => "DON'T DO",
        }
    }

    /// The quadrant in the same row (same importance, other urgency)
    pub fn horizontal_neighbor(self) -> Quadrant {
        match self {
            Quadrant::UrgentImportant => Quadrant::NotUrgentImportant,
            Quadrant::NotUrgentImportant => Quadrant::UrgentImportant,
            Quadrant::UrgentNotImportant => Quadrant::NotUrgentNotImportant,
            Quadrant::NotUrgentNotImportant => Quadrant::UrgentNotImportant,
        }
    }

    /// The quadrant in the same column (same urgency, other importance)
    pub fn vertical_neighbor(self) -> Quadrant {
        match self {
            Quadrant::UrgentImportant => Quadrant::UrgentNotImportant,
            Quadrant::UrgentNotImportant => Quadrant::UrgentImportant,
            Quadrant::NotUrgentImportant => Quadrant::NotUrgentNotImportant,
            Quadrant::NotUrgentNotImportant => Quadrant::NotUrgentImportant,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Quadrant> for u8 {
    fn from(q: Quadrant) -> u8 {
        q.code()
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Quadrant::from_code(code).ok_or_else(|| format!("unknown quadrant code {}", code))
    }
}

/// Which half of life a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    #[default]
    Work,
    Private,
}

impl Context {
    pub fn as_str(self) -> &'static str {
        match self {
            Context::Work => "work",
            Context::Private => "private",
        }
    }

    /// Capitalized name for titles
    pub fn title(self) -> &'static str {
        match self {
            Context::Work => "Work",
            Context::Private => "Private",
        }
    }

    pub fn other(self) -> Context {
        match self {
            Context::Work => Context::Private,
            Context::Private => Context::Work,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub quadrant: Quadrant,
    pub context: Context,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, incomplete task stamped with the current time
    pub fn new(
        id: u64,
        title: String,
        description: String,
        quadrant: Quadrant,
        context: Context,
    ) -> Self {
        let now = Utc::now();
        Task {
            id,
            title,
            description,
            quadrant,
            context,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at` after a mutation
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_ring_closes_after_two_and_four_steps() {
        for q in Quadrant::ALL {
            assert_ne!(q.horizontal_neighbor(), q);
            assert_eq!(q.horizontal_neighbor().horizontal_neighbor(), q);
            let mut cur = q;
            for _ in 0..4 {
                cur = cur.horizontal_neighbor();
            }
            assert_eq!(cur, q);
        }
    }

    #[test]
    fn vertical_pairs() {
        assert_eq!(
            Quadrant::UrgentImportant.vertical_neighbor(),
            Quadrant::UrgentNotImportant
        );
        assert_eq!(
            Quadrant::NotUrgentImportant.vertical_neighbor(),
            Quadrant::NotUrgentNotImportant
        );
        for q in Quadrant::ALL {
            assert_eq!(q.vertical_neighbor().vertical_neighbor(), q);
        }
    }

    #[test]
    fn quadrant_codes_round_trip() {
        for q in Quadrant::ALL {
            assert_eq!(Quadrant::from_code(q.code()), Some(q));
        }
        assert_eq!(Quadrant::from_code(4), None);
    }

    #[test]
    fn quadrant_serializes_as_integer_code() {
        assert_eq!(
            serde_json::to_string(&Quadrant::UrgentNotImportant).unwrap(),
            "2"
        );
        let q: Quadrant = serde_json::from_str("3").unwrap();
        assert_eq!(q, Quadrant::NotUrgentNotImportant);
        assert!(serde_json::from_str::<Quadrant>("9").is_err());
    }

    #[test]
    fn context_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Context::Private).unwrap(), "\"private\"");
        assert_eq!(Context::default(), Context::Work);
        assert_eq!(Context::Work.other(), Context::Private);
        assert_eq!(Context::Private.other(), Context::Work);
    }

    #[test]
    fn new_task_is_incomplete_with_equal_timestamps() {
        let task = Task::new(
            7,
            "Write report".into(),
            String::new(),
            Quadrant::UrgentImportant,
            Context::Work,
        );
        assert_eq!(task.id, 7);
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
    }
}
