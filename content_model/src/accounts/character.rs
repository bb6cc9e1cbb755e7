//! Character definitions.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    #[default]
    Warrior,
    Archer,
    Mage,
    Cavalry,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Archer,
        CharacterClass::Mage,
        CharacterClass::Cavalry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "warrior",
            CharacterClass::Archer => "archer",
            CharacterClass::Mage => "mage",
            CharacterClass::Cavalry => "cavalry",
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character belonging to exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Creation time in milliseconds since the epoch, as a string.
    pub id: String,
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    /// RFC 3339 creation timestamp.
    pub created: String,
}

impl Character {
    /// Create a level 1 character stamped with `now`.
    pub fn new(name: impl Into<String>, class: CharacterClass, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            name: name.into(),
            class,
            level: 1,
            created: timestamp(now),
        }
    }
}

/// Format a timestamp the way stored records carry them.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_character() {
        let now = Utc.with_ymd_and_hms(2025, 12, 15, 10, 30, 0).unwrap();
        let character = Character::new("Svyatogor", CharacterClass::Cavalry, now);

        assert_eq!(character.name, "Svyatogor");
        assert_eq!(character.level, 1);
        assert_eq!(character.id, now.timestamp_millis().to_string());
        assert_eq!(character.created, "2025-12-15T10:30:00.000Z");
    }

    #[test]
    fn test_class_serialization() {
        let json = serde_json::to_string(&CharacterClass::Archer).unwrap();
        assert_eq!(json, "\"archer\"");

        let class: CharacterClass = serde_json::from_str("\"mage\"").unwrap();
        assert_eq!(class, CharacterClass::Mage);
        assert_eq!(CharacterClass::ALL.len(), 4);
    }
}
