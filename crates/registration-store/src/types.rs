//! Registration record and catalogue types.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Format of the commit timestamp recorded on each entry.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Competitor gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "М")]
    Male,
    #[serde(rename = "Ж")]
    Female,
}

impl Gender {
    /// Parse a catalogue label, rejecting anything outside the two-value set.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "М" => Some(Self::Male),
            "Ж" => Some(Self::Female),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "М",
            Self::Female => "Ж",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Watercraft category an entry competes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoatClass {
    #[serde(rename = "К-1")]
    K1,
    #[serde(rename = "К-2")]
    K2,
    #[serde(rename = "К-4")]
    K4,
    #[serde(rename = "С-1")]
    C1,
    #[serde(rename = "С-2")]
    C2,
    #[serde(rename = "С-4")]
    C4,
}

impl BoatClass {
    /// Parse a catalogue label, rejecting unknown categories.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "К-1" => Some(Self::K1),
            "К-2" => Some(Self::K2),
            "К-4" => Some(Self::K4),
            "С-1" => Some(Self::C1),
            "С-2" => Some(Self::C2),
            "С-4" => Some(Self::C4),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::K1 => "К-1",
            Self::K2 => "К-2",
            Self::K4 => "К-4",
            Self::C1 => "С-1",
            Self::C2 => "С-2",
            Self::C4 => "С-4",
        }
    }
}

impl fmt::Display for BoatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Race distance an entrant may select; multiple selections allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance {
    #[serde(rename = "200 м")]
    M200,
    #[serde(rename = "500 м")]
    M500,
    #[serde(rename = "1000 м")]
    M1000,
    #[serde(rename = "5000 м")]
    M5000,
    #[serde(rename = "Эстафета 4×200")]
    Relay4x200,
}

impl Distance {
    /// Parse a catalogue label, rejecting unknown distances.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "200 м" => Some(Self::M200),
            "500 м" => Some(Self::M500),
            "1000 м" => Some(Self::M1000),
            "5000 м" => Some(Self::M5000),
            "Эстафета 4×200" => Some(Self::Relay4x200),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::M200 => "200 м",
            Self::M500 => "500 м",
            Self::M1000 => "1000 м",
            Self::M5000 => "5000 м",
            Self::Relay4x200 => "Эстафета 4×200",
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One committed competitor entry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Opaque unique id, assigned at commit time
    pub id: String,
    /// Commit instant, [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
    pub surname: String,
    pub firstname: String,
    #[serde(default)]
    pub patronymic: String,
    pub birthdate: String,
    pub gender: Gender,
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub rank: String,
    pub team: String,
    pub boat_class: BoatClass,
    pub phone: String,
    #[serde(default)]
    pub distances: Vec<Distance>,
}

/// Validated entry fields awaiting commit.
///
/// The store assigns the id and timestamp when the draft is appended, so
/// they reflect actual commit order even under contention.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationDraft {
    pub surname: String,
    pub firstname: String,
    pub patronymic: String,
    pub birthdate: String,
    pub gender: Gender,
    pub country: String,
    pub city: String,
    pub rank: String,
    pub team: String,
    pub boat_class: BoatClass,
    pub phone: String,
    pub distances: Vec<Distance>,
}

impl RegistrationDraft {
    /// Finalize the draft with a fresh id and the current commit timestamp.
    pub(crate) fn finalize(self) -> Registration {
        Registration {
            id: new_registration_id(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            surname: self.surname,
            firstname: self.firstname,
            patronymic: self.patronymic,
            birthdate: self.birthdate,
            gender: self.gender,
            country: self.country,
            city: self.city,
            rank: self.rank,
            team: self.team,
            boat_class: self.boat_class,
            phone: self.phone,
            distances: self.distances,
        }
    }
}

fn new_registration_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("reg_{}", &hex[..12])
}
