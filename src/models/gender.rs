use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }

    /// Helper: convert input from the CLI (case-insensitive)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "other" | "o" => Some(Gender::Other),
            _ => None,
        }
    }
}
