use serde::Serialize;

/// Closed set of visitor categories shown in the check-in form.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ClientType {
    Student,
    Employee,
    JobSeeker,
    Researcher,
    Guest,
}

impl ClientType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ClientType::Student => "Student",
            ClientType::Employee => "Employee",
            ClientType::JobSeeker => "Job Seeker",
            ClientType::Researcher => "Researcher",
            ClientType::Guest => "Guest",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Student" => Some(ClientType::Student),
            "Employee" => Some(ClientType::Employee),
            "Job Seeker" => Some(ClientType::JobSeeker),
            "Researcher" => Some(ClientType::Researcher),
            "Guest" => Some(ClientType::Guest),
            _ => None,
        }
    }

    /// Helper: convert input from the CLI (case- and separator-insensitive)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "student" => Some(ClientType::Student),
            "employee" => Some(ClientType::Employee),
            "jobseeker" => Some(ClientType::JobSeeker),
            "researcher" => Some(ClientType::Researcher),
            "guest" => Some(ClientType::Guest),
            _ => None,
        }
    }
}
