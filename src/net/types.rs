//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend JSON contract, which uses camelCase for
//! compound keys (`imageUrl`, `mentorId`); serde renames keep the Rust side
//! conventional. Optional fields default on deserialize so partial records
//! from older accounts still load.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Drives which directory/request views a user sees and which
/// profile fields (skills) apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Mentee,
}

impl Role {
    /// Wire value, also used in protected image paths (`/images/mentor/3`).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Mentor => "mentor",
            Role::Mentee => "mentee",
        }
    }

    /// Capitalized form for display.
    pub fn label(self) -> &'static str {
        match self {
            Role::Mentor => "Mentor",
            Role::Mentee => "Mentee",
        }
    }

    /// Parse a form `<select>` value. Empty or unknown input means the user
    /// never picked a role.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "mentor" => Some(Role::Mentor),
            "mentee" => Some(Role::Mentee),
            _ => None,
        }
    }
}

/// Profile data nested inside a [`User`] record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name chosen at signup, editable afterwards.
    pub name: String,
    /// Free-form introduction text.
    #[serde(default)]
    pub bio: String,
    /// Server path of the profile image (e.g. `/images/mentor/3`), if any.
    /// The path is protected; fetching it requires the session token.
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Mentor tech stack. Absent for mentees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// A user account as returned by `/me` and the mentor directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub profile: UserProfile,
}

impl User {
    /// Server identifiers are positive; anything else marks a record that
    /// must not be trusted for identity decisions.
    pub fn has_valid_id(&self) -> bool {
        self.id > 0
    }

    /// Profile name, falling back to the email for records that predate
    /// profile editing.
    pub fn display_name(&self) -> &str {
        if self.profile.name.is_empty() {
            &self.email
        } else {
            &self.profile.name
        }
    }

    /// Skills as a displayable slice (empty for mentees).
    pub fn skills(&self) -> &[String] {
        self.profile.skills.as_deref().unwrap_or_default()
    }
}

/// Login form payload for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup payload for `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Body of a successful `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Payload for `PUT /profile`.
///
/// `image` carries a freshly selected picture as a Base64 string (no data-URL
/// prefix); `None` leaves the stored image untouched. `skills` is only sent
/// for mentors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Payload for `POST /match-requests`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchRequestCreate {
    #[serde(rename = "mentorId")]
    pub mentor_id: i64,
    #[serde(rename = "menteeId")]
    pub mentee_id: i64,
    pub message: String,
}

/// Lifecycle state of a match request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Cancelled => "Cancelled",
        }
    }

    /// Only pending requests can still be accepted, rejected, or cancelled.
    pub fn is_pending(self) -> bool {
        self == RequestStatus::Pending
    }
}

/// A match request as returned by the `/match-requests` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub id: i64,
    #[serde(rename = "mentorId")]
    pub mentor_id: i64,
    #[serde(rename = "menteeId")]
    pub mentee_id: i64,
    /// Introduction text from the mentee. Listing endpoints may omit it.
    #[serde(default)]
    pub message: Option<String>,
    pub status: RequestStatus,
}
