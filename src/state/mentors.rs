//! Mentor directory query state.

#[cfg(test)]
#[path = "mentors_test.rs"]
mod mentors_test;

/// Server-side sort order for the mentor directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MentorOrder {
    /// Backend default (registration order).
    #[default]
    Unsorted,
    /// Alphabetical by profile name.
    Name,
    /// Alphabetical by first skill.
    Skill,
}

impl MentorOrder {
    /// `order_by` query parameter value; empty means "do not send".
    pub fn as_param(self) -> &'static str {
        match self {
            MentorOrder::Unsorted => "",
            MentorOrder::Name => "name",
            MentorOrder::Skill => "skill",
        }
    }

    /// Parse a `<select>` value back into an order.
    pub fn parse(value: &str) -> MentorOrder {
        match value {
            "name" => MentorOrder::Name,
            "skill" => MentorOrder::Skill,
            _ => MentorOrder::Unsorted,
        }
    }
}

/// Filter/sort selection for the directory screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MentorQuery {
    pub skill: String,
    pub order: MentorOrder,
}

impl MentorQuery {
    /// Skill filter as sent to the server: trimmed, empty meaning "all".
    pub fn skill_param(&self) -> String {
        self.skill.trim().to_owned()
    }
}
