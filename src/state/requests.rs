//! Match-request view state: counterparty identity resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `/match-requests` endpoints return bare user identifiers. The only
//! identity source available to the client is the mentor directory, so
//! mentor counterparties can be resolved to real names while mentee
//! counterparties get a deterministic placeholder. Placeholders are kept
//! distinguishable from resolved names (`resolved = false`) so the UI can
//! label them as provisional.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use std::collections::HashMap;

use crate::net::types::{MatchRequest, RequestStatus, Role, User};

/// Display identity for the other side of a match request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterpartyIdentity {
    pub id: i64,
    pub name: String,
    pub role: Role,
    /// False when `name` is a synthesized placeholder.
    pub resolved: bool,
}

/// Identity cache for one requests screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CounterpartyCache {
    entries: HashMap<i64, CounterpartyIdentity>,
}

impl CounterpartyCache {
    /// Deterministic placeholder used when no real name is known.
    pub fn fallback(role: Role, id: i64) -> CounterpartyIdentity {
        CounterpartyIdentity {
            id,
            name: format!("{} {id}", role.label()),
            role,
            resolved: false,
        }
    }

    /// Record a real name for `id`, replacing any placeholder.
    pub fn insert_resolved(&mut self, id: i64, name: &str, role: Role) {
        self.entries.insert(
            id,
            CounterpartyIdentity {
                id,
                name: name.to_owned(),
                role,
                resolved: true,
            },
        );
    }

    /// Fill the cache from a mentor directory listing.
    pub fn populate_from_mentors(&mut self, mentors: &[User]) {
        for mentor in mentors {
            self.insert_resolved(mentor.id, mentor.display_name(), mentor.role);
        }
    }

    /// Identity to display for `id`, synthesizing (and remembering) a
    /// placeholder when nothing is resolved yet.
    pub fn identity(&mut self, id: i64, role: Role) -> CounterpartyIdentity {
        self.entries
            .entry(id)
            .or_insert_with(|| CounterpartyCache::fallback(role, id))
            .clone()
    }

    pub fn get(&self, id: i64) -> Option<&CounterpartyIdentity> {
        self.entries.get(&id)
    }
}

/// The user on the other side of `request` from the viewer's perspective.
pub fn counterparty_id(request: &MatchRequest, viewer_role: Role) -> i64 {
    match viewer_role {
        Role::Mentor => request.mentee_id,
        Role::Mentee => request.mentor_id,
    }
}

/// Role of the counterparty given the viewer's role.
pub fn counterparty_role(viewer_role: Role) -> Role {
    match viewer_role {
        Role::Mentor => Role::Mentee,
        Role::Mentee => Role::Mentor,
    }
}

/// Status of the viewer's outgoing request to `mentor_id`, if one exists.
///
/// Drives the directory screen's per-mentor button state (already
/// requested, accepted, etc.).
pub fn outgoing_status_for(requests: &[MatchRequest], mentor_id: i64) -> Option<RequestStatus> {
    requests
        .iter()
        .find(|request| request.mentor_id == mentor_id)
        .map(|request| request.status)
}
