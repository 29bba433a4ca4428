//! Trip members and the roster snapshot.

use serde::{Deserialize, Serialize};
use tripsettle_shared::MemberId;

/// A member of the trip.
///
/// Identity is immutable for the lifetime of a trip. Everything else refers to
/// members by id, never by embedding, so a member rename cannot desync the
/// expense records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Opaque id assigned by the document store.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Avatar image reference.
    pub avatar: String,
}

/// Snapshot of the trip's member list.
///
/// The roster decides who a "known member" is: expense records referencing ids
/// outside the roster are tolerated but contribute nothing (stale references
/// must never fail a recompute).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Creates a roster from a member snapshot.
    #[must_use]
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Returns the members in snapshot order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns the member with the given id, if known.
    #[must_use]
    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == *id)
    }

    /// Returns true if the id belongs to a current member.
    #[must_use]
    pub fn contains(&self, id: &MemberId) -> bool {
        self.get(id).is_some()
    }

    /// Number of members in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the roster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<Member> for Roster {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
