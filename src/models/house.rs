//! House unit representation
//!
//! A house groups the members living at one address. Member order is the
//! display order and is preserved by every filter pass.

use serde::{Deserialize, Serialize};

use crate::models::member::Member;
use crate::models::serde::{deserialize_members, deserialize_text};

/// A registered house and its members
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    /// House identifier
    #[serde(default, alias = "_id", deserialize_with = "deserialize_text")]
    pub id: String,
    /// House number, used both as a label and as a prefix-matchable string
    #[serde(default, alias = "houseNumber", deserialize_with = "deserialize_text")]
    pub number: String,
    /// Street name
    #[serde(default, deserialize_with = "deserialize_text")]
    pub street: String,
    /// Members in display order
    #[serde(default, deserialize_with = "deserialize_members")]
    pub members: Vec<Member>,
}

impl House {
    /// Create a new house without members
    #[must_use]
    pub fn new(id: impl Into<String>, number: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            street: street.into(),
            members: Vec::new(),
        }
    }

    /// Add a member, keeping insertion order
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Copy of this house carrying a different member list
    #[must_use]
    pub fn with_filtered_members(&self, members: Vec<Member>) -> Self {
        Self {
            id: self.id.clone(),
            number: self.number.clone(),
            street: self.street.clone(),
            members,
        }
    }

    /// Number of members in the house
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
