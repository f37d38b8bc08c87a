//! Domain models for the community registry
//!
//! This module contains the house and member entities plus the closed enum
//! types their fields are expressed in.

pub mod house;
pub mod member;
pub mod serde;
pub mod types;

pub use house::House;
pub use member::Member;
pub use types::{
    CHILD_AGE_LIMIT, DawatCounts, DawatDuration, DawatStatus, EducationLevel, Gender, YesNo,
};
