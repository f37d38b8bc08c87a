//! Shared fixtures for integration tests

#![allow(dead_code)]

use community_filter::{DawatDuration, DawatStatus, EducationLevel, Gender, House, Member, YesNo};
use std::collections::BTreeSet;

/// A small registry covering every filterable attribute
#[must_use]
pub fn registry() -> Vec<House> {
    vec![
        House::new("h1", "1", "Elm Street")
            .with_member(
                Member::new("m1", "Ali")
                    .with_father_name("Yusuf")
                    .with_gender(Gender::Male)
                    .with_age(10)
                    .with_occupation("Child")
                    .with_maktab(YesNo::Yes),
            )
            .with_member(
                Member::new("m2", "Yusuf")
                    .with_father_name("Ibrahim")
                    .with_phone("0300-111222")
                    .with_gender(Gender::Male)
                    .with_age(45)
                    .with_occupation("Tailor")
                    .with_education(EducationLevel::Secondary)
                    .with_quran(YesNo::Yes)
                    .with_dawat(DawatStatus::Trip(DawatDuration::FortyDay))
                    .with_dawat_count(DawatDuration::FortyDay, 1)
                    .with_dawat_count(DawatDuration::ThreeDay, 4),
            ),
        House::new("h2", "2", "Oak Road").with_member(
            Member::new("m3", "Sara")
                .with_father_name("Hamid")
                .with_gender(Gender::Female)
                .with_age(30)
                .with_occupation("Teacher")
                .with_education(EducationLevel::Graduate)
                .with_quran(YesNo::Yes),
        ),
        House::new("h4", "4", "Masjid Lane")
            .with_member(
                Member::new("m4", "Hamza")
                    .with_gender(Gender::Male)
                    .with_age(14)
                    .with_occupation("Student")
                    .with_dawat(DawatStatus::Nil)
                    .with_dawat_count(DawatDuration::ThreeDay, 2),
            )
            .with_member(
                Member::new("m5", "Maryam")
                    .with_gender(Gender::Female)
                    .with_age(7)
                    .with_maktab(YesNo::No),
            ),
        House::new("h42", "42", "Oak Road").with_member(
            Member::new("m6", "Bilal")
                .with_gender(Gender::Male)
                .with_age(60)
                .with_occupation("Retired")
                .with_quran(YesNo::No)
                .with_dawat_count(DawatDuration::FourMonth, 1),
        ),
        House::new("h9", "9", "Pine Avenue"),
    ]
}

/// Ids of every member in `houses`
#[must_use]
pub fn member_ids(houses: &[House]) -> BTreeSet<String> {
    houses
        .iter()
        .flat_map(|h| h.members.iter().map(|m| m.id.clone()))
        .collect()
}

/// Ids of the houses in order
#[must_use]
pub fn house_ids(houses: &[House]) -> Vec<&str> {
    houses.iter().map(|h| h.id.as_str()).collect()
}
