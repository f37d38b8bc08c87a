//! Behavioural tests for the member and combined passes

use crate::utils::{house_ids, member_ids, registry};
use community_filter::{
    DawatDuration, DawatStatus, EducationLevel, FilterCriteria, Gender, House, Member, YesNo,
    apply_combined_filters, apply_member_filters, criteria_from_value, is_house_level_hit,
};
use serde_json::json;

fn criteria_variants() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::new().with_gender(Gender::Male),
        FilterCriteria::new().with_street("oak road"),
        FilterCriteria::new().with_occupation("Child"),
        FilterCriteria::new().with_education(EducationLevel::Graduate),
        FilterCriteria::new().with_quran(YesNo::Yes),
        FilterCriteria::new().with_maktab(YesNo::No),
        FilterCriteria::new().with_age_range(Some(14), Some(45)),
        FilterCriteria::new().with_baligh(YesNo::Yes),
        FilterCriteria::new().with_dawat(DawatStatus::Nil),
        FilterCriteria::new().with_dawat_count(DawatDuration::ThreeDay, Some(2)),
        FilterCriteria::new().with_query("a"),
        FilterCriteria::new().with_query("4"),
    ]
}

#[test]
fn test_vacuous_filter_law() {
    let houses = registry();
    let empty = FilterCriteria::new();

    let combined = apply_combined_filters(&houses, &empty);
    let member = apply_member_filters(&houses, &empty);

    assert_eq!(combined, houses);
    assert_eq!(member, houses);
    // The empty house survives an unfiltered listing
    assert!(house_ids(&combined).contains(&"h9"));
}

#[test]
fn test_idempotent_refilter() {
    let houses = registry();
    for criteria in criteria_variants() {
        let once = apply_member_filters(&houses, &criteria);
        let twice = apply_member_filters(&once, &criteria);
        assert_eq!(once, twice, "member pass not idempotent for {criteria}");

        // Combined refiltering is only stable when the query cannot flip a
        // member-level search into a house-level hit
        if criteria.query.is_none() {
            let once = apply_combined_filters(&houses, &criteria);
            let twice = apply_combined_filters(&once, &criteria);
            assert_eq!(once, twice, "combined pass not idempotent for {criteria}");
        }
    }
}

#[test]
fn test_conjunction_monotonicity() {
    let houses = registry();
    let base = FilterCriteria::new().with_age_range(Some(5), None);
    let base_ids = member_ids(&apply_member_filters(&houses, &base));

    let extended = [
        base.clone().with_gender(Gender::Female),
        base.clone().with_quran(YesNo::Yes),
        base.clone().with_street("elm street"),
        base.clone().with_dawat(DawatStatus::Trip(DawatDuration::ThreeDay)),
        base.clone().with_query("yusuf"),
    ];
    for criteria in extended {
        let ids = member_ids(&apply_member_filters(&houses, &criteria));
        assert!(ids.is_subset(&base_ids), "{criteria} widened the result");

        let combined_base = member_ids(&apply_combined_filters(&houses, &base));
        let combined = member_ids(&apply_combined_filters(&houses, &criteria));
        assert!(combined.is_subset(&combined_base), "{criteria} widened the combined result");
    }
}

#[test]
fn test_dawat_nil_exclusivity() {
    let houses = vec![House::new("h", "1", "Elm").with_member(
        Member::new("m", "Hamza")
            .with_dawat(DawatStatus::Nil)
            .with_dawat_count(DawatDuration::ThreeDay, 2),
    )];

    let nil = FilterCriteria::new().with_dawat(DawatStatus::Nil);
    let three_day = FilterCriteria::new().with_dawat(DawatStatus::Trip(DawatDuration::ThreeDay));

    assert!(apply_combined_filters(&houses, &nil).is_empty());
    assert_eq!(apply_combined_filters(&houses, &three_day).len(), 1);
}

#[test]
fn test_age_boundary_inclusivity() {
    let houses: Vec<House> = [17, 18, 30, 31]
        .into_iter()
        .map(|age| {
            House::new(format!("h{age}"), age.to_string(), "Elm")
                .with_member(Member::new(format!("m{age}"), "X").with_age(age))
        })
        .collect();
    let criteria = FilterCriteria::new().with_age_range(Some(18), Some(30));

    let ids = member_ids(&apply_member_filters(&houses, &criteria));
    assert_eq!(
        ids.into_iter().collect::<Vec<_>>(),
        vec!["m18".to_string(), "m30".to_string()]
    );
}

#[test]
fn test_fractional_and_negative_age_bounds() {
    let houses: Vec<House> = [17, 18]
        .into_iter()
        .map(|age| {
            House::new(format!("h{age}"), age.to_string(), "Elm")
                .with_member(Member::new(format!("a{age}"), "X").with_age(age))
        })
        .chain([House::new("hx", "99", "Elm").with_member(Member::new("ax", "Ageless"))])
        .collect();

    let half = criteria_from_value(json!({"minAge": "17.5"}));
    let ids = member_ids(&apply_member_filters(&houses, &half));
    assert_eq!(ids.into_iter().collect::<Vec<_>>(), ["a18"]);

    let below_zero = criteria_from_value(json!({"minAge": "-1"}));
    let ids = member_ids(&apply_member_filters(&houses, &below_zero));
    assert_eq!(ids.into_iter().collect::<Vec<_>>(), ["a17", "a18"]);

    let capped = criteria_from_value(json!({"maxAge": 17.5}));
    let ids = member_ids(&apply_member_filters(&houses, &capped));
    assert_eq!(ids.into_iter().collect::<Vec<_>>(), ["a17"]);
}

#[test]
fn test_house_number_prefix_disambiguation() {
    let houses = registry();

    let four = apply_combined_filters(&houses, &FilterCriteria::new().with_query("4"));
    assert_eq!(house_ids(&four), ["h4", "h42"]);
    assert_eq!(four[0].members.len(), 2);
    assert_eq!(four[1].members.len(), 1);

    let forty_two = apply_combined_filters(&houses, &FilterCriteria::new().with_query("42"));
    assert_eq!(house_ids(&forty_two), ["h42"]);

    let four = houses.iter().find(|h| h.id == "h4").unwrap();
    assert!(is_house_level_hit(four, "4"));
    assert!(!is_house_level_hit(four, "42"));
}

#[test]
fn test_maktab_child_only() {
    let houses = vec![House::new("h", "1", "Elm")
        .with_member(Member::new("adult", "A").with_age(20).with_maktab(YesNo::Yes))
        .with_member(Member::new("child", "C").with_age(10).with_maktab(YesNo::No))];

    let yes = apply_member_filters(&houses, &FilterCriteria::new().with_maktab(YesNo::Yes));
    assert!(yes.is_empty());

    let no = apply_member_filters(&houses, &FilterCriteria::new().with_maktab(YesNo::No));
    assert_eq!(no.len(), 1);
    assert_eq!(no[0].members.len(), 1);
    assert_eq!(no[0].members[0].id, "child");
}

#[test]
fn test_end_to_end_scenario() {
    let houses = vec![
        House::new("h1", "1", "Elm").with_member(
            Member::new("ali", "Ali")
                .with_age(10)
                .with_gender(Gender::Male)
                .with_dawat(DawatStatus::Nil),
        ),
        House::new("h2", "2", "Oak").with_member(
            Member::new("sara", "Sara").with_age(30).with_gender(Gender::Female),
        ),
    ];

    let by_number = apply_combined_filters(&houses, &FilterCriteria::new().with_query("2"));
    assert_eq!(house_ids(&by_number), ["h2"]);
    assert_eq!(by_number[0].members[0].id, "sara");

    let by_name = apply_combined_filters(&houses, &FilterCriteria::new().with_query("Ali"));
    assert_eq!(house_ids(&by_name), ["h1"]);
    assert_eq!(by_name[0].members[0].id, "ali");

    let by_gender = apply_combined_filters(&houses, &FilterCriteria::new().with_gender(Gender::Female));
    assert_eq!(house_ids(&by_gender), ["h2"]);
    assert_eq!(by_gender[0].members[0].id, "sara");
}

#[test]
fn test_mixed_house_and_member_hits() {
    // "oak" names two houses by street and no person
    let houses = registry();
    let result = apply_combined_filters(&houses, &FilterCriteria::new().with_query("oak"));
    assert_eq!(house_ids(&result), ["h2", "h42"]);

    // "yusuf" names nobody's house: only members mentioning Yusuf survive
    let result = apply_combined_filters(&houses, &FilterCriteria::new().with_query("yusuf"));
    assert_eq!(house_ids(&result), ["h1"]);
    assert_eq!(result[0].members.len(), 2);
}

#[test]
fn test_baligh_no_includes_women_and_boys() {
    let houses = registry();
    let result = apply_member_filters(&houses, &FilterCriteria::new().with_baligh(YesNo::No));
    let ids = member_ids(&result);

    for id in ["m1", "m3", "m5"] {
        assert!(ids.contains(id), "{id} should not be Baligh");
    }
    for id in ["m2", "m4", "m6"] {
        assert!(!ids.contains(id), "{id} should be Baligh");
    }
}

#[test]
fn test_inputs_are_not_mutated() {
    let houses = registry();
    let snapshot = houses.clone();
    let criteria = FilterCriteria::new().with_query("4").with_gender(Gender::Female);

    let result = apply_combined_filters(&houses, &criteria);

    assert_eq!(houses, snapshot);
    assert_eq!(house_ids(&result), ["h4"]);
    assert_eq!(result[0].members.len(), 1);
    assert_eq!(houses[2].members.len(), 2);
}
