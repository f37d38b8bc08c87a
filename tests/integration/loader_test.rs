//! Tests for the JSON boundary: loose API payloads in, filtered houses out

use community_filter::{
    DawatDuration, FilterSummary, Gender, apply_combined_filters, criteria_from_value,
    houses_from_value, load_houses,
};
use serde_json::json;
use std::io::Write;

fn api_payload() -> serde_json::Value {
    json!([
        {
            "_id": "h1",
            "number": 1,
            "street": "Elm",
            "members": [
                {
                    "_id": "m1",
                    "name": "Ali",
                    "age": "10",
                    "gender": "m",
                    "dawat": "Nil",
                    "dawatCounts": {}
                },
                {
                    "_id": "m2",
                    "name": "Yusuf",
                    "age": 40,
                    "gender": "Male",
                    "dawat": "Nil",
                    "dawatCounts": {"3-day": 2, "10-day": 0, "40-day": 0, "4-month": 0}
                }
            ]
        },
        {
            "_id": "h2",
            "number": "2",
            "street": "Oak",
            "members": [
                {"_id": "m3", "name": "Sara", "age": 30, "gender": "F", "phone": 5550123}
            ]
        },
        "not a house"
    ])
}

#[test]
fn test_ui_filters_over_api_payload() {
    let houses = houses_from_value(api_payload());
    assert_eq!(houses.len(), 2);

    let criteria = criteria_from_value(json!({
        "q": "",
        "gender": "male",
        "dawat": "Nil",
        "minAge": "",
        "maxAge": ""
    }));
    let result = apply_combined_filters(&houses, &criteria);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].members.len(), 1);
    assert_eq!(result[0].members[0].id, "m1");
}

#[test]
fn test_invalid_numeric_filter_matches_nothing() {
    let houses = houses_from_value(api_payload());
    let criteria = criteria_from_value(json!({"minAge": "abc"}));

    assert!(apply_combined_filters(&houses, &criteria).is_empty());
}

#[test]
fn test_zero_count_filter() {
    let houses = houses_from_value(api_payload());
    let criteria = criteria_from_value(json!({"dawatCountKey": "3-day", "dawatCountTimes": "0"}));
    let result = apply_combined_filters(&houses, &criteria);

    let ids: Vec<&str> = result
        .iter()
        .flat_map(|h| h.members.iter().map(|m| m.id.as_str()))
        .collect();
    assert_eq!(ids, ["m1", "m3"]);
}

#[test]
fn test_phone_search() {
    let houses = houses_from_value(api_payload());
    let result = apply_combined_filters(&houses, &criteria_from_value(json!({"q": "0123"})));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].members[0].id, "m3");
}

#[test]
fn test_unknown_enum_criterion_never_matches() {
    let houses = houses_from_value(api_payload());
    for criteria in [
        json!({"dawat": "1-year"}),
        json!({"quran": "sometimes"}),
        json!({"education": "Astronaut"}),
        json!({"dawatCountKey": "2-day"}),
    ] {
        let criteria = criteria_from_value(criteria);
        assert!(
            apply_combined_filters(&houses, &criteria).is_empty(),
            "{criteria} should match nothing"
        );
    }
}

#[test]
fn test_load_houses_from_file() {
    let path = std::env::temp_dir().join(format!("community-filter-{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", api_payload()).unwrap();
    }

    let houses = load_houses(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let summary = FilterSummary::from_houses(&houses);
    assert_eq!(summary.house_count, 2);
    assert_eq!(summary.member_count, 3);
    assert_eq!(summary.male_count, 2);
    assert_eq!(summary.female_count, 1);
    assert_eq!(summary.participation(DawatDuration::ThreeDay), 1);
    assert_eq!(houses[1].members[0].gender, Some(Gender::Female));
}

#[test]
fn test_output_serializes_with_wire_names() {
    let houses = houses_from_value(api_payload());
    let value = serde_json::to_value(&houses[0]).unwrap();

    assert_eq!(value["number"], "1");
    assert_eq!(value["members"][1]["fatherName"], "");
    assert_eq!(value["members"][1]["dawatCounts"]["3-day"], 2);
    assert_eq!(value["members"][0]["gender"], "Male");
    assert_eq!(value["members"][0]["dawat"], "Nil");
}
