//! Memoization and versioned publication across threads

use crate::utils::{house_ids, registry};
use community_filter::{
    FilterCriteria, FilterEngine, FilterMode, FilterSession, Gender, House, MemoizedFilter,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_memoized_keystrokes() {
    let houses: Arc<[House]> = registry().into();
    let mut memo = MemoizedFilter::new(FilterEngine::default(), FilterMode::Combined);

    let typed = ["4", "4", "42", "42"];
    let results: Vec<Arc<[House]>> = typed
        .iter()
        .map(|q| memo.apply(&houses, &FilterCriteria::new().with_query(q)))
        .collect();

    assert_eq!(memo.misses(), 2);
    assert_eq!(memo.hits(), 2);
    assert_eq!(house_ids(&results[0]), ["h4", "h42"]);
    assert_eq!(house_ids(&results[3]), ["h42"]);
}

#[test]
fn test_stale_thread_cannot_overwrite() {
    let houses = Arc::new(registry());
    let session = Arc::new(FilterSession::new());
    let engine = FilterEngine::default();

    let stale = session.begin(FilterCriteria::new().with_gender(Gender::Male));
    let fresh = session.begin(FilterCriteria::new().with_gender(Gender::Female));

    assert!(session.run(&engine, &houses, &fresh));

    let handle = {
        let session = Arc::clone(&session);
        let houses = Arc::clone(&houses);
        thread::spawn(move || session.run(&FilterEngine::default(), &houses, &stale))
    };
    assert!(!handle.join().unwrap());

    let (version, published) = session.latest().unwrap();
    assert_eq!(version, fresh.version());
    assert!(
        published
            .iter()
            .flat_map(|h| h.members.iter())
            .all(|m| m.gender == Some(Gender::Female))
    );
}
