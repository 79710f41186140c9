use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::thread;

use plant_core::{find_sample_plant, sample_catalog, EventSource, HistoryStore, Plant};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(plant_logging::initialize_for_tests);
}

/// Store whose ids and timestamps advance deterministically with each add.
fn counting_store() -> HistoryStore {
    let ids = Arc::new(AtomicUsize::new(0));
    let ticks = Arc::new(AtomicUsize::new(0));
    HistoryStore::with_event_source(EventSource::new(
        move || format!("event-{}", ids.fetch_add(1, Ordering::SeqCst) + 1),
        move || {
            let second = ticks.fetch_add(1, Ordering::SeqCst);
            format!("2026-10-18T12:00:{second:02}.000Z")
        },
    ))
}

fn plant(id: &str) -> Plant {
    let mut plant = sample_catalog().remove(0);
    plant.id = id.to_string();
    plant
}

#[test]
fn starts_empty() {
    init_logging();
    let store = HistoryStore::new();
    assert!(store.is_empty());
    assert!(store.items().is_empty());
}

#[test]
fn distinct_plants_are_ordered_newest_first() {
    init_logging();
    let mut store = counting_store();
    for id in ["a", "b", "c"] {
        store.add(plant(id));
    }

    let ids: Vec<&str> = store.items().iter().map(|item| item.plant.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn re_adding_a_plant_moves_it_to_front_with_new_event() {
    init_logging();
    let mut store = counting_store();
    store.add(plant("rose"));
    store.add(plant("tulip"));
    let first_rose = store.items()[1].clone();

    store.add(plant("rose"));

    let items = store.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].plant.id, "rose");
    assert_eq!(items[0].id, "event-3");
    assert_eq!(items[0].timestamp, "2026-10-18T12:00:02.000Z");
    assert_ne!(items[0].timestamp, first_rose.timestamp);
    assert_eq!(items[1].plant.id, "tulip");
}

#[test]
fn same_plant_twice_keeps_only_latest() {
    init_logging();
    let mut store = counting_store();
    store.add(plant("rose"));
    let latest = store.add(plant("rose")).clone();

    assert_eq!(store.items(), &[latest]);
}

#[test]
fn clear_empties_until_next_add() {
    init_logging();
    let mut store = counting_store();
    store.add(plant("a"));
    store.add(plant("b"));

    store.clear();
    for _ in 0..3 {
        assert!(store.snapshot().is_empty());
    }

    store.add(plant("c"));
    assert_eq!(store.len(), 1);
}

#[test]
fn snapshot_is_unaffected_by_later_mutation() {
    init_logging();
    let mut store = counting_store();
    store.add(plant("a"));
    let snapshot = store.snapshot();

    store.add(plant("b"));
    store.clear();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].plant.id, "a");
}

#[test]
fn system_events_have_unique_ids_and_utc_timestamps() {
    init_logging();
    let mut store = HistoryStore::new();
    let first = store.add(plant("a")).clone();
    let second = store.add(plant("b")).clone();

    assert_ne!(first.id, second.id);
    assert!(first.timestamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&first.timestamp).is_ok());
}

#[test]
fn locked_store_dedups_across_threads() {
    init_logging();
    let store = Arc::new(Mutex::new(HistoryStore::new()));
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store.lock().unwrap().add(plant(&format!("plant-{}", n % 4)));
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread");
    }

    let mut store = store.lock().unwrap();
    let mut ids: Vec<String> = store.snapshot().into_iter().map(|item| item.plant.id).collect();
    ids.sort();
    assert_eq!(ids, vec!["plant-0", "plant-1", "plant-2", "plant-3"]);

    store.clear();
    assert!(store.is_empty());
}

#[test]
fn sample_plants_feed_the_store() {
    init_logging();
    let mut store = counting_store();
    let rose = find_sample_plant("rose").expect("rose");
    let orchid = find_sample_plant("orchid").expect("orchid");

    store.add(rose.clone());
    store.add(orchid);
    store.add(rose);

    let names: Vec<&str> = store
        .items()
        .iter()
        .map(|item| item.plant.common_name.as_str())
        .collect();
    assert_eq!(names, vec!["Rose", "Orchid"]);
}
