use super::*;

fn record(name: &str, district: &str) -> StoreRecord {
    StoreRecord {
        name: name.to_owned(),
        category: "음식".to_owned(),
        district: district.to_owned(),
        road_address: "경원대로 1".to_owned(),
        longitude: 126.7052,
        latitude: 37.4563,
    }
}

#[test]
fn stores_state_defaults() {
    let s = StoresState::default();
    assert!(s.records.is_none());
    assert!(!s.loading);
    assert!(s.district.is_none());
    assert_eq!(s.page, 0);
}

#[test]
fn districts_are_unique_and_sorted() {
    let records = vec![
        record("a", "부평동"),
        record("b", "간석동"),
        record("c", "부평동"),
    ];
    assert_eq!(districts(&records), vec!["간석동", "부평동"]);
}

#[test]
fn filter_without_selection_keeps_everything() {
    let records = vec![record("a", "부평동"), record("b", "간석동")];
    assert_eq!(filter_by_district(&records, None).len(), 2);
}

#[test]
fn filter_matches_selected_district_only() {
    let records = vec![
        record("a", "부평동"),
        record("b", "간석동"),
        record("c", "부평동"),
    ];
    let filtered = filter_by_district(&records, Some("부평동"));
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.district == "부평동"));
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0), 1);
    assert_eq!(page_count(PAGE_SIZE), 1);
    assert_eq!(page_count(PAGE_SIZE + 1), 2);
}

#[test]
fn page_slice_windows_the_records() {
    let items: Vec<usize> = (0..PAGE_SIZE + 5).collect();
    assert_eq!(page_slice(&items, 0).len(), PAGE_SIZE);
    assert_eq!(page_slice(&items, 1), &items[PAGE_SIZE..]);
}

#[test]
fn page_slice_out_of_range_is_empty() {
    let items: Vec<usize> = (0..3).collect();
    assert!(page_slice(&items, 1).is_empty());
    assert!(page_slice::<usize>(&[], 0).is_empty());
}
