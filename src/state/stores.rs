#[cfg(test)]
#[path = "stores_test.rs"]
mod stores_test;

use crate::net::types::StoreRecord;

/// Rows shown per page in the store table.
pub const PAGE_SIZE: usize = 20;

/// State for the commercial-district store browser.
#[derive(Clone, Debug, Default)]
pub struct StoresState {
    pub records: Option<Vec<StoreRecord>>,
    pub loading: bool,
    pub error: Option<String>,
    pub district: Option<String>,
    pub page: usize,
}

/// Distinct district names present in the registry, sorted.
pub fn districts(records: &[StoreRecord]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.district.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Records matching the selected district, or all records when none is
/// selected.
pub fn filter_by_district<'a>(
    records: &'a [StoreRecord],
    district: Option<&str>,
) -> Vec<&'a StoreRecord> {
    records
        .iter()
        .filter(|r| district.is_none_or(|d| r.district == d))
        .collect()
}

/// Number of pages needed for `total` records. An empty registry still
/// has one (empty) page.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// The slice of `items` shown on a zero-based `page`. Out-of-range pages
/// yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}
