use super::*;

#[test]
fn sidebar_starts_open() {
    let s = UiState::default();
    assert!(s.sidebar_open);
}
