#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the application shell.
#[derive(Clone, Debug)]
pub struct UiState {
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true }
    }
}
