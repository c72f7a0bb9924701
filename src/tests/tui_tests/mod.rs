// TUI Tests Module - Testing the public tui module
// - app_tests: App navigation and key handling
// - screens_tests: ContactFormScreen
// - types_tests: MenuItem and Focus
// - ui_tests: rendering through ratatui's TestBackend

mod app_tests;
mod ui_tests;
