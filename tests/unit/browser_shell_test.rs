use std::fs;

use octane::app::{BrowserShell, ViewCommand};
use octane::managers::tab_manager::TabManagerTrait;
use rstest::rstest;
use tempfile::TempDir;

/// Builds a shell whose preference file contains `home`. The TempDir is
/// returned so the file outlives the test body.
fn shell_with_home(home: &str) -> (BrowserShell, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_engine.txt");
    fs::write(&path, home).unwrap();
    let shell = BrowserShell::new(Some(path.to_string_lossy().to_string())).unwrap();
    (shell, dir)
}

#[test]
fn test_startup_opens_homepage_tab() {
    let (mut shell, _dir) = shell_with_home("https://www.bing.com/");

    let cmd = shell.startup();
    assert_eq!(cmd, ViewCommand::Load("https://www.bing.com/".to_string()));
    assert_eq!(shell.tabs.count(), 1);

    let tab = shell.tabs.get(0).unwrap();
    assert_eq!(tab.url, "https://www.bing.com/");
    assert_eq!(tab.title, "Homepage");
    assert_eq!(shell.urlbar(), "https://www.bing.com/");
}

#[test]
fn test_missing_preference_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_engine.txt");
    assert!(BrowserShell::new(Some(path.to_string_lossy().to_string())).is_err());
}

#[test]
fn test_empty_preference_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_engine.txt");
    fs::write(&path, "").unwrap();
    assert!(BrowserShell::new(Some(path.to_string_lossy().to_string())).is_err());
}

#[test]
fn test_open_new_tab_defaults_to_home_url() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();

    let cmd = shell.open_new_tab(None);
    assert_eq!(cmd, ViewCommand::Load("https://www.google.com/".to_string()));
    assert_eq!(shell.tabs.count(), 2);
    assert_eq!(shell.tabs.current_index(), Some(1));
    assert_eq!(shell.tabs.current().unwrap().title, "Homepage");
}

#[test]
fn test_switch_tab_refreshes_urlbar_and_window_title() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();
    let first_id = shell.tabs.current().unwrap().id.clone();
    shell.page_load_finished(&first_id, "Google");

    shell.open_new_tab(Some("https://example.com/"));
    let second_id = shell.tabs.current().unwrap().id.clone();
    shell.page_load_finished(&second_id, "Example Domain");
    assert_eq!(shell.window_title(), "Example Domain - Octane");

    let cmd = shell.switch_tab(0).unwrap();
    assert_eq!(cmd, ViewCommand::Load("https://www.google.com/".to_string()));
    assert_eq!(shell.urlbar(), "https://www.google.com/");
    assert_eq!(shell.window_title(), "Google - Octane");
}

#[test]
fn test_background_url_change_does_not_touch_urlbar() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();
    let background_id = shell.tabs.current().unwrap().id.clone();

    shell.open_new_tab(Some("https://example.com/"));
    assert_eq!(shell.urlbar(), "https://example.com/");

    shell.page_url_changed(&background_id, "https://www.google.com/search?q=rust");

    // The slot records the change, the URL bar does not
    assert_eq!(shell.urlbar(), "https://example.com/");
    assert_eq!(
        shell.tabs.get(0).unwrap().url,
        "https://www.google.com/search?q=rust"
    );
}

#[test]
fn test_current_url_change_updates_urlbar() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();
    let id = shell.tabs.current().unwrap().id.clone();

    shell.page_url_changed(&id, "https://www.google.com/search?q=rust");
    assert_eq!(shell.urlbar(), "https://www.google.com/search?q=rust");
}

#[test]
fn test_background_load_updates_label_but_not_window_title() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();
    let background_id = shell.tabs.current().unwrap().id.clone();

    shell.open_new_tab(Some("https://example.com/"));
    let current_id = shell.tabs.current().unwrap().id.clone();
    shell.page_load_finished(&current_id, "Example Domain");

    shell.page_load_finished(&background_id, "Google");
    assert_eq!(shell.tabs.get(0).unwrap().title, "Google");
    assert_eq!(shell.window_title(), "Example Domain - Octane");
}

#[test]
fn test_notification_from_closed_tab_is_dropped() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();
    let stale_id = shell.tabs.current().unwrap().id.clone();
    shell.open_new_tab(Some("https://example.com/"));
    shell.close_tab(0).unwrap();

    shell.page_url_changed(&stale_id, "https://stale.example/");
    shell.page_load_finished(&stale_id, "Stale");
    assert_eq!(shell.urlbar(), "https://example.com/");
}

#[rstest]
#[case("example.com", "http://example.com")]
#[case("https://example.com", "https://example.com")]
#[case("http://example.com", "http://example.com")]
#[case("localhost:8080", "localhost:8080")]
#[case("  example.com  ", "http://example.com")]
#[case("about:blank", "about:blank")]
fn test_navigate_to_url_scheme_defaulting(#[case] input: &str, #[case] expected: &str) {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();

    let cmd = shell.navigate_to_url(input).unwrap();
    assert_eq!(cmd, ViewCommand::Load(expected.to_string()));
    assert_eq!(shell.urlbar(), expected);
    assert_eq!(shell.tabs.current().unwrap().url, expected);
}

#[test]
fn test_navigate_home_points_current_tab_at_home() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();
    shell.navigate_to_url("example.com");

    let cmd = shell.navigate_home().unwrap();
    assert_eq!(cmd, ViewCommand::Load("https://www.google.com/".to_string()));
    assert_eq!(shell.tabs.current().unwrap().url, "https://www.google.com/");
    assert_eq!(shell.urlbar(), "https://www.google.com/");
}

#[test]
fn test_history_commands_forward_to_current_view() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    assert!(shell.navigate_back().is_none()); // no tab yet

    shell.startup();
    assert_eq!(shell.navigate_back(), Some(ViewCommand::Back));
    assert_eq!(shell.navigate_forward(), Some(ViewCommand::Forward));
    assert_eq!(shell.reload(), Some(ViewCommand::Reload));
}

#[test]
fn test_set_home_url_opens_tab_and_persists() {
    let (mut shell, dir) = shell_with_home("https://www.google.com/");
    shell.startup();

    let cmd = shell.set_home_url("https://www.duckduckgo.com/").unwrap();
    assert_eq!(
        cmd,
        ViewCommand::Load("https://www.duckduckgo.com/".to_string())
    );
    assert_eq!(shell.tabs.count(), 2);
    assert_eq!(
        shell.tabs.current().unwrap().url,
        "https://www.duckduckgo.com/"
    );

    // The preference file's sole line is exactly the new URL
    let content = fs::read_to_string(dir.path().join("search_engine.txt")).unwrap();
    assert_eq!(content, "https://www.duckduckgo.com/");

    // A subsequent new tab opens at the new home URL
    let cmd = shell.open_new_tab(None);
    assert_eq!(
        cmd,
        ViewCommand::Load("https://www.duckduckgo.com/".to_string())
    );
}

#[test]
fn test_close_last_tab_is_a_silent_noop() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();

    let result = shell.close_tab(0).unwrap();
    assert!(result.is_none());
    assert_eq!(shell.tabs.count(), 1);
    assert_eq!(shell.urlbar(), "https://www.google.com/");
}

#[test]
fn test_close_current_tab_loads_new_current() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();
    shell.open_new_tab(Some("https://example.com/"));

    let cmd = shell.close_tab(1).unwrap();
    assert_eq!(
        cmd,
        Some(ViewCommand::Load("https://www.google.com/".to_string()))
    );
    assert_eq!(shell.tabs.count(), 1);
    assert_eq!(shell.urlbar(), "https://www.google.com/");
}

#[test]
fn test_close_background_tab_needs_no_load() {
    let (mut shell, _dir) = shell_with_home("https://www.google.com/");
    shell.startup();
    shell.open_new_tab(Some("https://example.com/"));
    let current_id = shell.tabs.current().unwrap().id.clone();

    let cmd = shell.close_tab(0).unwrap();
    assert!(cmd.is_none());
    assert_eq!(shell.tabs.count(), 1);
    assert_eq!(shell.tabs.current().unwrap().id, current_id);
    assert_eq!(shell.urlbar(), "https://example.com/");
}
