//! Octane — a minimal tabbed web-browser shell.
//!
//! Entry point: runs the wry/tao webview shell. When built without the
//! `gui` feature, runs a console demo that exercises the core instead.

#[cfg(feature = "gui")]
fn main() {
    octane::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    use octane::app::{BrowserShell, ViewCommand};
    use octane::managers::tab_manager::TabManagerTrait;

    println!();
    println!("Octane v{} — headless demo", env!("CARGO_PKG_VERSION"));
    println!();

    let prefs = std::env::temp_dir().join("octane_demo_search_engine.txt");
    std::fs::write(&prefs, "https://www.google.com/").expect("Failed to seed preference file");

    let mut shell = BrowserShell::new(Some(prefs.to_string_lossy().to_string()))
        .expect("Failed to construct shell");

    shell.startup();
    println!("  Started with home URL {}", shell.home_url());
    println!("  First tab: {} ({})", shell.urlbar(), shell.window_title());

    shell.open_new_tab(None);
    if let Some(ViewCommand::Load(url)) = shell.navigate_to_url("example.com") {
        println!("  Typed 'example.com', navigating to {}", url);
    }
    let current = shell.tabs.current().map(|t| t.id.clone()).unwrap_or_default();
    shell.page_load_finished(&current, "Example Domain");
    println!("  Page loaded, window title: {}", shell.window_title());

    shell.switch_tab(0).expect("Tab 0 exists");
    println!("  Switched to tab 0, URL bar: {}", shell.urlbar());

    shell
        .set_home_url("https://www.duckduckgo.com/")
        .expect("Failed to persist home URL");
    println!("  Search engine changed, {} tabs open", shell.tabs.count());

    while shell.tabs.count() > 1 {
        shell.close_tab(0).expect("Tab 0 exists");
    }
    let refused = shell.close_tab(0).expect("Tab 0 exists");
    assert!(refused.is_none(), "closing the last tab must be refused");
    println!("  Closed tabs down to {}; last close refused", shell.tabs.count());

    let _ = std::fs::remove_file(&prefs);
    println!();
    println!("  ✓ BrowserShell core OK");
}
