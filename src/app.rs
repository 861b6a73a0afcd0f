//! App Core for Octane.
//!
//! `BrowserShell` mediates between UI events and the embedded webview. It
//! owns the only real state: the tab strip, the persisted home URL, the
//! shortcut table, and the chrome the window mirrors (URL-bar text, window
//! title). Each operation returns a [`ViewCommand`] for the UI layer to
//! execute against the webview; everything the command triggers inside the
//! engine (rendering, networking, history) is opaque to the shell.

use crate::managers::shortcut_manager::ShortcutManager;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::homepage_store::{HomepageStore, HomepageStoreTrait};
use crate::types::errors::{HomepageError, TabError};

pub const APP_NAME: &str = "Octane";

/// Label given to freshly opened tabs until their first page load reports a
/// title.
const NEW_TAB_LABEL: &str = "Homepage";

/// A command for the embedded webview, produced by shell operations and
/// executed by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Point the view at a URL.
    Load(String),
    /// Step back in the view's history.
    Back,
    /// Step forward in the view's history.
    Forward,
    /// Reload the current page.
    Reload,
}

/// The browser shell: a stateful controller over a collection of tab slots.
pub struct BrowserShell {
    pub tabs: TabManager,
    pub homepage: HomepageStore,
    pub shortcuts: ShortcutManager,
    urlbar: String,
    window_title: String,
}

impl BrowserShell {
    /// Creates the shell, reading the home URL from the preference file.
    ///
    /// A missing or empty preference file is a construction error: the shell
    /// cannot determine a home URL and must not proceed silently.
    pub fn new(prefs_path: Option<String>) -> Result<Self, HomepageError> {
        let mut homepage = HomepageStore::new(prefs_path);
        homepage.load()?;

        Ok(Self {
            tabs: TabManager::new(),
            homepage,
            shortcuts: ShortcutManager::new(),
            urlbar: String::new(),
            window_title: APP_NAME.to_string(),
        })
    }

    /// Startup sequence: open the first tab at the home URL.
    pub fn startup(&mut self) -> ViewCommand {
        self.open_new_tab(None)
    }

    /// Opens a new tab, appends it to the strip, and makes it current.
    /// `url` defaults to the home URL.
    pub fn open_new_tab(&mut self, url: Option<&str>) -> ViewCommand {
        let target = url.unwrap_or_else(|| self.homepage.url()).to_string();
        self.tabs.open_tab(&target, NEW_TAB_LABEL);
        self.refresh_chrome();
        ViewCommand::Load(target)
    }

    /// Closes the tab at `index` (the clicked tab's index). Refused without
    /// any state change when fewer than 2 tabs remain. Returns a `Load` of
    /// the newly current tab's URL when the closed tab was the current one.
    pub fn close_tab(&mut self, index: usize) -> Result<Option<ViewCommand>, TabError> {
        let before = self.tabs.current().map(|t| t.id.clone());
        if !self.tabs.close_tab(index)? {
            return Ok(None);
        }

        let after = self.tabs.current().map(|t| t.id.clone());
        if before != after {
            self.refresh_chrome();
            return Ok(self
                .tabs
                .current()
                .map(|t| ViewCommand::Load(t.url.clone())));
        }
        Ok(None)
    }

    /// Makes the tab at `index` current and refreshes the URL bar and window
    /// title from it.
    pub fn switch_tab(&mut self, index: usize) -> Result<ViewCommand, TabError> {
        self.tabs.switch_to(index)?;
        self.refresh_chrome();
        let url = self
            .tabs
            .current()
            .map(|t| t.url.clone())
            .unwrap_or_default();
        Ok(ViewCommand::Load(url))
    }

    /// Forwarded verbatim to the current tab's view; a no-op inside the
    /// engine when there is no history entry to go to.
    pub fn navigate_back(&self) -> Option<ViewCommand> {
        self.tabs.current().map(|_| ViewCommand::Back)
    }

    pub fn navigate_forward(&self) -> Option<ViewCommand> {
        self.tabs.current().map(|_| ViewCommand::Forward)
    }

    pub fn reload(&self) -> Option<ViewCommand> {
        self.tabs.current().map(|_| ViewCommand::Reload)
    }

    /// Points the current tab at the home URL.
    pub fn navigate_home(&mut self) -> Option<ViewCommand> {
        let home = self.homepage.url().to_string();
        let id = self.tabs.current()?.id.clone();
        let _ = self.tabs.update_url(&id, &home);
        self.urlbar = home.clone();
        Some(ViewCommand::Load(home))
    }

    /// Navigates the current tab to the URL-bar text, defaulting the scheme
    /// to `http` when the input has none. No validation beyond that —
    /// malformed input is handed to the engine, whose error page is the
    /// user-visible result.
    pub fn navigate_to_url(&mut self, input: &str) -> Option<ViewCommand> {
        let target = default_scheme(input);
        let id = self.tabs.current()?.id.clone();
        let _ = self.tabs.update_url(&id, &target);
        self.urlbar = target.clone();
        Some(ViewCommand::Load(target))
    }

    /// Opens a new tab at `url`, then persists `url` as the new home URL.
    pub fn set_home_url(&mut self, url: &str) -> Result<ViewCommand, HomepageError> {
        let cmd = self.open_new_tab(Some(url));
        self.homepage.save(url)?;
        Ok(cmd)
    }

    /// A view reported a URL change. The slot's URL is always recorded; the
    /// URL bar is refreshed only when the reporting tab is still the current
    /// one, so a notification that raced a tab switch cannot clobber it.
    pub fn page_url_changed(&mut self, tab_id: &str, url: &str) {
        if self.tabs.update_url(tab_id, url).is_err() {
            return; // tab already closed
        }
        if self.tabs.is_current(tab_id) {
            self.urlbar = url.to_string();
        }
    }

    /// A view finished loading a page. The slot's label becomes the page
    /// title; the window title is rewritten only when the reporting tab is
    /// still the current one.
    pub fn page_load_finished(&mut self, tab_id: &str, title: &str) {
        if self.tabs.update_title(tab_id, title).is_err() {
            return; // tab already closed
        }
        if self.tabs.is_current(tab_id) {
            self.window_title = format!("{} - {}", title, APP_NAME);
        }
    }

    /// The URL-bar text. Mirrors the current tab's URL.
    pub fn urlbar(&self) -> &str {
        &self.urlbar
    }

    /// The window title: `"<current tab's page title> - Octane"`.
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn home_url(&self) -> &str {
        self.homepage.url()
    }

    fn refresh_chrome(&mut self) {
        if let Some(tab) = self.tabs.current() {
            self.urlbar = tab.url.clone();
            self.window_title = format!("{} - {}", tab.title, APP_NAME);
        }
    }
}

/// Defaults the scheme of free-text URL-bar input to `http`.
///
/// Anything before the first `:` that parses as a scheme counts as one, so
/// `localhost:8080` passes through untouched just like `https://…` does.
fn default_scheme(input: &str) -> String {
    let trimmed = input.trim();
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

fn has_scheme(s: &str) -> bool {
    match s.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            match chars.next() {
                Some(c) if c.is_ascii_alphabetic() => {
                    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                }
                _ => false,
            }
        }
        None => false,
    }
}
