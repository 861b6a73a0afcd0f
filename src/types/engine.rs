/// A search-engine menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

/// The built-in search engines, in menu order. Selecting one opens a new
/// tab at its canonical URL and persists that URL as the home page.
pub const SEARCH_ENGINES: &[SearchEngine] = &[
    SearchEngine {
        name: "Google",
        icon: "G",
        url: "https://www.google.com/",
    },
    SearchEngine {
        name: "DuckDuckGo",
        icon: "D",
        url: "https://www.duckduckgo.com/",
    },
    SearchEngine {
        name: "Bing",
        icon: "B",
        url: "https://www.bing.com/",
    },
];

/// Looks up an engine by its menu name.
pub fn find(name: &str) -> Option<&'static SearchEngine> {
    SEARCH_ENGINES.iter().find(|e| e.name == name)
}
