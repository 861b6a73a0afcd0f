//! Octane UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2 (Chromium-based)
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The toolbar, tab strip and URL bar are rendered as HTML/CSS/JS injected
//! into every page. Communication between the Rust shell and the JS chrome
//! uses wry IPC.

pub mod webview_app;
