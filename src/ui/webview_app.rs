//! WebView-based browser shell using `wry` + `tao`.
//!
//! Architecture:
//! - `with_initialization_script(TOOLBAR_JS)` injects the toolbar, tab strip
//!   and URL bar on every page. On Windows WebView2 this uses
//!   AddScriptToExecuteOnDocumentCreatedAsync.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; each message names a
//!   shell operation, and the resulting `ViewCommand`s are executed against
//!   the webview through the event-loop proxy.
//! - One webview serves every tab: per-tab URL and title live in the shell,
//!   and switching tabs (re)loads the newly current tab's URL.
//! - Page notifications (`url_changed`, `load_finished`) are stamped by the
//!   toolbar with the id of the tab the page was bound to, so a message that
//!   raced a tab switch is dropped by the shell's is-current check.

use std::sync::{Arc, Mutex};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::{BrowserShell, ViewCommand, APP_NAME};
use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::managers::tab_manager::TabManagerTrait;
use crate::types::engine;

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    SetTitle(String),
}

const TOOLBAR_JS: &str = include_str!("../../resources/ui/toolbar.js");

// ─── IPC handler ───

fn handle_ipc(shell: &mut BrowserShell, message: &str) -> Vec<UserEvent> {
    let msg: serde_json::Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };
    let cmd = match msg.get("cmd").and_then(|v| v.as_str()) {
        Some(c) => c,
        None => return Vec::new(),
    };

    let mut events = Vec::new();

    match cmd {
        "ui_ready" => {
            // Toolbar just loaded on a page — send current chrome state
            events.push(UserEvent::EvalScript(build_chrome_update(shell)));
        }

        "new_tab" => {
            push_command(&mut events, Some(shell.open_new_tab(None)));
            events.push(UserEvent::SetTitle(shell.window_title().to_string()));
        }

        "close_tab" => {
            if let Some(index) = msg.get("index").and_then(|v| v.as_u64()) {
                match shell.close_tab(index as usize) {
                    Ok(cmd) => {
                        push_command(&mut events, cmd);
                        events.push(UserEvent::EvalScript(build_chrome_update(shell)));
                        events.push(UserEvent::SetTitle(shell.window_title().to_string()));
                    }
                    Err(e) => eprintln!("[TAB] {}", e),
                }
            }
        }

        "switch_tab" => {
            if let Some(index) = msg.get("index").and_then(|v| v.as_u64()) {
                match shell.switch_tab(index as usize) {
                    Ok(cmd) => {
                        push_command(&mut events, Some(cmd));
                        events.push(UserEvent::SetTitle(shell.window_title().to_string()));
                    }
                    Err(e) => eprintln!("[TAB] {}", e),
                }
            }
        }

        "back" => push_command(&mut events, shell.navigate_back()),
        "forward" => push_command(&mut events, shell.navigate_forward()),
        "reload" => push_command(&mut events, shell.reload()),
        "home" => push_command(&mut events, shell.navigate_home()),

        "navigate" => {
            let input = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            push_command(&mut events, shell.navigate_to_url(input));
        }

        "set_engine" => {
            if let Some(e) = msg
                .get("name")
                .and_then(|v| v.as_str())
                .and_then(engine::find)
            {
                match shell.set_home_url(e.url) {
                    Ok(cmd) => {
                        push_command(&mut events, Some(cmd));
                        events.push(UserEvent::SetTitle(shell.window_title().to_string()));
                    }
                    Err(err) => eprintln!("[PREFS] {}", err),
                }
            }
        }

        "url_changed" => {
            if let (Some(tab), Some(url)) = (
                msg.get("tab").and_then(|v| v.as_str()),
                msg.get("url").and_then(|v| v.as_str()),
            ) {
                shell.page_url_changed(tab, url);
                events.push(UserEvent::EvalScript(build_chrome_update(shell)));
            }
        }

        "load_finished" => {
            if let Some(tab) = msg.get("tab").and_then(|v| v.as_str()) {
                let title = msg.get("title").and_then(|v| v.as_str()).unwrap_or("");
                shell.page_load_finished(tab, title);
                events.push(UserEvent::EvalScript(build_chrome_update(shell)));
                events.push(UserEvent::SetTitle(shell.window_title().to_string()));
            }
        }

        _ => {}
    }

    events
}

fn push_command(events: &mut Vec<UserEvent>, cmd: Option<ViewCommand>) {
    if let Some(cmd) = cmd {
        events.push(match cmd {
            ViewCommand::Load(url) => UserEvent::LoadUrl(url),
            ViewCommand::Back => UserEvent::EvalScript("history.back()".to_string()),
            ViewCommand::Forward => UserEvent::EvalScript("history.forward()".to_string()),
            ViewCommand::Reload => UserEvent::EvalScript("location.reload()".to_string()),
        });
    }
}

fn build_chrome_update(shell: &BrowserShell) -> String {
    let tabs: Vec<serde_json::Value> = shell
        .tabs
        .all()
        .iter()
        .map(|t| serde_json::json!({"id": t.id, "title": t.title, "url": t.url}))
        .collect();
    let state = serde_json::json!({
        "tabs": tabs,
        "current": shell.tabs.current_index(),
        "currentId": shell.tabs.current().map(|t| t.id.clone()),
        "urlbar": shell.urlbar(),
        "shortcuts": shell.shortcuts.list_shortcuts(),
        "engines": engine::SEARCH_ENGINES
            .iter()
            .map(|e| serde_json::json!({"name": e.name, "icon": e.icon}))
            .collect::<Vec<_>>(),
    });
    format!("if(window.__oct_update)__oct_update({})", state)
}

// ─── Main entry point ───

pub fn run() {
    let shell = match BrowserShell::new(None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("octane: {}", e);
            std::process::exit(1);
        }
    };
    let state = Arc::new(Mutex::new(shell));

    let start_url = {
        let mut s = state.lock().unwrap();
        match s.startup() {
            ViewCommand::Load(url) => url,
            _ => s.home_url().to_string(),
        }
    };

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(APP_NAME)
        .with_inner_size(tao::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        // with_initialization_script runs on every http/https navigation,
        // so the toolbar survives link clicks and redirects.
        .with_initialization_script(TOOLBAR_JS)
        .with_url(&start_url)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            eprintln!("[IPC] {}", &body[..body.len().min(200)]);
            let mut s = ipc_state.lock().unwrap();
            for event in handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            eprintln!("[NW] {}", url);
            // No window-per-popup: open the link in the current tab. The
            // toolbar on the landed page reports the URL back to the shell.
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::LoadUrl(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    eprintln!("[LOAD] {}", url);
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::SetTitle(title) => {
                    window.set_title(&title);
                }
            },

            _ => {}
        }
    });
}
