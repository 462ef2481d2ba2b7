// SPDX-License-Identifier: MPL-2.0
//! Application root state and bootstrap wiring.
//!
//! The `App` struct owns the notification presenter and the classified HTTP
//! client. Both are registered here, explicitly, during startup: the
//! classifier wraps the shared client before anything can use it, and the
//! presenter gets its timings and alert title from the loaded configuration.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::DiagnosticsHandle;
use crate::http;
use crate::ui::notifications::{BlockingAlert, Manager};
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Endpoint the demo fetch button requests when no flag overrides it.
const DEFAULT_ENDPOINT: &str = "https://httpbin.org/status/500";

/// Root Iced application state bridging the presenter, the classified HTTP
/// client, and persisted preferences.
pub struct App {
    pub(crate) manager: Manager,
    pub(crate) diagnostics: DiagnosticsHandle,
    pub(crate) http: Option<http::Client>,
    pub(crate) endpoint: String,
    pub(crate) toast_title: String,
    pub(crate) input: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("endpoint", &self.endpoint)
            .field("toast_count", &self.manager.surfaces().toast_count())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot, so hand the flags over through a cell.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state: loads config, wires diagnostics into
    /// the presenter, and registers the classified HTTP client.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let diagnostics = DiagnosticsHandle::default();

        let mut manager = Manager::new()
            .with_durations(config.durations())
            .with_alert(Box::new(BlockingAlert::new(config.toast_title())));
        manager.set_diagnostics(diagnostics.clone());

        let http = match http::Client::new(diagnostics.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("HTTP client registration failed: {}", e);
                None
            }
        };

        let app = App {
            manager,
            diagnostics,
            http,
            endpoint: flags
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            toast_title: config.toast_title().to_string(),
            input: String::new(),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Iced Toasts".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
