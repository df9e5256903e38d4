//! NoBars: hide the macOS menu bar and Dock from a status bar item.

#[cfg(target_os = "macos")]
mod app;
mod config;
#[cfg(target_os = "macos")]
mod deferred_bus;
mod error;
#[cfg(target_os = "macos")]
mod modifier_keys;
#[cfg(target_os = "macos")]
mod shell_command;
#[cfg(test)]
mod tests;
#[cfg(target_os = "macos")]
mod tray_manager;

pub(crate) use error::{AppError, Result as AppResult};

#[cfg(target_os = "macos")]
pub(crate) use {
    app::{App, LoopControl},
    deferred_bus::DeferredNotificationBus,
    shell_command::ShellCommand,
    tray_manager::TrayManager,
};

use crate::config::{Config, DEFAULT_LOG_FILTER};

use tracing::error;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Load the config, then start logging with its filter.
///
/// Exits the process if the config cannot be loaded.
fn load_config_and_init_logging() -> Config {
    let config = Config::load();

    let filter = match &config {
        Ok(c) => c.logging.filter.clone(),
        Err(_) => DEFAULT_LOG_FILTER.to_string(),
    };
    init_logging(&filter);

    match config {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    }
}

/// Application entry point.
#[cfg(target_os = "macos")]
fn main() {
    use tao::{
        event::{Event, StartCause},
        event_loop::{ControlFlow, EventLoopBuilder},
    };
    use tray_icon::{TrayIconEvent, menu::MenuEvent};

    let config = load_config_and_init_logging();

    let event_loop = EventLoopBuilder::<ShellCommand>::with_user_event().build();

    // Route status item and menu callbacks into the loop so every handler
    // runs on the main thread.
    let tray_proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = tray_proxy.send_event(ShellCommand::Tray(event));
    }));
    let menu_proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = menu_proxy.send_event(ShellCommand::Menu(event));
    }));

    let proxy = event_loop.create_proxy();
    let mut pending_config = Some(config);

    // App lives on the main thread - the status item is !Send.
    let mut app: Option<App> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                let Some(config) = pending_config.take() else {
                    return;
                };

                match App::new(config, proxy.clone()) {
                    Ok(a) => app = Some(a),
                    Err(e) => {
                        error!("Failed to start NoBars: {:?}", e);
                        std::process::exit(1);
                    }
                }
            }
            Event::UserEvent(command) => {
                let Some(app) = app.as_mut() else {
                    return;
                };

                if app.handle_command(command) == LoopControl::Exit {
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            }
            _ => {}
        }
    });
}

/// Application entry point.
#[cfg(not(target_os = "macos"))]
fn main() {
    let _config = load_config_and_init_logging();

    error!("NoBars toggles macOS preferences and only runs on macOS");
    std::process::exit(1);
}
