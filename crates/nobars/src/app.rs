use crate::{
    AppResult, DeferredNotificationBus, ShellCommand, TrayManager, config::Config, modifier_keys,
};

use nobars_core::{
    BarVisibilityController, ButtonPhase, CfPreferenceStore, ClickButton, ClickEvent,
    ClickOutcome, DesktopCleanup, DistributedNotificationCenter, NotificationBus,
};

use tao::event_loop::EventLoopProxy;
use tracing::{debug, error, info, instrument};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent, menu::MenuEvent};

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep waiting for events.
    Continue,
    /// Leave the event loop.
    Exit,
}

/// Main application state.
///
/// Lives on the main thread: the status item is `!Send`, preference I/O is
/// expected from the UI thread, and distributed notifications are posted
/// from the run loop.
pub struct App {
    controller: BarVisibilityController<CfPreferenceStore, DeferredNotificationBus>,
    tray_manager: TrayManager,
    notification_center: DistributedNotificationCenter,
    desktop_cleanup: DesktopCleanup,
    config: Config,
    proxy: EventLoopProxy<ShellCommand>,
}

impl App {
    /// Read the initial state and put up the status item.
    #[instrument(skip_all)]
    pub fn new(config: Config, proxy: EventLoopProxy<ShellCommand>) -> AppResult<Self> {
        let controller = BarVisibilityController::new(
            CfPreferenceStore::new(),
            DeferredNotificationBus::new(proxy.clone()),
        );
        let tray_manager = TrayManager::new(controller.state())?;

        info!(
            state = %controller.state(),
            clean_up_desktop = config.behavior.clean_up_desktop,
            "NoBars started"
        );

        Ok(Self {
            controller,
            tray_manager,
            notification_center: DistributedNotificationCenter::new(),
            desktop_cleanup: DesktopCleanup::new(),
            config,
            proxy,
        })
    }

    /// Handle one user event from the loop.
    pub fn handle_command(&mut self, command: ShellCommand) -> LoopControl {
        match command {
            ShellCommand::Tray(event) => {
                if let Err(e) = self.handle_tray_event(event) {
                    error!(error = %e, "Failed to handle status item click");
                }
            }
            ShellCommand::Menu(event) => return self.handle_menu_event(event),
            ShellCommand::PostNotification(notification) => {
                if let Err(e) = self.notification_center.post(notification) {
                    error!(error = %e, "Failed to post change notification");
                }
            }
            ShellCommand::CleanUpDesktop => {
                if let Err(e) = self.desktop_cleanup.run() {
                    error!(error = %e, "Could not clean up desktop");
                }
            }
        }

        LoopControl::Continue
    }

    #[instrument(skip(self))]
    fn handle_tray_event(&mut self, event: TrayIconEvent) -> AppResult<()> {
        let TrayIconEvent::Click {
            button,
            button_state,
            ..
        } = event
        else {
            return Ok(());
        };

        let Some(click) = click_event(button, button_state, modifier_keys::control_key_held())
        else {
            return Ok(());
        };

        match self.controller.handle_click(click)? {
            ClickOutcome::Toggled(state) => {
                self.tray_manager.update_state(state)?;

                // Queued behind the two notification posts.
                if self.config.behavior.clean_up_desktop
                    && self.proxy.send_event(ShellCommand::CleanUpDesktop).is_err()
                {
                    error!("Event loop closed, skipping desktop clean-up");
                }
            }
            ClickOutcome::ContextMenuRequested if menu_opens_natively(&click) => {
                debug!("Status item opens its own menu on right click");
            }
            ClickOutcome::ContextMenuRequested => self.tray_manager.show_context_menu()?,
            ClickOutcome::Ignored => {}
        }

        Ok(())
    }

    fn handle_menu_event(&self, event: MenuEvent) -> LoopControl {
        if event.id == *self.tray_manager.quit_item_id() {
            info!("Quit requested from menu");
            return LoopControl::Exit;
        }

        debug!(id = ?event.id, "Unhandled menu event");
        LoopControl::Continue
    }
}

/// Whether the status item already pops its menu up for this click.
///
/// tray-icon opens the attached menu on right clicks only; a control-click
/// reaches us as a primary click and has to be presented by hand.
pub(crate) fn menu_opens_natively(click: &ClickEvent) -> bool {
    click.button == ClickButton::Secondary
}

/// Translate a tray-icon click into the controller's click model.
///
/// Middle clicks are not routed.
pub(crate) fn click_event(
    button: MouseButton,
    state: MouseButtonState,
    control_held: bool,
) -> Option<ClickEvent> {
    let button = match button {
        MouseButton::Left => ClickButton::Primary,
        MouseButton::Right => ClickButton::Secondary,
        _ => return None,
    };

    let phase = match state {
        MouseButtonState::Down => ButtonPhase::Pressed,
        MouseButtonState::Up => ButtonPhase::Released,
    };

    Some(ClickEvent {
        button,
        phase,
        control_held,
    })
}
