// Timers and ordering
// ===================
//
// Every non-persistent notification gets one `tokio::time::sleep` task when it
// is pushed. When the sleep finishes the task reports `Message::Timeout(id)`.
// A notification dismissed by hand before then is simply absent by the time
// the timeout arrives, and removing an absent id is a no-op, so timers are
// never cancelled.
//
// All queue mutations happen in `update`, one message at a time.

use crate::handlers::{Message, Trigger};
use crate::rendering;
use crate::state::{ActionOutcome, NotificationState};
use cosmic::app::{Core, Settings};
use cosmic::cosmic_config::{Config, CosmicConfigEntry};
use cosmic::iced::{self, Alignment, Length, Subscription};
use cosmic::iced_widget::{column, horizontal_space};
use cosmic::widget::{button, container, text};
use cosmic::{Application, Element, app::Task};
use portal_notifications_config::NotificationsConfig;
use portal_notifications_util::{NotificationId, NotificationOptions, SurfaceEvent, open_target};
use std::time::Duration;

pub fn run() -> cosmic::iced::Result {
    cosmic::app::run::<PortalNotifications>(
        Settings::default()
            .antialiasing(true)
            .client_decorations(true)
            .debug(false)
            .default_text_size(16.0)
            .exit_on_close(true),
        (),
    )?;
    Ok(())
}

struct PortalNotifications {
    core: Core,
    state: NotificationState,
}

impl PortalNotifications {
    fn push_notification(&mut self, options: NotificationOptions) -> Task<Message> {
        let (id, timeout) = self.state.push(options);
        tracing::trace!("pushed notification {id}");

        match timeout {
            Some(timeout) => Self::schedule_timeout(id, timeout),
            None => Task::none(),
        }
    }

    fn schedule_timeout(id: NotificationId, timeout: Duration) -> Task<Message> {
        iced::Task::perform(tokio::time::sleep(timeout), move |_| {
            cosmic::action::app(Message::Timeout(id))
        })
    }

    fn run_action(&mut self, id: NotificationId) {
        match self.state.activate(id) {
            Some(ActionOutcome::Open(url)) => {
                if let Err(e) = open_target(&url) {
                    tracing::error!("Failed to open {}: {}", url, e);
                }
            }
            Some(ActionOutcome::Custom(name)) => {
                tracing::info!("custom action {name} for notification {id}");
            }
            None => {
                tracing::trace!("no action to run for {id}");
            }
        }
    }

    fn toolbar(&self) -> Element<'static, Message> {
        let buttons = Trigger::ALL.iter().fold(
            cosmic::iced_widget::Row::new().spacing(8).align_y(Alignment::Center),
            |row, trigger| {
                row.push(
                    button::text(trigger.label())
                        .on_press(Message::Notify(*trigger))
                        .padding([6, 12]),
                )
            },
        );

        let queue = self.state.queue();
        let count = text::caption(format!("{} / {}", queue.len(), queue.capacity()));

        let mut clear = button::text("Clear all").padding([6, 12]);
        if !self.state.is_empty() {
            clear = clear.on_press(Message::ClearAll);
        }

        cosmic::iced_widget::row![buttons, horizontal_space(), count, clear]
            .spacing(12)
            .align_y(Alignment::Center)
            .into()
    }
}

impl cosmic::Application for PortalNotifications {
    type Message = Message;
    type Executor = cosmic::executor::single::Executor;
    type Flags = ();
    const APP_ID: &'static str = "io.github.portal.Notifications";

    fn init(core: Core, _flags: ()) -> (Self, Task<Message>) {
        let helper = Config::new(
            portal_notifications_config::ID,
            NotificationsConfig::VERSION,
        )
        .ok();

        let config: NotificationsConfig = helper
            .as_ref()
            .map(|helper| {
                NotificationsConfig::get_entry(helper).unwrap_or_else(|(errors, config)| {
                    for err in errors {
                        if err.is_err() {
                            tracing::error!("{:?}", err);
                        }
                    }
                    config
                })
            })
            .unwrap_or_default();

        (
            PortalNotifications {
                core,
                state: NotificationState::new(config),
            },
            Task::none(),
        )
    }

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn view(&self) -> Element<Self::Message> {
        let stacks = self.state.stacks();

        container(column![self.toolbar(), rendering::surface(&stacks)].spacing(8))
            .padding(8)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Message) -> Task<Self::Message> {
        match message {
            Message::Notify(trigger) => {
                let options = trigger.options(self.state.config());
                return self.push_notification(options);
            }
            Message::Dismissed(id) => {
                self.state.handle(SurfaceEvent::Dismissed(id));
            }
            Message::Timeout(id) => {
                self.state.handle(SurfaceEvent::Expired(id));
            }
            Message::ActionClicked(id) => {
                tracing::trace!("action clicked for {id}");
                self.run_action(id);
            }
            Message::ClearAll => {
                let cleared = self.state.clear();
                tracing::debug!("cleared {cleared} notifications");
            }
            Message::Config(config) => {
                self.state.apply_config(config);
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.core
            .watch_config(portal_notifications_config::ID)
            .map(|u| {
                for why in u
                    .errors
                    .into_iter()
                    .filter(cosmic::cosmic_config::Error::is_err)
                {
                    tracing::error!(?why, "config load error");
                }
                Message::Config(u.config)
            })
    }
}
