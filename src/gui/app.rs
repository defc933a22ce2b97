use iced::{Element, Task, Theme, task, widget::operation, widget::scrollable::RelativeOffset};
use tracing::info;

use super::{Message, widgets};
use crate::{
    catalog::Catalog,
    effects::{self, Presenter},
    nav::{Command, Effect, Navigator},
    resolve::{contact_value, resolve},
    timer::PendingReset,
};

/// Collects the tasks a transition asks for.
#[derive(Default)]
struct TaskPresenter {
    tasks: Vec<Task<Message>>,
}

impl Presenter for TaskPresenter {
    fn scroll_to_top(&mut self) {
        self.tasks
            .push(operation::snap_to(widgets::content_id(), RelativeOffset::START));
    }

    fn write_clipboard(&mut self, text: &str) -> anyhow::Result<()> {
        self.tasks.push(iced::clipboard::write(text.to_string()));
        Ok(())
    }
}

pub struct PortfolioApp {
    catalog: Catalog,
    navigator: Navigator,
    year: i32,
    pending_reset: PendingReset<task::Handle>,
}

impl PortfolioApp {
    pub fn new(catalog: Catalog, navigator: Navigator, year: i32) -> Self {
        Self {
            catalog,
            navigator,
            year,
            pending_reset: PendingReset::new(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} - Portfolio", self.catalog.site().brand)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let command = match message {
            Message::Command(command) => {
                if let Command::CopiedExpired(ticket) = &command {
                    self.pending_reset.settle(*ticket);
                }
                command
            }
            Message::Copy(field) => {
                let value = contact_value(&self.catalog.site().contact, field).to_string();
                Command::CopyField(field, value)
            }
        };

        let mut presenter = TaskPresenter::default();
        for effect in self.navigator.apply(command) {
            if let Some(Effect::ScheduleCopiedReset { ticket, after }) =
                effects::perform(&mut presenter, effect)
            {
                let (reset, handle) = Task::perform(tokio::time::sleep(after), move |_| {
                    Message::Command(Command::CopiedExpired(ticket))
                })
                .abortable();
                self.pending_reset.replace(ticket, handle);
                presenter.tasks.push(reset);
            }
        }
        Task::batch(presenter.tasks)
    }

    pub fn view(&self) -> Element<'_, Message> {
        widgets::layout(resolve(self.navigator.state(), &self.catalog), self.year)
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

pub fn run(catalog: Catalog, navigator: Navigator, year: i32) -> iced::Result {
    info!("opening portfolio window");
    iced::application(
        move || PortfolioApp::new(catalog.clone(), navigator.clone(), year),
        PortfolioApp::update,
        PortfolioApp::view,
    )
    .title(PortfolioApp::title)
    .theme(PortfolioApp::theme)
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::CopiedField;

    fn app_with_modal_open() -> PortfolioApp {
        let mut app = PortfolioApp::new(Catalog::builtin(), Navigator::new(), 2025);
        let _ = app.update(Message::Command(Command::OpenContactModal));
        app
    }

    #[tokio::test]
    async fn test_second_copy_aborts_first_reset() {
        let mut app = app_with_modal_open();

        let _ = app.update(Message::Copy(CopiedField::Email));
        let first_ticket = app.pending_reset.ticket().expect("reset scheduled");
        let first = app.pending_reset.handle().cloned().expect("handle stored");
        assert!(!first.is_aborted());

        let _ = app.update(Message::Copy(CopiedField::Phone));
        let second_ticket = app.pending_reset.ticket().expect("reset scheduled");

        assert!(first.is_aborted());
        assert!(second_ticket > first_ticket);
        assert_eq!(app.navigator.state().pending_reset(), Some(second_ticket));
        assert!(!app.pending_reset.handle().expect("handle stored").is_aborted());
    }

    #[tokio::test]
    async fn test_expiry_clears_indicator_and_pending_handle() {
        let mut app = app_with_modal_open();
        let _ = app.update(Message::Copy(CopiedField::Email));
        let ticket = app.pending_reset.ticket().expect("reset scheduled");

        let _ = app.update(Message::Command(Command::CopiedExpired(ticket)));

        assert_eq!(app.navigator.state().copied_field(), None);
        assert_eq!(app.pending_reset.ticket(), None);
    }
}
