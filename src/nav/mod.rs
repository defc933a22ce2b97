//! Navigation state machine.
//!
//! [`Navigator`] is the single owner of [`NavigationState`]. Every change goes
//! through [`Navigator::apply`], which returns the effects the presentation
//! layer must perform (scrolling, clipboard writes, scheduling the reset of
//! the "copied" indicator).

mod command;
mod state;

use std::time::Duration;

use tracing::debug;

pub use command::{Command, Effect};
pub use state::{CopiedField, CopyTicket, NavigationState, ViewKind};

use state::Copied;

/// How long the "copied" indicator stays visible.
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavigationState,
    next_ticket: u64,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given view, as if the user had navigated there.
    pub fn starting_at(view: ViewKind, project: Option<String>) -> Self {
        let mut navigator = Self::new();
        match (view, project) {
            (ViewKind::ProjectDetail, Some(id)) => {
                navigator.apply(Command::OpenProjectDetail(id));
            }
            (view, _) => {
                navigator.apply(Command::NavigateTo(view));
            }
        }
        navigator
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn apply(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::NavigateTo(view) => {
                debug!(%view, "navigate");
                self.state.view = view;
                self.state.selected_project = None;
                self.state.mobile_menu_open = false;
                vec![Effect::ScrollToTop]
            }
            Command::OpenProjectDetail(id) => {
                debug!(project = %id, "open project detail");
                self.state.view = ViewKind::ProjectDetail;
                self.state.selected_project = Some(id);
                self.state.mobile_menu_open = false;
                vec![Effect::ScrollToTop]
            }
            Command::ToggleMobileMenu => {
                self.state.mobile_menu_open = !self.state.mobile_menu_open;
                debug!(open = self.state.mobile_menu_open, "toggle mobile menu");
                vec![]
            }
            Command::OpenContactModal => {
                self.state.contact_modal_open = true;
                vec![]
            }
            Command::CloseContactModal => {
                self.state.contact_modal_open = false;
                vec![]
            }
            Command::CopyField(field, value) => {
                self.next_ticket += 1;
                let ticket = CopyTicket(self.next_ticket);
                debug!(%field, ticket = ticket.value(), "copy field");
                self.state.copied = Some(Copied { field, ticket });
                vec![
                    Effect::WriteClipboard(value),
                    Effect::ScheduleCopiedReset {
                        ticket,
                        after: COPIED_RESET,
                    },
                ]
            }
            Command::CopiedExpired(ticket) => {
                if self.state.pending_reset() == Some(ticket) {
                    debug!(ticket = ticket.value(), "copied indicator cleared");
                    self.state.copied = None;
                } else {
                    debug!(ticket = ticket.value(), "ignoring stale copied reset");
                }
                vec![]
            }
        }
    }

    pub fn navigate_to(&mut self, view: ViewKind) -> Vec<Effect> {
        self.apply(Command::NavigateTo(view))
    }

    pub fn open_project_detail(&mut self, id: impl Into<String>) -> Vec<Effect> {
        self.apply(Command::OpenProjectDetail(id.into()))
    }

    pub fn toggle_mobile_menu(&mut self) -> Vec<Effect> {
        self.apply(Command::ToggleMobileMenu)
    }

    pub fn open_contact_modal(&mut self) -> Vec<Effect> {
        self.apply(Command::OpenContactModal)
    }

    pub fn close_contact_modal(&mut self) -> Vec<Effect> {
        self.apply(Command::CloseContactModal)
    }

    pub fn copy_field(&mut self, field: CopiedField, value: impl Into<String>) -> Vec<Effect> {
        self.apply(Command::CopyField(field, value.into()))
    }

    pub fn copied_expired(&mut self, ticket: CopyTicket) -> Vec<Effect> {
        self.apply(Command::CopiedExpired(ticket))
    }
}
