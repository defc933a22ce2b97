//! Event-driven driver around the [`Navigator`].
//!
//! A `Session` owns the navigator, hands presenter effects to its
//! [`Presenter`] and runs the reset timer of the "copied" indicator as a
//! tokio task. The timer never touches the state itself: it sends its ticket
//! back over a channel and the owner applies `CopiedExpired` like any other
//! event, so events are always handled one at a time, in arrival order.

use std::time::Duration;

use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::AbortHandle,
    time::Instant,
};
use tracing::debug;

use crate::{
    catalog::Catalog,
    effects::{self, Presenter},
    nav::{Command, CopiedField, CopyTicket, Effect, NavigationState, Navigator},
    resolve::{Page, contact_value, resolve},
    timer::PendingReset,
};

pub struct Session<P: Presenter> {
    catalog: Catalog,
    navigator: Navigator,
    presenter: P,
    pending_reset: PendingReset<AbortHandle>,
    expired_tx: UnboundedSender<CopyTicket>,
    expired_rx: UnboundedReceiver<CopyTicket>,
}

impl<P: Presenter> Session<P> {
    pub fn new(catalog: Catalog, presenter: P) -> Self {
        Self::with_navigator(catalog, Navigator::new(), presenter)
    }

    pub fn with_navigator(catalog: Catalog, navigator: Navigator, presenter: P) -> Self {
        let (expired_tx, expired_rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            navigator,
            presenter,
            pending_reset: PendingReset::new(),
            expired_tx,
            expired_rx,
        }
    }

    pub fn state(&self) -> &NavigationState {
        self.navigator.state()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Current page, resolved from the live state.
    pub fn page(&self) -> Page<'_> {
        resolve(self.navigator.state(), &self.catalog)
    }

    /// Applies one command and carries out its effects.
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, command: Command) {
        for effect in self.navigator.apply(command) {
            if let Some(Effect::ScheduleCopiedReset { ticket, after }) =
                effects::perform(&mut self.presenter, effect)
            {
                self.schedule_reset(ticket, after);
            }
        }
    }

    /// Copies the contact value for `field`, taken from the catalog.
    pub fn copy_contact(&mut self, field: CopiedField) {
        let value = contact_value(&self.catalog.site().contact, field).to_string();
        self.dispatch(Command::CopyField(field, value));
    }

    /// Waits for the next reset timer to fire.
    pub async fn next_expiry(&mut self) -> Option<CopyTicket> {
        self.expired_rx.recv().await
    }

    /// Waits for the next reset timer and applies it.
    pub async fn expire_next(&mut self) {
        if let Some(ticket) = self.next_expiry().await {
            self.pending_reset.settle(ticket);
            self.dispatch(Command::CopiedExpired(ticket));
        }
    }

    pub fn pending_reset(&self) -> Option<CopyTicket> {
        self.pending_reset.ticket()
    }

    fn schedule_reset(&mut self, ticket: CopyTicket, after: Duration) {
        let tx = self.expired_tx.clone();
        let deadline = Instant::now() + after;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // The receiver only goes away with the session.
            let _ = tx.send(ticket);
        })
        .abort_handle();
        debug!(ticket = ticket.value(), "scheduled copied reset");
        self.pending_reset.replace(ticket, handle);
    }
}
