//! Bookkeeping for the single outstanding "copied" reset timer.

use tracing::debug;

use crate::nav::CopyTicket;

/// A running timer that can be stopped.
pub trait Cancel {
    fn cancel(&self);
}

impl Cancel for tokio::task::AbortHandle {
    fn cancel(&self) {
        self.abort();
    }
}

#[cfg(feature = "gui")]
impl Cancel for iced::task::Handle {
    fn cancel(&self) {
        self.abort();
    }
}

/// Holds at most one reset timer. Installing a new one cancels the old one.
#[derive(Debug)]
pub struct PendingReset<H: Cancel> {
    current: Option<(CopyTicket, H)>,
}

impl<H: Cancel> Default for PendingReset<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: Cancel> PendingReset<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the timer for `ticket` and returns the one it replaced,
    /// already cancelled.
    pub fn replace(&mut self, ticket: CopyTicket, handle: H) -> Option<(CopyTicket, H)> {
        let previous = self.current.replace((ticket, handle));
        if let Some((old, handle)) = &previous {
            debug!(ticket = old.value(), "cancelling copied reset");
            handle.cancel();
        }
        previous
    }

    /// Forgets the timer for `ticket` once it has fired. Other tickets are left alone.
    pub fn settle(&mut self, ticket: CopyTicket) {
        if self.ticket() == Some(ticket) {
            self.current = None;
        }
    }

    pub fn cancel(&mut self) {
        if let Some((_, handle)) = self.current.take() {
            handle.cancel();
        }
    }

    pub fn ticket(&self) -> Option<CopyTicket> {
        self.current.as_ref().map(|(ticket, _)| *ticket)
    }

    pub fn handle(&self) -> Option<&H> {
        self.current.as_ref().map(|(_, handle)| handle)
    }
}

impl<H: Cancel> Drop for PendingReset<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
