use std::time::Duration;

use super::state::{CopiedField, CopyTicket, ViewKind};

/// Transition requests, processed one at a time by [`super::Navigator::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NavigateTo(ViewKind),
    /// The id is not checked against the catalog here.
    OpenProjectDetail(String),
    ToggleMobileMenu,
    OpenContactModal,
    CloseContactModal,
    CopyField(CopiedField, String),
    /// Sent by the reset timer when it fires.
    CopiedExpired(CopyTicket),
}

/// Side effects the presentation layer has to carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScrollToTop,
    /// Best effort. The outcome never reaches the navigator.
    WriteClipboard(String),
    /// Replaces any reset that is still pending.
    ScheduleCopiedReset { ticket: CopyTicket, after: Duration },
}
