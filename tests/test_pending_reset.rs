mod common;

use std::{cell::Cell, rc::Rc};

use common::*;
use portfolio::{
    nav::CopyTicket,
    timer::{Cancel, PendingReset},
};

#[derive(Debug, Clone, Default)]
struct FakeTimer(Rc<Cell<bool>>);

impl FakeTimer {
    fn cancelled(&self) -> bool {
        self.0.get()
    }
}

impl Cancel for FakeTimer {
    fn cancel(&self) {
        self.0.set(true);
    }
}

fn ticket_of(effects: &[Effect]) -> CopyTicket {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleCopiedReset { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("copy schedules a reset")
}

#[test]
fn test_replacing_cancels_previous_timer() {
    let mut navigator = Navigator::new();
    let first = ticket_of(&navigator.copy_field(CopiedField::Email, "a"));
    let second = ticket_of(&navigator.copy_field(CopiedField::Phone, "b"));

    let mut pending = PendingReset::new();
    let first_timer = FakeTimer::default();
    let second_timer = FakeTimer::default();

    assert!(pending.replace(first, first_timer.clone()).is_none());
    let replaced = pending.replace(second, second_timer.clone());

    assert_eq!(replaced.map(|(ticket, _)| ticket), Some(first));
    assert!(first_timer.cancelled());
    assert!(!second_timer.cancelled());
    assert_eq!(pending.ticket(), Some(second));
}

#[test]
fn test_settle_ignores_stale_ticket() {
    let mut navigator = Navigator::new();
    let first = ticket_of(&navigator.copy_field(CopiedField::Email, "a"));
    let second = ticket_of(&navigator.copy_field(CopiedField::Email, "a"));

    let mut pending = PendingReset::new();
    pending.replace(second, FakeTimer::default());

    pending.settle(first);
    assert_eq!(pending.ticket(), Some(second));
    pending.settle(second);
    assert_eq!(pending.ticket(), None);
}

#[test]
fn test_dropping_cancels_live_timer() {
    let mut navigator = Navigator::new();
    let ticket = ticket_of(&navigator.copy_field(CopiedField::Phone, "b"));
    let timer = FakeTimer::default();

    let mut pending = PendingReset::new();
    pending.replace(ticket, timer.clone());
    drop(pending);

    assert!(timer.cancelled());
}
