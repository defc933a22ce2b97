use tracing::debug;

use crate::nav::Effect;

/// The rendering side of the application. It carries out the effects the
/// navigator asks for.
pub trait Presenter {
    fn scroll_to_top(&mut self);
    fn write_clipboard(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Runs the presenter-side part of `effect`.
///
/// Returns the effect back when it is not the presenter's to perform
/// (scheduling is owned by whoever owns the timer).
pub fn perform<P: Presenter + ?Sized>(presenter: &mut P, effect: Effect) -> Option<Effect> {
    match effect {
        Effect::ScrollToTop => {
            presenter.scroll_to_top();
            None
        }
        Effect::WriteClipboard(text) => {
            // The copied indicator is shown regardless of the outcome.
            if let Err(e) = presenter.write_clipboard(&text) {
                debug!(error = %e, "clipboard write failed");
            }
            None
        }
        other @ Effect::ScheduleCopiedReset { .. } => Some(other),
    }
}
