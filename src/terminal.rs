//! Terminal presenter: prints the page to stdout and reads commands from stdin.

use std::io::Write;

use crossterm::{
    clipboard::CopyToClipboard,
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::{
    effects::Presenter,
    input::{HELP, Input},
    render::render_page,
    session::Session,
};

pub struct TerminalPresenter<W: Write> {
    out: W,
    /// Output is a terminal. Without one, screen clears and clipboard
    /// sequences are skipped so piped output stays plain text.
    interactive: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn scroll_to_top(&mut self) {
        if !self.interactive {
            return;
        }
        if let Err(e) = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!(error = %e, "failed to clear terminal");
        }
    }

    /// Writes through the terminal's OSC 52 clipboard sequence.
    fn write_clipboard(&mut self, text: &str) -> anyhow::Result<()> {
        if !self.interactive {
            anyhow::bail!("output is not a terminal");
        }
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))?;
        Ok(())
    }
}

fn redraw<W: Write>(session: &Session<TerminalPresenter<W>>, year: i32) -> String {
    render_page(&session.page(), year)
}

enum Event {
    Line(Option<String>),
    Expired,
}

/// Renders the current page, then handles stdin lines and timer expiries
/// until `quit` or end of input.
pub async fn run<W: Write>(
    session: &mut Session<TerminalPresenter<W>>,
    year: i32,
) -> anyhow::Result<()> {
    let page = redraw(&*session, year);
    session.presenter_mut().print(&page);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line?),
            _ = session.expire_next() => Event::Expired,
        };
        match event {
            Event::Line(None) => break,
            Event::Line(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Input>() {
                    Ok(Input::Quit) => break,
                    Ok(Input::Help) => {
                        session.presenter_mut().print(&format!("{HELP}\n"));
                        continue;
                    }
                    Ok(Input::Command(command)) => session.dispatch(command),
                    Ok(Input::Copy(field)) => {
                        if session.state().is_contact_modal_open() {
                            session.copy_contact(field);
                        } else {
                            session
                                .presenter_mut()
                                .print("open the contact modal first (`contact`)\n");
                            continue;
                        }
                    }
                    Err(e) => {
                        session.presenter_mut().print(&format!("{e}\n"));
                        continue;
                    }
                }
            }
            Event::Expired => {}
        }
        let page = redraw(&*session, year);
        session.presenter_mut().print(&page);
    }
    info!("terminal session ended");
    Ok(())
}

/// Prints the page for the starting state once and returns.
pub fn print_once<W: Write>(session: &mut Session<TerminalPresenter<W>>, year: i32) {
    let page = redraw(&*session, year);
    session.presenter_mut().print(&page);
}
