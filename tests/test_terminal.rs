mod common;

use common::*;
use portfolio::{Presenter, terminal::TerminalPresenter};

#[test]
fn test_piped_output_gets_no_escape_sequences() {
    let mut presenter = TerminalPresenter::new(Vec::new(), false);
    presenter.scroll_to_top();
    assert!(presenter.write_clipboard("hello@ramanadesign.tech").is_err());
    presenter.print("page\n");

    let written = presenter.into_inner();
    assert_eq!(written, b"page\n");
    assert!(!written.contains(&0x1b));
}

#[test]
fn test_terminal_output_gets_clipboard_sequence() -> anyhow::Result<()> {
    let mut presenter = TerminalPresenter::new(Vec::new(), true);
    presenter.write_clipboard("hello@ramanadesign.tech")?;

    let written = String::from_utf8(presenter.into_inner())?;
    assert!(written.starts_with("\x1b]52;"));
    // base64 of the copied address
    assert!(written.contains("aGVsbG9AcmFtYW5hZGVzaWduLnRlY2g="));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_piped_session_keeps_page_plain_after_copy() -> anyhow::Result<()> {
    let mut session = Session::new(
        Catalog::builtin(),
        TerminalPresenter::new(Vec::new(), false),
    );
    session.dispatch(Command::OpenContactModal);
    session.copy_contact(CopiedField::Email);

    assert_eq!(session.state().copied_field(), Some(CopiedField::Email));
    assert!(!session.presenter().get_ref().contains(&0x1b));
    Ok(())
}
