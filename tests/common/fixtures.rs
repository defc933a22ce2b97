use std::io::Write;

use portfolio::{Catalog, Presenter, Session};
use tempfile::NamedTempFile;

/// Presenter that records what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub scrolls: usize,
    pub clipboard: Vec<String>,
    pub fail_clipboard: bool,
}

impl RecordingPresenter {
    pub fn failing_clipboard() -> Self {
        Self {
            fail_clipboard: true,
            ..Self::default()
        }
    }
}

impl Presenter for RecordingPresenter {
    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }

    fn write_clipboard(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail_clipboard {
            anyhow::bail!("clipboard unavailable");
        }
        self.clipboard.push(text.to_string());
        Ok(())
    }
}

/// Session over the built-in catalog. Must be created inside a tokio runtime
/// before anything is copied.
pub fn test_session() -> Session<RecordingPresenter> {
    Session::new(Catalog::builtin(), RecordingPresenter::default())
}

pub const SAMPLE_CATALOG: &str = r#"
about = """
First paragraph
continues here.

Second paragraph.
"""

[site]
brand = "example.dev"

[site.hero]
eyebrow = "Work"
name = "alex."
role = "Engineer"
blurb = "Builds things."

[site.contact]
email = "alex@example.dev"
phone = "+44 20 7946 0000"

[[site.socials]]
label = "GitHub"
url = "https://github.com/alex"

[[projects]]
id = "alpha"
title = "Alpha"
tagline = "First project."
tags = ["Rust"]
thumbnail_url = "https://example.dev/a.png"
hero_url = "https://example.dev/a-hero.png"
description = "d"
role = "r"
duration = "1 week"
challenge = "c"
solution = "s"
interaction_notes = "i"
outcome = "o"

[[projects]]
id = "beta"
title = "Beta"
tagline = "Second project."
tags = []
thumbnail_url = "https://example.dev/b.png"
hero_url = "https://example.dev/b-hero.png"
video_url = "https://example.dev/b.mp4"
live_url = "https://beta.example.dev"
description = "d"
role = "r"
duration = "2 weeks"
challenge = "c"
solution = "s"
interaction_notes = "i"
outcome = "o"

[[skills]]
category = "Languages"
items = ["Rust", "Go"]
"#;

/// Writes `contents` to a temp `.toml` file that lives as long as the handle.
pub fn write_catalog_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp catalog file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp catalog file");
    file
}
