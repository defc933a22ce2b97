//! Plain-text rendering of a resolved [`Page`].

use std::fmt::Write;

use crate::{
    catalog::{HeroMedia, Lookup, Project},
    nav::CopiedField,
    resolve::{AboutPayload, ContactModal, HomePayload, Page, ViewPayload},
};

const RULE: &str = "------------------------------------------------------------";

pub fn render_page(page: &Page<'_>, year: i32) -> String {
    let mut out = String::new();
    render_nav(&mut out, page);
    out.push('\n');
    match &page.content {
        ViewPayload::Home(home) => render_home(&mut out, home),
        ViewPayload::About(about) => render_about(&mut out, about),
        ViewPayload::ProjectDetail(Lookup::Found(project)) => render_project(&mut out, project),
        ViewPayload::ProjectDetail(Lookup::NotFound) => out.push_str("Project not found\n"),
    }
    if let Some(modal) = &page.contact_modal {
        out.push('\n');
        render_contact_modal(&mut out, modal);
    }
    let _ = writeln!(out, "\n{RULE}\n(c) {year} Portfolio.");
    out
}

fn render_nav(out: &mut String, page: &Page<'_>) {
    let _ = write!(out, "{}  ", page.brand);
    for link in &page.nav {
        if link.active {
            let _ = write!(out, " [{}]", link.label);
        } else {
            let _ = write!(out, "  {} ", link.label);
        }
    }
    out.push_str("  (Contact)\n");
    if page.mobile_menu_open {
        out.push_str("  > Work\n  > About\n  > Contact Me\n");
    }
    out.push_str(RULE);
    out.push('\n');
}

fn render_home(out: &mut String, home: &HomePayload<'_>) {
    let hero = home.hero;
    let _ = writeln!(out, "{}", hero.eyebrow.to_uppercase());
    let _ = writeln!(out, "{} {}", hero.name, hero.role);
    let _ = writeln!(out, "{}\n", hero.blurb);
    out.push_str("Selected Work\n");
    for project in home.projects {
        let _ = writeln!(out, "\n  [thumbnail {}]", project.thumbnail_url);
        let _ = writeln!(out, "  {} ({})", project.title, project.id);
        let _ = writeln!(out, "  {}", project.tagline);
        let _ = writeln!(out, "  {}", project.tags.join(" · "));
    }
}

fn render_about(out: &mut String, about: &AboutPayload<'_>) {
    out.push_str("About Me\n\n");
    for paragraph in &about.paragraphs {
        let _ = writeln!(out, "{paragraph}\n");
    }
    out.push_str("Skills & Expertise\n");
    for group in about.skills {
        let _ = writeln!(out, "  {}: {}", group.category.to_uppercase(), group.items.join(", "));
    }
    out.push_str("\nLet's Connect\n  (Contact Me)");
    for social in about.socials {
        let _ = write!(out, "  {} <{}>", social.label, social.url);
    }
    out.push('\n');
}

fn render_project(out: &mut String, project: &Project) {
    let _ = writeln!(out, "CASE STUDY\n{}\n{}\n", project.title, project.tagline);
    match project.hero_media() {
        HeroMedia::Video { src, poster } => {
            let _ = writeln!(out, "[video {src} poster {poster}]");
        }
        HeroMedia::Image { src } => {
            let _ = writeln!(out, "[image {src}]");
        }
    }
    let _ = writeln!(out, "Role: {}\nDuration: {}\n", project.role, project.duration);
    let sections = [
        ("Overview", &project.description),
        ("The Challenge", &project.challenge),
        ("The Solution", &project.solution),
        ("Interaction Design", &project.interaction_notes),
        ("Outcome", &project.outcome),
    ];
    for (heading, body) in sections {
        let _ = writeln!(out, "{heading}\n{body}\n");
    }
    if let Some(live) = &project.live_url {
        let _ = writeln!(out, "View live prototype: {live} [preview {}]", project.hero_url);
    }
}

fn render_contact_modal(out: &mut String, modal: &ContactModal<'_>) {
    out.push_str("+ Get in Touch\n");
    for (label, field, href) in [
        ("Email", CopiedField::Email, modal.contact.mailto_href()),
        ("Phone", CopiedField::Phone, modal.contact.tel_href()),
    ] {
        let marker = if modal.copied == Some(field) {
            "copied"
        } else {
            "copy"
        };
        let _ = writeln!(out, "| {label}: {} <{href}> [{marker}]", modal.value(field));
    }
    out.push_str("+ (close)\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::Catalog,
        nav::{Navigator, ViewKind},
        resolve::resolve,
    };

    #[test]
    fn test_detail_page_shows_project_and_footer() {
        let catalog = Catalog::builtin();
        let mut navigator = Navigator::new();
        navigator.open_project_detail("flavor-filter");
        let text = render_page(&resolve(navigator.state(), &catalog), 2025);
        assert!(text.contains("Flavor Filter"));
        let project = catalog.project("flavor-filter").found().expect("flavor-filter exists");
        assert!(text.contains(&format!(
            "View live prototype: https://new-filter.vercel.app/ [preview {}]",
            project.hero_url
        )));
        assert!(text.contains("(c) 2025 Portfolio."));
    }

    #[test]
    fn test_home_cards_carry_thumbnails() {
        let catalog = Catalog::builtin();
        let text = render_page(&resolve(Navigator::new().state(), &catalog), 2025);
        for project in catalog.projects() {
            let card = format!(
                "[thumbnail {}]\n  {} ({})",
                project.thumbnail_url, project.title, project.id
            );
            assert!(text.contains(&card), "missing card for {}", project.id);
        }
    }

    #[test]
    fn test_missing_project_renders_explicit_message() {
        let catalog = Catalog::builtin();
        let mut navigator = Navigator::new();
        navigator.open_project_detail("nope");
        let text = render_page(&resolve(navigator.state(), &catalog), 2025);
        assert!(text.contains("Project not found"));
    }

    #[test]
    fn test_modal_marks_copied_field() {
        let catalog = Catalog::builtin();
        let mut navigator = Navigator::new();
        navigator.navigate_to(ViewKind::About);
        navigator.open_contact_modal();
        navigator.copy_field(CopiedField::Phone, "+1 (555) 123-4567");
        let text = render_page(&resolve(navigator.state(), &catalog), 2025);
        assert!(text.contains("Phone: +1 (555) 123-4567 <tel:15551234567> [copied]"));
        assert!(text.contains("Email: hello@ramanadesign.tech <mailto:hello@ramanadesign.tech> [copy]"));
    }
}
