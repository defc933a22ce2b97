use iced::{
    Element,
    widget::{button, column, container, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    catalog::{HeroMedia, Lookup, Project},
    gui::{Message, screens::Screen},
    nav::{Command, ViewKind},
};

fn section<'a>(heading: &'a str, body: &'a str) -> Element<'a, Message> {
    column![text(heading).size(22), text(body).size(17)]
        .spacing(8)
        .into()
}

fn case_study(project: &Project) -> Element<'_, Message> {
    let media = match project.hero_media() {
        HeroMedia::Video { src, poster } => format!("Video: {src}\nPoster: {poster}"),
        HeroMedia::Image { src } => format!("Image: {src}"),
    };
    let mut content = column![
        button("← Back")
            .style(button::secondary)
            .on_press(Message::Command(Command::NavigateTo(ViewKind::Home))),
        text("CASE STUDY").size(12),
        text(project.title.as_str()).size(44),
        text(project.tagline.as_str()).size(22),
        container(text(media).size(12)).padding(16).style(bordered_box),
        container(
            row![
                column![text("ROLE").size(12), text(project.role.as_str())].spacing(4),
                column![text("DURATION").size(12), text(project.duration.as_str())].spacing(4),
            ]
            .spacing(48)
        )
        .padding(24)
        .style(bordered_box),
        section("Overview", &project.description),
        section("The Challenge", &project.challenge),
        section("The Solution", &project.solution),
        section("Interaction Design", &project.interaction_notes),
        section("Outcome", &project.outcome),
    ]
    .spacing(24);
    if let Some(live) = &project.live_url {
        content = content.push(
            column![
                container(text(format!("Preview: {}", project.hero_url)).size(12))
                    .padding(12)
                    .style(bordered_box),
                text(format!("View live prototype: {live}")),
            ]
            .spacing(8),
        );
    }
    content.into()
}

impl<'a> Screen<'a> for Lookup<'a> {
    fn view(self) -> Element<'a, Message> {
        match self {
            Lookup::Found(project) => case_study(project),
            Lookup::NotFound => container(text("Project not found").size(20))
                .padding(48)
                .center_x(iced::Fill)
                .into(),
        }
    }
}
