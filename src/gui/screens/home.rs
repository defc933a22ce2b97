use iced::{
    Element, Fill,
    widget::{button, column, container, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    catalog::Project,
    gui::{Message, screens::Screen},
    nav::Command,
    resolve::HomePayload,
};

fn project_card(project: &Project) -> Element<'_, Message> {
    button(
        column![
            container(text(format!("Thumbnail: {}", project.thumbnail_url)).size(12))
                .padding(12)
                .width(Fill)
                .style(bordered_box),
            text(project.title.as_str()).size(26),
            text(project.tagline.as_str()),
            text(project.tags.join(" · ")).size(12),
        ]
        .spacing(8),
    )
    .padding(20)
    .width(Fill)
    .style(button::secondary)
    .on_press(Message::Command(Command::OpenProjectDetail(project.id.clone())))
    .into()
}

impl<'a> Screen<'a> for HomePayload<'a> {
    fn view(self) -> Element<'a, Message> {
        let hero = self.hero;
        let mut cards = column![].spacing(16);
        for project in self.projects {
            cards = cards.push(project_card(project));
        }
        column![
            text(hero.eyebrow.to_uppercase()).size(14),
            row![
                text(hero.name.as_str()).size(48),
                text(hero.role.as_str()).size(48),
            ]
            .spacing(12),
            text(hero.blurb.as_str()).size(20),
            text("Selected Work").size(24),
            cards,
        ]
        .spacing(20)
        .into()
    }
}
