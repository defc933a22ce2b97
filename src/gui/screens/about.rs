use iced::{
    Element,
    widget::{button, column, container, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    gui::{Message, screens::Screen},
    nav::Command,
    resolve::AboutPayload,
};

impl<'a> Screen<'a> for AboutPayload<'a> {
    fn view(self) -> Element<'a, Message> {
        let mut content = column![text("About Me").size(36)].spacing(16);
        for paragraph in self.paragraphs {
            content = content.push(text(paragraph).size(18));
        }

        content = content.push(text("Skills & Expertise").size(24));
        for group in self.skills {
            content = content.push(
                column![
                    text(group.category.to_uppercase()).size(14),
                    text(group.items.join("  ·  ")),
                ]
                .spacing(6),
            );
        }

        let mut connect = row![
            button("Contact Me")
                .style(button::primary)
                .on_press(Message::Command(Command::OpenContactModal)),
        ]
        .spacing(16);
        for social in self.socials {
            connect = connect.push(text(format!("{}: {}", social.label, social.url)));
        }
        content
            .push(
                container(
                    column![text("Let's Connect").size(24), connect].spacing(16),
                )
                .padding(24)
                .style(bordered_box),
            )
            .into()
    }
}
