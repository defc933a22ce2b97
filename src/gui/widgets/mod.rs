use iced::{
    Alignment::Center,
    Color, Element, Fill, Theme,
    widget::{
        Id, button, center, column, container, mouse_area, opaque, row, scrollable, stack, text,
    },
};
use iced_widget::container::bordered_box;

use crate::{
    gui::{Message, screens::Screen},
    nav::{Command, CopiedField, ViewKind},
    resolve::{ContactModal, NavLink, Page},
};

pub fn content_id() -> Id {
    Id::new("content")
}

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

fn link_style(active: bool) -> ButtonStyle {
    if active { button::primary } else { button::text }
}

fn nav_bar<'a>(brand: &'a str, links: [NavLink; 2], menu_open: bool) -> Element<'a, Message> {
    let mut bar = row![
        button(text(brand).size(20))
            .style(button::text)
            .on_press(Message::Command(Command::NavigateTo(ViewKind::Home))),
        container(text("")).width(Fill),
    ]
    .spacing(16)
    .padding(12)
    .align_y(Center);
    for link in links {
        bar = bar.push(
            button(link.label)
                .style(link_style(link.active))
                .on_press(Message::Command(Command::NavigateTo(link.target))),
        );
    }
    bar = bar
        .push(
            button("Contact")
                .style(button::primary)
                .on_press(Message::Command(Command::OpenContactModal)),
        )
        .push(
            button(if menu_open { "Close" } else { "Menu" })
                .style(button::secondary)
                .on_press(Message::Command(Command::ToggleMobileMenu)),
        );

    if !menu_open {
        return container(bar).width(Fill).into();
    }
    let mut menu = column![].spacing(4).padding(12);
    for link in links {
        menu = menu.push(
            button(link.label)
                .width(Fill)
                .style(button::text)
                .on_press(Message::Command(Command::NavigateTo(link.target))),
        );
    }
    menu = menu.push(
        button("Contact Me")
            .width(Fill)
            .style(button::text)
            .on_press(Message::Command(Command::OpenContactModal)),
    );
    column![bar, container(menu).width(Fill).style(bordered_box)]
        .width(Fill)
        .into()
}

fn contact_field<'a>(modal: ContactModal<'a>, label: &'a str, field: CopiedField) -> Element<'a, Message> {
    let copied = modal.copied == Some(field);
    let style: ButtonStyle = if copied { button::success } else { button::text };
    row![
        container(column![text(label).size(12), text(modal.value(field))].spacing(2)).width(Fill),
        button(if copied { "Copied" } else { "Copy" })
            .style(style)
            .on_press(Message::Copy(field)),
    ]
    .spacing(16)
    .align_y(Center)
    .into()
}

fn contact_card<'a>(modal: ContactModal<'a>) -> Element<'a, Message> {
    container(
        column![
            text("Get in Touch").size(24),
            text("Feel free to reach out for collaborations or just a friendly hello."),
            contact_field(modal, "EMAIL", CopiedField::Email),
            contact_field(modal, "PHONE", CopiedField::Phone),
            button("Close")
                .style(button::text)
                .on_press(Message::Command(Command::CloseContactModal)),
        ]
        .spacing(16)
        .align_x(Center),
    )
    .padding(32)
    .max_width(440)
    .style(bordered_box)
    .into()
}

/// Puts `content` over `base` with a dimmed backdrop. Clicking the backdrop closes it.
fn modal<'a>(base: Element<'a, Message>, content: Element<'a, Message>) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.4,
                        ..Color::BLACK
                    }
                    .into()
                ),
                ..container::Style::default()
            }))
            .on_press(Message::Command(Command::CloseContactModal))
        )
    ]
    .into()
}

fn footer<'a>(year: i32) -> Element<'a, Message> {
    container(text(format!("© {} Portfolio.", year)).size(12))
        .padding(24)
        .width(Fill)
        .into()
}

/// Frame shared by every view: navigation bar, scrolling content, footer, and
/// the contact modal when it is open.
pub fn layout<'a>(page: Page<'a>, year: i32) -> Element<'a, Message> {
    let body: Element<'a, Message> = column![
        nav_bar(page.brand, page.nav, page.mobile_menu_open),
        scrollable(column![page.content.view(), footer(year)].spacing(24).padding(24))
            .id(content_id())
            .height(Fill),
    ]
    .into();

    match page.contact_modal {
        Some(contact) => modal(body, contact_card(contact)),
        None => body,
    }
}
