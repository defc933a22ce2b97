pub mod about;
pub mod home;
pub mod project_detail;

use iced::Element;

use crate::{gui::Message, resolve::ViewPayload};

/// A resolved payload that knows how to draw itself.
pub trait Screen<'a> {
    fn view(self) -> Element<'a, Message>;
}

impl<'a> Screen<'a> for ViewPayload<'a> {
    fn view(self) -> Element<'a, Message> {
        match self {
            ViewPayload::Home(payload) => payload.view(),
            ViewPayload::About(payload) => payload.view(),
            ViewPayload::ProjectDetail(lookup) => lookup.view(),
        }
    }
}
