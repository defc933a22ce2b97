//! Maps navigation state plus catalog to what a presenter has to draw.
//!
//! Nothing here is cached: callers resolve again after every transition.

use crate::{
    catalog::{Catalog, ContactInfo, Hero, Lookup, Project, SkillGroup, SocialLink},
    nav::{CopiedField, NavigationState, ViewKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: ViewKind,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomePayload<'a> {
    pub hero: &'a Hero,
    pub projects: &'a [Project],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutPayload<'a> {
    pub paragraphs: Vec<String>,
    pub skills: &'a [SkillGroup],
    pub socials: &'a [SocialLink],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPayload<'a> {
    Home(HomePayload<'a>),
    About(AboutPayload<'a>),
    ProjectDetail(Lookup<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactModal<'a> {
    pub contact: &'a ContactInfo,
    pub copied: Option<CopiedField>,
}

impl<'a> ContactModal<'a> {
    pub fn value(&self, field: CopiedField) -> &'a str {
        contact_value(self.contact, field)
    }
}

pub fn contact_value(contact: &ContactInfo, field: CopiedField) -> &str {
    match field {
        CopiedField::Email => &contact.email,
        CopiedField::Phone => &contact.phone,
    }
}

/// Everything needed to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub view: ViewKind,
    pub brand: &'a str,
    pub nav: [NavLink; 2],
    pub mobile_menu_open: bool,
    /// Present only while the modal is open.
    pub contact_modal: Option<ContactModal<'a>>,
    pub content: ViewPayload<'a>,
}

pub fn resolve<'a>(state: &NavigationState, catalog: &'a Catalog) -> Page<'a> {
    let site = catalog.site();
    Page {
        view: state.view(),
        brand: &site.brand,
        nav: nav_links(state),
        mobile_menu_open: state.is_mobile_menu_open(),
        contact_modal: state.is_contact_modal_open().then(|| ContactModal {
            contact: &site.contact,
            copied: state.copied_field(),
        }),
        content: resolve_view(state, catalog),
    }
}

pub fn resolve_view<'a>(state: &NavigationState, catalog: &'a Catalog) -> ViewPayload<'a> {
    match state.view() {
        ViewKind::Home => ViewPayload::Home(HomePayload {
            hero: &catalog.site().hero,
            projects: catalog.projects(),
        }),
        ViewKind::About => ViewPayload::About(AboutPayload {
            paragraphs: catalog.about_paragraphs(),
            skills: catalog.skills(),
            socials: &catalog.site().socials,
        }),
        ViewKind::ProjectDetail => ViewPayload::ProjectDetail(match state.selected_project() {
            Some(id) => catalog.project(id),
            None => Lookup::NotFound,
        }),
    }
}

fn nav_links(state: &NavigationState) -> [NavLink; 2] {
    [
        NavLink {
            label: "Work",
            target: ViewKind::Home,
            active: state.view() == ViewKind::Home && state.selected_project().is_none(),
        },
        NavLink {
            label: "About",
            target: ViewKind::About,
            active: state.view() == ViewKind::About,
        },
    ]
}
