use std::fmt;

/// The three mutually exclusive top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewKind {
    #[default]
    Home,
    ProjectDetail,
    About,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Home, ViewKind::ProjectDetail, ViewKind::About];
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Home => write!(f, "home"),
            ViewKind::ProjectDetail => write!(f, "project"),
            ViewKind::About => write!(f, "about"),
        }
    }
}

/// Contact field that can be copied from the contact modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopiedField {
    Email,
    Phone,
}

impl fmt::Display for CopiedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopiedField::Email => write!(f, "email"),
            CopiedField::Phone => write!(f, "phone"),
        }
    }
}

/// Identifies one scheduled reset of the copied indicator.
/// Tickets grow monotonically, so only the newest one is ever current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CopyTicket(pub(super) u64);

impl CopyTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Copied {
    pub(super) field: CopiedField,
    pub(super) ticket: CopyTicket,
}

/// All mutable UI state. Only [`super::Navigator`] changes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub(super) view: ViewKind,
    pub(super) selected_project: Option<String>,
    pub(super) mobile_menu_open: bool,
    pub(super) contact_modal_open: bool,
    pub(super) copied: Option<Copied>,
}

impl NavigationState {
    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// Only set while the detail view is active.
    pub fn selected_project(&self) -> Option<&str> {
        self.selected_project.as_deref()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_contact_modal_open(&self) -> bool {
        self.contact_modal_open
    }

    pub fn copied_field(&self) -> Option<CopiedField> {
        self.copied.map(|copied| copied.field)
    }

    /// Ticket of the reset that will clear the current indicator.
    pub fn pending_reset(&self) -> Option<CopyTicket> {
        self.copied.map(|copied| copied.ticket)
    }

    /// Holds for every state the navigator can reach.
    pub fn is_consistent(&self) -> bool {
        self.selected_project.is_none() || self.view == ViewKind::ProjectDetail
    }
}
