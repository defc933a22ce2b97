pub mod catalog;
pub mod effects;
pub mod input;
pub mod nav;
pub mod render;
pub mod resolve;
pub mod session;
pub mod terminal;
pub mod timer;

pub use catalog::{Catalog, CatalogError, Lookup, Project, SkillGroup};
pub use effects::Presenter;
pub use nav::{Command, CopiedField, Effect, NavigationState, Navigator, ViewKind, COPIED_RESET};
pub use resolve::{Page, ViewPayload, resolve};
pub use session::Session;

#[cfg(feature = "gui")]
pub mod gui;
