#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from portfolio for tests
pub use portfolio::{
    COPIED_RESET, Catalog, CatalogError, Command, CopiedField, Effect, Lookup, NavigationState,
    Navigator, Page, Session, ViewKind, ViewPayload, resolve,
};
