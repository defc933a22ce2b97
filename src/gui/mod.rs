mod app;
mod message;
mod screens;
mod widgets;

pub use app::{PortfolioApp, run};
pub use message::Message;
