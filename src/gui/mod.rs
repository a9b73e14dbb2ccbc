mod app;
mod media;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::{PAGE_SCROLLABLE, PortfolioApp, run};
pub use message::{Message, Navigation};
pub use state::AppState;
