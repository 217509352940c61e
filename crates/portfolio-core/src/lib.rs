pub mod clock;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod form;
pub mod hover;
pub mod menu;
pub mod nav;
pub mod progress;
pub mod reveal;
pub mod skills;
pub mod state;

pub use config::UiConfig;
pub use constants::*;
pub use error::CoreError;
pub use state::PortfolioState;
