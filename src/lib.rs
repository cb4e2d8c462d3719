pub mod app;
pub mod errors;
pub mod gauge;
pub mod handlers;
pub mod models;
pub mod sheet;
pub mod state;
pub mod ui;

pub use app::router;
pub use sheet::{resolve_sheet_url, SheetClient};
pub use state::AppState;
