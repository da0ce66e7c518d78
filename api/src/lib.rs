pub mod app;
pub mod config;
pub mod http;
pub mod telemetry;
pub use app::App;
pub use config::Config;
pub use http::messages::routes::message_routes;
pub use http::server::{ApiError, AppState};
pub use http::app_router;
