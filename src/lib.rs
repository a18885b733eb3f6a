pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod prompt;
pub mod zendesk;

pub use config::Config;
pub use error::{Error, Result};
pub use export::{CommentEnricher, ExportPipeline};
pub use zendesk::{Throttle, TicketPaginator, ZendeskClient};
