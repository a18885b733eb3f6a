pub mod client;
pub mod paginator;
pub mod throttle;

pub use client::ZendeskClient;
pub use paginator::TicketPaginator;
pub use throttle::Throttle;
