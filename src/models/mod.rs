pub mod comment;
pub mod record;
pub mod ticket;

pub use comment::*;
pub use record::*;
pub use ticket::*;
