pub mod enricher;
pub mod pipeline;
pub mod writer;

pub use enricher::CommentEnricher;
pub use pipeline::ExportPipeline;
pub use writer::write_csv;
