use crate::error::Result;
use crate::export::enricher::CommentEnricher;
use crate::export::writer::write_csv;
use crate::zendesk::client::ZendeskClient;
use crate::zendesk::paginator::TicketPaginator;

pub struct ExportPipeline {
    client: ZendeskClient,
}

impl ExportPipeline {
    pub fn new(client: ZendeskClient) -> Self {
        Self { client }
    }

    /// Runs the full export: paginate the ticket listing, enrich each ticket
    /// with its comment thread, write the CSV. Returns the filename used.
    /// A listing failure aborts before any file is written.
    pub async fn run(
        &self,
        limit: Option<usize>,
        start_time: Option<&str>,
        output: Option<&str>,
    ) -> Result<String> {
        tracing::info!("Fetching tickets...");
        let paginator = TicketPaginator::new(&self.client);
        let tickets = paginator.fetch_tickets(limit, start_time).await?;
        tracing::info!("Retrieved {} tickets", tickets.len());

        tracing::info!("Fetching comments for each ticket...");
        let enricher = CommentEnricher::new(&self.client);
        let records = enricher.enrich(tickets).await;

        let filename = write_csv(&records, output)?;
        Ok(filename)
    }
}
