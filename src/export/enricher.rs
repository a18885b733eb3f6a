use indicatif::{ProgressBar, ProgressStyle};

use crate::models::{RawTicket, TicketRecord};
use crate::zendesk::client::ZendeskClient;
use crate::zendesk::throttle::Throttle;

pub struct CommentEnricher<'a> {
    client: &'a ZendeskClient,
    throttle: Throttle,
}

impl<'a> CommentEnricher<'a> {
    pub fn new(client: &'a ZendeskClient) -> Self {
        Self {
            client,
            throttle: Throttle::default(),
        }
    }

    pub fn with_throttle(client: &'a ZendeskClient, throttle: Throttle) -> Self {
        Self { client, throttle }
    }

    /// Folds each ticket and its comment thread into one export record,
    /// preserving input order. A failed comment fetch is not fatal: the
    /// ticket is exported with an empty comments field.
    pub async fn enrich(&self, tickets: Vec<RawTicket>) -> Vec<TicketRecord> {
        let total = tickets.len();

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tickets")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut records = Vec::with_capacity(total);

        for (i, ticket) in tickets.into_iter().enumerate() {
            let comments = match self.client.fetch_comments(ticket.id).await {
                Ok(comments) => comments,
                Err(err) => {
                    tracing::warn!("Failed to get comments for ticket {}: {}", ticket.id, err);
                    Vec::new()
                }
            };

            records.push(TicketRecord::from_ticket(ticket, &comments));
            pb.inc(1);

            // Respect rate limits
            if i + 1 < total {
                self.throttle.pause().await;
            }
        }

        pb.finish_and_clear();
        records
    }
}
