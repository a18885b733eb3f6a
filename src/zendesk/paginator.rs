use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::models::RawTicket;
use crate::zendesk::client::ZendeskClient;
use crate::zendesk::throttle::Throttle;

const PER_PAGE: u32 = 100;

pub struct TicketPaginator<'a> {
    client: &'a ZendeskClient,
    throttle: Throttle,
}

impl<'a> TicketPaginator<'a> {
    pub fn new(client: &'a ZendeskClient) -> Self {
        Self {
            client,
            throttle: Throttle::default(),
        }
    }

    pub fn with_throttle(client: &'a ZendeskClient, throttle: Throttle) -> Self {
        Self { client, throttle }
    }

    /// Follows the server-issued `next_page` cursor until it is null or
    /// `limit` tickets have accumulated. A failed page fetch aborts the whole
    /// run; the listing is load-bearing.
    pub async fn fetch_tickets(
        &self,
        limit: Option<usize>,
        start_time: Option<&str>,
    ) -> Result<Vec<RawTicket>> {
        let mut url = format!("{}/tickets.json?per_page={}", self.client.base_url(), PER_PAGE);
        if let Some(ts) = start_time {
            url.push_str(&format!("&start_time={}", ts));
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Fetching tickets: {pos}")
                .unwrap(),
        );

        let mut all_tickets = Vec::new();
        let mut next_page = Some(url);

        while let Some(page_url) = next_page {
            let page = self.client.fetch_ticket_page(&page_url).await?;

            tracing::debug!("Fetched page with {} tickets", page.tickets.len());
            pb.inc(page.tickets.len() as u64);
            all_tickets.extend(page.tickets);

            // Check the limit before advancing the cursor, so a limit reached
            // within this page never triggers another fetch.
            if let Some(limit) = limit {
                if all_tickets.len() >= limit {
                    all_tickets.truncate(limit);
                    break;
                }
            }

            next_page = page.next_page;

            // Respect rate limits
            if next_page.is_some() {
                self.throttle.pause().await;
            }
        }

        pb.finish_and_clear();
        Ok(all_tickets)
    }
}
