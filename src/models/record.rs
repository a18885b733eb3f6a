use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::ticket::RawTicket;

/// One exported row: a ticket flattened together with its additional comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: u64,
    pub created_at: String,
    pub updated_at: String,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub requester_id: Option<u64>,
    pub assignee_id: Option<u64>,
    pub tags: Vec<String>,
    pub comments: String,
}

impl TicketRecord {
    pub fn from_ticket(ticket: RawTicket, comments: &[Comment]) -> Self {
        Self {
            id: ticket.id,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            subject: ticket.subject.unwrap_or_default(),
            description: ticket.description.unwrap_or_default(),
            status: ticket.status.unwrap_or_default(),
            priority: ticket.priority.unwrap_or_default(),
            requester_id: ticket.requester_id,
            assignee_id: ticket.assignee_id,
            tags: ticket.tags,
            comments: format_comments(comments),
        }
    }
}

/// Formats a ticket's comment thread for export. The first comment is skipped
/// because the API returns the ticket's opening description as the first entry
/// of the thread; if that assumption is wrong for a ticket, its first real
/// comment is lost.
pub fn format_comments(comments: &[Comment]) -> String {
    comments
        .iter()
        .skip(1)
        .map(|c| format!("Comment by {} at {}:\n{}", c.author_id, c.created_at, c.body))
        .collect::<Vec<_>>()
        .join("\n---\n")
}
