use chrono::Local;

use crate::error::Result;
use crate::models::TicketRecord;

pub const HEADERS: [&str; 11] = [
    "Ticket ID",
    "Created Date",
    "Last Updated",
    "Subject",
    "Description",
    "Status",
    "Priority",
    "Requester ID",
    "Assignee ID",
    "Tags",
    "Additional Comments",
];

/// Writes the records to `filename`, or to a timestamped default when none is
/// given. The header row is written even for an empty record set. Returns the
/// filename used.
pub fn write_csv(records: &[TicketRecord], filename: Option<&str>) -> Result<String> {
    let filename = match filename {
        Some(name) => name.to_string(),
        None => default_filename(),
    };

    let mut writer = csv::Writer::from_path(&filename)?;
    writer.write_record(HEADERS)?;

    for record in records {
        writer.write_record([
            record.id.to_string(),
            record.created_at.clone(),
            record.updated_at.clone(),
            record.subject.clone(),
            record.description.clone(),
            record.status.clone(),
            record.priority.clone(),
            id_cell(record.requester_id),
            id_cell(record.assignee_id),
            record.tags.join(", "),
            record.comments.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(filename)
}

fn default_filename() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("zendesk_tickets_{}.csv", timestamp)
}

fn id_cell(id: Option<u64>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}
