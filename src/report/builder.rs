//! One section block per normalized reservation.

use super::blocks::{Block, Button, Text};
use crate::normalize::NormalizedRecord;

/// Render a batch of records into section blocks, preserving order.
/// `None` in means `None` out: an absent batch renders nothing at all,
/// as opposed to an empty list of sections.
pub fn section_blocks(records: Option<&[NormalizedRecord]>) -> Option<Vec<Block>> {
    records.map(|batch| batch.iter().map(section_for).collect())
}

fn section_for(record: &NormalizedRecord) -> Block {
    let text = format!(
        "`End: {}` -- {} \n _ *ID* : {} _",
        record.expires_at, record.expires_relative, record.reservation_id
    );
    let label = format!("{} - {}", record.description, record.instance_type);
    Block::Section {
        text: Text::mrkdwn(text),
        accessory: Some(Button::new(
            Text::plain_emoji(label),
            record.reservation_id.clone(),
            record.kind.console_url().map(str::to_string),
        )),
    }
}
