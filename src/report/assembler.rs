//! Assembles the final block document: fixed preamble, per-kind sections
//! in render order, trailing divider.

use chrono::NaiveDate;

use super::blocks::{Block, Report, Text};
use crate::resource::ResourceKind;

/// Per-kind section slots, keyed by render order. Absent slots are skipped
/// at assembly time.
#[derive(Debug, Default)]
pub struct SectionSet {
    slots: [Option<Vec<Block>>; ResourceKind::RENDER_ORDER.len()],
}

impl SectionSet {
    pub fn insert(&mut self, kind: ResourceKind, blocks: Vec<Block>) {
        if let Some(index) = ResourceKind::RENDER_ORDER.iter().position(|k| *k == kind) {
            self.slots[index] = Some(blocks);
        }
    }
}

/// Build the complete report. Always emits the four preamble blocks and
/// the trailing divider, even when every slot is empty.
pub fn assemble(date: NaiveDate, sections: SectionSet) -> Report {
    let mut blocks = vec![
        Block::Header {
            text: Text::plain(":newspaper:  RI WATCHER  :newspaper:"),
        },
        Block::Context {
            elements: vec![Text::mrkdwn(format!(
                "*As of {}*  |  Active reserved-capacity summary",
                date.format("%Y-%m-%d")
            ))],
        },
        Block::Divider,
        Block::Section {
            text: Text::mrkdwn(":calendar: |   *ACTIVE RI LIST*  | :calendar: "),
            accessory: None,
        },
    ];

    for slot in sections.slots {
        if let Some(section_blocks) = slot {
            blocks.extend(section_blocks);
        }
    }

    blocks.push(Block::Divider);
    Report { blocks }
}
