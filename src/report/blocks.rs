//! Typed subset of the Slack Block Kit schema the watcher emits.

use serde::Serialize;

/// A text object. Headers and button labels must be `plain_text`;
/// everything else here uses `mrkdwn`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    PlainText {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emoji: Option<bool>,
    },
    Mrkdwn {
        text: String,
    },
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Text::PlainText {
            text: text.into(),
            emoji: None,
        }
    }

    pub fn plain_emoji(text: impl Into<String>) -> Self {
        Text::PlainText {
            text: text.into(),
            emoji: Some(true),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Text::Mrkdwn { text: text.into() }
    }
}

/// Accessory button attached to a section. A missing `url` renders the
/// button without a link, which is how unknown-kind records come out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    pub block_type: &'static str,
    pub text: Text,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub action_id: String,
}

impl Button {
    pub fn new(label: Text, value: impl Into<String>, url: Option<String>) -> Self {
        Self {
            block_type: "button",
            text: label,
            value: value.into(),
            url,
            action_id: "button-action".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: Text,
    },
    Context {
        elements: Vec<Text>,
    },
    Divider,
    Section {
        text: Text,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Button>,
    },
}

/// The full outbound webhook payload.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub blocks: Vec<Block>,
}
