//! Discord embed documents produced by the notification composers

mod format;
mod player;
mod ranking;

pub use format::{capitalize, group_digits, humanize};
pub use player::build_player_detail;
pub use ranking::build_ranking_summary;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Accent color shared by every embed the bot sends
pub const EMBED_COLOR: u32 = 0x03b2f8;

/// Display name the bot posts under
pub const BOT_NAME: &str = "Osrs Activity Bot";

/// One notification document, serialized as a Discord embed object.
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

impl Embed {
    /// Starts an embed with the shared accent color and the current time
    /// as its timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            color: EMBED_COLOR,
            fields: Vec::new(),
            author: None,
            footer: None,
            timestamp: Utc::now(),
        }
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = Some(text.into());
    }

    pub fn set_author(&mut self, name: impl Into<String>, url: Option<String>) {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            url,
        });
    }

    pub fn set_footer(&mut self, text: impl Into<String>) {
        self.footer = Some(EmbedFooter { text: text.into() });
    }

    /// Appends a non-inline field.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
    }
}
