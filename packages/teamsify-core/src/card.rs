//! Teams MessageCard 报文

use crate::detail::EventDetail;
use serde::{Deserialize, Serialize};

pub const CARD_TYPE: &str = "MessageCard";
pub const CARD_CONTEXT: &str = "https://schema.org/extensions";
pub const OPEN_URI: &str = "OpenUri";
pub const DEFAULT_OS: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCard {
    #[serde(rename = "@type")]
    pub card_type: String,
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub theme_color: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub potential_action: Vec<PotentialAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "activityImage", default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(rename = "activityTitle", default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(rename = "activitySubtitle", default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(rename = "activityText", default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(rename = "text", default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<SectionFact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFact {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialAction {
    #[serde(rename = "@type")]
    pub action_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub os: String,
    pub uri: String,
}

impl From<&EventDetail> for MessageCard {
    fn from(detail: &EventDetail) -> Self {
        let section = Section {
            image: detail.avatar.clone(),
            title: detail.repository.clone(),
            subtitle: detail.username.clone(),
            text: detail.text.clone(),
            body: detail.body.clone(),
            facts: detail
                .fact
                .iter()
                .map(|fact| SectionFact {
                    name: fact.name.clone(),
                    value: fact.value.clone(),
                })
                .collect(),
        };

        let potential_action = detail
            .action
            .iter()
            .map(|action| PotentialAction {
                action_type: OPEN_URI.to_string(),
                name: action.name.clone(),
                targets: vec![Target {
                    os: DEFAULT_OS.to_string(),
                    uri: action.url.clone(),
                }],
            })
            .collect();

        MessageCard {
            card_type: CARD_TYPE.to_string(),
            context: CARD_CONTEXT.to_string(),
            summary: detail.summary.clone(),
            theme_color: detail.theme_color.clone(),
            title: detail.title.clone(),
            sections: vec![section],
            potential_action,
        }
    }
}

/// 无内容时不生成卡片
pub fn build(detail: Option<&EventDetail>) -> Option<MessageCard> {
    detail.map(MessageCard::from)
}
