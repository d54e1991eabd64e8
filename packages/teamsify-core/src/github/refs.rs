use super::common::{Common, branch, nullable, tag};
use super::fill_event;
use super::messages::{
    CREATE_TAG, DELETE_BRANCH, DELETE_TAG, USER_CREATED_TAG, USER_DELETED_BRANCH, USER_DELETED_TAG,
};
use crate::detail::{Action, EventDetail};
use crate::i18n::{Arg, Printer};
use serde::Deserialize;

/// `create` 事件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEvent {
    #[serde(flatten)]
    pub common: Common,
    #[serde(deserialize_with = "nullable")]
    pub ref_type: String,
}

impl CreateEvent {
    pub fn render(&self, p: &Printer<'_>) -> Option<EventDetail> {
        // branches only matter once something is pushed to them
        if self.ref_type != "tag" {
            return None;
        }

        let tagger = self.common.sender.login.as_str();
        let tag_name = tag(&self.common.git_ref);
        Some(fill_event(
            p,
            &self.common,
            EventDetail {
                summary: p.sprintf(CREATE_TAG, &[Arg::plain(tagger), Arg::plain(tag_name)]),
                text: p.sprintf(
                    USER_CREATED_TAG,
                    &[Arg::escaped_bold(tagger), Arg::escaped_bold(tag_name)],
                ),
                action: vec![Action::link(format!(
                    "{}/tree/{}",
                    self.common.repository.html_url, self.common.git_ref
                ))],
                ..Default::default()
            },
        ))
    }
}

/// `delete` 事件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteEvent {
    #[serde(flatten)]
    pub common: Common,
    #[serde(deserialize_with = "nullable")]
    pub ref_type: String,
}

impl DeleteEvent {
    pub fn render(&self, p: &Printer<'_>) -> Option<EventDetail> {
        let username = self.common.sender.login.as_str();
        let (summary, text) = match self.ref_type.as_str() {
            "branch" => (DELETE_BRANCH, USER_DELETED_BRANCH),
            "tag" => (DELETE_TAG, USER_DELETED_TAG),
            _ => return None,
        };
        let name = match self.ref_type.as_str() {
            "tag" => tag(&self.common.git_ref),
            _ => branch(&self.common.git_ref),
        };

        Some(fill_event(
            p,
            &self.common,
            EventDetail {
                summary: p.sprintf(summary, &[Arg::plain(username), Arg::plain(name)]),
                text: p.sprintf(text, &[Arg::escaped_bold(username), Arg::escaped_bold(name)]),
                ..Default::default()
            },
        ))
    }
}
