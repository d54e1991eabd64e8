use super::common::{Common, branch, nullable, short_sha};
use super::fill_event;
use super::messages::{
    COMPARE_BASE_TO_BRANCH, FORCED, NEW_COMMIT_LINK, PUSH_SUMMARY, PUSH_TEXT, PUSHED,
    REPEAT_COMMIT_LINK, VIEW_PUSH,
};
use crate::detail::{Action, EventDetail, Fact};
use crate::i18n::{Arg, Printer, TagKey};
use serde::Deserialize;

const MAX_COMMIT_MESSAGE_CHARS: usize = 60;

/// `push` 事件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PushEvent {
    #[serde(flatten)]
    pub common: Common,
    #[serde(alias = "compare_url", deserialize_with = "nullable")]
    pub compare: String,
    #[serde(deserialize_with = "nullable")]
    pub commits: Vec<Commit>,
    #[serde(deserialize_with = "nullable")]
    pub forced: bool,
}

/// 提交
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Commit {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(deserialize_with = "nullable")]
    pub distinct: bool,
}

impl Commit {
    /// 截断到 60 个字符后的首行
    pub fn short_message(&self) -> String {
        let truncated: String = self.message.chars().take(MAX_COMMIT_MESSAGE_CHARS).collect();
        truncated.lines().next().unwrap_or_default().to_string()
    }

    fn fact(&self, p: &Printer<'_>) -> Fact {
        let message = self.short_message();
        let value = if self.distinct {
            p.sprintf(NEW_COMMIT_LINK, &[Arg::escaped_bold(&message), Arg::plain(&self.url)])
        } else {
            p.sprintf(REPEAT_COMMIT_LINK, &[Arg::escaped(&message), Arg::plain(&self.url)])
        };
        Fact::new(short_sha(&self.id), value)
    }
}

impl PushEvent {
    pub fn render(&self, p: &Printer<'_>) -> Option<EventDetail> {
        if self.commits.is_empty() {
            return None;
        }

        let head = branch(&self.common.git_ref);
        let pusher = self.common.sender.login.as_str();
        let push_type = TagKey::parse(if self.forced { FORCED } else { PUSHED });
        let count = i64::try_from(self.commits.len()).unwrap_or(i64::MAX);

        let summary = p.sprintf(
            PUSH_SUMMARY,
            &[
                Arg::plain(pusher),
                Arg::Lookup(push_type.clone()),
                Arg::plain(head),
            ],
        );
        let text = p.sprintf(
            PUSH_TEXT,
            &[
                Arg::escaped_bold(pusher),
                Arg::Lookup(push_type),
                Arg::int(count),
                Arg::escaped_bold(head),
            ],
        );

        let fact: Vec<Fact> = self.commits.iter().map(|commit| commit.fact(p)).collect();

        let mut action = Vec::new();
        if fact.len() > 1 {
            // '^' separates parent references in compare URLs
            action.push(Action::new(p.sprint(VIEW_PUSH), self.compare.replace('^', "%5E")));
        }
        let repository = &self.common.repository;
        let base = repository.default_branch.as_str();
        if !base.is_empty() && head != base {
            action.push(Action::new(
                p.sprintf(COMPARE_BASE_TO_BRANCH, &[Arg::plain(base), Arg::plain(head)]),
                format!("{}/compare/{}", repository.html_url, head),
            ));
        }

        Some(fill_event(
            p,
            &self.common,
            EventDetail {
                summary,
                text,
                fact,
                action,
                ..Default::default()
            },
        ))
    }
}
