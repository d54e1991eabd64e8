use super::common::{Common, branch, nullable};
use super::fill_event;
use super::messages::{
    EDITED_REVIEW, REVIEWED_PR, USER_EDITED_REVIEW, USER_REVIEW_STATE, USER_SUBMITTED_REVIEW,
    USER_VERBED_PR_BRANCH, USER_VERBED_PR_TITLE, VERBED_PR, VIEW_PR, VIEW_REVIEW,
};
use crate::detail::{Action, EventDetail};
use crate::i18n::{Arg, Msg, Printer, TagKey};
use serde::Deserialize;

/// `pull_request` 事件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequestEvent {
    #[serde(flatten)]
    pub common: Common,
    #[serde(deserialize_with = "nullable")]
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequest {
    #[serde(deserialize_with = "nullable")]
    pub number: i64,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub draft: bool,
    #[serde(deserialize_with = "nullable")]
    pub head: BranchRef,
    #[serde(deserialize_with = "nullable")]
    pub base: BranchRef,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
    #[serde(deserialize_with = "nullable")]
    pub body: String,
    #[serde(deserialize_with = "nullable")]
    pub merged: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BranchRef {
    #[serde(rename = "ref", deserialize_with = "nullable")]
    pub git_ref: String,
}

impl PullRequestEvent {
    pub fn render(&self, p: &Printer<'_>) -> Option<EventDetail> {
        let pr = &self.pull_request;
        let action = self.common.action.as_str();

        match action {
            "opened" | "closed" => {}
            // "reviewed" arrives as pull_request_review
            _ => return None,
        }

        let username = self.common.sender.login.as_str();
        let head = branch(&pr.head.git_ref);
        let base = branch(&pr.base.git_ref);
        let verb = TagKey::new(action, "pr")
            .with_if(pr.draft, "draft")
            .with_if(pr.merged, "merged");

        let text = if !head.is_empty() && !base.is_empty() {
            p.sprintf(
                USER_VERBED_PR_BRANCH,
                &[
                    Arg::escaped_bold(username),
                    Arg::Lookup(verb.clone()),
                    Arg::int(pr.number),
                    Arg::escaped_bold(head),
                    Arg::escaped_bold(base),
                ],
            )
        } else {
            p.sprintf(
                USER_VERBED_PR_TITLE,
                &[
                    Arg::escaped_bold(username),
                    Arg::Lookup(verb.clone()),
                    Arg::int(pr.number),
                    Arg::escaped_bold(&pr.title),
                ],
            )
        };

        Some(fill_event(
            p,
            &self.common,
            EventDetail {
                summary: p.sprintf(
                    VERBED_PR,
                    &[
                        Arg::plain(username),
                        Arg::Lookup(verb.with("summary")),
                        Arg::int(pr.number),
                    ],
                ),
                text,
                action: vec![Action::new(
                    p.sprintf(VIEW_PR, &[Arg::int(pr.number)]),
                    pr.html_url.clone(),
                )],
                body: pr.body.clone(),
                ..Default::default()
            },
        ))
    }
}

/// `pull_request_review` 事件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequestReviewEvent {
    #[serde(flatten)]
    pub common: Common,
    #[serde(deserialize_with = "nullable")]
    pub pull_request: ReviewedPullRequest,
    #[serde(deserialize_with = "nullable")]
    pub review: Review,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewedPullRequest {
    #[serde(deserialize_with = "nullable")]
    pub number: i64,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde(deserialize_with = "nullable")]
    pub state: String,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
}

impl PullRequestReviewEvent {
    pub fn render(&self, p: &Printer<'_>) -> Option<EventDetail> {
        let (summary, text): (Msg, Msg) = match self.common.action.as_str() {
            "submitted" => (REVIEWED_PR, USER_SUBMITTED_REVIEW),
            "edited" => (EDITED_REVIEW, USER_EDITED_REVIEW),
            _ => return None,
        };

        let username = self.common.sender.login.as_str();
        let pr = &self.pull_request;
        let state = TagKey::new(&self.review.state.to_lowercase(), "review");

        Some(fill_event(
            p,
            &self.common,
            EventDetail {
                summary: p.sprintf(summary, &[Arg::plain(username), Arg::int(pr.number)]),
                text: p.sprintf(text, &[Arg::escaped_bold(username), Arg::int(pr.number)]),
                body: p.sprintf(
                    USER_REVIEW_STATE,
                    &[
                        Arg::escaped(username),
                        Arg::Lookup(state),
                        Arg::int(pr.number),
                        Arg::escaped(&pr.title),
                        Arg::plain(&pr.html_url),
                    ],
                ),
                action: vec![Action::new(p.sprint(VIEW_REVIEW), self.review.html_url.clone())],
                ..Default::default()
            },
        ))
    }
}
