//! GitHub webhook 解码与渲染

mod check_run;
mod common;
mod job_status;
mod messages;
mod pull_request;
mod push;
mod refs;

pub use check_run::CheckRunEvent;
pub use common::Common;
pub use job_status::JobStatusEvent;
pub use messages::standard_catalog;
pub use pull_request::{PullRequestEvent, PullRequestReviewEvent};
pub use push::PushEvent;
pub use refs::{CreateEvent, DeleteEvent};

use crate::detail::{DEFAULT_THEME_COLOR, EventDetail};
use crate::error::{MapError, MapResult};
use crate::i18n::Printer;
use messages::VIEW_ON_GITHUB;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// 事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CheckRun,
    Create,
    Delete,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    Push,
    /// 由运行环境合成，不对应任何 webhook
    JobStatus,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::CheckRun => "check_run",
            EventKind::Create => "create",
            EventKind::Delete => "delete",
            EventKind::PullRequest => "pull_request",
            EventKind::PullRequestReview => "pull_request_review",
            EventKind::PullRequestReviewComment => "pull_request_review_comment",
            EventKind::Push => "push",
            EventKind::JobStatus => "_job_status",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "check_run" => EventKind::CheckRun,
            "create" => EventKind::Create,
            "delete" => EventKind::Delete,
            "pull_request" => EventKind::PullRequest,
            "pull_request_review" => EventKind::PullRequestReview,
            "pull_request_review_comment" => EventKind::PullRequestReviewComment,
            "push" => EventKind::Push,
            "_job_status" => EventKind::JobStatus,
            other => return Err(MapError::UnsupportedEvent(other.to_string())),
        })
    }
}

/// 按事件类型解码后的 webhook
#[derive(Debug, Clone)]
pub enum Envelope {
    CheckRun(CheckRunEvent),
    Create(CreateEvent),
    Delete(DeleteEvent),
    PullRequest(PullRequestEvent),
    PullRequestReview(PullRequestReviewEvent),
    /// 识别但不通知
    PullRequestReviewComment,
    Push(PushEvent),
    JobStatus(JobStatusEvent),
}

fn decode<T: DeserializeOwned>(event: EventKind, payload: &[u8]) -> MapResult<T> {
    serde_json::from_slice(payload).map_err(|source| MapError::Decode { event, source })
}

impl Envelope {
    pub fn decode(kind: EventKind, payload: &[u8]) -> MapResult<Self> {
        Ok(match kind {
            EventKind::CheckRun => Envelope::CheckRun(decode(kind, payload)?),
            EventKind::Create => Envelope::Create(decode(kind, payload)?),
            EventKind::Delete => Envelope::Delete(decode(kind, payload)?),
            EventKind::PullRequest => Envelope::PullRequest(decode(kind, payload)?),
            EventKind::PullRequestReview => Envelope::PullRequestReview(decode(kind, payload)?),
            EventKind::PullRequestReviewComment => {
                decode::<IgnoredAny>(kind, payload)?;
                Envelope::PullRequestReviewComment
            }
            EventKind::Push => Envelope::Push(decode(kind, payload)?),
            EventKind::JobStatus => Envelope::JobStatus(decode(kind, payload)?),
        })
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Envelope::CheckRun(_) => EventKind::CheckRun,
            Envelope::Create(_) => EventKind::Create,
            Envelope::Delete(_) => EventKind::Delete,
            Envelope::PullRequest(_) => EventKind::PullRequest,
            Envelope::PullRequestReview(_) => EventKind::PullRequestReview,
            Envelope::PullRequestReviewComment => EventKind::PullRequestReviewComment,
            Envelope::Push(_) => EventKind::Push,
            Envelope::JobStatus(_) => EventKind::JobStatus,
        }
    }

    /// `None` 表示不通知
    pub fn render(&self, p: &Printer<'_>) -> Option<EventDetail> {
        match self {
            Envelope::CheckRun(ev) => ev.render(p),
            Envelope::Create(ev) => ev.render(p),
            Envelope::Delete(ev) => ev.render(p),
            Envelope::PullRequest(ev) => ev.render(p),
            Envelope::PullRequestReview(ev) => ev.render(p),
            Envelope::PullRequestReviewComment => None,
            Envelope::Push(ev) => ev.render(p),
            Envelope::JobStatus(ev) => ev.render(p),
        }
    }
}

/// 将 webhook 映射为通知内容
pub fn map(p: &Printer<'_>, event: &str, payload: &[u8]) -> MapResult<Option<EventDetail>> {
    let kind: EventKind = event.parse()?;
    let envelope = Envelope::decode(kind, payload)?;
    let detail = envelope.render(p);
    if detail.is_none() {
        debug!(event = %kind, "event suppressed");
    }
    Ok(detail)
}

/// 根据触发工作流的 webhook 汇报工作流状态
pub fn map_job_status(
    p: &Printer<'_>,
    workflow: &str,
    status: &str,
    run_id: &str,
    payload: &[u8],
) -> MapResult<Option<EventDetail>> {
    let mut job: JobStatusEvent = decode(EventKind::JobStatus, payload)?;
    job.job_name = workflow.to_string();
    job.job_status = status.to_string();
    let html_url = job.common.repository.html_url.as_str();
    if !html_url.is_empty() && !run_id.is_empty() {
        job.job_url = format!("{}/actions/runs/{}", html_url, run_id);
    }
    Ok(job.render(p))
}

pub(crate) fn fill_event(p: &Printer<'_>, common: &Common, mut detail: EventDetail) -> EventDetail {
    fn first(value: &mut String, fallback: &str) {
        if value.is_empty() {
            *value = fallback.to_string();
        }
    }

    first(&mut detail.theme_color, DEFAULT_THEME_COLOR);
    first(&mut detail.repository, &common.repository.full_name);
    first(&mut detail.username, &common.sender.login);
    first(&mut detail.avatar, &common.sender.avatar_url);

    if !detail.username.is_empty() && detail.text.contains(&detail.username) {
        detail.username.clear();
    }

    let view = p.sprint(VIEW_ON_GITHUB);
    for action in &mut detail.action {
        if action.name.trim().is_empty() {
            action.name = view.clone();
        }
    }
    detail
}
