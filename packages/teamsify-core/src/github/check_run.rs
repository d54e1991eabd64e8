use super::common::{Common, branch, nullable};
use super::fill_event;
use crate::detail::EventDetail;
use crate::i18n::{Printer, TextStyle};
use serde::Deserialize;

/// `check_run` 事件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckRunEvent {
    #[serde(flatten)]
    pub common: Common,
    #[serde(deserialize_with = "nullable")]
    pub check_run: CheckRun,
}

/// 检查运行
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckRun {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub output: CheckRunOutput,
    #[serde(deserialize_with = "nullable")]
    pub check_suite: CheckSuite,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckRunOutput {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub summary: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckSuite {
    #[serde(deserialize_with = "nullable")]
    pub app: App,
    #[serde(deserialize_with = "nullable")]
    pub head_branch: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct App {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar_url: String,
}

impl CheckRunEvent {
    pub fn render(&self, p: &Printer<'_>) -> Option<EventDetail> {
        if self.common.action != "completed" {
            return None;
        }

        let run = &self.check_run;
        let app = &run.check_suite.app;
        let username = if run.name.starts_with(&app.name) {
            run.name.clone()
        } else {
            app.name.clone()
        };

        let head = branch(&run.check_suite.head_branch);
        let title = &run.output.title;
        let summary = format!("{}: {}", head, title);
        let summary = summary.strip_prefix(": ").unwrap_or(&summary).to_string();
        let text = format!(
            "{} {}",
            TextStyle::EscapedBold.apply(head),
            TextStyle::EscapedBold.apply(title)
        );

        Some(fill_event(
            p,
            &self.common,
            EventDetail {
                summary,
                username,
                avatar: app.avatar_url.clone(),
                text: text.trim().to_string(),
                body: run.output.summary.clone(),
                ..Default::default()
            },
        ))
    }
}
