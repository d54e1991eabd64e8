use super::common::{Common, short_sha};
use super::fill_event;
use super::messages::{VIEW_RUN, WORKFLOW_DETAIL, WORKFLOW_STATUS, WORKFLOW_STATUS_SUMMARY};
use crate::detail::{Action, EventDetail};
use crate::i18n::{Arg, Printer, TagKey};
use serde::Deserialize;

/// 工作流状态（合成事件）
///
/// 仓库、ref 与提交取自触发工作流的 webhook，其余字段由运行环境提供。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobStatusEvent {
    #[serde(flatten)]
    pub common: Common,
    #[serde(skip)]
    pub job_name: String,
    #[serde(skip)]
    pub job_status: String,
    #[serde(skip)]
    pub job_url: String,
}

impl JobStatusEvent {
    pub fn render(&self, p: &Printer<'_>) -> Option<EventDetail> {
        let word = TagKey::new(&self.job_status, "job");
        let symbol = word.clone().with("sym");

        let git_ref = self.common.git_ref.as_str();
        let ref_name = git_ref.strip_prefix("refs/tags/").unwrap_or(git_ref);
        let ref_name = ref_name.strip_prefix("refs/heads/").unwrap_or(ref_name);

        let head = &self.common.head_commit;
        let sha = short_sha(&head.id);
        let commit_link = if !head.id.is_empty() && !head.url.is_empty() {
            format!("[{}]({})", sha, head.url)
        } else {
            String::new()
        };
        let ref_or_sha = if ref_name.is_empty() { sha } else { ref_name };

        let job = self.job_name.as_str();
        let action = if self.job_url.is_empty() {
            Vec::new()
        } else {
            vec![Action::new(p.sprint(VIEW_RUN), self.job_url.clone())]
        };

        Some(fill_event(
            p,
            &self.common,
            EventDetail {
                username: job.to_string(),
                summary: p.sprintf(
                    WORKFLOW_STATUS_SUMMARY,
                    &[
                        Arg::plain(job),
                        Arg::Lookup(word.clone()),
                        Arg::plain(ref_or_sha),
                    ],
                ),
                text: p.sprintf(
                    WORKFLOW_STATUS,
                    &[
                        Arg::Lookup(symbol.clone()),
                        Arg::escaped(job),
                        Arg::Lookup(word.clone()),
                        Arg::escaped_bold(ref_or_sha),
                    ],
                ),
                body: p.sprintf(
                    WORKFLOW_DETAIL,
                    &[
                        Arg::Lookup(symbol),
                        Arg::escaped_bold(job),
                        Arg::Lookup(word),
                        Arg::bold(ref_name),
                        Arg::plain(&commit_link),
                    ],
                ),
                action,
                ..Default::default()
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::github::{map_job_status, standard_catalog};

    const PUSH: &str = include_str!("../../testdata/push.json");
    const CREATE_TAG: &str = include_str!("../../testdata/create_tag.json");

    #[test]
    fn test_every_status() {
        let catalog = standard_catalog();
        let p = catalog.printer("");
        for (status, word, symbol) in [
            ("success", "passed", "✔"),
            ("failure", "failed", "❌"),
            ("cancelled", "was cancelled", "🚫"),
            ("skipped", "was skipped", "◌"),
        ] {
            let detail = map_job_status(&p, "CI", status, "12345", PUSH.as_bytes())
                .unwrap()
                .unwrap();

            assert_eq!(detail.summary, format!("CI {} for main", word));
            assert_eq!(detail.text, format!("{} CI {} for **main**", symbol, word));
            assert_eq!(
                detail.body,
                format!(
                    "{} Workflow **CI** {} for **main** commit [123456789](https://github.com/octo-org/hello-world/commit/123456789ab)",
                    symbol, word
                )
            );
            assert_eq!(detail.repository, "octo-org/hello-world");
            assert_eq!(detail.avatar, "https://avatars.githubusercontent.com/u/583231?v=4");
            // 工作流名已出现在正文中
            assert_eq!(detail.username, "");
            assert_eq!(detail.action.len(), 1);
            assert_eq!(detail.action[0].name, "View Run");
            assert_eq!(
                detail.action[0].url,
                "https://github.com/octo-org/hello-world/actions/runs/12345"
            );
        }
    }

    #[test]
    fn test_escaped_job_name_keeps_username() {
        let catalog = standard_catalog();
        let detail = map_job_status(&catalog.printer(""), "build-and-test", "failure", "7", PUSH.as_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(detail.text, "❌ build\\-and\\-test failed for **main**");
        assert_eq!(detail.username, "build-and-test");
    }

    #[test]
    fn test_tag_ref_is_stripped() {
        let catalog = standard_catalog();
        let detail = map_job_status(&catalog.printer(""), "Release", "success", "9", CREATE_TAG.as_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(detail.summary, "Release passed for v1.2.0");
        assert_eq!(detail.text, "✔ Release passed for **v1\\.2\\.0**");
    }

    #[test]
    fn test_missing_ref_falls_back_to_short_sha() {
        let payload = PUSH.replace("\"refs/heads/main\"", "null");
        let catalog = standard_catalog();
        let detail = map_job_status(&catalog.printer(""), "CI", "success", "1", payload.as_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(detail.summary, "CI passed for 123456789");
        assert_eq!(detail.text, "✔ CI passed for **123456789**");
        assert!(detail.body.starts_with("✔ Workflow **CI** passed for  commit ["));
    }

    #[test]
    fn test_no_run_action_without_run_id() {
        let catalog = standard_catalog();
        let detail = map_job_status(&catalog.printer(""), "CI", "success", "", PUSH.as_bytes())
            .unwrap()
            .unwrap();
        assert!(detail.action.is_empty());
    }

    #[test]
    fn test_job_status_in_french() {
        let catalog = standard_catalog();
        let detail = map_job_status(&catalog.printer("fr"), "CI", "failure", "3", PUSH.as_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(detail.text, "❌ CI a échoué pour **main**");
        assert_eq!(detail.action[0].name, "Voir l'exécution");
    }

    #[test]
    fn test_bad_payload_is_a_decode_error() {
        let catalog = standard_catalog();
        let error = map_job_status(&catalog.printer(""), "CI", "success", "1", b"[1,2")
            .unwrap_err();
        assert!(error.to_string().starts_with("decoding webhook failed (_job_status)"));
    }
}
