use crate::i18n::{Catalog, CatalogBuilder, Locale, Msg, Template};

pub const VIEW_PUSH: Msg = Msg::literal("View Push");
pub const VIEW_PR: Msg = Msg::literal("View #{0}");
pub const VIEW_REVIEW: Msg = Msg::literal("View Review");
pub const VIEW_RUN: Msg = Msg::literal("View Run");
pub const VIEW_ON_GITHUB: Msg = Msg::literal("View on GitHub");

pub const NEW_COMMIT_LINK: Msg = Msg::new("new||commit", "{0} [\u{1F50D}]({1})");
pub const REPEAT_COMMIT_LINK: Msg = Msg::new("repeat||commit", "{0} [\u{1F50D}]({1})");
pub const COMPARE_BASE_TO_BRANCH: Msg = Msg::literal("Compare {0}...{1}");

pub const USER_CREATED_TAG: Msg = Msg::literal("{0} created tag {1}");
pub const USER_DELETED_BRANCH: Msg = Msg::literal("{0} deleted branch {1}");
pub const USER_DELETED_TAG: Msg = Msg::literal("{0} deleted tag {1}");
pub const USER_VERBED_PR_BRANCH: Msg = Msg::literal("{0} {1} #{2}: {3} into {4}");
pub const USER_VERBED_PR_TITLE: Msg = Msg::literal("{0} {1} #{2}: {3}");
pub const USER_REVIEW_STATE: Msg = Msg::literal("{0} {1} [#{2}: {3}]({4})");
pub const USER_EDITED_REVIEW: Msg = Msg::literal("{0} edited a review on **#{1}**");
pub const USER_SUBMITTED_REVIEW: Msg = Msg::literal("{0} submitted a review on **#{1}**");

pub const VERBED_PR: Msg = Msg::new("verbed pr", "{0} {1} #{2}");
pub const REVIEWED_PR: Msg = Msg::new("reviewed pr", "{0} reviewed #{1}");
pub const EDITED_REVIEW: Msg = Msg::new("edited review", "{0} edited #{1} review");

pub const WORKFLOW_STATUS_SUMMARY: Msg = Msg::new("status||job|summary", "{0} {1} for {2}");
pub const WORKFLOW_STATUS: Msg = Msg::new("status||job", "{0} {1} {2} for {3}");
pub const WORKFLOW_DETAIL: Msg = Msg::new(
    "detail||job",
    "{0} Workflow {1} {2} for {3} commit {4}",
);

pub const CREATE_TAG: Msg = Msg::new("tag||create", "{0} tagged {1}");
pub const DELETE_BRANCH: Msg = Msg::new("branch||delete", "{0} deleted {1}");
pub const DELETE_TAG: Msg = Msg::new("tag||delete", "{0} deleted {1}");

pub const PUSH_SUMMARY: Msg = Msg::new("pushed||branch|summary", "{0} {1} {2}");
pub const PUSH_TEXT: Msg = Msg::new("pushed||branch", "{0} {1} {2} commits to {3}");

pub const PUSHED: &str = "pushed";
pub const FORCED: &str = "forced";

/// 内置英文与法文消息表
pub fn standard_catalog() -> Catalog {
    french(english(Catalog::builder())).build()
}

fn english(b: CatalogBuilder) -> CatalogBuilder {
    let en = Locale::English;
    b.text(en, PUSH_SUMMARY.id, "{0} {1} {2}")
        .set(
            en,
            PUSH_TEXT.id,
            Template::plural(2, "{0} {1} {2} commit to {3}", "{0} {1} {2} commits to {3}"),
        )
        .text(en, PUSHED, "pushed")
        .text(en, FORCED, "force-pushed")
        .text(en, "approved||review", "approved")
        .text(en, "changes_requested||review", "requested changes for")
        .text(en, "edited||review", "edited a review of")
        .text(en, "dismissed||review", "dismissed a review of")
        .text(en, "commented||review", "commented on")
        .text(en, "opened||pr", "opened pull request")
        .text(en, "opened||pr|draft", "opened draft pull request")
        .text(en, "closed||pr", "closed pull request")
        .text(en, "closed||pr|merged", "merged pull request")
        .text(en, "opened||pr|summary", "opened PR")
        .text(en, "opened||pr|draft|summary", "opened draft PR")
        .text(en, "closed||pr|summary", "closed PR")
        .text(en, "closed||pr|merged|summary", "merged PR")
        .text(en, CREATE_TAG.id, "{0} tagged {1}")
        .text(en, DELETE_BRANCH.id, "{0} deleted {1}")
        .text(en, DELETE_TAG.id, "{0} untagged {1}")
        .text(en, VERBED_PR.id, "{0} {1} #{2}")
        .text(en, REVIEWED_PR.id, "{0} reviewed #{1}")
        .text(en, EDITED_REVIEW.id, "{0} edited #{1} review")
        .text(en, "success||job", "passed")
        .text(en, "failure||job", "failed")
        .text(en, "cancelled||job", "was cancelled")
        .text(en, "skipped||job", "was skipped")
        .text(en, "success||job|sym", "✔")
        .text(en, "failure||job|sym", "❌")
        .text(en, "cancelled||job|sym", "🚫")
        .text(en, "skipped||job|sym", "◌")
}

// 符号沿用英文表
fn french(b: CatalogBuilder) -> CatalogBuilder {
    let fr = Locale::French;
    b.text(fr, VIEW_PUSH.id, "Voir le push")
        .text(fr, VIEW_PR.id, "Voir #{0}")
        .text(fr, VIEW_REVIEW.id, "Voir la revue")
        .text(fr, VIEW_RUN.id, "Voir l'exécution")
        .text(fr, VIEW_ON_GITHUB.id, "Voir sur GitHub")
        .text(fr, COMPARE_BASE_TO_BRANCH.id, "Comparer {0}...{1}")
        .text(fr, USER_CREATED_TAG.id, "{0} a créé l'étiquette {1}")
        .text(fr, USER_DELETED_BRANCH.id, "{0} a supprimé la branche {1}")
        .text(fr, USER_DELETED_TAG.id, "{0} a supprimé l'étiquette {1}")
        .text(fr, USER_VERBED_PR_BRANCH.id, "{0} {1} #{2} : {3} dans {4}")
        .text(fr, USER_VERBED_PR_TITLE.id, "{0} {1} #{2} : {3}")
        .text(fr, USER_REVIEW_STATE.id, "{0} {1} [#{2} : {3}]({4})")
        .text(fr, USER_EDITED_REVIEW.id, "{0} a modifié une revue sur **#{1}**")
        .text(fr, USER_SUBMITTED_REVIEW.id, "{0} a soumis une revue sur **#{1}**")
        .text(fr, VERBED_PR.id, "{0} {1} #{2}")
        .text(fr, REVIEWED_PR.id, "{0} a relu #{1}")
        .text(fr, EDITED_REVIEW.id, "{0} a modifié la revue de #{1}")
        .text(fr, WORKFLOW_STATUS_SUMMARY.id, "{0} {1} pour {2}")
        .text(fr, WORKFLOW_STATUS.id, "{0} {1} {2} pour {3}")
        .text(fr, WORKFLOW_DETAIL.id, "{0} Workflow {1} {2} pour {3} commit {4}")
        .text(fr, CREATE_TAG.id, "{0} a étiqueté {1}")
        .text(fr, DELETE_BRANCH.id, "{0} a supprimé {1}")
        .text(fr, DELETE_TAG.id, "{0} a retiré l'étiquette {1}")
        .text(fr, PUSH_SUMMARY.id, "{0} {1} {2}")
        .set(
            fr,
            PUSH_TEXT.id,
            Template::plural(2, "{0} {1} {2} commit vers {3}", "{0} {1} {2} commits vers {3}"),
        )
        .text(fr, PUSHED, "a poussé")
        .text(fr, FORCED, "a forcé")
        .text(fr, "approved||review", "a approuvé")
        .text(fr, "changes_requested||review", "a demandé des modifications sur")
        .text(fr, "edited||review", "a modifié une revue de")
        .text(fr, "dismissed||review", "a rejeté une revue de")
        .text(fr, "commented||review", "a commenté")
        .text(fr, "opened||pr", "a ouvert la pull request")
        .text(fr, "opened||pr|draft", "a ouvert la pull request brouillon")
        .text(fr, "closed||pr", "a fermé la pull request")
        .text(fr, "closed||pr|merged", "a fusionné la pull request")
        .text(fr, "opened||pr|summary", "a ouvert la PR")
        .text(fr, "opened||pr|draft|summary", "a ouvert la PR brouillon")
        .text(fr, "closed||pr|summary", "a fermé la PR")
        .text(fr, "closed||pr|merged|summary", "a fusionné la PR")
        .text(fr, "success||job", "a réussi")
        .text(fr, "failure||job", "a échoué")
        .text(fr, "cancelled||job", "a été annulé")
        .text(fr, "skipped||job", "a été ignoré")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Arg, TagKey};

    #[test]
    fn test_standard_catalog_is_populated() {
        assert!(!standard_catalog().is_empty());
    }

    #[test]
    fn test_push_text_plural() {
        let catalog = standard_catalog();
        let p = catalog.printer("en");
        let args = |n: i64| {
            vec![
                Arg::escaped_bold("octocat"),
                Arg::lookup(PUSHED),
                Arg::int(n),
                Arg::escaped_bold("main"),
            ]
        };
        assert_eq!(
            p.sprintf(PUSH_TEXT, &args(1)),
            "**octocat** pushed 1 commit to **main**"
        );
        assert_eq!(
            p.sprintf(PUSH_TEXT, &args(3)),
            "**octocat** pushed 3 commits to **main**"
        );
    }

    #[test]
    fn test_job_words_and_symbols() {
        let catalog = standard_catalog();
        let p = catalog.printer("");
        for (status, word, symbol) in [
            ("success", "passed", "✔"),
            ("failure", "failed", "❌"),
            ("cancelled", "was cancelled", "🚫"),
            ("skipped", "was skipped", "◌"),
        ] {
            let key = TagKey::new(status, "job");
            assert_eq!(p.lookup(&key), word);
            assert_eq!(p.lookup(&key.with("sym")), symbol);
        }
    }

    #[test]
    fn test_french_symbols_fall_back_to_english() {
        let catalog = standard_catalog();
        let p = catalog.printer("fr-FR");
        assert_eq!(p.lookup(&TagKey::parse("failure||job")), "a échoué");
        assert_eq!(p.lookup(&TagKey::parse("failure||job|sym")), "❌");
    }

    #[test]
    fn test_untagged_in_english_only() {
        let catalog = standard_catalog();
        let args = [Arg::plain("octocat"), Arg::plain("v1.0")];
        assert_eq!(
            catalog.printer("en").sprintf(DELETE_TAG, &args),
            "octocat untagged v1.0"
        );
        assert_eq!(
            Catalog::builder().build().printer("en").sprintf(DELETE_TAG, &args),
            "octocat deleted v1.0"
        );
    }

    #[test]
    fn test_unregistered_literal_in_french_uses_default_text() {
        let catalog = standard_catalog();
        let args = [Arg::escaped_bold("m"), Arg::plain("https://x")];
        assert_eq!(
            catalog.printer("fr").sprintf(NEW_COMMIT_LINK, &args),
            "**m** [🔍](https://x)"
        );
    }
}
