use crate::actions::Environment;
use crate::config::Settings;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use teamsify_core::{Catalog, MapError, build, map, map_job_status};
use teamsify_sdk::{SdkError, WebhookClient};
use thiserror::Error;
use tracing::{error, info};

pub const HOOK_URL_INPUT: &str = "hookurl";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("missing payload {}: {source}", path.display())]
    MissingPayload { path: PathBuf, source: io::Error },

    #[error("missing input {0:?}")]
    MissingInput(&'static str),

    #[error(transparent)]
    Submit(#[from] SdkError),

    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("encoding card: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 事件无需通知
    Suppressed,
    Sent,
    /// `--dry-run`：卡片 JSON
    Printed(String),
}

/// 读取事件、生成卡片并提交，整个过程受 `settings.timeout` 约束
pub async fn notify<E: Environment>(
    env: &mut E,
    settings: &Settings,
    catalog: &Catalog,
    client: &WebhookClient,
) -> Result<Outcome, NotifyError> {
    match tokio::time::timeout(settings.timeout, pipeline(env, settings, catalog, client)).await {
        Ok(result) => result,
        Err(_) => Err(NotifyError::Timeout(settings.timeout)),
    }
}

async fn pipeline<E: Environment>(
    env: &mut E,
    settings: &Settings,
    catalog: &Catalog,
    client: &WebhookClient,
) -> Result<Outcome, NotifyError> {
    let path = settings
        .event_path
        .as_ref()
        .ok_or(NotifyError::MissingInput("event-path"))?;
    let payload = tokio::fs::read(path)
        .await
        .map_err(|source| NotifyError::MissingPayload {
            path: path.clone(),
            source,
        })?;

    let printer = catalog.printer(&settings.lang);
    let detail = match settings.job_status.as_deref() {
        Some(status) => {
            info!(status, workflow = %settings.workflow, "reporting job status");
            map_job_status(&printer, &settings.workflow, status, &settings.run_id, &payload)?
        }
        None => {
            let event = settings
                .event_name
                .as_deref()
                .ok_or(NotifyError::MissingInput("event-name"))?;
            info!(event, locale = printer.locale().tag(), "mapping event");
            map(&printer, event, &payload)?
        }
    };

    let Some(card) = build(detail.as_ref()) else {
        return Ok(Outcome::Suppressed);
    };

    if settings.dry_run {
        env.warn("dry run: the card is printed, not posted");
        return Ok(Outcome::Printed(serde_json::to_string_pretty(&card)?));
    }

    let url = settings
        .hook_url
        .as_deref()
        .ok_or(NotifyError::MissingInput(HOOK_URL_INPUT))?;
    env.mask(url);

    client.submit(&card, url).await?;
    info!("card posted");
    Ok(Outcome::Sent)
}

/// 顶层处理：失败时输出原始 payload 并返回非零退出码
pub async fn run<E: Environment>(
    env: &mut E,
    settings: &Settings,
    catalog: &Catalog,
    client: &WebhookClient,
) -> i32 {
    match notify(env, settings, catalog, client).await {
        Ok(Outcome::Suppressed) => {
            env.debug("No message sent");
            0
        }
        Ok(Outcome::Sent) => {
            env.debug("Message sent");
            0
        }
        Ok(Outcome::Printed(card)) => {
            env.print(&card);
            0
        }
        Err(err) => {
            error!(error = %err, "handling event failed");
            if let Some(path) = &settings.event_path {
                let contents = match tokio::fs::read_to_string(path).await {
                    Ok(payload) => payload,
                    Err(e) => format!("reading payload: {}", e),
                };
                env.dump("payload", &contents);
            }
            env.error(&format!("handling event: {}", err));
            1
        }
    }
}
