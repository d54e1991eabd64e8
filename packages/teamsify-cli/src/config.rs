use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "teamsify")]
#[command(about = "Post a GitHub Actions event to a Microsoft Teams webhook")]
pub struct Cli {
    /// Webhook event name, e.g. push
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Path of the webhook payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Report the workflow status instead of the event itself
    #[arg(long, env = "INPUT_JOB-STATUS")]
    pub job_status: Option<String>,

    /// Preferred language, e.g. fr-FR
    #[arg(long, env = "INPUT_LANG", default_value = "")]
    pub lang: String,

    /// Workflow name
    #[arg(long, env = "GITHUB_WORKFLOW", default_value = "")]
    pub workflow: String,

    /// Workflow run id
    #[arg(long, env = "GITHUB_RUN_ID", default_value = "")]
    pub run_id: String,

    /// Incoming webhook URL
    #[arg(long, env = "INPUT_HOOKURL", hide_env_values = true)]
    pub hook_url: Option<String>,

    /// Deadline for the whole run, in seconds
    #[arg(long, env = "TEAMSIFY_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Print the card instead of posting it
    #[arg(long)]
    pub dry_run: bool,
}

/// 运行参数
#[derive(Debug, Clone)]
pub struct Settings {
    pub event_name: Option<String>,
    pub event_path: Option<PathBuf>,
    pub job_status: Option<String>,
    pub lang: String,
    pub workflow: String,
    pub run_id: String,
    pub hook_url: Option<String>,
    pub timeout: Duration,
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            event_name: None,
            event_path: None,
            job_status: None,
            lang: String::new(),
            workflow: String::new(),
            run_id: String::new(),
            hook_url: None,
            timeout: Duration::from_secs(30),
            dry_run: false,
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Cli {
    pub fn into_settings(self) -> Settings {
        Settings {
            event_name: present(self.event_name),
            event_path: self.event_path.filter(|p| !p.as_os_str().is_empty()),
            job_status: present(self.job_status),
            lang: self.lang.trim().to_string(),
            workflow: self.workflow.trim().to_string(),
            run_id: self.run_id.trim().to_string(),
            hook_url: present(self.hook_url),
            timeout: Duration::from_secs(self.timeout),
            dry_run: self.dry_run,
        }
    }
}
