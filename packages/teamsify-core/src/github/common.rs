//! webhook 公共字段（只解码用到的部分，`null` 视为空）

use serde::{Deserialize, Deserializer};

pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Common {
    #[serde(deserialize_with = "nullable")]
    pub action: String,
    #[serde(deserialize_with = "nullable")]
    pub sender: Sender,
    #[serde(deserialize_with = "nullable")]
    pub repository: Repository,
    #[serde(deserialize_with = "nullable")]
    pub organization: Organization,
    #[serde(rename = "ref", deserialize_with = "nullable")]
    pub git_ref: String,
    #[serde(deserialize_with = "nullable")]
    pub head_commit: HeadCommit,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sender {
    #[serde(deserialize_with = "nullable")]
    pub login: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Repository {
    #[serde(deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(deserialize_with = "nullable")]
    pub default_branch: String,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(deserialize_with = "nullable")]
    pub login: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeadCommit {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
}

pub(crate) fn branch(git_ref: &str) -> &str {
    git_ref.strip_prefix("refs/heads/").unwrap_or(git_ref)
}

pub(crate) fn tag(git_ref: &str) -> &str {
    git_ref.strip_prefix("refs/tags/").unwrap_or(git_ref)
}

/// 提交 id 的前九个字符
pub(crate) fn short_sha(id: &str) -> &str {
    match id.char_indices().nth(9) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}
