use serde::{Deserialize, Serialize};

/// 默认主题色
pub const DEFAULT_THEME_COLOR: &str = "#6e5494";

/// 与目标无关的通知内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EventDetail {
    pub summary: String,
    pub theme_color: String,
    pub repository: String,
    pub username: String,
    pub avatar: String,
    /// 通常留空
    pub title: String,

    pub text: String,
    pub body: String,

    /// 按相关性排序
    pub action: Vec<Action>,
    pub fact: Vec<Fact>,
}

/// 链接
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "URL", default)]
    pub url: String,
}

impl Action {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// 名称留空，稍后补默认值
    pub fn link(url: impl Into<String>) -> Self {
        Self::new(String::new(), url)
    }
}

/// 键值行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Value", default)]
    pub value: String,
}

impl Fact {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_json_field_names() {
        let detail = EventDetail {
            summary: "s".to_string(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            action: vec![Action::new("View", "https://example.com")],
            fact: vec![Fact::new("abc", "def")],
            ..Default::default()
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["Summary"], "s");
        assert_eq!(value["ThemeColor"], "#6e5494");
        assert_eq!(value["Action"][0]["URL"], "https://example.com");
        assert_eq!(value["Fact"][0]["Name"], "abc");
    }

    #[test]
    fn test_detail_decodes_partial_fixture() {
        let detail: EventDetail =
            serde_json::from_str(r#"{"Summary":"x","Action":[{"Name":"n"}]}"#).unwrap();
        assert_eq!(detail.summary, "x");
        assert_eq!(detail.action, vec![Action::new("n", "")]);
        assert!(detail.fact.is_empty());
    }

    #[test]
    fn test_link_has_blank_name() {
        let action = Action::link("https://example.com/tree/v1");
        assert!(action.name.is_empty());
        assert_eq!(action.url, "https://example.com/tree/v1");
    }
}
