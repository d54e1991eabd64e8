use std::collections::BTreeSet;
use std::fmt;

/// 查询键 `"<value>||<namespace>[|<qualifier>...]"`
///
/// 限定词是集合，`"closed||pr|"` 与 `"closed||pr"` 相同。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TagKey {
    value: String,
    namespace: String,
    qualifiers: BTreeSet<String>,
}

impl TagKey {
    pub fn new(value: &str, namespace: &str) -> Self {
        Self {
            value: value.to_string(),
            namespace: namespace.to_string(),
            qualifiers: BTreeSet::new(),
        }
    }

    /// 解析字符串形式，没有 `||` 时为裸键
    pub fn parse(raw: &str) -> Self {
        let Some((value, rest)) = raw.split_once("||") else {
            return Self::new(raw, "");
        };
        let (namespace, qualifiers) = rest.split_once('|').unwrap_or((rest, ""));
        Self {
            value: value.to_string(),
            namespace: namespace.to_string(),
            qualifiers: qualifiers
                .split('|')
                .filter(|q| !q.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn with(mut self, qualifier: &str) -> Self {
        if !qualifier.is_empty() {
            self.qualifiers.insert(qualifier.to_string());
        }
        self
    }

    pub fn with_if(self, condition: bool, qualifier: &str) -> Self {
        if condition { self.with(qualifier) } else { self }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn qualifiers(&self) -> &BTreeSet<String> {
        &self.qualifiers
    }

    /// 值与命名空间相同且限定词是 `other` 的子集
    pub fn generalizes(&self, other: &TagKey) -> bool {
        self.value == other.value
            && self.namespace == other.namespace
            && self.qualifiers.is_subset(&other.qualifiers)
    }
}

impl From<&str> for TagKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)?;
        if self.namespace.is_empty() && self.qualifiers.is_empty() {
            return Ok(());
        }
        write!(f, "||{}", self.namespace)?;
        for qualifier in &self.qualifiers {
            write!(f, "|{}", qualifier)?;
        }
        Ok(())
    }
}
