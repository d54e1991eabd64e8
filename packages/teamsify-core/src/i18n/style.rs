/// 会被反斜杠转义的 markdown 字符
pub const MARKDOWN_SPECIAL: &str = "()[]{}_\\!.#*+-`";

/// 用户文本的渲染方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// 原样输出
    #[default]
    Plain,
    /// 转义 markdown 字符
    Escaped,
    /// 加粗（空字符串除外）
    Bold,
    /// 先转义再加粗
    EscapedBold,
}

impl TextStyle {
    pub fn escapes(self) -> bool {
        matches!(self, TextStyle::Escaped | TextStyle::EscapedBold)
    }

    pub fn bolds(self) -> bool {
        matches!(self, TextStyle::Bold | TextStyle::EscapedBold)
    }

    pub fn apply(self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 4);
        self.write_to(&mut out, value);
        out
    }

    pub(crate) fn write_to(self, out: &mut String, value: &str) {
        let bold = self.bolds() && !value.is_empty();
        if bold {
            out.push_str("**");
        }
        if self.escapes() {
            for c in value.chars() {
                if MARKDOWN_SPECIAL.contains(c) {
                    out.push('\\');
                }
                out.push(c);
            }
        } else {
            out.push_str(value);
        }
        if bold {
            out.push_str("**");
        }
    }
}

/// 转义 markdown 字符
pub fn escape_markdown(value: &str) -> String {
    TextStyle::Escaped.apply(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passes_through() {
        assert_eq!(TextStyle::Plain.apply("feature/*_[x]"), "feature/*_[x]");
    }

    #[test]
    fn test_escaped_covers_every_special_char() {
        assert_eq!(
            TextStyle::Escaped.apply("()[]{}_\\!.#*+-`"),
            "\\(\\)\\[\\]\\{\\}\\_\\\\\\!\\.\\#\\*\\+\\-\\`"
        );
    }

    #[test]
    fn test_escaped_branch_name() {
        assert_eq!(TextStyle::Escaped.apply("fix_*[draft]"), "fix\\_\\*\\[draft\\]");
    }

    #[test]
    fn test_bold_wraps_value() {
        assert_eq!(TextStyle::Bold.apply("main"), "**main**");
        assert_eq!(TextStyle::Bold.apply("a_b"), "**a_b**");
    }

    #[test]
    fn test_bold_skips_empty_value() {
        assert_eq!(TextStyle::Bold.apply(""), "");
        assert_eq!(TextStyle::EscapedBold.apply(""), "");
    }

    #[test]
    fn test_escaped_bold() {
        assert_eq!(TextStyle::EscapedBold.apply("v1.0"), "**v1\\.0**");
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(escape_markdown("héllo ✔"), "héllo ✔");
    }
}
