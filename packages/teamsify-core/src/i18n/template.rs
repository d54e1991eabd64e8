use super::{Arg, Printer};

/// 消息模板
///
/// 占位符为 `{N}`，`{{` 与 `}}` 输出花括号。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    Text(String),
    /// 按语言的复数规则与第 `arg` 个参数选择
    Plural {
        arg: usize,
        one: String,
        other: String,
    },
}

impl Template {
    pub fn text(pattern: &str) -> Self {
        Template::Text(pattern.to_string())
    }

    pub fn plural(arg: usize, one: &str, other: &str) -> Self {
        Template::Plural {
            arg,
            one: one.to_string(),
            other: other.to_string(),
        }
    }

    pub(crate) fn render(&self, printer: &Printer<'_>, args: &[Arg<'_>]) -> String {
        match self {
            Template::Text(pattern) => interpolate(printer, pattern, args),
            Template::Plural { arg, one, other } => {
                let pattern = match args.get(*arg) {
                    Some(Arg::Int(n)) if printer.locale().plural(*n).is_one() => one,
                    _ => other,
                };
                interpolate(printer, pattern, args)
            }
        }
    }
}

pub(crate) fn interpolate(printer: &Printer<'_>, pattern: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if let Some(index) = placeholder(tail) {
            if let Some(arg) = args.get(index.value) {
                printer.write_arg(&mut out, arg);
            }
            rest = &tail[index.len..];
            continue;
        }

        // 孤立的括号按原样输出
        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

struct Placeholder {
    value: usize,
    len: usize,
}

fn placeholder(tail: &str) -> Option<Placeholder> {
    let body = tail.strip_prefix('{')?;
    let end = body.find('}')?;
    let value = body[..end].parse().ok()?;
    Some(Placeholder {
        value,
        len: end + 2,
    })
}
