use std::io::{self, Stdout, Write};

/// 运行环境
pub trait Environment {
    /// 在之后的日志中隐藏
    fn mask(&mut self, value: &str);
    fn group(&mut self, name: &str);
    fn end_group(&mut self);
    fn debug(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    fn error(&mut self, message: &str);
    /// 原样输出
    fn print(&mut self, text: &str);

    /// 在日志分组中输出内容
    fn dump(&mut self, title: &str, contents: &str) {
        self.group(title);
        self.debug(contents);
        self.end_group();
    }
}

/// 转义命令数据
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub struct Actions<W: Write = Stdout> {
    out: W,
}

impl Actions<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Actions<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn command(&mut self, name: &str, message: &str) {
        // 写 stdout 失败时无处可报
        let _ = writeln!(self.out, "::{}::{}", name, escape_data(message));
    }
}

impl<W: Write> Environment for Actions<W> {
    fn mask(&mut self, value: &str) {
        if !value.is_empty() {
            self.command("add-mask", value);
        }
    }

    fn group(&mut self, name: &str) {
        self.command("group", name);
    }

    fn end_group(&mut self) {
        self.command("endgroup", "");
    }

    fn debug(&mut self, message: &str) {
        self.command("debug", message);
    }

    fn warn(&mut self, message: &str) {
        self.command("warning", message);
    }

    fn error(&mut self, message: &str) {
        self.command("error", message);
    }

    fn print(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }
}
