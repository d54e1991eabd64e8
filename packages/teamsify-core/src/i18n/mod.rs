//! 本地化消息

mod key;
mod style;
mod template;

pub use key::TagKey;
pub use style::{MARKDOWN_SPECIAL, TextStyle, escape_markdown};
pub use template::Template;

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

/// 复数类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Other,
}

impl PluralCategory {
    pub fn is_one(self) -> bool {
        self == PluralCategory::One
    }
}

pub type PluralRule = fn(i64) -> PluralCategory;

fn english_plural(n: i64) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn french_plural(n: i64) -> PluralCategory {
    if n == 0 || n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    French,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::French];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
        }
    }

    pub fn from_tag(primary: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(primary))
    }

    /// 按偏好（如 `"fr-CA"`、`"de, fr;q=0.8"`）选择语言，默认英文
    pub fn matching(preference: &str) -> Self {
        preference
            .split(',')
            .filter_map(|candidate| {
                let tag = candidate.split(';').next()?.trim();
                let primary = tag.split(['-', '_', '.', '@']).next()?;
                Locale::from_tag(primary)
            })
            .next()
            .unwrap_or_default()
    }

    pub fn plural_rule(self) -> PluralRule {
        match self {
            Locale::English => english_plural,
            Locale::French => french_plural,
        }
    }

    pub fn plural(self, n: i64) -> PluralCategory {
        (self.plural_rule())(n)
    }
}

/// 模板参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg<'a> {
    Text(&'a str, TextStyle),
    Int(i64),
    /// 再查一次消息表
    Lookup(TagKey),
}

impl<'a> Arg<'a> {
    pub fn text(value: &'a str, style: TextStyle) -> Self {
        Arg::Text(value, style)
    }

    pub fn plain(value: &'a str) -> Self {
        Arg::Text(value, TextStyle::Plain)
    }

    pub fn escaped(value: &'a str) -> Self {
        Arg::Text(value, TextStyle::Escaped)
    }

    pub fn bold(value: &'a str) -> Self {
        Arg::Text(value, TextStyle::Bold)
    }

    pub fn escaped_bold(value: &'a str) -> Self {
        Arg::Text(value, TextStyle::EscapedBold)
    }

    pub fn int(value: impl Into<i64>) -> Self {
        Arg::Int(value.into())
    }

    pub fn lookup(key: impl Into<TagKey>) -> Self {
        Arg::Lookup(key.into())
    }
}

/// 消息 id 与默认文本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msg {
    pub id: &'static str,
    pub fallback: &'static str,
}

impl Msg {
    pub const fn new(id: &'static str, fallback: &'static str) -> Self {
        Self { id, fallback }
    }

    /// id 即默认文本
    pub const fn literal(text: &'static str) -> Self {
        Self {
            id: text,
            fallback: text,
        }
    }
}

type Table = BTreeMap<TagKey, Template>;

#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    tables: HashMap<Locale, Table>,
}

impl CatalogBuilder {
    /// 注册模板，重复的 id 覆盖之前的
    pub fn set(mut self, locale: Locale, id: &str, template: Template) -> Self {
        self.tables
            .entry(locale)
            .or_default()
            .insert(TagKey::parse(id), template);
        self
    }

    pub fn text(self, locale: Locale, id: &str, pattern: &str) -> Self {
        self.set(locale, id, Template::text(pattern))
    }

    pub fn build(self) -> Catalog {
        Catalog {
            tables: self.tables,
        }
    }
}

/// 不可变的消息表
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Locale, Table>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn printer(&self, preference: &str) -> Printer<'_> {
        self.printer_for(Locale::matching(preference))
    }

    pub fn printer_for(&self, locale: Locale) -> Printer<'_> {
        Printer {
            catalog: self,
            locale,
        }
    }

    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn search_order(locale: Locale) -> impl Iterator<Item = Locale> {
        std::iter::once(locale).chain((locale != Locale::English).then_some(Locale::English))
    }

    fn exact(&self, locale: Locale, key: &TagKey) -> Option<&Template> {
        Self::search_order(locale).find_map(|loc| self.tables.get(&loc)?.get(key))
    }

    /// 先精确匹配，再取限定词子集最大的条目
    fn closest(&self, locale: Locale, key: &TagKey) -> Option<&Template> {
        if let Some(template) = self.exact(locale, key) {
            return Some(template);
        }
        Self::search_order(locale).find_map(|loc| {
            self.tables
                .get(&loc)?
                .iter()
                .filter(|(registered, _)| registered.generalizes(key))
                .max_by(|(a, _), (b, _)| {
                    a.qualifiers()
                        .len()
                        .cmp(&b.qualifiers().len())
                        .then_with(|| b.cmp(a))
                })
                .map(|(_, template)| template)
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Printer<'a> {
    catalog: &'a Catalog,
    locale: Locale,
}

impl<'a> Printer<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn sprintf(&self, msg: Msg, args: &[Arg<'_>]) -> String {
        match self.catalog.exact(self.locale, &TagKey::parse(msg.id)) {
            Some(template) => template.render(self, args),
            None => template::interpolate(self, msg.fallback, args),
        }
    }

    pub fn sprint(&self, msg: Msg) -> String {
        self.sprintf(msg, &[])
    }

    /// 查询键的本地化文本，未注册时返回键值
    pub fn lookup(&self, key: &TagKey) -> String {
        match self.catalog.closest(self.locale, key) {
            Some(template) => template.render(self, &[]),
            None => key.value().to_string(),
        }
    }

    pub(crate) fn write_arg(&self, out: &mut String, arg: &Arg<'_>) {
        match arg {
            Arg::Text(value, style) => style.write_to(out, value),
            Arg::Int(n) => {
                let _ = write!(out, "{}", n);
            }
            Arg::Lookup(key) => out.push_str(&self.lookup(key)),
        }
    }
}
