//! Морфологические теги.
//!
//! Тег — это набор граммем, разделённый на постоянную часть (лексема)
//! и изменяемую часть (словоформа). Помимо плоского списка граммем тег
//! хранит категории: для каждой родительской граммемы запоминается её
//! непосредственный потомок из тега, поэтому у тега `NOUN,anim,masc`
//! категория `POST` имеет значение `NOUN`, а категория `GNdr` значение
//! `masc`.

use std::fmt;

use crate::dictionary::grammeme::{GrammemeId, GrammemeSet};
use crate::errors::Result;

/// Граммемы, при наличии которых лексема считается непродуктивной.
const NON_PRODUCTIVE: &[&str] = &[
    "NUMR", "NPRO", "PRED", "PREP", "CONJ", "PRCL", "INTJ", "Apro", "NUMB", "ROMN", "LATN",
    "PNCT", "UNKN",
];

/// Граммемы, при наличии которых слово пишется с заглавной буквы.
const CAPITALIZED: &[&str] = &["Name", "Surn", "Patr", "Geox", "Init"];

/// Значение граммемы внутри тега.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TagValue {
    /// Граммема присутствует сама по себе.
    Present,

    /// Граммема является категорией, и тег содержит её потомка.
    Child(GrammemeId),
}

/// Критерий сопоставления тегов.
#[derive(Clone, Copy, Debug)]
pub enum TagCriteria<'a> {
    /// Все перечисленные граммемы должны присутствовать в теге.
    Has(&'a [GrammemeId]),

    /// Каждая категория должна иметь одно из перечисленных значений.
    Values(&'a [(GrammemeId, &'a [GrammemeId])]),

    /// Значения перечисленных категорий должны совпадать с другим тегом.
    ///
    /// Отсутствие категории в обоих тегах также считается совпадением.
    Agree(&'a Tag, &'a [GrammemeId]),
}

/// Морфологический тег.
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    stat: Vec<String>,
    flex: Vec<String>,
    flags: Vec<GrammemeId>,
    categories: Vec<(GrammemeId, GrammemeId)>,
    pos: Option<GrammemeId>,
    productive: bool,
    capitalized: bool,
    ext: Option<Box<Tag>>,
}

impl Tag {
    /// Разбирает тег из строки грамтаба.
    ///
    /// Первая часть до пробела содержит постоянные граммемы, остаток
    /// изменяемые, внутри частей граммемы разделены запятыми. Обозначения,
    /// отсутствующие в реестре, регистрируются в нём на лету.
    pub fn build(gset: &mut GrammemeSet, s: &str) -> Result<Self> {
        let mut tag = Self {
            stat: vec![],
            flex: vec![],
            flags: vec![],
            categories: vec![],
            pos: None,
            productive: true,
            capitalized: false,
            ext: None,
        };
        let mut parts = s.splitn(2, ' ');
        let stat_part = parts.next().unwrap_or("").to_string();
        let flex_part = parts.next().unwrap_or("").to_string();
        for (part, is_flex) in [(stat_part, false), (flex_part, true)] {
            for token in part.split(',') {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                let id = gset.intern(token)?;
                tag.add_grammeme(gset, id);
                if is_flex {
                    tag.flex.push(token.to_string());
                } else {
                    tag.stat.push(token.to_string());
                }
            }
        }
        if let Some(post) = gset.id("POST") {
            tag.pos = match tag.value(post) {
                Some(TagValue::Child(c)) => Some(c),
                _ => None,
            };
        }
        tag.productive = !NON_PRODUCTIVE
            .iter()
            .any(|name| gset.id(name).is_some_and(|id| tag.has(id)));
        tag.capitalized = CAPITALIZED
            .iter()
            .any(|name| gset.id(name).is_some_and(|id| tag.has(id)));
        Ok(tag)
    }

    fn add_grammeme(&mut self, gset: &GrammemeSet, id: GrammemeId) {
        if !self.flags.contains(&id) {
            self.flags.push(id);
        }
        let mut child = id;
        while let Some(parent) = gset.parent(child) {
            if let Some(slot) = self.categories.iter_mut().find(|(k, _)| *k == parent) {
                slot.1 = child;
            } else {
                self.categories.push((parent, child));
            }
            child = parent;
        }
    }

    /// Прикрепляет внешнее (кириллическое) представление тега.
    pub(crate) fn set_ext(&mut self, ext: Tag) {
        self.ext = Some(Box::new(ext));
    }

    /// Возвращает внешнее представление тега, если оно загружено.
    #[inline(always)]
    pub fn ext(&self) -> Option<&Tag> {
        self.ext.as_deref()
    }

    /// Часть речи, если она определена.
    #[inline(always)]
    pub fn pos(&self) -> Option<GrammemeId> {
        self.pos
    }

    /// Постоянные граммемы в исходной записи.
    #[inline(always)]
    pub fn stat(&self) -> &[String] {
        &self.stat
    }

    /// Изменяемые граммемы в исходной записи.
    #[inline(always)]
    pub fn flex(&self) -> &[String] {
        &self.flex
    }

    /// Продуктивна ли лексема с этим тегом.
    ///
    /// Непродуктивны закрытые классы слов (предлоги, союзы, местоимения
    /// и т.п.) и псевдотеги неразобранных слов: предсказывать по ним
    /// новые слова бессмысленно.
    #[inline(always)]
    pub fn is_productive(&self) -> bool {
        self.productive
    }

    /// Пишется ли слово с этим тегом с заглавной буквы.
    #[inline(always)]
    pub fn is_capitalized(&self) -> bool {
        self.capitalized
    }

    /// Возвращает значение граммемы в теге.
    pub fn value(&self, id: GrammemeId) -> Option<TagValue> {
        if let Some(&(_, child)) = self.categories.iter().find(|(k, _)| *k == id) {
            return Some(TagValue::Child(child));
        }
        if self.flags.contains(&id) {
            return Some(TagValue::Present);
        }
        None
    }

    /// Присутствует ли граммема в теге, сама или как категория.
    #[inline(always)]
    pub fn has(&self, id: GrammemeId) -> bool {
        self.value(id).is_some()
    }

    /// Проверяет тег на соответствие критерию.
    pub fn matches(&self, criteria: TagCriteria) -> bool {
        match criteria {
            TagCriteria::Has(ids) => ids.iter().all(|&id| self.has(id)),
            TagCriteria::Values(pairs) => pairs.iter().all(|&(key, allowed)| match self.value(key)
            {
                Some(TagValue::Child(c)) => allowed.contains(&c),
                Some(TagValue::Present) => allowed.contains(&key),
                None => false,
            }),
            TagCriteria::Agree(other, ids) => {
                ids.iter().all(|&id| self.value(id) == other.value(id))
            }
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.flex.is_empty() {
            write!(f, "{}", self.stat.join(","))
        } else {
            write!(f, "{} {}", self.stat.join(","), self.flex.join(","))
        }
    }
}
