//! Варианты морфологического разбора.
//!
//! Разбор хранит слово в найденной форме, тег, оценку уверенности и
//! данные о происхождении варианта. Словарные разборы дополнительно
//! умеют склоняться по своей парадигме, составные состоят из двух
//! согласованных частей.

use std::fmt;

use crate::analyzer::config::ParserKind;
use crate::dictionary::grammeme::GrammemeId;
use crate::dictionary::map::FormRef;
use crate::dictionary::tag::{Tag, TagCriteria, TagValue};
use crate::dictionary::{Dictionary, KnownIds};

/// Оценка словарного разбора по числу исправлений в слове.
#[inline(always)]
pub fn decay(stutter_cnt: u32, typos_cnt: u32) -> f64 {
    0.3f64.powi(i32::try_from(typos_cnt).unwrap_or(i32::MAX))
        * 0.6f64.powi(i32::try_from(stutter_cnt.min(1)).unwrap_or(1))
}

/// Целевая форма склонения.
#[derive(Clone, Copy)]
pub enum InflectTarget<'a> {
    /// Конкретный номер формы в парадигме.
    Form(usize),

    /// Первая форма, тег которой удовлетворяет критерию.
    Criteria(TagCriteria<'a>),
}

/// Категория множественности по правилам русского языка.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PluralCategory {
    One,
    Few,
    Many,
}

impl PluralCategory {
    /// Определяет категорию для конкретного числа.
    pub fn of(number: u64) -> Self {
        let n = number % 100;
        if n % 10 == 0 || n % 10 > 4 || (n > 4 && n < 21) {
            Self::Many
        } else if n % 10 == 1 {
            Self::One
        } else {
            Self::Few
        }
    }
}

/// Происхождение варианта разбора.
#[derive(Clone)]
enum ParseKind<'d> {
    /// Слово принято как есть, без словарной основы.
    Plain,

    /// Слово найдено в словаре и привязано к форме парадигмы.
    Dictionary {
        form: FormRef,
        /// Отделённая при разборе приставка, не входящая в словоформу.
        prefix: String,
        /// Отделённая частица («-то», «-ка» и т.п.).
        suffix: String,
    },

    /// Составное слово из двух согласованных частей через дефис.
    Combined {
        left: Box<Parse<'d>>,
        right: Box<Parse<'d>>,
    },
}

/// Один из возможных вариантов разбора слова.
#[derive(Clone)]
pub struct Parse<'d> {
    dict: &'d Dictionary,
    word: String,
    tag: &'d Tag,
    pub(crate) score: f64,
    stutter_cnt: u32,
    typos_cnt: u32,
    pub(crate) source: Option<ParserKind>,
    kind: ParseKind<'d>,
}

impl<'d> Parse<'d> {
    /// Создаёт разбор без словарной основы.
    pub(crate) fn plain(dict: &'d Dictionary, word: String, tag: &'d Tag, score: f64) -> Self {
        Self::plain_with_counts(dict, word, tag, score, 0, 0)
    }

    pub(crate) fn plain_with_counts(
        dict: &'d Dictionary,
        word: String,
        tag: &'d Tag,
        score: f64,
        stutter_cnt: u32,
        typos_cnt: u32,
    ) -> Self {
        Self {
            dict,
            word,
            tag,
            score,
            stutter_cnt,
            typos_cnt,
            source: None,
            kind: ParseKind::Plain,
        }
    }

    /// Создаёт словарный разбор для найденной словоформы.
    pub(crate) fn from_dictionary(
        dict: &'d Dictionary,
        word: String,
        form: FormRef,
        stutter_cnt: u32,
        typos_cnt: u32,
    ) -> Self {
        Self {
            dict,
            word,
            tag: dict.form_tag(form),
            score: decay(stutter_cnt, typos_cnt),
            stutter_cnt,
            typos_cnt,
            source: None,
            kind: ParseKind::Dictionary {
                form,
                prefix: String::new(),
                suffix: String::new(),
            },
        }
    }

    /// Создаёт составной разбор из двух частей.
    ///
    /// Тег составного слова берётся у правой части, оценка равна
    /// произведению оценок частей с коэффициентом 0.8.
    pub(crate) fn combined(left: Parse<'d>, right: Parse<'d>) -> Self {
        Self {
            dict: left.dict,
            word: format!("{}-{}", left.word, right.word),
            tag: right.tag,
            score: left.score * right.score * 0.8,
            stutter_cnt: left.stutter_cnt + right.stutter_cnt,
            typos_cnt: left.typos_cnt + right.typos_cnt,
            source: None,
            kind: ParseKind::Combined {
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    /// Приписывает отделённую приставку к словарному разбору.
    pub(crate) fn set_prefix(&mut self, prefix: String) {
        if let ParseKind::Dictionary { prefix: p, .. } = &mut self.kind {
            *p = prefix;
        }
    }

    /// Приписывает отделённую частицу к словарному разбору.
    pub(crate) fn set_suffix(&mut self, suffix: String) {
        if let ParseKind::Dictionary { suffix: s, .. } = &mut self.kind {
            *s = suffix;
        }
    }

    /// Слово в текущей форме, без отделённых приставок и частиц.
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Тег текущей формы.
    #[inline(always)]
    pub fn tag(&self) -> &'d Tag {
        self.tag
    }

    /// Оценка уверенности в данном разборе от 0 до 1.
    #[inline(always)]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Число исправленных «заиканий».
    #[inline(always)]
    pub fn stutter_cnt(&self) -> u32 {
        self.stutter_cnt
    }

    /// Число исправленных опечаток.
    #[inline(always)]
    pub fn typos_cnt(&self) -> u32 {
        self.typos_cnt
    }

    /// Стратегия, давшая этот вариант.
    #[inline(always)]
    pub fn source(&self) -> Option<ParserKind> {
        self.source
    }

    /// Найдено ли слово в словаре (а не предсказано и не принято как есть).
    #[inline(always)]
    pub fn is_dictionary(&self) -> bool {
        matches!(self.kind, ParseKind::Dictionary { .. })
    }

    /// Проверяет, согласуется ли текущая форма с критерием.
    #[inline(always)]
    pub fn matches(&self, criteria: TagCriteria) -> bool {
        self.tag.matches(criteria)
    }

    /// Основа словоформы: слово без приставки парадигмы и окончания.
    fn stem(&self, form: FormRef) -> &str {
        let paradigm = self.dict.paradigm(form.paradigm_id);
        let form_idx = usize::from(form.form_idx);
        let prefix = self.dict.paradigm_prefix(paradigm.prefix_idx(form_idx));
        let suffix = self.dict.suffix(paradigm.suffix_idx(form_idx));
        &self.word[prefix.len()..self.word.len() - suffix.len()]
    }

    fn inflected_to(&self, form: FormRef, form_idx: usize) -> Parse<'d> {
        let paradigm = self.dict.paradigm(form.paradigm_id);
        let stem = self.stem(form);
        let mut word = String::new();
        word.push_str(self.dict.paradigm_prefix(paradigm.prefix_idx(form_idx)));
        word.push_str(stem);
        word.push_str(self.dict.suffix(paradigm.suffix_idx(form_idx)));
        let mut parse = Self::from_dictionary(
            self.dict,
            word,
            FormRef::new(form.paradigm_id, u16::try_from(form_idx).unwrap_or(u16::MAX)),
            0,
            0,
        );
        if let (
            ParseKind::Dictionary { prefix, suffix, .. },
            ParseKind::Dictionary {
                prefix: new_prefix,
                suffix: new_suffix,
                ..
            },
        ) = (&self.kind, &mut parse.kind)
        {
            *new_prefix = prefix.clone();
            *new_suffix = suffix.clone();
        }
        parse
    }

    /// Приводит слово к указанной форме.
    ///
    /// Среди форм парадигмы всегда выбирается первая подходящая.
    /// Возвращает `None`, если подходящей формы нет.
    pub fn inflect(&self, target: InflectTarget) -> Option<Parse<'d>> {
        match &self.kind {
            ParseKind::Plain => Some(self.clone()),
            ParseKind::Dictionary { form, .. } => {
                let paradigm = self.dict.paradigm(form.paradigm_id);
                match target {
                    InflectTarget::Form(form_idx) => {
                        if form_idx >= paradigm.form_count() {
                            return None;
                        }
                        Some(self.inflected_to(*form, form_idx))
                    }
                    InflectTarget::Criteria(criteria) => {
                        (0..paradigm.form_count()).find_map(|form_idx| {
                            let tag = self.dict.form_tag(FormRef::new(
                                form.paradigm_id,
                                u16::try_from(form_idx).ok()?,
                            ));
                            tag.matches(criteria)
                                .then(|| self.inflected_to(*form, form_idx))
                        })
                    }
                }
            }
            ParseKind::Combined { left, right } => {
                let right2 = right.inflect(target)?;
                let cats = self.dict.known_ids().agreement();
                let left2 = match target {
                    InflectTarget::Form(_) => left.inflect(InflectTarget::Criteria(
                        TagCriteria::Agree(right2.tag, &cats),
                    ))?,
                    InflectTarget::Criteria(_) => left.inflect(target)?,
                };
                Some(Self::combined(left2, right2))
            }
        }
    }

    /// Приводит слово к начальной форме.
    ///
    /// При `keep_pos` часть речи сохраняется: например, из причастия не
    /// делается инфинитив.
    pub fn normalize(&self, keep_pos: bool) -> Option<Parse<'d>> {
        if keep_pos {
            let post = self.dict.known_ids().post;
            let pos = self.tag.pos()?;
            let allowed = [pos];
            let values = [(post, &allowed[..])];
            return self.inflect(InflectTarget::Criteria(TagCriteria::Values(&values)));
        }
        self.inflect(InflectTarget::Form(0))
    }

    /// Согласует слово с указанной категорией множественности.
    pub fn pluralize_category(&self, category: PluralCategory) -> Option<Parse<'d>> {
        let k: &KnownIds = self.dict.known_ids();
        let is_noun = self.tag.has(k.noun);
        let is_adjf = self.tag.has(k.adjf) || self.tag.has(k.prtf);
        if !is_noun && !is_adjf {
            return Some(self.clone());
        }
        let has = |id| self.tag.has(id);
        let criteria: [GrammemeId; 2];
        if is_noun && !has(k.nomn) && !has(k.accs) {
            let case = match self.tag.value(k.case)? {
                TagValue::Child(c) => c,
                TagValue::Present => return None,
            };
            let number = if category == PluralCategory::One {
                k.sing
            } else {
                k.plur
            };
            criteria = [number, case];
        } else if category == PluralCategory::One {
            criteria = [k.sing, if has(k.nomn) { k.nomn } else { k.accs }];
        } else if is_noun && category == PluralCategory::Few {
            criteria = [k.sing, k.gent];
        } else if is_adjf && has(k.femn) && category == PluralCategory::Few {
            criteria = [k.plur, k.nomn];
        } else {
            criteria = [k.plur, k.gent];
        }
        self.inflect(InflectTarget::Criteria(TagCriteria::Has(&criteria)))
    }

    /// Согласует слово с указанным числом.
    #[inline(always)]
    pub fn pluralize(&self, number: u64) -> Option<Parse<'d>> {
        self.pluralize_category(PluralCategory::of(number))
    }
}

impl fmt::Display for Parse<'_> {
    /// Возвращает поверхностную форму: слово вместе с отделёнными
    /// приставками и частицами.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ParseKind::Plain | ParseKind::Combined { .. } => write!(f, "{}", self.word),
            ParseKind::Dictionary {
                form,
                prefix,
                suffix,
            } => {
                if prefix.is_empty() {
                    write!(f, "{}{}", self.word, suffix)
                } else {
                    let paradigm = self.dict.paradigm(form.paradigm_id);
                    let pp = self.dict.paradigm_prefix(paradigm.prefix_idx(usize::from(
                        form.form_idx,
                    )));
                    write!(f, "{pp}{prefix}{}{suffix}", &self.word[pp.len()..])
                }
            }
        }
    }
}
