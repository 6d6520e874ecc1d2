//! Реестр граммем OpenCorpora.
//!
//! Граммемы образуют дерево: например, `masc` является потомком `GNdr`,
//! а `NOUN` потомком `POST`. Реестр хранит для каждой граммемы её
//! внутреннее (латинское) и внешнее (кириллическое) обозначения и ссылку
//! на родителя, а также разрешает оба обозначения в один идентификатор.

use hashbrown::HashMap;

use crate::errors::{AzmorphError, Result};

/// Идентификатор граммемы в реестре.
pub type GrammemeId = u16;

/// Описание одной граммемы.
#[derive(Clone, Debug)]
pub struct GrammemeInfo {
    /// Внутреннее обозначение, например `NOUN`.
    pub internal: String,

    /// Внешнее (кириллическое) обозначение, например `СУЩ`.
    pub external: String,

    /// Полное человекочитаемое название.
    pub external_full: String,

    /// Родительская граммема, если есть.
    pub parent: Option<GrammemeId>,
}

/// Псевдограммемы для слов, отсутствующих в словаре.
///
/// Каждая прикрепляется к `POST` как отдельная часть речи.
const PSEUDO_GRAMMEMES: &[(&str, &str, &str)] = &[
    ("NUMB", "ЧИСЛО", "число"),
    ("ROMN", "РИМ", "римское число"),
    ("LATN", "ЛАТ", "латиница"),
    ("PNCT", "ЗПР", "пунктуация"),
    ("UNKN", "НЕИЗВ", "не разобрано"),
];

/// Реестр граммем.
pub struct GrammemeSet {
    codes: HashMap<String, GrammemeId>,
    entries: Vec<GrammemeInfo>,
}

impl GrammemeSet {
    /// Строит реестр из строк описания граммем.
    ///
    /// Каждая строка содержит четыре поля: внутреннее обозначение,
    /// обозначение родителя (пустая строка у корневых), внешнее
    /// обозначение и полное название. Родители разрешаются вторым
    /// проходом, поэтому порядок строк не важен.
    pub fn from_rows(rows: &[[String; 4]]) -> Result<Self> {
        let mut set = Self {
            codes: HashMap::new(),
            entries: vec![],
        };
        for row in rows {
            set.insert(&row[0], &row[2], &row[3], None)?;
        }
        for row in rows {
            if row[1].is_empty() {
                continue;
            }
            let parent = set.id(&row[1]).ok_or_else(|| {
                AzmorphError::invalid_format(
                    "grammemes",
                    format!("unknown parent grammeme {}", row[1]),
                )
            })?;
            let child = set.id(&row[0]).ok_or_else(|| {
                AzmorphError::invalid_format(
                    "grammemes",
                    format!("grammeme {} is not registered", row[0]),
                )
            })?;
            set.entries[usize::from(child)].parent = Some(parent);
        }
        let post = set.id("POST");
        for &(internal, external, full) in PSEUDO_GRAMMEMES {
            set.insert(internal, external, full, post)?;
        }
        Ok(set)
    }

    fn insert(
        &mut self,
        internal: &str,
        external: &str,
        external_full: &str,
        parent: Option<GrammemeId>,
    ) -> Result<GrammemeId> {
        let id = GrammemeId::try_from(self.entries.len())?;
        self.codes.insert(internal.to_string(), id);
        if !external.is_empty() {
            self.codes.insert(external.to_string(), id);
        }
        self.entries.push(GrammemeInfo {
            internal: internal.to_string(),
            external: external.to_string(),
            external_full: external_full.to_string(),
            parent,
        });
        Ok(id)
    }

    /// Возвращает идентификатор граммемы по любому из её обозначений.
    #[inline(always)]
    pub fn id(&self, code: &str) -> Option<GrammemeId> {
        self.codes.get(code).copied()
    }

    /// Возвращает идентификатор граммемы, создавая запись при её отсутствии.
    ///
    /// Грамтаб может содержать обозначения, которых нет в списке граммем
    /// словаря. Такие обозначения регистрируются без родителя, чтобы теги
    /// оставались сравнимыми по идентификаторам.
    pub fn intern(&mut self, code: &str) -> Result<GrammemeId> {
        if let Some(id) = self.id(code) {
            return Ok(id);
        }
        self.insert(code, "", "", None)
    }

    /// Возвращает описание граммемы.
    #[inline(always)]
    pub fn info(&self, id: GrammemeId) -> &GrammemeInfo {
        &self.entries[usize::from(id)]
    }

    /// Возвращает родителя граммемы, если есть.
    #[inline(always)]
    pub fn parent(&self, id: GrammemeId) -> Option<GrammemeId> {
        self.entries[usize::from(id)].parent
    }

    /// Возвращает внутреннее обозначение граммемы.
    #[inline(always)]
    pub fn internal(&self, id: GrammemeId) -> &str {
        &self.entries[usize::from(id)].internal
    }

    /// Число зарегистрированных граммем.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(internal: &str, parent: &str, external: &str, full: &str) -> [String; 4] {
        [
            internal.to_string(),
            parent.to_string(),
            external.to_string(),
            full.to_string(),
        ]
    }

    fn sample() -> GrammemeSet {
        GrammemeSet::from_rows(&[
            row("POST", "", "ЧР", "часть речи"),
            row("NOUN", "POST", "СУЩ", "имя существительное"),
            row("GNdr", "", "РОД", "род"),
            row("masc", "GNdr", "мр", "мужской род"),
        ])
        .unwrap()
    }

    #[test]
    fn test_both_codes_resolve() {
        let set = sample();
        assert_eq!(set.id("NOUN"), set.id("СУЩ"));
        assert!(set.id("NOUN").is_some());
        assert_eq!(set.id("ГЛ"), None);
    }

    #[test]
    fn test_parent_chain() {
        let set = sample();
        let masc = set.id("masc").unwrap();
        let gndr = set.id("GNdr").unwrap();
        assert_eq!(set.parent(masc), Some(gndr));
        assert_eq!(set.parent(gndr), None);
    }

    #[test]
    fn test_pseudo_grammemes() {
        let set = sample();
        let latn = set.id("LATN").unwrap();
        assert_eq!(set.id("ЛАТ"), Some(latn));
        assert_eq!(set.parent(latn), set.id("POST"));
    }

    #[test]
    fn test_intern_unknown() {
        let mut set = sample();
        let before = set.len();
        let id = set.intern("Erro").unwrap();
        assert_eq!(set.len(), before + 1);
        assert_eq!(set.intern("Erro").unwrap(), id);
        assert_eq!(set.parent(id), None);
    }

    #[test]
    fn test_unknown_parent_is_error() {
        let result = GrammemeSet::from_rows(&[row("masc", "GNdr", "мр", "мужской род")]);
        assert!(result.is_err());
    }
}
