//! Словарные отображения на основе префиксного дерева.
//!
//! Три структуры поиска используют один и тот же физический формат
//! (дерево плюс постинг-листы), но различаются полезной нагрузкой:
//!
//! - [`WordMap`]: нормализованная словоформа -> пары (парадигма, форма);
//! - [`SuffixMap`]: предсказательный суффикс -> тройки (частота, парадигма, форма);
//! - [`FreqMap`]: ключ `"слово:тег"` -> одно целое значение частоты.

pub mod posting;
pub mod trie;

use std::collections::BTreeMap;

use bincode::{Decode, Encode};

use crate::dictionary::map::posting::{Postings, PostingsBuilder};
use crate::dictionary::map::trie::Trie;
use crate::errors::Result;
use crate::utils::FromU32;

/// Ссылка на словарную форму: индекс парадигмы и номер формы внутри неё.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FormRef {
    pub paradigm_id: u16,
    pub form_idx: u16,
}

impl FormRef {
    #[inline(always)]
    pub const fn new(paradigm_id: u16, form_idx: u16) -> Self {
        Self {
            paradigm_id,
            form_idx,
        }
    }

    #[inline(always)]
    fn pack(self) -> u32 {
        (u32::from(self.paradigm_id) << 16) | u32::from(self.form_idx)
    }

    #[inline(always)]
    fn unpack(v: u32) -> Self {
        Self::new((v >> 16) as u16, (v & 0xFFFF) as u16)
    }
}

/// Кандидат предсказания по суффиксу.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SuffixEntry {
    /// Частота встречаемости данного слота в корпусе.
    pub count: u32,
    pub form: FormRef,
}

/// Порождает варианты написания слова с однобуквенными заменами.
///
/// Первым элементом всегда идёт исходное слово, затем по одному варианту
/// на каждую позицию, где применима замена из таблицы. Одновременно
/// выполняется не более одной замены.
fn substituted(word: &str, replacements: &[(char, char)]) -> Vec<String> {
    let mut out = vec![word.to_string()];
    for (pos, c) in word.char_indices() {
        for &(from, to) in replacements {
            if c == from {
                let mut cand = String::with_capacity(word.len() + to.len_utf8());
                cand.push_str(&word[..pos]);
                cand.push(to);
                cand.push_str(&word[pos + c.len_utf8()..]);
                out.push(cand);
            }
        }
    }
    out
}

fn build_trie(entries: &[(String, u32)]) -> Result<Option<Trie>> {
    if entries.is_empty() {
        Ok(None)
    } else {
        Trie::from_records(entries).map(Some)
    }
}

/// Отображение словоформ в слоты парадигм.
#[derive(Decode, Encode)]
pub struct WordMap {
    // Пустое дерево не строится, чтобы словарь без записей оставался
    // корректным.
    trie: Option<Trie>,
    postings: Postings,
}

impl WordMap {
    /// Возвращает все слоты парадигм для точного ключа.
    #[inline(always)]
    pub fn lookup<'a>(&'a self, word: &str) -> Option<impl Iterator<Item = FormRef> + 'a> {
        self.trie
            .as_ref()?
            .exact_match(word)
            .map(|offset| self.postings.values(usize::from_u32(offset)).map(FormRef::unpack))
    }

    /// Ищет слово и его однобуквенные варианты по таблице замен.
    ///
    /// Возвращает пары (найденная строка, слоты). Отсутствие совпадений
    /// даёт пустой список, а не ошибку.
    pub fn find_all(&self, word: &str, replacements: &[(char, char)]) -> Vec<(String, Vec<FormRef>)> {
        let mut out = vec![];
        for cand in substituted(word, replacements) {
            if let Some(it) = self.lookup(&cand) {
                out.push((cand, it.collect()));
            }
        }
        out
    }
}

/// Построитель [`WordMap`].
#[derive(Default)]
pub struct WordMapBuilder {
    map: BTreeMap<String, Vec<u32>>,
}

impl WordMapBuilder {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn add_record(&mut self, word: String, form: FormRef) {
        self.map.entry(word).or_default().push(form.pack());
    }

    pub fn build(self) -> Result<WordMap> {
        let mut entries = vec![];
        let mut builder = PostingsBuilder::new();
        for (word, values) in self.map {
            let offset = builder.push(&values)?;
            entries.push((word, u32::try_from(offset)?));
        }
        Ok(WordMap {
            trie: build_trie(&entries)?,
            postings: builder.build(),
        })
    }
}

/// Отображение предсказательных суффиксов в слоты парадигм с частотами.
#[derive(Decode, Encode)]
pub struct SuffixMap {
    trie: Option<Trie>,
    postings: Postings,
}

impl SuffixMap {
    /// Возвращает все кандидаты для точного суффикса.
    pub fn lookup(&self, suffix: &str) -> Option<Vec<SuffixEntry>> {
        let offset = self.trie.as_ref()?.exact_match(suffix)?;
        let mut it = self.postings.values(usize::from_u32(offset));
        let mut entries = vec![];
        while let Some(count) = it.next() {
            let packed = it.next().expect("suffix postings are stored in pairs");
            entries.push(SuffixEntry {
                count,
                form: FormRef::unpack(packed),
            });
        }
        Some(entries)
    }

    /// Ищет суффикс и его однобуквенные варианты по таблице замен.
    pub fn find_all(
        &self,
        suffix: &str,
        replacements: &[(char, char)],
    ) -> Vec<(String, Vec<SuffixEntry>)> {
        let mut out = vec![];
        for cand in substituted(suffix, replacements) {
            if let Some(entries) = self.lookup(&cand) {
                out.push((cand, entries));
            }
        }
        out
    }
}

/// Построитель [`SuffixMap`].
#[derive(Default)]
pub struct SuffixMapBuilder {
    map: BTreeMap<String, Vec<u32>>,
}

impl SuffixMapBuilder {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn add_record(&mut self, suffix: String, count: u32, form: FormRef) {
        let values = self.map.entry(suffix).or_default();
        values.push(count);
        values.push(form.pack());
    }

    pub fn build(self) -> Result<SuffixMap> {
        let mut entries = vec![];
        let mut builder = PostingsBuilder::new();
        for (suffix, values) in self.map {
            let offset = builder.push(&values)?;
            entries.push((suffix, u32::try_from(offset)?));
        }
        Ok(SuffixMap {
            trie: build_trie(&entries)?,
            postings: builder.build(),
        })
    }
}

/// Отображение ключей `"слово:тег"` в целочисленные частоты.
///
/// В отличие от остальных форматов, поиск выполняется только по точному
/// пути, и результат содержит не более одного значения.
#[derive(Decode, Encode)]
pub struct FreqMap {
    trie: Option<Trie>,
}

impl FreqMap {
    /// Строит отображение из списка пар (ключ, частота).
    pub fn from_records<K>(records: impl IntoIterator<Item = (K, u32)>) -> Result<Self>
    where
        K: Into<String>,
    {
        let map: BTreeMap<String, u32> = records.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let entries: Vec<(String, u32)> = map.into_iter().collect();
        Ok(Self {
            trie: build_trie(&entries)?,
        })
    }

    /// Возвращает частоту для точного ключа.
    #[inline(always)]
    pub fn find(&self, key: &str) -> Option<u32> {
        self.trie.as_ref()?.exact_match(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YO: &[(char, char)] = &[('е', 'ё')];

    #[test]
    fn test_word_map_ambiguous() {
        let mut b = WordMapBuilder::new();
        b.add_record("стали".to_string(), FormRef::new(1, 1));
        b.add_record("стали".to_string(), FormRef::new(2, 3));
        b.add_record("сталь".to_string(), FormRef::new(1, 0));
        let map = b.build().unwrap();

        let hits: Vec<_> = map.lookup("стали").unwrap().collect();
        assert_eq!(hits, vec![FormRef::new(1, 1), FormRef::new(2, 3)]);
        assert!(map.lookup("стал").is_none());
    }

    #[test]
    fn test_word_map_replacements() {
        let mut b = WordMapBuilder::new();
        b.add_record("ёж".to_string(), FormRef::new(5, 0));
        let map = b.build().unwrap();

        // Буква «е» в запросе может соответствовать «ё» в словаре.
        let found = map.find_all("еж", YO);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "ёж");
        assert_eq!(found[0].1, vec![FormRef::new(5, 0)]);

        // Не более одной замены одновременно.
        assert!(map.find_all("ежем", YO).is_empty());
    }

    #[test]
    fn test_suffix_map() {
        let mut b = SuffixMapBuilder::new();
        b.add_record("ость".to_string(), 17, FormRef::new(3, 0));
        b.add_record("ость".to_string(), 4, FormRef::new(9, 2));
        let map = b.build().unwrap();

        let entries = map.lookup("ость").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].count, 17);
        assert_eq!(entries[0].form, FormRef::new(3, 0));
        assert_eq!(entries[1].count, 4);
        assert_eq!(entries[1].form, FormRef::new(9, 2));
    }

    #[test]
    fn test_freq_map_exact_only() {
        let map = FreqMap::from_records([("стали:VERB plur,past", 700000u32)]).unwrap();
        assert_eq!(map.find("стали:VERB plur,past"), Some(700000));
        assert_eq!(map.find("стали"), None);
    }
}
