//! Хранилище парадигм склонения и спряжения.
//!
//! Парадигма описывает все формы лексемы тройками индексов: номер
//! суффикса, номер тега и номер приставки для каждой формы. Тройки
//! хранятся блоками: сначала все суффиксы, затем все теги, затем все
//! приставки.

use bincode::{Decode, Encode};

use crate::errors::{AzmorphError, Result};
use crate::utils::FromU32;

/// Набор парадигм словаря.
#[derive(Decode, Encode)]
pub struct Paradigms {
    offsets: Vec<u32>,
    data: Vec<u16>,
}

impl Paradigms {
    /// Разбирает двоичный файл парадигм.
    ///
    /// Файл состоит из чисел u16 в формате little-endian: сначала
    /// количество парадигм, затем для каждой её длина и элементы.
    /// Длина каждой парадигмы должна делиться на три.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() % 2 != 0 {
            return Err(AzmorphError::invalid_format(
                "paradigms",
                "odd number of bytes",
            ));
        }
        let words: Vec<u16> = data
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect();
        let mut it = words.iter().copied();
        let count = it.next().ok_or_else(|| {
            AzmorphError::invalid_format("paradigms", "missing paradigm count")
        })?;
        let mut offsets = Vec::with_capacity(usize::from(count) + 1);
        let mut out = Vec::with_capacity(words.len().saturating_sub(1 + usize::from(count)));
        offsets.push(0);
        for i in 0..count {
            let size = it.next().ok_or_else(|| {
                AzmorphError::invalid_format(
                    "paradigms",
                    format!("missing size of paradigm {i}"),
                )
            })?;
            if size % 3 != 0 {
                return Err(AzmorphError::invalid_format(
                    "paradigms",
                    format!("size of paradigm {i} is not divisible by 3"),
                ));
            }
            for _ in 0..size {
                out.push(it.next().ok_or_else(|| {
                    AzmorphError::invalid_format(
                        "paradigms",
                        format!("paradigm {i} is truncated"),
                    )
                })?);
            }
            offsets.push(u32::try_from(out.len())?);
        }
        Ok(Self { offsets, data: out })
    }

    /// Число парадигм.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Возвращает парадигму по её номеру.
    #[inline(always)]
    pub fn get(&self, paradigm_id: u16) -> Paradigm<'_> {
        let start = usize::from_u32(self.offsets[usize::from(paradigm_id)]);
        let end = usize::from_u32(self.offsets[usize::from(paradigm_id) + 1]);
        Paradigm {
            data: &self.data[start..end],
        }
    }
}

/// Одна парадигма.
#[derive(Clone, Copy)]
pub struct Paradigm<'a> {
    data: &'a [u16],
}

impl Paradigm<'_> {
    /// Число форм в парадигме.
    #[inline(always)]
    pub fn form_count(&self) -> usize {
        self.data.len() / 3
    }

    /// Индекс суффикса указанной формы.
    #[inline(always)]
    pub fn suffix_idx(&self, form_idx: usize) -> usize {
        usize::from(self.data[form_idx])
    }

    /// Индекс тега указанной формы.
    #[inline(always)]
    pub fn tag_idx(&self, form_idx: usize) -> usize {
        usize::from(self.data[self.form_count() + form_idx])
    }

    /// Индекс приставки указанной формы.
    #[inline(always)]
    pub fn prefix_idx(&self, form_idx: usize) -> usize {
        usize::from(self.data[2 * self.form_count() + form_idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(paradigms: &[&[u16]]) -> Vec<u8> {
        let mut words = vec![u16::try_from(paradigms.len()).unwrap()];
        for p in paradigms {
            words.push(u16::try_from(p.len()).unwrap());
            words.extend_from_slice(p);
        }
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn test_from_bytes() {
        // Две формы: суффиксы [1, 2], теги [10, 11], приставки [0, 0].
        let bytes = encode(&[&[1, 2, 10, 11, 0, 0], &[5, 20, 1]]);
        let paradigms = Paradigms::from_bytes(&bytes).unwrap();
        assert_eq!(paradigms.len(), 2);

        let p = paradigms.get(0);
        assert_eq!(p.form_count(), 2);
        assert_eq!(p.suffix_idx(0), 1);
        assert_eq!(p.suffix_idx(1), 2);
        assert_eq!(p.tag_idx(0), 10);
        assert_eq!(p.tag_idx(1), 11);
        assert_eq!(p.prefix_idx(0), 0);

        let q = paradigms.get(1);
        assert_eq!(q.form_count(), 1);
        assert_eq!(q.suffix_idx(0), 5);
        assert_eq!(q.tag_idx(0), 20);
        assert_eq!(q.prefix_idx(0), 1);
    }

    #[test]
    fn test_truncated_is_error() {
        let mut bytes = encode(&[&[1, 2, 10, 11, 0, 0]]);
        bytes.truncate(bytes.len() - 2);
        assert!(Paradigms::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_bad_size_is_error() {
        let bytes = encode(&[&[1, 2, 10, 11]]);
        assert!(Paradigms::from_bytes(&bytes).is_err());
    }
}
