//! Постинг-листы словарных значений.
//!
//! Каждому ключу дерева соответствует набор значений. Наборы хранятся в
//! одном массиве, где длина набора и его элементы перемежаются.

use bincode::{Decode, Encode};

use crate::errors::Result;
use crate::utils::FromU32;

/// Постинг-листы.
#[derive(Decode, Encode)]
pub struct Postings {
    // Sets of values are stored by interleaving their length and values.
    data: Vec<u32>,
}

impl Postings {
    /// Возвращает итератор по значениям набора с указанным смещением.
    #[inline(always)]
    pub fn values(&'_ self, i: usize) -> impl Iterator<Item = u32> + '_ {
        let len = usize::from_u32(self.data[i]);
        self.data[i + 1..i + 1 + len].iter().cloned()
    }
}

/// Построитель постинг-листов.
#[derive(Default)]
pub struct PostingsBuilder {
    data: Vec<u32>,
}

impl PostingsBuilder {
    /// Создаёт новый построитель.
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет набор значений и возвращает его смещение.
    #[inline(always)]
    pub fn push(&mut self, values: &[u32]) -> Result<usize> {
        let offset = self.data.len();
        self.data.push(values.len().try_into()?);
        self.data.extend_from_slice(values);
        Ok(offset)
    }

    /// Завершает построение.
    #[allow(clippy::missing_const_for_fn)]
    pub fn build(self) -> Postings {
        Postings { data: self.data }
    }
}
