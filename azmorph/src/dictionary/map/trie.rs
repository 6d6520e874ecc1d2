//! Обёртка над сжатым префиксным деревом.
//!
//! Модуль инкапсулирует double-array trie из крейта crawdad и добавляет
//! сериализацию в формат скомпилированного словаря.

use bincode::{
    de::{BorrowDecode, BorrowDecoder, Decoder},
    enc::Encoder,
    error::{DecodeError, EncodeError},
    Decode, Encode,
};

use crate::errors::{AzmorphError, Result};

/// Сжатое префиксное дерево, отображающее строки в значения u32.
pub struct Trie {
    /// Внутренняя реализация double-array trie.
    da: crawdad::Trie,
}

impl Trie {
    /// Строит дерево из отсортированного списка записей (ключ, значение).
    pub fn from_records<K>(records: &[(K, u32)]) -> Result<Self>
    where
        K: AsRef<str>,
    {
        Ok(Self {
            da: crawdad::Trie::from_records(records.iter().map(|(k, v)| (k, *v)))
                .map_err(|e| AzmorphError::invalid_argument("records", e.to_string()))?,
        })
    }

    /// Возвращает значение, если ключ присутствует в дереве целиком.
    #[inline(always)]
    pub fn exact_match(&self, key: &str) -> Option<u32> {
        self.da.exact_match(key.chars())
    }
}

impl Encode for Trie {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(&self.da.serialize_to_vec(), encoder)?;
        Ok(())
    }
}

impl<Context> Decode<Context> for Trie {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError> {
        let data: Vec<u8> = Decode::decode(decoder)?;
        let (da, _) = crawdad::Trie::deserialize_from_slice(&data);
        Ok(Self { da })
    }
}

impl<'de, Context> BorrowDecode<'de, Context> for Trie {
    fn borrow_decode<D: BorrowDecoder<'de>>(decoder: &mut D) -> Result<Self, DecodeError> {
        let data: &[u8] = BorrowDecode::borrow_decode(decoder)?;
        let (da, _) = crawdad::Trie::deserialize_from_slice(data);
        Ok(Self { da })
    }
}
