//! Общие настройки сериализации.

use bincode::config::{self, Fixint, LittleEndian};

/// Возвращает общую конфигурацию bincode для скомпилированных словарей.
///
/// Используется little-endian и кодирование целых фиксированной длины,
/// что гарантирует одинаковый двоичный формат на всех платформах.
pub const fn bincode_config() -> config::Configuration<LittleEndian, Fixint> {
    config::standard()
        .with_little_endian()
        .with_fixed_int_encoding()
}
