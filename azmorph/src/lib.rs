//! # Azmorph
//!
//! Морфологический анализатор русского языка на основе словаря
//! OpenCorpora.
//!
//! ## Обзор
//!
//! Библиотека разбирает отдельные слова: находит их в словаре или
//! предсказывает по приставкам и окончаниям, возвращая варианты разбора
//! с тегами и оценками правдоподобности. Разборы умеют склоняться,
//! приводиться к начальной форме и согласовываться с числительными.
//!
//! Словарь компилируется из словарного пакета в один файл и загружается
//! целиком, после чего анализатор не выполняет обращений к диску.
//!
//! ## Использование
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::fs::File;
//! use azmorph::{Analyzer, Config, Dictionary};
//!
//! let dict = Dictionary::read(File::open("russian.dic")?)?;
//! let analyzer = Analyzer::new(dict);
//!
//! let parses = analyzer.analyze("стали", &Config::default());
//! for parse in &parses {
//!     println!("{}\t{}\t{:.4}", parse, parse.tag(), parse.score());
//! }
//!
//! let normalized = parses[0].normalize(false);
//! # Ok(())
//! # }
//! ```

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("`target_pointer_width` must be 32 or 64");

/// Анализатор и стратегии разбора
pub mod analyzer;

/// Общие настройки сериализации
pub mod common;

/// Словарь и его поисковые структуры
pub mod dictionary;

/// Определения типов ошибок
pub mod errors;

/// Варианты разбора слова
pub mod parse;

/// Внутренние вспомогательные функции
pub mod utils;


// Re-exports
pub use analyzer::config::{Config, ParserKind, ParserStep};
pub use analyzer::Analyzer;
pub use dictionary::builder::DictionaryBuilder;
pub use dictionary::Dictionary;
pub use parse::{InflectTarget, Parse, PluralCategory};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
