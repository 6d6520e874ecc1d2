//! Определения типов ошибок.
//!
//! Модуль описывает все ошибки, которые может вернуть библиотека azmorph.

use std::error::Error;
use std::fmt::{self, Debug};

/// Специализированный тип Result для azmorph.
///
/// По умолчанию использует [`AzmorphError`] в качестве типа ошибки.
pub type Result<T, E = AzmorphError> = std::result::Result<T, E>;

/// Тип ошибки azmorph.
///
/// Перечисляет все возможные ошибки библиотеки. Каждый вариант соответствует
/// отдельному классу ошибочных ситуаций.
#[derive(Debug, thiserror::Error)]
pub enum AzmorphError {
    /// Недопустимый аргумент.
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// Недопустимый формат входных данных.
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// Недопустимое состояние.
    #[error(transparent)]
    InvalidState(InvalidStateError),

    /// Ошибка преобразования целых чисел.
    #[error(transparent)]
    TryFromInt(#[from] std::num::TryFromIntError),

    /// Ошибка разбора целого числа.
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    /// Ошибка кодировки UTF-8.
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// Ошибка ввода-вывода.
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// Ошибка разбора JSON-части словарного пакета.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Ошибка декодирования скомпилированного словаря.
    #[error(transparent)]
    Decode(#[from] bincode::error::DecodeError),

    /// Ошибка кодирования скомпилированного словаря.
    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),
}

impl AzmorphError {
    /// Создаёт ошибку недопустимого аргумента.
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// Создаёт ошибку недопустимого формата.
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// Создаёт ошибку недопустимого состояния.
    pub(crate) fn invalid_state<S, M>(msg: S, cause: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Self::InvalidState(InvalidStateError {
            msg: msg.into(),
            cause: cause.into(),
        })
    }
}

/// Ошибка, возникающая при недопустимом аргументе.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Имя аргумента.
    pub(crate) arg: &'static str,

    /// Сообщение об ошибке.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Ошибка, возникающая при недопустимом формате входных данных.
#[derive(Debug)]
pub struct InvalidFormatError {
    /// Имя формата или файла.
    pub(crate) arg: &'static str,

    /// Сообщение об ошибке.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// Ошибка, возникающая при недопустимом состоянии.
#[derive(Debug)]
pub struct InvalidStateError {
    /// Сообщение об ошибке.
    pub(crate) msg: String,

    /// Первопричина ошибки.
    pub(crate) cause: String,
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidStateError: {}: {}", self.msg, self.cause)
    }
}

impl Error for InvalidStateError {}
