//! Настройки морфологического разбора.

/// Стратегия разбора слова.
///
/// Стратегии применяются по порядку; каждая возвращает собственный
/// список вариантов разбора.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParserKind {
    /// Словарные слова.
    Dictionary,
    /// Инициалы имени.
    AbbrName,
    /// Инициалы отчества.
    AbbrPatronymic,
    /// Целые числа.
    IntNumber,
    /// Вещественные числа.
    RealNumber,
    /// Знаки препинания.
    Punctuation,
    /// Римские числа.
    RomanNumber,
    /// Слова латиницей.
    Latin,
    /// Слово с частицей через дефис («смотри-ка»).
    HyphenParticle,
    /// Наречия с приставкой «по-» («по-западному»).
    HyphenAdverb,
    /// Составные слова через дефис («интернет-магазин»).
    HyphenWords,
    /// Известная приставка плюс словарное слово.
    PrefixKnown,
    /// Произвольная короткая приставка плюс словарное слово.
    PrefixUnknown,
    /// Предсказание по окончанию слова.
    SuffixKnown,
    /// Несклоняемые аббревиатуры.
    Abbr,
}

impl ParserKind {
    /// Разбирает имя стратегии.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Dictionary" => Self::Dictionary,
            "AbbrName" => Self::AbbrName,
            "AbbrPatronymic" => Self::AbbrPatronymic,
            "IntNumber" => Self::IntNumber,
            "RealNumber" => Self::RealNumber,
            "Punctuation" => Self::Punctuation,
            "RomanNumber" => Self::RomanNumber,
            "Latin" => Self::Latin,
            "HyphenParticle" => Self::HyphenParticle,
            "HyphenAdverb" => Self::HyphenAdverb,
            "HyphenWords" => Self::HyphenWords,
            "PrefixKnown" => Self::PrefixKnown,
            "PrefixUnknown" => Self::PrefixUnknown,
            "SuffixKnown" => Self::SuffixKnown,
            "Abbr" => Self::Abbr,
            _ => return None,
        })
    }

    /// Имя стратегии.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dictionary => "Dictionary",
            Self::AbbrName => "AbbrName",
            Self::AbbrPatronymic => "AbbrPatronymic",
            Self::IntNumber => "IntNumber",
            Self::RealNumber => "RealNumber",
            Self::Punctuation => "Punctuation",
            Self::RomanNumber => "RomanNumber",
            Self::Latin => "Latin",
            Self::HyphenParticle => "HyphenParticle",
            Self::HyphenAdverb => "HyphenAdverb",
            Self::HyphenWords => "HyphenWords",
            Self::PrefixKnown => "PrefixKnown",
            Self::PrefixUnknown => "PrefixUnknown",
            Self::SuffixKnown => "SuffixKnown",
            Self::Abbr => "Abbr",
        }
    }
}

/// Шаг цепочки разбора.
///
/// Терминальный шаг останавливает цепочку, если к этому моменту найден
/// хотя бы один вариант без исправлений в слове. Нетерминальные шаги
/// только накапливают варианты.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParserStep {
    pub kind: ParserKind,
    pub terminal: bool,
}

impl ParserStep {
    #[inline(always)]
    pub const fn terminal(kind: ParserKind) -> Self {
        Self {
            kind,
            terminal: true,
        }
    }

    #[inline(always)]
    pub const fn non_terminal(kind: ParserKind) -> Self {
        Self {
            kind,
            terminal: false,
        }
    }
}

/// Цепочка стратегий по умолчанию.
pub fn default_steps() -> Vec<ParserStep> {
    vec![
        ParserStep::non_terminal(ParserKind::Dictionary),
        ParserStep::non_terminal(ParserKind::AbbrName),
        ParserStep::terminal(ParserKind::AbbrPatronymic),
        ParserStep::terminal(ParserKind::IntNumber),
        ParserStep::terminal(ParserKind::RealNumber),
        ParserStep::terminal(ParserKind::Punctuation),
        ParserStep::non_terminal(ParserKind::RomanNumber),
        ParserStep::terminal(ParserKind::Latin),
        ParserStep::terminal(ParserKind::HyphenParticle),
        ParserStep::terminal(ParserKind::HyphenAdverb),
        ParserStep::terminal(ParserKind::HyphenWords),
        ParserStep::terminal(ParserKind::PrefixKnown),
        ParserStep::non_terminal(ParserKind::PrefixUnknown),
        ParserStep::non_terminal(ParserKind::SuffixKnown),
        ParserStep::terminal(ParserKind::Abbr),
    ]
}

/// Разбирает список имён стратегий.
///
/// Вопросительный знак в конце имени делает шаг нетерминальным.
/// Неизвестные имена пропускаются с предупреждением в журнале.
pub fn parse_steps(names: &[&str]) -> Vec<ParserStep> {
    let mut steps = vec![];
    for name in names {
        let (bare, terminal) = match name.strip_suffix('?') {
            Some(bare) => (bare, false),
            None => (*name, true),
        };
        if let Some(kind) = ParserKind::from_name(bare) {
            steps.push(ParserStep { kind, terminal });
        } else {
            log::warn!("parser {bare:?} is not found, skipping");
        }
    }
    steps
}

/// Настройки разбора.
#[derive(Clone)]
pub struct Config {
    /// Игнорировать регистр букв (разрешает имена собственные и
    /// инициалы со строчной буквы).
    pub ignore_case: bool,

    /// Максимальное число «заиканий», допустимое в составных словах.
    pub stutter_limit: u32,

    /// Максимальное число опечаток, допустимое в составных словах.
    pub typo_limit: u32,

    /// Цепочка стратегий в порядке применения.
    pub steps: Vec<ParserStep>,

    /// Возвращать хотя бы один вариант, даже если слово не разобрано.
    pub force_parse: bool,

    /// Нормализовать оценки так, чтобы их сумма равнялась единице
    /// (словарные и несловарные варианты нормализуются раздельно).
    pub normalize_score: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_case: false,
            stutter_limit: 0,
            typo_limit: 0,
            steps: default_steps(),
            force_parse: false,
            normalize_score: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let steps = parse_steps(&["Dictionary?", "Latin", "Nope", "Abbr"]);
        assert_eq!(
            steps,
            vec![
                ParserStep::non_terminal(ParserKind::Dictionary),
                ParserStep::terminal(ParserKind::Latin),
                ParserStep::terminal(ParserKind::Abbr),
            ]
        );
    }

    #[test]
    fn test_default_chain_order() {
        let steps = default_steps();
        assert_eq!(steps.len(), 15);
        assert_eq!(steps[0].kind, ParserKind::Dictionary);
        assert!(!steps[0].terminal);
        assert_eq!(steps[14].kind, ParserKind::Abbr);
        assert!(steps[14].terminal);
    }
}
