//! Морфологический анализатор.

pub mod config;
mod parsers;

use std::cmp::Ordering;
use std::sync::Arc;

use crate::analyzer::config::{Config, ParserKind};
use crate::dictionary::Dictionary;
use crate::parse::{decay, Parse};

/// Морфологический анализатор.
///
/// Применяет к слову цепочку стратегий разбора и возвращает варианты
/// по убыванию их правдоподобности.
///
/// # Примеры
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::fs::File;
/// use azmorph::{Analyzer, Config, Dictionary};
///
/// let dict = Dictionary::read(File::open("russian.dic")?)?;
/// let analyzer = Analyzer::new(dict);
/// for parse in analyzer.analyze("стали", &Config::default()) {
///     println!("{}\t{}\t{:.4}", parse, parse.tag(), parse.score());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Analyzer {
    dict: Arc<Dictionary>,
}

impl Analyzer {
    /// Создаёт анализатор, забирая словарь во владение.
    pub fn new(dict: Dictionary) -> Self {
        Self {
            dict: Arc::new(dict),
        }
    }

    /// Создаёт анализатор над разделяемым словарём.
    ///
    /// Несколько анализаторов в разных потоках могут использовать один
    /// словарь без копирования.
    pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
        Self { dict }
    }

    /// Словарь анализатора.
    #[inline(always)]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Производит морфологический разбор слова.
    ///
    /// Стратегии из настроек применяются по порядку. Как только найден
    /// хотя бы один вариант без исправлений, первый же терминальный шаг
    /// останавливает цепочку. Словарные варианты затем переоцениваются
    /// по статистике корпуса, и обе группы оценок нормализуются
    /// по отдельности.
    pub fn analyze<'a>(&'a self, word: &str, config: &Config) -> Vec<Parse<'a>> {
        let dict: &Dictionary = &self.dict;
        let mut parses = vec![];
        let mut matched = false;
        for step in &config.steps {
            let mut vars = parsers::run(step.kind, dict, word, config);
            for parse in &mut vars {
                parse.source = Some(step.kind);
                if parse.stutter_cnt() == 0 && parse.typos_cnt() == 0 {
                    matched = true;
                }
            }
            parses.append(&mut vars);
            if matched && step.terminal {
                break;
            }
        }

        if parses.is_empty() && config.force_parse {
            parses.push(Parse::plain(
                dict,
                word.to_lowercase(),
                dict.unknown_tag(),
                0.0,
            ));
        }

        // Переоценка словарных вариантов по частотам корпуса. Варианты
        // без статистики получают оценку 1 и нормализация ниже отдаёт
        // им остаток вероятности.
        let mut dictionary_total = 0.0;
        for parse in &mut parses {
            if parse.source == Some(ParserKind::Dictionary) {
                let key = format!("{}:{}", parse, parse.tag());
                parse.score = match dict.probability(&key) {
                    Some(freq) => {
                        f64::from(freq) / 1e6 * decay(parse.stutter_cnt(), parse.typos_cnt())
                    }
                    None => 1.0,
                };
                dictionary_total += parse.score;
            }
        }

        // Словарные и несловарные оценки нормализуются раздельно.
        if config.normalize_score {
            if dictionary_total > 0.0 {
                for parse in &mut parses {
                    if parse.source == Some(ParserKind::Dictionary) {
                        parse.score /= dictionary_total;
                    }
                }
            }
            let other_total: f64 = parses
                .iter()
                .filter(|p| p.source != Some(ParserKind::Dictionary))
                .map(|p| p.score)
                .sum();
            if other_total > 0.0 {
                for parse in &mut parses {
                    if parse.source != Some(ParserKind::Dictionary) {
                        parse.score /= other_total;
                    }
                }
            }
        }

        parses.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
        });
        parses
    }
}
