//! Сборка словаря из исходного словарного пакета.
//!
//! Пакет состоит из текстовых и двоичных файлов, полученных из словаря
//! OpenCorpora: списков граммем и тегов в JSON, парадигм в двоичном
//! виде и словоформ в CSV. Построитель читает их в произвольном порядке
//! и собирает готовый [`Dictionary`].

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use crate::dictionary::map::{
    FormRef, FreqMap, SuffixMap, SuffixMapBuilder, WordMap, WordMapBuilder,
};
use crate::dictionary::paradigm::Paradigms;
use crate::dictionary::{Dictionary, DictionaryInner};
use crate::errors::{AzmorphError, Result};
use crate::utils;

/// Настройки словарного пакета.
///
/// Все поля необязательны: значения по умолчанию соответствуют
/// словарю OpenCorpora для русского языка.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct BundleConfig {
    known_prefixes: Vec<String>,
    particles: Vec<String>,
    initials: String,
    replacements: BTreeMap<String, String>,
    paradigm_prefixes: Vec<String>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            known_prefixes: vec![],
            particles: ["-то", "-ка", "-таки", "-де", "-тко", "-тка", "-с", "-ста"]
                .map(String::from)
                .to_vec(),
            initials: "АБВГДЕЁЖЗИКЛМНОПРСТУФХЦЧШЩЭЮЯ".to_string(),
            replacements: BTreeMap::from([("е".to_string(), "ё".to_string())]),
            paradigm_prefixes: ["", "по", "наи"].map(String::from).to_vec(),
        }
    }
}

fn single_char(arg: &'static str, s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(AzmorphError::invalid_format(
            arg,
            format!("expected a single character, got {s:?}"),
        )),
    }
}

/// Построитель словаря из словарного пакета.
pub struct DictionaryBuilder {
    config: BundleConfig,
    grammeme_rows: Option<Vec<[String; 4]>>,
    gramtab_int: Option<Vec<String>>,
    gramtab_ext: Vec<String>,
    suffixes: Option<Vec<String>>,
    paradigms: Option<Paradigms>,
    words: Option<WordMap>,
    prediction_suffixes: Vec<SuffixMap>,
    probabilities: Option<FreqMap>,
}

impl DictionaryBuilder {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            config: BundleConfig::default(),
            grammeme_rows: None,
            gramtab_int: None,
            gramtab_ext: vec![],
            suffixes: None,
            paradigms: None,
            words: None,
            prediction_suffixes: vec![],
            probabilities: None,
        }
    }

    /// Читает настройки пакета (`config.json`).
    ///
    /// Этот шаг необязателен: без него действуют настройки словаря
    /// OpenCorpora по умолчанию.
    pub fn read_config<R>(mut self, rdr: R) -> Result<Self>
    where
        R: Read,
    {
        self.config = serde_json::from_reader(rdr)?;
        Ok(self)
    }

    /// Читает описания граммем (`grammemes.json`): массив четвёрок
    /// [внутреннее обозначение, родитель, внешнее обозначение, название].
    pub fn read_grammemes<R>(mut self, rdr: R) -> Result<Self>
    where
        R: Read,
    {
        self.grammeme_rows = Some(serde_json::from_reader(rdr)?);
        Ok(self)
    }

    /// Читает внутренний грамтаб (`gramtab-opencorpora-int.json`).
    pub fn read_gramtab_int<R>(mut self, rdr: R) -> Result<Self>
    where
        R: Read,
    {
        self.gramtab_int = Some(serde_json::from_reader(rdr)?);
        Ok(self)
    }

    /// Читает внешний грамтаб (`gramtab-opencorpora-ext.json`).
    pub fn read_gramtab_ext<R>(mut self, rdr: R) -> Result<Self>
    where
        R: Read,
    {
        self.gramtab_ext = serde_json::from_reader(rdr)?;
        Ok(self)
    }

    /// Читает суффиксы форм (`suffixes.json`).
    pub fn read_suffixes<R>(mut self, rdr: R) -> Result<Self>
    where
        R: Read,
    {
        self.suffixes = Some(serde_json::from_reader(rdr)?);
        Ok(self)
    }

    /// Читает двоичный файл парадигм (`paradigms.array`).
    pub fn read_paradigms<R>(mut self, mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut data = vec![];
        rdr.read_to_end(&mut data)?;
        self.paradigms = Some(Paradigms::from_bytes(&data)?);
        Ok(self)
    }

    /// Читает словоформы (`words.csv`): строки вида
    /// `словоформа,парадигма,форма`.
    pub fn read_words<R>(mut self, mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut text = String::new();
        rdr.read_to_string(&mut text)?;
        let mut builder = WordMapBuilder::new();
        for line in text.lines().filter(|l| !l.is_empty()) {
            let fields = utils::parse_csv_row(line);
            if fields.len() != 3 {
                return Err(AzmorphError::invalid_format(
                    "words",
                    format!("expected 3 fields, got {line:?}"),
                ));
            }
            builder.add_record(
                fields[0].clone(),
                FormRef::new(fields[1].parse()?, fields[2].parse()?),
            );
        }
        self.words = Some(builder.build()?);
        Ok(self)
    }

    /// Читает одну карту предсказательных суффиксов
    /// (`prediction-suffixes-N.csv`): строки вида
    /// `суффикс,частота,парадигма,форма`.
    ///
    /// Вызывается по одному разу на каждую приставку парадигм, в порядке
    /// приставок.
    pub fn read_prediction_suffixes<R>(mut self, mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut text = String::new();
        rdr.read_to_string(&mut text)?;
        let mut builder = SuffixMapBuilder::new();
        for line in text.lines().filter(|l| !l.is_empty()) {
            let fields = utils::parse_csv_row(line);
            if fields.len() != 4 {
                return Err(AzmorphError::invalid_format(
                    "prediction_suffixes",
                    format!("expected 4 fields, got {line:?}"),
                ));
            }
            builder.add_record(
                fields[0].clone(),
                fields[1].parse()?,
                FormRef::new(fields[2].parse()?, fields[3].parse()?),
            );
        }
        self.prediction_suffixes.push(builder.build()?);
        Ok(self)
    }

    /// Читает статистику частот (`p_t_given_w.csv`): строки вида
    /// `"слово:тег",частота`. Ключ содержит запятые из тега, поэтому
    /// должен быть заключён в кавычки.
    pub fn read_probabilities<R>(mut self, mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut text = String::new();
        rdr.read_to_string(&mut text)?;
        let mut records = vec![];
        for line in text.lines().filter(|l| !l.is_empty()) {
            let fields = utils::parse_csv_row(line);
            if fields.len() != 2 {
                return Err(AzmorphError::invalid_format(
                    "probabilities",
                    format!("expected 2 fields, got {line:?}"),
                ));
            }
            records.push((fields[0].clone(), fields[1].parse::<u32>()?));
        }
        self.probabilities = Some(FreqMap::from_records(records)?);
        Ok(self)
    }

    fn require<T>(value: Option<T>, what: &str) -> Result<T> {
        value.ok_or_else(|| {
            AzmorphError::invalid_state(
                "the dictionary bundle is incomplete",
                format!("{what} has not been loaded"),
            )
        })
    }

    /// Собирает словарь из прочитанных частей.
    pub fn build(self) -> Result<Dictionary> {
        let config = self.config;
        if self.prediction_suffixes.len() != config.paradigm_prefixes.len() {
            return Err(AzmorphError::invalid_state(
                "the dictionary bundle is incomplete",
                format!(
                    "{} prediction suffix maps loaded for {} paradigm prefixes",
                    self.prediction_suffixes.len(),
                    config.paradigm_prefixes.len()
                ),
            ));
        }
        let mut replacements = vec![];
        for (from, to) in &config.replacements {
            replacements.push((
                single_char("replacements", from)?,
                single_char("replacements", to)?,
            ));
        }
        let inner = DictionaryInner {
            words: Self::require(self.words, "words.csv")?,
            prediction_suffixes: self.prediction_suffixes,
            probabilities: self.probabilities,
            paradigms: Self::require(self.paradigms, "paradigms.array")?,
            suffixes: Self::require(self.suffixes, "suffixes.json")?,
            paradigm_prefixes: config.paradigm_prefixes,
            gramtab_int: Self::require(self.gramtab_int, "gramtab-opencorpora-int.json")?,
            gramtab_ext: self.gramtab_ext,
            grammeme_rows: Self::require(self.grammeme_rows, "grammemes.json")?,
            known_prefixes: config.known_prefixes,
            particles: config.particles,
            initials: config.initials,
            replacements,
        };
        Dictionary::from_inner(inner)
    }
}
