//! Стратегии разбора слова.
//!
//! Каждая стратегия независимо предлагает варианты разбора: словарные
//! слова, числа, пунктуация, составные слова через дефис и предсказания
//! по приставкам и окончаниям. Порядок применения задаётся цепочкой в
//! настройках разбора.

use std::sync::LazyLock;

use hashbrown::HashSet;
use regex::Regex;

use crate::analyzer::config::{Config, ParserKind};
use crate::dictionary::tag::{Tag, TagCriteria};
use crate::dictionary::Dictionary;
use crate::parse::Parse;

static INT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[−-]?[0-9]+$").unwrap());
static REAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[−-]?([0-9]*[.,][0-9]+)$").unwrap());
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"^[\u{2000}-\u{206F}\u{2E00}-\u{2E7F}\\'!"#$%&()*+,\-./:;<=>?@\[\]\^_`{|}~]+$"##)
        .unwrap()
});
static ROMAN_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").unwrap()
});
// Слово достаточно лишь оканчивается латинской буквой.
static LATIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{024F}]$").unwrap()
});

/// Запускает стратегию на слове.
pub(crate) fn run<'d>(
    kind: ParserKind,
    dict: &'d Dictionary,
    word: &str,
    config: &Config,
) -> Vec<Parse<'d>> {
    match kind {
        ParserKind::Dictionary => dictionary(dict, word, config),
        ParserKind::AbbrName | ParserKind::AbbrPatronymic => initials(dict, word, config),
        ParserKind::IntNumber => regexp(dict, word, config, &INT_NUMBER, dict.number_int_tag()),
        ParserKind::RealNumber => regexp(dict, word, config, &REAL_NUMBER, dict.number_real_tag()),
        ParserKind::Punctuation => regexp(dict, word, config, &PUNCTUATION, dict.punctuation_tag()),
        ParserKind::RomanNumber => regexp(dict, word, config, &ROMAN_NUMBER, dict.roman_tag()),
        ParserKind::Latin => regexp(dict, word, config, &LATIN, dict.latin_tag()),
        ParserKind::HyphenParticle => hyphen_particle(dict, word, config),
        ParserKind::HyphenAdverb => hyphen_adverb(dict, word, config),
        ParserKind::HyphenWords => hyphen_words(dict, word, config),
        ParserKind::PrefixKnown => prefix_known(dict, word, config),
        ParserKind::PrefixUnknown => prefix_unknown(dict, word, config),
        ParserKind::SuffixKnown => suffix_known(dict, word, config),
        ParserKind::Abbr => abbr(dict, word, config),
    }
}

/// Написано ли слово с заглавной буквы.
///
/// Слова из одних заглавных букв (и одиночные заглавные буквы) сюда не
/// попадают: это аббревиатуры и инициалы.
fn capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    first.is_uppercase() && rest.to_uppercase() != rest
}

/// Словарные слова.
///
/// Имена собственные отбрасываются, если слово написано со строчной
/// буквы и регистр не игнорируется.
fn dictionary<'d>(dict: &'d Dictionary, word: &str, config: &Config) -> Vec<Parse<'d>> {
    let is_cap = !config.ignore_case && capitalized(word);
    let lower = word.to_lowercase();
    let mut parses = vec![];
    for (surface, forms) in dict.find_word(&lower) {
        for form in forms {
            let parse = Parse::from_dictionary(dict, surface.clone(), form, 0, 0);
            if config.ignore_case || !parse.tag().is_capitalized() || is_cap {
                parses.push(parse);
            }
        }
    }
    parses
}

/// Несклоняемые аббревиатуры: ВК, ОАО, ЛенСпецСМУ.
fn abbr<'d>(dict: &'d Dictionary, word: &str, config: &Config) -> Vec<Parse<'d>> {
    let char_count = word.chars().count();
    // Однобуквенные считаются инициалами, дефисов в аббревиатуре не бывает.
    if char_count < 2 || word.contains('-') {
        return vec![];
    }
    let initials = dict.initials();
    let first = word.chars().next().unwrap();
    let last = word.chars().next_back().unwrap();
    // Первая и последняя буквы заглавные: сокращения типа iOS мало
    // распространены, а сокращение с маленькой последней буквой,
    // вероятно, склоняется.
    if initials.contains(first) && initials.contains(last) {
        let caps = word.chars().filter(|c| initials.contains(*c)).count();
        if caps <= 5 {
            return dict
                .abbr_tags()
                .iter()
                .map(|tag| Parse::plain(dict, word.to_string(), tag, 0.5))
                .collect();
        }
    }
    // При игнорировании регистра разбираются только короткие
    // аббревиатуры из одних «инициальных» букв.
    if !config.ignore_case || char_count > 5 {
        return vec![];
    }
    let upper = word.to_uppercase();
    if upper.chars().any(|c| !initials.contains(c)) {
        return vec![];
    }
    dict.abbr_tags()
        .iter()
        .map(|tag| Parse::plain(dict, upper.clone(), tag, 0.2))
        .collect()
}

/// Инициалы имени или отчества.
fn initials<'d>(dict: &'d Dictionary, word: &str, config: &Config) -> Vec<Parse<'d>> {
    if word.chars().count() != 1 {
        return vec![];
    }
    let word = if config.ignore_case {
        word.to_uppercase()
    } else {
        word.to_string()
    };
    if !dict.initials().contains(word.as_str()) {
        return vec![];
    }
    dict.initials_tags()
        .iter()
        .map(|tag| Parse::plain(dict, word.clone(), tag, 0.1))
        .collect()
}

/// Слова, целиком описываемые регулярным выражением.
fn regexp<'d>(
    dict: &'d Dictionary,
    word: &str,
    config: &Config,
    re: &Regex,
    tag: &'d Tag,
) -> Vec<Parse<'d>> {
    let word = if config.ignore_case {
        word.to_uppercase()
    } else {
        word.to_string()
    };
    if !word.is_empty() && re.is_match(&word) {
        vec![Parse::plain(dict, word, tag, 0.9)]
    } else {
        vec![]
    }
}

/// Слово с отделяемой частицей: «смотри-ка».
fn hyphen_particle<'d>(dict: &'d Dictionary, word: &str, _config: &Config) -> Vec<Parse<'d>> {
    let word = word.to_lowercase();
    let mut parses = vec![];
    for particle in dict.particles() {
        if let Some(base) = word.strip_suffix(particle.as_str()) {
            for (surface, forms) in dict.find_word(base) {
                for form in forms {
                    let mut parse = Parse::from_dictionary(dict, surface.clone(), form, 0, 0);
                    parse.set_suffix(particle.clone());
                    parse.score *= 0.9;
                    parses.push(parse);
                }
            }
        }
    }
    parses
}

/// Наречия, образованные от прилагательных приставкой «по-»:
/// «по-западному».
fn hyphen_adverb<'d>(dict: &'d Dictionary, word: &str, _config: &Config) -> Vec<Parse<'d>> {
    let word = word.to_lowercase();
    if word.chars().count() < 5 || !word.starts_with("по-") {
        return vec![];
    }
    let rest = &word["по-".len()..];
    let k = dict.known_ids();
    let criteria = [k.adjf, k.sing, k.datv];
    let mut parses = vec![];
    let mut used = HashSet::new();
    for (surface, forms) in dict.find_word(rest) {
        if used.contains(&surface) {
            continue;
        }
        for form in forms {
            let parse = Parse::from_dictionary(dict, surface.clone(), form, 0, 0);
            if parse.matches(TagCriteria::Has(&criteria)) {
                parses.push(Parse::plain_with_counts(
                    dict,
                    format!("по-{surface}"),
                    dict.adverb_tag(),
                    parse.score() * 0.9,
                    parse.stutter_cnt(),
                    parse.typos_cnt(),
                ));
                used.insert(surface);
                break;
            }
        }
    }
    parses
}

/// Составные слова через дефис: «интернет-магазин»,
/// «компания-производитель».
fn hyphen_words<'d>(dict: &'d Dictionary, word: &str, config: &Config) -> Vec<Parse<'d>> {
    let word = word.to_lowercase();
    for prefix in dict.known_prefixes() {
        if prefix.ends_with('-') && word.starts_with(prefix.as_str()) {
            return vec![];
        }
    }
    let parts: Vec<&str> = word.split('-').collect();
    let mut parses = vec![];
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        // Три и более частей: разбирается последняя, остаток считается
        // неизменяемым префиксом.
        if parts.len() > 2 {
            let end = parts[parts.len() - 1];
            for mut right in dictionary(dict, end, config) {
                if right.is_dictionary() {
                    right.score *= 0.2;
                    right.set_prefix(word[..word.len() - end.len()].to_string());
                    parses.push(right);
                }
            }
        }
        return parses;
    }
    let left = dictionary(dict, parts[0], config);
    let right = dictionary(dict, parts[1], config);

    // Склоняемая пара: обе части согласованы и склоняются вместе.
    let cats = dict.known_ids().agreement();
    let abbr_id = dict.known_ids().abbr;
    for l in &left {
        if l.tag().has(abbr_id) {
            continue;
        }
        for r in &right {
            if !l.matches(TagCriteria::Agree(r.tag(), &cats)) {
                continue;
            }
            if l.stutter_cnt() + r.stutter_cnt() > config.stutter_limit
                || l.typos_cnt() + r.typos_cnt() > config.typo_limit
            {
                continue;
            }
            parses.push(Parse::combined(l.clone(), r.clone()));
        }
    }
    // Неизменяемая левая часть: склоняется только правая.
    for mut r in right {
        if r.is_dictionary() {
            r.score *= 0.3;
            r.set_prefix(format!("{}-", parts[0]));
            parses.push(r);
        }
    }
    parses
}

/// Известная приставка плюс словарное слово: «псевдокот».
fn prefix_known<'d>(dict: &'d Dictionary, word: &str, config: &Config) -> Vec<Parse<'d>> {
    let is_cap = !config.ignore_case && capitalized(word);
    let lower = word.to_lowercase();
    let word_chars = lower.chars().count();
    let mut parses = vec![];
    for prefix in dict.known_prefixes() {
        // После отделения приставки должно оставаться хотя бы 3 буквы.
        if word_chars < prefix.chars().count() + 3 {
            continue;
        }
        if let Some(end) = lower.strip_prefix(prefix.as_str()) {
            for mut right in dictionary(dict, end, config) {
                if !right.tag().is_productive() {
                    continue;
                }
                if !config.ignore_case && right.tag().is_capitalized() && !is_cap {
                    continue;
                }
                right.score *= 0.7;
                right.set_prefix(prefix.clone());
                parses.push(right);
            }
        }
    }
    parses
}

/// Произвольная приставка длиной до 5 букв плюс словарное слово.
fn prefix_unknown<'d>(dict: &'d Dictionary, word: &str, config: &Config) -> Vec<Parse<'d>> {
    let is_cap = !config.ignore_case && capitalized(word);
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    let mut parses = vec![];
    for len in 1..=5usize {
        if chars.len() < len + 3 {
            break;
        }
        let end: String = chars[len..].iter().collect();
        for mut right in dictionary(dict, &end, config) {
            if !right.tag().is_productive() {
                continue;
            }
            if !config.ignore_case && right.tag().is_capitalized() && !is_cap {
                continue;
            }
            right.score *= 0.3;
            right.set_prefix(chars[..len].iter().collect());
            parses.push(right);
        }
    }
    parses
}

/// Предсказание по окончанию слова.
///
/// Перебираются окончания от 5 букв и короче; найдя подходящее
/// окончание, стратегия проверяет ещё и то, что на букву короче.
fn suffix_known<'d>(dict: &'d Dictionary, word: &str, config: &Config) -> Vec<Parse<'d>> {
    if word.chars().count() < 4 {
        return vec![];
    }
    let is_cap = !config.ignore_case && capitalized(word);
    let lower = word.to_lowercase();
    let coeffs = [0.0, 0.2, 0.3, 0.4, 0.5, 0.6];
    let mut minlen = 1usize;
    let mut used = HashSet::new();
    let mut parses = vec![];
    for (i, pp) in dict.paradigm_prefixes().iter().enumerate() {
        if !pp.is_empty() && !lower.starts_with(pp.as_str()) {
            continue;
        }
        let base: Vec<char> = lower[pp.len()..].chars().collect();
        let mut len = 5usize;
        while len >= minlen {
            if len >= base.len() {
                len -= 1;
                continue;
            }
            let left: String = base[..base.len() - len].iter().collect();
            let right: String = base[base.len() - len..].iter().collect();
            let mut batch = vec![];
            let mut max = 1.0f64;
            for (found, entries) in
                dict.prediction_suffixes()[i].find_all(&right, dict.replacements())
            {
                for entry in entries {
                    let parse = Parse::from_dictionary(
                        dict,
                        format!("{pp}{left}{found}"),
                        entry.form,
                        0,
                        0,
                    );
                    // В картах предсказаний попадаются и непродуктивные
                    // формы, они отбрасываются.
                    if !parse.tag().is_productive() {
                        continue;
                    }
                    if !config.ignore_case && parse.tag().is_capitalized() && !is_cap {
                        continue;
                    }
                    let key = format!(
                        "{parse}:{}:{}",
                        entry.form.paradigm_id, entry.form.form_idx
                    );
                    if used.contains(&key) {
                        continue;
                    }
                    max = max.max(f64::from(entry.count));
                    let mut parse = parse;
                    parse.score = f64::from(entry.count) * coeffs[len];
                    batch.push(parse);
                    used.insert(key);
                }
            }
            if !batch.is_empty() {
                for p in &mut batch {
                    p.score /= max;
                }
                parses.append(&mut batch);
                minlen = (len - 1).max(1);
            }
            len -= 1;
        }
    }
    parses
}
