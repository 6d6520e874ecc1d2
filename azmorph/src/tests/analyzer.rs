use crate::analyzer::config::{Config, ParserKind};
use crate::analyzer::Analyzer;
use crate::tests::fixture;

fn raw_config() -> Config {
    Config {
        normalize_score: false,
        ..Config::default()
    }
}

/// Словарное слово разбирается дословно и получает нормированные оценки.
#[test]
fn test_dictionary_word() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("магазин", &Config::default());
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].word(), "магазин");
    assert_eq!(parses[0].tag().to_string(), "NOUN,inan,masc sing,nomn");
    assert_eq!(parses[0].source(), Some(ParserKind::Dictionary));
    assert!((parses[0].score() - 1.0).abs() < 1e-9);
}

/// Без статистики омонимы делят вероятность поровну.
#[test]
fn test_ambiguous_without_statistics() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("стали", &Config::default());
    assert_eq!(parses.len(), 2);
    assert!((parses[0].score() - 0.5).abs() < 1e-9);
    assert!((parses[1].score() - 0.5).abs() < 1e-9);
    let total: f64 = parses.iter().map(|p| p.score()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

/// Со статистикой частот оценки пропорциональны корпусу и убывают.
#[test]
fn test_ambiguous_with_statistics() {
    let analyzer = Analyzer::new(fixture::dictionary(true));
    let parses = analyzer.analyze("стали", &Config::default());
    assert_eq!(parses.len(), 2);
    assert_eq!(parses[0].tag().to_string(), "VERB,perf,intr plur,past");
    assert!((parses[0].score() - 0.7).abs() < 1e-9);
    assert_eq!(parses[1].tag().to_string(), "NOUN,inan,femn sing,gent");
    assert!((parses[1].score() - 0.3).abs() < 1e-9);
}

/// Нормализация глагольной формы даёт инфинитив.
#[test]
fn test_normalize_verb() {
    let analyzer = Analyzer::new(fixture::dictionary(true));
    let parses = analyzer.analyze("стали", &Config::default());
    let normalized = parses[0].normalize(false).unwrap();
    assert_eq!(normalized.word(), "стать");
    assert_eq!(normalized.tag().to_string(), "INFN,perf,intr");
}

/// Склонение к уже имеющемуся тегу возвращает ту же поверхностную форму.
#[test]
fn test_inflect_to_own_tag() {
    let analyzer = Analyzer::new(fixture::dictionary(true));
    let parses = analyzer.analyze("стали", &Config::default());
    let verb = &parses[0];
    assert_eq!(verb.tag().to_string(), "VERB,perf,intr plur,past");
    let ids = [
        analyzer.dictionary().grammemes().id("plur").unwrap(),
        analyzer.dictionary().grammemes().id("past").unwrap(),
    ];
    let same = verb
        .inflect(crate::parse::InflectTarget::Criteria(
            crate::dictionary::tag::TagCriteria::Has(&ids),
        ))
        .unwrap();
    assert_eq!(same.to_string(), verb.to_string());
    assert_eq!(same.tag(), verb.tag());
}

/// Имена собственные не разбираются со строчной буквы.
#[test]
fn test_capitalization_gating() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    assert!(analyzer.analyze("саша", &Config::default()).is_empty());

    let parses = analyzer.analyze("Саша", &Config::default());
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].word(), "саша");

    let ignore_case = Config {
        ignore_case: true,
        ..Config::default()
    };
    assert!(!analyzer.analyze("саша", &ignore_case).is_empty());
}

/// Буква «е» в запросе находит словарное слово с «ё».
#[test]
fn test_yo_replacement() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("еж", &Config::default());
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].word(), "ёж");
}

/// Составное слово через дефис: согласованная пара плюс вариант
/// с неизменяемой левой частью.
#[test]
fn test_hyphen_words() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("интернет-магазин", &raw_config());
    assert_eq!(parses.len(), 2);

    assert_eq!(parses[0].to_string(), "интернет-магазин");
    assert_eq!(parses[0].source(), Some(ParserKind::HyphenWords));
    assert!((parses[0].score() - 0.8).abs() < 1e-9);

    assert_eq!(parses[1].to_string(), "интернет-магазин");
    assert_eq!(parses[1].word(), "магазин");
    assert!((parses[1].score() - 0.3).abs() < 1e-9);
}

/// Составное слово склоняется целиком.
#[test]
fn test_hyphen_words_inflect() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("интернет-магазин", &raw_config());
    let ids = [
        analyzer.dictionary().grammemes().id("sing").unwrap(),
        analyzer.dictionary().grammemes().id("gent").unwrap(),
    ];
    let genitive = parses[0]
        .inflect(crate::parse::InflectTarget::Criteria(
            crate::dictionary::tag::TagCriteria::Has(&ids),
        ))
        .unwrap();
    assert_eq!(genitive.to_string(), "интернета-магазина");
}

/// Частица отделяется дефисом и сохраняется в поверхностной форме.
#[test]
fn test_hyphen_particle() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("смотри-ка", &raw_config());
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].word(), "смотри");
    assert_eq!(parses[0].to_string(), "смотри-ка");
    assert!((parses[0].score() - 0.9).abs() < 1e-9);
}

/// Приставка «по-» с прилагательным в дательном падеже даёт наречие.
#[test]
fn test_hyphen_adverb() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("по-западному", &raw_config());
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].word(), "по-западному");
    assert_eq!(parses[0].tag().to_string(), "ADVB");
    assert!((parses[0].score() - 0.9).abs() < 1e-9);
}

/// Известная приставка отделяется, оценка умножается на 0.7.
#[test]
fn test_prefix_known() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("псевдомагазин", &raw_config());
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].word(), "магазин");
    assert_eq!(parses[0].to_string(), "псевдомагазин");
    assert_eq!(parses[0].source(), Some(ParserKind::PrefixKnown));
    assert!((parses[0].score() - 0.7).abs() < 1e-9);
}

/// Произвольная приставка до 5 букв, оценка умножается на 0.3.
#[test]
fn test_prefix_unknown() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("лжемагазин", &raw_config());
    assert!(!parses.is_empty());
    assert_eq!(parses[0].word(), "магазин");
    assert_eq!(parses[0].to_string(), "лжемагазин");
    assert_eq!(parses[0].source(), Some(ParserKind::PrefixUnknown));
    assert!((parses[0].score() - 0.3).abs() < 1e-9);
}

/// Предсказание по окончанию: найдя длинный суффикс, стратегия не
/// опускается больше чем на одну букву.
#[test]
fn test_suffix_prediction_floor() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("бармаглот", &raw_config());
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].word(), "бармаглот");
    assert_eq!(parses[0].tag().to_string(), "NOUN,anim,masc sing,nomn");
    assert_eq!(parses[0].source(), Some(ParserKind::SuffixKnown));
    assert!((parses[0].score() - 0.6).abs() < 1e-9);
}

/// Числа, пунктуация и латиница получают фиксированную оценку 0.9.
#[test]
fn test_plain_token_parsers() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let config = raw_config();

    let int = analyzer.analyze("123", &config);
    assert_eq!(int.len(), 1);
    assert_eq!(int[0].tag().to_string(), "NUMB,intg");
    assert!((int[0].score() - 0.9).abs() < 1e-9);

    let real = analyzer.analyze("-3,14", &config);
    assert_eq!(real[0].tag().to_string(), "NUMB,real");

    let punct = analyzer.analyze("?!", &config);
    assert_eq!(punct[0].tag().to_string(), "PNCT");

    let latin = analyzer.analyze("word", &config);
    assert_eq!(latin[0].tag().to_string(), "LATN");

    // Римское число совпадает и с римским парсером, и с латиницей.
    let roman = analyzer.analyze("XIV", &config);
    assert_eq!(roman.len(), 2);
    assert_eq!(roman[0].tag().to_string(), "ROMN");
    assert_eq!(roman[1].tag().to_string(), "LATN");
}

/// Несловарные оценки нормализуются отдельно: их сумма равна единице,
/// порядок вариантов сохраняется.
#[test]
fn test_non_dictionary_normalization() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("XIV", &Config::default());
    assert_eq!(parses.len(), 2);
    assert_eq!(parses[0].tag().to_string(), "ROMN");
    assert_eq!(parses[1].tag().to_string(), "LATN");
    let total: f64 = parses.iter().map(|p| p.score()).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!((parses[0].score() - 0.5).abs() < 1e-9);
}

/// Аббревиатуры из заглавных букв получают полный набор падежных тегов.
#[test]
fn test_abbr() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("ВК", &raw_config());
    assert_eq!(parses.len(), 36);
    let abbr = analyzer.dictionary().grammemes().id("Abbr").unwrap();
    assert!(parses.iter().all(|p| p.tag().has(abbr)));
    assert!(parses.iter().all(|p| (p.score() - 0.5).abs() < 1e-9));
}

/// Одиночная заглавная буква разбирается как инициал имени и отчества.
#[test]
fn test_initials() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("Д", &raw_config());
    assert_eq!(parses.len(), 24);
    let init = analyzer.dictionary().grammemes().id("Init").unwrap();
    assert!(parses.iter().all(|p| p.tag().has(init)));
}

/// Принудительный разбор возвращает неизвестное слово с нулевой оценкой.
#[test]
fn test_force_parse() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    assert!(analyzer.analyze("ъъ", &Config::default()).is_empty());

    let force = Config {
        force_parse: true,
        ..Config::default()
    };
    let parses = analyzer.analyze("Ъъ", &force);
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].word(), "ъъ");
    assert_eq!(parses[0].tag().to_string(), "UNKN");
    assert_eq!(parses[0].score(), 0.0);
}

/// Внешнее представление тега загружается из внешнего грамтаба.
#[test]
fn test_ext_tags() {
    let analyzer = Analyzer::new(fixture::dictionary(false));
    let parses = analyzer.analyze("магазин", &Config::default());
    let ext = parses[0].tag().ext().unwrap();
    assert_eq!(ext.to_string(), "СУЩ,неод,мр ед,им");
}

/// Скомпилированный словарь переживает запись и чтение.
#[test]
fn test_model_roundtrip() {
    let dict = fixture::dictionary(true);
    let mut model = vec![];
    dict.write(&mut model).unwrap();

    let analyzer = Analyzer::new(crate::Dictionary::read(model.as_slice()).unwrap());
    let parses = analyzer.analyze("стали", &Config::default());
    assert_eq!(parses.len(), 2);
    assert!((parses[0].score() - 0.7).abs() < 1e-9);
}
