//! Небольшой словарь для тестов анализатора.

use crate::dictionary::builder::DictionaryBuilder;
use crate::dictionary::Dictionary;

const CONFIG: &str = r#"{ "knownPrefixes": ["псевдо"] }"#;

const GRAMMEMES: &str = r#"[
    ["POST", "", "ЧР", "часть речи"],
    ["NOUN", "POST", "СУЩ", "имя существительное"],
    ["ADJF", "POST", "ПРИЛ", "имя прилагательное"],
    ["VERB", "POST", "ГЛ", "глагол"],
    ["INFN", "POST", "ИНФ", "инфинитив"],
    ["ADVB", "POST", "Н", "наречие"],
    ["ANim", "", "Од-неод", "одушевлённость"],
    ["anim", "ANim", "од", "одушевлённое"],
    ["inan", "ANim", "неод", "неодушевлённое"],
    ["GNdr", "", "Род", "род"],
    ["masc", "GNdr", "мр", "мужской род"],
    ["femn", "GNdr", "жр", "женский род"],
    ["neut", "GNdr", "ср", "средний род"],
    ["NMbr", "", "Число", "число"],
    ["sing", "NMbr", "ед", "единственное число"],
    ["plur", "NMbr", "мн", "множественное число"],
    ["CAse", "", "Падеж", "падеж"],
    ["nomn", "CAse", "им", "именительный падеж"],
    ["gent", "CAse", "рд", "родительный падеж"],
    ["datv", "CAse", "дт", "дательный падеж"],
    ["accs", "CAse", "вн", "винительный падеж"],
    ["ablt", "CAse", "тв", "творительный падеж"],
    ["loct", "CAse", "пр", "предложный падеж"],
    ["TEns", "", "Время", "время"],
    ["past", "TEns", "прош", "прошедшее время"],
    ["PErs", "", "Лицо", "лицо"],
    ["2per", "PErs", "2л", "второе лицо"],
    ["MOod", "", "Накл", "наклонение"],
    ["impr", "MOod", "повел", "повелительное наклонение"],
    ["ASpc", "", "Вид", "вид"],
    ["perf", "ASpc", "сов", "совершенный вид"],
    ["impf", "ASpc", "несов", "несовершенный вид"],
    ["TRns", "", "Перех", "переходность"],
    ["tran", "TRns", "перех", "переходный"],
    ["intr", "TRns", "неперех", "непереходный"],
    ["Name", "", "имя", "имя собственное"],
    ["Abbr", "", "аббр", "аббревиатура"],
    ["Fixd", "", "0", "неизменяемое"],
    ["Sgtm", "", "sg", "только единственное число"],
    ["Init", "", "иниц", "инициал"]
]"#;

const GRAMTAB_INT: &str = r#"[
    "NOUN,inan,femn sing,nomn",
    "NOUN,inan,femn sing,gent",
    "VERB,perf,intr plur,past",
    "INFN,perf,intr",
    "NOUN,inan,masc sing,nomn",
    "NOUN,inan,masc sing,gent",
    "ADJF masc,sing,nomn",
    "ADJF masc,sing,datv",
    "VERB,impf,tran sing,impr,2per",
    "NOUN,anim,femn,Name sing,nomn",
    "NOUN,anim,masc sing,nomn",
    "NOUN,anim,masc plur,gent"
]"#;

const GRAMTAB_EXT: &str = r#"[
    "СУЩ,неод,жр ед,им",
    "СУЩ,неод,жр ед,рд",
    "ГЛ,сов,неперех мн,прош",
    "ИНФ,сов,неперех",
    "СУЩ,неод,мр ед,им",
    "СУЩ,неод,мр ед,рд",
    "ПРИЛ мр,ед,им",
    "ПРИЛ мр,ед,дт",
    "ГЛ,несов,перех ед,повел,2л",
    "СУЩ,од,жр,имя ед,им",
    "СУЩ,од,мр ед,им",
    "СУЩ,од,мр мн,рд"
]"#;

const SUFFIXES: &str = r#"["", "ь", "и", "ть", "ли", "а", "ый", "ому", "ов"]"#;

const WORDS: &str = "\
сталь,0,0
стали,0,1
стать,1,0
стали,1,1
магазин,2,0
магазина,2,1
интернет,3,0
интернета,3,1
западный,4,0
западному,4,1
смотри,5,0
саша,6,0
кот,7,0
котов,7,1
ёж,8,0
";

// Для теста каскадного порога: длинный суффикс находится, суффикс
// на две буквы короче уже не проверяется.
const PREDICTION_SUFFIXES_0: &str = "\
аглот,7,7,0
лот,3,7,0
";

const PROBABILITIES: &str = "\
\"стали:VERB,perf,intr plur,past\",700000
\"стали:NOUN,inan,femn sing,gent\",300000
";

fn paradigm_bytes(paradigms: &[&[u16]]) -> Vec<u8> {
    let mut words = vec![u16::try_from(paradigms.len()).unwrap()];
    for p in paradigms {
        words.push(u16::try_from(p.len()).unwrap());
        words.extend_from_slice(p);
    }
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Собирает тестовый словарь, при необходимости со статистикой частот.
pub(crate) fn dictionary(with_probabilities: bool) -> Dictionary {
    let paradigms = paradigm_bytes(&[
        // сталь, стали
        &[1, 2, 0, 1, 0, 0],
        // стать, стали
        &[3, 4, 3, 2, 0, 0],
        // магазин, магазина
        &[0, 5, 4, 5, 0, 0],
        // интернет, интернета
        &[0, 5, 4, 5, 0, 0],
        // западный, западному
        &[6, 7, 6, 7, 0, 0],
        // смотри
        &[0, 8, 0],
        // саша
        &[0, 9, 0],
        // кот, котов
        &[0, 8, 10, 11, 0, 0],
        // ёж
        &[0, 10, 0],
    ]);
    let mut builder = DictionaryBuilder::new()
        .read_config(CONFIG.as_bytes())
        .unwrap()
        .read_grammemes(GRAMMEMES.as_bytes())
        .unwrap()
        .read_gramtab_int(GRAMTAB_INT.as_bytes())
        .unwrap()
        .read_gramtab_ext(GRAMTAB_EXT.as_bytes())
        .unwrap()
        .read_suffixes(SUFFIXES.as_bytes())
        .unwrap()
        .read_paradigms(paradigms.as_slice())
        .unwrap()
        .read_words(WORDS.as_bytes())
        .unwrap()
        .read_prediction_suffixes(PREDICTION_SUFFIXES_0.as_bytes())
        .unwrap()
        .read_prediction_suffixes(&b""[..])
        .unwrap()
        .read_prediction_suffixes(&b""[..])
        .unwrap();
    if with_probabilities {
        builder = builder.read_probabilities(PROBABILITIES.as_bytes()).unwrap();
    }
    builder.build().unwrap()
}
