//! Словарь морфологического анализатора.
//!
//! Словарь объединяет поисковые структуры по словоформам, парадигмы,
//! реестр граммем и разобранные теги. Скомпилированный словарь хранится
//! в одном файле и загружается целиком.

pub mod builder;
pub mod grammeme;
pub mod map;
pub mod paradigm;
pub mod tag;

use std::io::{Read, Write};

use bincode::{Decode, Encode};

use crate::common;
use crate::dictionary::grammeme::{GrammemeId, GrammemeSet};
use crate::dictionary::map::{FormRef, FreqMap, SuffixMap, WordMap};
use crate::dictionary::paradigm::{Paradigm, Paradigms};
use crate::dictionary::tag::Tag;
use crate::errors::{AzmorphError, Result};

/// Магическая последовательность скомпилированного словаря.
const MODEL_MAGIC: &[u8] = b"AzmorphDictionary 0.1\n";

/// Род, число и падеж аббревиатур-существительных.
const ABBR_GENDERS: [(&str, &str); 3] = [("masc", "мр"), ("femn", "жр"), ("neut", "ср")];
const ABBR_NUMBERS: [(&str, &str); 2] = [("sing", "ед"), ("plur", "мн")];
const ABBR_CASES: [(&str, &str); 6] = [
    ("nomn", "им"),
    ("gent", "рд"),
    ("datv", "дт"),
    ("accs", "вн"),
    ("ablt", "тв"),
    ("loct", "пр"),
];

/// Сериализуемая часть словаря.
#[derive(Decode, Encode)]
pub(crate) struct DictionaryInner {
    pub(crate) words: WordMap,
    pub(crate) prediction_suffixes: Vec<SuffixMap>,
    pub(crate) probabilities: Option<FreqMap>,
    pub(crate) paradigms: Paradigms,
    pub(crate) suffixes: Vec<String>,
    pub(crate) paradigm_prefixes: Vec<String>,
    pub(crate) gramtab_int: Vec<String>,
    pub(crate) gramtab_ext: Vec<String>,
    pub(crate) grammeme_rows: Vec<[String; 4]>,
    pub(crate) known_prefixes: Vec<String>,
    pub(crate) particles: Vec<String>,
    pub(crate) initials: String,
    pub(crate) replacements: Vec<(char, char)>,
}

/// Идентификаторы часто используемых граммем.
///
/// Все они регистрируются при загрузке словаря, поэтому поиска по
/// строковым обозначениям в горячем пути разбора нет.
#[derive(Clone, Copy)]
pub struct KnownIds {
    pub post: GrammemeId,
    pub nmbr: GrammemeId,
    pub case: GrammemeId,
    pub pers: GrammemeId,
    pub tens: GrammemeId,
    pub noun: GrammemeId,
    pub adjf: GrammemeId,
    pub prtf: GrammemeId,
    pub sing: GrammemeId,
    pub plur: GrammemeId,
    pub nomn: GrammemeId,
    pub gent: GrammemeId,
    pub datv: GrammemeId,
    pub accs: GrammemeId,
    pub femn: GrammemeId,
    pub abbr: GrammemeId,
}

impl KnownIds {
    /// Категории, по которым согласуются части составных слов.
    #[inline(always)]
    pub fn agreement(&self) -> [GrammemeId; 5] {
        [self.post, self.nmbr, self.case, self.pers, self.tens]
    }
}

/// Загруженный словарь.
pub struct Dictionary {
    inner: DictionaryInner,
    grammemes: GrammemeSet,
    tags: Vec<Tag>,
    unknown_tag: Tag,
    adverb_tag: Tag,
    abbr_tags: Vec<Tag>,
    initials_tags: Vec<Tag>,
    number_int_tag: Tag,
    number_real_tag: Tag,
    punctuation_tag: Tag,
    roman_tag: Tag,
    latin_tag: Tag,
    known: KnownIds,
}

fn make_tag(gset: &mut GrammemeSet, internal: &str, external: &str) -> Result<Tag> {
    let mut tag = Tag::build(gset, internal)?;
    tag.set_ext(Tag::build(gset, external)?);
    Ok(tag)
}

impl Dictionary {
    pub(crate) fn from_inner(inner: DictionaryInner) -> Result<Self> {
        if inner.prediction_suffixes.len() != inner.paradigm_prefixes.len() {
            return Err(AzmorphError::invalid_format(
                "dictionary",
                format!(
                    "{} prediction suffix maps for {} paradigm prefixes",
                    inner.prediction_suffixes.len(),
                    inner.paradigm_prefixes.len()
                ),
            ));
        }
        let mut grammemes = GrammemeSet::from_rows(&inner.grammeme_rows)?;
        let has_ext = inner.gramtab_ext.len() == inner.gramtab_int.len();
        let mut tags = Vec::with_capacity(inner.gramtab_int.len());
        for (i, s) in inner.gramtab_int.iter().enumerate() {
            let mut tag = Tag::build(&mut grammemes, s)?;
            if has_ext {
                tag.set_ext(Tag::build(&mut grammemes, &inner.gramtab_ext[i])?);
            }
            tags.push(tag);
        }

        let unknown_tag = make_tag(&mut grammemes, "UNKN", "НЕИЗВ")?;
        let adverb_tag = make_tag(&mut grammemes, "ADVB", "Н")?;
        let number_int_tag = make_tag(&mut grammemes, "NUMB,intg", "ЧИСЛО,цел")?;
        let number_real_tag = make_tag(&mut grammemes, "NUMB,real", "ЧИСЛО,вещ")?;
        let punctuation_tag = make_tag(&mut grammemes, "PNCT", "ЗПР")?;
        let roman_tag = make_tag(&mut grammemes, "ROMN", "РИМ")?;
        let latin_tag = make_tag(&mut grammemes, "LATN", "ЛАТ")?;

        let mut abbr_tags = Vec::with_capacity(36);
        for (gender, gender_ext) in ABBR_GENDERS {
            for (number, number_ext) in ABBR_NUMBERS {
                for (cas, cas_ext) in ABBR_CASES {
                    abbr_tags.push(make_tag(
                        &mut grammemes,
                        &format!("NOUN,inan,{gender},Fixd,Abbr {number},{cas}"),
                        &format!("СУЩ,неод,{gender_ext},0,аббр {number_ext},{cas_ext}"),
                    )?);
                }
            }
        }
        let mut initials_tags = Vec::with_capacity(12);
        for &(gender, gender_ext) in &ABBR_GENDERS[..2] {
            for (cas, cas_ext) in ABBR_CASES {
                initials_tags.push(make_tag(
                    &mut grammemes,
                    &format!("NOUN,anim,{gender},Sgtm,Name,Fixd,Abbr,Init sing,{cas}"),
                    &format!("СУЩ,од,{gender_ext},sg,имя,0,аббр,иниц ед,{cas_ext}"),
                )?);
            }
        }

        let known = KnownIds {
            post: grammemes.intern("POST")?,
            nmbr: grammemes.intern("NMbr")?,
            case: grammemes.intern("CAse")?,
            pers: grammemes.intern("PErs")?,
            tens: grammemes.intern("TEns")?,
            noun: grammemes.intern("NOUN")?,
            adjf: grammemes.intern("ADJF")?,
            prtf: grammemes.intern("PRTF")?,
            sing: grammemes.intern("sing")?,
            plur: grammemes.intern("plur")?,
            nomn: grammemes.intern("nomn")?,
            gent: grammemes.intern("gent")?,
            datv: grammemes.intern("datv")?,
            accs: grammemes.intern("accs")?,
            femn: grammemes.intern("femn")?,
            abbr: grammemes.intern("Abbr")?,
        };

        Ok(Self {
            inner,
            grammemes,
            tags,
            unknown_tag,
            adverb_tag,
            abbr_tags,
            initials_tags,
            number_int_tag,
            number_real_tag,
            punctuation_tag,
            roman_tag,
            latin_tag,
            known,
        })
    }

    /// Читает скомпилированный словарь.
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; MODEL_MAGIC.len()];
        rdr.read_exact(&mut magic)?;
        if magic != *MODEL_MAGIC {
            return Err(AzmorphError::invalid_format(
                "model",
                "The magic number of the input model mismatches.",
            ));
        }
        let inner = bincode::decode_from_std_read(&mut rdr, common::bincode_config())?;
        Self::from_inner(inner)
    }

    /// Записывает скомпилированный словарь.
    pub fn write<W>(&self, mut wtr: W) -> Result<usize>
    where
        W: Write,
    {
        wtr.write_all(MODEL_MAGIC)?;
        let num_bytes =
            bincode::encode_into_std_write(&self.inner, &mut wtr, common::bincode_config())?;
        Ok(MODEL_MAGIC.len() + num_bytes)
    }

    /// Реестр граммем словаря.
    #[inline(always)]
    pub fn grammemes(&self) -> &GrammemeSet {
        &self.grammemes
    }

    /// Идентификаторы часто используемых граммем.
    #[inline(always)]
    pub fn known_ids(&self) -> &KnownIds {
        &self.known
    }

    /// Ищет словоформу с учётом однобуквенных замен.
    #[inline(always)]
    pub fn find_word(&self, word: &str) -> Vec<(String, Vec<FormRef>)> {
        self.inner.words.find_all(word, &self.inner.replacements)
    }

    /// Карты предсказательных суффиксов, по одной на каждую приставку
    /// парадигм.
    #[inline(always)]
    pub fn prediction_suffixes(&self) -> &[SuffixMap] {
        &self.inner.prediction_suffixes
    }

    /// Частота пары `"слово:тег"` в корпусе, если статистика загружена.
    #[inline(always)]
    pub fn probability(&self, key: &str) -> Option<u32> {
        self.inner.probabilities.as_ref()?.find(key)
    }

    /// Загружена ли статистика частот.
    #[inline(always)]
    pub fn has_probabilities(&self) -> bool {
        self.inner.probabilities.is_some()
    }

    /// Возвращает парадигму по номеру.
    #[inline(always)]
    pub fn paradigm(&self, paradigm_id: u16) -> Paradigm<'_> {
        self.inner.paradigms.get(paradigm_id)
    }

    /// Суффикс форм по его номеру.
    #[inline(always)]
    pub fn suffix(&self, suffix_idx: usize) -> &str {
        &self.inner.suffixes[suffix_idx]
    }

    /// Приставка парадигм по её номеру.
    #[inline(always)]
    pub fn paradigm_prefix(&self, prefix_idx: usize) -> &str {
        &self.inner.paradigm_prefixes[prefix_idx]
    }

    /// Все приставки парадигм.
    #[inline(always)]
    pub fn paradigm_prefixes(&self) -> &[String] {
        &self.inner.paradigm_prefixes
    }

    /// Тег словарной формы.
    #[inline(always)]
    pub fn form_tag(&self, form: FormRef) -> &Tag {
        let paradigm = self.paradigm(form.paradigm_id);
        &self.tags[paradigm.tag_idx(usize::from(form.form_idx))]
    }

    /// Таблица однобуквенных замен.
    #[inline(always)]
    pub fn replacements(&self) -> &[(char, char)] {
        &self.inner.replacements
    }

    /// Известные приставки, отделяемые при разборе.
    #[inline(always)]
    pub fn known_prefixes(&self) -> &[String] {
        &self.inner.known_prefixes
    }

    /// Частицы, отделяемые дефисом.
    #[inline(always)]
    pub fn particles(&self) -> &[String] {
        &self.inner.particles
    }

    /// Буквы, допустимые в качестве инициалов.
    #[inline(always)]
    pub fn initials(&self) -> &str {
        &self.inner.initials
    }

    /// Тег неразобранного слова.
    #[inline(always)]
    pub fn unknown_tag(&self) -> &Tag {
        &self.unknown_tag
    }

    /// Тег наречий, образованных приставкой «по-».
    #[inline(always)]
    pub fn adverb_tag(&self) -> &Tag {
        &self.adverb_tag
    }

    /// Теги несклоняемых аббревиатур по всем родам, числам и падежам.
    #[inline(always)]
    pub fn abbr_tags(&self) -> &[Tag] {
        &self.abbr_tags
    }

    /// Теги инициалов по родам и падежам.
    #[inline(always)]
    pub fn initials_tags(&self) -> &[Tag] {
        &self.initials_tags
    }

    /// Тег целых чисел.
    #[inline(always)]
    pub fn number_int_tag(&self) -> &Tag {
        &self.number_int_tag
    }

    /// Тег вещественных чисел.
    #[inline(always)]
    pub fn number_real_tag(&self) -> &Tag {
        &self.number_real_tag
    }

    /// Тег знаков препинания.
    #[inline(always)]
    pub fn punctuation_tag(&self) -> &Tag {
        &self.punctuation_tag
    }

    /// Тег римских чисел.
    #[inline(always)]
    pub fn roman_tag(&self) -> &Tag {
        &self.roman_tag
    }

    /// Тег слов, записанных латиницей.
    #[inline(always)]
    pub fn latin_tag(&self) -> &Tag {
        &self.latin_tag
    }
}
