//! Built-in Kashubian blacklist categories and the protective whitelist.
//!
//! The sets are immutable once built. Callers construct a [`WordLists`] once
//! (from the built-ins, optionally overridden from a JSON file) and share it
//! with the classifier behind an `Arc`.

use crate::classifier::Category;
use crate::error::{CorpusError, CorpusResult};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info};

const WEB_MARKUP: &[&str] = &[
    "html", "div", "span", "class", "style", "href", "alt", "src", "table", "tbody", "thead",
    "tr", "td", "th", "left", "right", "center", "top", "bottom", "width", "height", "padding",
    "margin", "border", "background", "bgcolor", "solid", "align", "valign", "px", "pt", "em",
    "rem", "cellpadding", "cellspacing", "colspan", "rowspan", "http", "https", "www", "com",
    "org", "net", "edu", "gov", "text-align", "font-size", "border-bottom", "border-collapse",
    "gainsboro", "htm", "php", "asp", "jpg", "jpeg", "png", "gif", "svg", "pdf", "doc", "docx",
    "txt", "xml", "json", "wikitable", "thumb", "thumbnail", "frame", "frameless", "upright",
    "caption", "file", "image", "link", "collapse", "nbsp", "amp", "lt", "gt", "quot", "ffffff",
    "efefef", "cccccc", "000000",
];

// 'i', 'to', 'do', 'we' are Kashubian and deliberately absent.
const ENGLISH: &[&str] = &[
    "the", "of", "and", "or", "in", "on", "at", "for", "from", "with", "about", "by", "as", "is",
    "was", "are", "be", "been", "have", "has", "had", "does", "did", "will", "would", "could",
    "should", "may", "might", "can", "must", "he", "she", "it", "they", "me", "him", "her", "us",
    "them", "my", "your", "his", "its", "our", "their", "new", "world", "live", "best",
    "central", "history", "archive", "records", "image", "gray", "grey", "red", "blue", "green",
    "black", "white", "per", "iron", "stone", "web", "european", "kashubs", "love", "bad", "art",
    "publishing", "academic", "imprint", "press", "university", "journal", "volume", "page",
    "edition", "published", "edited", "bloomsbury", "maiden", "alfred", "toyota", "linux",
];

const FOREIGN: &[&str] = &[
    "und", "der", "die", "das", "von", "zu", "im", "am", "ist", "wird", "werden", "wurde",
    "wurden", "jest", "się", "został", "została", "były", "miał", "wends", "sorbs", "outposts",
    "cantharellus", "cibarius", "slav", "też", "pawła",
];

const PROPER_NOUNS: &[&str] = &[
    "piotr", "paweł", "józef", "jan", "jana", "anna", "maria", "ewa", "adam", "marian", "jerzy",
    "katarzyna", "katarzëna", "dorothee", "wilhelm", "bernard", "aleksander", "aleksandra",
    "stanisław", "stanisłôw", "władisłôw", "ryszard", "andrzej", "alojzy", "henrik", "dominik",
    "franciszka", "zimmer", "eisenreich", "rachańska", "kreyser", "lorentz", "labùda",
    "borzyszkowski", "susk", "toyota", "linux", "pwn", "plc", "ossolineum", "multico", "legia",
];

const ABBREVIATIONS: &[&str] = &[
    "km", "cm", "mm", "m", "dm", "kg", "g", "mg", "l", "ml", "isbn", "issn", "doi", "ed", "eds",
    "vol", "pp", "p", "dr", "prof", "mgr", "inż", "hab", "nr", "np", "tzw", "itd", "itp", "ok",
    "sg", "pl", "nom", "gen", "dat", "acc", "loc", "inst", "wst", "rkj", "ss", "st",
];

const NUMBERS: &[&str] = &[
    "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "xiii", "xiv", "xv",
    "xvi", "xvii", "xviii", "xix", "xx", "xxi", "xxx", "xl", "l", "lx", "lxx", "lxxx", "xc", "c",
];

// 'cz' is a Kashubian digraph, not a country code.
const LANGUAGE_CODES: &[&str] = &[
    "en", "de", "pl", "fr", "es", "it", "ru", "cs", "sk", "uk", "csb", "usa", "gb",
];

const SINGLE_CHARS: &[&str] = &[
    "b", "c", "d", "e", "f", "g", "h", "j", "l", "m", "n", "o", "p", "q", "r", "t", "u", "v",
    "x", "y", "pi", "mu", "sigma", "alpha", "beta", "gamma", "delta",
];

const WHITELIST: &[&str] = &[
    // function words
    "w", "z", "s", "k", "ò", "i", "a", "to", "të", "më", "òn", "òna", "òno", "le", "je", "są",
    "ma", "mô", "no", "ja", "co",
    // letters
    "ã", "é", "ë", "ó", "ô", "ù", "ł", "ń", "ż", "ź",
    // digraphs
    "ch", "cz", "dz", "dż", "rz", "sz",
    // short function words
    "na", "òd", "do", "pò", "ni", "so", "we", "bez", "ale", "neg", "òle", "dlô", "jak", "czi",
    "ani", "abò", "òni", "jich", "jim", "tej", "ten", "tom", "tak", "nie", "bëc", "był", "bëła",
];

/// Which built-in word list a blacklist category draws from.
fn builtin_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::WebMarkup => WEB_MARKUP,
        Category::English => ENGLISH,
        Category::Foreign => FOREIGN,
        Category::ProperNoun => PROPER_NOUNS,
        Category::Abbreviation => ABBREVIATIONS,
        Category::Number => NUMBERS,
        Category::LanguageCode => LANGUAGE_CODES,
        Category::SingleChar => SINGLE_CHARS,
        Category::Whitelisted | Category::Kept => &[],
    }
}

fn to_set<'a, I: IntoIterator<Item = &'a str>>(words: I) -> HashSet<String> {
    words.into_iter().map(|w| w.trim().to_lowercase()).collect()
}

/// On-disk override format. Categories that are named replace the built-in
/// set; everything else keeps its default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WordListsFile {
    blacklist: BTreeMap<Category, Vec<String>>,
    whitelist: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct WordLists {
    blacklists: BTreeMap<Category, HashSet<String>>,
    whitelist: HashSet<String>,
}

impl Default for WordLists {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordLists {
    pub fn builtin() -> Self {
        let blacklists = Category::blacklist_order()
            .map(|c| (c, to_set(builtin_for(c).iter().copied())))
            .collect();
        Self {
            blacklists,
            whitelist: to_set(WHITELIST.iter().copied()),
        }
    }

    /// Builds lists from explicit sets. Missing blacklist categories are empty.
    pub fn from_sets(blacklist: BTreeMap<Category, Vec<String>>, whitelist: Vec<String>) -> CorpusResult<Self> {
        let mut lists = Self {
            blacklists: Category::blacklist_order().map(|c| (c, HashSet::new())).collect(),
            whitelist: to_set(whitelist.iter().map(String::as_str)),
        };
        for (category, words) in blacklist {
            lists.replace_category(category, &words)?;
        }
        Ok(lists)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CorpusResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorpusError::MissingInput(path.to_path_buf()));
        }
        info!("📋 Loading word lists from: {}", path.display());
        let content = fs::read_to_string(path)?;
        let file: WordListsFile = serde_json::from_str(&content)?;

        let mut lists = Self::builtin();
        for (category, words) in file.blacklist {
            debug!("Overriding '{}' with {} entries", category, words.len());
            lists.replace_category(category, &words)?;
        }
        if let Some(words) = file.whitelist {
            lists.whitelist = to_set(words.iter().map(String::as_str));
        }
        Ok(lists)
    }

    fn replace_category(&mut self, category: Category, words: &[String]) -> CorpusResult<()> {
        if !category.is_removal() {
            return Err(CorpusError::Config(format!(
                "'{}' is not a blacklist category",
                category
            )));
        }
        self.blacklists
            .insert(category, to_set(words.iter().map(String::as_str)));
        Ok(())
    }

    pub fn category(&self, category: Category) -> Option<&HashSet<String>> {
        self.blacklists.get(&category)
    }

    pub fn whitelist(&self) -> &HashSet<String> {
        &self.whitelist
    }

    pub fn is_whitelisted(&self, lowered: &str) -> bool {
        self.whitelist.contains(lowered)
    }

    /// Size of the union of all blacklist categories.
    pub fn blacklist_size(&self) -> usize {
        self.blacklists
            .values()
            .flatten()
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn whitelist_size(&self) -> usize {
        self.whitelist.len()
    }

    /// Per-category set sizes in priority order.
    pub fn category_sizes(&self) -> Vec<(Category, usize)> {
        Category::iter()
            .filter_map(|c| self.blacklists.get(&c).map(|s| (c, s.len())))
            .collect()
    }
}
