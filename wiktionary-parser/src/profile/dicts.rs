//! Vocabulary tables shared by the language profiles.

/// Recognized part-of-speech headings (English labels).
pub const PARTS_OF_SPEECH: &[&str] = &[
    "noun",
    "verb",
    "adjective",
    "adverb",
    "determiner",
    "article",
    "preposition",
    "conjunction",
    "proper noun",
    "letter",
    "character",
    "phrase",
    "proverb",
    "idiom",
    "symbol",
    "syllable",
    "numeral",
    "initialism",
    "interjection",
    "definitions",
    "pronoun",
    "particle",
    "predicative",
    "participle",
    "suffix",
];

/// Recognized relation headings (English labels).
pub const RELATIONS: &[&str] = &[
    "synonyms",
    "antonyms",
    "hypernyms",
    "hyponyms",
    "meronyms",
    "holonyms",
    "troponyms",
    "related terms",
    "coordinate terms",
];

/// Short forms used by the translation view and `meanings()`.
const PART_OF_SPEECH_ABBREVIATIONS: &[(&str, &str)] = &[
    ("noun", "n"),
    ("verb", "v"),
    ("adjective", "adj"),
    ("adverb", "adv"),
    ("determiner", "det"),
    ("article", "art"),
    ("preposition", "prep"),
    ("conjunction", "conj"),
    ("proper noun", "pn"),
    ("letter", "let"),
    ("character", "chr"),
    ("phrase", "phr"),
    ("proverb", "prvb"),
    ("idiom", "idm"),
    ("symbol", "sym"),
    ("syllable", "syl"),
    ("numeral", "num"),
    ("initialism", "init"),
    ("interjection", "int"),
    ("definitions", "def"),
    ("", "def"),
    ("pronoun", "pron"),
];

/// Abbreviates a part of speech; unknown ones are returned unchanged.
#[must_use]
pub fn part_of_speech_abbreviation(part_of_speech: &str) -> &str {
    PART_OF_SPEECH_ABBREVIATIONS
        .iter()
        .find(|(full, _)| *full == part_of_speech)
        .map_or(part_of_speech, |(_, short)| short)
}

pub(crate) const ENGLISH_SPANISH: &[(&str, &str)] = &[
    ("noun", "sustantivo"),
    ("verb", "verbo"),
    ("verbal form", "forma verbal"),
    ("adjective", "adjetivo"),
    ("adverb", "adverbio"),
    ("determiner", "determinante"),
    ("article", "artículo"),
    ("preposition", "preposición"),
    ("conjunction", "conjunción"),
    ("proper noun", "nombre propio"),
    ("letter", "letra"),
    ("character", "carácter"),
    ("phrase", "frase"),
    ("proverb", "refrán"),
    ("idiom", "locución"),
    ("symbol", "símbolo"),
    ("syllable", "sílaba"),
    ("numeral", "numeral"),
    ("initialism", "inicialismo"),
    ("interjection", "interjección"),
    ("definitions", "definiciones"),
    ("pronoun", "pronombre"),
    ("particle", "partícula"),
    ("translations", "traducciones"),
    ("etymology", "etimología"),
    ("pronunciation", "pronunciación"),
    ("examples", "ejemplos"),
    ("synonyms", "sinónimos"),
    ("antonyms", "antónimos"),
    ("hypernyms", "hiperónimos"),
    ("hyponyms", "hipónimos"),
    ("meronyms", "merónimos"),
    ("holonyms", "holónimos"),
    ("troponyms", "tropónimos"),
    ("related terms", "relacionados"),
    ("coordinate terms", "coordinados"),
];

pub(crate) const ENGLISH_RUSSIAN: &[(&str, &str)] = &[
    ("noun", "существительное"),
    ("verb", "глагол"),
    ("adjective", "прилагательное"),
    ("adverb", "наречие"),
    ("determiner", "детерминанта"),
    ("article", "статья"),
    ("preposition", "предлог"),
    ("conjunction", "конъюнкция"),
    ("proper noun", "имя собственное"),
    ("letter", "письмо"),
    ("character", "персонаж"),
    ("phrase", "фраза"),
    ("proverb", "пословица"),
    ("idiom", "идиома"),
    ("symbol", "условное обозначение"),
    ("syllable", "слог"),
    ("numeral", "цифра"),
    ("initialism", "аббревиатура"),
    ("interjection", "междометие"),
    ("definitions", "определения"),
    ("pronoun", "местоимение"),
    ("translations", "перевод"),
    ("etymology", "этимология"),
    ("pronunciation", "произношение"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations() {
        assert_eq!(part_of_speech_abbreviation("noun"), "n");
        assert_eq!(part_of_speech_abbreviation("proper noun"), "pn");
        assert_eq!(part_of_speech_abbreviation(""), "def");
        assert_eq!(part_of_speech_abbreviation("suffix"), "suffix");
    }

    #[test]
    fn test_tables_have_unique_keys() {
        for table in [ENGLISH_SPANISH, ENGLISH_RUSSIAN] {
            let mut keys: Vec<&str> = table.iter().map(|(k, _)| *k).collect();
            keys.sort_unstable();
            let len = keys.len();
            keys.dedup();
            assert_eq!(keys.len(), len);
        }
    }
}
