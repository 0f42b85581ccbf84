//! Default French stopword list.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default French stop words.
///
/// Articles, pronouns, prepositions, conjunctions, auxiliaries, and common
/// adverbs, plus the single-letter remnants left by apostrophe elision
/// ("c'est" tokenizes as "c" + "est").
const DEFAULT_FRENCH_STOP_WORDS: &[&str] = &[
    // elision remnants
    "c", "d", "j", "l", "m", "n", "s", "t", "qu",
    // articles and determiners
    "le", "la", "les", "un", "une", "des", "du", "de", "au", "aux", "ce", "cet", "cette", "ces",
    "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre", "nos", "votre", "vos",
    "leur", "leurs", "quel", "quelle", "quels", "quelles", "chaque", "quelque", "quelques",
    "certains", "certaines", "plusieurs", "aucun", "aucune", "tout", "toute", "tous", "toutes",
    "autre", "autres", "même", "mêmes",
    // pronouns
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "me", "te", "se", "moi",
    "toi", "soi", "lui", "eux", "y", "en", "celui", "celle", "ceux", "celles", "ceci", "cela",
    "ça", "qui", "que", "quoi", "dont", "où", "lequel", "laquelle", "lesquels", "lesquelles",
    "rien", "personne", "chacun", "chacune",
    // prepositions
    "à", "dans", "par", "pour", "sur", "sous", "vers", "avec", "sans", "chez", "entre", "contre",
    "depuis", "pendant", "avant", "après", "dès", "jusque", "selon", "parmi", "envers", "malgré",
    "durant", "sauf", "hors",
    // conjunctions and connectives
    "et", "ou", "mais", "donc", "or", "ni", "car", "si", "comme", "lorsque", "quand", "puisque",
    "ainsi", "alors", "aussi", "cependant", "pourtant", "néanmoins", "toutefois", "enfin",
    "ensuite", "puis", "parce",
    // negation and common adverbs
    "ne", "pas", "plus", "moins", "très", "trop", "peu", "beaucoup", "bien", "mal", "encore",
    "déjà", "jamais", "toujours", "souvent", "parfois", "ici", "là", "voici", "voilà", "oui",
    "non", "peut-être", "surtout", "plutôt", "presque", "tant", "autant", "certes",
    // auxiliaries and frequent verb forms
    "être", "suis", "es", "est", "sommes", "êtes", "sont", "étais", "était", "étions", "étiez",
    "étaient", "été", "étant", "sera", "serai", "seras", "serons", "serez", "seront", "serait",
    "soit", "soient", "sois", "soyez",
    "avoir", "ai", "as", "a", "avons", "avez", "ont", "avais", "avait", "avions", "aviez",
    "avaient", "eu", "ayant", "aura", "aurai", "auras", "aurons", "aurez", "auront", "aurait",
    "ait", "aient",
    "faire", "fait", "faite", "faits", "faites", "faut",
    // politeness and filler
    "merci", "bonjour", "bonsoir", "monsieur", "madame", "cher", "chère",
];

/// Default French stop words as a HashSet.
pub static DEFAULT_FRENCH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_FRENCH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Get the default French stopword set.
pub fn french_stop_words() -> &'static HashSet<String> {
    &DEFAULT_FRENCH_STOP_WORDS_SET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_words_present() {
        let words = french_stop_words();
        for word in ["le", "la", "de", "est", "être", "avoir", "ne", "pas"] {
            assert!(words.contains(word), "'{word}' missing from stopword list");
        }
    }

    #[test]
    fn test_elision_remnants_present() {
        let words = french_stop_words();
        assert!(words.contains("c"));
        assert!(words.contains("qu"));
    }

    #[test]
    fn test_content_words_absent() {
        let words = french_stop_words();
        for word in ["france", "retraite", "immigration", "peuple"] {
            assert!(!words.contains(word), "'{word}' should not be a stopword");
        }
    }

    #[test]
    fn test_no_duplicates() {
        assert_eq!(
            DEFAULT_FRENCH_STOP_WORDS.len(),
            french_stop_words().len(),
            "duplicate entries in the stopword list"
        );
    }
}
