//! French lemmatization.
//!
//! Dictionary-based reduction of inflected forms to their base form: a
//! table of common irregular verb forms plus conservative plural rules.
//! A form the dictionary and the rules do not cover keeps its surface
//! form, so lemmatization never invents words and is idempotent on its
//! own output.

use std::sync::LazyLock;

use ahash::AHashMap;

/// Irregular form -> lemma table for high-frequency French verbs.
static IRREGULAR_FORMS: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let entries: &[(&str, &[&str])] = &[
        (
            "être",
            &[
                "suis", "es", "est", "sommes", "êtes", "sont", "étais", "était", "étions",
                "étiez", "étaient", "fus", "fut", "furent", "serai", "seras", "sera", "serons",
                "serez", "seront", "serais", "serait", "seraient", "sois", "soit", "soyons",
                "soyez", "soient", "été", "étant",
            ],
        ),
        (
            "avoir",
            &[
                "ai", "as", "a", "avons", "avez", "ont", "avais", "avait", "avions", "aviez",
                "avaient", "eus", "eut", "eurent", "aurai", "auras", "aura", "aurons", "aurez",
                "auront", "aurais", "aurait", "auraient", "aie", "aies", "ait", "ayons", "ayez",
                "aient", "eu", "eue", "eus", "eues", "ayant",
            ],
        ),
        (
            "aller",
            &[
                "vais", "vas", "va", "allons", "allez", "vont", "allais", "allait", "allaient",
                "irai", "iras", "ira", "irons", "irez", "iront", "irais", "irait", "iraient",
                "aille", "aillent", "allé", "allée", "allés", "allées", "allant",
            ],
        ),
        (
            "faire",
            &[
                "fais", "fait", "faisons", "faites", "font", "faisais", "faisait", "faisaient",
                "ferai", "feras", "fera", "ferons", "ferez", "feront", "ferais", "ferait",
                "feraient", "fasse", "fassent", "faite", "faits", "faisant",
            ],
        ),
        (
            "dire",
            &["dis", "dit", "disons", "dites", "disent", "disait", "dira", "diront", "disant"],
        ),
        (
            "pouvoir",
            &[
                "peux", "peut", "pouvons", "pouvez", "peuvent", "pouvait", "pouvaient", "pourra",
                "pourront", "pourrait", "pourraient", "puisse", "puissent", "pu", "pouvant",
            ],
        ),
        (
            "vouloir",
            &[
                "veux", "veut", "voulons", "voulez", "veulent", "voulait", "voulaient", "voudra",
                "voudront", "voudrait", "veuille", "veuillez", "voulu", "voulant",
            ],
        ),
        (
            "devoir",
            &[
                "dois", "doit", "devons", "devez", "doivent", "devait", "devaient", "devra",
                "devront", "devrait", "devraient", "dû", "due", "dus", "devant",
            ],
        ),
        (
            "savoir",
            &[
                "sais", "sait", "savons", "savez", "savent", "savait", "savaient", "saura",
                "sauront", "saurait", "sache", "sachez", "su", "sachant",
            ],
        ),
        (
            "venir",
            &[
                "viens", "vient", "venons", "venez", "viennent", "venait", "venaient", "viendra",
                "viendront", "viendrait", "vienne", "viennent", "venu", "venue", "venus",
                "venues", "venant",
            ],
        ),
        (
            "prendre",
            &[
                "prends", "prend", "prenons", "prenez", "prennent", "prenait", "prenaient",
                "prendra", "prendront", "prendrait", "prenne", "prennent", "pris", "prise",
                "prises", "prenant",
            ],
        ),
        (
            "mettre",
            &[
                "mets", "met", "mettons", "mettez", "mettent", "mettait", "mettaient", "mettra",
                "mettront", "mettrait", "mette", "mettent", "mis", "mise", "mises", "mettant",
            ],
        ),
        (
            "voir",
            &[
                "vois", "voit", "voyons", "voyez", "voient", "voyait", "voyaient", "verra",
                "verront", "verrait", "voie", "voient", "vu", "vue", "vus", "vues", "voyant",
            ],
        ),
    ];

    let mut map = AHashMap::new();
    for (lemma, forms) in entries {
        for form in *forms {
            map.insert(*form, *lemma);
        }
    }
    map
});

/// French lemmatizer over lowercased word forms.
///
/// # Examples
///
/// ```
/// use tribune::analysis::lemma::FrenchLemmatizer;
///
/// let lemmatizer = FrenchLemmatizer::new();
/// assert_eq!(lemmatizer.lemmatize("sommes"), "être");
/// assert_eq!(lemmatizer.lemmatize("citoyens"), "citoyen");
/// assert_eq!(lemmatizer.lemmatize("france"), "france");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrenchLemmatizer;

impl FrenchLemmatizer {
    /// Create a new French lemmatizer.
    pub fn new() -> Self {
        FrenchLemmatizer
    }

    /// Reduce a lowercased word form to its lemma.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_FORMS.get(word) {
            return (*lemma).to_string();
        }

        Self::strip_plural(word)
    }

    /// Conservative plural reduction.
    ///
    /// Unknown endings keep the surface form; false negatives are
    /// preferable to inventing stems.
    fn strip_plural(word: &str) -> String {
        let n = word.chars().count();

        if n > 4 && word.ends_with("eaux") {
            return word[..word.len() - 1].to_string();
        }
        if n > 4 && word.ends_with("aux") {
            return format!("{}al", &word[..word.len() - 3]);
        }
        if n > 4 && word.ends_with("ées") {
            return word[..word.len() - 1].to_string();
        }
        if n > 3 && word.ends_with('s') {
            let stem: Vec<char> = word.chars().collect();
            let before = stem[n - 2];
            // Endings like -ss, -us, -is, -ys are usually not plural marks.
            if !matches!(before, 's' | 'u' | 'i' | 'y') {
                return word[..word.len() - 1].to_string();
            }
        }

        word.to_string()
    }
}
