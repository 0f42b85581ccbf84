//! End-to-end authorship classification scenarios.

use std::io::Write;

use tribune::corpus::loader::load_corpus;
use tribune::corpus::record::{Corpus, TweetRecord};
use tribune::corpus::split::train_test_split;
use tribune::evaluation::report::evaluate;
use tribune::features::{TfIdfVectorizer, VectorizerConfig};
use tribune::model::pipeline::{PipelineConfig, TextPipeline};

use chrono::{TimeZone, Utc};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn synthetic_corpus(counts: &[(&str, usize)]) -> Corpus {
    let phrases = [
        "vive la france libre",
        "le peuple souverain décide",
        "ensemble pour la république",
        "nos frontières nous protègent",
    ];

    let mut records = Vec::new();
    for (speaker_idx, (speaker, n)) in counts.iter().enumerate() {
        for i in 0..*n {
            records.push(TweetRecord {
                speaker: speaker.to_string(),
                text: format!("{} numéro {i}", phrases[speaker_idx % phrases.len()]),
                created_at: Utc.with_ymd_and_hms(2021, 9, 1, 0, 0, 0).unwrap(),
                favorite_count: i as u64,
                retweet_count: 0,
            });
        }
    }
    Corpus::new(records)
}

#[test]
fn vectorizer_vocabulary_is_frozen_across_corpora() {
    let corpus_a = strings(&["vive la france", "le peuple décide", "la république avance"]);
    let corpus_b = strings(&["des mots totalement inconnus", "rien de commun ici"]);

    let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig::default()).unwrap();
    vectorizer.fit(&corpus_a).unwrap();
    let dims = vectorizer.vocabulary_size();

    // Transforming unseen text never fails and keeps the fitted width.
    for vector in vectorizer.transform_corpus(&corpus_b) {
        assert_eq!(vector.len(), dims);
        assert!(vector.iter().all(|v| *v == 0.0));
    }
}

#[test]
fn split_proportions_stay_within_tolerance() {
    let corpus = synthetic_corpus(&[("Macron", 140), ("Lepen", 60), ("Melenchon", 100)]);
    let (train, test) = train_test_split(&corpus, 0.3, 123).unwrap();

    let proportion = |records: &[TweetRecord], speaker: &str| {
        records.iter().filter(|r| r.speaker == speaker).count() as f64 / records.len() as f64
    };

    for speaker in ["Macron", "Lepen", "Melenchon"] {
        let full = proportion(corpus.records(), speaker);
        let in_train = proportion(&train, speaker);
        let in_test = proportion(&test, speaker);

        assert!(
            (in_train - full).abs() <= 0.02,
            "{speaker}: train {in_train:.3} vs full {full:.3}"
        );
        assert!(
            (in_test - full).abs() <= 0.02,
            "{speaker}: test {in_test:.3} vs full {full:.3}"
        );
    }
}

#[test]
fn trained_pipeline_predicts_the_right_author() {
    let texts = strings(&["vive la france", "je aime le pouvoir", "vive le peuple"]);
    let labels = strings(&["A", "B", "A"]);

    let pipeline = TextPipeline::fit(PipelineConfig::default(), &texts, &labels).unwrap();

    assert_eq!(pipeline.predict("vive la france").unwrap(), "A");

    let probabilities = pipeline.predict_proba("vive la france").unwrap();
    let index_of = |label: &str| pipeline.classes().iter().position(|c| c == label).unwrap();
    assert!(probabilities[index_of("A")] > probabilities[index_of("B")]);
}

#[test]
fn confusion_matrix_cells_account_for_every_record() {
    let corpus = synthetic_corpus(&[("Macron", 40), ("Lepen", 40), ("Melenchon", 40)]);
    let (train, test) = train_test_split(&corpus, 0.3, 7).unwrap();

    let train_texts: Vec<String> = train.iter().map(|r| r.text.clone()).collect();
    let train_labels: Vec<String> = train.iter().map(|r| r.speaker.clone()).collect();
    let test_texts: Vec<String> = test.iter().map(|r| r.text.clone()).collect();
    let test_labels: Vec<String> = test.iter().map(|r| r.speaker.clone()).collect();

    let pipeline = TextPipeline::fit(PipelineConfig::default(), &train_texts, &train_labels).unwrap();
    let report = evaluate(&pipeline, &test_texts, &test_labels).unwrap();

    assert_eq!(report.confusion.total(), test.len());

    for (idx, label) in report.confusion.labels().iter().enumerate() {
        let true_count = test_labels.iter().filter(|l| *l == label).count();
        assert_eq!(report.confusion.row_total(idx), true_count);
    }

    // Micro average is accuracy.
    assert!((report.accuracy - report.confusion.accuracy()).abs() < f64::EPSILON);
}

#[test]
fn class_ordering_comes_from_the_fitted_model() {
    let texts = strings(&["vive la france", "je aime le pouvoir", "vive le peuple"]);
    let labels = strings(&["Zemmour", "Arthaud", "Zemmour"]);

    let pipeline = TextPipeline::fit(PipelineConfig::default(), &texts, &labels).unwrap();

    // Lexicographic, fixed at fit time.
    assert_eq!(pipeline.classes(), ["Arthaud", "Zemmour"]);

    let report = evaluate(&pipeline, &texts, &labels).unwrap();
    assert_eq!(report.confusion.labels(), pipeline.classes());
}

#[test]
fn workflow_from_csv_to_evaluation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "user_id,text,created_at,favorite_count,retweet_count").unwrap();
    for i in 0..30 {
        writeln!(
            file,
            "Macron,\"ensemble pour la république numéro {i}\",2021-09-{:02} 10:00:00,{i},1",
            (i % 28) + 1
        )
        .unwrap();
        writeln!(
            file,
            "Lepen,\"nos frontières nous protègent numéro {i}\",2021-09-{:02} 11:00:00,{i},2",
            (i % 28) + 1
        )
        .unwrap();
    }

    let corpus = load_corpus(file.path()).unwrap();
    assert_eq!(corpus.len(), 60);

    let (train, test) = train_test_split(&corpus, 0.3, 42).unwrap();
    let train_texts: Vec<String> = train.iter().map(|r| r.text.clone()).collect();
    let train_labels: Vec<String> = train.iter().map(|r| r.speaker.clone()).collect();
    let test_texts: Vec<String> = test.iter().map(|r| r.text.clone()).collect();
    let test_labels: Vec<String> = test.iter().map(|r| r.speaker.clone()).collect();

    let pipeline = TextPipeline::fit(PipelineConfig::default(), &train_texts, &train_labels).unwrap();
    let report = evaluate(&pipeline, &test_texts, &test_labels).unwrap();

    // Two disjoint phrase families are trivially separable.
    assert!(report.accuracy > 0.9, "accuracy {}", report.accuracy);
}
