//! Command implementations for the Tribune CLI.

use chrono::NaiveDate;
use log::info;

use crate::analysis::normalizer::{NormalizerConfig, TweetNormalizer};
use crate::cli::args::*;
use crate::corpus::loader::{load_corpus, load_unlabeled};
use crate::corpus::record::Corpus;
use crate::corpus::split::train_test_split;
use crate::corpus::stats::speaker_summaries;
use crate::error::{Result, TribuneError};
use crate::evaluation::report::evaluate;
use crate::model::pipeline::{PipelineConfig, TextPipeline};
use crate::model::search::{ParameterGrid, RandomizedSearch, SearchConfig};
use crate::report::vocabulary::{VocabularyComparison, VocabularyComparisonConfig};
use crate::report::wordcloud::WordCloudArtifact;

/// Execute a CLI command.
pub fn execute_command(args: TribuneArgs) -> Result<()> {
    match &args.command {
        Command::Stats(stats_args) => show_stats(stats_args.clone()),
        Command::Wordcloud(cloud_args) => write_wordcloud(cloud_args.clone()),
        Command::Compare(compare_args) => write_comparison(compare_args.clone()),
        Command::Train(train_args) => train_and_evaluate(train_args.clone()),
    }
}

/// Show per-speaker descriptive statistics.
fn show_stats(args: StatsArgs) -> Result<()> {
    let corpus = load_filtered(&args.dataset)?;

    println!("{} tweets, {} speakers\n", corpus.len(), corpus.speakers().len());
    for summary in speaker_summaries(&corpus) {
        println!("{summary}\n");
    }
    Ok(())
}

/// Write word-cloud term weights for one speaker.
fn write_wordcloud(args: WordcloudArgs) -> Result<()> {
    let corpus = load_filtered(&args.dataset)?;
    ensure_speaker_exists(&corpus, &args.speaker)?;

    let normalizer = build_normalizer(&args.normalize)?;
    let document = normalize_speaker_document(&corpus, &args.speaker, &normalizer)?;

    let artifact = WordCloudArtifact::from_document(&args.speaker, &document, args.max_terms);
    artifact.write_json(&args.output)?;

    println!(
        "wrote {} terms for {} to {}",
        artifact.terms.len(),
        args.speaker,
        args.output.display()
    );
    Ok(())
}

/// Write the comparative-vocabulary HTML for two speakers.
fn write_comparison(args: CompareArgs) -> Result<()> {
    let corpus = load_filtered(&args.dataset)?;
    ensure_speaker_exists(&corpus, &args.first)?;
    ensure_speaker_exists(&corpus, &args.second)?;

    let normalizer = build_normalizer(&args.normalize)?;
    let first_document = normalize_speaker_document(&corpus, &args.first, &normalizer)?;
    let second_document = normalize_speaker_document(&corpus, &args.second, &normalizer)?;

    let comparison = VocabularyComparison::build(
        &args.first,
        &first_document,
        &args.second,
        &second_document,
        &VocabularyComparisonConfig {
            minimum_term_frequency: args.min_frequency,
            max_terms: args.max_terms,
        },
    )?;
    comparison.write_html(&args.output)?;

    println!(
        "wrote {} terms comparing {} and {} to {}",
        comparison.terms.len(),
        args.first,
        args.second,
        args.output.display()
    );
    Ok(())
}

/// Train the classifier, evaluate on the held-out split, and optionally
/// predict an unlabeled dataset.
fn train_and_evaluate(args: TrainArgs) -> Result<()> {
    let corpus = load_filtered(&args.dataset)?;
    let normalizer = build_normalizer(&args.normalize)?;

    let (train_records, test_records) = train_test_split(&corpus, args.test_ratio, args.split_seed)?;
    info!(
        "{} training tweets, {} evaluation tweets",
        train_records.len(),
        test_records.len()
    );

    let mut train_texts = Vec::with_capacity(train_records.len());
    let mut train_labels = Vec::with_capacity(train_records.len());
    for record in &train_records {
        train_texts.push(normalizer.normalize(&record.text)?);
        train_labels.push(record.speaker.clone());
    }

    let pipeline = if args.no_search {
        TextPipeline::fit(PipelineConfig::default(), &train_texts, &train_labels)?
    } else {
        let search = RandomizedSearch::new(
            ParameterGrid::default(),
            SearchConfig {
                n_iter: args.search_iters,
                cv_folds: args.cv_folds,
                seed: args.search_seed,
            },
            PipelineConfig::default(),
        );
        let outcome = search.run(&train_texts, &train_labels)?;
        println!(
            "best cross-validation accuracy: {:.4} (max_df={}, min_df={}, c={})",
            outcome.best_accuracy,
            outcome.best_config.vectorizer.max_df,
            outcome.best_config.vectorizer.min_df,
            outcome.best_config.classifier.c
        );
        outcome.best
    };

    let mut test_texts = Vec::with_capacity(test_records.len());
    let mut test_labels = Vec::with_capacity(test_records.len());
    for record in &test_records {
        test_texts.push(normalizer.normalize(&record.text)?);
        test_labels.push(record.speaker.clone());
    }

    let report = evaluate(&pipeline, &test_texts, &test_labels)?;
    println!("{report}");

    if let Some(mystery_path) = &args.mystery {
        let tweets = load_unlabeled(mystery_path)?;
        println!("\npredictions for {}:", mystery_path.display());
        for tweet in &tweets {
            let normalized = normalizer.normalize(&tweet.text)?;
            let prediction = pipeline.predict(&normalized)?;
            println!("  {prediction}: {}", tweet.text);
        }
    }

    Ok(())
}

/// Load the dataset and apply the date/speaker filters.
fn load_filtered(args: &DatasetArgs) -> Result<Corpus> {
    let mut corpus = load_corpus(&args.data)?;

    if let Some(since) = &args.since {
        let date = NaiveDate::parse_from_str(since, "%Y-%m-%d").map_err(|_| {
            TribuneError::config(format!("invalid --since date '{since}', expected YYYY-MM-DD"))
        })?;
        let instant = date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
        corpus = corpus.filter_since(instant);
    }

    if !args.speakers.is_empty() {
        corpus = corpus.filter_speakers(&args.speakers);
    }

    if corpus.is_empty() {
        return Err(TribuneError::other(format!(
            "no tweets left in {} after filtering",
            args.data.display()
        )));
    }

    Ok(corpus)
}

fn build_normalizer(args: &NormalizeArgs) -> Result<TweetNormalizer> {
    TweetNormalizer::new(NormalizerConfig {
        lemmatize: !args.no_lemmatize,
        extra_stopwords: args.extra_stopwords.iter().cloned().collect(),
    })
}

fn ensure_speaker_exists(corpus: &Corpus, speaker: &str) -> Result<()> {
    if corpus.speakers().iter().any(|s| s == speaker) {
        Ok(())
    } else {
        Err(TribuneError::other(format!(
            "speaker '{speaker}' not in the dataset (known: {})",
            corpus.speakers().join(", ")
        )))
    }
}

fn normalize_speaker_document(
    corpus: &Corpus,
    speaker: &str,
    normalizer: &TweetNormalizer,
) -> Result<String> {
    normalizer.normalize(&corpus.speaker_document(speaker))
}
