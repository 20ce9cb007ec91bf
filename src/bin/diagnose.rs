// Diagnose crop leaf photos from the command line
//
// Usage: cargo run --release --bin diagnose -- --crop tomato leaf1.jpg leaf2.png

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::Parser;
use disease_scorer_rust::inference::DemoModel;
use disease_scorer_rust::{
    Advisory, AdvisoryOptions, Crop, Diagnoser, Diagnosis, DiseaseScorer, DiseaseTable,
    HeuristicDiagnoser, LiteDiagnoser, ModelKind, ScorerConfig, ScoringTunables, SeededJitter,
    TreatmentKind, TreatmentPlan,
};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "diagnose")]
#[command(about = "Score crop leaf photos against the disease table", long_about = None)]
struct Cli {
    /// Leaf images to analyse
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Crop id (tomato, potato, corn, apple, grape, rice, wheat, cotton)
    #[arg(long, default_value = "tomato")]
    crop: String,

    /// Inference path: smart (heuristic) or lite (tensor model)
    #[arg(long, default_value = "smart")]
    model: ModelKind,

    /// Seed for confidence jitter and the demo model weights
    #[arg(long)]
    seed: Option<u64>,

    /// Disable confidence jitter
    #[arg(long)]
    no_jitter: bool,

    /// Candidates to report per image
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Scorer tunables (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replacement disease table (JSON keyed by crop id)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Treatment type for the advice: organic or chemical
    #[arg(long, default_value = "chemical")]
    treatment: TreatmentKind,

    /// Field size in acres for spray volume
    #[arg(long, default_value_t = 1.0)]
    field_acres: f64,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageReport {
    image: PathBuf,
    diagnosis: Diagnosis,
    advisory: Option<Advisory>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "disease_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let crop = Crop::from_id(&cli.crop).ok_or_else(|| {
        anyhow!(
            "Unknown crop '{}' (expected one of: {})",
            cli.crop,
            Crop::ALL.map(|c| c.id()).join(", ")
        )
    })?;

    let mut config = match &cli.config {
        Some(path) => ScorerConfig::load(path)?,
        None => ScorerConfig::default(),
    };
    if cli.no_jitter {
        config.scoring = ScoringTunables {
            jitter_range: 0.0,
            fallback_jitter_range: 0.0,
            ..config.scoring
        };
    }

    let table = Arc::new(match &cli.table {
        Some(path) => DiseaseTable::load(path)?,
        None => DiseaseTable::builtin(),
    });
    let scorer = DiseaseScorer::new(Arc::clone(&table), config.scoring.clone());

    // One diagnoser per image so seeded runs do not depend on thread scheduling
    let make_diagnoser = |index: usize| -> Box<dyn Diagnoser> {
        match cli.model {
            ModelKind::Smart => {
                let jitter = match cli.seed {
                    Some(seed) => SeededJitter::new(seed.wrapping_add(index as u64)),
                    None => SeededJitter::from_entropy(),
                };
                Box::new(HeuristicDiagnoser::with_jitter(
                    scorer.clone(),
                    config.extractor.clone(),
                    jitter,
                ))
            }
            ModelKind::Lite => Box::new(LiteDiagnoser::new(
                DemoModel::new(cli.seed.unwrap_or(0)),
                Arc::clone(&table),
            )),
        }
    };

    let options = AdvisoryOptions {
        treatment: cli.treatment,
        field_acres: cli.field_acres,
        detected_on: Some(Local::now().date_naive()),
    };

    tracing::info!(
        images = cli.images.len(),
        %crop,
        model = %cli.model,
        "Analysing images"
    );
    let start = Instant::now();

    let reports: Vec<Result<ImageReport>> = cli
        .images
        .par_iter()
        .enumerate()
        .map(|(index, path)| {
            let image = image::open(path)
                .with_context(|| format!("Failed to open image: {:?}", path))?
                .to_rgb8();
            let mut diagnosis = make_diagnoser(index)
                .diagnose(&image, crop)
                .with_context(|| format!("Inference failed for {:?}", path))?;
            diagnosis.candidates.truncate(cli.top);
            let advisory = diagnosis
                .top()
                .map(|top| Advisory::for_candidate(top, &options));

            Ok(ImageReport {
                image: path.clone(),
                diagnosis,
                advisory,
            })
        })
        .collect();

    tracing::info!("Analysed {} images in {:?}", reports.len(), start.elapsed());

    let mut failures = 0;
    for report in reports {
        match report {
            Ok(report) if cli.json => println!("{}", serde_json::to_string_pretty(&report)?),
            Ok(report) => print_report(&report),
            Err(e) => {
                failures += 1;
                tracing::error!("{:#}", e);
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} of {} images failed", failures, cli.images.len()));
    }
    Ok(())
}

fn print_report(report: &ImageReport) {
    let diagnosis = &report.diagnosis;
    println!(
        "{} [{} / {} model, {:.1} ms]",
        report.image.display(),
        diagnosis.crop.display_name(),
        diagnosis.model,
        diagnosis.elapsed_ms
    );

    for (rank, candidate) in diagnosis.candidates.iter().enumerate() {
        println!(
            "  {}. {:<40} {:>5.1}%  ({:?})",
            rank + 1,
            candidate.record.name,
            candidate.confidence,
            candidate.severity_level
        );
    }

    let Some(advisory) = &report.advisory else {
        println!("  No candidates for this crop");
        return;
    };

    match &advisory.treatment {
        TreatmentPlan::NoTreatmentNeeded { advice, .. } => {
            println!("  No treatment needed: {}", advice);
        }
        TreatmentPlan::Treat {
            kind,
            instructions,
            dosage,
            spray_litres,
            field_acres,
            ..
        } => {
            println!("  Treatment ({}): {}", kind, instructions);
            if let Some(dosage) = dosage {
                println!("  Dosage: {}", dosage);
            }
            println!("  Spray mix: ~{} L for {} acres", spray_litres, field_acres);
        }
    }

    if let Some(timeline) = &advisory.timeline {
        println!("  Untreated: {} ({:?})", timeline.summary, timeline.urgency);
    }
    println!();
}
