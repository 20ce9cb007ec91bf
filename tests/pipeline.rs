// Frame → diagnosis → advice, through the public API
//
// Run with: cargo test --test pipeline

use disease_scorer_rust::config::{ExtractorTunables, ScoringTunables};
use disease_scorer_rust::inference::DemoModel;
use disease_scorer_rust::{
    extract_features, Advisory, AdvisoryOptions, Crop, Diagnoser, DiseaseScorer, DiseaseTable,
    FrameSource, HeuristicDiagnoser, LiteDiagnoser, ModelKind, NoJitter, ScanSession,
    SeededJitter, TreatmentPlan,
};
use image::{Rgb, RgbImage};
use std::sync::Arc;
use std::time::Duration;

const LEAF: Rgb<u8> = Rgb([50, 160, 60]);
const LESION: Rgb<u8> = Rgb([120, 70, 30]);

/// 64×64 so no resampling happens: top half lesion, bottom half leaf
fn blighted_leaf() -> RgbImage {
    RgbImage::from_fn(64, 64, |_, y| if y < 32 { LESION } else { LEAF })
}

fn smart() -> HeuristicDiagnoser {
    let scorer = DiseaseScorer::new(
        Arc::new(DiseaseTable::builtin()),
        ScoringTunables::without_jitter(),
    );
    HeuristicDiagnoser::with_jitter(scorer, ExtractorTunables::default(), NoJitter)
}

#[test]
fn test_lesion_features() {
    let features = extract_features(&blighted_leaf(), 64);
    assert!(features.is_leaf_disease);
    assert!(!features.is_severe);
    // brown 0.5 amplified by the blight factor
    approx::assert_relative_eq!(features.brown_spots, 0.75, epsilon = 1e-9);
    approx::assert_relative_eq!(features.healthy_green, 0.5, epsilon = 1e-9);
}

#[test]
fn test_blighted_tomato_gets_treatment_plan() {
    let diagnosis = smart().diagnose(&blighted_leaf(), Crop::Tomato).unwrap();
    let top = diagnosis.top().unwrap();
    assert!(!top.is_healthy());
    assert!(top.confidence > 50.0);

    let options = AdvisoryOptions {
        field_acres: 2.0,
        ..AdvisoryOptions::default()
    };
    let advisory = Advisory::for_candidate(top, &options);
    match advisory.treatment {
        TreatmentPlan::Treat { spray_litres, .. } => assert_eq!(spray_litres, 400.0),
        other => panic!("expected a treatment, got {:?}", other),
    }
    assert!(advisory.timeline.is_some());
}

#[test]
fn test_below_ground_disease_never_tops_a_leaf_frame() {
    let diagnoser = smart();
    for crop in [Crop::Potato, Crop::Cotton] {
        let diagnosis = diagnoser.diagnose(&blighted_leaf(), crop).unwrap();
        let top = diagnosis.top().unwrap();
        assert!(!top.record.anatomical_site.is_below_ground(), "{} top was {}", crop, top.record.id);
    }
}

#[test]
fn test_seeded_runs_reproduce() {
    let table = Arc::new(DiseaseTable::builtin());
    let run = || {
        let scorer = DiseaseScorer::new(Arc::clone(&table), ScoringTunables::default());
        HeuristicDiagnoser::with_jitter(scorer, ExtractorTunables::default(), SeededJitter::new(42))
            .diagnose(&blighted_leaf(), Crop::Grape)
            .unwrap()
            .candidates
    };
    assert_eq!(run(), run());
}

#[test]
fn test_lite_path_reports_tomato_softmax() {
    let diagnoser = LiteDiagnoser::new(DemoModel::new(3), Arc::new(DiseaseTable::builtin()));
    let diagnosis = diagnoser.diagnose(&blighted_leaf(), Crop::Wheat).unwrap();

    assert_eq!(diagnosis.model, ModelKind::Lite);
    assert_eq!(diagnosis.crop, Crop::Tomato);
    assert_eq!(diagnosis.candidates.len(), 10);
    let total: f64 = diagnosis.candidates.iter().map(|c| c.confidence).sum();
    approx::assert_abs_diff_eq!(total, 100.0, epsilon = 1e-3);
    assert!(diagnosis
        .candidates
        .windows(2)
        .all(|w| w[0].confidence >= w[1].confidence));
}

struct Flicker {
    frames: u32,
}

impl FrameSource for Flicker {
    fn next_frame(&mut self) -> Option<RgbImage> {
        self.frames += 1;
        // every other tick has no frame ready
        (self.frames % 2 == 0).then(blighted_leaf)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_live_scan_with_lite_model() {
    let diagnoser: Arc<dyn Diagnoser> = Arc::new(LiteDiagnoser::new(
        DemoModel::new(9),
        Arc::new(DiseaseTable::builtin()),
    ));
    let session = ScanSession::with_interval(diagnoser, Crop::Tomato, Duration::from_millis(5));
    session.start(Flicker { frames: 0 }).unwrap();

    let slot = session.slot();
    for _ in 0..400 {
        if slot.frame_count() >= 3 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(slot.frame_count() >= 3);
    assert_eq!(session.current().unwrap().model, ModelKind::Lite);

    session.stop();
    assert!(session.current().is_none());
}
