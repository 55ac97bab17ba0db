mod common;

use common::*;
use modfox::prelude::*;
use std::io::Cursor;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Serialize, deserialize, regenerate: the loaded capsule must equal the
/// original and its recorded trace must be reproducible within the default
/// tolerance.
#[test]
fn test_round_trip_and_regeneration() {
    init();
    for type_code in [0, 1] {
        let capsule = build_recorded_capsule(type_code, ClipTime { start: 0, end: 59 });

        let mut buffer = Vec::new();
        save_capsule(&mut buffer, &capsule).unwrap();
        let loaded = load_capsule(Cursor::new(buffer)).unwrap();

        assert_eq!(loaded, capsule);
        loaded.verify_trace(DEFAULT_TRACE_TOLERANCE).unwrap();

        let regenerated = loaded.regenerate_trace().unwrap();
        assert_eq!(regenerated.len(), loaded.preview_trace.len());
        assert_eq!(first_divergence(&regenerated, &loaded.preview_trace, DEFAULT_TRACE_TOLERANCE), None);
    }
}

/// Round trip through an actual file, exercising the scoped open-parse-
/// release path.
#[test]
fn test_file_round_trip() {
    init();
    let capsule = build_recorded_capsule(1, ClipTime { start: -12, end: 35 });

    let path = std::env::temp_dir().join(format!("modfox_capsule_{}.cap.json", std::process::id()));
    write_capsule_file(&path, &capsule).unwrap();
    let loaded = read_capsule_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, capsule);
    loaded.verify_trace(DEFAULT_TRACE_TOLERANCE).unwrap();
}

/// A hand-written capsule document with only the required fields parses and
/// maps onto a usable generator.
#[test]
fn test_minimal_document_parses() {
    init();
    let json = r#"{
        "name": "slow drift",
        "author": "curation",
        "URL": "https://example.com/capsules/slow-drift",
        "created": "2025-05-20",
        "settings": { "type": 0, "seed": -41, "inner_mod_dur": 9, "outer_mod_dur": 24 }
    }"#;

    let capsule = load_capsule(Cursor::new(json.as_bytes().to_vec())).unwrap();
    assert_eq!(capsule.settings.kind().unwrap(), GeneratorKind::StackedModulo);

    let generator = capsule.to_generator().unwrap();
    let v = generator.eval(100).unwrap();
    assert!((0.0..1.0).contains(&v));
}

/// Tampering with a stored sample must surface as a drift error naming the
/// offending coordinate - a reproducibility failure is reported, never
/// repaired.
#[test]
fn test_tampered_trace_reports_drift() {
    init();
    let mut capsule = build_recorded_capsule(0, ClipTime { start: 40, end: 79 });
    capsule.preview_trace[7] += 0.125;

    match capsule.verify_trace(DEFAULT_TRACE_TOLERANCE) {
        Err(ModulationError::TraceDrift {
            coordinate,
            stored,
            regenerated,
        }) => {
            assert_eq!(coordinate, 47);
            assert!((stored - regenerated).abs() > DEFAULT_TRACE_TOLERANCE);
        }
        other => panic!("expected drift, got {:?}", other),
    }
}

/// Differences below the tolerance are not drift; a capsule produced by an
/// equivalent implementation with rounding noise still verifies.
#[test]
fn test_sub_tolerance_noise_verifies() {
    init();
    let mut capsule = build_recorded_capsule(1, ClipTime { start: 0, end: 29 });
    for sample in capsule.preview_trace.iter_mut() {
        *sample += 1e-9;
    }
    capsule.verify_trace(DEFAULT_TRACE_TOLERANCE).unwrap();
}

/// Validation failures carry the offending field and value.
#[test]
fn test_validation_failures() {
    init();
    let mut capsule = build_recorded_capsule(0, ClipTime { start: 0, end: 9 });

    capsule.settings.type_code = 3;
    assert!(matches!(
        capsule.validate(),
        Err(ModulationError::UnknownGeneratorType { value: 3 })
    ));
    capsule.settings.type_code = 0;

    capsule.settings.clip_time = Some(ClipTime { start: 9, end: 0 });
    assert!(matches!(
        capsule.validate(),
        Err(ModulationError::ClipTime { start: 9, end: 0 })
    ));
    capsule.settings.clip_time = Some(ClipTime { start: 0, end: 9 });

    capsule.preview_trace.pop();
    assert!(matches!(
        capsule.validate(),
        Err(ModulationError::TraceLength { expected: 10, found: 9 })
    ));
}

/// A capsule without a captured window is a parameter preset: it validates,
/// verifies trivially, and regenerates an empty trace.
#[test]
fn test_preset_without_window() {
    init();
    let mut capsule = build_recorded_capsule(1, ClipTime { start: 0, end: 9 });
    capsule.settings.clip_time = None;
    capsule.preview_trace.clear();

    capsule.validate().unwrap();
    capsule.verify_trace(DEFAULT_TRACE_TOLERANCE).unwrap();
    assert!(capsule.regenerate_trace().unwrap().is_empty());
}
