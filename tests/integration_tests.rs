//! Integration tests for the full planning pipeline.
//!
//! Each test drives load → validate → expand → pack → render over a JSON
//! fixture and checks the structural properties of the result: piece
//! conservation, the per-bar capacity invariant, the derived metrics,
//! and the shape of the rendered cut sheet.

use std::path::{Path, PathBuf};

use cutplan_rs::{
    compute_plan, expand_openings, load_openings, pack_pieces, plan_from_file, render_plan,
    validate_openings, CuttingPlan, OpeningSpec, PieceRole, PlanError, PlannerConfig,
    RequiredPiece,
};

/// Fixture directory for integration tests
const FIXTURE_DIR: &str = "tests/fixtures";

fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURE_DIR).join(name)
}

/// Load a fixture and assert it validates cleanly.
fn load_and_validate(path: &Path) -> Vec<OpeningSpec> {
    let openings = load_openings(path).expect("failed to load fixture");
    let validation =
        validate_openings(&openings, &PlannerConfig::default()).expect("validation error");

    for warning in &validation.warnings {
        eprintln!("Warning: {}", warning);
    }

    assert!(
        validation.passed,
        "validation failed: {:?}",
        validation.errors
    );
    openings
}

/// Validates a complete plan:
/// 1. Every input piece appears in exactly one bar
/// 2. No bar's assigned lengths exceed its capacity
/// 3. The waste identity holds
fn assert_plan_valid(plan: &CuttingPlan, input_pieces: &[RequiredPiece]) {
    assert_eq!(
        plan.piece_count(),
        input_pieces.len(),
        "expected {} pieces placed, got {}",
        input_pieces.len(),
        plan.piece_count()
    );

    let mut placed: Vec<RequiredPiece> = plan
        .bars
        .iter()
        .flat_map(|b| b.pieces.iter().copied())
        .collect();
    let mut expected: Vec<RequiredPiece> = input_pieces.to_vec();
    let key = |p: &RequiredPiece| (p.opening, p.length, format!("{:?}", p.role));
    placed.sort_by_key(key);
    expected.sort_by_key(key);
    assert_eq!(placed, expected, "placed pieces differ from input pieces");

    for bar in &plan.bars {
        assert!(
            bar.used_length() <= bar.capacity,
            "bar #{} overfilled: {} cm in a {} cm bar",
            bar.number,
            bar.used_length(),
            bar.capacity
        );
    }

    let total_length: u32 = input_pieces.iter().map(|p| p.length).sum();
    assert_eq!(
        plan.total_waste(),
        plan.bar_count() as u32 * plan.bar_length - total_length
    );
}

// ==================== Pipeline tests ====================

/// One square opening, no overrides: three 150 cm pieces in one bar.
#[test]
fn test_single_opening_pipeline() {
    let openings = load_and_validate(&fixture("single_opening.json"));
    let pieces = expand_openings(&openings);
    assert_eq!(pieces.len(), 3);
    assert_eq!(pieces[0].role, PieceRole::HeightLeft);
    assert_eq!(pieces[1].role, PieceRole::HeightRight);
    assert_eq!(pieces[2].role, PieceRole::WidthBottom);
    assert!(pieces.iter().all(|p| p.length == 150 && p.opening == 1));

    let plan = pack_pieces(&pieces, 600).expect("packing failed");
    assert_plan_valid(&plan, &pieces);
    assert_eq!(plan.bar_count(), 1);
    assert_eq!(plan.bars[0].waste(), 150);
}

/// Two identical openings whose six pieces fill one bar exactly.
#[test]
fn test_exact_fill_pipeline() {
    let openings = load_and_validate(&fixture("two_openings_full_bar.json"));
    let pieces = expand_openings(&openings);
    assert_eq!(pieces.len(), 6);

    let plan = pack_pieces(&pieces, 600).expect("packing failed");
    assert_plan_valid(&plan, &pieces);
    assert_eq!(plan.bar_count(), 1);
    assert_eq!(plan.total_waste(), 0);
    assert_eq!(plan.utilization_percent(), 100.0);
}

/// Three openings with both override kinds in play.
#[test]
fn test_mixed_openings_pipeline() {
    let openings = load_and_validate(&fixture("mixed_openings.json"));
    assert_eq!(openings[1].height_right, 148);
    assert_eq!(openings[1].width_top, Some(138));

    let pieces = expand_openings(&openings);
    // 3 openings, one with a top width: 3*3 + 1
    assert_eq!(pieces.len(), 10);

    let plan = pack_pieces(&pieces, 600).expect("packing failed");
    assert_plan_valid(&plan, &pieces);
    assert_eq!(plan.bar_count(), 3);
    assert_eq!(plan.total_waste(), 514);
}

/// An empty opening list yields an empty plan, not an error.
#[test]
fn test_empty_list_pipeline() {
    let plan = plan_from_file(&fixture("empty_list.json"), &PlannerConfig::default())
        .expect("empty input should produce an empty plan");
    assert_eq!(plan.bar_count(), 0);
    assert_eq!(plan.total_waste(), 0);
    assert_eq!(plan.utilization_percent(), 0.0);
}

// ==================== Rejection tests ====================

/// Out-of-range dimensions reject the whole computation before packing,
/// naming every offender in one batch.
#[test]
fn test_invalid_openings_rejected() {
    let openings = load_openings(&fixture("invalid_openings.json")).expect("load failed");
    let result = compute_plan(&openings, &PlannerConfig::default());

    match result {
        Err(PlanError::InvalidDimensions { errors }) => {
            // The 700 cm height is duplicated into both side pieces.
            assert_eq!(errors.len(), 3);
            assert!(errors.iter().any(|e| e.contains("opening 1") && e.contains("700")));
            assert!(errors.iter().any(|e| e.contains("opening 2") && e.contains("0 cm")));
        }
        other => panic!("expected InvalidDimensions, got {:?}", other),
    }
}

#[test]
fn test_too_many_openings_rejected() {
    let openings: Vec<OpeningSpec> = (1..=51)
        .map(|i| OpeningSpec::new(i, 100, None, 100, None))
        .collect();
    let result = compute_plan(&openings, &PlannerConfig::default());
    assert!(matches!(result, Err(PlanError::TooManyOpenings { .. })));
}

#[test]
fn test_missing_input_file() {
    let result = plan_from_file(Path::new("tests/fixtures/nope.json"), &PlannerConfig::default());
    assert!(matches!(result, Err(PlanError::FileNotFound { .. })));
}

// ==================== Determinism tests ====================

/// The same input always produces the identical plan.
#[test]
fn test_pipeline_is_deterministic() {
    let config = PlannerConfig::default();
    let first = plan_from_file(&fixture("mixed_openings.json"), &config).unwrap();
    let second = plan_from_file(&fixture("mixed_openings.json"), &config).unwrap();
    assert_eq!(first, second);
}

// ==================== Report tests ====================

/// The rendered cut sheet carries the summary, one line per bar, and
/// per-bar instructions with leftovers.
#[test]
fn test_report_structure() {
    let plan = plan_from_file(&fixture("mixed_openings.json"), &PlannerConfig::default()).unwrap();
    let report = render_plan(&plan);

    assert!(report.contains("Cutting plan summary"));
    assert!(report.contains("Bars required (600 cm): 3"));
    assert!(report.contains("Total waste: 514 cm"));
    assert!(report.contains("Cutting instructions"));

    for bar in &plan.bars {
        assert!(report.contains(&format!("Bar #{}", bar.number)));
        assert!(report.contains(&format!("Leftover: {} cm", bar.waste())));
    }

    // Every piece shows up in the instructions with its role and length.
    for piece in plan.bars.iter().flat_map(|b| &b.pieces) {
        assert!(report.contains(&format!(
            "{} for opening {}: {} cm",
            piece.role, piece.opening, piece.length
        )));
    }
}

/// Plans serialize to JSON and come back identical.
#[test]
fn test_plan_json_round_trip() {
    let plan = plan_from_file(&fixture("mixed_openings.json"), &PlannerConfig::default()).unwrap();
    let json = serde_json::to_string(&plan).unwrap();
    let back: CuttingPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, back);
}

// ==================== Scale test ====================

/// Fifty four-piece openings (the configured maximum) pack cleanly.
#[test]
fn test_maximum_opening_count() {
    let openings: Vec<OpeningSpec> = (1..=50)
        .map(|i| OpeningSpec::new(i, 120, Some(118), 80, Some(78)))
        .collect();
    let pieces = expand_openings(&openings);
    assert_eq!(pieces.len(), 200);

    let plan = compute_plan(&openings, &PlannerConfig::default()).unwrap();
    assert_plan_valid(&plan, &pieces);

    // 50 * (120+118+80+78) = 19800 cm of cuts; at least 33 full bars.
    assert!(plan.bar_count() >= 33);
    assert!(plan.utilization_percent() > 0.0 && plan.utilization_percent() <= 100.0);
}
