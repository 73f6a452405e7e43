//! Smoke tests for the progress reporter

use texweave::io::progress::PhaseReporter;

#[test]
fn test_reporter_accepts_full_phase_sequence() {
    let mut reporter = PhaseReporter::new();
    reporter.update(0.0, "filling reference with noise");
    reporter.update(0.5, "filling output image");
    reporter.update(0.5, "filling output image");
    reporter.update(1.0, "filling output image");
    reporter.finish();
}

#[test]
fn test_reporter_clamps_out_of_range_fractions() {
    let mut reporter = PhaseReporter::default();
    reporter.update(-0.5, "stitching patches");
    reporter.update(1.5, "stitching patches");
    reporter.finish();
}
