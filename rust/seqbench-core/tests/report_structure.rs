//! End-to-end checks on the driver's text report and summary.

use seqbench_core::{
    stats, BenchConfig, BenchmarkDriver, ContainerKind, Phase, RandomSource, VarianceMethod,
};

// =============================================================================
// Helpers
// =============================================================================

fn config(elements: usize) -> BenchConfig {
    BenchConfig::default()
        .with_element_count(elements)
        .with_read_repeat(3)
        .with_display_count(10)
}

fn run_text(cfg: BenchConfig, seed: u64) -> (String, seqbench_core::RunSummary) {
    let driver = BenchmarkDriver::new(cfg).expect("valid config");
    let mut out = Vec::new();
    let summary = driver
        .run_with(&mut RandomSource::with_seed(seed), &mut out)
        .expect("run succeeds");
    (String::from_utf8(out).expect("utf8 report"), summary)
}

/// Replace every `<number> ms` timing with a placeholder.
fn shape(report: &str) -> Vec<String> {
    report
        .lines()
        .map(|line| match line.rsplit_once(": ") {
            Some((label, value)) if value.ends_with(" ms") => format!("{}: <t> ms", label),
            Some((label, _)) if label.ends_with(" mean") || label.ends_with(" variance") => {
                format!("{}: <v>", label)
            }
            Some((label, _)) if !label.starts_with("elements") => format!("{}: <xs>", label),
            _ => line.to_string(),
        })
        .collect()
}

// =============================================================================
// Report layout
// =============================================================================

#[test]
fn report_lines_follow_phase_order() {
    let (text, _) = run_text(config(1_000), 1);
    let expected = vec![
        "===== sequence container benchmark =====",
        "elements: 1000",
        "",
        "-- random sample --",
        "random sample: <t> ms",
        "",
        "-- copy --",
        "Vec (no reserve): <t> ms",
        "Vec (reserved): <t> ms",
        "VecDeque: <t> ms",
        "LinkedList: <t> ms",
        "",
        "-- sequential read (3 repeats) --",
        "Vec: <t> ms",
        "VecDeque: <t> ms",
        "LinkedList: <t> ms",
        "",
        "-- first 10 elements --",
        "Vec: <xs>",
        "VecDeque: <xs>",
        "LinkedList: <xs>",
        "",
        "-- mean --",
        "Vec_mean: <t> ms",
        "Vec mean: <v>",
        "VecDeque_mean: <t> ms",
        "VecDeque mean: <v>",
        "LinkedList_mean: <t> ms",
        "LinkedList mean: <v>",
        "",
        "-- variance --",
        "Vec_variance: <t> ms",
        "Vec variance: <v>",
        "VecDeque_variance: <t> ms",
        "VecDeque variance: <v>",
        "LinkedList_variance: <t> ms",
        "LinkedList variance: <v>",
        "",
        "===== done =====",
    ];
    assert_eq!(shape(&text), expected);
}

#[test]
fn timing_lines_use_two_decimals() {
    let (text, _) = run_text(config(500), 2);
    for line in text.lines().filter(|l| l.ends_with(" ms")) {
        let value = line.rsplit_once(": ").unwrap().1.trim_end_matches(" ms");
        let decimals = value.split_once('.').map(|(_, d)| d.len());
        assert_eq!(decimals, Some(2), "bad timing line: {line}");
        assert!(value.parse::<f64>().unwrap() >= 0.0);
    }
}

#[test]
fn stat_lines_use_fixed_precision() {
    let (text, summary) = run_text(config(500), 3);
    let vec_stats = summary.stats_for(ContainerKind::Vec).unwrap();
    assert!(text.contains(&format!("Vec mean: {:.3}\n", vec_stats.mean)));
    assert!(text.contains(&format!("Vec variance: {:.1}\n", vec_stats.variance)));
}

#[test]
fn display_lines_match_between_containers() {
    let (text, _) = run_text(config(1_000), 4);
    let heads: Vec<&str> = text
        .lines()
        .skip_while(|l| !l.starts_with("-- first"))
        .skip(1)
        .take(3)
        .map(|l| l.split_once(": ").unwrap().1)
        .collect();
    assert_eq!(heads.len(), 3);
    assert_eq!(heads[0], heads[1]);
    assert_eq!(heads[1], heads[2]);
    assert!(heads[0].ends_with(' '));
    assert_eq!(heads[0].split_whitespace().count(), 10);
}

#[test]
fn short_containers_display_every_element() {
    let (text, _) = run_text(config(4), 5);
    let line = text.lines().find(|l| l.starts_with("LinkedList: ") && !l.ends_with(" ms"));
    let values = line.unwrap().trim_start_matches("LinkedList: ");
    assert_eq!(values.split_whitespace().count(), 4);
}

// =============================================================================
// Summary properties
// =============================================================================

#[test]
fn stats_match_recomputed_sample() {
    let cfg = config(5_000);
    let sample = RandomSource::with_seed(77)
        .generate(cfg.element_count, cfg.random_min, cfg.random_max)
        .unwrap();
    let (_, summary) = run_text(cfg, 77);

    let expected_mean = stats::mean(sample.iter().copied());
    let expected_var = stats::variance(sample.iter().copied());
    for kind in ContainerKind::ALL {
        let s = summary.stats_for(kind).unwrap();
        assert_eq!(s.len, 5_000);
        assert_eq!(s.mean, expected_mean);
        assert_eq!(s.variance, expected_var);
    }
}

#[test]
fn empty_run_reports_zero_statistics() {
    let (text, summary) = run_text(config(0), 9);
    for s in &summary.stats {
        assert_eq!(s.len, 0);
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.variance, 0.0);
    }
    assert!(text.contains("Vec mean: 0.000\n"));
    assert!(text.contains("LinkedList variance: 0.0\n"));
    assert!(text.contains("VecDeque: \n"));
}

#[test]
fn different_seeds_same_structure() {
    let (a, sa) = run_text(config(2_000), 100);
    let (b, sb) = run_text(config(2_000), 200);
    assert_eq!(shape(&a), shape(&b));
    assert_ne!(
        sa.stats_for(ContainerKind::Vec).unwrap().mean,
        sb.stats_for(ContainerKind::Vec).unwrap().mean
    );
}

#[test]
fn every_timed_block_is_recorded_once() {
    let (_, summary) = run_text(config(100), 6);
    assert_eq!(summary.phase_timings(Phase::Generate).count(), 1);
    assert_eq!(summary.phase_timings(Phase::Copy).count(), 4);
    assert_eq!(summary.phase_timings(Phase::Read).count(), 3);
    assert_eq!(summary.phase_timings(Phase::Mean).count(), 3);
    assert_eq!(summary.phase_timings(Phase::Variance).count(), 3);
}

#[test]
fn more_read_repeats_take_longer() {
    let cfg = config(200_000).with_read_repeat(1);
    let (_, base) = run_text(cfg.clone(), 10);
    let (_, heavy) = run_text(cfg.with_read_repeat(40), 10);
    let base_t = base.timing(Phase::Read, "LinkedList").unwrap();
    let heavy_t = heavy.timing(Phase::Read, "LinkedList").unwrap();
    assert!(heavy_t > base_t, "{heavy_t:?} <= {base_t:?}");
}

#[test]
fn two_pass_variance_matches_welford_in_report() {
    let cfg = config(3_000).with_variance_method(VarianceMethod::TwoPass);
    let (_, summary) = run_text(cfg, 12);
    let sample = RandomSource::with_seed(12).generate(3_000, -100, 100).unwrap();
    let welford = stats::variance(sample.iter().copied());
    for s in &summary.stats {
        assert!((s.variance - welford).abs() <= 1e-9 * welford.max(1.0));
    }
}

#[test]
fn output_failure_is_reported_as_error() {
    struct Closed;
    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let driver = BenchmarkDriver::new(config(10)).unwrap();
    let err = driver
        .run_with(&mut RandomSource::with_seed(1), Closed)
        .unwrap_err();
    assert!(matches!(err, seqbench_core::BenchError::Output(_)));
}
