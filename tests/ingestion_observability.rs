use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tabular_report::ingestion::{
    read_sources, CompositeObserver, SourceContext, SourceObserver, SourceOptions, SourceSeverity,
    SourceStats,
};
use tabular_report::ReportError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<(PathBuf, usize)>>,
    failures: Mutex<Vec<SourceSeverity>>,
    alerts: Mutex<Vec<SourceSeverity>>,
}

impl SourceObserver for RecordingObserver {
    fn on_success(&self, ctx: &SourceContext, stats: SourceStats) {
        self.successes.lock().unwrap().push((ctx.path.clone(), stats.rows));
    }

    fn on_failure(&self, _ctx: &SourceContext, severity: SourceSeverity, _error: &ReportError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &SourceContext, severity: SourceSeverity, _error: &ReportError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options_with(obs: Arc<dyn SourceObserver>) -> SourceOptions {
    SourceOptions {
        observer: Some(obs),
        alert_at_or_above: SourceSeverity::Critical,
        ..Default::default()
    }
}

#[test]
fn observer_receives_per_file_row_counts() {
    let obs = Arc::new(RecordingObserver::default());
    let paths = ["tests/fixtures/products.csv", "tests/fixtures/products_extra.csv"];

    read_sources(&paths, &options_with(obs.clone())).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![
            (PathBuf::from(paths[0]), 5),
            (PathBuf::from(paths[1]), 5),
        ]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_missing_file() {
    let obs = Arc::new(RecordingObserver::default());

    let _ = read_sources(&["tests/fixtures/does_not_exist.csv"], &options_with(obs.clone())).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![SourceSeverity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![SourceSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_wrong_extension() {
    let obs = Arc::new(RecordingObserver::default());

    let _ = read_sources(&["tests/fixtures/not_csv.txt"], &options_with(obs.clone())).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![SourceSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn composite_observer_fans_out() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn SourceObserver>> = vec![a.clone(), b.clone()];
    let composite = Arc::new(CompositeObserver::new(observers));

    read_sources(&["tests/fixtures/header_only.csv"], &options_with(composite)).unwrap();

    assert_eq!(a.successes.lock().unwrap().len(), 1);
    assert_eq!(b.successes.lock().unwrap()[0].1, 0);
}
