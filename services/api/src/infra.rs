use metrics_exporter_prometheus::PrometheusHandle;
use paisa_planner::emi::ScoringRubric;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_scoring_rubric() -> ScoringRubric {
    ScoringRubric::standard()
}
