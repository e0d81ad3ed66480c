use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use hireflow::workflows::hiring::pipeline::StageCatalog;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The stage catalog the service runs with. Loaded once at startup and
/// injected into the scheduler.
pub(crate) fn default_stage_catalog() -> StageCatalog {
    StageCatalog::standard()
}
