use anyhow::{anyhow, Result};
use tracing::info;

use crate::app_state::AppState;

/// Runs only when WHITEBOX_DEBUG_MODE is set: builds both views for one model
/// and logs them instead of serving.
pub async fn run_debug(state: &AppState) -> Result<()> {
    info!("🔧 Debug mode: running debug tasks...");

    let service = &state.dashboard_service;
    let model_id = service
        .config()
        .debug_model_id
        .clone()
        .ok_or_else(|| anyhow!("WHITEBOX_DEBUG_MODEL_ID is required in debug mode"))?;

    let drift = service.get_drift_dashboard(model_id.clone()).await?;
    info!(
        model_id = %model_id,
        global = drift.annotation.global,
        "Drift view: {}",
        serde_json::to_string_pretty(&drift.view)?
    );

    for model_type in ["binary", "multi_class", "regression"] {
        let perf = service
            .get_performance_dashboard(model_id.clone(), model_type.to_string())
            .await?;
        info!(
            model_id = %model_id,
            model_type,
            rendered = perf.rendered,
            "Performance summaries: {:?}",
            perf.summaries
        );
    }

    info!("Debug tasks completed. Exiting...");
    Ok(())
}
