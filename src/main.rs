//! Aurora console entrypoint: probes the prediction service, then runs one
//! analysis cycle or a daemon loop over the fixed asset roster. Each completed
//! prediction updates the asset, appends to the session history, and redraws
//! that asset's trace.

use aurora_console::{
    config::ConsoleConfig,
    history::{HistoryBuffer, ScoreObservation},
    logging::{AssessmentLine, StructuredLogger},
    risk::{Insight, ModelMode, TaggedScore},
    service::PredictClient,
    telemetry::{format_display_time, Roster},
    trace::{render, TraceSurface},
};
use chrono::Utc;
use std::time::Duration;
use tracing::{info, warn};

fn run_one_cycle(
    client: &PredictClient,
    mode: ModelMode,
    roster: &mut Roster,
    history: &mut HistoryBuffer,
    surface: &mut TraceSurface,
) {
    for asset in roster.iter_mut() {
        match client.predict(mode, &asset.reading) {
            Ok(response) => {
                let now = Utc::now();
                asset.apply_prediction(mode, &response, now);
                history.append(ScoreObservation {
                    timestamp: now,
                    score: TaggedScore::new(mode, response.anomaly_score),
                    is_anomaly: response.anomalous(),
                    asset_id: asset.id.clone(),
                });
                render(surface, history, &asset.id);

                let assessment = asset.assessment();
                if assessment.insight != Insight::NormalEnvelope {
                    info!(
                        asset_id = %asset.id,
                        risk_percent = assessment.risk_percent,
                        insight = assessment.insight.text(),
                        "risk assessment"
                    );
                }
            }
            Err(e) => {
                warn!(asset_id = %asset.id, error = %e, "analysis engine offline; no new observation");
            }
        }
    }
}

fn emit_summary(roster: &Roster) {
    let mut out = std::io::stdout();
    for asset in roster.iter() {
        let assessment = asset.assessment();
        let analysis = asset.analysis.as_ref();
        let line = AssessmentLine {
            asset_id: &asset.id,
            name: &asset.name,
            probe_id: &asset.probe_id,
            risk_percent: assessment.risk_percent,
            insight: assessment.insight.text(),
            checked: format_display_time(asset.last_checked()),
            is_anomaly: analysis.map(|a| a.is_anomaly),
            failure_probability: asset.failure_probability,
            cluster_name: analysis
                .and_then(|a| a.cluster.as_ref())
                .and_then(|c| c.name.as_deref()),
        };
        StructuredLogger::emit_json(&line, &mut out);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("AURORA_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = ConsoleConfig::load(&config_path);

    StructuredLogger::init(&config.log);

    info!(base_url = %config.service.base_url, mode = config.mode.as_str(), "aurora console starting");

    let client = PredictClient::new(&config.service)?;
    match client.health() {
        Ok(status) => info!(
            status = %status.status,
            unsupervised = status.unsupervised_model_loaded,
            supervised = status.supervised_model_loaded,
            "system connected"
        ),
        Err(e) => warn!(error = %e, "system disconnected"),
    }

    let mut roster = Roster::default();
    let mut history = HistoryBuffer::default();
    let mut surface = TraceSurface::new(
        config.trace.width,
        config.trace.height,
        config.trace.device_pixel_ratio,
    );

    let interval_secs = config.cycle_interval_secs;
    let run_daemon = interval_secs > 0;

    if run_daemon {
        info!(interval_secs, "daemon mode (Ctrl+C to stop)");
        static STOP: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
        let _ = ctrlc::set_handler(|| {
            STOP.store(true, std::sync::atomic::Ordering::Relaxed);
        });
        let mut cycle: u64 = 0;
        while !STOP.load(std::sync::atomic::Ordering::Relaxed) {
            cycle += 1;
            run_one_cycle(&client, config.mode, &mut roster, &mut history, &mut surface);
            tracing::debug!(cycle, buffered = history.len(), "cycle complete");
            for _ in 0..(interval_secs as u32) {
                if STOP.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                std::thread::sleep(Duration::from_secs(1));
            }
        }
        info!("aurora console stopping");
    } else {
        run_one_cycle(&client, config.mode, &mut roster, &mut history, &mut surface);
        emit_summary(&roster);
        info!("analysis cycle complete");
    }

    Ok(())
}
