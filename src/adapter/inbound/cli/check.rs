//! Handler for `check connection`.

use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::output;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Outcome of probing one upstream.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProbeResult {
    pub name: &'static str,
    pub url: String,
    pub status: Option<u16>,
    pub error: Option<String>,
}

impl ProbeResult {
    /// Any HTTP answer counts as reachable; only transport failures do not.
    #[must_use]
    pub fn reachable(&self) -> bool {
        self.status.is_some()
    }
}

/// Probe every upstream concurrently; results keep the configured order.
pub async fn probe_all(config: &Config) -> Vec<ProbeResult> {
    let client = bootstrap::probe_client(config);
    let upstreams = bootstrap::upstreams(config);

    let mut tasks = JoinSet::new();
    for (index, (name, url)) in upstreams.iter().cloned().enumerate() {
        let client = client.clone();
        tasks.spawn(async move {
            let outcome = client.probe(&url).await;
            debug!(name, url = %url, ok = outcome.is_ok(), "Probed upstream");
            (index, name, url, outcome)
        });
    }

    let mut finished: Vec<(usize, ProbeResult)> = Vec::with_capacity(upstreams.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, name, url, outcome)) => {
                let (status, error) = match outcome {
                    Ok(status) => (Some(status), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                finished.push((
                    index,
                    ProbeResult {
                        name,
                        url,
                        status,
                        error,
                    },
                ));
            }
            Err(e) => warn!(error = %e, "Probe task did not complete"),
        }
    }
    in_order(&upstreams, finished)
}

/// Arrange finished probes in upstream order; an upstream without a result
/// is reported as failed.
fn in_order(
    upstreams: &[(&'static str, String)],
    finished: Vec<(usize, ProbeResult)>,
) -> Vec<ProbeResult> {
    let mut slots: Vec<Option<ProbeResult>> = vec![None; upstreams.len()];
    for (index, result) in finished {
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(result);
        }
    }
    slots
        .into_iter()
        .zip(upstreams)
        .map(|(slot, (name, url))| {
            slot.unwrap_or_else(|| ProbeResult {
                name: *name,
                url: url.clone(),
                status: None,
                error: Some("probe task did not complete".to_string()),
            })
        })
        .collect()
}

/// Execute `check connection`.
pub async fn execute_connection(config: &Config) -> Result<()> {
    output::section("Connection Check");
    let pb = output::spinner("Probing upstream APIs...");
    let results = probe_all(config).await;
    let failed = results.iter().filter(|r| !r.reachable()).count();

    if failed == 0 {
        output::spinner_success(&pb, "All upstreams reachable");
    } else {
        output::spinner_fail(&pb, &format!("{failed} upstream(s) unreachable"));
    }

    if output::is_json() {
        output::json_result("check connection", "upstreams", &results);
    } else {
        for result in &results {
            match (result.status, &result.error) {
                (Some(status), _) => {
                    output::success(&format!("{} ({status}) {}", result.name, result.url));
                }
                (None, error) => output::warning(&format!(
                    "{} {}: {}",
                    result.name,
                    result.url,
                    error.as_deref().unwrap_or("unreachable")
                )),
            }
        }
    }

    if failed > 0 {
        return Err(Error::Upstream {
            service: "check",
            message: format!("{failed} of {} upstreams unreachable", results.len()),
        });
    }
    Ok(())
}
