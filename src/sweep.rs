//! Dead-link detection.
//!
//! A sweep issues one probe per bookmark, fanned out on a bounded worker
//! pool, and joins them all before touching any group. Removals are then
//! applied per group as a single batch. Probes only ever see a snapshot of
//! `(group, title, url)` triples, never the live maps.
//!
//! A bookmark counts as dead only when the server actually answered with
//! an error status. Transport failures (timeout, refused connection, DNS)
//! are logged and keep the bookmark.

use std::collections::HashMap;
use std::time::Duration;

use rayon::prelude::*;

use crate::error::Result;
use crate::model::Group;

/// HTTP status at or above which a probed bookmark counts as dead.
const DEAD_STATUS_FLOOR: u16 = 400;

const DEFAULT_WORKERS: usize = 8;
const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Probe pool size shared by the whole sweep, not one pool per group.
    pub workers: usize,
    /// Per-probe request timeout; bounds the sweep at roughly
    /// (bookmarks / workers) * timeout instead of the slowest server.
    pub probe_timeout: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

/// Outcome of probing one URL.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// The server answered with a status code.
    Status(u16),
    /// The server could not be reached; inconclusive.
    TransportError(String),
}

/// Issues one liveness probe per call. Seam between the sweep and the
/// network, so tests can script outcomes without a server.
pub trait Prober {
    fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Production prober: one GET per bookmark with a bounded timeout.
/// GET rather than HEAD because HEAD support is spotty in the wild.
pub struct HttpProber {
    client: reqwest::blocking::Client,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("linkvault/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Prober for HttpProber {
    fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send() {
            Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
            Err(e) => ProbeOutcome::TransportError(e.to_string()),
        }
    }
}

/// Probe every bookmark across `groups` and remove the confirmed-dead
/// ones. Returns how many bookmarks were removed.
pub(crate) fn sweep_store<P: Prober + Sync>(
    groups: &mut HashMap<String, Group>,
    prober: &P,
    config: &SweepConfig,
) -> usize {
    let targets: Vec<(String, String, String)> = groups
        .values()
        .flat_map(|g| {
            g.bookmarks()
                .map(|b| (g.name.clone(), b.title.clone(), b.url.clone()))
        })
        .collect();
    if targets.is_empty() {
        return 0;
    }

    // The pool is owned by this one sweep and torn down when it returns,
    // even if probes panic inside rayon.
    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!(error = %e, "could not build probe pool, skipping sweep");
            return 0;
        }
    };

    // Fan-out / fan-in: par_iter returns only once every probe is done.
    let dead: Vec<(String, String)> = pool.install(|| {
        targets
            .par_iter()
            .filter_map(|(group, title, url)| match prober.probe(url) {
                ProbeOutcome::Status(code) if code >= DEAD_STATUS_FLOOR => {
                    Some((group.clone(), title.clone()))
                }
                ProbeOutcome::Status(_) => None,
                ProbeOutcome::TransportError(reason) => {
                    tracing::warn!(url = %url, %reason, "probe inconclusive, keeping bookmark");
                    None
                }
            })
            .collect()
    });

    let mut dead_by_group: HashMap<String, Vec<String>> = HashMap::new();
    for (group, title) in dead {
        dead_by_group.entry(group).or_default().push(title);
    }

    let mut removed = 0;
    for (group_name, titles) in dead_by_group {
        if let Some(group) = groups.get_mut(&group_name) {
            removed += group.remove_titles(&titles);
        }
    }
    removed
}
