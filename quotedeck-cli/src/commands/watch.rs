//! `quotedeck watch` — periodic reconciliation loop.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use quotedeck_sync::{pipeline, HttpFeed, RemoteFeed, SyncOutcome, DEFAULT_SERVER_URL};

/// Arguments for `quotedeck watch`.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between reconciliation passes.
    #[arg(long, default_value_t = 30)]
    pub interval: u64,

    /// Remote endpoint URL.
    #[arg(long, env = "QUOTEDECK_SERVER_URL")]
    pub server: Option<String>,
}

impl WatchArgs {
    pub fn run(self) -> Result<()> {
        init_tracing();
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let feed = HttpFeed::new(
            self.server
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
        );

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("failed to build tokio runtime")?;
        runtime
            .block_on(watch_loop(
                home,
                feed,
                Duration::from_secs(self.interval.max(1)),
                None,
            ))
            .map(|_| ())
    }
}

/// Counters for the loop's tick decisions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LoopStats {
    passes_started: u64,
    ticks_skipped: u64,
}

/// Run reconciliation passes on a fixed interval until ctrl-c, or until
/// `tick_limit` ticks have been handled.
///
/// A pass may outlive the interval; a tick that arrives while one is still
/// in flight is skipped rather than racing two passes over the shared store.
async fn watch_loop<F>(
    home: PathBuf,
    feed: F,
    period: Duration,
    tick_limit: Option<u64>,
) -> Result<LoopStats>
where
    F: RemoteFeed + Clone + Send + Sync + 'static,
{
    tracing::info!(interval_secs = period.as_secs(), "watch loop started");

    let in_flight = Arc::new(tokio::sync::Mutex::new(()));
    let mut stats = LoopStats::default();
    let mut remaining = tick_limit;

    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    interval.tick().await; // consume the first immediate tick

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("ctrl-c handler failed")?;
                tracing::info!("received ctrl-c, stopping watch loop");
                break;
            }
            _ = interval.tick() => {
                match in_flight.clone().try_lock_owned() {
                    Ok(guard) => {
                        stats.passes_started += 1;
                        let home = home.clone();
                        let feed = feed.clone();
                        tokio::task::spawn_blocking(move || {
                            let _guard = guard;
                            match pipeline::run(&home, &feed, false) {
                                Ok(SyncOutcome::Completed { appended, total, .. }) if appended > 0 => {
                                    tracing::info!(appended, total, "quotes synced with server");
                                }
                                Ok(_) => {}
                                Err(err) => {
                                    tracing::error!(error = %err, "reconciliation pass failed");
                                }
                            }
                        });
                    }
                    Err(_) => {
                        stats.ticks_skipped += 1;
                        tracing::warn!("previous pass still in flight; skipping tick");
                    }
                }
                if let Some(left) = remaining.as_mut() {
                    *left = left.saturating_sub(1);
                    if *left == 0 {
                        break;
                    }
                }
            }
        }
    }

    // Let an in-flight pass finish before returning.
    let _guard = in_flight.lock().await;
    Ok(stats)
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
