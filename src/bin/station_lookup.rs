use std::io::Write;

use station_peek::{inspect, probe};
use tracing::{Instrument, info, span};

/// Looks up the school's own station in the scan, sending a browser user agent.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    station_peek::init_tracing();

    let probe = probe::station_lookup();
    let client = reqwest::Client::new();
    let mut stdout = std::io::stdout().lock();

    inspect::run(&client, &probe.request, &probe.selection, &mut stdout)
        .instrument(span!(tracing::Level::INFO, "probe", kind = "station_lookup"))
        .await;
    info!("Done");

    stdout.flush()?;
    Ok(())
}
