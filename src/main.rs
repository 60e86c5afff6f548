use std::io::Write;

use station_peek::{inspect, probe};
use tracing::{Instrument, info, span};

/// Fetches the latest data of the stations around the school and prints the first
/// station's raw JSON. Failures are printed, never turned into a non-zero exit.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    station_peek::init_tracing();

    let probe = probe::coordinate_scan();
    let client = reqwest::Client::new();
    let mut stdout = std::io::stdout().lock();

    inspect::run(&client, &probe.request, &probe.selection, &mut stdout)
        .instrument(span!(tracing::Level::INFO, "probe", kind = "coordinate_scan"))
        .await;
    info!("Done");

    stdout.flush()?;
    Ok(())
}
