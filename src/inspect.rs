mod payload;
mod render;
mod request;
mod station;

use std::io::Write;

use tracing::{debug, error, info};

use crate::error::InspectError;

pub use payload::Payload;
pub use render::pretty;
pub use request::FetchRequest;

/// Which element of a sequence payload gets printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    First,
    /// The station whose `meta._key` or `_profile.station_id` equals the id
    Station(String),
}

/// Sends the request and decodes the body.
///
/// A non-success status is returned as [`InspectError::Status`] before the body is read.
pub async fn fetch(
    client: &reqwest::Client,
    request: &FetchRequest,
) -> Result<Payload, InspectError> {
    info!("Fetching {}", request.url());
    let response = request.to_builder(client).send().await?;

    let status = response.status();
    if !status.is_success() {
        error!("Failed to fetch station data: {}", status);
        return Err(InspectError::Status(status));
    }

    let body = response.bytes().await?;
    debug!("Received {} bytes", body.len());

    let payload = Payload::parse(&body)?;
    debug!("Payload is a JSON {}", payload.kind());
    Ok(payload)
}

/// Writes a human-readable rendering of `payload` to `out`.
pub fn render<W: Write>(
    out: &mut W,
    payload: &Payload,
    selection: &Selection,
) -> Result<(), InspectError> {
    match payload {
        Payload::Sequence(items) if items.is_empty() => {
            writeln!(out, "No station data found")?;
        }
        Payload::Sequence(items) => {
            let noun = if items.len() == 1 { "station" } else { "stations" };
            writeln!(out, "Found {} {}", items.len(), noun)?;
            match selection {
                Selection::First => {
                    writeln!(out, "Raw data of the first station:")?;
                    pretty(out, &items[0])?;
                    writeln!(out)?;
                }
                Selection::Station(id) => {
                    match items.iter().find(|item| station::matches(item, id)) {
                        Some(item) => {
                            writeln!(out, "Raw data of station {}:", id)?;
                            pretty(out, item)?;
                            writeln!(out)?;
                        }
                        None => writeln!(out, "Station {} not found", id)?,
                    }
                }
            }
        }
        Payload::Mapping(map) => {
            pretty(out, map)?;
            writeln!(out)?;
        }
        Payload::Other(value) => {
            writeln!(out, "Response is a JSON {}, printing as-is:", payload.kind())?;
            pretty(out, value)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Fetches and renders in one go, propagating every failure.
pub async fn inspect<W: Write>(
    client: &reqwest::Client,
    request: &FetchRequest,
    selection: &Selection,
    out: &mut W,
) -> Result<(), InspectError> {
    let payload = fetch(client, request).await?;
    render(out, &payload, selection)
}

/// Runs [`inspect`] behind a single error boundary: any failure becomes a one-line
/// `Error: ...` diagnostic on `out` and control returns to the caller.
pub async fn run<W: Write>(
    client: &reqwest::Client,
    request: &FetchRequest,
    selection: &Selection,
    out: &mut W,
) {
    if let Err(e) = inspect(client, request, selection, out).await {
        error!("Inspection failed: {}", e);
        if let Err(write_err) = writeln!(out, "Error: {}", e) {
            error!("Failed to write diagnostic: {}", write_err);
        }
    }
}
