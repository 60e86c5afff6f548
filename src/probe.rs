// Fixed requests against the KidBright weather-station scan API
use crate::inspect::{FetchRequest, Selection};

const SCAN_ENDPOINT: &str = "https://watch.kid-bright.org/diy/api/scan";
const DATASOURCE: &str = "latest_data_by_station";

// Bang Pakong school
const LAT: &str = "13.504004";
const LON: &str = "101.002182";
const TARGET_STATION_ID: &str = "781C3CA55E54";

/// The scan endpoint rejects the default client user agent
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// A request together with what to print from its response
#[derive(Debug, Clone)]
pub struct Probe {
    pub request: FetchRequest,
    pub selection: Selection,
}

/// Builds the scan URL for the stations around a coordinate.
pub fn scan_url(endpoint: &str, lat: &str, lon: &str) -> String {
    format!(
        "{}?datasource={}&lat={}&lon={}",
        endpoint, DATASOURCE, lat, lon
    )
}

/// Latest data of the stations around the school, printing the first one.
pub fn coordinate_scan() -> Probe {
    coordinate_scan_at(SCAN_ENDPOINT)
}

pub fn coordinate_scan_at(endpoint: &str) -> Probe {
    Probe {
        request: FetchRequest::new(scan_url(endpoint, LAT, LON)),
        selection: Selection::First,
    }
}

/// Same scan with a browser user agent, printing the school's own station.
pub fn station_lookup() -> Probe {
    station_lookup_at(SCAN_ENDPOINT)
}

pub fn station_lookup_at(endpoint: &str) -> Probe {
    Probe {
        request: FetchRequest::new(scan_url(endpoint, LAT, LON))
            .with_user_agent(BROWSER_USER_AGENT),
        selection: Selection::Station(TARGET_STATION_ID.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_scan_targets_the_school() {
        let probe = coordinate_scan();
        assert_eq!(
            probe.request.url(),
            "https://watch.kid-bright.org/diy/api/scan?datasource=latest_data_by_station&lat=13.504004&lon=101.002182"
        );
        assert!(probe.request.headers().is_empty());
        assert_eq!(probe.selection, Selection::First);
    }

    #[test]
    fn station_lookup_sends_browser_user_agent() {
        let probe = station_lookup_at("http://127.0.0.1:1234/scan");
        assert!(probe.request.url().starts_with("http://127.0.0.1:1234/scan?"));
        assert_eq!(
            probe.request.headers(),
            &[("user-agent".to_string(), "Mozilla/5.0".to_string())]
        );
        assert_eq!(probe.selection, Selection::Station("781C3CA55E54".into()));
    }
}
