use serde::Deserialize;
use serde_json::Value;

// The scan endpoint is not consistent about where it puts the station id, so both
// `meta._key` and `_profile.station_id` are read, each on its own.
#[derive(Deserialize, Debug)]
struct Meta {
    #[serde(rename = "_key")]
    key: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Profile {
    station_id: Option<String>,
}

/// Decodes `station[field]`, or `None` when it is missing or has another shape.
fn part<'a, T: Deserialize<'a>>(station: &'a Value, field: &str) -> Option<T> {
    T::deserialize(station.get(field)?).ok()
}

/// Returns true when `station` is identified by `id`, either through `meta._key`
/// or `_profile.station_id`. A malformed part does not hide the other one.
pub fn matches(station: &Value, id: &str) -> bool {
    let by_key = part::<Meta>(station, "meta")
        .and_then(|m| m.key)
        .is_some_and(|key| key == id);
    let by_profile = part::<Profile>(station, "_profile")
        .and_then(|p| p.station_id)
        .is_some_and(|station_id| station_id == id);

    by_key || by_profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_meta_key() {
        let station = json!({ "meta": { "_key": "781C3CA55E54", "_ts": 1 } });
        assert!(matches(&station, "781C3CA55E54"));
        assert!(!matches(&station, "000000000000"));
    }

    #[test]
    fn matches_profile_station_id() {
        let station = json!({ "_profile": { "station_id": "781C3CA55E54" }, "meta": {} });
        assert!(matches(&station, "781C3CA55E54"));
    }

    #[test]
    fn odd_shapes_never_match() {
        assert!(!matches(&json!(null), "x"));
        assert!(!matches(&json!("x"), "x"));
        assert!(!matches(&json!({ "meta": { "_key": 42 } }), "42"));
    }

    #[test]
    fn malformed_meta_does_not_hide_profile_id() {
        let numeric_key = json!({
            "meta": { "_key": 12345 },
            "_profile": { "station_id": "781C3CA55E54" }
        });
        assert!(matches(&numeric_key, "781C3CA55E54"));

        let string_meta = json!({ "meta": "n/a", "_profile": { "station_id": "781C3CA55E54" } });
        assert!(matches(&string_meta, "781C3CA55E54"));
    }

    #[test]
    fn malformed_profile_does_not_hide_meta_key() {
        let station = json!({ "meta": { "_key": "781C3CA55E54" }, "_profile": [1, 2] });
        assert!(matches(&station, "781C3CA55E54"));
    }
}
