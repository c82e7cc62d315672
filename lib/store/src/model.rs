use serde::{Deserialize, Serialize};

/// BuildingCode — one building-code registry entry.
/// Primary key is `id`, assigned by the store at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildingCode {
    /// Opaque unique identifier (UUIDv4 without dashes). Immutable.
    pub id: String,

    /// Building name (e.g. "City Hall").
    pub building_name: String,

    /// The code assigned to the building (e.g. "CH-100").
    pub code: String,

    /// Creation timestamp, RFC 3339. Set once by the store.
    pub created_at: String,

    /// Last-write timestamp, RFC 3339. Refreshed by the store on update.
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_code_json_roundtrip() {
        let record = BuildingCode {
            id: "a1b2c3".into(),
            building_name: "City Hall".into(),
            code: "CH-100".into(),
            created_at: "2025-01-01T00:00:00+00:00".into(),
            updated_at: "2025-01-01T00:00:00+00:00".into(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: BuildingCode = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn building_code_serializes_camel_case() {
        let record = BuildingCode {
            id: "a1b2c3".into(),
            building_name: "City Hall".into(),
            code: "CH-100".into(),
            created_at: "2025-01-01T00:00:00+00:00".into(),
            updated_at: "2025-01-01T00:00:00+00:00".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["buildingName"], "City Hall");
        assert_eq!(json["createdAt"], "2025-01-01T00:00:00+00:00");
        assert_eq!(json["updatedAt"], "2025-01-01T00:00:00+00:00");
    }
}
