use serde::{Deserialize, Deserializer, Serialize};

/// A point on the map in decimal degrees.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One visited-city record as stored by the remote city API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub position: Position,
}

/// A city that has not been persisted yet. The remote store assigns the id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCity {
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub position: Position,
}

/// A distinct country derived from the visited cities.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Country {
    pub country: String,
    pub emoji: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

// json-server hands out numeric ids for seeded data and string ids for new records.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_reads_camel_case_payload() {
        let city: City = serde_json::from_str(
            r#"{
                "cityName": "Lisbon",
                "country": "Portugal",
                "emoji": "🇵🇹",
                "date": "2027-10-31T15:59:59.138Z",
                "notes": "My favorite city so far!",
                "position": { "lat": 38.727881642324164, "lng": -9.140900099907554 },
                "id": "73930385"
            }"#,
        )
        .unwrap();

        assert_eq!(city.id, "73930385");
        assert_eq!(city.city_name, "Lisbon");
        assert_eq!(city.notes.as_deref(), Some("My favorite city so far!"));
        assert_eq!(city.position.lng, -9.140900099907554);
    }

    #[test]
    fn numeric_ids_become_strings() {
        let city: City = serde_json::from_str(
            r#"{"id": 98443197, "cityName": "Berlin", "country": "Germany", "emoji": "🇩🇪",
                "date": "2027-02-12T09:24:11.863Z", "position": {"lat": 52.53, "lng": 13.38}}"#,
        )
        .unwrap();

        assert_eq!(city.id, "98443197");
        assert_eq!(city.notes, None);
    }

    #[test]
    fn new_city_has_no_id_and_omits_missing_notes() {
        let draft = NewCity {
            city_name: "Madrid".to_string(),
            country: "Spain".to_string(),
            emoji: "🇪🇸".to_string(),
            date: "2024-01-01".to_string(),
            notes: None,
            position: Position::new(40.46, -3.75),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("notes").is_none());
        assert_eq!(value["cityName"], "Madrid");
        assert_eq!(value["position"]["lat"], 40.46);
    }
}
