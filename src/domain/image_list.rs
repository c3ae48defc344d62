//! Storage codec for an entry's attached image references

use tracing::warn;

/// Encode image references as a JSON array string
pub fn encode(image_uris: &[String]) -> String {
    // Serializing a slice of strings cannot fail
    serde_json::to_string(image_uris).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored JSON array; malformed data yields an empty list
pub fn decode(stored: &str) -> Vec<String> {
    match serde_json::from_str(stored) {
        Ok(image_uris) => image_uris,
        Err(e) => {
            warn!(error = %e, "discarding malformed image list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let input = vec![
            "apple".to_string(),
            "banana".to_string(),
            "cherry".to_string(),
        ];
        assert_eq!(encode(&input), "[\"apple\",\"banana\",\"cherry\"]");
        assert_eq!(encode(&[]), "[]");
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            decode("[\"apple\",\"banana\",\"cherry\"]"),
            vec!["apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_decode_invalid_input() {
        assert!(decode("invalid_json").is_empty());
        assert!(decode("").is_empty());
        assert!(decode("{\"a\": 1}").is_empty());
    }

    #[test]
    fn test_uris_stored_verbatim() {
        let uris = vec!["content://media/external/images/media/42?x=\"q\"".to_string()];
        assert_eq!(decode(&encode(&uris)), uris);
    }
}
