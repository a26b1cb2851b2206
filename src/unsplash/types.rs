//! Type definitions for the Unsplash wire format.

use serde::Deserialize;

/// A single photo record as returned by the search endpoint.
///
/// Uniqueness within a result set is defined by `id`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Photo {
    pub id: String,
    pub urls: PhotoUrls,
    pub user: PhotoUser,
}

impl Photo {
    /// Preferred URL for on-screen display.
    pub fn display_url(&self) -> Option<&str> {
        self.urls
            .regular
            .as_deref()
            .or(self.urls.small.as_deref())
            .or(self.urls.full.as_deref())
            .or(self.urls.raw.as_deref())
            .or(self.urls.thumb.as_deref())
    }
}

/// Resolution-keyed image URLs.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PhotoUrls {
    pub raw: Option<String>,
    pub full: Option<String>,
    pub regular: Option<String>,
    pub small: Option<String>,
    pub thumb: Option<String>,
}

/// Attributed author of a photo.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PhotoUser {
    pub name: String,
    pub username: String,
}

/// Body of a `GET /search/photos` response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Photo>,
}

/// Body of a `GET /photos/{id}/download` response: a short-lived direct
/// asset URL.
#[derive(Debug, Deserialize)]
pub struct DownloadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_response() {
        let body = r#"{
            "total": 2,
            "total_pages": 1,
            "results": [
                {
                    "id": "Dwu85P9SOIk",
                    "created_at": "2016-05-03T11:00:28-04:00",
                    "urls": {
                        "raw": "https://images.example/raw",
                        "full": "https://images.example/full",
                        "regular": "https://images.example/regular",
                        "small": "https://images.example/small",
                        "thumb": "https://images.example/thumb"
                    },
                    "user": {
                        "id": "QPxL2MGqfrw",
                        "username": "exampleuser",
                        "name": "Joe Example"
                    }
                }
            ]
        }"#;

        let decoded: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.results.len(), 1);
        let photo = &decoded.results[0];
        assert_eq!(photo.id, "Dwu85P9SOIk");
        assert_eq!(photo.user.name, "Joe Example");
        assert_eq!(photo.user.username, "exampleuser");
        assert_eq!(photo.display_url(), Some("https://images.example/regular"));
    }

    #[test]
    fn test_decode_empty_results() {
        let decoded: SearchResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(decoded.results.is_empty());
    }

    #[test]
    fn test_display_url_falls_back() {
        let photo = Photo {
            id: "x".to_string(),
            urls: PhotoUrls {
                thumb: Some("https://images.example/thumb".to_string()),
                ..PhotoUrls::default()
            },
            user: PhotoUser::default(),
        };
        assert_eq!(photo.display_url(), Some("https://images.example/thumb"));
    }
}
