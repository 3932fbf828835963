//! Artworks collection endpoint.

use serde::Deserialize;
use url::Url;

use super::Page;
use super::Pagination;
use crate::error::ApiError;
use crate::model::Artwork;

/// Response body of `GET /artworks`.
#[derive(Debug, Deserialize)]
pub(crate) struct ArtworksResponse {
    pub pagination: Pagination,
    pub data: Vec<Artwork>,
}

impl ArtworksResponse {
    /// Parses a response body, keeping the body on failure for diagnostics.
    pub(crate) fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::parse_with_body(e.to_string(), body))
    }

    pub(crate) fn into_page(self) -> Page<Artwork> {
        let total = self.pagination.total;
        Page::new(self.data, total).with_pagination(self.pagination)
    }
}

/// Builds the request URL for one page of the artworks collection.
///
/// An empty `fields` slice omits the parameter so the API returns every field.
pub fn artworks_url(
    base_url: &str,
    page: u32,
    limit: u32,
    fields: &[String],
) -> Result<Url, ApiError> {
    let endpoint = format!("{}/artworks", base_url.trim_end_matches('/'));
    let mut url = Url::parse(&endpoint).map_err(|e| ApiError::InvalidUrl(format!("{endpoint}: {e}")))?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("page", &page.to_string());
        query.append_pair("limit", &limit.to_string());
        if !fields.is_empty() {
            query.append_pair("fields", &fields.join(","));
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "pagination": {
            "total": 129271,
            "limit": 2,
            "offset": 2,
            "total_pages": 64636,
            "current_page": 2,
            "next_url": "https://api.artic.edu/api/v1/artworks?page=3&limit=2"
        },
        "data": [
            {"id": 4, "title": "Priest and Boy", "place_of_origin": "Unknown", "artist_display": null, "date_start": 1884, "date_end": 1884},
            {"id": 5, "title": "", "place_of_origin": null, "artist_display": "Anonymous", "date_start": null, "date_end": null}
        ],
        "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
    }"#;

    #[test]
    fn test_parse_response() {
        let page = ArtworksResponse::parse(BODY).unwrap().into_page();

        assert_eq!(page.len(), 2);
        assert_eq!(page.total_count(), 129271);
        assert_eq!(page.records()[0].id, 4);
        assert_eq!(page.records()[1].artist_display.as_deref(), Some("Anonymous"));

        let pagination = page.pagination().unwrap();
        assert_eq!(pagination.limit, 2);
        assert_eq!(pagination.offset, 2);
        assert_eq!(pagination.total_pages, 64636);
        assert_eq!(pagination.current_page, 2);
    }

    #[test]
    fn test_parse_error_keeps_body() {
        let err = ArtworksResponse::parse(r#"{"data": []}"#).unwrap_err();

        match err {
            ApiError::Parse { body, .. } => assert_eq!(body.as_deref(), Some(r#"{"data": []}"#)),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_artworks_url() {
        let fields = vec!["id".to_string(), "title".to_string()];
        let url = artworks_url("https://api.artic.edu/api/v1/", 3, 12, &fields).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.artic.edu/api/v1/artworks?page=3&limit=12&fields=id%2Ctitle"
        );
    }

    #[test]
    fn test_artworks_url_without_fields() {
        let url = artworks_url("http://localhost:8080", 1, 5, &[]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/artworks?page=1&limit=5");
    }

    #[test]
    fn test_artworks_url_rejects_garbage() {
        assert!(matches!(
            artworks_url("not a url", 1, 5, &[]),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
