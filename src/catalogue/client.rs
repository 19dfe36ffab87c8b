/// Catalogue page fetcher
///
/// One page per call, no retries: a failed fetch surfaces its error to
/// the caller, and the user retries by navigating again. Only the
/// fields the table displays are requested.

use serde::Deserialize;
use thiserror::Error;

use crate::state::data::Artwork;

/// Base endpoint of the public artworks API
const API_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// The only fields the table renders
const FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// Why a page fetch failed.
///
/// Carries owned strings (not source errors) so the value is `Clone`
/// and can ride inside an iced message.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("HTTP error: {status}")]
    Status { status: u16 },
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// One decoded page of the catalogue
#[derive(Debug, Clone)]
pub struct CataloguePage {
    /// Records in server order
    pub records: Vec<Artwork>,
    /// Total records in the whole catalogue, from `pagination.total`
    pub total_records: usize,
}

// Wire shape of the API response; only what we consume
#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: Vec<Artwork>,
    pagination: ApiPagination,
}

#[derive(Debug, Deserialize)]
struct ApiPagination {
    total: usize,
}

/// Fetch one page of artworks.
///
/// Any non-2xx status, transport failure, or undecodable body becomes
/// a `FetchError` with a human-readable message.
pub async fn fetch_page(
    client: &reqwest::Client,
    page: u32,
    page_size: usize,
) -> Result<CataloguePage, FetchError> {
    let url = page_url(page, page_size);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    decode_page(&body)
}

/// Build the request URL for one page
fn page_url(page: u32, page_size: usize) -> String {
    format!("{}?page={}&limit={}&fields={}", API_URL, page, page_size, FIELDS)
}

/// Decode a response body into records plus the total count.
/// Split out of `fetch_page` so decoding is testable without a network.
pub fn decode_page(body: &str) -> Result<CataloguePage, FetchError> {
    let parsed: ApiResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(CataloguePage {
        records: parsed.data,
        total_records: parsed.pagination.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_shape() {
        let url = page_url(3, 12);
        assert!(url.starts_with("https://api.artic.edu/api/v1/artworks?"));
        assert!(url.contains("page=3"));
        assert!(url.contains("limit=12"));
        assert!(url.contains(
            "fields=id,title,place_of_origin,artist_display,inscriptions,date_start,date_end"
        ));
    }

    #[test]
    fn test_decode_full_record() {
        let body = r#"{
            "pagination": { "total": 129714, "limit": 12, "offset": 0, "total_pages": 10810, "current_page": 1 },
            "data": [
                {
                    "id": 27992,
                    "title": "A Sunday on La Grande Jatte",
                    "place_of_origin": "France",
                    "artist_display": "Georges Seurat",
                    "inscriptions": "signed lower right",
                    "date_start": 1884,
                    "date_end": 1886
                }
            ]
        }"#;

        let page = decode_page(body).unwrap();
        assert_eq!(page.total_records, 129714);
        assert_eq!(page.records.len(), 1);

        let record = &page.records[0];
        assert_eq!(record.id, 27992);
        assert_eq!(record.title.as_deref(), Some("A Sunday on La Grande Jatte"));
        assert_eq!(record.start_date, Some(1884));
        assert_eq!(record.end_date, Some(1886));
    }

    #[test]
    fn test_decode_tolerates_null_fields() {
        // The catalogue is sparsely filled; nulls and missing keys are routine
        let body = r#"{
            "pagination": { "total": 5 },
            "data": [
                { "id": 7, "title": null, "place_of_origin": null, "inscriptions": null },
                { "id": 8 }
            ]
        }"#;

        let page = decode_page(body).unwrap();
        assert_eq!(page.records[0].title, None);
        assert_eq!(page.records[1].id, 8);
        assert_eq!(page.records[1].start_date, None);
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        assert!(matches!(
            decode_page("not json at all"),
            Err(FetchError::Decode(_))
        ));
        // Valid JSON but missing the expected shape
        assert!(matches!(
            decode_page(r#"{"items": []}"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_preserves_server_order() {
        let body = r#"{
            "pagination": { "total": 3 },
            "data": [ { "id": 30 }, { "id": 10 }, { "id": 20 } ]
        }"#;

        let page = decode_page(body).unwrap();
        let ids: Vec<i64> = page.records.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }
}
