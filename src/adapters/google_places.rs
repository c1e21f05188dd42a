use crate::config::Settings;
use crate::domain::model::{PlaceDetails, PlaceResult, SearchPage};
use crate::domain::ports::PlacesApi;
use crate::utils::error::{PlacesError, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const API_KEY_HEADER: &str = "X-Goog-Api-Key";
pub const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// searchText 只要求列表需要的欄位，id 留給增強模式查詳細資料
pub const SEARCH_FIELD_MASK: &str =
    "places.id,places.displayName,places.formattedAddress,places.rating,nextPageToken";

pub const DETAILS_FIELD_MASK: &str = "id,nationalPhoneNumber,internationalPhoneNumber,websiteUri,\
googleMapsUri,businessStatus,userRatingCount,regularOpeningHours.weekdayDescriptions";

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchTextRequest<'a> {
    text_query: &'a str,
    max_result_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    included_type: Option<&'a str>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchTextResponse {
    #[serde(default)]
    places: Vec<ApiPlace>,
    next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPlace {
    id: Option<String>,
    display_name: Option<LocalizedText>,
    formatted_address: Option<String>,
    rating: Option<f64>,
    national_phone_number: Option<String>,
    international_phone_number: Option<String>,
    website_uri: Option<String>,
    google_maps_uri: Option<String>,
    business_status: Option<String>,
    user_rating_count: Option<u32>,
    regular_opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Deserialize)]
struct LocalizedText {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpeningHours {
    #[serde(default)]
    weekday_descriptions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    status: Option<String>,
}

impl From<ApiPlace> for PlaceResult {
    fn from(place: ApiPlace) -> Self {
        Self {
            id: place.id,
            name: place
                .display_name
                .map(|n| n.text)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            address: place
                .formatted_address
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            rating: place.rating,
            details: None,
        }
    }
}

impl From<ApiPlace> for PlaceDetails {
    fn from(place: ApiPlace) -> Self {
        Self {
            phone: place.national_phone_number.or(place.international_phone_number),
            website: place.website_uri,
            google_maps_uri: place.google_maps_uri,
            business_status: place.business_status,
            user_rating_count: place.user_rating_count,
            opening_hours: place
                .regular_opening_hours
                .map(|h| h.weekday_descriptions)
                .unwrap_or_default(),
        }
    }
}

/// Google Places API (New) 的 HTTP 實作
pub struct GooglePlacesClient {
    settings: Settings,
    client: Client,
}

impl GooglePlacesClient {
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(
                settings.google_places.request_timeout_seconds,
            ))
            .build()?;

        Ok(Self { settings, client })
    }

    async fn read_json<T: DeserializeOwned + Default>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        // 沒有結果時 API 回傳 {}，有些代理會回傳空 body
        if body.trim().is_empty() {
            return Ok(T::default());
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl PlacesApi for GooglePlacesClient {
    async fn search_text(&self, query: &str, page_token: Option<&str>) -> Result<SearchPage> {
        let google = &self.settings.google_places;
        let body = SearchTextRequest {
            text_query: query,
            max_result_count: self.settings.search.page_size,
            page_token,
            region_code: google.region_code.as_deref(),
            language_code: google.language_code.as_deref(),
            included_type: google.included_type.as_deref(),
        };

        let url = self.settings.search_url();
        tracing::debug!("POST {} (page token: {})", url, page_token.is_some());

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.settings.api_key())
            .header(FIELD_MASK_HEADER, SEARCH_FIELD_MASK)
            .json(&body)
            .send()
            .await?;

        let parsed: SearchTextResponse = Self::read_json(response).await?;

        Ok(SearchPage {
            places: parsed.places.into_iter().map(PlaceResult::from).collect(),
            next_page_token: parsed.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        let url = self.settings.place_url(place_id);
        tracing::debug!("GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.settings.api_key())
            .header(FIELD_MASK_HEADER, DETAILS_FIELD_MASK);

        if let Some(language) = &self.settings.google_places.language_code {
            request = request.query(&[("languageCode", language)]);
        }

        let response = request.send().await?;
        let place: ApiPlace = Self::read_json(response).await?;

        Ok(place.into())
    }
}

/// 取出 API 錯誤訊息，格式不符時退回 HTTP 狀態說明
fn api_error(status: StatusCode, body: &str) -> PlacesError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { error }) => match error.status {
            Some(code) => format!("{} ({})", error.message, code),
            None => error.message,
        },
        Err(_) if !body.trim().is_empty() => body.trim().chars().take(200).collect(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    PlacesError::ApiError {
        status: status.as_u16(),
        message,
    }
}
