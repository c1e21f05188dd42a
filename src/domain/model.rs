use std::fmt;
use std::path::PathBuf;

/// 一筆搜尋結果，對應 API 回傳的一個地點
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceResult {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub details: Option<PlaceDetails>,
}

impl PlaceResult {
    /// 用於變體搜尋去重：名稱 + 地址，忽略大小寫與前後空白
    pub fn dedup_key(&self) -> String {
        format!(
            "{} | {}",
            self.name.trim().to_lowercase(),
            self.address.trim().to_lowercase()
        )
    }
}

/// 增強模式額外查詢得到的欄位
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetails {
    pub phone: Option<String>,
    pub website: Option<String>,
    pub google_maps_uri: Option<String>,
    pub business_status: Option<String>,
    pub user_rating_count: Option<u32>,
    pub opening_hours: Vec<String>,
}

/// searchText 單頁回應
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub places: Vec<PlaceResult>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// 單一查詢，分頁抓取
    Standard,
    /// 標準搜尋後，每筆結果再查一次詳細資料
    Enhanced,
    /// 多個查詢變體合併去重
    Variations,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Standard => "standard",
            SearchMode::Enhanced => "enhanced",
            SearchMode::Variations => "variations",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub keyword: String,
    pub mode: SearchMode,
    pub results: Vec<PlaceResult>,
    pub output_path: PathBuf,
    pub requests_made: usize,
}
