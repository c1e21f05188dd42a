use crate::config::Settings;
use crate::core::{report, variations};
use crate::domain::model::{PlaceResult, SearchMode, SearchOutcome};
use crate::domain::ports::{PlacesApi, Storage};
use crate::utils::error::{PlacesError, Result};
use crate::utils::validation::Validate;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// 依序發送請求並把結果寫成文字檔
pub struct SearchClient<A: PlacesApi, S: Storage> {
    api: A,
    storage: S,
    settings: Settings,
    requests: AtomicUsize,
}

impl<A: PlacesApi, S: Storage> SearchClient<A, S> {
    /// 設定不合法（例如沒有 API 金鑰）時直接失敗，不會送出任何請求
    pub fn new(api: A, storage: S, settings: Settings) -> Result<Self> {
        settings.validate()?;

        Ok(Self {
            api,
            storage,
            settings,
            requests: AtomicUsize::new(0),
        })
    }

    /// 執行一次搜尋並寫出結果檔；任何錯誤都發生在寫檔之前
    pub async fn run(&self, keyword: &str, mode: SearchMode) -> Result<SearchOutcome> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(PlacesError::ValidationError {
                message: "Keyword cannot be empty".to_string(),
            });
        }

        self.requests.store(0, Ordering::SeqCst);
        tracing::info!("🔍 Starting {} search for '{}'", mode, keyword);

        let results = self.gather(keyword, mode).await?;
        let content = report::render(keyword, mode, &results);
        let file_name = report::output_file_name(keyword, &chrono::Local::now());
        let output_path = self.storage.write_file(&file_name, content.as_bytes()).await?;

        let requests_made = self.requests.load(Ordering::SeqCst);
        tracing::info!(
            "📁 Saved {} results to {} ({} API requests)",
            results.len(),
            output_path.display(),
            requests_made
        );

        Ok(SearchOutcome {
            keyword: keyword.to_string(),
            mode,
            results,
            output_path,
            requests_made,
        })
    }

    pub async fn gather(&self, keyword: &str, mode: SearchMode) -> Result<Vec<PlaceResult>> {
        match mode {
            SearchMode::Standard => self.search_places(keyword).await,
            SearchMode::Enhanced => {
                let base = self.search_places(keyword).await?;
                self.enrich_with_details(base).await
            }
            SearchMode::Variations => self.search_with_variations(keyword).await,
        }
    }

    /// 單一查詢，依 nextPageToken 分頁直到頁數或筆數上限
    pub async fn search_places(&self, query: &str) -> Result<Vec<PlaceResult>> {
        let search = &self.settings.search;
        let results = self
            .paginate(query, search.max_pages, search.max_results)
            .await?;
        tracing::info!("Total results found: {}", results.len());
        Ok(results)
    }

    /// 每筆基礎結果各查一次詳細資料
    pub async fn enrich_with_details(
        &self,
        mut results: Vec<PlaceResult>,
    ) -> Result<Vec<PlaceResult>> {
        let total = results.len();
        tracing::info!("📋 Fetching details for {} places", total);

        for (index, place) in results.iter_mut().enumerate() {
            let Some(place_id) = place.id.as_deref() else {
                tracing::warn!("No place id for '{}', skipping details", place.name);
                continue;
            };

            tracing::debug!("Details {}/{}: {}", index + 1, total, place.name);
            self.requests.fetch_add(1, Ordering::SeqCst);
            let details = self.api.place_details(place_id).await?;
            place.details = Some(details);
        }

        Ok(results)
    }

    /// 多個查詢變體，依名稱 + 地址去重
    pub async fn search_with_variations(&self, base_query: &str) -> Result<Vec<PlaceResult>> {
        let search = &self.settings.search;
        let queries = variations::generate_search_variations(base_query, search.max_variations);
        let per_variation_cap = search.page_size * search.variation_max_pages;

        tracing::info!(
            "Will search {} variations of '{}'",
            queries.len(),
            base_query
        );

        let mut all_results = Vec::new();
        let mut seen = HashSet::new();

        for (index, query) in queries.iter().enumerate() {
            tracing::info!("--- Variation {}/{}: {} ---", index + 1, queries.len(), query);

            let found = self
                .paginate(query, search.variation_max_pages, per_variation_cap)
                .await?;

            let before = all_results.len();
            all_results.extend(found.into_iter().filter(|r| seen.insert(r.dedup_key())));
            tracing::info!(
                "Added {} new unique results (total unique: {})",
                all_results.len() - before,
                all_results.len()
            );

            if all_results.len() >= search.max_results {
                tracing::info!("Reached target of {} results", search.max_results);
                break;
            }

            if index + 1 < queries.len() {
                pause(search.variation_delay_ms).await;
            }
        }

        all_results.truncate(search.max_results);
        Ok(all_results)
    }

    async fn paginate(
        &self,
        query: &str,
        max_pages: usize,
        max_results: usize,
    ) -> Result<Vec<PlaceResult>> {
        let mut results = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0;

        while results.len() < max_results && page_count < max_pages {
            page_count += 1;
            tracing::debug!("Fetching page {} for '{}'", page_count, query);

            self.requests.fetch_add(1, Ordering::SeqCst);
            let page = self.api.search_text(query, page_token.as_deref()).await?;

            let room = max_results - results.len();
            let page_results = page.places.len().min(room);
            results.extend(page.places.into_iter().take(room));
            tracing::info!(
                "Page {}: found {} results (total: {})",
                page_count,
                page_results,
                results.len()
            );

            page_token = page.next_page_token;
            if page_token.is_none() {
                tracing::debug!("No more pages available");
                break;
            }

            if results.len() < max_results && page_count < max_pages {
                pause(self.settings.search.page_delay_ms).await;
            }
        }

        Ok(results)
    }
}

async fn pause(delay_ms: u64) {
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
