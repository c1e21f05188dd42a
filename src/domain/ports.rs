use crate::domain::model::{PlaceDetails, SearchPage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    /// 寫入檔案並回傳完整路徑，已存在則覆蓋
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn search_text(&self, query: &str, page_token: Option<&str>) -> Result<SearchPage>;
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails>;
}
