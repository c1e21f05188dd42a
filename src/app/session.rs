use crate::app::prompt::Prompt;
use crate::core::search::SearchClient;
use crate::domain::ports::{PlacesApi, Storage};
use crate::utils::error::{ErrorCategory, Result};
use std::io::{BufRead, Write};

/// 互動迴圈：每輪一個關鍵字、一個模式、一個結果檔。回傳寫出的檔案數
pub async fn run_session<A, S, R, W>(
    client: &SearchClient<A, S>,
    prompt: &mut Prompt<R, W>,
) -> Result<usize>
where
    A: PlacesApi,
    S: Storage,
    R: BufRead,
    W: Write,
{
    let mut files_written = 0;

    loop {
        let Some(keyword) = prompt.read_keyword()? else {
            break;
        };
        let Some(mode) = prompt.read_mode()? else {
            break;
        };

        prompt.say(&format!("\n🔍 {} search for '{}'...", mode, keyword))?;

        match client.run(&keyword, mode).await {
            Ok(outcome) => {
                files_written += 1;
                if outcome.results.is_empty() {
                    prompt.say("No results found.")?;
                }
                prompt.say(&format!(
                    "✓ Saved {} results to {}",
                    outcome.results.len(),
                    outcome.output_path.display()
                ))?;
            }
            // 設定錯誤重跑也不會好，直接結束
            Err(e) if e.category() == ErrorCategory::Configuration => return Err(e),
            Err(e) => {
                tracing::error!(
                    "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                prompt.say(&format!("✗ {}", e.user_friendly_message()))?;
                prompt.say(&format!("💡 {}", e.recovery_suggestion()))?;
            }
        }
    }

    prompt.say("Goodbye!")?;
    Ok(files_written)
}
