use clap::Parser;
use places_search::app::{prompt::Prompt, session};
use places_search::utils::error::{ErrorSeverity, PlacesError};
use places_search::utils::logger;
use places_search::{CliArgs, GooglePlacesClient, LocalStorage, SearchClient, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    println!("{}", "=".repeat(50));
    println!("Google Places Search Tool");
    println!("{}", "=".repeat(50));

    tracing::info!("📁 Loading settings from: {}", args.config);

    // 任何請求之前先確認設定與金鑰
    let client = match build_client(&args.config) {
        Ok(client) => client,
        Err(e) => exit_with(e),
    };

    tracing::info!("✅ Settings loaded and validated");

    let stdin = std::io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), std::io::stdout());

    match session::run_session(&client, &mut prompt).await {
        Ok(files_written) => {
            tracing::info!("Session finished, {} result files written", files_written);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn build_client(
    config_path: &str,
) -> places_search::Result<SearchClient<GooglePlacesClient, LocalStorage>> {
    let settings = Settings::from_file(config_path)?;
    tracing::debug!("Settings: {:?}", settings.search);

    let storage = LocalStorage::new(settings.results_folder().to_string());
    let api = GooglePlacesClient::new(settings.clone())?;

    SearchClient::new(api, storage, settings)
}

fn exit_with(e: PlacesError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };

    std::process::exit(exit_code);
}
