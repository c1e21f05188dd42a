use crate::domain::model::{PlaceResult, SearchMode};
use chrono::{DateTime, TimeZone};
use std::fmt::Write;

pub const NO_RESULTS_MARKER: &str = "No results found.";
/// 多數檔案系統的檔名上限是 255 bytes，要留空間給時間戳與副檔名
pub const MAX_KEYWORD_BYTES: usize = 100;
const SEPARATOR_WIDTH: usize = 50;

/// 產生結果檔內容。內容不含時間，同樣的 API 回應會得到同樣的檔案
pub fn render(keyword: &str, mode: SearchMode, results: &[PlaceResult]) -> String {
    let mut out = String::new();

    // 寫入 String 不會失敗
    let _ = writeln!(out, "Search Results for: {}", keyword);
    let _ = writeln!(out, "Search Mode: {}", mode);
    let _ = writeln!(out, "Total Results: {}", results.len());
    let _ = writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    if results.is_empty() {
        let _ = writeln!(out, "{}", NO_RESULTS_MARKER);
        return out;
    }

    let blocks: Vec<String> = results.iter().map(render_place).collect();
    out.push_str(&blocks.join("\n"));
    out
}

fn render_place(place: &PlaceResult) -> String {
    let mut block = String::new();
    let _ = writeln!(block, "Name: {}", place.name);
    let _ = writeln!(block, "Address: {}", place.address);
    let _ = writeln!(block, "Rating: {}", format_rating(place.rating));

    if let Some(details) = &place.details {
        if let Some(phone) = &details.phone {
            let _ = writeln!(block, "Phone: {}", phone);
        }
        if let Some(website) = &details.website {
            let _ = writeln!(block, "Website: {}", website);
        }
        if let Some(maps) = &details.google_maps_uri {
            let _ = writeln!(block, "Google Maps: {}", maps);
        }
        if let Some(status) = &details.business_status {
            let _ = writeln!(block, "Status: {}", status);
        }
        if let Some(count) = details.user_rating_count {
            let _ = writeln!(block, "Rating Count: {}", count);
        }
        if !details.opening_hours.is_empty() {
            let _ = writeln!(block, "Opening Hours:");
            for line in &details.opening_hours {
                let _ = writeln!(block, "  {}", line);
            }
        }
    }

    block
}

fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "N/A".to_string(),
    }
}

/// 只保留英數字、空白、'-'、'_'，空白換成底線
pub fn safe_keyword(keyword: &str) -> String {
    let kept: String = keyword
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    let mut safe = kept.trim_end().replace(' ', "_");
    if safe.len() > MAX_KEYWORD_BYTES {
        let mut cut = MAX_KEYWORD_BYTES;
        while !safe.is_char_boundary(cut) {
            cut -= 1;
        }
        safe.truncate(cut);
    }

    if safe.is_empty() {
        "search".to_string()
    } else {
        safe
    }
}

pub fn output_file_name<Tz: TimeZone>(keyword: &str, timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}_{}.txt",
        safe_keyword(keyword),
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PlaceDetails;
    use chrono::Utc;

    fn place(name: &str, address: &str, rating: Option<f64>) -> PlaceResult {
        PlaceResult {
            id: Some(format!("id-{}", name)),
            name: name.to_string(),
            address: address.to_string(),
            rating,
            details: None,
        }
    }

    #[test]
    fn test_render_one_block_per_result() {
        let results = vec![
            place("Cafe One", "1 Main St", Some(4.5)),
            place("Cafe Two", "2 Main St", None),
        ];

        let content = render("cafe", SearchMode::Standard, &results);

        assert!(content.starts_with(
            "Search Results for: cafe\nSearch Mode: standard\nTotal Results: 2\n"
        ));
        assert_eq!(content.matches("Name: ").count(), 2);
        assert!(content
            .contains("Name: Cafe One\nAddress: 1 Main St\nRating: 4.5\n\nName: Cafe Two"));
        assert!(content.contains("Rating: N/A"));
        assert!(!content.contains(NO_RESULTS_MARKER));
    }

    #[test]
    fn test_render_empty_has_marker() {
        let content = render("nothing here", SearchMode::Enhanced, &[]);

        assert!(content.contains("Total Results: 0"));
        assert!(content.trim_end().ends_with(NO_RESULTS_MARKER));
    }

    #[test]
    fn test_render_details_lines() {
        let mut enriched = place("Mill", "Site Area", Some(4.0));
        enriched.details = Some(PlaceDetails {
            phone: Some("021 111".to_string()),
            website: Some("https://mill.example".to_string()),
            opening_hours: vec!["Monday: Closed".to_string()],
            ..PlaceDetails::default()
        });

        let content = render("mill", SearchMode::Enhanced, &[enriched]);

        assert!(content
            .contains("Rating: 4.0\nPhone: 021 111\nWebsite: https://mill.example\n"));
        assert!(content.contains("Opening Hours:\n  Monday: Closed\n"));
        assert!(!content.contains("Google Maps:"));
    }

    #[test]
    fn test_safe_keyword() {
        assert_eq!(safe_keyword("spinning mill Pakistan"), "spinning_mill_Pakistan");
        assert_eq!(safe_keyword("cafés & bars!"), "cafés__bars");
        assert_eq!(safe_keyword("a/b\\c"), "abc");
        assert_eq!(safe_keyword("???"), "search");
    }

    #[test]
    fn test_safe_keyword_is_truncated() {
        let long = "textile mill ".repeat(25);
        let safe = safe_keyword(&long);
        assert_eq!(safe.len(), MAX_KEYWORD_BYTES);
        assert!(safe.starts_with("textile_mill_textile_mill"));

        // 多位元組字元不能被切開
        let wide = "é".repeat(80);
        let safe = safe_keyword(&wide);
        assert_eq!(safe.len(), MAX_KEYWORD_BYTES);
        assert_eq!(safe.chars().count(), 50);

        let odd = format!("a{}", "é".repeat(80));
        assert_eq!(safe_keyword(&odd).len(), MAX_KEYWORD_BYTES - 1);
    }

    #[test]
    fn test_output_file_name() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 15, 9, 5, 3).unwrap();
        assert_eq!(
            output_file_name("coffee shop", &ts),
            "coffee_shop_20261015_090503.txt"
        );
    }
}
