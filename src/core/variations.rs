use std::collections::HashSet;

const TEXTILE_KEYWORDS: &[&str] = &[
    "spinning", "mill", "textile", "cotton", "yarn", "fabric", "weaving",
];
const RESTAURANT_KEYWORDS: &[&str] = &[
    "restaurant",
    "cafe",
    "food",
    "dining",
    "kitchen",
    "eatery",
];
const RETAIL_KEYWORDS: &[&str] = &["store", "shop", "retail", "market", "outlet", "bazaar"];

const TEXTILE_TERMS: &[&str] = &[
    "textile mill",
    "cotton mill",
    "yarn mill",
    "spinning mill",
    "fabric mill",
    "weaving mill",
    "spinning factory",
    "textile factory",
    "cotton spinning",
    "yarn manufacturing",
];
const RESTAURANT_TERMS: &[&str] = &[
    "restaurant",
    "cafe",
    "diner",
    "bistro",
    "eatery",
    "food place",
];
const RETAIL_TERMS: &[&str] = &["store", "shop", "retail", "outlet", "market", "bazaar"];

const BUSINESS_SUFFIXES: &[&str] = &["business", "company", "shop", "service", "center"];

// 順序有意義：先比對到的先回傳
const LOCATION_KEYWORDS: &[&str] = &[
    "downtown",
    "city center",
    "center",
    "district",
    "area",
    "zone",
    "mall",
    "plaza",
    "square",
    "market",
    "industrial area",
    "business district",
    "uptown",
    "midtown",
    "suburb",
    "neighborhood",
    "quarters",
    "sector",
];

/// 大寫開頭但不算地名的字
const BUSINESS_WORDS: &[&str] = &[
    "mill",
    "factory",
    "company",
    "business",
    "shop",
    "store",
    "restaurant",
    "cafe",
    "service",
    "center",
    "industry",
    "manufacturing",
    "textile",
    "cotton",
    "spinning",
    "fabric",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Industry {
    Textile,
    Restaurant,
    Retail,
    General,
}

impl Industry {
    /// 依關鍵字判斷產業，不分大小寫
    pub fn detect(query: &str) -> Self {
        let lower = query.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if matches(TEXTILE_KEYWORDS) {
            Industry::Textile
        } else if matches(RESTAURANT_KEYWORDS) {
            Industry::Restaurant
        } else if matches(RETAIL_KEYWORDS) {
            Industry::Retail
        } else {
            Industry::General
        }
    }

    fn terms(&self) -> &'static [&'static str] {
        match self {
            Industry::Textile => TEXTILE_TERMS,
            Industry::Restaurant => RESTAURANT_TERMS,
            Industry::Retail => RETAIL_TERMS,
            Industry::General => &[],
        }
    }
}

/// 產生搜尋變體，第一個永遠是原始查詢
pub fn generate_search_variations(base_query: &str, max_variations: usize) -> Vec<String> {
    let mut variations = vec![base_query.to_string()];

    match Industry::detect(base_query) {
        Industry::General => variations.extend(general_variations(base_query)),
        industry => {
            let location = extract_location(base_query);
            variations.extend(
                industry
                    .terms()
                    .iter()
                    .map(|term| format!("{}{}", term, location)),
            );
        }
    }

    let mut unique = remove_duplicates(variations);
    unique.truncate(max_variations);
    unique
}

fn general_variations(base_query: &str) -> Vec<String> {
    let mut variations = Vec::new();

    if !base_query.ends_with('s') {
        variations.push(format!("{}s", base_query));
    }

    variations.extend(
        BUSINESS_SUFFIXES
            .iter()
            .map(|suffix| format!("{} {}", base_query, suffix)),
    );

    variations
}

/// 回傳前面帶空白的地點字串，例如 " Downtown"；找不到時為空字串
pub fn extract_location(query: &str) -> String {
    let query_lower = query.trim().to_lowercase();

    if let Some(keyword) = LOCATION_KEYWORDS.iter().find(|k| query_lower.contains(*k)) {
        return format!(" {}", title_case(keyword));
    }

    for (word, original) in query_lower.split_whitespace().zip(query.split_whitespace()) {
        if original.chars().count() <= 2 {
            continue;
        }

        let capitalized = original.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !BUSINESS_WORDS.contains(&word) {
            return format!(" {}", original);
        }
    }

    String::new()
}

/// 不分大小寫去重，保留第一次出現的原始寫法
pub fn remove_duplicates(variations: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    variations
        .into_iter()
        .filter(|v| seen.insert(v.trim().to_lowercase()))
        .collect()
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_industry() {
        assert_eq!(Industry::detect("Spinning Mill Karachi"), Industry::Textile);
        assert_eq!(Industry::detect("best restaurant in Islamabad"), Industry::Restaurant);
        assert_eq!(Industry::detect("electronics store Lahore"), Industry::Retail);
        assert_eq!(Industry::detect("consultant"), Industry::General);
    }

    #[test]
    fn test_textile_variations_keep_location() {
        let variations = generate_search_variations("spinning mill Pakistan", 4);
        assert_eq!(
            variations,
            vec![
                "spinning mill Pakistan",
                "textile mill Pakistan",
                "cotton mill Pakistan",
                "yarn mill Pakistan",
            ]
        );
    }

    #[test]
    fn test_duplicate_of_base_query_is_dropped() {
        let variations = generate_search_variations("Spinning Mill", 6);
        assert_eq!(
            variations,
            vec![
                "Spinning Mill",
                "textile mill",
                "cotton mill",
                "yarn mill",
                "fabric mill",
                "weaving mill",
            ]
        );
    }

    #[test]
    fn test_general_variations() {
        let variations = generate_search_variations("consultant", 6);
        assert_eq!(
            variations,
            vec![
                "consultant",
                "consultants",
                "consultant business",
                "consultant company",
                "consultant shop",
                "consultant service",
            ]
        );

        let plural = generate_search_variations("shoes", 10);
        assert_eq!(plural[1], "shoes business");
        assert_eq!(plural.len(), 6);
    }

    #[test]
    fn test_extract_location() {
        assert_eq!(extract_location("restaurant downtown"), " Downtown");
        assert_eq!(extract_location("cafe near City Center"), " City Center");
        assert_eq!(extract_location("spinning mill Chicago"), " Chicago");
        assert_eq!(extract_location("Textile Mill Faisalabad"), " Faisalabad");
        assert_eq!(extract_location("textile business"), "");
        assert_eq!(extract_location(""), "");
    }

    #[test]
    fn test_remove_duplicates_is_case_insensitive() {
        let unique = remove_duplicates(vec![
            "Restaurant Karachi".to_string(),
            "restaurant karachi ".to_string(),
            "Cafe Karachi".to_string(),
        ]);
        assert_eq!(unique, vec!["Restaurant Karachi", "Cafe Karachi"]);
    }

    #[test]
    fn test_max_variations_is_respected() {
        assert_eq!(generate_search_variations("bakery", 1), vec!["bakery"]);
        assert!(generate_search_variations("textile Lahore", 20).len() <= 11);
    }
}
