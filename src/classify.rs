//! Rule-based category classification.
//!
//! Everything here is deterministic table lookup: an ordered keyword table,
//! an ordered amount-range table, and fixed fallbacks. Order is significant
//! in both tables and acts as the tie-break, so entries must not be
//! reordered casually.

use serde::Serialize;

use crate::domain::TransactionKind;

/// Keyword table for expense categories, checked top to bottom. The first
/// category with a case-insensitive substring hit wins.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Groceries",
        &[
            "grocery",
            "supermarket",
            "market",
            "walmart",
            "target",
            "costco",
            "kroger",
            "safeway",
            "aldi",
            "whole foods",
            "trader joe",
            "publix",
            "food lion",
            "h-e-b",
            "wegmans",
            "stop & shop",
            "fresh thyme",
            "sprouts",
            "food",
            "bakery",
            "butcher",
        ],
    ),
    (
        "Dining",
        &[
            "restaurant",
            "cafe",
            "coffee",
            "starbucks",
            "mcdonald",
            "burger king",
            "subway",
            "pizza",
            "sushi",
            "doordash",
            "uber eats",
            "grubhub",
            "postmates",
            "chipotle",
            "taco bell",
            "kfc",
            "wendys",
            "dunkin",
            "panera",
            "chick-fil-a",
            "olive garden",
            "chilis",
            "applebees",
            "bar",
            "grill",
            "bistro",
            "eatery",
            "diner",
            "lunch",
            "dinner",
        ],
    ),
    (
        "Transportation",
        &[
            "uber",
            "lyft",
            "taxi",
            "gas",
            "shell",
            "chevron",
            "bp",
            "exxon",
            "mobil",
            "parking",
            "metro",
            "bus",
            "train",
            "subway",
            "airline",
            "delta",
            "united",
            "southwest",
            "jetblue",
            "american air",
            "amtrak",
            "greyhound",
            "car rental",
            "enterprise",
            "hertz",
            "avis",
            "zipcar",
            "toll",
            "ez-pass",
            "transit",
            "commute",
        ],
    ),
    (
        "Utilities",
        &[
            "electric",
            "water",
            "gas",
            "internet",
            "verizon",
            "at&t",
            "comcast",
            "spectrum",
            "utility",
            "power",
            "energy",
            "con edison",
            "pg&e",
            "duke energy",
            "city of",
            "sewer",
            "sanitation",
            "trash",
            "waste",
            "mobile",
            "wireless",
            "phone",
            "broadband",
            "fiber",
        ],
    ),
    (
        "Entertainment",
        &[
            "netflix",
            "hulu",
            "disney+",
            "spotify",
            "apple music",
            "amazon prime",
            "movie",
            "theater",
            "concert",
            "game",
            "playstation",
            "xbox",
            "steam",
            "nintendo",
            "espn",
            "hbo",
            "showtime",
            "youtube",
            "tiktok",
            "twitch",
            "event",
            "ticket",
            "sports",
            "league",
            "gaming",
            "entertainment",
        ],
    ),
    (
        "Shopping",
        &[
            "amazon",
            "ebay",
            "etsy",
            "walmart",
            "target",
            "best buy",
            "nike",
            "zara",
            "h&m",
            "clothing",
            "shoes",
            "apparel",
            "retail",
            "store",
            "mall",
            "shop",
            "purchase",
            "order",
            "merchandise",
            "ikea",
            "cvs",
            "walgreens",
            "costco",
            "sams club",
            "bj's",
        ],
    ),
    (
        "Health",
        &[
            "cvs",
            "walgreens",
            "pharmacy",
            "doctor",
            "dentist",
            "hospital",
            "medical",
            "insurance",
            "fitness",
            "gym",
            "health",
            "wellness",
            "clinic",
            "urgent care",
            "prescription",
            "drug",
            "medication",
            "therapy",
            "chiropractor",
            "veterinary",
            "pet",
        ],
    ),
    (
        "Housing",
        &[
            "rent",
            "apartment",
            "landlord",
            "mortgage",
            "housing",
            "realtor",
            "zillow",
            "airbnb",
            "hotel",
            "lodging",
            "accommodation",
            "lease",
            "property management",
            "hoa",
            "maintenance",
            "repair",
        ],
    ),
];

/// Income descriptions that resolve to `Salary`.
const INCOME_KEYWORDS: &[&str] = &[
    "salary",
    "payroll",
    "adp",
    "direct deposit",
    "income",
    "pay",
    "transfer in",
    "deposit",
    "irs",
    "treasury",
    "refund",
    "dividend",
    "interest",
    "investment",
    "freelance",
    "upwork",
    "fiverr",
];

/// Amount fallbacks when no keyword matches, checked top to bottom with
/// inclusive bounds. Overlaps resolve by list order.
const AMOUNT_HEURISTICS: &[(f64, f64, &str)] = &[
    (800.0, 3000.0, "Housing"),
    (100.0, 500.0, "Utilities"),
    (5.0, 50.0, "Dining"),
    (10.0, 200.0, "Groceries"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categorization {
    pub category: String,
    pub confidence: Confidence,
    pub method: Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Keyword,
    Amount,
    Default,
}

/// Guesses a category for a free-text description and amount.
///
/// Income never reaches the expense tables: it is either `Salary` (keyword
/// hit) or `Freelance`. Expenses try keywords, then amount ranges, then
/// `Other`.
pub fn classify(description: &str, amount: f64, kind: TransactionKind) -> Categorization {
    let desc = description.to_lowercase().trim().to_string();

    if kind == TransactionKind::Income {
        if INCOME_KEYWORDS.iter().any(|k| desc.contains(k)) {
            return Categorization {
                category: "Salary".into(),
                confidence: Confidence::High,
                method: Method::Keyword,
            };
        }
        return Categorization {
            category: "Freelance".into(),
            confidence: Confidence::Medium,
            method: Method::Default,
        };
    }

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| desc.contains(k)) {
            return Categorization {
                category: (*category).into(),
                confidence: Confidence::High,
                method: Method::Keyword,
            };
        }
    }

    for (min, max, category) in AMOUNT_HEURISTICS {
        if amount >= *min && amount <= *max {
            return Categorization {
                category: (*category).into(),
                confidence: Confidence::Medium,
                method: Method::Amount,
            };
        }
    }

    Categorization {
        category: "Other".into(),
        confidence: Confidence::Low,
        method: Method::Default,
    }
}
