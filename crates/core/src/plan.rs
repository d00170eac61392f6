use std::time::Duration;

pub const DEFAULT_REGION: &str = "US";
pub const TRENDING_CAP: u32 = 25;
pub const KEYWORD_CAP: u32 = 20;
pub const CATEGORY_CAP: u32 = 15;
pub const COURTESY_DELAY: Duration = Duration::from_secs(1);

pub const KEYWORDS: [&str; 5] = [
    "python programming",
    "machine learning",
    "music",
    "cooking",
    "gaming",
];

/// (category id, display name)
pub const CATEGORIES: [(&str, &str); 5] = [
    ("10", "Music"),
    ("20", "Gaming"),
    ("22", "People & Blogs"),
    ("23", "Comedy"),
    ("24", "Entertainment"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionKind {
    Trending { region: String },
    Keyword { query: String },
    Category { id: String, name: String },
}

/// One collector invocation and the pause that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStep {
    pub kind: CollectionKind,
    pub cap: u32,
    pub pause_after: Option<Duration>,
}

impl CollectionStep {
    /// Console line announcing the step
    pub fn progress_message(&self) -> String {
        match &self.kind {
            CollectionKind::Trending { .. } => "Collecting trending videos...".to_string(),
            CollectionKind::Keyword { query } => format!("Searching for: {query}"),
            CollectionKind::Category { name, .. } => format!("Collecting {name} videos..."),
        }
    }
}

/// Ordered list of collection steps; batches are concatenated in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPlan {
    pub steps: Vec<CollectionStep>,
}

impl CollectionPlan {
    /// Trending for `region`, then the fixed keywords, then the fixed categories.
    /// Keyword and category steps are each followed by the courtesy delay.
    pub fn standard(region: &str) -> Self {
        let mut steps = Vec::with_capacity(1 + KEYWORDS.len() + CATEGORIES.len());

        steps.push(CollectionStep {
            kind: CollectionKind::Trending {
                region: region.to_string(),
            },
            cap: TRENDING_CAP,
            pause_after: None,
        });

        steps.extend(KEYWORDS.iter().map(|query| CollectionStep {
            kind: CollectionKind::Keyword {
                query: query.to_string(),
            },
            cap: KEYWORD_CAP,
            pause_after: Some(COURTESY_DELAY),
        }));

        steps.extend(CATEGORIES.iter().map(|(id, name)| CollectionStep {
            kind: CollectionKind::Category {
                id: id.to_string(),
                name: name.to_string(),
            },
            cap: CATEGORY_CAP,
            pause_after: Some(COURTESY_DELAY),
        }));

        Self { steps }
    }
}

impl Default for CollectionPlan {
    fn default() -> Self {
        Self::standard(DEFAULT_REGION)
    }
}
