//! Literal content shown by the pages.

use chrono::NaiveDate;

use crate::types::{
    ArticleDetail, ArticleRecord, Bias, BiasAnalysis, Category, Country, FilterOption,
    PerspectiveTemplate, Sentiment,
};

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn us() -> Country {
    Country::new("United States").with_code("US")
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "politics", name: "Politics", count: 124 },
    Category { id: "economy", name: "Economy", count: 89 },
    Category { id: "technology", name: "Technology", count: 156 },
    Category { id: "environment", name: "Environment", count: 67 },
    Category { id: "health", name: "Health", count: 43 },
    Category { id: "international", name: "International", count: 201 },
];

/// Country choices on the results page, selected by code.
pub const RESULT_COUNTRIES: &[FilterOption] = &[
    FilterOption { value: "all", label: "All Countries" },
    FilterOption { value: "US", label: "United States" },
    FilterOption { value: "GB", label: "United Kingdom" },
    FilterOption { value: "DE", label: "Germany" },
    FilterOption { value: "RU", label: "Russia" },
    FilterOption { value: "CN", label: "China" },
    FilterOption { value: "BR", label: "Brazil" },
];

/// Country choices on the categories page, selected by lowercased name.
pub const BROWSE_COUNTRIES: &[FilterOption] = &[
    FilterOption { value: "all", label: "All Countries" },
    FilterOption { value: "united states", label: "United States" },
    FilterOption { value: "united kingdom", label: "United Kingdom" },
    FilterOption { value: "germany", label: "Germany" },
    FilterOption { value: "france", label: "France" },
    FilterOption { value: "canada", label: "Canada" },
    FilterOption { value: "australia", label: "Australia" },
    FilterOption { value: "japan", label: "Japan" },
    FilterOption { value: "india", label: "India" },
];

pub const LANGUAGES: &[FilterOption] = &[
    FilterOption { value: "all", label: "All Languages" },
    FilterOption { value: "english", label: "English" },
    FilterOption { value: "german", label: "German" },
    FilterOption { value: "russian", label: "Russian" },
    FilterOption { value: "chinese", label: "Chinese" },
    FilterOption { value: "portuguese", label: "Portuguese" },
];

pub fn browse_articles() -> Vec<ArticleRecord> {
    vec![
        ArticleRecord::new(
            "1",
            "Congressional Budget Office Projects Economic Growth Despite Political Uncertainty",
            "New analysis suggests the economy will continue to expand through 2024, even as political tensions remain high heading into election season.",
            "Washington Post",
            us(),
            Bias::Left,
        )
        .published(date(2024, 1, 15)),
        ArticleRecord::new(
            "2",
            "Federal Reserve Maintains Interest Rates Amid Inflation Concerns",
            "Central bank officials cite need for continued vigilance on price stability while supporting economic recovery efforts.",
            "Wall Street Journal",
            us(),
            Bias::Right,
        )
        .published(date(2024, 1, 14)),
        ArticleRecord::new(
            "3",
            "Bipartisan Infrastructure Bill Shows Early Success in Job Creation",
            "Government data reveals significant employment gains in construction and manufacturing sectors following infrastructure investments.",
            "Associated Press",
            us(),
            Bias::Centre,
        )
        .published(date(2024, 1, 13)),
        ArticleRecord::new(
            "4",
            "Supreme Court Decision on Voting Rights Sparks National Debate",
            "Latest ruling on electoral procedures draws sharp responses from both parties, highlighting ongoing tensions over election security.",
            "CNN",
            us(),
            Bias::Left,
        )
        .published(date(2024, 1, 12)),
        ArticleRecord::new(
            "5",
            "State Governors Push Back Against Federal Climate Regulations",
            "Coalition of state leaders challenges new environmental rules, citing economic concerns and jurisdictional disputes.",
            "Fox News",
            us(),
            Bias::Right,
        )
        .published(date(2024, 1, 11)),
        ArticleRecord::new(
            "6",
            "Tech Industry Leaders Testify on Social Media Regulation",
            "Congressional hearing examines proposals for increased oversight of digital platforms and content moderation practices.",
            "Reuters",
            us(),
            Bias::Centre,
        )
        .published(date(2024, 1, 10)),
    ]
}

pub fn featured_articles() -> Vec<ArticleRecord> {
    vec![
        ArticleRecord::new(
            "7",
            "Global Climate Summit Reaches Historic Agreement on Carbon Emissions",
            "World leaders agree on ambitious targets for reducing greenhouse gas emissions by 2030, marking a significant step forward in international climate cooperation.",
            "Reuters",
            us(),
            Bias::Centre,
        )
        .published(date(2024, 1, 15)),
        ArticleRecord::new(
            "8",
            "Tech Giants Face New Regulatory Challenges in European Markets",
            "EU lawmakers propose stricter data protection rules that could reshape how major technology companies operate across European markets.",
            "BBC News",
            Country::new("United Kingdom").with_code("GB"),
            Bias::Left,
        )
        .published(date(2024, 1, 14)),
        ArticleRecord::new(
            "9",
            "Economic Growth Indicators Show Mixed Signals Across Global Markets",
            "Latest economic data reveals varied performance across different regions, with some markets showing strong growth while others face headwinds.",
            "Financial Times",
            Country::new("Germany").with_code("DE"),
            Bias::Right,
        )
        .published(date(2024, 1, 13)),
        ArticleRecord::new(
            "10",
            "Breakthrough in Renewable Energy Storage Technology Announced",
            "Scientists unveil new battery technology that could revolutionize renewable energy storage, making green power more reliable and cost-effective.",
            "Nature Journal",
            Country::new("Japan").with_code("JP"),
            Bias::Centre,
        )
        .published(date(2024, 1, 12)),
    ]
}

pub fn perspective_templates() -> Vec<PerspectiveTemplate> {
    vec![
        ArticleRecord::new(
            "11",
            "US Senate Debates New {query} Legislation",
            "Congressional leaders express divided opinions on proposed measures, with Republicans emphasizing economic concerns and Democrats focusing on social impact.",
            "CNN",
            us(),
            Bias::Left,
        )
        .sentiment(Sentiment::new(30, 40, 30))
        .explanation("Article uses emotionally charged language favoring progressive policies and quotes more Democratic sources than Republican ones.")
        .language("English"),
        ArticleRecord::new(
            "12",
            "UK Parliament Reviews {query} Policy Impact",
            "British officials take measured approach to new developments, emphasizing need for evidence-based policy and international cooperation.",
            "BBC News",
            Country::new("United Kingdom").with_code("GB"),
            Bias::Centre,
        )
        .sentiment(Sentiment::new(50, 35, 15))
        .explanation("Balanced reporting with equal representation of different viewpoints and factual presentation of policy implications.")
        .language("English"),
        ArticleRecord::new(
            "13",
            "Russian Analysis: Western {query} Policies",
            "Moscow criticizes Western approach as misguided, arguing that current policies lack practical consideration of global economic realities.",
            "RT",
            Country::new("Russia").with_code("RU"),
            Bias::Right,
        )
        .sentiment(Sentiment::new(15, 25, 60))
        .explanation("Strong anti-Western bias with selective use of statistics and quotes from officials supporting the government narrative.")
        .language("Russian"),
        ArticleRecord::new(
            "14",
            "German Technical Assessment of {query}",
            "Federal ministry releases comprehensive study examining technical feasibility, economic impact, and environmental considerations.",
            "Deutsche Welle",
            Country::new("Germany").with_code("DE"),
            Bias::Centre,
        )
        .sentiment(Sentiment::new(40, 50, 10))
        .explanation("Highly technical and neutral reporting focused on data and expert analysis rather than political positioning.")
        .language("German"),
        ArticleRecord::new(
            "15",
            "Beijing's Perspective on Global {query} Trends",
            "Chinese officials emphasize importance of multilateral cooperation while maintaining that each nation should determine its own approach.",
            "Xinhua",
            Country::new("China").with_code("CN"),
            Bias::Centre,
        )
        .sentiment(Sentiment::new(45, 45, 10))
        .explanation("State media maintains neutral tone while subtly promoting Chinese diplomatic positions and multilateral approaches.")
        .language("Chinese"),
        ArticleRecord::new(
            "16",
            "Brazilian Civil Society Responds to {query}",
            "Grassroots organizations and local communities express concerns about implementation while supporting overall objectives.",
            "Folha de S.Paulo",
            Country::new("Brazil").with_code("BR"),
            Bias::Left,
        )
        .sentiment(Sentiment::new(35, 30, 35))
        .explanation("Strong focus on social justice angles and community impact, with frequent quotes from activist organizations.")
        .language("Portuguese"),
    ]
    .into_iter()
    .map(PerspectiveTemplate::new)
    .collect()
}

const BODY: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
    "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae ab illo inventore veritatis et quasi architecto beatae vitae dicta sunt explicabo.",
    "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia consequuntur magni dolores eos qui ratione voluptatem sequi nesciunt. Neque porro quisquam est, qui dolorem ipsum quia dolor sit amet, consectetur, adipisci velit.",
    "At vero eos et accusamus et iusto odio dignissimos ducimus qui blanditiis praesentium voluptatum deleniti atque corrupti quos dolores et quas molestias excepturi sint occaecati cupiditate non provident, similique sunt in culpa qui officia deserunt mollitia animi.",
    "Temporibus autem quibusdam et aut officiis debitis aut rerum necessitatibus saepe eveniet ut et voluptates repudiandae sint et molestiae non recusandae. Itaque earum rerum hic tenetur a sapiente delectus, ut aut reiciendis voluptatibus maiores alias consequatur aut perferendis doloribus asperiores repellat.",
];

pub fn article_details() -> Vec<ArticleDetail> {
    let record = ArticleRecord::new(
        "1",
        "Congressional Budget Office Projects Economic Growth Despite Political Uncertainty",
        "New analysis suggests the economy will continue to expand through 2024, even as political tensions remain high heading into election season. The report outlines key factors driving growth and potential risks ahead.",
        "Washington Post",
        us(),
        Bias::Left,
    )
    .published(date(2024, 1, 15));

    vec![ArticleDetail {
        record,
        author: Some("Sarah Martinez".to_string()),
        read_time: Some("4 min read".to_string()),
        paragraphs: BODY.iter().map(|p| p.to_string()).collect(),
        key_points: vec![
            "Economic growth projected to continue through 2024".to_string(),
            "Political uncertainty remains a key factor to monitor".to_string(),
            "Congressional Budget Office provides latest analysis".to_string(),
        ],
        related: vec![
            "Federal Reserve Policy Impact on Economic Forecasts".to_string(),
            "Political Tensions Rise Ahead of Election Season".to_string(),
            "Market Response to Congressional Budget Analysis".to_string(),
        ],
        analysis: Some(BiasAnalysis {
            political: Bias::Left,
            sentiment: Sentiment::new(35, 45, 20),
            explanation: "This article shows a left-leaning perspective through its framing of economic policy and emphasis on government intervention benefits. The language used suggests optimism about federal spending programs while downplaying market-based solutions.".to_string(),
        }),
    }]
}
