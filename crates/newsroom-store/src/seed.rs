//! Sample newsroom used for demos and tests.

use chrono::NaiveDate;
use newsroom_types::{
    Article, ArticleId, ArticleStatus, Category, CategoryId, Role, User, UserId, UserStatus,
};

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn user(
    id: u64,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
    article_count: u32,
    joined: (u32, u32),
    last_active: (u32, u32),
) -> User {
    User {
        status,
        article_count,
        joined_at: date(2024, joined.0, joined.1),
        last_active: date(2024, last_active.0, last_active.1),
        ..User::new(UserId::new(id), name, email, role)
    }
}

pub(crate) fn users() -> Vec<User> {
    vec![
        user(1, "Admin User", "admin@example.com", Role::Admin, UserStatus::Active, 0, (1, 1), (1, 15)),
        user(2, "Jane Smith", "jane@example.com", Role::Editor, UserStatus::Active, 23, (1, 5), (1, 14)),
        user(3, "John Doe", "john@example.com", Role::Author, UserStatus::Active, 15, (1, 10), (1, 15)),
        user(4, "Mike Johnson", "mike@example.com", Role::Author, UserStatus::Active, 8, (1, 12), (1, 13)),
        user(5, "Sarah Wilson", "sarah@example.com", Role::Author, UserStatus::Inactive, 3, (1, 8), (1, 10)),
    ]
}

pub(crate) fn categories() -> Vec<Category> {
    [
        (1, "Technology", "Latest tech news and innovations", "bg-blue-500", 45),
        (2, "Business", "Business and financial news", "bg-green-500", 32),
        (3, "Sports", "Sports news and updates", "bg-orange-500", 28),
        (4, "Politics", "Political news and analysis", "bg-red-500", 21),
        (5, "Entertainment", "Entertainment and celebrity news", "bg-purple-500", 19),
    ]
    .into_iter()
    .map(|(id, name, description, color, count)| {
        Category::new(CategoryId::new(id), name, description, color).with_article_count(count)
    })
    .collect()
}

pub(crate) fn articles() -> Vec<Article> {
    let mut launch = Article::draft(
        ArticleId::new(1),
        "Breaking: Tech Company Announces Revolutionary AI Product",
        "John Doe",
        "Technology",
    );
    launch.excerpt =
        "A major technology company has unveiled their latest artificial intelligence...".to_string();
    launch.status = ArticleStatus::Published;
    launch.published_at = date(2024, 1, 15);
    launch.views = 1250;
    launch.set_tags(["AI", "Technology", "Innovation"]);

    let mut markets = Article::draft(
        ArticleId::new(2),
        "Market Analysis: Q4 Results Show Unprecedented Growth",
        "Jane Smith",
        "Business",
    );
    markets.excerpt =
        "Financial markets are showing remarkable resilience as companies report...".to_string();

    let mut finals = Article::draft(
        ArticleId::new(3),
        "Sports Championship Finals Draw Record Viewership",
        "Mike Johnson",
        "Sports",
    );
    finals.excerpt = "The annual championship drew millions of viewers worldwide...".to_string();
    finals.status = ArticleStatus::Published;
    finals.published_at = date(2024, 1, 13);
    finals.views = 890;

    vec![launch, markets, finals]
}
