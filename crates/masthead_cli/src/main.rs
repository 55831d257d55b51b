//! CLI demo entry point.
//!
//! # Responsibility
//! - Build a small sample catalog and print every derived query.
//! - Verify `masthead_core` linkage without any host application.
//!
//! Set `MASTHEAD_LOG_DIR` (and optionally `MASTHEAD_LOG_LEVEL`) to capture
//! catalog events in a log file.

use log::info;
use masthead_core::{init_logging, Catalog, LoggingConfig, ValidationResult};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    if let Some(config) = LoggingConfig::from_env()? {
        init_logging(&config)?;
    }

    println!("masthead_core version={}", masthead_core::core_version());
    run_demo()?;
    Ok(())
}

fn run_demo() -> ValidationResult<()> {
    let mut catalog = Catalog::new();

    let john = catalog.create_author("John Doe")?;
    let jane = catalog.create_author("Jane Smith")?;
    let tech = catalog.create_magazine("Tech Monthly", "Technology")?;
    let health = catalog.create_magazine("Health Weekly", "Health")?;

    let first = catalog.add_article(john, tech, "The Rise of AI")?;
    catalog.add_article(john, health, "Healthy Living Tips")?;
    catalog.add_article(jane, tech, "Quantum Computing Explained")?;
    info!("event=demo_seeded module=cli status=ok");

    if let Some(author) = catalog.author(john) {
        println!("author: {}", author.name());
        println!("  articles: {:?}", titles(&author.articles()));
        let magazines: Vec<&str> = author
            .magazines()
            .iter()
            .map(|magazine| magazine.record().name())
            .collect();
        println!("  magazines: {magazines:?}");
        println!("  topic areas: {:?}", author.topic_areas());
    }

    if let Some(magazine) = catalog.magazine(tech) {
        println!("magazine: {} ({})", magazine.name(), magazine.category());
        println!("  articles: {:?}", titles(&magazine.articles()));
        let contributors: Vec<&str> = magazine
            .contributors()
            .iter()
            .map(|author| author.record().name())
            .collect();
        println!("  contributors: {contributors:?}");
        println!("  article titles: {:?}", magazine.article_titles());
        let contributing = magazine.contributing_authors().map(|authors| {
            authors
                .iter()
                .map(|author| author.record().name())
                .collect::<Vec<_>>()
        });
        println!("  contributing authors: {contributing:?}");
    }

    if let Some(article) = catalog.article(first) {
        println!(
            "article: {} by {} in {}",
            article.title(),
            article.author().name(),
            article.magazine().name()
        );
    }

    catalog.rename_magazine(tech, "Tech Innovations")?;
    if let Some(magazine) = catalog.magazine(tech) {
        println!("renamed magazine: {}", magazine.name());
    }
    catalog.recategorize_magazine(health, "Wellness")?;
    if let Some(magazine) = catalog.magazine(health) {
        println!("recategorized magazine: {}", magazine.category());
    }

    match catalog.top_publisher() {
        Some(magazine) => println!("top publisher: {}", magazine.name()),
        None => println!("top publisher: none"),
    }
    Ok(())
}

fn titles(articles: &[masthead_core::ArticleView<'_>]) -> Vec<String> {
    articles
        .iter()
        .map(|article| article.title().to_string())
        .collect()
}
