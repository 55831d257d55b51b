use masthead_core::{AuthorId, Catalog, MagazineId};

fn seeded() -> (Catalog, AuthorId, MagazineId) {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("A").unwrap();
    let magazine = catalog.create_magazine("M1", "Tech").unwrap();
    (catalog, author, magazine)
}

#[test]
fn single_article_scenario() {
    let (mut catalog, author, magazine) = seeded();
    catalog.add_article(author, magazine, "Five+").unwrap();

    assert_eq!(catalog.author(author).unwrap().articles().len(), 1);
    let contributors = catalog.magazine(magazine).unwrap().contributors();
    assert_eq!(contributors.len(), 1);
    assert_eq!(contributors[0].id(), author);
}

#[test]
fn author_magazines_and_topics_are_distinct() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("John Doe").unwrap();
    let tech = catalog.create_magazine("Tech Monthly", "Technology").unwrap();
    let gadgets = catalog.create_magazine("Gadget Life", "Technology").unwrap();
    let health = catalog.create_magazine("Health Weekly", "Health").unwrap();
    catalog.add_article(author, tech, "The Rise of AI").unwrap();
    catalog.add_article(author, health, "Healthy Living Tips").unwrap();
    catalog.add_article(author, tech, "AI, Part Two").unwrap();
    catalog.add_article(author, gadgets, "Pocket Computers").unwrap();

    let view = catalog.author(author).unwrap();
    let magazines: Vec<MagazineId> = view.magazines().iter().map(|m| m.id()).collect();
    assert_eq!(magazines, vec![tech, health, gadgets]);
    assert_eq!(view.topic_areas(), Some(vec!["Technology", "Health"]));
}

#[test]
fn empty_sources_yield_no_data_instead_of_empty_lists() {
    let (catalog, author, magazine) = seeded();

    let author_view = catalog.author(author).unwrap();
    assert!(author_view.articles().is_empty());
    assert!(author_view.magazines().is_empty());
    assert_eq!(author_view.topic_areas(), None);

    let magazine_view = catalog.magazine(magazine).unwrap();
    assert!(magazine_view.contributors().is_empty());
    assert_eq!(magazine_view.article_titles(), None);
    assert!(magazine_view.contributing_authors().is_none());
}

#[test]
fn article_titles_follow_article_order() {
    let mut catalog = Catalog::new();
    let john = catalog.create_author("John Doe").unwrap();
    let jane = catalog.create_author("Jane Smith").unwrap();
    let tech = catalog.create_magazine("Tech Monthly", "Technology").unwrap();
    catalog.add_article(john, tech, "The Rise of AI").unwrap();
    catalog
        .add_article(jane, tech, "Quantum Computing Explained")
        .unwrap();

    let view = catalog.magazine(tech).unwrap();
    assert_eq!(
        view.article_titles(),
        Some(vec!["The Rise of AI", "Quantum Computing Explained"])
    );
    let contributors: Vec<AuthorId> = view.contributors().iter().map(|a| a.id()).collect();
    assert_eq!(contributors, vec![john, jane]);
    assert!(view.contributing_authors().is_none());
}

#[test]
fn contributing_authors_need_more_than_two_articles() {
    let (mut catalog, author, magazine) = seeded();
    catalog.add_article(author, magazine, "First piece").unwrap();
    catalog.add_article(author, magazine, "Second piece").unwrap();

    assert!(catalog
        .magazine(magazine)
        .unwrap()
        .contributing_authors()
        .is_none());

    catalog.add_article(author, magazine, "Third piece").unwrap();
    let contributing = catalog
        .magazine(magazine)
        .unwrap()
        .contributing_authors()
        .expect("three articles should qualify");
    assert_eq!(contributing.len(), 1);
    assert_eq!(contributing[0].id(), author);
}

#[test]
fn contributing_authors_counts_per_magazine() {
    let mut catalog = Catalog::new();
    let prolific = catalog.create_author("Prolific").unwrap();
    let casual = catalog.create_author("Casual").unwrap();
    let home = catalog.create_magazine("Home", "Tech").unwrap();
    let away = catalog.create_magazine("Away", "Tech").unwrap();
    for title in ["Home one", "Home two", "Home three"] {
        catalog.add_article(prolific, home, title).unwrap();
    }
    for title in ["Away one", "Away two"] {
        catalog.add_article(prolific, away, title).unwrap();
        catalog.add_article(casual, home, title).unwrap();
    }

    let home_view = catalog.magazine(home).unwrap();
    let ids: Vec<AuthorId> = home_view
        .contributing_authors()
        .unwrap()
        .iter()
        .map(|author| author.id())
        .collect();
    assert_eq!(ids, vec![prolific]);
    assert!(catalog
        .magazine(away)
        .unwrap()
        .contributing_authors()
        .is_none());
}

#[test]
fn top_publisher_picks_strictly_greatest_count() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("A").unwrap();
    let small = catalog.create_magazine("Small", "Tech").unwrap();
    let big = catalog.create_magazine("Big", "Tech").unwrap();

    assert!(catalog.top_publisher().is_none());

    catalog.add_article(author, small, "Small one").unwrap();
    catalog.add_article(author, big, "Big one").unwrap();
    catalog.add_article(author, big, "Big two").unwrap();

    assert_eq!(catalog.top_publisher().unwrap().id(), big);
}

#[test]
fn top_publisher_ties_resolve_to_earliest_created() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("A").unwrap();
    let _empty = catalog.create_magazine("Empty", "Tech").unwrap();
    let first = catalog.create_magazine("First", "Tech").unwrap();
    let second = catalog.create_magazine("Second", "Tech").unwrap();
    catalog.add_article(author, second, "Second one").unwrap();
    catalog.add_article(author, first, "First one").unwrap();

    assert_eq!(catalog.top_publisher().unwrap().id(), first);
}
