use masthead_core::Catalog;

#[test]
fn records_serialize_links_as_ids() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("John Doe").unwrap();
    let magazine = catalog.create_magazine("Tech Monthly", "Technology").unwrap();
    let article = catalog
        .add_article(author, magazine, "The Rise of AI")
        .unwrap();

    let author_json = serde_json::to_value(catalog.author(author).unwrap().record()).unwrap();
    assert_eq!(author_json["id"], author.to_string());
    assert_eq!(author_json["name"], "John Doe");
    assert_eq!(author_json["articles"], serde_json::json!([article.to_string()]));

    let magazine_json =
        serde_json::to_value(catalog.magazine(magazine).unwrap().record()).unwrap();
    assert_eq!(magazine_json["name"], "Tech Monthly");
    assert_eq!(magazine_json["category"], "Technology");
    assert_eq!(magazine_json["articles"], serde_json::json!([article.to_string()]));

    let article_json = serde_json::to_value(catalog.article(article).unwrap().record()).unwrap();
    assert_eq!(article_json["author"], author.to_string());
    assert_eq!(article_json["magazine"], magazine.to_string());
    assert_eq!(article_json["title"], "The Rise of AI");
}
