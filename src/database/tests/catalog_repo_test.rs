use super::*;
use crate::database::models::CreateProductInput;
use sqlx::SqlitePool;

async fn setup_pool() -> SqlitePool {
    let ctx = crate::test_utils::init_test_db().await;
    ctx.pool
}

fn input(name: &str, brand: Option<&str>) -> CreateProductInput {
    CreateProductInput {
        barcode: None,
        name: name.to_string(),
        brand: brand.map(str::to_string),
        default_quantity_unit: None,
    }
}

#[tokio::test]
async fn test_create_and_get_product() {
    let pool = setup_pool().await;

    let created = create_product(&pool, &input("Mleko UHT Łaciate", Some("Łaciate")))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.default_quantity_unit, "units");
    // keyword index is folded and includes the brand
    assert_eq!(created.keywords, "laciate mleko uht");

    let fetched = get_product_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Mleko UHT Łaciate");

    assert!(get_product_by_id(&pool, 9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_product_by_barcode() {
    let pool = setup_pool().await;

    let mut with_code = input("Ser żółty Gouda", None);
    with_code.barcode = Some("5901234123457".to_string());
    create_product(&pool, &with_code).await.unwrap();

    let found = get_product_by_barcode(&pool, "5901234123457")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Ser żółty Gouda");
    assert!(get_product_by_barcode(&pool, "000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_search_similar_orders_by_name() {
    let pool = setup_pool().await;

    create_product(&pool, &input("Mleko zagęszczone", None)).await.unwrap();
    create_product(&pool, &input("Mleko UHT 2%", None)).await.unwrap();
    create_product(&pool, &input("Chleb razowy", None)).await.unwrap();

    let candidates = search_similar(&pool, "mleko świeże", None).await.unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].name, "Mleko UHT 2%");
    assert_eq!(candidates[1].name, "Mleko zagęszczone");
}

#[tokio::test]
async fn test_search_similar_is_diacritic_insensitive() {
    let pool = setup_pool().await;

    create_product(&pool, &input("Mleko Łaciate", None)).await.unwrap();

    // OCR output without diacritics still hits the folded index
    let candidates = search_similar(&pool, "mleko laciate", None).await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "Mleko Łaciate");
}

#[tokio::test]
async fn test_search_similar_includes_brand_terms() {
    let pool = setup_pool().await;

    create_product(&pool, &input("Jogurt Naturalny", Some("Danone"))).await.unwrap();
    create_product(&pool, &input("Kefir", None)).await.unwrap();

    let candidates = search_similar(&pool, "jogurcik", Some("Danone")).await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].brand.as_deref(), Some("Danone"));
}

#[tokio::test]
async fn test_search_similar_empty_name_returns_nothing() {
    let pool = setup_pool().await;
    create_product(&pool, &input("Mleko UHT", None)).await.unwrap();

    assert!(search_similar(&pool, "", None).await.unwrap().is_empty());
    assert!(search_similar(&pool, " .. !? ", None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_product_rebuilds_keywords() {
    let pool = setup_pool().await;

    let created = create_product(&pool, &input("Mleko UHT", None)).await.unwrap();

    let updates = UpdateProductInput {
        name: Some("Jogurt Naturalny".to_string()),
        brand: Some("Danone".to_string()),
        ..Default::default()
    };
    let updated = update_product(&pool, created.id, &updates)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Jogurt Naturalny");
    assert_eq!(updated.keywords, "danone jogurt naturalny");

    // the old keywords no longer match, the new ones do
    assert!(search_similar(&pool, "mleko", None).await.unwrap().is_empty());
    assert_eq!(search_similar(&pool, "jogurt", None).await.unwrap().len(), 1);

    assert!(update_product(&pool, 9999, &UpdateProductInput::default())
        .await
        .unwrap()
        .is_none());
}
