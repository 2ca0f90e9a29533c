//! Query integration tests for `SqliteCafeRepository`.

use cafe_registry::{CafeQuery, CafeRepository, RepositoryError};
use cafe_store_sqlite::SqliteCafeRepository;
use cafe_types::NewCafe;

fn cafe(name: &str, location: &str) -> NewCafe {
    NewCafe {
        name: name.to_string(),
        map_url: format!("https://maps.example/{name}"),
        img_url: format!("https://img.example/{name}.jpg"),
        location: location.to_string(),
        seats: "20-30".to_string(),
        has_toilet: true,
        has_wifi: true,
        has_sockets: false,
        can_take_calls: true,
        coffee_price: None,
    }
}

#[tokio::test]
async fn list_all_returns_all() {
    let repo = SqliteCafeRepository::open_in_memory().expect("open");
    let a = repo.insert(cafe("alpha", "Peckham")).await.expect("insert 1");
    let b = repo.insert(cafe("beta", "Shoreditch")).await.expect("insert 2");

    let all = repo.list_all().await.expect("list_all");
    assert_eq!(all, vec![a, b]);
}

#[tokio::test]
async fn list_all_on_empty_store() {
    let repo = SqliteCafeRepository::open_in_memory().expect("open");
    let all = repo.list_all().await.expect("list_all");
    assert!(all.is_empty());
}

#[tokio::test]
async fn find_by_location_returns_first_inserted() {
    let repo = SqliteCafeRepository::open_in_memory().expect("open");
    let first = repo.insert(cafe("one", "Peckham")).await.expect("i");
    repo.insert(cafe("two", "Peckham")).await.expect("i");
    repo.insert(cafe("three", "Hackney")).await.expect("i");

    let found = repo.find_by_location("Peckham").await.expect("find");
    assert_eq!(found, Some(first));
}

#[tokio::test]
async fn find_by_location_is_exact_and_case_sensitive() {
    let repo = SqliteCafeRepository::open_in_memory().expect("open");
    repo.insert(cafe("one", "Peckham")).await.expect("i");

    assert!(repo.find_by_location("peckham").await.expect("find").is_none());
    assert!(repo.find_by_location("Peck").await.expect("find").is_none());
    assert!(repo.find_by_location("Hackney").await.expect("find").is_none());
}

#[tokio::test]
async fn find_all_with_location_filter() {
    let repo = SqliteCafeRepository::open_in_memory().expect("open");
    repo.insert(cafe("one", "Peckham")).await.expect("i");
    repo.insert(cafe("two", "Hackney")).await.expect("i");
    repo.insert(cafe("three", "Peckham")).await.expect("i");

    let results = repo
        .find_all(CafeQuery::all().with_location("Peckham"))
        .await
        .expect("find");
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|c| c.location == "Peckham"));
}

#[tokio::test]
async fn pick_random_on_empty_store_fails() {
    let repo = SqliteCafeRepository::open_in_memory().expect("open");
    let err = repo.pick_random().await;
    assert!(matches!(err, Err(RepositoryError::EmptyStore)));
}

#[tokio::test]
async fn pick_random_returns_a_stored_cafe() {
    let repo = SqliteCafeRepository::open_in_memory().expect("open");
    let a = repo.insert(cafe("alpha", "Peckham")).await.expect("i");
    let b = repo.insert(cafe("beta", "Hackney")).await.expect("i");
    let c = repo.insert(cafe("gamma", "Soho")).await.expect("i");

    for _ in 0..20 {
        let picked = repo.pick_random().await.expect("pick");
        assert!(picked == a || picked == b || picked == c);
    }
}

#[tokio::test]
async fn pick_random_single_row() {
    let repo = SqliteCafeRepository::open_in_memory().expect("open");
    let only = repo.insert(cafe("solo", "Soho")).await.expect("i");
    assert_eq!(repo.pick_random().await.expect("pick"), only);
}

#[tokio::test]
async fn count_tracks_inserts_and_deletes() {
    let repo = SqliteCafeRepository::open_in_memory().expect("open");
    assert_eq!(repo.count().await.expect("count"), 0);
    let a = repo.insert(cafe("alpha", "Peckham")).await.expect("i");
    repo.insert(cafe("beta", "Peckham")).await.expect("i");
    assert_eq!(repo.count().await.expect("count"), 2);
    repo.delete(a.id).await.expect("delete");
    assert_eq!(repo.count().await.expect("count"), 1);
}
