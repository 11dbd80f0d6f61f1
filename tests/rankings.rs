mod common;

use std::collections::HashSet;

use common::{Seed, catalog, movie};
use filmdb::{entities::movie::Model as Movie, queries};
use sea_orm::TransactionTrait;

fn rated(movie_id: i32, vote_average: f64) -> Movie {
    let mut m = movie(movie_id, &format!("Movie {movie_id}"));
    m.vote_average = Some(vote_average);
    m
}

fn grossing(movie_id: i32, revenue: i64) -> Movie {
    let mut m = movie(movie_id, &format!("Movie {movie_id}"));
    m.revenue = revenue;
    m
}

#[tokio::test]
async fn actor_pair_from_two_shared_movies() {
    let catalog = catalog().await;
    Seed::new()
        .movie(rated(1, 7.0))
        .movie(rated(2, 8.0))
        .person(1, "Alice Hart")
        .person(2, "Ben Cole")
        .cast(1, 1, 0)
        .cast(1, 2, 1)
        .cast(2, 1, 0)
        .cast(2, 2, 1)
        .load(&catalog)
        .await;

    let rows = catalog.actor_pairs(2).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].actor_1, "Alice Hart");
    assert_eq!(rows[0].actor_2, "Ben Cole");
    assert_eq!(rows[0].movies_together, 2);
    assert_eq!(rows[0].avg_rating, Some(7.5));
}

#[tokio::test]
async fn actor_pairs_respect_the_threshold_and_never_mirror() {
    let catalog = catalog().await;
    // Three leads share movies 1-3; a fourth joins only movie 1.
    let mut seed = Seed::new()
        .person(1, "Ana")
        .person(2, "Bo")
        .person(3, "Cy")
        .person(4, "Di");
    for id in 1..=3 {
        seed = seed
            .movie(rated(id, 6.0 + f64::from(id)))
            .cast(id, 3, 0)
            .cast(id, 1, 1)
            .cast(id, 2, 2);
    }
    seed = seed.cast(1, 4, 3);
    seed.load(&catalog).await;

    let rows = catalog.actor_pairs(3).await.unwrap();

    assert_eq!(rows.len(), 3);
    assert!(rows.len() <= queries::PAIR_LIMIT as usize);
    let mut seen = HashSet::new();
    for row in &rows {
        assert!(row.movies_together >= 3);
        assert!(!seen.contains(&(row.actor_2.clone(), row.actor_1.clone())));
        seen.insert((row.actor_1.clone(), row.actor_2.clone()));
    }
    // lower person id always comes first
    assert!(seen.contains(&("Ana".to_string(), "Cy".to_string())));
    assert!(seen.contains(&("Bo".to_string(), "Cy".to_string())));
    assert!(seen.contains(&("Ana".to_string(), "Bo".to_string())));

    assert_eq!(catalog.actor_pairs(1).await.unwrap().len(), 6);
    assert!(catalog.actor_pairs(4).await.unwrap().is_empty());
}

#[tokio::test]
async fn actor_pairs_only_consider_leading_billing() {
    let catalog = catalog().await;
    let mut seed = Seed::new().person(1, "Lead").person(2, "Extra");
    for id in 1..=2 {
        seed = seed.movie(rated(id, 7.0)).cast(id, 1, 0).cast(id, 2, 7);
    }
    seed.load(&catalog).await;

    assert_eq!(catalog.cast_order_cutoff(), 5);
    assert!(catalog.actor_pairs(2).await.unwrap().is_empty());

    let wider = queries::actor_pairs(catalog.db(), 2, 10).await.unwrap();
    assert_eq!(wider.len(), 1);
    assert_eq!(wider[0].movies_together, 2);
}

#[tokio::test]
async fn actor_pairs_count_movies_not_billing_rows() {
    let catalog = catalog().await;
    Seed::new()
        .movie(rated(1, 9.0))
        .person(1, "Twin Role")
        .person(2, "Partner")
        .cast(1, 1, 0)
        .cast(1, 1, 2)
        .cast(1, 2, 1)
        .load(&catalog)
        .await;

    let rows = catalog.actor_pairs(1).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].movies_together, 1);
    assert!(catalog.actor_pairs(2).await.unwrap().is_empty());
}

#[tokio::test]
async fn actor_pairs_rank_by_average_rating_and_cap() {
    let catalog = catalog().await;
    // 20 two-person movies with distinct casts, each rated differently.
    let mut seed = Seed::new();
    for id in 1..=20 {
        let a = id * 2;
        let b = id * 2 + 1;
        seed = seed
            .movie(rated(id, f64::from(id) / 4.0))
            .person(a, &format!("Actor {a}"))
            .person(b, &format!("Actor {b}"))
            .cast(id, a, 0)
            .cast(id, b, 1);
    }
    seed.load(&catalog).await;

    let rows = catalog.actor_pairs(1).await.unwrap();

    assert_eq!(rows.len(), queries::PAIR_LIMIT as usize);
    assert_eq!(rows[0].avg_rating, Some(5.0));
    assert_eq!(rows[0].actor_1, "Actor 40");
    assert!(rows.windows(2).all(|w| w[0].avg_rating >= w[1].avg_rating));
}

#[tokio::test]
async fn directors_ranked_by_total_revenue() {
    let catalog = catalog().await;
    Seed::new()
        .movie(grossing(1, 100))
        .movie(grossing(2, 250))
        .movie(grossing(3, 400))
        .movie(grossing(4, 0))
        .person(1, "Maya Stone")
        .person(2, "Leo Park")
        .person(3, "Writer Only")
        .director(1, 1)
        .director(2, 1)
        .director(4, 1)
        .director(3, 2)
        .crew(3, 3, "Writing", "Screenplay")
        .load(&catalog)
        .await;

    let rows = catalog.top_directors(10).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].director_name, "Leo Park");
    assert_eq!(rows[0].total_revenue, 400);
    assert_eq!(rows[0].movies_directed, 1);
    assert_eq!(rows[1].director_name, "Maya Stone");
    // movie 4 has no reported revenue
    assert_eq!(rows[1].total_revenue, 350);
    assert_eq!(rows[1].movies_directed, 2);
}

#[tokio::test]
async fn directors_limit_is_honored() {
    let catalog = catalog().await;
    let mut seed = Seed::new();
    for id in 1..=5 {
        seed = seed
            .movie(grossing(id, i64::from(id) * 1_000))
            .person(id, &format!("Director {id}"))
            .director(id, id);
    }
    seed.load(&catalog).await;

    let top = catalog.top_directors(3).await.unwrap();
    let names: Vec<&str> = top.iter().map(|r| r.director_name.as_str()).collect();
    assert_eq!(names, ["Director 5", "Director 4", "Director 3"]);

    assert_eq!(catalog.top_directors(1).await.unwrap().len(), 1);
    assert!(catalog.top_directors(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn director_credited_in_two_departments_counts_once() {
    let catalog = catalog().await;
    Seed::new()
        .movie(grossing(1, 1_000))
        .person(1, "Auteur")
        .director(1, 1)
        .crew(1, 1, "Crew", "Director")
        .load(&catalog)
        .await;

    let rows = catalog.top_directors(5).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_revenue, 1_000);
    assert_eq!(rows[0].movies_directed, 1);
}

#[tokio::test]
async fn genre_pairs_above_revenue_threshold() {
    let catalog = catalog().await;
    Seed::new()
        .genre(1, "Action")
        .genre(2, "Comedy")
        .genre(3, "Drama")
        .movie(grossing(1, 60_000_000))
        .movie(grossing(2, 90_000_000))
        .movie(grossing(3, 10_000_000))
        .movie(grossing(4, 80_000_000))
        .movie_genre(1, 1)
        .movie_genre(1, 2)
        .movie_genre(2, 2)
        .movie_genre(2, 1)
        .movie_genre(3, 1)
        .movie_genre(3, 2)
        .movie_genre(4, 3)
        .movie_genre(4, 2)
        .load(&catalog)
        .await;

    let rows = catalog.genre_pairs(50_000_000).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].genre_1, "Comedy");
    assert_eq!(rows[0].genre_2, "Drama");
    assert_eq!(rows[0].movie_count, 1);
    assert_eq!(rows[0].avg_revenue, 80_000_000.0);
    assert_eq!(rows[1].genre_1, "Action");
    assert_eq!(rows[1].genre_2, "Comedy");
    // movie 3 is under the threshold
    assert_eq!(rows[1].movie_count, 2);
    assert_eq!(rows[1].avg_revenue, 75_000_000.0);

    let mut seen = HashSet::new();
    for row in &rows {
        assert!(!seen.contains(&(row.genre_2.clone(), row.genre_1.clone())));
        seen.insert((row.genre_1.clone(), row.genre_2.clone()));
    }
}

#[tokio::test]
async fn genre_pairs_threshold_is_inclusive_and_can_exclude_everything() {
    let catalog = catalog().await;
    Seed::new()
        .genre(1, "Horror")
        .genre(2, "Mystery")
        .movie(grossing(1, 50_000_000))
        .movie_genre(1, 1)
        .movie_genre(1, 2)
        .load(&catalog)
        .await;

    assert_eq!(catalog.genre_pairs(50_000_000).await.unwrap().len(), 1);
    assert!(catalog.genre_pairs(50_000_001).await.unwrap().is_empty());
}

#[tokio::test]
async fn genre_pairs_are_capped() {
    let catalog = catalog().await;
    // one movie tagged with seven genres yields 21 pairs
    let mut seed = Seed::new().movie(grossing(1, 1_000));
    for id in 1..=7 {
        seed = seed.genre(id, &format!("Genre {id}")).movie_genre(1, id);
    }
    seed.load(&catalog).await;

    assert_eq!(catalog.genre_pairs(0).await.unwrap().len(), queries::PAIR_LIMIT as usize);
}

#[tokio::test]
async fn queries_run_inside_a_transaction() {
    let catalog = catalog().await;
    Seed::new()
        .movie(grossing(1, 500))
        .person(1, "Solo Director")
        .director(1, 1)
        .load(&catalog)
        .await;

    let txn = catalog.db().begin().await.unwrap();
    let rows = queries::top_directors(&txn, 5).await.unwrap();
    txn.commit().await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_revenue, 500);
}

#[tokio::test]
async fn empty_catalog_yields_empty_results() {
    let catalog = catalog().await;

    assert!(catalog.plot_search("anything").await.unwrap().is_empty());
    assert!(catalog.title_search("anything").await.unwrap().is_empty());
    assert!(catalog.actor_pairs(1).await.unwrap().is_empty());
    assert!(catalog.top_directors(10).await.unwrap().is_empty());
    assert!(catalog.genre_pairs(0).await.unwrap().is_empty());
}
