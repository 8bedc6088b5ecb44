use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::NewMovie,
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every movie in ascending rating order with rankings recomputed
    /// and written back, so the best rated movie carries the largest ranking.
    pub async fn list_ranked(&self) -> AppResult<Vec<movie::Model>> {
        let txn = self.db.begin().await?;

        let mut movies = movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&txn)
            .await?;

        assign_rankings(&mut movies);

        for m in &movies {
            let active = movie::ActiveModel {
                id: Unchanged(m.id),
                ranking: Set(m.ranking),
                ..Default::default()
            };
            active.update(&txn).await?;
        }

        txn.commit().await?;

        Ok(movies)
    }

    pub async fn find(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        self.find(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(Some(new.rating)),
            ranking: Set(Some(new.ranking)),
            review: Set(Some(new.review)),
            img_url: Set(new.img_url),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update_review(
        &self,
        id: i32,
        rating: f64,
        review: &str,
    ) -> AppResult<movie::Model> {
        let existing = self.get(id).await?;
        let mut active: movie::ActiveModel = existing.into();
        active.rating = Set(Some(rating));
        active.review = Set(Some(review.to_string()));
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

/// Expects `movies` sorted ascending by rating. Best rated gets `len` and the
/// lowest gets 1, so ranking is `index + 1` rather than `len - index`.
pub fn assign_rankings(movies: &mut [movie::Model]) {
    for (i, m) in movies.iter_mut().enumerate() {
        m.ranking = Some(i as i32 + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (MovieStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
        let db = crate::db::connect_and_migrate(&url).await.expect("connect");
        (MovieStore::new(db), dir)
    }

    fn new_movie(title: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            year: 2010,
            description: format!("{title} overview"),
            rating: 0.0,
            ranking: 0,
            review: "No reviews yet".to_string(),
            img_url: format!("https://image.tmdb.org/t/p/w500/{title}.jpg"),
        }
    }

    async fn rated(store: &MovieStore, title: &str, rating: f64) -> movie::Model {
        let m = store.insert(new_movie(title)).await.expect("insert");
        store.update_review(m.id, rating, "seen it").await.expect("update")
    }

    #[tokio::test]
    async fn listing_gives_highest_rating_the_largest_ranking() {
        let (store, _dir) = test_store().await;
        let a = rated(&store, "A", 9.0).await;
        let b = rated(&store, "B", 7.5).await;

        let movies = store.list_ranked().await.unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);

        assert_eq!(store.get(a.id).await.unwrap().ranking, Some(2));
        assert_eq!(store.get(b.id).await.unwrap().ranking, Some(1));
    }

    #[tokio::test]
    async fn ties_follow_insertion_order() {
        let (store, _dir) = test_store().await;
        let first = rated(&store, "First", 5.0).await;
        let second = rated(&store, "Second", 5.0).await;
        let top = rated(&store, "Top", 8.0).await;

        store.list_ranked().await.unwrap();

        assert_eq!(store.get(first.id).await.unwrap().ranking, Some(1));
        assert_eq!(store.get(second.id).await.unwrap().ranking, Some(2));
        assert_eq!(store.get(top.id).await.unwrap().ranking, Some(3));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let (store, _dir) = test_store().await;
        assert!(store.list_ranked().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_starts_unrated_with_placeholder_review() {
        let (store, _dir) = test_store().await;
        let m = store.insert(new_movie("Inception")).await.unwrap();
        assert_eq!(m.rating, Some(0.0));
        assert_eq!(m.ranking, Some(0));
        assert_eq!(m.review.as_deref(), Some("No reviews yet"));
    }

    #[tokio::test]
    async fn duplicate_title_is_rejected() {
        let (store, _dir) = test_store().await;
        store.insert(new_movie("Inception")).await.unwrap();
        let err = store.insert(new_movie("Inception")).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn deleted_movie_is_not_found() {
        let (store, _dir) = test_store().await;
        let m = store.insert(new_movie("Heat")).await.unwrap();
        store.delete(m.id).await.unwrap();

        assert!(store.find(m.id).await.unwrap().is_none());
        assert!(matches!(store.get(m.id).await, Err(AppError::NotFound)));
        assert!(matches!(store.delete(m.id).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn update_review_on_missing_movie_is_not_found() {
        let (store, _dir) = test_store().await;
        assert!(matches!(store.update_review(42, 7.0, "x").await, Err(AppError::NotFound)));
    }

    #[test]
    fn best_rated_gets_largest_ranking() {
        let mut movies: Vec<movie::Model> = (1..=4)
            .map(|id| movie::Model {
                id,
                title: format!("m{id}"),
                year: 2000,
                description: String::new(),
                rating: Some(id as f64),
                ranking: None,
                review: None,
                img_url: String::new(),
            })
            .collect();

        assign_rankings(&mut movies);

        let rankings: Vec<_> = movies.iter().map(|m| m.ranking).collect();
        assert_eq!(rankings, [Some(1), Some(2), Some(3), Some(4)]);
    }
}
