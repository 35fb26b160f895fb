use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct KeyResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> KeyResultRepository<'a, C> {
    /// Creates a new instance of [`KeyResultRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Key results of a single objective, ordered by ID
    pub async fn get_by_objective_id(
        &self,
        objective_id: i32,
    ) -> Result<Vec<entity::key_result::Model>, DbErr> {
        entity::prelude::KeyResult::find()
            .filter(entity::key_result::Column::ObjectiveId.eq(objective_id))
            .order_by_asc(entity::key_result::Column::Id)
            .all(self.db)
            .await
    }

    /// Key results of several objectives in one query, ordered by ID
    ///
    /// Returns an empty list without querying when `objective_ids` is empty.
    pub async fn get_by_objective_ids(
        &self,
        objective_ids: &[i32],
    ) -> Result<Vec<entity::key_result::Model>, DbErr> {
        if objective_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::KeyResult::find()
            .filter(entity::key_result::Column::ObjectiveId.is_in(objective_ids.iter().copied()))
            .order_by_asc(entity::key_result::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod get_by_objective_id {
        use compass_test_utils::prelude::*;

        use crate::server::data::key_result::KeyResultRepository;

        /// Expect only key results of the requested objective
        #[tokio::test]
        async fn returns_objective_key_results() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_report_tables().build().await?;
            let objective = test.okr().insert_mock_objective(None, None, None).await?;
            let other = test.okr().insert_mock_objective(None, None, None).await?;
            let first = test
                .okr()
                .insert_mock_key_result(objective.id, Some(20), false)
                .await?;
            test.okr()
                .insert_mock_key_result(other.id, Some(20), false)
                .await?;
            let second = test
                .okr()
                .insert_mock_key_result(objective.id, Some(100), true)
                .await?;

            let repo = KeyResultRepository::new(&test.db);
            let result = repo.get_by_objective_id(objective.id).await?;

            let ids: Vec<i32> = result.iter().map(|kr| kr.id).collect();
            assert_eq!(ids, vec![first.id, second.id]);
            assert!(result.iter().all(|kr| kr.objective_id == objective.id));

            Ok(())
        }
    }

    mod get_by_objective_ids {
        use compass_test_utils::prelude::*;

        use crate::server::data::key_result::KeyResultRepository;

        /// Expect key results of every requested objective and none of the others
        #[tokio::test]
        async fn returns_key_results_for_all_objectives() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_report_tables().build().await?;
            let first = test.okr().insert_mock_objective(None, None, None).await?;
            let second = test.okr().insert_mock_objective(None, None, None).await?;
            let excluded = test.okr().insert_mock_objective(None, None, None).await?;
            for objective_id in [first.id, second.id, excluded.id] {
                test.okr()
                    .insert_mock_key_result(objective_id, None, false)
                    .await?;
            }

            let repo = KeyResultRepository::new(&test.db);
            let result = repo.get_by_objective_ids(&[first.id, second.id]).await?;

            let parents: Vec<i32> = result.iter().map(|kr| kr.objective_id).collect();
            assert_eq!(parents, vec![first.id, second.id]);

            Ok(())
        }

        /// Expect an empty list, without touching the database, for no objectives
        #[tokio::test]
        async fn returns_empty_for_no_objectives() -> Result<(), TestError> {
            // No tables: any query would fail
            let test = TestBuilder::new().build().await?;

            let repo = KeyResultRepository::new(&test.db);
            let result = repo.get_by_objective_ids(&[]).await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_empty());

            Ok(())
        }
    }
}
