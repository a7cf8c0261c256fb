use sea_orm_migration::prelude::*;

use crate::entities::{access_logs, profiles};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_profiles_user_id")
                    .table(profiles::Entity)
                    .col(profiles::Column::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_access_logs_user_accessed")
                    .table(access_logs::Entity)
                    .col(access_logs::Column::UserId)
                    .col(access_logs::Column::AccessedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_access_logs_user_accessed")
                    .table(access_logs::Entity)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_profiles_user_id")
                    .table(profiles::Entity)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
