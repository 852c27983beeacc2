use sea_orm_migration::prelude::*;

const CREATED_AT_INDEX: &str = "idx_form_submissions_created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FormSubmissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FormSubmissions::FormType).string().not_null())
                    .col(ColumnDef::new(FormSubmissions::FirstName).string().not_null())
                    .col(ColumnDef::new(FormSubmissions::LastName).string().not_null())
                    .col(ColumnDef::new(FormSubmissions::Email).string().not_null())
                    .col(ColumnDef::new(FormSubmissions::Phone).string().not_null())
                    .col(ColumnDef::new(FormSubmissions::Message).text().not_null())
                    .col(
                        ColumnDef::new(FormSubmissions::ServiceInterest)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FormSubmissions::PreferredContact)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FormSubmissions::SourcePage).string())
                    .col(ColumnDef::new(FormSubmissions::UtmSource).string())
                    .col(ColumnDef::new(FormSubmissions::UtmMedium).string())
                    .col(ColumnDef::new(FormSubmissions::UtmCampaign).string())
                    .col(ColumnDef::new(FormSubmissions::CrmLeadId).string())
                    .col(
                        ColumnDef::new(FormSubmissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Serves the admin listing, newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(CREATED_AT_INDEX)
                    .table(FormSubmissions::Table)
                    .col(FormSubmissions::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(CREATED_AT_INDEX)
                    .table(FormSubmissions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(FormSubmissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FormSubmissions {
    Table,
    Id,
    FormType,
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
    ServiceInterest,
    PreferredContact,
    SourcePage,
    UtmSource,
    UtmMedium,
    UtmCampaign,
    CrmLeadId,
    CreatedAt,
}
