use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表（id 来自外部身份提供方）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().null())
                    .col(ColumnDef::new(Users::FirstName).string().null())
                    .col(ColumnDef::new(Users::LastName).string().null())
                    .col(ColumnDef::new(Users::ProfileImageUrl).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建大学表
        manager
            .create_table(
                Table::create()
                    .table(Universities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Universities::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Universities::Name).string().not_null())
                    .col(ColumnDef::new(Universities::Country).string().null())
                    .col(ColumnDef::new(Universities::Location).string().null())
                    .col(ColumnDef::new(Universities::Ranking).integer().null())
                    .col(ColumnDef::new(Universities::Description).text().null())
                    .col(ColumnDef::new(Universities::Website).string().null())
                    .col(ColumnDef::new(Universities::LogoUrl).string().null())
                    .col(
                        ColumnDef::new(Universities::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::UniversityId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Faculty).string().null())
                    .col(ColumnDef::new(Courses::Level).string().null())
                    .col(ColumnDef::new(Courses::Duration).string().null())
                    .col(ColumnDef::new(Courses::TuitionFee).string().null())
                    .col(ColumnDef::new(Courses::IeltsOverall).string().null())
                    .col(ColumnDef::new(Courses::Intake).string().null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::UniversityId)
                            .to(Universities::Table, Universities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建顾问表
        manager
            .create_table(
                Table::create()
                    .table(Counselors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Counselors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Counselors::Name).string().not_null())
                    .col(ColumnDef::new(Counselors::Title).string().null())
                    .col(ColumnDef::new(Counselors::Specialization).string().null())
                    .col(ColumnDef::new(Counselors::Email).string().null())
                    .col(ColumnDef::new(Counselors::Phone).string().null())
                    .col(ColumnDef::new(Counselors::Bio).text().null())
                    .col(ColumnDef::new(Counselors::ImageUrl).string().null())
                    .col(
                        ColumnDef::new(Counselors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Counselors::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建收藏表
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).string().not_null())
                    .col(ColumnDef::new(Favorites::CourseId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Favorites::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Favorites::Table, Favorites::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一用户对同一课程只能收藏一次
        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_course")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::CourseId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 创建申请表
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::UserId).string().not_null())
                    .col(ColumnDef::new(Applications::FullName).string().not_null())
                    .col(ColumnDef::new(Applications::Email).string().not_null())
                    .col(ColumnDef::new(Applications::Phone).string().null())
                    .col(ColumnDef::new(Applications::Nationality).string().null())
                    .col(
                        ColumnDef::new(Applications::SelectedCourses)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Applications::Message).text().null())
                    .col(ColumnDef::new(Applications::Status).string().not_null())
                    .col(
                        ColumnDef::new(Applications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_applications_user_id")
                    .table(Applications::Table)
                    .col(Applications::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::UserId).string().not_null())
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::NotificationType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 创建教程表
        manager
            .create_table(
                Table::create()
                    .table(Tutorials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tutorials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tutorials::Title).string().not_null())
                    .col(ColumnDef::new(Tutorials::Description).text().null())
                    .col(ColumnDef::new(Tutorials::VideoUrl).string().null())
                    .col(ColumnDef::new(Tutorials::Category).string().not_null())
                    .col(
                        ColumnDef::new(Tutorials::CategoryOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tutorials::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tutorials::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Tutorials::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tutorials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Counselors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Universities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    ProfileImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Universities {
    #[sea_orm(iden = "universities")]
    Table,
    Id,
    Name,
    Country,
    Location,
    Ranking,
    Description,
    Website,
    LogoUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    UniversityId,
    Name,
    Faculty,
    Level,
    Duration,
    TuitionFee,
    IeltsOverall,
    Intake,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Counselors {
    #[sea_orm(iden = "counselors")]
    Table,
    Id,
    Name,
    Title,
    Specialization,
    Email,
    Phone,
    Bio,
    ImageUrl,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Favorites {
    #[sea_orm(iden = "favorites")]
    Table,
    Id,
    UserId,
    CourseId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Applications {
    #[sea_orm(iden = "applications")]
    Table,
    Id,
    UserId,
    FullName,
    Email,
    Phone,
    Nationality,
    SelectedCourses,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    UserId,
    Title,
    Message,
    NotificationType,
    IsRead,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tutorials {
    #[sea_orm(iden = "tutorials")]
    Table,
    Id,
    Title,
    Description,
    VideoUrl,
    Category,
    CategoryOrder,
    SortOrder,
    IsActive,
    CreatedAt,
}
