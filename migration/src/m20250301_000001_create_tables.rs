use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
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
                    .col(ColumnDef::new(Courses::Fullname).string().not_null())
                    .col(ColumnDef::new(Courses::Shortname).string().not_null())
                    .col(
                        ColumnDef::new(Courses::Sortorder)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Courses::Visible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Courses::TimeModified)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrolments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrolments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrolments::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Enrolments::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Enrolments::Status).string().not_null())
                    .col(
                        ColumnDef::new(Enrolments::TimeCreated)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrolments::Table, Enrolments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrolments::Table, Enrolments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建活动模块类型表
        manager
            .create_table(
                Table::create()
                    .table(Modules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Modules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Modules::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程模块表（权限作用域容器）
        manager
            .create_table(
                Table::create()
                    .table(CourseModules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseModules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::ModuleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::Instance)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::Visible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseModules::Table, CourseModules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseModules::Table, CourseModules::ModuleId)
                            .to(Modules::Table, Modules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建权限授予表
        manager
            .create_table(
                Table::create()
                    .table(CapabilityGrants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CapabilityGrants::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CapabilityGrants::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CapabilityGrants::ContextLevel)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CapabilityGrants::InstanceId)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CapabilityGrants::Capability)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CapabilityGrants::Table, CapabilityGrants::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assign::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assign::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assign::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Assign::Name).string().not_null())
                    .col(flag(Assign::NoSubmissions))
                    .col(flag(Assign::SubmissionDrafts))
                    .col(flag(Assign::SendNotifications))
                    .col(flag(Assign::SendLateNotifications))
                    .col(timestamp(Assign::DueDate))
                    .col(timestamp(Assign::AllowSubmissionsFromDate))
                    .col(
                        ColumnDef::new(Assign::Grade)
                            .big_integer()
                            .not_null()
                            .default(100),
                    )
                    .col(timestamp(Assign::TimeModified))
                    .col(flag(Assign::CompletionSubmit))
                    .col(timestamp(Assign::CutoffDate))
                    .col(flag(Assign::TeamSubmission))
                    .col(flag(Assign::RequireAllTeamMembersSubmit))
                    .col(
                        ColumnDef::new(Assign::TeamSubmissionGroupingId)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(flag(Assign::BlindMarking))
                    .col(flag(Assign::RevealIdentities))
                    .col(
                        ColumnDef::new(Assign::AttemptReopenMethod)
                            .string()
                            .not_null()
                            .default("none"),
                    )
                    .col(
                        ColumnDef::new(Assign::MaxAttempts)
                            .integer()
                            .not_null()
                            .default(-1),
                    )
                    .col(flag(Assign::MarkingWorkflow))
                    .col(flag(Assign::MarkingAllocation))
                    .col(flag(Assign::RequireSubmissionStatement))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assign::Table, Assign::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业插件配置表
        manager
            .create_table(
                Table::create()
                    .table(AssignPluginConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignPluginConfig::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignPluginConfig::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssignPluginConfig::Plugin).string().not_null())
                    .col(
                        ColumnDef::new(AssignPluginConfig::Subtype)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssignPluginConfig::Name).string().not_null())
                    .col(ColumnDef::new(AssignPluginConfig::Value).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignPluginConfig::Table, AssignPluginConfig::AssignmentId)
                            .to(Assign::Table, Assign::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评分表
        manager
            .create_table(
                Table::create()
                    .table(AssignGrades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignGrades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignGrades::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssignGrades::UserId).big_integer().not_null())
                    .col(timestamp(AssignGrades::TimeCreated))
                    .col(timestamp(AssignGrades::TimeModified))
                    .col(
                        ColumnDef::new(AssignGrades::GraderId)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(AssignGrades::Grade).double().null())
                    .col(
                        ColumnDef::new(AssignGrades::AttemptNumber)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignGrades::Table, AssignGrades::AssignmentId)
                            .to(Assign::Table, Assign::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(AssignSubmission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignSubmission::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignSubmission::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignSubmission::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(timestamp(AssignSubmission::TimeCreated))
                    .col(timestamp(AssignSubmission::TimeModified))
                    .col(ColumnDef::new(AssignSubmission::Status).string().null())
                    .col(
                        ColumnDef::new(AssignSubmission::GroupId)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AssignSubmission::AttemptNumber)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignSubmission::Table, AssignSubmission::AssignmentId)
                            .to(Assign::Table, Assign::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建用户标记表
        manager
            .create_table(
                Table::create()
                    .table(AssignUserFlags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignUserFlags::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignUserFlags::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignUserFlags::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(flag(AssignUserFlags::Locked))
                    .col(flag(AssignUserFlags::Mailed))
                    .col(timestamp(AssignUserFlags::ExtensionDueDate))
                    .col(ColumnDef::new(AssignUserFlags::WorkflowState).string().null())
                    .col(
                        ColumnDef::new(AssignUserFlags::AllocatedMarker)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignUserFlags::Table, AssignUserFlags::AssignmentId)
                            .to(Assign::Table, Assign::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建匿名映射表
        manager
            .create_table(
                Table::create()
                    .table(AssignUserMapping::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignUserMapping::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignUserMapping::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignUserMapping::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignUserMapping::Table, AssignUserMapping::AssignmentId)
                            .to(Assign::Table, Assign::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建在线文本提交表
        manager
            .create_table(
                Table::create()
                    .table(AssignsubmissionOnlinetext::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignsubmissionOnlinetext::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignsubmissionOnlinetext::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignsubmissionOnlinetext::SubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignsubmissionOnlinetext::OnlineText)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AssignsubmissionOnlinetext::OnlineFormat)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                AssignsubmissionOnlinetext::Table,
                                AssignsubmissionOnlinetext::SubmissionId,
                            )
                            .to(AssignSubmission::Table, AssignSubmission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文件元数据表
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Files::ContextId).big_integer().not_null())
                    .col(ColumnDef::new(Files::Component).string().not_null())
                    .col(ColumnDef::new(Files::FileArea).string().not_null())
                    .col(ColumnDef::new(Files::ItemId).big_integer().not_null())
                    .col(ColumnDef::new(Files::FilePath).string().not_null())
                    .col(ColumnDef::new(Files::FileName).string().not_null())
                    .col(timestamp(Files::TimeModified))
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrolments_user_course")
                    .table(Enrolments::Table)
                    .col(Enrolments::UserId)
                    .col(Enrolments::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_modules_instance")
                    .table(CourseModules::Table)
                    .col(CourseModules::ModuleId)
                    .col(CourseModules::Instance)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_capability_grants_user")
                    .table(CapabilityGrants::Table)
                    .col(CapabilityGrants::UserId)
                    .col(CapabilityGrants::Capability)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assign_grades_attempt")
                    .table(AssignGrades::Table)
                    .col(AssignGrades::AssignmentId)
                    .col(AssignGrades::UserId)
                    .col(AssignGrades::AttemptNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assign_submission_attempt")
                    .table(AssignSubmission::Table)
                    .col(AssignSubmission::AssignmentId)
                    .col(AssignSubmission::UserId)
                    .col(AssignSubmission::AttemptNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assign_user_flags_assignment")
                    .table(AssignUserFlags::Table)
                    .col(AssignUserFlags::AssignmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assign_user_mapping_assignment")
                    .table(AssignUserMapping::Table)
                    .col(AssignUserMapping::AssignmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_files_component_item")
                    .table(Files::Table)
                    .col(Files::Component)
                    .col(Files::FileArea)
                    .col(Files::ItemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignsubmissionOnlinetext::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignUserMapping::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignUserFlags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignSubmission::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignGrades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignPluginConfig::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assign::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CapabilityGrants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseModules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Modules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrolments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

// 0/1 标志列
fn flag<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name).integer().not_null().default(0).to_owned()
}

// 秒级时间戳列，0 表示未设置
fn timestamp<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .big_integer()
        .not_null()
        .default(0)
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Role,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Fullname,
    Shortname,
    Sortorder,
    Visible,
    TimeModified,
}

#[derive(DeriveIden)]
enum Enrolments {
    #[sea_orm(iden = "enrolments")]
    Table,
    Id,
    CourseId,
    UserId,
    Status,
    TimeCreated,
}

#[derive(DeriveIden)]
enum Modules {
    #[sea_orm(iden = "modules")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum CourseModules {
    #[sea_orm(iden = "course_modules")]
    Table,
    Id,
    CourseId,
    ModuleId,
    Instance,
    Visible,
}

#[derive(DeriveIden)]
enum CapabilityGrants {
    #[sea_orm(iden = "capability_grants")]
    Table,
    Id,
    UserId,
    ContextLevel,
    InstanceId,
    Capability,
}

#[derive(DeriveIden)]
enum Assign {
    #[sea_orm(iden = "assign")]
    Table,
    Id,
    CourseId,
    Name,
    NoSubmissions,
    SubmissionDrafts,
    SendNotifications,
    SendLateNotifications,
    DueDate,
    AllowSubmissionsFromDate,
    Grade,
    TimeModified,
    CompletionSubmit,
    CutoffDate,
    TeamSubmission,
    RequireAllTeamMembersSubmit,
    TeamSubmissionGroupingId,
    BlindMarking,
    RevealIdentities,
    AttemptReopenMethod,
    MaxAttempts,
    MarkingWorkflow,
    MarkingAllocation,
    RequireSubmissionStatement,
}

#[derive(DeriveIden)]
enum AssignPluginConfig {
    #[sea_orm(iden = "assign_plugin_config")]
    Table,
    Id,
    AssignmentId,
    Plugin,
    Subtype,
    Name,
    Value,
}

#[derive(DeriveIden)]
enum AssignGrades {
    #[sea_orm(iden = "assign_grades")]
    Table,
    Id,
    AssignmentId,
    UserId,
    TimeCreated,
    TimeModified,
    GraderId,
    Grade,
    AttemptNumber,
}

#[derive(DeriveIden)]
enum AssignSubmission {
    #[sea_orm(iden = "assign_submission")]
    Table,
    Id,
    AssignmentId,
    UserId,
    TimeCreated,
    TimeModified,
    Status,
    GroupId,
    AttemptNumber,
}

#[derive(DeriveIden)]
enum AssignUserFlags {
    #[sea_orm(iden = "assign_user_flags")]
    Table,
    Id,
    AssignmentId,
    UserId,
    Locked,
    Mailed,
    ExtensionDueDate,
    WorkflowState,
    AllocatedMarker,
}

#[derive(DeriveIden)]
enum AssignUserMapping {
    #[sea_orm(iden = "assign_user_mapping")]
    Table,
    Id,
    AssignmentId,
    UserId,
}

#[derive(DeriveIden)]
enum AssignsubmissionOnlinetext {
    #[sea_orm(iden = "assignsubmission_onlinetext")]
    Table,
    Id,
    AssignmentId,
    SubmissionId,
    OnlineText,
    OnlineFormat,
}

#[derive(DeriveIden)]
enum Files {
    #[sea_orm(iden = "files")]
    Table,
    Id,
    ContextId,
    Component,
    FileArea,
    ItemId,
    FilePath,
    FileName,
    TimeModified,
}
