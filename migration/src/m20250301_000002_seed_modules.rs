use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// 平台内已知的活动模块类型，作业模块查询按 name = 'assign' 关联
const DEFAULT_MODULES: [&str; 4] = ["assign", "forum", "quiz", "resource"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in DEFAULT_MODULES {
            let insert = Query::insert()
                .into_table(Modules::Table)
                .columns([Modules::Name])
                .values_panic([name.into()])
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Modules::Table)
            .and_where(Expr::col(Modules::Name).is_in(DEFAULT_MODULES))
            .to_owned();

        manager.exec_stmt(delete).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Modules {
    #[sea_orm(iden = "modules")]
    Table,
    Name,
}
