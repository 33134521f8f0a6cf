use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Role {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    FirstName,
    LastName,
    Position,
    DateOfJoining,
    RoleId,
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    Date,
    IsPresent,
    EmployeeId,
}

#[derive(DeriveIden)]
enum Payroll {
    Table,
    Id,
    SalaryCents,
    PaymentDate,
    EmployeeId,
}

#[derive(DeriveIden)]
enum PerformanceReview {
    Table,
    Id,
    ReviewDate,
    Comments,
    EmployeeId,
}

#[derive(DeriveIden)]
enum Task {
    Table,
    Id,
    Name,
    Description,
    DueDate,
    IsCompleted,
    EmployeeId,
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
    Message,
    Date,
    IsRead,
    EmployeeId,
}

#[derive(DeriveIden)]
enum Report {
    Table,
    Id,
    Name,
    Content,
    GeneratedOn,
    EmployeeId,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(&mut id_column(Role::Id))
                    .col(ColumnDef::new(Role::Name).string_len(128).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(&mut id_column(Employee::Id))
                    .col(ColumnDef::new(Employee::FirstName).string_len(128).not_null())
                    .col(ColumnDef::new(Employee::LastName).string_len(128).not_null())
                    .col(ColumnDef::new(Employee::Position).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Employee::DateOfJoining)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employee::RoleId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_role")
                            .from(Employee::Table, Employee::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index("idx_employee_role", Employee::Table, Employee::RoleId))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(&mut id_column(Attendance::Id))
                    .col(ColumnDef::new(Attendance::Date).date().not_null())
                    .col(ColumnDef::new(Attendance::IsPresent).boolean().not_null())
                    .col(ColumnDef::new(Attendance::EmployeeId).integer().not_null())
                    .foreign_key(&mut employee_fk(
                        "fk_attendance_employee",
                        Attendance::Table,
                        Attendance::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index(
                "idx_attendance_employee",
                Attendance::Table,
                Attendance::EmployeeId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payroll::Table)
                    .if_not_exists()
                    .col(&mut id_column(Payroll::Id))
                    .col(ColumnDef::new(Payroll::SalaryCents).big_integer().not_null())
                    .col(ColumnDef::new(Payroll::PaymentDate).date().not_null())
                    .col(ColumnDef::new(Payroll::EmployeeId).integer().not_null())
                    .foreign_key(&mut employee_fk(
                        "fk_payroll_employee",
                        Payroll::Table,
                        Payroll::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index(
                "idx_payroll_employee",
                Payroll::Table,
                Payroll::EmployeeId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PerformanceReview::Table)
                    .if_not_exists()
                    .col(&mut id_column(PerformanceReview::Id))
                    .col(ColumnDef::new(PerformanceReview::ReviewDate).date().not_null())
                    .col(ColumnDef::new(PerformanceReview::Comments).text().not_null())
                    .col(
                        ColumnDef::new(PerformanceReview::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(&mut employee_fk(
                        "fk_performance_review_employee",
                        PerformanceReview::Table,
                        PerformanceReview::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index(
                "idx_performance_review_employee",
                PerformanceReview::Table,
                PerformanceReview::EmployeeId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(&mut id_column(Task::Id))
                    .col(ColumnDef::new(Task::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Task::Description).text().not_null())
                    .col(ColumnDef::new(Task::DueDate).date().not_null())
                    .col(
                        ColumnDef::new(Task::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Task::EmployeeId).integer().not_null())
                    .foreign_key(&mut employee_fk(
                        "fk_task_employee",
                        Task::Table,
                        Task::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index("idx_task_employee", Task::Table, Task::EmployeeId))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(&mut id_column(Notification::Id))
                    .col(ColumnDef::new(Notification::Message).text().not_null())
                    .col(ColumnDef::new(Notification::Date).date().not_null())
                    .col(
                        ColumnDef::new(Notification::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Notification::EmployeeId).integer().not_null())
                    .foreign_key(&mut employee_fk(
                        "fk_notification_employee",
                        Notification::Table,
                        Notification::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index(
                "idx_notification_employee",
                Notification::Table,
                Notification::EmployeeId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Report::Table)
                    .if_not_exists()
                    .col(&mut id_column(Report::Id))
                    .col(ColumnDef::new(Report::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Report::Content).text().not_null())
                    .col(ColumnDef::new(Report::GeneratedOn).date().not_null())
                    .col(ColumnDef::new(Report::EmployeeId).integer().not_null())
                    .foreign_key(&mut employee_fk(
                        "fk_report_employee",
                        Report::Table,
                        Report::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(index(
                "idx_report_employee",
                Report::Table,
                Report::EmployeeId,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first; every FK is RESTRICT.
        manager
            .drop_table(Table::drop().table(Report::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notification::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Task::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(PerformanceReview::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Payroll::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employee::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Role::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

/// Integer surrogate key. `AUTOINCREMENT` on SQLite and a sequence on
/// Postgres, so deleted ids are never handed out again.
fn id_column<T: Iden + 'static>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn employee_fk<T: Iden + 'static>(name: &str, table: T, column: T) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Employee::Table, Employee::Id)
        .on_delete(ForeignKeyAction::Restrict)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

fn index<T: Iden + 'static>(name: &str, table: T, column: T) -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(column)
        .to_owned()
}
