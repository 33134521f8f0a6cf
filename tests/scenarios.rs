use anyhow::Result;
use chrono::Duration;
use directory_tests::{day, fresh_directory, seed_employee, seed_role};
use entity::{notification, task};
use sea_orm::ActiveValue::Set;

#[tokio::test]
async fn completed_task_is_listed_for_its_employee() -> Result<()> {
    let directory = fresh_directory().await?;
    let admin = seed_role(&directory, "Administrator").await?;
    let john = seed_employee(&directory, admin.id, "John", "Doe").await?;
    let today = day(2026, 10, 18);

    let assignment = directory
        .create(task::ActiveModel {
            name: Set("Complete Module 1".to_string()),
            description: Set("Work on the first module of Project A".to_string()),
            due_date: Set(today + Duration::days(7)),
            is_completed: Set(false),
            employee_id: Set(john.id),
            ..Default::default()
        })
        .await?;
    let completed = directory.complete_task(assignment.id).await?;
    assert!(completed.is_completed);

    let tasks = directory.children::<task::ActiveModel>(john.id).await?;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "Complete Module 1");
    assert!(tasks[0].is_completed);
    assert_eq!(tasks[0].due_date, day(2026, 10, 25));
    Ok(())
}

#[tokio::test]
async fn read_notification_is_listed_as_read() -> Result<()> {
    let directory = fresh_directory().await?;
    let admin = seed_role(&directory, "Administrator").await?;
    let john = seed_employee(&directory, admin.id, "John", "Doe").await?;

    let notice = directory
        .create(notification::ActiveModel {
            message: Set("Your leave request has been approved".to_string()),
            date: Set(day(2026, 10, 18)),
            is_read: Set(false),
            employee_id: Set(john.id),
            ..Default::default()
        })
        .await?;
    directory.mark_notification_read(notice.id).await?;

    let notifications = directory
        .children::<notification::ActiveModel>(john.id)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].is_read);
    assert_eq!(
        notifications[0].message,
        "Your leave request has been approved"
    );
    Ok(())
}

#[tokio::test]
async fn employees_join_with_their_role() -> Result<()> {
    let directory = fresh_directory().await?;
    let admin = seed_role(&directory, "Administrator").await?;
    seed_employee(&directory, admin.id, "John", "Doe").await?;

    let rows = directory.employees_with_roles().await?;
    let printed: Vec<String> = rows.iter().map(ToString::to_string).collect();
    assert_eq!(printed, ["John Doe - Administrator"]);
    assert_eq!(rows[0].role, admin);

    directory.close().await?;
    Ok(())
}
