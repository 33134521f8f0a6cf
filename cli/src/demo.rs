//! The scripted sequence: one record of every kind for a single employee,
//! two flag flips, then a printed summary.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use entity::{attendance, employee, notification, payroll, performance_review, report, role, task};
use platform_db::Directory;
use sea_orm::ActiveValue::Set;
use tracing::info;

/// Identifiers of the rows the sequence wrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoRecords {
    pub role_id: i32,
    pub employee_id: i32,
    pub task_id: i32,
    pub notification_id: i32,
    pub report_id: i32,
}

pub async fn run<W: Write>(
    directory: &Directory,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<DemoRecords> {
    let today = now.date_naive();

    let admin = directory
        .create(role::ActiveModel {
            name: Set("Administrator".to_string()),
            ..Default::default()
        })
        .await
        .context("creating role")?;

    let john = directory
        .create(employee::ActiveModel {
            first_name: Set("John".to_string()),
            last_name: Set("Doe".to_string()),
            position: Set("Software Engineer".to_string()),
            date_of_joining: Set(now),
            role_id: Set(admin.id),
            ..Default::default()
        })
        .await
        .context("creating employee")?;

    directory
        .create(attendance::ActiveModel {
            date: Set(today),
            is_present: Set(true),
            employee_id: Set(john.id),
            ..Default::default()
        })
        .await
        .context("recording attendance")?;

    directory
        .create(payroll::ActiveModel {
            salary_cents: Set(500_000),
            payment_date: Set(today),
            employee_id: Set(john.id),
            ..Default::default()
        })
        .await
        .context("recording payroll")?;

    directory
        .create(performance_review::ActiveModel {
            review_date: Set(today),
            comments: Set("Excellent performance".to_string()),
            employee_id: Set(john.id),
            ..Default::default()
        })
        .await
        .context("recording performance review")?;

    let assignment = directory
        .create(task::ActiveModel {
            name: Set("Complete Module 1".to_string()),
            description: Set("Work on the first module of Project A".to_string()),
            due_date: Set(today + Duration::days(7)),
            is_completed: Set(false),
            employee_id: Set(john.id),
            ..Default::default()
        })
        .await
        .context("assigning task")?;

    let notice = directory
        .create(notification::ActiveModel {
            message: Set("Your leave request has been approved".to_string()),
            date: Set(today),
            is_read: Set(false),
            employee_id: Set(john.id),
            ..Default::default()
        })
        .await
        .context("sending notification")?;

    let monthly = directory
        .create(report::ActiveModel {
            name: Set("Monthly Attendance Report".to_string()),
            content: Set("Attendance report content".to_string()),
            generated_on: Set(today),
            employee_id: Set(john.id),
            ..Default::default()
        })
        .await
        .context("generating report")?;

    directory
        .complete_task(assignment.id)
        .await
        .context("completing task")?;
    directory
        .mark_notification_read(notice.id)
        .await
        .context("marking notification read")?;
    info!(employee_id = john.id, "demo records written");

    for row in directory.employees_with_roles().await? {
        writeln!(out, "{row}")?;
    }
    for t in directory.children::<task::ActiveModel>(john.id).await? {
        writeln!(out, "Task: {}, Completed: {}", t.name, t.is_completed)?;
    }
    for n in directory
        .children::<notification::ActiveModel>(john.id)
        .await?
    {
        writeln!(out, "Notification: {}, Read: {}", n.message, n.is_read)?;
    }
    for r in directory.children::<report::ActiveModel>(john.id).await? {
        writeln!(out, "Report: {}, Generated On: {}", r.name, r.generated_on)?;
    }

    Ok(DemoRecords {
        role_id: admin.id,
        employee_id: john.id,
        task_id: assignment.id,
        notification_id: notice.id,
        report_id: monthly.id,
    })
}
