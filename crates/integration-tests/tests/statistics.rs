//! Statistics over the SQLite store

mod common;

use common::{millis, setup};
use jobtrack_core::application::ListJobsRequest;
use jobtrack_core::domain::StatusSummary;

#[tokio::test]
async fn test_status_summary_sums_to_owner_total() {
    let fx = setup().await;
    let mut jobs = Vec::new();
    for i in 0..7 {
        jobs.push(fx.create_at("alice", &format!("Role {}", i), millis(2024, 4, 1) + i).await);
    }
    fx.create_at("bob", "Role", millis(2024, 4, 1)).await;

    fx.set_status("alice", &jobs[0], "interview").await;
    fx.set_status("alice", &jobs[1], "interview").await;
    fx.set_status("alice", &jobs[2], "declined").await;

    let stats = fx.service.stats("alice").await.unwrap();
    assert_eq!(
        stats.default_stats,
        StatusSummary {
            pending: 4,
            interview: 2,
            declined: 1
        }
    );

    let listed = fx.service.list(&ListJobsRequest::for_owner("alice")).await.unwrap();
    assert_eq!(stats.default_stats.total(), listed.total_jobs);
}

#[tokio::test]
async fn test_eight_months_report_latest_six_oldest_first() {
    let fx = setup().await;
    let months = [
        (2023, 6),
        (2023, 8),
        (2023, 9),
        (2023, 11),
        (2024, 1),
        (2024, 2),
        (2024, 3),
        (2024, 5),
    ];
    // Inserted out of chronological order
    for (i, (year, month)) in months.iter().enumerate().rev() {
        for day in 0..=i as u32 {
            fx.create_at("alice", "Role", millis(*year, *month, 1 + day)).await;
        }
    }

    let stats = fx.service.stats("alice").await.unwrap();
    let dates: Vec<&str> = stats
        .monthly_applications
        .iter()
        .map(|m| m.date.as_str())
        .collect();
    assert_eq!(
        dates,
        vec!["Sep 2023", "Nov 2023", "Jan 2024", "Feb 2024", "Mar 2024", "May 2024"]
    );

    let counts: Vec<i64> = stats.monthly_applications.iter().map(|m| m.count).collect();
    assert_eq!(counts, vec![3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn test_months_are_bucketed_in_utc() {
    let fx = setup().await;
    // Last millisecond of March, first of April
    let april = millis(2024, 4, 1) - 12 * 3_600_000;
    fx.create_at("alice", "Late", april - 1).await;
    fx.create_at("alice", "Early", april).await;

    let stats = fx.service.stats("alice").await.unwrap();
    let series: Vec<(String, i64)> = stats
        .monthly_applications
        .into_iter()
        .map(|m| (m.date, m.count))
        .collect();
    assert_eq!(
        series,
        vec![("Mar 2024".to_string(), 1), ("Apr 2024".to_string(), 1)]
    );
}

#[tokio::test]
async fn test_update_does_not_move_month_bucket() {
    let fx = setup().await;
    let job = fx.create_at("alice", "Role", millis(2024, 1, 15)).await;

    fx.clock.set(millis(2024, 6, 1));
    fx.set_status("alice", &job, "declined").await;

    let stats = fx.service.stats("alice").await.unwrap();
    assert_eq!(stats.monthly_applications.len(), 1);
    assert_eq!(stats.monthly_applications[0].date, "Jan 2024");
    assert_eq!(stats.default_stats.declined, 1);
}

#[tokio::test]
async fn test_owner_without_records() {
    let fx = setup().await;
    fx.create_at("bob", "Role", millis(2024, 1, 1)).await;

    let stats = fx.service.stats("alice").await.unwrap();
    assert_eq!(stats.default_stats, StatusSummary::default());
    assert!(stats.monthly_applications.is_empty());

    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "defaultStats": {"pending": 0, "interview": 0, "declined": 0},
            "monthlyApplications": []
        })
    );
}
