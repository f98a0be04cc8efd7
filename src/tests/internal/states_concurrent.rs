//! 并发测试
//!
//! 测试项：
//! - 多线程并发 create_task 不丢任务
//! - 并发的更新 / 移除互不干扰
//! - wait_until 在快速更新场景下不会错过满足条件的状态

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::states::unlock_reactive::UnlockReactiveProperty;
use crate::tracker::{TaskStatus, TaskTracker};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_create_keeps_every_task() {
    let tracker = TaskTracker::default();

    let mut handles = Vec::new();
    for i in 0..16 {
        let t = tracker.clone();
        handles.push(tokio::spawn(async move {
            (0..50)
                .map(|j| t.create_task(&format!("{i}-{j}")))
                .collect::<Vec<_>>()
        }));
    }

    let mut ids = Vec::new();
    for h in handles {
        ids.extend(h.await.unwrap());
    }

    let tasks = tracker.list_tasks();
    assert_eq!(tasks.len(), 16 * 50);
    assert!(ids.iter().all(|id| tracker.get_task(*id).is_some()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_and_removals_are_independent() {
    let tracker = TaskTracker::default();
    let ids: Vec<_> = (0..200).map(|i| tracker.create_task(&i.to_string())).collect();

    let mut handles = Vec::new();
    for (i, id) in ids.iter().copied().enumerate() {
        let t = tracker.clone();
        handles.push(tokio::spawn(async move {
            match i % 3 {
                0 => t.update_status(id, TaskStatus::Failed, "boom"),
                1 => t.remove_task(id),
                _ => {}
            }
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let tasks = tracker.list_tasks();
    let failed = tasks.iter().filter(|t| t.status == TaskStatus::Failed).count();
    let pending = tasks.iter().filter(|t| t.status == TaskStatus::Pending).count();
    assert_eq!(failed, 67);
    assert_eq!(pending, 66);
    assert_eq!(tasks.len(), 133);

    // 剩余任务仍保持新任务在前的相对顺序
    let order: Vec<usize> = tasks.iter().map(|t| t.label.parse().unwrap()).collect();
    assert!(order.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn wait_until_does_not_miss_rapid_updates() {
    let prop = Arc::new(UnlockReactiveProperty::new(0i32));
    let p = Arc::clone(&prop);

    tokio::spawn(async move {
        for _ in 1..=100 {
            p.update_field(|v| {
                *v += 1;
                true
            });
        }
    });

    // watch 只保留最新值，但终值 100 一定会被观察到
    let result = timeout(Duration::from_secs(5), prop.wait_until(|v| *v == 100)).await;
    assert!(result.is_ok(), "wait_until 应该能观察到最终值");
    assert_eq!(prop.get_current(), Some(100));
}
