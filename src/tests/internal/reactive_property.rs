//! 响应式属性功能测试：基础读写、原地修改、watch 监听、条件等待。

use std::time::Duration;

use crate::states::unlock_reactive::UnlockReactiveProperty;

#[tokio::test]
async fn basic_update_and_read() {
    let prop = UnlockReactiveProperty::new(0u64);
    prop.update(42);
    assert_eq!(prop.get_current(), Some(42));

    let changed = prop.update_field(|v| {
        *v += 8;
        true
    });
    assert!(changed);
    assert_eq!(prop.get_current(), Some(50));
    assert_eq!(prop.map(|v| v * 2), Some(100));
}

#[tokio::test]
async fn clones_share_the_same_value() {
    let prop = UnlockReactiveProperty::new(vec![1]);
    let other = prop.clone();

    other.update_field(|v| {
        v.push(2);
        true
    });

    assert_eq!(prop.get_current(), Some(vec![1, 2]));
}

#[tokio::test]
async fn watch_receives_updates() {
    let prop = UnlockReactiveProperty::new(0i32);
    let mut watcher = prop.watch();

    prop.update(1);
    assert_eq!(watcher.changed().await.unwrap(), 1);

    prop.update(2);
    assert_eq!(watcher.changed().await.unwrap(), 2);
    assert_eq!(watcher.borrow(), Some(2));
}

#[tokio::test]
async fn unmodified_update_field_does_not_notify() {
    let prop = UnlockReactiveProperty::new(0i32);
    let mut watcher = prop.watch();

    assert!(!prop.update_field(|_| false));

    let result = tokio::time::timeout(Duration::from_millis(50), watcher.changed()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn wait_until_already_satisfied() {
    let prop = UnlockReactiveProperty::new(100i32);
    // 当前值已满足，应立即返回
    prop.wait_until(|v| *v == 100).await.unwrap();
}

#[tokio::test]
async fn wait_until_async_satisfied() {
    let prop = UnlockReactiveProperty::new(0i32);
    let p = prop.clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        p.update(1);
        tokio::time::sleep(Duration::from_millis(20)).await;
        p.update(42);
    });

    prop.wait_until(|v| *v == 42).await.unwrap();
    assert_eq!(prop.get_current(), Some(42));
}

#[tokio::test]
async fn wait_until_blocks_when_unsatisfied() {
    let prop = UnlockReactiveProperty::new(0i32);

    let result = tokio::time::timeout(
        Duration::from_millis(100),
        prop.wait_until(|v| *v == 9999),
    )
    .await;

    assert!(result.is_err(), "条件不满足时应一直挂起");
}
