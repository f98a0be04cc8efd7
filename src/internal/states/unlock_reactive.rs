//! # UnlockReactiveProperty
//!
//! 轻量级响应式属性容器，读写都不需要 `.await`，
//! 内部直接复用 [`super::reactive_core::ReactiveProperty`]。
//!
//! ## 使用示例
//! ```rust,no_run
//! use report_fetch::states::unlock_reactive::UnlockReactiveProperty;
//!
//! let prop = UnlockReactiveProperty::new(0);
//! prop.update(1);
//! prop.update_field(|v| { *v += 1; true });
//! assert_eq!(prop.get_current(), Some(2));
//! ```

pub use super::reactive_core::{PropertyWatcher, ReactivePropertyError as UnlockReactivePropertyError};

/// 轻量级响应式属性容器。
///
/// 纯通知机制，读写不阻塞，适合 UI 层订阅的状态（如下载任务列表）。
pub type UnlockReactiveProperty<T> = super::reactive_core::ReactiveProperty<T>;
