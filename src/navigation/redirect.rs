use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 跳转前的固定延迟（毫秒）
pub const REDIRECT_DELAY_MS: u64 = 100;

/// 浏览器历史的写入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectMode {
    Push,
    Replace,
}

/// 下发给客户端的跳转指令
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectPlan {
    pub target: String,
    pub mode: RedirectMode,
    pub delay_ms: u64,
}

impl RedirectPlan {
    pub fn new(target: impl Into<String>, replace: bool) -> Self {
        Self {
            target: target.into(),
            mode: if replace {
                RedirectMode::Replace
            } else {
                RedirectMode::Push
            },
            delay_ms: REDIRECT_DELAY_MS,
        }
    }
}

#[derive(Debug)]
pub struct NavigateError(pub String);

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "导航失败: {}", self.0)
    }
}

impl std::error::Error for NavigateError {}

/// 导航能力抽象，由执行端注入
#[async_trait]
pub trait Navigator: Send + Sync {
    /// 常规跳转，按 mode 写入历史
    async fn navigate(&self, url: &str, mode: RedirectMode) -> Result<(), NavigateError>;

    /// 赋值式直接跳转，作为降级手段
    async fn assign(&self, url: &str) -> Result<(), NavigateError>;
}

/// 延迟后执行跳转
/// 首次调用失败时用 assign 降级重试一次，仍失败则记录后放弃
pub async fn execute(navigator: &dyn Navigator, plan: &RedirectPlan) {
    tokio::time::sleep(Duration::from_millis(plan.delay_ms)).await;

    if let Err(e) = navigator.navigate(&plan.target, plan.mode).await {
        tracing::warn!("navigation to {} failed, falling back: {}", plan.target, e);
        if let Err(e) = navigator.assign(&plan.target).await {
            tracing::warn!("assign fallback to {} failed: {}", plan.target, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        fail_navigate: bool,
        fail_assign: bool,
        navigate_calls: AtomicUsize,
        assign_calls: AtomicUsize,
    }

    #[async_trait]
    impl Navigator for RecordingNavigator {
        async fn navigate(&self, _url: &str, _mode: RedirectMode) -> Result<(), NavigateError> {
            self.navigate_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_navigate {
                Err(NavigateError("recusado".into()))
            } else {
                Ok(())
            }
        }

        async fn assign(&self, _url: &str) -> Result<(), NavigateError> {
            self.assign_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_assign {
                Err(NavigateError("recusado".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn plan_maps_replace_flag_to_mode() {
        assert_eq!(RedirectPlan::new("/login", true).mode, RedirectMode::Replace);
        assert_eq!(RedirectPlan::new("/login", false).mode, RedirectMode::Push);
        assert_eq!(RedirectPlan::new("/login", true).delay_ms, REDIRECT_DELAY_MS);
    }

    #[tokio::test]
    async fn execute_waits_for_the_configured_delay() {
        let navigator = RecordingNavigator::default();
        let plan = RedirectPlan::new("/dashboard", false);

        let started = Instant::now();
        execute(&navigator, &plan).await;

        assert!(started.elapsed() >= Duration::from_millis(REDIRECT_DELAY_MS));
        assert_eq!(navigator.navigate_calls.load(Ordering::SeqCst), 1);
        assert_eq!(navigator.assign_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn execute_falls_back_to_assign_once() {
        let navigator = RecordingNavigator {
            fail_navigate: true,
            ..Default::default()
        };

        execute(&navigator, &RedirectPlan::new("/login", true)).await;

        assert_eq!(navigator.navigate_calls.load(Ordering::SeqCst), 1);
        assert_eq!(navigator.assign_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn execute_swallows_fallback_failure() {
        let navigator = RecordingNavigator {
            fail_navigate: true,
            fail_assign: true,
            ..Default::default()
        };

        // 双重失败也不会panic，只是放弃
        execute(&navigator, &RedirectPlan::new("/login", true)).await;

        assert_eq!(navigator.assign_calls.load(Ordering::SeqCst), 1);
    }
}
