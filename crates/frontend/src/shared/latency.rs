//! Имитация сетевых задержек
//!
//! Отложенное обновление выполняется, только если компонент ещё смонтирован.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Флаг "компонент жив", сбрасывается в `on_cleanup` владельца
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    /// Вызывать в теле компонента
    pub fn new() -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&alive);
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        Self(alive)
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Выполнить `then` через `delay_ms` мс, если компонент не уничтожен
pub fn after_delay(guard: &MountGuard, delay_ms: u32, then: impl FnOnce() + 'static) {
    let guard = guard.clone();
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if guard.is_mounted() {
            then();
        } else {
            log::debug!("component disposed, delayed update dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_flips_on_cleanup() {
        let owner = Owner::new();
        let guard = owner.with(MountGuard::new);
        assert!(guard.is_mounted());

        owner.cleanup();
        assert!(!guard.is_mounted());
    }
}
