use leptos::*;
use std::future::Future;
use std::time::Duration;

/// How long a notification stays fully visible.
pub const VISIBLE_FOR: Duration = Duration::from_millis(3500);
/// Length of the exit transition before the notification is removed.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Leaving,
}

impl NotificationPhase {
    /// Phase after `elapsed` since the notification appeared; `None` once it is gone.
    pub fn at(elapsed: Duration) -> Option<Self> {
        if elapsed < VISIBLE_FOR {
            Some(NotificationPhase::Visible)
        } else if elapsed < VISIBLE_FOR + EXIT_TRANSITION {
            Some(NotificationPhase::Leaving)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: NotificationPhase,
}

/// At most one notification is shown; a newer one replaces the current.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    current: RwSignal<Option<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(0),
        }
    }

    pub fn current(&self) -> Signal<Option<Notification>> {
        self.current.into()
    }

    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        let message = message.into();
        log::debug!("notification {id} ({kind:?}): {message}");
        self.current.set(Some(Notification {
            id,
            kind,
            message,
            phase: NotificationPhase::Visible,
        }));
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(NotificationKind::Error, message)
    }

    /// Starts the exit transition. Ignored if `id` is no longer the current one.
    pub fn begin_dismiss(&self, id: u64) {
        self.current.update(|current| {
            if let Some(notification) = current.as_mut().filter(|n| n.id == id) {
                notification.phase = NotificationPhase::Leaving;
            }
        });
    }

    pub fn remove(&self, id: u64) {
        if self
            .current
            .with_untracked(|current| current.as_ref().is_some_and(|n| n.id == id))
        {
            self.current.set(None);
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one notification through visible, leaving and removed.
pub async fn run_lifecycle<F, Fut>(center: NotificationCenter, id: u64, sleep: F)
where
    F: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    sleep(VISIBLE_FOR).await;
    center.begin_dismiss(id);
    sleep(EXIT_TRANSITION).await;
    center.remove(id);
}

pub fn provide_notifications() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    center
}

pub fn use_notifications() -> NotificationCenter {
    match use_context::<NotificationCenter>() {
        Some(center) => center,
        None => provide_notifications(),
    }
}
