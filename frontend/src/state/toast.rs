use leptos::*;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => {
                "bg-status-success-bg text-status-success-text border-status-success-border"
            }
            ToastKind::Error => "bg-status-error-bg text-status-error-text border-status-error-border",
            ToastKind::Info => "bg-status-info-bg text-status-info-text border-status-info-border",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastState {
    pub items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let message = message.into();
        match kind {
            ToastKind::Error => log::warn!("{}", message),
            _ => log::debug!("{}", message),
        }
        self.items.update(|items| items.push(Toast { id, kind, message }));
        self.schedule_dismiss(id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let state = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            state.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastState {
    let state = ToastState::new();
    provide_context(state);
    state
}

pub fn use_toasts() -> ToastState {
    use_context::<ToastState>().unwrap_or_else(provide_toasts)
}
