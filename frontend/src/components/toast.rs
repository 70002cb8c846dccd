use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Timeout;
use crate::config::TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Warning => "toast-warning",
            ToastKind::Info => "toast-info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "!",
            ToastKind::Info => "i",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
    /// 0 keeps the toast until it is closed by hand.
    pub duration_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: String, kind: ToastKind, duration_ms: u32) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message, duration_ms });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Show {
        message: String,
        kind: ToastKind,
        duration_ms: u32,
    },
    Hide(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Show { message, kind, duration_ms } => {
                queue.push(message, kind, duration_ms);
            }
            ToastAction::Hide(id) => queue.dismiss(id),
        }
        Rc::new(queue)
    }
}

/// Handle handed out through context: `toasts.show(msg, ToastKind::Success)`.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    queue: UseReducerDispatcher<ToastQueue>,
}

impl ToastContext {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.show_for(message, kind, TOAST_DURATION_MS);
    }

    pub fn show_for(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) {
        self.queue.dispatch(ToastAction::Show {
            message: message.into(),
            kind,
            duration_ms,
        });
    }
}

#[hook]
pub fn use_toasts() -> Option<ToastContext> {
    use_context::<ToastContext>()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let context = ToastContext {
        queue: queue.dispatcher(),
    };

    let on_close = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Hide(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            { for props.children.iter() }
            <div class="toast-container">
                <style>
                    {r#"
                    .toast-container {
                        position: fixed;
                        top: 1rem;
                        right: 1rem;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 28rem;
                        pointer-events: none;
                    }
                    .toast {
                        pointer-events: auto;
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        min-width: 320px;
                        padding: 1rem;
                        border-radius: 12px;
                        border: 2px solid;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                        position: relative;
                        overflow: hidden;
                        animation: toastIn 0.3s ease-out;
                    }
                    @keyframes toastIn {
                        from { transform: translateX(100px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .toast-success { background: #f0fdf4; border-color: #bbf7d0; color: #14532d; }
                    .toast-error { background: #fef2f2; border-color: #fecaca; color: #7f1d1d; }
                    .toast-warning { background: #fff7ed; border-color: #fed7aa; color: #7c2d12; }
                    .toast-info { background: #eff6ff; border-color: #bfdbfe; color: #1e3a8a; }
                    .toast-message { flex: 1; font-size: 0.9rem; font-weight: 500; line-height: 1.5; }
                    .toast-close {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: inherit;
                        padding: 0.25rem;
                    }
                    "#}
                </style>
                { for queue.toasts().iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_close={on_close.clone()} />
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_close: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let Toast { id, kind, duration_ms, .. } = props.toast;

    // Auto-hide; dropping the Timeout on unmount cancels it.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = (duration_ms > 0)
                    .then(|| Timeout::new(duration_ms, move || on_close.emit(id)));
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(id))
    };

    html! {
        <div class={classes!("toast", kind.class())} role="status">
            <span class="toast-icon">{ kind.icon() }</span>
            <p class="toast-message">{ &props.toast.message }</p>
            <button class="toast-close" aria-label="Close notification" onclick={close}>{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[function_component(ToastConsumer)]
    fn toast_consumer() -> Html {
        let toasts = use_toasts();
        html! { <span>{ if toasts.is_some() { "ready" } else { "missing" } }</span> }
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one".to_string(), ToastKind::Info, 5000);
        let second = queue.push("two".to_string(), ToastKind::Error, 0);
        assert!(second > first);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one".to_string(), ToastKind::Success, 5000);
        let second = queue.push("two".to_string(), ToastKind::Warning, 5000);
        queue.dismiss(first);

        assert_eq!(queue.toasts().iter().map(|t| t.id).collect::<Vec<_>>(), vec![second]);

        // dismissed ids are never reused
        let third = queue.push("three".to_string(), ToastKind::Info, 5000);
        assert!(third > second);
    }

    #[test]
    fn reducer_applies_show_and_hide() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Show {
            message: "saved".to_string(),
            kind: ToastKind::Success,
            duration_ms: 5000,
        });
        let id = queue.toasts()[0].id;
        let queue = queue.reduce(ToastAction::Hide(id));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn toast_hook_is_usable_inside_components() {
        let tree = html! {
            <ToastProvider>
                <ToastConsumer />
            </ToastProvider>
        };
        assert!(matches!(tree, Html::VComp(_)));
    }
}
