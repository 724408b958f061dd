use crate::components::{
    common::{Button, ButtonVariant},
    modal::Modal,
};
use leptos::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(into)] confirm_label: String,
    #[prop(optional, into)] pending_label: Option<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let pending = Signal::derive(move || pending.get());
    let pending_label = pending_label.unwrap_or_else(|| confirm_label.clone());
    let button_label = Signal::derive(move || {
        if pending.get() {
            pending_label.clone()
        } else {
            confirm_label.clone()
        }
    });
    let variant = if destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };
    let children = store_value(children);

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel dismiss_disabled=pending>
            {children.with_value(|children| children())}
            <div class="flex justify-end gap-2">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=pending
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </Button>
                <Button
                    variant=variant
                    disabled=pending
                    on:click=move |_| {
                        if !pending.get_untracked() {
                            on_confirm.call(());
                        }
                    }
                >
                    {move || button_label.get()}
                </Button>
            </div>
        </Modal>
    }
}
