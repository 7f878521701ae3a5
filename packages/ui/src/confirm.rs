use dioxus::prelude::*;

/// Modal confirmation for destructive actions. Clicking the backdrop
/// cancels.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "overlay", onclick: move |_| on_cancel.call(()),
            div {
                class: "dialog",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                h3 { "{title}" }
                p { class: "muted", "{message}" }
                div { class: "dialog-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Zrušit"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
