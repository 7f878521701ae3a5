//! Journal view: list, create, edit in place, privacy toggle, delete.

use api::{ApiClient, JournalEntry, JournalFilter};
use dioxus::prelude::*;
use ui::icons::{FaCalendar, FaEye, FaEyeSlash, FaHeart, FaPencil, FaPlus, FaTrash};
use ui::{
    format_long_date, mood_class, use_toasts, ConfirmDialog, Icon, JournalDraft, JournalEditor,
    MoodIcon, Toasts,
};

const PAGE_LIMIT: u32 = 50;

async fn load_entries(client: &ApiClient, mut entries: Signal<Vec<JournalEntry>>, mut toasts: Toasts) {
    let filter = JournalFilter {
        limit: Some(PAGE_LIMIT),
        ..Default::default()
    };
    match client.journal_entries(&filter).await {
        Ok(list) => entries.set(list),
        Err(err) => {
            tracing::warn!("journal load failed: {err}");
            toasts.error("Chyba při načítání", "Nepodařilo se načíst záznamy z deníku.");
        }
    }
}

#[component]
pub fn Journal() -> Element {
    let client = use_context::<ApiClient>();
    let toasts = use_toasts();

    let entries = use_signal(Vec::<JournalEntry>::new);
    let mut loading = use_signal(|| true);
    let mut adding = use_signal(|| false);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut confirm_delete = use_signal(|| Option::<i64>::None);

    let _initial = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                load_entries(&client, entries, toasts).await;
                loading.set(false);
            }
        }
    });

    let handle_create = {
        let client = client.clone();
        move |draft: JournalDraft| {
            let Some(new_entry) = draft.build() else {
                let mut toasts = toasts;
                toasts.error("Vyplňte všechna pole", "Název a obsah jsou povinné.");
                return;
            };
            let client = client.clone();
            spawn(async move {
                let mut toasts = toasts;
                match client.create_journal_entry(&new_entry).await {
                    Ok(_) => {
                        adding.set(false);
                        load_entries(&client, entries, toasts).await;
                        toasts.success("Záznam přidán", "Váš záznam byl úspěšně uložen do deníku.");
                    }
                    Err(err) => {
                        tracing::warn!("journal create failed: {err}");
                        toasts.error("Chyba při ukládání", "Nepodařilo se uložit záznam.");
                    }
                }
            });
        }
    };

    if loading() {
        return rsx! {
            div { class: "loading-state",
                div { class: "spinner" }
                p { class: "muted", "Načítám deník..." }
            }
        };
    }

    rsx! {
        div { class: "page journal-page",
            div { class: "page-head",
                h2 { "Deník drobných radostí" }
                p { class: "muted",
                    "Zaznamenávejte své každodenní radosti, objevy a momenty vděčnosti."
                }
            }

            if adding() {
                JournalEditor {
                    icon: rsx! {
                        Icon { icon: FaPlus, width: 20, height: 20 }
                    },
                    heading: "Nový záznam",
                    submit_label: "Uložit záznam",
                    initial: JournalDraft::default(),
                    on_save: handle_create,
                    on_cancel: move |_| adding.set(false),
                }
            } else {
                div { class: "card",
                    button {
                        class: "btn btn-outline btn-tall btn-block",
                        onclick: move |_| adding.set(true),
                        Icon { icon: FaPlus, width: 18, height: 18 }
                        span { "Přidat nový záznam" }
                    }
                }
            }

            div { class: "entry-list",
                if entries().is_empty() {
                    div { class: "card empty-state",
                        Icon { icon: FaHeart, width: 64, height: 64 }
                        h3 { "Zatím žádné záznamy" }
                        p { class: "muted", "Začněte zapisovat své drobné radosti a objevy." }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| adding.set(true),
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            span { "Přidat první záznam" }
                        }
                    }
                } else {
                    for entry in entries() {
                        if editing() == Some(entry.id) {
                            JournalEditor {
                                key: "{entry.id}",
                                icon: rsx! {
                                    Icon { icon: FaPencil, width: 20, height: 20 }
                                },
                                heading: "Upravit záznam",
                                submit_label: "Uložit změny",
                                initial: JournalDraft::from_entry(&entry),
                                on_save: {
                                    let client = client.clone();
                                    let id = entry.id;
                                    move |draft: JournalDraft| {
                                        let Some(update) = draft.update_payload() else {
                                            let mut toasts = toasts;
                                            toasts.error(
                                                "Vyplňte všechna pole",
                                                "Název a obsah jsou povinné.",
                                            );
                                            return;
                                        };
                                        let client = client.clone();
                                        spawn(async move {
                                            let mut toasts = toasts;
                                            match client.update_journal_entry(id, &update).await {
                                                Ok(_) => {
                                                    editing.set(None);
                                                    load_entries(&client, entries, toasts).await;
                                                    toasts.success(
                                                        "Záznam aktualizován",
                                                        "Změny byly úspěšně uloženy.",
                                                    );
                                                }
                                                Err(err) => {
                                                    tracing::warn!("journal update failed: {err}");
                                                    toasts.error(
                                                        "Chyba při aktualizaci",
                                                        "Nepodařilo se uložit změny.",
                                                    );
                                                }
                                            }
                                        });
                                    }
                                },
                                on_cancel: move |_| editing.set(None),
                            }
                        } else {
                            EntryCard {
                                key: "{entry.id}",
                                entry: entry.clone(),
                                on_edit: move |id| editing.set(Some(id)),
                                on_delete: move |id| confirm_delete.set(Some(id)),
                                on_toggle_privacy: {
                                    let client = client.clone();
                                    move |(id, was_private): (i64, bool)| {
                                        let client = client.clone();
                                        spawn(async move {
                                            let mut toasts = toasts;
                                            match client.set_journal_privacy(id, !was_private).await
                                            {
                                                Ok(()) => {
                                                    load_entries(&client, entries, toasts).await;
                                                    let description = if was_private {
                                                        "Záznam je nyní viditelný."
                                                    } else {
                                                        "Záznam je nyní skrytý."
                                                    };
                                                    toasts.success("Soukromí změněno", description);
                                                }
                                                Err(err) => {
                                                    tracing::warn!("privacy toggle failed: {err}");
                                                    toasts.error(
                                                        "Chyba při změně soukromí",
                                                        "Nepodařilo se změnit nastavení soukromí.",
                                                    );
                                                }
                                            }
                                        });
                                    }
                                },
                            }
                        }
                    }
                }
            }

            if let Some(id) = confirm_delete() {
                ConfirmDialog {
                    title: "Smazat záznam?",
                    message: "Opravdu chcete smazat tento záznam?",
                    confirm_label: "Smazat",
                    on_confirm: {
                        let client = client.clone();
                        move |_| {
                            let client = client.clone();
                            spawn(async move {
                                let mut toasts = toasts;
                                confirm_delete.set(None);
                                match client.delete_journal_entry(id).await {
                                    Ok(()) => {
                                        load_entries(&client, entries, toasts).await;
                                        toasts.success(
                                            "Záznam smazán",
                                            "Záznam byl úspěšně odstraněn.",
                                        );
                                    }
                                    Err(err) => {
                                        tracing::warn!("journal delete failed: {err}");
                                        toasts.error(
                                            "Chyba při mazání",
                                            "Nepodařilo se smazat záznam.",
                                        );
                                    }
                                }
                            });
                        }
                    },
                    on_cancel: move |_| confirm_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn EntryCard(
    entry: JournalEntry,
    on_edit: EventHandler<i64>,
    on_delete: EventHandler<i64>,
    on_toggle_privacy: EventHandler<(i64, bool)>,
) -> Element {
    let id = entry.id;
    let was_private = entry.is_private;
    let chip = mood_class(entry.mood);
    let date_label = format_long_date(entry.entry_date);
    let card_class = if entry.is_private {
        "card entry-card entry-private"
    } else {
        "card entry-card"
    };

    rsx! {
        div { class: "{card_class}",
            div { class: "entry-head",
                div { class: "entry-title",
                    span { class: "mood-circle {chip}",
                        MoodIcon { mood: entry.mood }
                    }
                    div {
                        h3 { "{entry.title}" }
                        div { class: "entry-date",
                            Icon { icon: FaCalendar, width: 14, height: 14 }
                            span { "{date_label}" }
                        }
                    }
                }
                div { class: "entry-actions",
                    button {
                        class: "btn-icon",
                        onclick: move |_| on_toggle_privacy.call((id, was_private)),
                        if was_private {
                            Icon { icon: FaEyeSlash, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaEye, width: 16, height: 16 }
                        }
                    }
                    button {
                        class: "btn-icon",
                        onclick: move |_| on_edit.call(id),
                        Icon { icon: FaPencil, width: 16, height: 16 }
                    }
                    button {
                        class: "btn-icon btn-icon-danger",
                        onclick: move |_| on_delete.call(id),
                        Icon { icon: FaTrash, width: 16, height: 16 }
                    }
                }
            }

            p { class: "entry-content", "{entry.content}" }

            if !entry.tags.is_empty() {
                div { class: "tag-row",
                    for tag in entry.tags.clone() {
                        span { key: "{tag}", class: "badge", "{tag}" }
                    }
                }
            }

            if was_private {
                div { class: "private-note",
                    Icon { icon: FaEyeSlash, width: 14, height: 14 }
                    span { "Tento záznam je skrytý a vidíte ho pouze vy." }
                }
            }
        }
    }
}
