//! Journal entry form plus the draft type behind it.
//!
//! The editor is deliberately dumb: it collects a [`JournalDraft`] and hands
//! it to the page on submit. Validation lives on the draft so the page can
//! decide what to do with an incomplete one (the journal view keeps the form
//! open and shows a toast).

use api::{JournalEntry, JournalEntryUpdate, Mood, NewJournalEntry};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFaceSmile, FaHeart, FaMugHot, FaStar, FaSun};
use dioxus_free_icons::Icon;

/// Czech display name for a mood.
pub fn mood_label(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "Šťastný",
        Mood::Excited => "Nadšený",
        Mood::Content => "Spokojený",
        Mood::Peaceful => "Klidný",
        Mood::Neutral => "Neutrální",
    }
}

/// CSS hook for mood-tinted elements, `mood-happy` and friends.
pub fn mood_class(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "mood-happy",
        Mood::Excited => "mood-excited",
        Mood::Content => "mood-content",
        Mood::Peaceful => "mood-peaceful",
        Mood::Neutral => "mood-neutral",
    }
}

#[component]
pub fn MoodIcon(mood: Mood, #[props(default = 20)] size: u32) -> Element {
    match mood {
        Mood::Happy => rsx! { Icon { icon: FaFaceSmile, width: size, height: size } },
        Mood::Excited => rsx! { Icon { icon: FaStar, width: size, height: size } },
        Mood::Content => rsx! { Icon { icon: FaMugHot, width: size, height: size } },
        Mood::Peaceful => rsx! { Icon { icon: FaSun, width: size, height: size } },
        Mood::Neutral => rsx! { Icon { icon: FaHeart, width: size, height: size } },
    }
}

/// Splits a comma-separated tag field, dropping padding and empty segments.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// What the form edits. Tags stay a raw string until submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    pub tags: String,
    pub mood: Mood,
}

impl JournalDraft {
    /// Pre-fills the form from an existing entry.
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            title: entry.title.clone(),
            content: entry.content.clone(),
            tags: entry.tags.join(", "),
            mood: entry.mood,
        }
    }

    fn trimmed(&self) -> Option<(String, String)> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return None;
        }
        Some((title.to_string(), content.to_string()))
    }

    /// Creation payload dated today, or `None` when title or content is
    /// missing.
    pub fn build(&self) -> Option<NewJournalEntry> {
        let (title, content) = self.trimmed()?;
        Some(NewJournalEntry {
            title,
            content,
            tags: parse_tags(&self.tags),
            mood: self.mood,
            entry_date: api::today(),
        })
    }

    /// Update payload for an existing entry. Privacy is left untouched, the
    /// eye toggle owns that.
    pub fn update_payload(&self) -> Option<JournalEntryUpdate> {
        let (title, content) = self.trimmed()?;
        Some(JournalEntryUpdate {
            title: Some(title),
            content: Some(content),
            tags: Some(parse_tags(&self.tags)),
            mood: Some(self.mood),
            is_private: None,
        })
    }
}

/// Entry form used both for new entries and for editing in place.
#[component]
pub fn JournalEditor(
    icon: Element,
    heading: String,
    submit_label: String,
    initial: JournalDraft,
    on_save: EventHandler<JournalDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let JournalDraft {
        title,
        content,
        tags,
        mood,
    } = initial;
    let mut title = use_signal(move || title);
    let mut content = use_signal(move || content);
    let mut tags = use_signal(move || tags);
    let mut mood = use_signal(move || mood);

    let handle_submit = move |_| {
        on_save.call(JournalDraft {
            title: title(),
            content: content(),
            tags: tags(),
            mood: mood(),
        });
    };

    rsx! {
        div { class: "card editor-card",
            h3 { class: "editor-heading",
                {icon}
                span { "{heading}" }
            }

            div { class: "field",
                label { r#for: "entry-title", "Název" }
                input {
                    id: "entry-title",
                    r#type: "text",
                    placeholder: "Co vás dnes potěšilo?",
                    value: "{title}",
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }

            div { class: "field",
                label { r#for: "entry-content", "Obsah" }
                textarea {
                    id: "entry-content",
                    rows: "4",
                    placeholder: "Popište svou radost nebo objev...",
                    value: "{content}",
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
            }

            div { class: "field-grid",
                div { class: "field",
                    label { r#for: "entry-tags", "Štítky (oddělené čárkami)" }
                    input {
                        id: "entry-tags",
                        r#type: "text",
                        placeholder: "rodina, příroda, úspěch...",
                        value: "{tags}",
                        oninput: move |evt: FormEvent| tags.set(evt.value()),
                    }
                }

                div { class: "field",
                    label { r#for: "entry-mood", "Nálada" }
                    select {
                        id: "entry-mood",
                        value: "{mood().as_str()}",
                        onchange: move |evt| mood.set(Mood::from_key(&evt.value())),
                        for option in Mood::ALL {
                            option { key: "{option.as_str()}", value: "{option.as_str()}",
                                {mood_label(option)}
                            }
                        }
                    }
                }
            }

            div { class: "editor-actions",
                button { class: "btn btn-primary", onclick: handle_submit, "{submit_label}" }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_cancel.call(()),
                    "Zrušit"
                }
            }
        }
    }
}
