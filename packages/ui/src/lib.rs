//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
    pub mod brands {
        pub use dioxus_free_icons::icons::fa_brands_icons::*;
    }
}

mod geometry;

mod dates;
pub use dates::format_long_date;

mod toast;
pub use toast::{use_toasts, Toaster, Toasts};

mod session;
pub use session::{use_session, Phase, Session, SessionProvider, SessionState};

mod navbar;
pub use navbar::{Navigation, Page};

mod wheel;
pub use wheel::WellnessWheel;

mod charts;
pub use charts::{CategoryAverageChart, MoodPieChart, ScoreTrendChart};

mod inspiration;
pub use inspiration::InspirationCard;

mod journal_editor;
pub use journal_editor::{
    mood_class, mood_label, parse_tags, JournalDraft, JournalEditor, MoodIcon,
};

mod confirm;
pub use confirm::ConfirmDialog;
