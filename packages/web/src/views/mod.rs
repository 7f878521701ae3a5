mod login;
pub use login::Login;

mod home;
pub use home::Home;

mod journal;
pub use journal::Journal;

mod stats;
pub use stats::Stats;
