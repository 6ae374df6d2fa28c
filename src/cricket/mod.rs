pub mod format;
pub mod players;
pub mod presenter;
pub mod samples;
pub mod scorecard;
pub mod status;
pub mod win_probability;

pub use presenter::MatchPresenter;
