use crate::game::{GameSession, SessionPhase, SessionStore};

/// Top-level view phase of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Loading the day's game and stored record.
    Boot,
    /// Landing view, ready to start or already done for the day.
    Home,
    /// A game session is live.
    Playing,
    /// The day's five questions are answered.
    FinalScore,
    /// Browsing earlier days' games.
    PastGames,
    /// No game document exists for the day, or loading failed.
    Unavailable,
}

/// Where a freshly started (or resumed) session should land.
#[must_use]
pub fn phase_for_session<S: SessionStore>(session: &GameSession<S>) -> Phase {
    match session.phase() {
        SessionPhase::NotStarted => Phase::Home,
        SessionPhase::Asking | SessionPhase::Revealed => Phase::Playing,
        SessionPhase::Completed => Phase::FinalScore,
    }
}
