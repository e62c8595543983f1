//! Dialogue states.

/// Current step of a conversation. A chat without a stored session is in [`State::Start`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Start,
    /// Waiting for the origin stations, one per line.
    StationsSelection,
    /// Waiting for the destination; `stations` is non-empty.
    FinalStationSelection { stations: Vec<String> },
    /// Conversation finished or cancelled; a new `/start` is required.
    End,
}

impl State {
    /// True for the states that wait for user input.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            State::StationsSelection | State::FinalStationSelection { .. }
        )
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            State::Start => "start",
            State::StationsSelection => "stations_selection",
            State::FinalStationSelection { .. } => "final_station_selection",
            State::End => "end",
        }
    }
}
