//! Transition functions, one per state.
//!
//! Each function takes the input for its state and returns the next [`State`] together with the reply
//! to send. Validation failures keep the current state and carry a re-prompt.

use dbot_core::OutgoingMessage;
use distance_client::DistanceResolver;
use tracing::info;

use crate::destination::Destination;
use crate::messages;
use crate::state::State;

/// Result of handling one input: the state to move to and the reply for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: State,
    pub reply: OutgoingMessage,
}

impl Transition {
    fn new(next: State, reply: OutgoingMessage) -> Self {
        Self { next, reply }
    }
}

/// Splits input into station names: one per line, trimmed, blank lines dropped, order kept.
pub fn parse_stations(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `/start`: instructions, then wait for stations.
pub fn start() -> Transition {
    Transition::new(
        State::StationsSelection,
        OutgoingMessage::text(messages::GREETING),
    )
}

/// Origin stations input.
pub fn stations_selection(input: &str) -> Transition {
    let stations = parse_stations(input);
    if stations.is_empty() {
        return Transition::new(
            State::StationsSelection,
            OutgoingMessage::text(messages::INVALID_STATIONS),
        );
    }

    Transition::new(
        State::FinalStationSelection { stations },
        OutgoingMessage::with_keyboard(messages::CHOOSE_DESTINATION, Destination::labels()),
    )
}

/// Destination input. A valid choice runs exactly one lookup and ends the conversation whatever it returns.
pub async fn final_station_selection(
    stations: Vec<String>,
    input: &str,
    resolver: &dyn DistanceResolver,
) -> Transition {
    let Some(destination) = Destination::parse(input) else {
        return Transition::new(
            State::FinalStationSelection { stations },
            OutgoingMessage::text(messages::INVALID_DESTINATION),
        );
    };

    info!(
        destination = %destination,
        stations = stations.len(),
        "Resolving distance"
    );
    let distance = resolver.resolve(&stations, destination.label()).await;

    Transition::new(
        State::End,
        OutgoingMessage::removing_keyboard(messages::distance_result(
            destination.label(),
            &distance,
        )),
    )
}

/// `/cancel` from an active state.
pub fn cancel() -> Transition {
    Transition::new(
        State::End,
        OutgoingMessage::removing_keyboard(messages::CANCELLED),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dbot_core::ReplyMarkup;
    use std::sync::Mutex;

    /// Records calls and answers with a fixed text.
    struct RecordingResolver {
        answer: String,
        calls: Mutex<Vec<(Vec<String>, String)>>,
    }

    impl RecordingResolver {
        fn new(answer: &str) -> Self {
            Self {
                answer: answer.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DistanceResolver for RecordingResolver {
        async fn resolve(&self, stations: &[String], destination: &str) -> String {
            self.calls
                .lock()
                .unwrap()
                .push((stations.to_vec(), destination.to_string()));
            self.answer.clone()
        }
    }

    fn two_stations() -> Vec<String> {
        vec!["Забойщик".to_string(), "Поздеевка".to_string()]
    }

    #[test]
    fn test_parse_stations_trims_and_drops_blank_lines() {
        let input = "  Забойщик \n\n\t\nПоздеевка\r\n   Чунояр  \n";
        assert_eq!(
            parse_stations(input),
            vec!["Забойщик", "Поздеевка", "Чунояр"]
        );
    }

    #[test]
    fn test_parse_stations_keeps_inner_spaces_and_numbering() {
        assert_eq!(
            parse_stations("1. Забойщик\n2. Новая Чара"),
            vec!["1. Забойщик", "2. Новая Чара"]
        );
    }

    #[test]
    fn test_start_moves_to_stations_selection() {
        let t = start();
        assert_eq!(t.next, State::StationsSelection);
        assert!(t.reply.text.contains("Забойщик"));
        assert_eq!(t.reply.markup, ReplyMarkup::None);
    }

    #[test]
    fn test_stations_selection_empty_input_loops() {
        for input in ["", "   ", "\n\n", " \t \n  "] {
            let t = stations_selection(input);
            assert_eq!(t.next, State::StationsSelection, "input {:?}", input);
            assert_eq!(t.reply.text, messages::INVALID_STATIONS);
        }
    }

    #[test]
    fn test_stations_selection_offers_destinations() {
        let t = stations_selection("Забойщик\nПоздеевка");
        assert_eq!(
            t.next,
            State::FinalStationSelection {
                stations: two_stations()
            }
        );
        assert_eq!(t.reply.text, messages::CHOOSE_DESTINATION);
        assert_eq!(
            t.reply.markup,
            ReplyMarkup::Keyboard(vec!["Электроугли".to_string(), "Чик".to_string()])
        );
    }

    #[tokio::test]
    async fn test_final_station_selection_invalid_keeps_stations() {
        let resolver = RecordingResolver::new("123 км");
        for input in ["Москва", "", "чик", "Электроугли, Чик"] {
            let t = final_station_selection(two_stations(), input, &resolver).await;
            assert_eq!(
                t.next,
                State::FinalStationSelection {
                    stations: two_stations()
                }
            );
            assert_eq!(t.reply.text, messages::INVALID_DESTINATION);
        }
        assert!(resolver.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_final_station_selection_resolves_once_and_ends() {
        let resolver = RecordingResolver::new("123 км");
        let t = final_station_selection(two_stations(), "  Электроугли ", &resolver).await;

        assert_eq!(t.next, State::End);
        assert_eq!(t.reply.text, "Расстояние до Электроугли:\n123 км");
        assert_eq!(t.reply.markup, ReplyMarkup::RemoveKeyboard);

        let calls = resolver.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (two_stations(), "Электроугли".to_string()));
    }

    #[tokio::test]
    async fn test_final_station_selection_ends_on_placeholder() {
        let resolver = RecordingResolver::new("Расстояние не найдено");
        let t = final_station_selection(two_stations(), "Чик", &resolver).await;
        assert_eq!(t.next, State::End);
        assert!(t.reply.text.contains("Расстояние не найдено"));
    }

    #[test]
    fn test_cancel_ends_and_clears_keyboard() {
        let t = cancel();
        assert_eq!(t.next, State::End);
        assert_eq!(t.reply.text, "Команда отменена.");
        assert_eq!(t.reply.markup, ReplyMarkup::RemoveKeyboard);
    }
}
