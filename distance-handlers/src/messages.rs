//! Reply texts.

pub const GREETING: &str = "Привет! Я помогу узнать расстояние в километрах от станции дислокации до станции назначения.\n\
Напиши свой запрос в форме:\n\
1. Забойщик\n\
2. Поздеевка\n\
И так далее...";

pub const INVALID_STATIONS: &str = "Пожалуйста, введите корректные станции";

pub const CHOOSE_DESTINATION: &str = "Теперь выбери конечную станцию:";

pub const INVALID_DESTINATION: &str = "Пожалуйста, выберите конечную станцию из предложенного списка";

pub const CANCELLED: &str = "Команда отменена.";

/// Final reply: destination label, then the resolved distance (or its placeholder) on the next line.
pub fn distance_result(destination: &str, distance: &str) -> String {
    format!("Расстояние до {}:\n{}", destination, distance)
}
