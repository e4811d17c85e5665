//! Косметическая симуляция прогресса загрузки.
//!
//! Backend не присылает промежуточных сигналов, поэтому полоса двигается
//! по таймеру: каждый тик прибавляет случайную долю шага и упирается в
//! потолок 90%. До 100% её доводит только реальный ответ.

/// Период тика анимации, мс.
pub const TICK_MS: u32 = 200;
/// Потолок симуляции, %.
pub const SIMULATION_CAP: f64 = 90.0;
/// Максимальный прирост за тик, процентных пунктов.
pub const MAX_STEP: f64 = 15.0;

/// Следующее отображаемое значение. `random01` — случайное число из [0, 1).
pub fn advance(current: f64, random01: f64) -> f64 {
    let next = current + random01 * MAX_STEP;
    if next > SIMULATION_CAP {
        SIMULATION_CAP
    } else {
        next
    }
}

/// Подпись под полосой прогресса для текущего процента.
pub fn stage_label(percent: f64) -> &'static str {
    if percent < 30.0 {
        "Загрузка файла..."
    } else if percent < 60.0 {
        "Анализ документа..."
    } else if percent < 90.0 {
        "Создание векторных представлений..."
    } else {
        "Завершение обработки..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_adds_at_most_max_step() {
        assert_eq!(advance(10.0, 0.0), 10.0);
        assert_eq!(advance(10.0, 1.0), 25.0);
        assert!(advance(10.0, 0.5) <= 10.0 + MAX_STEP);
    }

    #[test]
    fn test_advance_never_passes_cap() {
        assert_eq!(advance(89.0, 1.0), SIMULATION_CAP);
        assert_eq!(advance(SIMULATION_CAP, 1.0), SIMULATION_CAP);
        // Много тиков подряд: из-под потолка не выбраться.
        let mut value = 0.0;
        for _ in 0..100 {
            value = advance(value, 0.99);
        }
        assert_eq!(value, SIMULATION_CAP);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut value = 0.0;
        for random in [0.3, 0.0, 0.7, 0.1] {
            let next = advance(value, random);
            assert!(next >= value);
            value = next;
        }
    }

    #[test]
    fn test_stage_labels_by_percent() {
        assert_eq!(stage_label(0.0), "Загрузка файла...");
        assert_eq!(stage_label(29.9), "Загрузка файла...");
        assert_eq!(stage_label(30.0), "Анализ документа...");
        assert_eq!(stage_label(59.9), "Анализ документа...");
        assert_eq!(stage_label(60.0), "Создание векторных представлений...");
        assert_eq!(stage_label(89.9), "Создание векторных представлений...");
        assert_eq!(stage_label(90.0), "Завершение обработки...");
        assert_eq!(stage_label(100.0), "Завершение обработки...");
    }
}
