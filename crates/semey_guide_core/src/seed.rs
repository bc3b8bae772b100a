//! crates/semey_guide_core/src/seed.rs
//!
//! Fixed seed data: the curated place list and the onboarding periods.
//! Seed places are defined at process start and never mutated or removed.

use crate::domain::{Place, PlaceCategory, Signal};
use crate::onboarding::{ChecklistItem, OnboardingPeriod, Period};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn items(values: &[&str]) -> Vec<ChecklistItem> {
    values.iter().map(|s| ChecklistItem::new(s)).collect()
}

/// The curated seed places shown on the map before any discovery runs.
pub fn seed_places() -> Vec<Place> {
    vec![
        Place {
            id: "1".to_string(),
            name: "Chaykhana \"Vostok\"".to_string(),
            name_ru: Some("Чайхана \"Восток\"".to_string()),
            category: PlaceCategory::Food,
            description: "Central location, wide variety of pilaf and kebabs. Friendly staff."
                .to_string(),
            description_ru: Some(
                "Центральное расположение, большой выбор плова и шашлыков. Дружелюбный персонал."
                    .to_string(),
            ),
            lat: 50.4132,
            lng: 80.2520,
            tags: strings(&["Halal", "Budget", "Central"]),
            signals: vec![Signal::HalalFriendly, Signal::StudentFavorite],
            university_verified: true,
            address: "Abay Street 105".to_string(),
            address_ru: Some("ул. Абая 105".to_string()),
            link: None,
        },
        Place {
            id: "2".to_string(),
            name: "Pharmacy No. 1 (24/7)".to_string(),
            name_ru: Some("Аптека №1 (24/7)".to_string()),
            category: PlaceCategory::Medical,
            description: "Main city pharmacy, stocks most international medicine equivalents."
                .to_string(),
            description_ru: Some(
                "Главная аптека города, есть аналоги большинства международных лекарств."
                    .to_string(),
            ),
            lat: 50.4150,
            lng: 80.2480,
            tags: strings(&["24/7", "English-speaking"]),
            signals: vec![Signal::StudentFavorite],
            university_verified: true,
            address: "Shakarim Avenue 12".to_string(),
            address_ru: Some("пр. Шакарима 12".to_string()),
            link: None,
        },
        Place {
            id: "3".to_string(),
            name: "Indus Spice Hub".to_string(),
            name_ru: Some("Индус Спайс Хаб".to_string()),
            category: PlaceCategory::Food,
            description: "Small grocery store selling imported spices from India and Pakistan."
                .to_string(),
            description_ru: Some(
                "Небольшой магазин с импортными специями из Индии и Пакистана.".to_string(),
            ),
            lat: 50.4100,
            lng: 80.2600,
            tags: strings(&["Spices", "Grocery", "Imported"]),
            signals: vec![Signal::SpiceFriendly, Signal::HalalFriendly],
            university_verified: false,
            address: "International Str 45".to_string(),
            address_ru: Some("ул. Интернациональная 45".to_string()),
            link: None,
        },
        Place {
            id: "4".to_string(),
            name: "Central Mall Food Court".to_string(),
            name_ru: Some("Фуд-корт Центрального Молла".to_string()),
            category: PlaceCategory::Hangout,
            description: "Modern hangout spot with multiple fast food chains.".to_string(),
            description_ru: Some(
                "Современное место для встреч с множеством сетей фастфуда.".to_string(),
            ),
            lat: 50.4165,
            lng: 80.2450,
            tags: strings(&["Wi-Fi", "Warm"]),
            signals: vec![Signal::QuietStudy, Signal::ReportedExperience],
            university_verified: false,
            address: "Zataevich Street 5".to_string(),
            address_ru: Some("ул. Затаевича 5".to_string()),
            link: None,
        },
    ]
}

/// The fixed ordered onboarding periods covering the first 30 days.
pub fn onboarding_periods() -> Vec<OnboardingPeriod> {
    vec![
        OnboardingPeriod {
            id: "o1".to_string(),
            period: Period::Days1To3,
            title: "Landing & Essentials".to_string(),
            title_ru: "Прибытие и основы".to_string(),
            advice: strings(&[
                "Get your SIM card at the Central Mall (Beeline/Kcell recommended).",
                "Register your residence with the International Office immediately.",
                "Withdraw local currency (Tenge) at Kaspi ATMs.",
            ]),
            advice_ru: strings(&[
                "Купите SIM-карту в Центральном Молле (рекомендуется Beeline/Kcell).",
                "Немедленно зарегистрируйтесь в международном отделе.",
                "Снимите местную валюту (тенге) в банкоматах Kaspi.",
            ]),
            tasks: items(&[
                "Buy local SIM card",
                "Visit International Office",
                "Download Kaspi.kz app",
            ]),
            tasks_ru: items(&[
                "Купить местную SIM-карту",
                "Посетить международный отдел",
                "Скачать приложение Kaspi.kz",
            ]),
        },
        OnboardingPeriod {
            id: "o2".to_string(),
            period: Period::Week1,
            title: "Settling In".to_string(),
            title_ru: "Обустройство".to_string(),
            advice: strings(&[
                "Open a local bank account; Kaspi Gold covers most daily payments.",
                "Locate the nearest pharmacy and grocery store to your dormitory.",
                "Save the university hotline and your curator's number offline.",
            ]),
            advice_ru: strings(&[
                "Откройте местный банковский счет; Kaspi Gold покрывает большинство платежей.",
                "Найдите ближайшую аптеку и продуктовый магазин рядом с общежитием.",
                "Сохраните номер горячей линии университета и куратора офлайн.",
            ]),
            tasks: items(&[
                "Open a Kaspi account",
                "Find your district pharmacy",
                "Add emergency contacts",
            ]),
            tasks_ru: items(&[
                "Открыть счет Kaspi",
                "Найти аптеку своего района",
                "Добавить экстренные контакты",
            ]),
        },
        OnboardingPeriod {
            id: "o3".to_string(),
            period: Period::Weeks2To4,
            title: "Routine & Community".to_string(),
            title_ru: "Быт и сообщество".to_string(),
            advice: strings(&[
                "Join the international students chat for your faculty.",
                "Learn the bus routes between campus, the dorm and the Central Mall.",
                "Plan a winter clothing purchase before the first cold week.",
            ]),
            advice_ru: strings(&[
                "Вступите в чат иностранных студентов вашего факультета.",
                "Выучите автобусные маршруты между кампусом, общежитием и Центральным Моллом.",
                "Запланируйте покупку зимней одежды до первых холодов.",
            ]),
            tasks: items(&[
                "Join the student community chat",
                "Ride your bus route once",
                "Buy winter essentials",
            ]),
            tasks_ru: items(&[
                "Вступить в студенческий чат",
                "Проехать свой маршрут автобуса",
                "Купить зимние вещи",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let places = seed_places();
        for (i, a) in places.iter().enumerate() {
            for b in places.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn seed_coordinates_are_valid() {
        for place in seed_places() {
            assert!((-90.0..=90.0).contains(&place.lat));
            assert!((-180.0..=180.0).contains(&place.lng));
        }
    }

    #[test]
    fn task_lists_line_up_across_languages() {
        for period in onboarding_periods() {
            assert_eq!(period.tasks.len(), period.tasks_ru.len());
            assert_eq!(period.advice.len(), period.advice_ru.len());
        }
    }
}
