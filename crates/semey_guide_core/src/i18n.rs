//! crates/semey_guide_core/src/i18n.rs
//!
//! The localization provider: the active language tag plus the static
//! string bundles for both supported languages. The bundles are fully
//! defined at build time; the only fallback logic anywhere is that a place
//! or task lacking a Russian variant renders its primary field.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;

use crate::ports::{KeyValueStore, PortResult};

/// Storage key holding the two-letter language tag.
pub const LANG_KEY: &str = "ssg_lang";

/// The two supported language tags. English is the first-run default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ru")]
    Ru,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    pub fn parse(tag: &str) -> Option<Language> {
        match tag {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

//=========================================================================================
// String Bundles
//=========================================================================================

#[derive(Debug, Serialize)]
pub struct NavStrings {
    pub title: &'static str,
    pub map: &'static str,
    pub onboarding: &'static str,
    pub profile: &'static str,
    pub login: &'static str,
    pub logout: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AuthStrings {
    pub login_title: &'static str,
    pub register_title: &'static str,
    pub login_subtitle: &'static str,
    pub register_subtitle: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub full_name: &'static str,
    pub university: &'static str,
    pub login_btn: &'static str,
    pub register_btn: &'static str,
    pub no_account: &'static str,
    pub has_account: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MapStrings {
    pub search_placeholder: &'static str,
    pub nearby_picks: &'static str,
    pub results: &'static str,
    pub verified: &'static str,
    pub recommended: &'static str,
    pub get_directions: &'static str,
    pub no_results: &'static str,
    pub clear_filters: &'static str,
    pub discover_btn: &'static str,
    pub loading_discovery: &'static str,
    pub all: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OnboardingStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub key_advice: &'static str,
    pub checklist: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProfileStrings {
    pub edit: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub bio: &'static str,
    pub year_of_study: &'static str,
    pub university: &'static str,
    pub recommended_count: &'static str,
    pub signals: &'static str,
    pub support_title: &'static str,
    pub support_text: &'static str,
}

/// The full set of display strings for one language tag.
#[derive(Debug, Serialize)]
pub struct Bundle {
    pub nav: NavStrings,
    pub auth: AuthStrings,
    pub map: MapStrings,
    pub onboarding: OnboardingStrings,
    pub profile: ProfileStrings,
}

impl Bundle {
    /// Resolves a dotted key path ("nav.map") to its display string.
    pub fn lookup(&self, path: &str) -> Option<&'static str> {
        let (section, key) = path.split_once('.')?;
        match section {
            "nav" => match key {
                "title" => Some(self.nav.title),
                "map" => Some(self.nav.map),
                "onboarding" => Some(self.nav.onboarding),
                "profile" => Some(self.nav.profile),
                "login" => Some(self.nav.login),
                "logout" => Some(self.nav.logout),
                _ => None,
            },
            "auth" => match key {
                "login_title" => Some(self.auth.login_title),
                "register_title" => Some(self.auth.register_title),
                "login_subtitle" => Some(self.auth.login_subtitle),
                "register_subtitle" => Some(self.auth.register_subtitle),
                "email" => Some(self.auth.email),
                "password" => Some(self.auth.password),
                "full_name" => Some(self.auth.full_name),
                "university" => Some(self.auth.university),
                "login_btn" => Some(self.auth.login_btn),
                "register_btn" => Some(self.auth.register_btn),
                "no_account" => Some(self.auth.no_account),
                "has_account" => Some(self.auth.has_account),
                _ => None,
            },
            "map" => match key {
                "search_placeholder" => Some(self.map.search_placeholder),
                "nearby_picks" => Some(self.map.nearby_picks),
                "results" => Some(self.map.results),
                "verified" => Some(self.map.verified),
                "recommended" => Some(self.map.recommended),
                "get_directions" => Some(self.map.get_directions),
                "no_results" => Some(self.map.no_results),
                "clear_filters" => Some(self.map.clear_filters),
                "discover_btn" => Some(self.map.discover_btn),
                "loading_discovery" => Some(self.map.loading_discovery),
                "all" => Some(self.map.all),
                _ => None,
            },
            "onboarding" => match key {
                "title" => Some(self.onboarding.title),
                "subtitle" => Some(self.onboarding.subtitle),
                "key_advice" => Some(self.onboarding.key_advice),
                "checklist" => Some(self.onboarding.checklist),
                _ => None,
            },
            "profile" => match key {
                "edit" => Some(self.profile.edit),
                "save" => Some(self.profile.save),
                "cancel" => Some(self.profile.cancel),
                "bio" => Some(self.profile.bio),
                "year_of_study" => Some(self.profile.year_of_study),
                "university" => Some(self.profile.university),
                "recommended_count" => Some(self.profile.recommended_count),
                "signals" => Some(self.profile.signals),
                "support_title" => Some(self.profile.support_title),
                "support_text" => Some(self.profile.support_text),
                _ => None,
            },
            _ => None,
        }
    }
}

pub static EN: Bundle = Bundle {
    nav: NavStrings {
        title: "Semey Guide",
        map: "Map",
        onboarding: "Onboarding",
        profile: "My Profile",
        login: "Login",
        logout: "Logout",
    },
    auth: AuthStrings {
        login_title: "Welcome Back",
        register_title: "Join Community",
        login_subtitle: "Access your personalized adaptation guide.",
        register_subtitle: "Connect with other international students in Semey.",
        email: "Email",
        password: "Password",
        full_name: "Full Name",
        university: "University",
        login_btn: "Sign In",
        register_btn: "Create Account",
        no_account: "Don't have an account?",
        has_account: "Already have an account?",
    },
    map: MapStrings {
        search_placeholder: "Search food, shops...",
        nearby_picks: "Community Picks & Real Places",
        results: "Results",
        verified: "Verified",
        recommended: "Recommended",
        get_directions: "Get Directions",
        no_results: "No places found.",
        clear_filters: "Try clearing filters",
        discover_btn: "Discover Real Places (AI)",
        loading_discovery: "Finding real establishments...",
        all: "All",
    },
    onboarding: OnboardingStrings {
        title: "Your First 30 Days in Semey",
        subtitle: "Verified guide by senior international students.",
        key_advice: "Key Advice",
        checklist: "Checklist",
    },
    profile: ProfileStrings {
        edit: "Edit Profile",
        save: "Save Changes",
        cancel: "Cancel",
        bio: "About Me",
        year_of_study: "Year of Study",
        university: "University",
        recommended_count: "Places Recommended",
        signals: "Safety Signals Reported",
        support_title: "University Support",
        support_text: "Your profile is linked to SMU Semey Official.",
    },
};

pub static RU: Bundle = Bundle {
    nav: NavStrings {
        title: "Гайд Семей",
        map: "Карта",
        onboarding: "Адаптация",
        profile: "Профиль",
        login: "Войти",
        logout: "Выйти",
    },
    auth: AuthStrings {
        login_title: "С возвращением",
        register_title: "Регистрация",
        login_subtitle: "Ваш персональный гид по адаптации.",
        register_subtitle: "Присоединяйтесь к сообществу студентов в Семее.",
        email: "Email",
        password: "Пароль",
        full_name: "Полное имя",
        university: "Университет",
        login_btn: "Войти",
        register_btn: "Создать аккаунт",
        no_account: "Нет аккаунта?",
        has_account: "Уже есть аккаунт?",
    },
    map: MapStrings {
        search_placeholder: "Поиск еды, магазинов...",
        nearby_picks: "Рекомендации и реальные места",
        results: "Результаты",
        verified: "Верифицировано",
        recommended: "Рекомендовано",
        get_directions: "Маршрут",
        no_results: "Места не найдены.",
        clear_filters: "Сбросить фильтры",
        discover_btn: "Найти реальные места (AI)",
        loading_discovery: "Поиск реальных заведений...",
        all: "Все",
    },
    onboarding: OnboardingStrings {
        title: "Ваши первые 30 дней в Семее",
        subtitle: "Проверенный гайд от старшекурсников.",
        key_advice: "Важные советы",
        checklist: "Список дел",
    },
    profile: ProfileStrings {
        edit: "Редактировать профиль",
        save: "Сохранить",
        cancel: "Отмена",
        bio: "О себе",
        year_of_study: "Курс обучения",
        university: "Университет",
        recommended_count: "Рекомендовано мест",
        signals: "Сигналы безопасности",
        support_title: "Поддержка университета",
        support_text: "Ваш профиль связан с официальным ГМУ Семей.",
    },
};

/// The bundle for one language tag.
pub fn bundle(lang: Language) -> &'static Bundle {
    match lang {
        Language::En => &EN,
        Language::Ru => &RU,
    }
}

//=========================================================================================
// Provider
//=========================================================================================

/// Holds the active language and persists explicit changes. Consumers see a
/// new tag on their next read.
pub struct LocalizationProvider {
    store: Arc<dyn KeyValueStore>,
    lang: RwLock<Language>,
}

impl LocalizationProvider {
    /// Restores the persisted tag; an absent or unrecognized value falls
    /// back to the default language.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> PortResult<Self> {
        let lang = match store.get(LANG_KEY).await? {
            Some(tag) => Language::parse(&tag).unwrap_or_else(|| {
                warn!("Ignoring unrecognized language tag {:?}", tag);
                Language::default()
            }),
            None => Language::default(),
        };

        Ok(Self {
            store,
            lang: RwLock::new(lang),
        })
    }

    pub async fn get(&self) -> (Language, &'static Bundle) {
        let lang = *self.lang.read().await;
        (lang, bundle(lang))
    }

    /// Switches the active language and persists the tag.
    pub async fn set(&self, lang: Language) -> PortResult<()> {
        self.store.set(LANG_KEY, lang.as_str()).await?;
        *self.lang.write().await = lang;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PortResult;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        map: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl KeyValueStore for MemoryStore {
        async fn get(&self, key: &str) -> PortResult<Option<String>> {
            Ok(self.map.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> PortResult<()> {
            self.map
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> PortResult<()> {
            self.map.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[test]
    fn lookup_resolves_dotted_paths_in_both_bundles() {
        assert_eq!(EN.lookup("nav.map"), Some("Map"));
        assert_eq!(RU.lookup("nav.map"), Some("Карта"));
        assert_eq!(EN.lookup("map.discover_btn"), Some("Discover Real Places (AI)"));
        assert_eq!(EN.lookup("nav.unknown"), None);
        assert_eq!(EN.lookup("no-dot"), None);
    }

    #[tokio::test]
    async fn language_choice_is_persisted_and_restored() {
        let store = Arc::new(MemoryStore::default());
        let provider = LocalizationProvider::load(store.clone()).await.unwrap();
        assert_eq!(provider.get().await.0, Language::En);

        provider.set(Language::Ru).await.unwrap();
        assert_eq!(provider.get().await.0, Language::Ru);

        let restored = LocalizationProvider::load(store).await.unwrap();
        assert_eq!(restored.get().await.0, Language::Ru);
    }

    #[tokio::test]
    async fn garbage_tag_falls_back_to_default() {
        let store = Arc::new(MemoryStore::default());
        store.set(LANG_KEY, "de").await.unwrap();

        let provider = LocalizationProvider::load(store).await.unwrap();
        assert_eq!(provider.get().await.0, Language::En);
    }
}
