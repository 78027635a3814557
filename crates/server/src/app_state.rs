use shared::domain::{PourPreferences, Roast};

use crate::config::Settings;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) default_preferences: PourPreferences,
    pub(crate) default_roast: Roast,
}

impl From<&Settings> for AppState {
    fn from(settings: &Settings) -> Self {
        Self {
            default_preferences: settings.default_preferences,
            default_roast: settings.default_roast,
        }
    }
}
