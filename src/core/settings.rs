//! Settings persistence flow, including the weekly-target stamping.

use chrono::NaiveDate;

use crate::core::targets::week_id;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::store::Store;
use crate::utils::date::iso_week_of;

pub struct SettingsLogic;

impl SettingsLogic {
    /// Save settings and stamp the target history.
    ///
    /// The history key is the ISO week of `saved_on` (the save date), not
    /// the week the hours apply to: a week's recorded target is the value
    /// in effect when settings were last saved during that week. Repeated
    /// saves within one week overwrite the same key.
    pub fn apply(
        store: &mut dyn Store,
        settings: &Settings,
        saved_on: NaiveDate,
    ) -> AppResult<()> {
        store.save_settings(settings)?;

        let (year, week) = iso_week_of(saved_on);
        let mut history = store.load_target_history()?;
        history.record(&week_id(year, week), settings.estimated_weekly_hours);
        store.save_target_history(&history)?;

        Ok(())
    }
}
