use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::format_money;

/// Show or change the stored defaults. Any change runs the full save flow,
/// which also stamps the target history with the current ISO week.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        show,
        job,
        wage,
        weekly_hours,
    } = cmd
    {
        let mut store = store::open(cfg)?;
        let mut settings = store.load_settings()?;

        let has_changes = job.is_some() || wage.is_some() || weekly_hours.is_some();

        if has_changes {
            if let Some(j) = job {
                settings.default_job_name = j.clone();
            }
            if let Some(w) = wage {
                if *w < 0.0 {
                    return Err(AppError::Config(
                        "default hourly wage cannot be negative".to_string(),
                    ));
                }
                settings.default_hourly_wage = *w;
            }
            if let Some(h) = weekly_hours {
                if *h <= 0.0 {
                    return Err(AppError::Config(
                        "estimated weekly hours must be positive".to_string(),
                    ));
                }
                settings.estimated_weekly_hours = *h;
            }

            SettingsLogic::apply(store.as_mut(), &settings, date::today())?;

            success("Settings saved.");
        }

        if *show || !has_changes {
            println!(
                "Active job: {}   |   Hourly wage: {}   |   Estimated weekly hours: {}",
                if settings.default_job_name.is_empty() {
                    "-"
                } else {
                    settings.default_job_name.as_str()
                },
                format_money(settings.default_hourly_wage, &cfg.currency),
                settings.estimated_weekly_hours,
            );
        }
    }

    Ok(())
}
