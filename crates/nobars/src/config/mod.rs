mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod logging_config;

pub(crate) use {behaviour_config::BehaviourConfig, config::Config, logging_config::LoggingConfig};

pub(crate) const DEFAULT_CLEAN_UP_DESKTOP: bool = false;
pub(crate) const DEFAULT_LOG_FILTER: &str = "nobars=info,nobars_core=info";

pub(crate) fn default_clean_up_desktop() -> bool {
    DEFAULT_CLEAN_UP_DESKTOP
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
