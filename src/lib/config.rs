//! Build-time branding and profile configuration for the sidebar with an
//! optional runtime override. The runtime config is read from
//! `window.BUOYHUB_CONFIG` (if present) so static deployments can rebrand the
//! widget without rebuilding. Configuration values are public; do not store
//! secrets here.

const DEFAULT_LOGO_URL: &str = "https://cdn.builder.io/api/v1/image/assets/991ee9a0afad461fa9386316c87fe366/fccf2e7ec9723b0ade97e83d78184ae7dc22e34b?placeholderIfAbsent=true";
const DEFAULT_AVATAR_URL: &str = "https://cdn.builder.io/api/v1/image/assets/991ee9a0afad461fa9386316c87fe366/26bd6ffcec002bf455996a05d2b89c3461015451?placeholderIfAbsent=true";

/// Sidebar configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarConfig {
    pub brand_name: String,
    pub logo_url: String,
    pub logo_alt: String,
    pub profile_name: String,
    pub profile_subtitle: String,
    pub avatar_url: String,
    pub cta_label: String,
    pub cta_short_label: String,
    pub log_level: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            brand_name: "Buoy Hub".to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            logo_alt: "Dashdark X Logo".to_string(),
            profile_name: "John Carter".to_string(),
            profile_subtitle: "Account settings".to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            cta_label: "Get a buoy".to_string(),
            cta_short_label: "GT".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl SidebarConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        let build_time = RuntimeConfig {
            brand_name: option_env!("BUOYHUB_BRAND_NAME").and_then(normalize_runtime_value),
            logo_url: option_env!("BUOYHUB_LOGO_URL").and_then(normalize_runtime_value),
            profile_name: option_env!("BUOYHUB_PROFILE_NAME").and_then(normalize_runtime_value),
            profile_subtitle: option_env!("BUOYHUB_PROFILE_SUBTITLE")
                .and_then(normalize_runtime_value),
            avatar_url: option_env!("BUOYHUB_AVATAR_URL").and_then(normalize_runtime_value),
            cta_label: option_env!("BUOYHUB_CTA_LABEL").and_then(normalize_runtime_value),
            cta_short_label: option_env!("BUOYHUB_CTA_SHORT_LABEL")
                .and_then(normalize_runtime_value),
            log_level: option_env!("BUOYHUB_LOG_LEVEL").and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build_time);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Tooltip text for the collapsed profile block.
    pub fn profile_tooltip(&self) -> String {
        format!("{} - {}", self.profile_name, self.profile_subtitle)
    }

    pub fn profile_alt(&self) -> String {
        format!("{} Profile", self.profile_name)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    brand_name: Option<String>,
    logo_url: Option<String>,
    profile_name: Option<String>,
    profile_subtitle: Option<String>,
    avatar_url: Option<String>,
    cta_label: Option<String>,
    cta_short_label: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut SidebarConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.brand_name {
        config.brand_name = value;
    }
    if let Some(value) = runtime.logo_url {
        config.logo_url = value;
    }
    if let Some(value) = runtime.profile_name {
        config.profile_name = value;
    }
    if let Some(value) = runtime.profile_subtitle {
        config.profile_subtitle = value;
    }
    if let Some(value) = runtime.avatar_url {
        config.avatar_url = value;
    }
    if let Some(value) = runtime.cta_label {
        config.cta_label = value;
    }
    if let Some(value) = runtime.cta_short_label {
        config.cta_short_label = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("BUOYHUB_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        brand_name: read_runtime_value(&object, "brand_name"),
        logo_url: read_runtime_value(&object, "logo_url"),
        profile_name: read_runtime_value(&object, "profile_name"),
        profile_subtitle: read_runtime_value(&object, "profile_subtitle"),
        avatar_url: read_runtime_value(&object, "avatar_url"),
        cta_label: read_runtime_value(&object, "cta_label"),
        cta_short_label: read_runtime_value(&object, "cta_short_label"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, normalize_runtime_value, RuntimeConfig, SidebarConfig,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  Harbor Hub "),
            Some("Harbor Hub".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = SidebarConfig::default();
        let runtime = RuntimeConfig {
            brand_name: normalize_runtime_value(""),
            profile_name: normalize_runtime_value("  "),
            cta_label: normalize_runtime_value(""),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, SidebarConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = SidebarConfig::default();
        let runtime = RuntimeConfig {
            brand_name: normalize_runtime_value("Harbor Hub"),
            profile_name: normalize_runtime_value("Ada Lovelace"),
            profile_subtitle: normalize_runtime_value("Billing"),
            cta_label: normalize_runtime_value("Rent a dock"),
            log_level: normalize_runtime_value("debug"),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.brand_name, "Harbor Hub");
        assert_eq!(config.profile_tooltip(), "Ada Lovelace - Billing");
        assert_eq!(config.cta_label, "Rent a dock");
        assert_eq!(config.cta_short_label, "GT");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.logo_alt, "Dashdark X Logo");
    }

    #[test]
    fn default_config_matches_stock_branding() {
        let config = SidebarConfig::default();
        assert_eq!(config.brand_name, "Buoy Hub");
        assert_eq!(config.profile_tooltip(), "John Carter - Account settings");
        assert_eq!(config.profile_alt(), "John Carter Profile");
        assert_eq!(config.cta_short_label, "GT");
    }

    #[test]
    fn cta_label_override_keeps_the_short_label() {
        let mut config = SidebarConfig::default();
        let runtime = RuntimeConfig {
            cta_label: normalize_runtime_value("Get a buoy"),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, SidebarConfig::default());
        assert_eq!(config.cta_short_label, "GT");
    }

    #[test]
    fn cta_short_label_overrides_independently() {
        let mut config = SidebarConfig::default();
        let runtime = RuntimeConfig {
            cta_short_label: normalize_runtime_value(" RD "),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.cta_short_label, "RD");
        assert_eq!(config.cta_label, "Get a buoy");
    }
}
