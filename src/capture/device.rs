use std::env;
use std::fs;
use std::path::Path;

pub const FALLBACK_LANGUAGE_TAG: &str = "es-AR";
pub const FALLBACK_TIMEZONE: &str = "America/Argentina/Buenos_Aires";

/// What the host environment says about language and time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceLocale {
    pub language_tag: String,
    pub timezone: String,
}

impl Default for DeviceLocale {
    fn default() -> Self {
        Self {
            language_tag: FALLBACK_LANGUAGE_TAG.to_string(),
            timezone: FALLBACK_TIMEZONE.to_string(),
        }
    }
}

pub trait LocaleProvider {
    fn detect(&self) -> DeviceLocale;
}

/// Reads `LC_ALL`/`LC_TIME`/`LANG` and `TZ`, `/etc/timezone`, `/etc/localtime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocaleProvider;

impl LocaleProvider for SystemLocaleProvider {
    fn detect(&self) -> DeviceLocale {
        let language_tag = ["LC_ALL", "LC_TIME", "LANG"]
            .into_iter()
            .filter_map(|key| env::var(key).ok())
            .find_map(|value| language_tag_from_posix(&value))
            .unwrap_or_else(|| FALLBACK_LANGUAGE_TAG.to_string());

        let timezone = env::var("TZ")
            .ok()
            .and_then(|tz| timezone_from_tz_var(&tz))
            .or_else(|| {
                fs::read_to_string("/etc/timezone")
                    .ok()
                    .map(|zone| zone.trim().to_string())
                    .filter(|zone| !zone.is_empty())
            })
            .or_else(|| {
                fs::read_link("/etc/localtime")
                    .ok()
                    .and_then(|target| timezone_from_zoneinfo_path(&target))
            })
            .unwrap_or_else(|| FALLBACK_TIMEZONE.to_string());

        let locale = DeviceLocale {
            language_tag,
            timezone,
        };
        tracing::debug!(?locale, "Detected device locale");
        locale
    }
}

/// `es_AR.UTF-8` to `es-AR`. `C` and `POSIX` carry no language.
fn language_tag_from_posix(value: &str) -> Option<String> {
    let base = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

fn timezone_from_tz_var(value: &str) -> Option<String> {
    let zone = value.trim().trim_start_matches(':');
    if zone.is_empty() {
        return None;
    }
    if zone.starts_with('/') {
        return timezone_from_zoneinfo_path(Path::new(zone));
    }
    Some(zone.to_string())
}

fn timezone_from_zoneinfo_path(path: &Path) -> Option<String> {
    let path = path.to_string_lossy();
    let (_, zone) = path.split_once("zoneinfo/")?;
    (!zone.is_empty()).then(|| zone.to_string())
}
