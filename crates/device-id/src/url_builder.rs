//! Control-page URL construction and parsing.
//!
//! Generated URLs follow `{base}?device={id}[&mac={mac}|&autoconnect=true]`.
//! Values are form-encoded, so the web app's query parser gets back exactly
//! what was written.

use url::Url;

use crate::DeviceIdError;

/// Which extra query parameter a label's URL carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlVariant {
    /// `device` only.
    #[default]
    Plain,
    /// `device` plus `autoconnect=true`.
    AutoConnect,
    /// `device` plus the synthetic `mac`.
    WithMac,
}

impl UrlVariant {
    /// Pick the variant from the two mutually exclusive CLI switches.
    pub fn from_flags(auto_connect: bool, with_mac: bool) -> Self {
        match (auto_connect, with_mac) {
            (true, _) => Self::AutoConnect,
            (false, true) => Self::WithMac,
            (false, false) => Self::Plain,
        }
    }

    pub fn includes_mac(self) -> bool {
        self == Self::WithMac
    }
}

/// Query values recovered from a device URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceQuery {
    pub device: String,
    pub mac: Option<String>,
    pub auto_connect: bool,
}

/// Parse and check the base URL labels point at.
pub fn parse_base_url(raw: &str) -> Result<Url, DeviceIdError> {
    let url = Url::parse(raw.trim()).map_err(|source| DeviceIdError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DeviceIdError::UnsupportedScheme(other.to_string())),
    }
}

/// Append the device parameters to `base`.
///
/// `mac` is only written for [`UrlVariant::WithMac`]. Any query already
/// present on `base` is kept. A host-only base such as `https://example.com`
/// is serialized with its root path, giving `https://example.com/?device=...`.
pub fn build_device_url(
    base: &Url,
    device_id: &str,
    variant: UrlVariant,
    mac: Option<&str>,
) -> String {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("device", device_id);
        match (variant, mac) {
            (UrlVariant::AutoConnect, _) => {
                query.append_pair("autoconnect", "true");
            }
            (UrlVariant::WithMac, Some(mac)) => {
                query.append_pair("mac", mac);
            }
            _ => {}
        }
    }
    url.into()
}

/// Read the device parameters back out of a generated URL.
pub fn parse_device_url(raw: &str) -> Result<DeviceQuery, DeviceIdError> {
    let url = Url::parse(raw).map_err(|source| DeviceIdError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    let mut query = DeviceQuery::default();
    let mut has_device = false;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "device" => {
                query.device = value.into_owned();
                has_device = true;
            }
            "mac" => query.mac = Some(value.into_owned()),
            "autoconnect" => query.auto_connect = value == "true",
            _ => {}
        }
    }

    if !has_device {
        return Err(DeviceIdError::MissingDevice);
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base_url("https://yourusername.github.io/led-control").unwrap()
    }

    #[test]
    fn plain_url_has_only_device() {
        let url = build_device_url(&base(), "RGBW_LED_001", UrlVariant::Plain, None);
        assert_eq!(
            url,
            "https://yourusername.github.io/led-control?device=RGBW_LED_001"
        );
    }

    #[test]
    fn auto_connect_url_appends_flag() {
        let url = build_device_url(&base(), "RGBW_LED_002", UrlVariant::AutoConnect, None);
        assert!(url.ends_with("?device=RGBW_LED_002&autoconnect=true"));

        let parsed = parse_device_url(&url).unwrap();
        assert_eq!(parsed.device, "RGBW_LED_002");
        assert!(parsed.auto_connect);
        assert_eq!(parsed.mac, None);
    }

    #[test]
    fn mac_round_trips_through_query() {
        let url = build_device_url(
            &base(),
            "RGBW_LED_003",
            UrlVariant::WithMac,
            Some("02:00:00:00:00:03"),
        );
        let parsed = parse_device_url(&url).unwrap();
        assert_eq!(parsed.device, "RGBW_LED_003");
        assert_eq!(parsed.mac.as_deref(), Some("02:00:00:00:00:03"));
        assert!(!parsed.auto_connect);
    }

    #[test]
    fn mac_is_ignored_for_other_variants() {
        let url = build_device_url(&base(), "X_001", UrlVariant::Plain, Some("02:00:00:00:00:01"));
        assert_eq!(parse_device_url(&url).unwrap().mac, None);
    }

    #[test]
    fn reserved_characters_in_device_id_survive() {
        let url = build_device_url(&base(), "stage left&right_001", UrlVariant::Plain, None);
        assert_eq!(parse_device_url(&url).unwrap().device, "stage left&right_001");
    }

    #[test]
    fn existing_query_is_preserved() {
        let base = parse_base_url("https://example.com/app?lang=en").unwrap();
        let url = build_device_url(&base, "A_001", UrlVariant::Plain, None);
        assert_eq!(url, "https://example.com/app?lang=en&device=A_001");
    }

    #[test]
    fn host_only_base_gains_root_path() {
        let base = parse_base_url("https://example.com").unwrap();
        let url = build_device_url(&base, "A_001", UrlVariant::Plain, None);
        assert_eq!(url, "https://example.com/?device=A_001");
    }

    #[test]
    fn non_http_base_is_rejected() {
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(DeviceIdError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            parse_base_url("not a url"),
            Err(DeviceIdError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn url_without_device_is_an_error() {
        assert!(matches!(
            parse_device_url("https://example.com/?mac=1"),
            Err(DeviceIdError::MissingDevice)
        ));
    }

    #[test]
    fn variant_from_flags() {
        assert_eq!(UrlVariant::from_flags(false, false), UrlVariant::Plain);
        assert_eq!(UrlVariant::from_flags(true, false), UrlVariant::AutoConnect);
        assert_eq!(UrlVariant::from_flags(false, true), UrlVariant::WithMac);
        assert!(UrlVariant::WithMac.includes_mac());
    }
}
