//! Android device identity derived from a fingerprint string

use super::good_devices::{is_good_device, random_good_device, CPU_ABI};

/// Device parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The fingerprint does not have the expected layout
    #[error("Invalid device string '{device_string}': {reason}")]
    InvalidFormat {
        device_string: String,
        reason: &'static str,
    },
}

/// A device identity used to build the app User-Agent.
///
/// Fingerprint layout:
/// `<api>/<release>; <dpi>dpi; <width>x<height>; <manufacturer>[/<brand>]; <model>; <device>; <cpu>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    app_version: String,
    user_locale: String,
    device_string: String,
    android_version: String,
    android_release: String,
    dpi: String,
    resolution: String,
    manufacturer: String,
    brand: Option<String>,
    model: String,
    device: String,
    cpu: String,
}

impl Device {
    /// Create a device for the given app version and locale.
    ///
    /// Without a device string a random good device is used. A device string
    /// that is not in the good-device catalog is swapped for a random good
    /// device when `auto_fallback` is set and used as-is otherwise.
    pub fn new(
        app_version: &str,
        user_locale: &str,
        device_string: Option<&str>,
        auto_fallback: bool,
    ) -> Result<Self, DeviceError> {
        let device_string = match device_string.filter(|s| !s.is_empty()) {
            None => random_good_device(),
            Some(candidate) if auto_fallback && !is_good_device(candidate) => {
                tracing::debug!(candidate, "Replacing unknown device with a good device");
                random_good_device()
            }
            Some(candidate) => candidate,
        };

        Self::from_fingerprint(app_version, user_locale, device_string)
    }

    /// Parse a fingerprint without consulting the catalog
    pub fn from_fingerprint(
        app_version: &str,
        user_locale: &str,
        device_string: &str,
    ) -> Result<Self, DeviceError> {
        let invalid = |reason| DeviceError::InvalidFormat {
            device_string: device_string.to_string(),
            reason,
        };

        let parts: Vec<&str> = device_string.split("; ").collect();
        let &[os, dpi, resolution, maker, model, device, cpu] = parts.as_slice() else {
            return Err(invalid("expected 7 parts separated by '; '"));
        };

        let (android_version, android_release) = os
            .split_once('/')
            .ok_or_else(|| invalid("missing '<api>/<release>' prefix"))?;

        let (manufacturer, brand) = match maker.split_once('/') {
            Some((manufacturer, brand)) => (manufacturer, Some(brand.to_string())),
            None => (maker, None),
        };

        Ok(Self {
            app_version: app_version.to_string(),
            user_locale: user_locale.to_string(),
            device_string: device_string.to_string(),
            android_version: android_version.to_string(),
            android_release: android_release.to_string(),
            dpi: dpi.to_string(),
            resolution: resolution.to_string(),
            manufacturer: manufacturer.to_string(),
            brand,
            model: model.to_string(),
            device: device.to_string(),
            cpu: cpu.to_string(),
        })
    }

    /// User-Agent header value the official app would send
    pub fn user_agent(&self) -> String {
        format!(
            "Instagram {} Android ({}; {})",
            self.app_version, self.device_string, self.user_locale
        )
    }

    pub fn device_string(&self) -> &str {
        &self.device_string
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    pub fn user_locale(&self) -> &str {
        &self.user_locale
    }

    /// Android API level (`Build.VERSION.SDK_INT`)
    pub fn android_version(&self) -> &str {
        &self.android_version
    }

    /// Android release (`Build.VERSION.RELEASE`)
    pub fn android_release(&self) -> &str {
        &self.android_release
    }

    pub fn dpi(&self) -> &str {
        &self.dpi
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn cpu(&self) -> &str {
        &self.cpu
    }

    /// ABI list reported in device headers (`Build.SUPPORTED_ABIS`)
    pub fn cpu_abi(&self) -> &'static str {
        CPU_ABI
    }
}
