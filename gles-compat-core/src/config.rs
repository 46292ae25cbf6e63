/// Tunables for the shim.
///
/// The defaults match what mobile applications expect; hosts with many
/// concurrent render threads may want a larger registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    /// Number of registry entries kept in the bounded, system-wide slot set.
    ///
    /// Entries evicted from it remain reachable through the per-thread
    /// fallback map. Zero keeps every entry in the fallback map.
    pub registry_slots: usize,

    /// Attribute indices below this value use the emulator's direct array;
    /// larger indices go to its overflow map.
    pub direct_attribute_slots: usize,

    /// Rewrite ES shader sources for legacy desktop GLSL dialects.
    pub adapt_shaders: bool,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            registry_slots: 4,
            direct_attribute_slots: 16,
            adapt_shaders: true,
        }
    }
}

pub const ENV_REGISTRY_SLOTS: &str = "GLES_COMPAT_REGISTRY_SLOTS";
pub const ENV_DIRECT_ATTRIBUTES: &str = "GLES_COMPAT_DIRECT_ATTRIBUTES";
pub const ENV_ADAPT_SHADERS: &str = "GLES_COMPAT_ADAPT_SHADERS";

impl ShimConfig {
    /// Defaults overridden by `GLES_COMPAT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key.
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_REGISTRY_SLOTS) {
            match raw.trim().parse() {
                Ok(slots) => config.registry_slots = slots,
                Err(_) => log::warn!("ignoring {ENV_REGISTRY_SLOTS}={raw:?}: not a count"),
            }
        }

        if let Some(raw) = lookup(ENV_DIRECT_ATTRIBUTES) {
            match raw.trim().parse() {
                Ok(slots) => config.direct_attribute_slots = slots,
                Err(_) => log::warn!("ignoring {ENV_DIRECT_ATTRIBUTES}={raw:?}: not a count"),
            }
        }

        if let Some(raw) = lookup(ENV_ADAPT_SHADERS) {
            match parse_flag(&raw) {
                Some(flag) => config.adapt_shaders = flag,
                None => log::warn!("ignoring {ENV_ADAPT_SHADERS}={raw:?}: not a boolean"),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lookup_yields_defaults() {
        assert_eq!(ShimConfig::from_lookup(|_| None), ShimConfig::default());
    }

    #[test]
    fn lookup_overrides_each_field() {
        let config = ShimConfig::from_lookup(|key| match key {
            ENV_REGISTRY_SLOTS => Some("8".into()),
            ENV_DIRECT_ATTRIBUTES => Some(" 32 ".into()),
            ENV_ADAPT_SHADERS => Some("off".into()),
            _ => None,
        });

        assert_eq!(config.registry_slots, 8);
        assert_eq!(config.direct_attribute_slots, 32);
        assert!(!config.adapt_shaders);
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let config = ShimConfig::from_lookup(|key| match key {
            ENV_REGISTRY_SLOTS => Some("many".into()),
            ENV_ADAPT_SHADERS => Some("maybe".into()),
            _ => None,
        });

        assert_eq!(config, ShimConfig::default());
    }
}
