use std::path::PathBuf;

use anyhow::Context;

/// Where to listen and what to serve. Read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// built SPA bundle, must contain `index.html`
    pub dist: PathBuf,
    pub assets: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            dist: PathBuf::from("../dist"),
            assets: PathBuf::from("../assets"),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut cfg = Self::default();

        if let Some(host) = get("SITE_HOST") {
            cfg.host = host;
        }
        if let Some(port) = get("SITE_PORT") {
            cfg.port = port
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT={port:?} is not a port number"))?;
        }
        if let Some(dist) = get("SITE_DIST") {
            cfg.dist = dist.into();
        }
        if let Some(assets) = get("SITE_ASSETS") {
            cfg.assets = assets.into();
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn overrides_from_env() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST", "/srv/dist"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist, PathBuf::from("/srv/dist"));
        assert_eq!(cfg.assets, PathBuf::from("../assets"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));
    }
}
