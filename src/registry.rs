use crate::common::Provider;
use crate::googledomains;

/// Builds a provider from the top level configuration, or None when the
/// configuration carries no section for it.
pub type Constructor = fn(&crate::Config) -> Option<Box<dyn Provider>>;

pub const PROVIDERS: &[(&str, Constructor)] =
    &[(googledomains::PROVIDER_ID, google_domains)];

fn google_domains(config: &crate::Config) -> Option<Box<dyn Provider>> {
    let cfg = config.google_domains.clone()?;
    Some(Box::new(googledomains::GoogleDomains::from(cfg)))
}

pub fn lookup(id: &str) -> Option<Constructor> {
    PROVIDERS
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, constructor)| *constructor)
}
