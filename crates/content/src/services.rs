use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One entry on the services page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub title: String,
    pub description: String,
    /// Icon name resolved by the frontend's icon helper.
    pub icon: String,
    pub offerings: Vec<String>,
}

impl ServiceRecord {
    fn new(title: &str, description: &str, icon: &str, offerings: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            offerings: offerings.iter().map(|o| o.to_string()).collect(),
        }
    }
}

static SERVICES: Lazy<Vec<ServiceRecord>> = Lazy::new(|| {
    vec![
        ServiceRecord::new(
            "Web Design & Development",
            "Fast, accessible sites that stay easy to maintain long after launch.",
            "globe",
            &[
                "Marketing sites and landing pages",
                "Design systems and component libraries",
                "Performance and accessibility audits",
            ],
        ),
        ServiceRecord::new(
            "Brand Identity",
            "Identities built from strategy, not trend: logotype, voice, and the rules that keep them coherent.",
            "pen-tool",
            &[
                "Naming and visual identity",
                "Packaging and print collateral",
                "Brand guidelines",
            ],
        ),
        ServiceRecord::new(
            "Mobile Applications",
            "Native-feeling apps for iOS and Android, designed and shipped as one team.",
            "smartphone",
            &[
                "Product design and prototyping",
                "Cross-platform development",
                "App store launch support",
            ],
        ),
        ServiceRecord::new(
            "Content & Strategy",
            "Editorial planning and copy that give the rest of the work something to say.",
            "layers",
            &[
                "Content strategy and information architecture",
                "Copywriting",
                "Photography art direction",
            ],
        ),
    ]
});

/// All services, in display order.
pub fn all() -> &'static [ServiceRecord] {
    &SERVICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_non_empty() {
        assert!(!all().is_empty());
    }

    #[test]
    fn test_offerings_present() {
        for service in all() {
            assert!(!service.offerings.is_empty(), "{}", service.title);
        }
    }
}
