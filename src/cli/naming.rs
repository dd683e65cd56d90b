use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "brisk", "calm", "clever", "eager", "gentle", "keen", "lively", "mellow", "nimble", "swift",
];

const NOUNS: &[&str] = &[
    "cove", "delta", "harbor", "meadow", "otter", "quay", "reef", "ridge", "summit", "trail",
];

/// Generate a fresh app name: adjective-noun plus a hex tail so two projects
/// initialised on the same machine never collide.
pub fn generate_app_name() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{}-{}-{:04x}", adjective, noun, rng.gen_range(0u32..0x10000))
}

pub fn resource_group_name(app: &str) -> String {
    format!("{}-rg", app)
}

pub fn insights_name(app: &str) -> String {
    format!("{}-insights", app)
}

/// ARM deployment names must be unique per attempt so a retry never collides
/// with the record of a prior failed deployment in the same resource group.
pub fn deployment_name(resource_group: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..12)
        .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0'))
        .collect();
    format!("{}-{}", resource_group, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_names() {
        assert_eq!(resource_group_name("demo"), "demo-rg");
        assert_eq!(insights_name("demo"), "demo-insights");
    }

    #[test]
    fn test_generated_app_name_shape() {
        let name = generate_app_name();
        let parts: Vec<&str> = name.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(ADJECTIVES.contains(&parts[0]));
        assert!(NOUNS.contains(&parts[1]));
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_deployment_names_are_unique_per_attempt() {
        let a = deployment_name("demo-rg");
        let b = deployment_name("demo-rg");
        assert!(a.starts_with("demo-rg-"));
        assert!(b.starts_with("demo-rg-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_deployment_name_suffix_is_hex() {
        let name = deployment_name("demo-rg");
        let suffix = name.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 12);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
