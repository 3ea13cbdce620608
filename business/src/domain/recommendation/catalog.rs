use super::model::Hairstyle;

/// How the requested gender token is matched against catalog entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenderMatchMode {
    /// Only the known segments `men`, `women` and `kid` are accepted;
    /// any other token matches nothing.
    Segment,
    /// Case-insensitive equality with each entry's `gender_category`,
    /// whatever the token.
    Exact,
}

/// Selects the catalog entries for the requested gender, preserving the
/// caller's order. An empty result halts the pipeline before any external
/// call is made.
pub fn filter_by_gender(
    catalog: &[Hairstyle],
    gender: &str,
    mode: GenderMatchMode,
) -> Vec<Hairstyle> {
    let requested = gender.trim().to_lowercase();

    catalog
        .iter()
        .filter(|style| {
            let category = style.gender_category.trim().to_lowercase();
            match mode {
                GenderMatchMode::Segment => {
                    matches!(requested.as_str(), "men" | "women" | "kid") && category == requested
                }
                GenderMatchMode::Exact => category == requested,
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(name: &str, category: &str) -> Hairstyle {
        Hairstyle {
            id: format!("id-{}", name),
            name: name.to_string(),
            gender_category: category.to_string(),
            description: String::new(),
            image_url: format!("https://cdn.example.com/{}.jpg", name),
        }
    }

    #[test]
    fn should_keep_only_entries_for_requested_segment() {
        let catalog = vec![
            style("Buzz Cut", "men"),
            style("Bob Cut", "women"),
            style("Crew Cut", "men"),
        ];

        let filtered = filter_by_gender(&catalog, "men", GenderMatchMode::Segment);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Buzz Cut");
        assert_eq!(filtered[1].name, "Crew Cut");
    }

    #[test]
    fn should_match_segment_case_insensitively() {
        let catalog = vec![style("Bob Cut", "Women")];

        let filtered = filter_by_gender(&catalog, "WOMEN", GenderMatchMode::Segment);

        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn should_reject_unknown_segment_token() {
        let catalog = vec![style("Bob Cut", "unisex")];

        let filtered = filter_by_gender(&catalog, "unisex", GenderMatchMode::Segment);

        assert!(filtered.is_empty());
    }

    #[test]
    fn should_accept_any_token_in_exact_mode() {
        let catalog = vec![style("Shag", "unisex"), style("Bob Cut", "women")];

        let filtered = filter_by_gender(&catalog, "Unisex", GenderMatchMode::Exact);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Shag");
    }

    #[test]
    fn should_return_empty_when_nothing_matches() {
        let catalog = vec![style("Bob Cut", "women")];

        let filtered = filter_by_gender(&catalog, "kid", GenderMatchMode::Segment);

        assert!(filtered.is_empty());
    }

    #[test]
    fn should_preserve_catalog_order() {
        let catalog = vec![
            style("Pixie", "women"),
            style("Bob Cut", "women"),
            style("Long Layers", "women"),
        ];

        let filtered = filter_by_gender(&catalog, "women", GenderMatchMode::Exact);

        let names: Vec<&str> = filtered.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Pixie", "Bob Cut", "Long Layers"]);
    }
}
