/// A hairstyle offered by the salon. Supplied by the caller on every
/// request and never persisted. `name` is what the matcher keys on; the
/// catalog is expected to keep it unique, duplicates fall back to
/// first-match-by-catalog-order.
#[derive(Debug, Clone)]
pub struct Hairstyle {
    pub id: String,
    pub name: String,
    pub gender_category: String,
    pub description: String,
    pub image_url: String,
}

/// A single recommended hairstyle: the catalog's canonical name and image,
/// paired with the AI's free-text reason kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_clone_hairstyle_with_all_fields() {
        let style = Hairstyle {
            id: "h-1".to_string(),
            name: "Bob Cut".to_string(),
            gender_category: "women".to_string(),
            description: "Chin-length cut".to_string(),
            image_url: "https://cdn.example.com/bob.jpg".to_string(),
        };

        let cloned = style.clone();

        assert_eq!(cloned.id, "h-1");
        assert_eq!(cloned.name, "Bob Cut");
        assert_eq!(cloned.gender_category, "women");
        assert_eq!(cloned.image_url, "https://cdn.example.com/bob.jpg");
    }

    #[test]
    fn should_compare_suggestions_for_equality() {
        let a = Suggestion {
            name: "Fringe".to_string(),
            description: "adds volume".to_string(),
            image_url: "https://cdn.example.com/fringe.jpg".to_string(),
        };
        let b = a.clone();

        assert_eq!(a, b);
    }
}
