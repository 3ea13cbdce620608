use super::errors::RecommendationError;
use super::model::{Hairstyle, Suggestion};

/// Maximum number of suggestions returned for a single request.
pub const MAX_SUGGESTIONS: usize = 2;

/// Whole-reply token the model emits when no catalog entry fits.
pub const NO_MATCH_SENTINEL: &str = "NO_MATCH_FOUND";

/// Whole-reply token the model emits when the photographed person's gender
/// contradicts the requested one. Only recognized where the prompt declares it.
pub const GENDER_MISMATCH_SENTINEL: &str = "GENDER_MISMATCH";

/// Where the name/reason separator colon is located within a reply line.
/// The two pipeline variants split differently, which changes the outcome
/// when a reason itself contains a colon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColonSplit {
    First,
    Last,
}

/// Parsing behavior of one pipeline variant.
#[derive(Debug, Clone, Copy)]
pub struct ParsePolicy {
    pub colon_split: ColonSplit,
    pub gender_sentinel: bool,
}

impl ParsePolicy {
    /// Image-prompt variant: first-colon split, both sentinels recognized.
    pub fn image() -> Self {
        Self {
            colon_split: ColonSplit::First,
            gender_sentinel: true,
        }
    }

    /// Face-verified variant: last-colon split, gender mismatch is not a
    /// sentinel because the prompt never declares it.
    pub fn face_verified() -> Self {
        Self {
            colon_split: ColonSplit::Last,
            gender_sentinel: false,
        }
    }
}

/// Parses the model's free-text reply into at most [`MAX_SUGGESTIONS`]
/// suggestions matched against the filtered catalog.
///
/// Lines are processed in reply order. A line is skipped silently when it
/// has no separator colon, when its name is empty, when the name matches no
/// catalog entry (the model may hallucinate or add commentary), or when the
/// matched entry was already suggested. Name matching is case-insensitive
/// and containment-based in both directions; the first catalog entry that
/// satisfies it wins, so nested names ("Bob" / "Long Bob") resolve by
/// catalog order.
pub fn parse_reply(
    reply: &str,
    catalog: &[Hairstyle],
    policy: ParsePolicy,
) -> Result<Vec<Suggestion>, RecommendationError> {
    let reply = reply.trim();

    if reply.eq_ignore_ascii_case(NO_MATCH_SENTINEL) {
        return Err(RecommendationError::NoSuitableHairstyle);
    }
    if policy.gender_sentinel && reply.eq_ignore_ascii_case(GENDER_MISMATCH_SENTINEL) {
        return Err(RecommendationError::GenderMismatch);
    }
    if reply.is_empty() {
        return Err(RecommendationError::EmptyAiResponse);
    }

    let mut suggestions: Vec<Suggestion> = Vec::new();

    for line in reply.lines() {
        if suggestions.len() >= MAX_SUGGESTIONS {
            break;
        }

        let separator = match policy.colon_split {
            ColonSplit::First => line.find(':'),
            ColonSplit::Last => line.rfind(':'),
        };
        let Some(idx) = separator else { continue };
        if idx == 0 {
            continue;
        }

        let candidate = line[..idx].trim().to_lowercase();
        let reason = line[idx + 1..].trim();

        let matched = catalog.iter().find(|style| {
            let salon_name = style.name.to_lowercase();
            candidate == salon_name
                || candidate.contains(&salon_name)
                || salon_name.contains(&candidate)
        });
        let Some(style) = matched else { continue };

        let already_added = suggestions
            .iter()
            .any(|s| s.name.to_lowercase() == style.name.to_lowercase());
        if already_added {
            continue;
        }

        suggestions.push(Suggestion {
            name: style.name.clone(),
            description: reason.to_string(),
            image_url: style.image_url.clone(),
        });
    }

    if suggestions.is_empty() {
        return Err(RecommendationError::NoMatchingHairstyle);
    }

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn style(name: &str) -> Hairstyle {
        Hairstyle {
            id: format!("id-{}", name),
            name: name.to_string(),
            gender_category: "women".to_string(),
            description: String::new(),
            image_url: format!("https://cdn.example.com/{}.jpg", name.to_lowercase()),
        }
    }

    fn catalog() -> Vec<Hairstyle> {
        vec![style("Bob Cut"), style("Fringe"), style("Pixie")]
    }

    #[test]
    fn should_return_no_match_error_for_sentinel_reply() {
        let result = parse_reply("NO_MATCH_FOUND", &catalog(), ParsePolicy::image());

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::NoSuitableHairstyle
        ));
    }

    #[test]
    fn should_match_sentinel_ignoring_case_and_whitespace() {
        let result = parse_reply("  no_match_found \n", &catalog(), ParsePolicy::image());

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::NoSuitableHairstyle
        ));
    }

    #[test]
    fn should_return_gender_mismatch_error_when_sentinel_recognized() {
        let result = parse_reply("GENDER_MISMATCH", &catalog(), ParsePolicy::image());

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::GenderMismatch
        ));
    }

    #[test]
    fn should_not_treat_gender_mismatch_as_sentinel_in_face_verified_policy() {
        // Without the sentinel the token is an ordinary line with no colon,
        // so parsing yields zero suggestions.
        let result = parse_reply("GENDER_MISMATCH", &catalog(), ParsePolicy::face_verified());

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::NoMatchingHairstyle
        ));
    }

    #[test]
    fn should_return_empty_response_error_for_blank_reply() {
        let result = parse_reply("   \n  ", &catalog(), ParsePolicy::image());

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::EmptyAiResponse
        ));
    }

    #[test]
    fn should_match_two_lines_in_reply_order() {
        let reply = "Bob Cut: great for round faces\nFringe: adds volume";

        let suggestions = parse_reply(reply, &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name, "Bob Cut");
        assert_eq!(suggestions[0].description, "great for round faces");
        assert_eq!(
            suggestions[0].image_url,
            "https://cdn.example.com/bob cut.jpg"
        );
        assert_eq!(suggestions[1].name, "Fringe");
        assert_eq!(suggestions[1].description, "adds volume");
    }

    #[test]
    fn should_cap_suggestions_at_two() {
        let reply = "Bob Cut: one\nFringe: two\nPixie: three";

        let suggestions = parse_reply(reply, &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name, "Bob Cut");
        assert_eq!(suggestions[1].name, "Fringe");
    }

    #[test]
    fn should_keep_first_reason_when_model_repeats_a_name() {
        let reply = "Bob Cut: first reason\nBob Cut: second reason";

        let suggestions = parse_reply(reply, &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].description, "first reason");
    }

    #[test]
    fn should_match_names_case_insensitively() {
        let suggestions =
            parse_reply("bob cut: lower-cased", &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions[0].name, "Bob Cut");
    }

    #[test]
    fn should_match_when_candidate_contains_catalog_name() {
        let reply = "A classic Bob Cut style: frames the face";

        let suggestions = parse_reply(reply, &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions[0].name, "Bob Cut");
    }

    #[test]
    fn should_match_when_catalog_name_contains_candidate() {
        let suggestions = parse_reply("Fring: cut short", &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions[0].name, "Fringe");
    }

    #[test]
    fn should_resolve_nested_names_by_catalog_order() {
        let nested = vec![style("Bob"), style("Long Bob")];

        let suggestions =
            parse_reply("Long Bob: shoulder length", &nested, ParsePolicy::image()).unwrap();

        // "Bob" is a substring of the candidate and comes first in the
        // catalog, so it wins over the exact "Long Bob" entry.
        assert_eq!(suggestions[0].name, "Bob");
    }

    #[test]
    fn should_skip_lines_without_colon() {
        let reply = "here are my picks\nBob Cut: classic choice";

        let suggestions = parse_reply(reply, &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Bob Cut");
    }

    #[test]
    fn should_skip_lines_starting_with_colon() {
        let result = parse_reply(":no name here", &catalog(), ParsePolicy::image());

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::NoMatchingHairstyle
        ));
    }

    #[test]
    fn should_skip_hallucinated_names_silently() {
        let reply = "Mullet Supreme: not in catalog\nPixie: sharp look";

        let suggestions = parse_reply(reply, &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Pixie");
    }

    #[test]
    fn should_return_no_matching_error_when_nothing_matches() {
        let result = parse_reply(
            "Mohawk: too wild\nDreadlocks: nope",
            &catalog(),
            ParsePolicy::image(),
        );

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::NoMatchingHairstyle
        ));
    }

    #[test]
    fn should_split_at_first_colon_with_image_policy() {
        let reply = "Bob Cut: works well: frames the jaw";

        let suggestions = parse_reply(reply, &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions[0].name, "Bob Cut");
        assert_eq!(suggestions[0].description, "works well: frames the jaw");
    }

    #[test]
    fn should_split_at_last_colon_with_face_verified_policy() {
        let reply = "Bob Cut: works well: frames the jaw";

        let suggestions = parse_reply(reply, &catalog(), ParsePolicy::face_verified()).unwrap();

        // The name side keeps everything before the last colon; containment
        // still matches it to the catalog entry, but the reason shrinks.
        assert_eq!(suggestions[0].name, "Bob Cut");
        assert_eq!(suggestions[0].description, "frames the jaw");
    }

    #[test]
    fn should_ignore_lines_after_the_cap_without_validating_them() {
        let reply = "Bob Cut: one\nFringe: two\n:::garbage:::";

        let suggestions = parse_reply(reply, &catalog(), ParsePolicy::image()).unwrap();

        assert_eq!(suggestions.len(), 2);
    }

    proptest! {
        #[test]
        fn never_returns_more_than_two_suggestions(reply in ".{0,400}") {
            if let Ok(suggestions) = parse_reply(&reply, &catalog(), ParsePolicy::image()) {
                prop_assert!(suggestions.len() <= MAX_SUGGESTIONS);
                prop_assert!(!suggestions.is_empty());
            }
        }

        #[test]
        fn never_returns_duplicate_names(reply in ".{0,400}") {
            if let Ok(suggestions) = parse_reply(&reply, &catalog(), ParsePolicy::image()) {
                for (i, a) in suggestions.iter().enumerate() {
                    for b in suggestions.iter().skip(i + 1) {
                        prop_assert_ne!(a.name.to_lowercase(), b.name.to_lowercase());
                    }
                }
            }
        }

        #[test]
        fn parsing_is_deterministic(reply in ".{0,400}") {
            let first = parse_reply(&reply, &catalog(), ParsePolicy::image());
            let second = parse_reply(&reply, &catalog(), ParsePolicy::image());
            prop_assert_eq!(format!("{:?}", first), format!("{:?}", second));
        }
    }
}
