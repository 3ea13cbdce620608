use super::matcher::{GENDER_MISMATCH_SENTINEL, NO_MATCH_SENTINEL};

/// Renders the instruction template for the image-based variant. The model
/// sees the raw image URL and must verify the person's gender itself, so
/// both sentinels are declared. Same inputs produce a byte-identical prompt.
pub fn build_image_prompt(image_url: &str, allowed_names: &[String], gender: &str) -> String {
    format!(
        r#"You are a STRICT rule-based hairstyle advisor.

RULES (NO EXCEPTIONS):
- Take your time and analyze the gender of the person in the image accurately.
- Suggest ONLY 1 or 2 hairstyles.
- Use ONLY names from the allowed list.
- Copy names EXACTLY from the list.
- Do NOT invent names.
- If no match exists, reply ONLY:
{no_match}
- If the image gender does not match the provided gender, reply ONLY:
{gender_mismatch}

Gender: {gender}

Allowed hairstyles:
{names}

User image:
{image_url}

FORMAT (STRICT):
Hairstyle Name: short reason
"#,
        no_match = NO_MATCH_SENTINEL,
        gender_mismatch = GENDER_MISMATCH_SENTINEL,
        gender = gender,
        names = allowed_names.join(", "),
        image_url = image_url,
    )
}

/// Renders the instruction template for the face-verified variant. The face
/// summary replaces the image URL and the model is forbidden from second-
/// guessing it, so only the no-match sentinel is declared.
pub fn build_face_verified_prompt(
    face_summary: &str,
    allowed_names: &[String],
    gender: &str,
) -> String {
    format!(
        r#"You are a STRICT rule-based hairstyle advisor.

The face described below has already been verified by a face analysis
service. Do NOT question or re-evaluate the face analysis.

RULES (NO EXCEPTIONS):
- Suggest ONLY 1 or 2 hairstyles.
- Use ONLY names from the allowed list.
- Copy names EXACTLY from the list.
- Do NOT invent names.
- If no match exists, reply ONLY:
{no_match}

Gender: {gender}

Allowed hairstyles:
{names}

Face analysis:
{face_summary}

FORMAT (STRICT):
Hairstyle Name: short reason
"#,
        no_match = NO_MATCH_SENTINEL,
        gender = gender,
        names = allowed_names.join(", "),
        face_summary = face_summary,
    )
}
