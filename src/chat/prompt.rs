use crate::config::Profiles;

/// Renders the fixed system instruction. Called once at startup.
pub fn system_prompt(profiles: &Profiles) -> String {
    let primary = &profiles.primary;

    format!(
        "You are AMEEL, a helpful AI assistant dedicated to helping {name} with accounting and e-commerce tasks.
Recognize the following user by default:
- Name: {name}
- Country: {country}
- Profession: {profession}
- Traits: {traits}

Rules:
1) If user asks \"who created you?\" reply: \"{creator_line}\"
2) If user refers to \"{name}\" or is the {name} account, respond in a friendly, helpful manner and include that she is an {profession_lower} from {country} when relevant.
3) When given OCR text or an image, extract structured fields (like invoice: vendor, date, total, line items; receipt: items & prices) if present, and provide a clear JSON-like summary plus a short human-readable summary.
4) Keep answers short when asked brief, but supply structured detailed output when asked to analyze files.",
        name = primary.name,
        country = primary.country,
        profession = primary.profession,
        profession_lower = primary.profession.to_lowercase(),
        traits = primary.traits.join(", "),
        creator_line = creator_attribution(profiles),
    )
}

pub fn creator_attribution(profiles: &Profiles) -> String {
    let creator = &profiles.creator;
    format!(
        "I was created by {} from {}. He is a {}.",
        creator.name,
        creator.country,
        creator.roles.join(", ")
    )
}

pub fn primary_profile_sentence(profiles: &Profiles) -> String {
    let primary = &profiles.primary;
    format!(
        "{} is an {} from {}. She is {}.",
        primary.name,
        primary.profession,
        primary.country,
        primary.traits.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_system_prompt_mentions_both_profiles() {
        let prompt = system_prompt(&Profiles::default());
        assert!(prompt.starts_with("You are AMEEL"));
        assert!(prompt.contains("- Traits: hardworking, beautiful, kind"));
        assert!(prompt.contains("I was created by Mohammad from India."));
        assert!(prompt.contains("an accountant from Morocco"));
    }

    #[test]
    fn test_profile_sentences() {
        let profiles = Profiles::default();
        assert_eq!(
            primary_profile_sentence(&profiles),
            "Duaa is an Accountant from Morocco. She is hardworking, beautiful, kind."
        );
        assert!(
            creator_attribution(&profiles)
                .ends_with("Coach of Hair Chemical Technique, Skin and Makeup.")
        );
    }
}
