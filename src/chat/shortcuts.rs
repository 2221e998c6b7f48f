use super::prompt::{creator_attribution, primary_profile_sentence};
use crate::config::Profiles;

type Matcher = Box<dyn Fn(&str) -> bool + Send + Sync>;

struct Rule {
    name: &'static str,
    matches: Matcher,
    response: String,
}

/// Fixed questions answered locally, evaluated top-down, first match wins.
pub struct Shortcuts {
    rules: Vec<Rule>,
}

impl Shortcuts {
    pub fn new(profiles: &Profiles) -> Self {
        let primary_name = profiles.primary.name.to_lowercase();
        let who_is = format!("who is {primary_name}");

        let rules = vec![
            Rule {
                name: "creator",
                matches: Box::new(|text: &str| text.contains("who created you")),
                response: creator_attribution(profiles),
            },
            Rule {
                name: "primary_profile",
                matches: Box::new(move |text: &str| {
                    text.contains(&who_is) || text.trim() == primary_name
                }),
                response: primary_profile_sentence(profiles),
            },
        ];

        Self { rules }
    }

    /// Returns the rule name and canned reply when `input` hits a shortcut.
    pub fn answer(&self, input: &str) -> Option<(&'static str, &str)> {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| (rule.matches)(lowered.as_str()))
            .map(|rule| (rule.name, rule.response.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const CREATOR: &str = "I was created by Mohammad from India. He is a Graphic Designer, Programmer, Software Developer, Social Media Manager, Coach of Hair Chemical Technique, Skin and Makeup.";
    const DUAA: &str = "Duaa is an Accountant from Morocco. She is hardworking, beautiful, kind.";

    #[rstest]
    #[case("Who Created You?", CREATOR)]
    #[case("hey, WHO CREATED YOU", CREATOR)]
    #[case("who is duaa?", DUAA)]
    #[case("duaa", DUAA)]
    #[case("  DUAA \n", DUAA)]
    fn test_shortcut_matches(#[case] input: &str, #[case] expected: &str) {
        let shortcuts = Shortcuts::new(&Profiles::default());
        let (_, reply) = shortcuts.answer(input).unwrap();
        assert_eq!(reply, expected);
    }

    #[rstest]
    #[case("hello")]
    #[case("duaa's invoices")]
    #[case("who made you")]
    fn test_shortcut_misses(#[case] input: &str) {
        let shortcuts = Shortcuts::new(&Profiles::default());
        assert!(shortcuts.answer(input).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let shortcuts = Shortcuts::new(&Profiles::default());
        let (name, _) = shortcuts.answer("who created you and who is duaa").unwrap();
        assert_eq!(name, "creator");
    }
}
