use std::sync::LazyLock;

use regex::Regex;

use super::rule::Rule;

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_EMAIL_LENGTH: usize = 32;
pub const MAX_PASSWORD_LENGTH: usize = 32;
pub const MAX_WEIGHT_LENGTH: usize = 3;
pub const MIN_WEIGHT_LENGTH: usize = 2;
pub const MAX_GOAL_LENGTH: usize = 1000;

/// Letters, with single spaces allowed between words.
pub static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+( [a-zA-Z]+)*$").expect("name pattern compiles"));

/// `local@domain.tld`: local part and domain start with a letter, tld is 2-4 letters.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*@[a-zA-Z][a-zA-Z0-9]*\.[a-zA-Z]{2,4}$")
        .expect("email pattern compiles")
});

/// Alphanumerics plus `!#$%&()*+,./:;<=>?@[]^_{|}~`.
pub static PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$%\&()*+,./:;<=>?@\[\]^_{|}\~]+$").expect("password pattern compiles")
});

/// Positive integer without a leading zero.
pub static WEIGHT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").expect("weight pattern compiles"));

/// Feet 1-9 and inches 0-11, written `5'11''`.
pub static HEIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9]'([0-9]|1[01])''$").expect("height pattern compiles")
});

/// Rule catalog shared by every form.
pub struct FieldValidator;

impl FieldValidator {
    /// `label` is the capitalised prefix used in messages, e.g. "First".
    pub fn name(label: &str) -> Rule {
        Rule::new()
            .required(format!("Missing {} name.", label.to_lowercase()))
            .max_length(MAX_NAME_LENGTH, format!("{} name too long.", label))
            .pattern(NAME_PATTERN.clone(), format!("{} name disallowed format.", label))
    }

    pub fn email() -> Rule {
        Rule::new()
            .required("Missing email.")
            .max_length(MAX_EMAIL_LENGTH, "Email too long.")
            .pattern(EMAIL_PATTERN.clone(), "Incorrect email format.")
    }

    pub fn password() -> Rule {
        Rule::new()
            .required("Missing password.")
            .max_length(MAX_PASSWORD_LENGTH, "Password too long.")
            .pattern(PASSWORD_PATTERN.clone(), "Incorrect password format.")
    }

    pub fn password_confirmation(password_field: &str) -> Rule {
        Rule::new().matches_field(password_field, "Passwords don't match.")
    }

    pub fn weight() -> Rule {
        Rule::new()
            .required("Missing weight.")
            .max_length(MAX_WEIGHT_LENGTH, "Weight too long.")
            .min_length(MIN_WEIGHT_LENGTH, "Weight too short.")
            .pattern(WEIGHT_PATTERN.clone(), "Incorrect weight format.")
    }

    pub fn height() -> Rule {
        Rule::new()
            .required("Missing height.")
            .pattern(HEIGHT_PATTERN.clone(), "Incorrect Height format.")
    }

    pub fn goal() -> Rule {
        Rule::new()
            .required("Missing goal.")
            .max_length(MAX_GOAL_LENGTH, "Maximum 1000 characters")
    }

    pub fn date() -> Rule {
        Rule::new().check(|value| value.as_date().is_some(), "Missing date of birth")
    }

    /// A select input: something must be chosen, and it must be one of `options`.
    pub fn selection(options: &[&str], message: &str) -> Rule {
        Rule::new().required(message).one_of(options, message)
    }

    pub fn required(message: &str) -> Rule {
        Rule::new().required(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{FieldValue, FormValues};

    fn check(rule: &Rule, text: &str) -> Option<String> {
        rule.evaluate(&FieldValue::from(text), &FormValues::new())
    }

    #[test]
    fn test_email() {
        let rule = FieldValidator::email();
        assert_eq!(check(&rule, "a@b.com"), None);
        assert_eq!(check(&rule, "a@b").as_deref(), Some("Incorrect email format."));
        assert_eq!(check(&rule, "").as_deref(), Some("Missing email."));
        assert_eq!(check(&rule, "1a@b.com").as_deref(), Some("Incorrect email format."));
        assert_eq!(check(&rule, "a@b.museum").as_deref(), Some("Incorrect email format."));

        let long = "abcdefghijklmnopqrstuvwxyz@example12.com";
        assert_eq!(long.len(), 40);
        assert_eq!(check(&rule, long).as_deref(), Some("Email too long."));
    }

    #[test]
    fn test_names() {
        let first = FieldValidator::name("First");
        assert_eq!(check(&first, "Mary Ann"), None);
        assert_eq!(check(&first, "").as_deref(), Some("Missing first name."));
        assert_eq!(check(&first, &"a".repeat(33)).as_deref(), Some("First name too long."));
        assert_eq!(check(&first, "Mary  Ann").as_deref(), Some("First name disallowed format."));
        assert_eq!(check(&first, " Mary").as_deref(), Some("First name disallowed format."));
        assert_eq!(check(&first, "R2D2").as_deref(), Some("First name disallowed format."));

        let last = FieldValidator::name("Last");
        assert_eq!(check(&last, "").as_deref(), Some("Missing last name."));
        assert_eq!(check(&last, "O'Brien").as_deref(), Some("Last name disallowed format."));
    }

    #[test]
    fn test_password() {
        let rule = FieldValidator::password();
        assert_eq!(check(&rule, "abc123"), None);
        assert_eq!(check(&rule, "P@ss[w]{o}rd~&"), None);
        assert_eq!(check(&rule, "").as_deref(), Some("Missing password."));
        assert_eq!(check(&rule, &"a".repeat(33)).as_deref(), Some("Password too long."));
        assert_eq!(check(&rule, "pass word").as_deref(), Some("Incorrect password format."));
        assert_eq!(check(&rule, "pass-word").as_deref(), Some("Incorrect password format."));
    }

    #[test]
    fn test_password_confirmation() {
        let rule = FieldValidator::password_confirmation("password");
        let values = FormValues::new().with("password", "abc123");

        assert_eq!(
            rule.evaluate(&FieldValue::from("abc124"), &values).as_deref(),
            Some("Passwords don't match.")
        );
        assert_eq!(rule.evaluate(&FieldValue::from("abc123"), &values), None);
    }

    #[test]
    fn test_weight() {
        let rule = FieldValidator::weight();
        assert_eq!(check(&rule, "150"), None);
        assert_eq!(check(&rule, "").as_deref(), Some("Missing weight."));
        assert_eq!(check(&rule, "5").as_deref(), Some("Weight too short."));
        assert_eq!(check(&rule, "1500").as_deref(), Some("Weight too long."));
        assert_eq!(check(&rule, "05").as_deref(), Some("Incorrect weight format."));
        assert_eq!(check(&rule, "1a").as_deref(), Some("Incorrect weight format."));
    }

    #[test]
    fn test_height() {
        let rule = FieldValidator::height();
        assert_eq!(check(&rule, "5'11''"), None);
        assert_eq!(check(&rule, "6'0''"), None);
        assert_eq!(check(&rule, "").as_deref(), Some("Missing height."));
        assert_eq!(check(&rule, "5'12''").as_deref(), Some("Incorrect Height format."));
        assert_eq!(check(&rule, "0'5''").as_deref(), Some("Incorrect Height format."));
        assert_eq!(check(&rule, "x").as_deref(), Some("Incorrect Height format."));
    }

    #[test]
    fn test_goal() {
        let rule = FieldValidator::goal();
        assert_eq!(check(&rule, "Run a marathon"), None);
        assert_eq!(check(&rule, "").as_deref(), Some("Missing goal."));
        assert_eq!(check(&rule, &"g".repeat(1000)), None);
        assert_eq!(check(&rule, &"g".repeat(1001)).as_deref(), Some("Maximum 1000 characters"));
    }

    #[test]
    fn test_date_and_selection() {
        let date = FieldValidator::date();
        assert_eq!(check(&date, "").as_deref(), Some("Missing date of birth"));
        assert_eq!(check(&date, "1990-01-31"), None);

        let gender = FieldValidator::selection(&["male", "female"], "Select a value");
        assert_eq!(check(&gender, "").as_deref(), Some("Select a value"));
        assert_eq!(check(&gender, "male"), None);

        let mood = FieldValidator::required("Missing mood.");
        assert_eq!(check(&mood, "").as_deref(), Some("Missing mood."));
    }
}
