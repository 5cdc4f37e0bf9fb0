use once_cell::sync::Lazy;
use regex::Regex;

static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static SPECIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

#[derive(PartialEq, Debug, Clone)]
pub struct Password(String);

impl Password {
    /// Accepts passwords of ≥8 chars with at least one uppercase and one
    /// special character.
    pub fn parse(password: String) -> Result<Password, String> {
        let valid = password.len() >= 8
            && UPPER_RE.is_match(&password)
            && SPECIAL_RE.is_match(&password);
        match valid {
            true => Ok(Password(password)),
            false => Err("Password is not valid, must be at least 8 characters long, contain at least one uppercase letter and one special character.".to_owned()),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
