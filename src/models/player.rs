use std::fmt;

pub const NAME_MIN_LENGTH: usize = 2;
pub const AGE_MIN: u8 = 1;
pub const AGE_MAX: u8 = 120;

/// Rejected player form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name or age was left blank.
    MissingField,
    /// Name is shorter than two characters.
    NameTooShort,
    /// Age is not a whole number.
    AgeNotNumber,
    /// Age is outside 1-120.
    AgeOutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::MissingField => "Please enter your name and age!",
            ValidationError::NameTooShort => "Please enter your full name.",
            ValidationError::AgeNotNumber => "Your age must be a number!",
            ValidationError::AgeOutOfRange => "Please enter a valid age (1-120)!",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

/// How long the player has been watching the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchDuration {
    #[default]
    LessThanOneYear,
    OneToTwoYears,
    TwoPlusYears,
}

impl WatchDuration {
    const ALL: [WatchDuration; 3] = [
        WatchDuration::LessThanOneYear,
        WatchDuration::OneToTwoYears,
        WatchDuration::TwoPlusYears,
    ];

    pub fn all() -> &'static [WatchDuration] {
        &Self::ALL
    }

    pub fn label(self) -> &'static str {
        match self {
            WatchDuration::LessThanOneYear => "<1 year",
            WatchDuration::OneToTwoYears => "1-2 years",
            WatchDuration::TwoPlusYears => "2+ years",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|d| *d == self).unwrap_or(0)
    }

    /// Next bucket, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous bucket, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for WatchDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn validate_age(age: u32) -> Result<u8, ValidationError> {
    u8::try_from(age)
        .ok()
        .filter(|a| (AGE_MIN..=AGE_MAX).contains(a))
        .ok_or(ValidationError::AgeOutOfRange)
}

/// Validated identity of the player taking the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    name: String,
    age: u8,
    watch_duration: WatchDuration,
}

impl PlayerProfile {
    pub fn new(
        name: &str,
        age: u32,
        watch_duration: WatchDuration,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if name.chars().count() < NAME_MIN_LENGTH {
            return Err(ValidationError::NameTooShort);
        }
        let age = validate_age(age)?;

        Ok(Self {
            name: name.to_string(),
            age,
            watch_duration,
        })
    }

    /// Validate raw form text. Blank fields are reported first, then the age,
    /// then the name length.
    pub fn parse(
        name: &str,
        age_text: &str,
        watch_duration: WatchDuration,
    ) -> Result<Self, ValidationError> {
        let age_text = age_text.trim();
        if name.trim().is_empty() || age_text.is_empty() {
            return Err(ValidationError::MissingField);
        }

        // Negative numbers are numbers, just not valid ages.
        let age: i64 = age_text
            .parse()
            .map_err(|_| ValidationError::AgeNotNumber)?;
        let age = u32::try_from(age).map_err(|_| ValidationError::AgeOutOfRange)?;
        validate_age(age)?;

        Self::new(name, age, watch_duration)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn watch_duration(&self) -> WatchDuration {
        self.watch_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_profile() {
        let p = PlayerProfile::parse("  Alli ", "21", WatchDuration::TwoPlusYears).unwrap();
        assert_eq!(p.name(), "Alli");
        assert_eq!(p.age(), 21);
        assert_eq!(p.watch_duration().label(), "2+ years");
    }

    #[test]
    fn test_parse_rejections() {
        let d = WatchDuration::default();
        assert_eq!(PlayerProfile::parse("", "21", d), Err(ValidationError::MissingField));
        assert_eq!(PlayerProfile::parse("Alli", " ", d), Err(ValidationError::MissingField));
        assert_eq!(PlayerProfile::parse("Alli", "abc", d), Err(ValidationError::AgeNotNumber));
        assert_eq!(PlayerProfile::parse("Alli", "0", d), Err(ValidationError::AgeOutOfRange));
        assert_eq!(PlayerProfile::parse("Alli", "-4", d), Err(ValidationError::AgeOutOfRange));
        assert_eq!(PlayerProfile::parse("Alli", "121", d), Err(ValidationError::AgeOutOfRange));
        assert_eq!(PlayerProfile::parse("A", "21", d), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_parse_reports_age_before_name() {
        let d = WatchDuration::default();
        assert_eq!(PlayerProfile::parse("A", "0", d), Err(ValidationError::AgeOutOfRange));
        assert_eq!(PlayerProfile::parse("A", "200", d), Err(ValidationError::AgeOutOfRange));
        assert_eq!(PlayerProfile::parse("A", "x", d), Err(ValidationError::AgeNotNumber));
        assert_eq!(PlayerProfile::parse("A", "30", d), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_age_bounds_inclusive() {
        let d = WatchDuration::default();
        assert!(PlayerProfile::new("Al", 1, d).is_ok());
        assert!(PlayerProfile::new("Al", 120, d).is_ok());
        assert!(PlayerProfile::new("Al", 300, d).is_err());
    }

    #[test]
    fn test_watch_duration_cycles() {
        let first = WatchDuration::LessThanOneYear;
        assert_eq!(first.next(), WatchDuration::OneToTwoYears);
        assert_eq!(first.previous(), WatchDuration::TwoPlusYears);
        assert_eq!(first.next().next().next(), first);
        assert_eq!(WatchDuration::all().len(), 3);
    }
}
