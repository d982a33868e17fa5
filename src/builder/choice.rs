//! Choices and the kind-specific parameters of string/integer/number options.

use crate::types::{CommandOptionChoice, CommandOptionChoiceValue};

/// Most choices Discord accepts on one option.
pub const MAX_CHOICES: usize = 25;

/// A label/value pair.
///
/// Bare scalars convert through `From`: strings keep themselves as the label
/// and get a normalized value (spaces to underscores, lowercased), numbers
/// use their decimal form as the label and themselves as the value.
///
/// ```
/// use slash_forge::builder::Choice;
///
/// let choice = Choice::from("Big Red");
/// assert_eq!(choice.name, "Big Red");
/// assert_eq!(choice.value, "big_red");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Choice<T> {
    pub name: String,
    pub value: T,
}

impl<T> Choice<T> {
    /// A pre-built pair, used exactly as given.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl From<&str> for Choice<String> {
    fn from(label: &str) -> Self {
        Self {
            value: label.replace(' ', "_").to_lowercase(),
            name: label.to_owned(),
        }
    }
}

impl From<String> for Choice<String> {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<i64> for Choice<i64> {
    fn from(value: i64) -> Self {
        Self::new(value.to_string(), value)
    }
}

impl From<f64> for Choice<f64> {
    fn from(value: f64) -> Self {
        Self::new(value.to_string(), value)
    }
}

impl From<Choice<String>> for CommandOptionChoice {
    fn from(choice: Choice<String>) -> Self {
        Self {
            name: choice.name,
            value: CommandOptionChoiceValue::String(choice.value),
        }
    }
}

impl From<Choice<i64>> for CommandOptionChoice {
    fn from(choice: Choice<i64>) -> Self {
        Self {
            name: choice.name,
            value: CommandOptionChoiceValue::Integer(choice.value),
        }
    }
}

impl From<Choice<f64>> for CommandOptionChoice {
    fn from(choice: Choice<f64>) -> Self {
        Self {
            name: choice.name,
            value: CommandOptionChoiceValue::Number(choice.value),
        }
    }
}

// ---------------------------------------------------------------------------
// Option parameters
// ---------------------------------------------------------------------------

/// Extra settings of a string option.
///
/// ```
/// use slash_forge::builder::StringOptionParams;
///
/// let params = StringOptionParams::new()
///     .choices(["Everyone", "Admins"])
///     .max_length(32);
/// assert_eq!(params.choices.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringOptionParams {
    /// Ignored (forced to `false`) when `choices` is non-empty.
    pub autocomplete: Option<bool>,
    pub choices: Option<Vec<Choice<String>>>,
    pub min_length: Option<u16>,
    pub max_length: Option<u16>,
}

impl StringOptionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }

    pub fn choices<I, C>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice<String>>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn min_length(mut self, min_length: u16) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: u16) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Extra settings of an integer or number option.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericOptionParams<T> {
    /// Ignored (forced to `false`) when `choices` is non-empty.
    pub autocomplete: Option<bool>,
    pub choices: Option<Vec<Choice<T>>>,
    pub min_value: Option<T>,
    pub max_value: Option<T>,
}

/// Settings of an integer option.
pub type IntegerOptionParams = NumericOptionParams<i64>;

/// Settings of a number option.
pub type NumberOptionParams = NumericOptionParams<f64>;

impl<T> NumericOptionParams<T> {
    pub fn new() -> Self {
        Self {
            autocomplete: None,
            choices: None,
            min_value: None,
            max_value: None,
        }
    }

    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }

    pub fn choices<I, C>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice<T>>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn min_value(mut self, min_value: T) -> Self {
        self.min_value = Some(min_value);
        self
    }

    pub fn max_value(mut self, max_value: T) -> Self {
        self.max_value = Some(max_value);
        self
    }
}
