// Field validation rules and the submit-gating state they drive. A rule is
// a pure check returning its configured message on failure; validators run
// their rules in order and stop at the first failure. Message texts are
// injected so hosts can localize them.

use regex::Regex;

pub type Rule = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

// Ordered chain of field rules.
#[derive(Default)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Validator {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    // Appends a rule to the end of the chain.
    pub fn with_rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    // Runs the rules in order and returns the first failure message.
    pub fn validate(&self, value: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule(value))
    }
}

pub fn non_empty(message: impl Into<String>) -> impl Fn(&str) -> Option<String> + Send + Sync {
    let message = message.into();
    move |value: &str| {
        if value.is_empty() {
            Some(message.clone())
        } else {
            None
        }
    }
}

pub fn length_within(
    min: usize,
    max: usize,
    message: impl Into<String>,
) -> impl Fn(&str) -> Option<String> + Send + Sync {
    let message = message.into();
    move |value: &str| {
        let len = value.chars().count();
        if (min..=max).contains(&len) {
            None
        } else {
            Some(message.clone())
        }
    }
}

pub fn email_format(message: impl Into<String>) -> impl Fn(&str) -> Option<String> + Send + Sync {
    let message = message.into();
    let pattern = Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid");
    move |value: &str| {
        if pattern.is_match(value) {
            None
        } else {
            Some(message.clone())
        }
    }
}

// Email field rules: presence first, then format.
pub fn email_validator(
    empty_message: impl Into<String> + 'static,
    invalid_message: impl Into<String> + 'static,
) -> Validator {
    Validator::new()
        .with_rule(non_empty(empty_message))
        .with_rule(email_format(invalid_message))
}

// Password field rules: presence first, then length bounds.
pub fn password_validator(
    min_length: usize,
    max_length: usize,
    empty_message: impl Into<String> + 'static,
    invalid_length_message: impl Into<String> + 'static,
) -> Validator {
    Validator::new()
        .with_rule(non_empty(empty_message))
        .with_rule(length_within(min_length, max_length, invalid_length_message))
}

// Mutable state of a single input field.
#[derive(Debug, Default)]
pub struct FieldState {
    value: String,
    error: Option<String>,
    focus_requested: bool,
}

impl FieldState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
            error: None,
            focus_requested: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    // Editing clears the stored error; re-validation waits for the next
    // explicit validate call.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.value != value {
            self.error = None;
        }
        self.value = value;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // Requests focus when an error is showing and reports whether it did.
    pub fn focus_if_error(&mut self) -> bool {
        if self.error.is_some() {
            self.focus_requested = true;
            return true;
        }
        false
    }

    // Consumes a pending focus request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

// Couples one field's state with its rule chain.
pub struct FieldValidator {
    pub state: FieldState,
    validator: Validator,
}

impl FieldValidator {
    pub fn new(state: FieldState, validator: Validator) -> Self {
        Self { state, validator }
    }

    // Runs the chain against the current value, stores the outcome on the
    // field and reports whether it passed.
    pub fn validate(&mut self) -> bool {
        let error = self.validator.validate(&self.state.value);
        let passed = error.is_none();
        self.state.error = error;
        passed
    }
}
