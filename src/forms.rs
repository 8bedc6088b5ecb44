use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.0.push(FieldError { field, message: "This field is required." });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn for_field(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn into_result<T>(self, ok: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(ok) } else { Err(self) }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddForm {
    #[serde(default)]
    pub title: String,
}

impl AddForm {
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("title", &self.title);
        errors.into_result(self.title.trim().to_string())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

/// Rating is still raw text here; parsing it is the caller's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidEdit {
    pub rating: String,
    pub review: String,
}

impl EditForm {
    pub fn validate(&self) -> Result<ValidEdit, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("rating", &self.rating);
        errors.require("review", &self.review);
        errors.into_result(ValidEdit {
            rating: self.rating.trim().to_string(),
            review: self.review.clone(),
        })
    }
}
