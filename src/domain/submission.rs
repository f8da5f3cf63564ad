use serde_json::Value;

/// Required keys, in the order they must be reported back when missing.
pub const REQUIRED_FIELDS: [&str; 6] = ["name", "email", "age", "gender", "country", "occupation"];

/// A validated submission, ready to be appended to the store.
///
/// `parse` is the only way to build one, so a `Submission` in hand means every
/// required field was present and well-shaped.
#[derive(Debug)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub gender: String,
    pub country: String,
    pub occupation: String,
    pub interests: Vec<String>,
    pub bio: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// One or more required fields were absent or empty. Always lists the
    /// fields in `REQUIRED_FIELDS` order, not the order of absence.
    #[error("{}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("cannot convert age value {0:?} to an integer")]
    InvalidAge(String),
    #[error("invalid {field} value: expected {expected}")]
    WrongShape {
        field: &'static str,
        expected: &'static str,
    },
}

impl Submission {
    /// Validate a raw JSON object against the schema in one pass.
    ///
    /// Missing-or-empty required fields are collected all together and
    /// reported as `MissingFields`; shape problems on fields that *are*
    /// present (a non-numeric `age`, a non-string `name`) surface as the
    /// other variants, which callers treat as processing errors.
    pub fn parse(data: &Value) -> Result<Self, SubmissionError> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| data.get(**field).map_or(true, is_falsy))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SubmissionError::MissingFields(missing));
        }

        Ok(Self {
            name: required_text(data, "name")?,
            email: required_text(data, "email")?,
            age: coerce_age(&data["age"])?,
            gender: required_text(data, "gender")?,
            country: required_text(data, "country")?,
            occupation: required_text(data, "occupation")?,
            interests: optional_interests(data)?,
            bio: optional_bio(data)?,
        })
    }
}

/// Mirrors the truthiness test the API has always applied to required fields:
/// null, `""`, `0`, `false` and empty collections all count as "not provided".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn required_text(data: &Value, field: &'static str) -> Result<String, SubmissionError> {
    // The caller already checked presence, so indexing cannot panic
    data[field]
        .as_str()
        .map(|s| s.to_string())
        .ok_or(SubmissionError::WrongShape {
            field,
            expected: "a string",
        })
}

/// `age` arrives either as a JSON number or as a numeric string (HTML forms
/// send everything as text). Anything else fails the conversion.
fn coerce_age(value: &Value) -> Result<i64, SubmissionError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| SubmissionError::InvalidAge(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| SubmissionError::InvalidAge(s.clone())),
        _ => Err(SubmissionError::WrongShape {
            field: "age",
            expected: "a number or a numeric string",
        }),
    }
}

fn optional_interests(data: &Value) -> Result<Vec<String>, SubmissionError> {
    match data.get("interests") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(|s| s.to_string())
                    .ok_or(SubmissionError::WrongShape {
                        field: "interests",
                        expected: "an array of strings",
                    })
            })
            .collect(),
        Some(_) => Err(SubmissionError::WrongShape {
            field: "interests",
            expected: "an array of strings",
        }),
    }
}

fn optional_bio(data: &Value) -> Result<String, SubmissionError> {
    match data.get("bio") {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SubmissionError::WrongShape {
            field: "bio",
            expected: "a string",
        }),
    }
}
