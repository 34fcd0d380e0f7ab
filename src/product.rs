use serde::Serialize;

/// One of the three inputs of the create-product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Size,
    Type,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Size, Field::Type];

    /// DOM id of the input, which is also its key in the JSON body
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Size => "size",
            Field::Type => "type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Electronic,
    Furniture,
    Clothing,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [
        ProductType::Electronic,
        ProductType::Furniture,
        ProductType::Clothing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Electronic => "electronic",
            ProductType::Furniture => "furniture",
            ProductType::Clothing => "clothing",
        }
    }
}

/// Current contents of the form, sent as-is to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Size => &self.size,
            Field::Type => &self.kind,
        }
    }
}

pub fn required_message(field: Field) -> String {
    format!("The {} is required", field.id())
}

/// A field is invalid iff its raw value is empty. Whitespace counts as a value.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    value.is_empty().then(|| required_message(field))
}

/// Inline error per field; `None` means the field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    name: Option<String>,
    size: Option<String>,
    kind: Option<String>,
}

impl FormErrors {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Size => &mut self.size,
            Field::Type => &mut self.kind,
        }
    }

    /// Recompute a single field, as done when it loses focus.
    pub fn check(&mut self, field: Field, value: &str) {
        *self.slot(field) = validate_field(field, value);
    }

    /// Recompute every field, as done on a submit attempt.
    pub fn validate_all(values: &FormValues) -> FormErrors {
        let mut errors = FormErrors::default();
        for field in Field::ALL {
            errors.check(field, values.get(field));
        }
        errors
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Size => self.size.as_deref(),
            Field::Type => self.kind.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.message(*field).is_none())
    }
}
