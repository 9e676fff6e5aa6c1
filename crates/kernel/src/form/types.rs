//! Form and form element types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A complete form definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    /// Unique form identifier (e.g., "article").
    pub form_id: String,

    /// Unique build ID for this form instance.
    pub form_build_id: String,

    /// Form action URL.
    pub action: String,

    /// HTTP method ("post" or "get").
    pub method: String,

    /// Form elements keyed by name.
    pub elements: BTreeMap<String, FormElement>,

    /// Named groups of elements, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FieldGroup>,

    /// Optional form title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether partially filled submissions may be saved as drafts.
    #[serde(default)]
    pub drafting: bool,
}

impl Form {
    /// Create a new form with the given ID.
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            form_build_id: uuid::Uuid::new_v4().to_string(),
            action: String::new(),
            method: "post".to_string(),
            elements: BTreeMap::new(),
            groups: Vec::new(),
            title: None,
            description: None,
            drafting: false,
        }
    }

    /// Set the form action URL.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Set the form title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the form description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Enable or disable drafting.
    pub fn drafting(mut self, drafting: bool) -> Self {
        self.drafting = drafting;
        self
    }

    /// Add an element to the form.
    pub fn element(mut self, name: impl Into<String>, element: FormElement) -> Self {
        self.elements.insert(name.into(), element);
        self
    }

    /// Add a group of elements.
    pub fn group(mut self, group: FieldGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Get an element by name.
    pub fn get_element(&self, name: &str) -> Option<&FormElement> {
        self.elements.get(name)
    }

    /// Get elements sorted by weight.
    pub fn sorted_elements(&self) -> Vec<(&String, &FormElement)> {
        let mut elements: Vec<_> = self.elements.iter().collect();
        elements.sort_by_key(|(_, el)| el.weight);
        elements
    }

    /// Names of required elements, in weight order.
    pub fn required_elements(&self) -> Vec<&str> {
        self.sorted_elements()
            .into_iter()
            .filter(|(_, el)| el.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// (group title, field name) pairs naming elements missing from the form.
    pub fn dangling_group_fields(&self) -> Vec<(&str, &str)> {
        let elements = &self.elements;
        self.groups
            .iter()
            .flat_map(move |group| {
                group
                    .fields
                    .iter()
                    .filter(move |field| !elements.contains_key(field.as_str()))
                    .map(move |field| (group.title.as_str(), field.as_str()))
            })
            .collect()
    }
}

/// A titled group of form elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    /// Group heading.
    pub title: String,

    /// Element names in display order.
    pub fields: Vec<String>,

    /// Help text shown with the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Marker for the renderer (e.g., "required").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indication: Option<String>,
}

impl FieldGroup {
    /// Create a group of the given fields.
    pub fn new(title: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            title: title.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            description: None,
            indication: None,
        }
    }

    /// Set the group description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the group indication.
    pub fn indication(mut self, indication: impl Into<String>) -> Self {
        self.indication = Some(indication.into());
        self
    }
}

/// A form element definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormElement {
    /// Element type with type-specific configuration.
    #[serde(flatten)]
    pub element_type: ElementType,

    /// Element title/label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Element description/help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Whether this field is required.
    #[serde(default)]
    pub required: bool,

    /// Sort weight (lower = appears first).
    #[serde(default)]
    pub weight: i32,

    /// Renderer widget override (e.g., "date", "plupload").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,

    /// Placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FormElement {
    /// Create a textfield element.
    pub fn textfield() -> Self {
        Self::new(ElementType::Textfield { max_length: None })
    }

    /// Create a textarea element.
    pub fn textarea(rows: u32) -> Self {
        Self::new(ElementType::Textarea { rows })
    }

    /// Create a select element.
    pub fn select(options: Vec<(String, String)>) -> Self {
        Self::new(ElementType::Select {
            options,
            multiple: false,
        })
    }

    /// Create a date element.
    pub fn date() -> Self {
        Self::new(ElementType::Date)
    }

    /// Create a file upload field.
    pub fn file() -> Self {
        Self::new(ElementType::File)
    }

    /// Create a submit button.
    pub fn submit(value: impl Into<String>) -> Self {
        Self::new(ElementType::Submit {
            value: value.into(),
        })
    }

    fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            title: None,
            description: None,
            default_value: None,
            required: false,
            weight: 0,
            widget: None,
            placeholder: None,
        }
    }

    /// Set the element title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the element description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Mark as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the weight.
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the renderer widget.
    pub fn widget(mut self, widget: impl Into<String>) -> Self {
        self.widget = Some(widget.into());
        self
    }

    /// Set placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set max length for textfield.
    pub fn max_length(mut self, max: usize) -> Self {
        if let ElementType::Textfield { ref mut max_length } = self.element_type {
            *max_length = Some(max);
        }
        self
    }
}

/// Element type variants with type-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementType {
    /// Single-line text input.
    Textfield {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },

    /// Multi-line text input.
    Textarea { rows: u32 },

    /// Dropdown select.
    Select {
        options: Vec<(String, String)>,
        #[serde(default)]
        multiple: bool,
    },

    /// Calendar date.
    Date,

    /// File upload.
    File,

    /// Submit button.
    Submit { value: String },
}

impl ElementType {
    /// Get the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementType::Textfield { .. } => "textfield",
            ElementType::Textarea { .. } => "textarea",
            ElementType::Select { .. } => "select",
            ElementType::Date => "date",
            ElementType::File => "file",
            ElementType::Submit { .. } => "submit",
        }
    }
}
