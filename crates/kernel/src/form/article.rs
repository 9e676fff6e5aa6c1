//! Article deposition form.

use super::types::{FieldGroup, Form, FormElement};

/// Form ID of the article deposition.
pub const ARTICLE_FORM_ID: &str = "article";

/// Document language choices as (code, label) pairs.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fre", "French"),
    ("ger", "German"),
    ("dut", "Dutch"),
    ("ita", "Italian"),
    ("spa", "Spanish"),
    ("por", "Portuguese"),
    ("gre", "Greek"),
    ("slo", "Slovak"),
    ("cze", "Czech"),
    ("hun", "Hungarian"),
    ("pol", "Polish"),
    ("nor", "Norwegian"),
    ("swe", "Swedish"),
    ("fin", "Finnish"),
    ("rus", "Russian"),
];

/// Build the article submission form posting to `action`.
///
/// Element weights follow the field order, so
/// [`Form::sorted_elements`] lists fields the way depositors see them.
pub fn article_form(action: impl Into<String>) -> Form {
    let languages = LANGUAGES
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect();

    let fields = [
        ("doi", FormElement::textfield().title("DOI")),
        (
            "publisher",
            FormElement::textfield().title("Publisher").required(),
        ),
        (
            "journal",
            FormElement::textfield().title("Journal Title").required(),
        ),
        ("issn", FormElement::textfield().title("ISSN").max_length(9)),
        ("title", FormElement::textfield().title("Document Title")),
        ("author", FormElement::textfield().title("Author")),
        ("abstract", FormElement::textarea(8).title("Abstract")),
        ("pagesnum", FormElement::textfield().title("Number of Pages")),
        ("language", FormElement::select(languages).title("Language")),
        (
            "date",
            FormElement::date().title("Date of Document").widget("date"),
        ),
        ("keywords", FormElement::textfield().title("Keywords")),
        ("notes", FormElement::textarea(4).title("Notes")),
        ("plupload_file", FormElement::file().widget("plupload")),
        (
            "submit",
            FormElement::submit("Submit Article").widget("bootstrap_submit"),
        ),
    ];

    let form = fields
        .into_iter()
        .zip(0..)
        .fold(Form::new(ARTICLE_FORM_ID), |form, ((name, element), weight)| {
            form.element(name, element.weight(weight))
        });

    form.action(action)
        .title("Submit an Article")
        .drafting(true)
        .group(
            FieldGroup::new("Publisher/Journal", &["doi", "publisher", "journal", "issn"])
                .description("Publisher and Journal fields are required.")
                .indication("required"),
        )
        .group(FieldGroup::new(
            "Basic Information",
            &["title", "author", "abstract", "pagesnum"],
        ))
        .group(FieldGroup::new(
            "Other",
            &["language", "date", "keywords", "notes"],
        ))
}

/// Look up a deposition form by type.
pub fn deposition_form(deposition_type: &str, action: impl Into<String>) -> Option<Form> {
    match deposition_type {
        ARTICLE_FORM_ID => Some(article_form(action)),
        _ => None,
    }
}
