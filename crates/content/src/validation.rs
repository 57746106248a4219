//! Schema validation for content imports
//!
//! Import payloads are untrusted: they may be hand-edited backups or files
//! produced by an older admin build. Validation runs on the raw JSON value,
//! before anything is deserialized, so every problem in the payload is
//! reported at once instead of stopping at the first type mismatch.
//!
//! Findings come in two severities:
//!
//! - **errors** block the import entirely (no partial import)
//! - **warnings** are reported but never block
//!
//! Messages are in Arabic, the admin's working language, and items are
//! numbered from 1 (`المنتج 3` is the third product).

use crate::serialization::content_from_value;
use crate::ContentData;
use serde_json::{Map, Value};
use solar_core::{AdminError, ArticleType, Choice, EntityKind, ProductCategory, ProjectType};
use std::collections::HashSet;

/// SEO titles longer than this are truncated by search engines
pub const SEO_TITLE_MAX: usize = 60;

/// SEO descriptions longer than this are truncated by search engines
pub const SEO_DESCRIPTION_MAX: usize = 160;

/// Image path the site uses while a real photo is missing
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

// ============================================================================
// ValidationResult
// ============================================================================

/// Findings for one collection or a whole payload
///
/// `valid` is exactly "no errors"; warnings never affect it.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn refused(error: ValidationError) -> Self {
        Self {
            valid: false,
            errors: vec![error],
            warnings: Vec::new(),
        }
    }

    fn add_error(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }

    fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Union with another collection's findings, keeping order
    fn absorb(&mut self, other: ValidationResult) {
        self.valid &= other.valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.message.clone()).collect()
    }
}

// ============================================================================
// ValidationError / ValidationWarning
// ============================================================================

/// A finding that blocks an import
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error code for programmatic handling
    pub code: ValidationErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Path to the problematic element (e.g. `products[2].nameAr`)
    pub path: Option<String>,
}

impl ValidationError {
    pub fn new(code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Add a path to the error
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Error codes for validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    /// Collection present but not an array
    NotAnArray,
    /// One or more slugs used more than once
    DuplicateSlug,
    /// Required field absent or empty
    MissingField,
    /// Value outside a closed set
    InvalidEnumValue,
    /// Text is not JSON at all
    ParseFailure,
    /// JSON that passed the checks but does not fit the typed model
    InvalidFormat,
}

/// A finding that is reported but does not block an import
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub code: ValidationWarningCode,
    pub message: String,
    pub path: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: ValidationWarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Add a path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Warning codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationWarningCode {
    SeoTitleTooLong,
    SeoDescriptionTooLong,
    MissingImage,
    MissingContent,
    MissingImages,
}

// ============================================================================
// Duplicate Slugs
// ============================================================================

/// Slugs that occur more than once, each listed once in first-repeat order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateSlugs {
    pub duplicates: Vec<String>,
}

impl DuplicateSlugs {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Find repeated slugs; a slug seen three times is still reported once
pub fn check_duplicate_slugs<I, S>(slugs: I) -> DuplicateSlugs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();

    for slug in slugs {
        let slug = slug.as_ref();
        if !seen.insert(slug.to_string()) && !duplicates.iter().any(|d| d == slug) {
            duplicates.push(slug.to_string());
        }
    }

    DuplicateSlugs { duplicates }
}

// ============================================================================
// Collection Schemas
// ============================================================================

/// Declarative checks for one collection
struct CollectionSchema {
    kind: EntityKind,
    required: &'static [&'static str],
    enum_field: &'static str,
    allowed: fn(&str) -> bool,
    warnings: fn(&Map<String, Value>, &str, &str, &mut ValidationResult),
}

const PRODUCT_SCHEMA: CollectionSchema = CollectionSchema {
    kind: EntityKind::Product,
    required: &["id", "slug", "category", "nameAr", "nameEn", "brand"],
    enum_field: "category",
    allowed: ProductCategory::is_allowed,
    warnings: product_warnings,
};

const ARTICLE_SCHEMA: CollectionSchema = CollectionSchema {
    kind: EntityKind::Article,
    required: &["id", "slug", "titleAr", "titleEn", "type"],
    enum_field: "type",
    allowed: ArticleType::is_allowed,
    warnings: article_warnings,
};

const PROJECT_SCHEMA: CollectionSchema = CollectionSchema {
    kind: EntityKind::Project,
    required: &["id", "slug", "titleAr", "titleEn", "type"],
    enum_field: "type",
    allowed: ProjectType::is_allowed,
    warnings: project_warnings,
};

fn validate_collection(schema: &CollectionSchema, items: &Value) -> ValidationResult {
    let key = schema.kind.collection_key();

    let Some(items) = items.as_array() else {
        return ValidationResult::refused(
            ValidationError::new(ValidationErrorCode::NotAnArray, "البيانات ليست مصفوفة صالحة")
                .with_path(key),
        );
    };

    let mut result = ValidationResult::ok();

    let slugs = items
        .iter()
        .filter_map(|item| item.get("slug"))
        .filter(|slug| is_truthy(Some(slug)))
        .map(js_display);
    let duplicates = check_duplicate_slugs(slugs);
    if duplicates.has_duplicates() {
        result.add_error(
            ValidationError::new(
                ValidationErrorCode::DuplicateSlug,
                format!(
                    "تكرار في slugs {}: {}",
                    schema.kind.collection_label_ar(),
                    duplicates.duplicates.join(", ")
                ),
            )
            .with_path(key),
        );
    }

    let empty = Map::new();
    for (index, item) in items.iter().enumerate() {
        let prefix = format!("{} {}", schema.kind.item_label_ar(), index + 1);
        let path = format!("{}[{}]", key, index);
        // Non-object items have no fields at all
        let fields = item.as_object().unwrap_or(&empty);

        for field in schema.required {
            if !is_truthy(fields.get(*field)) {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::MissingField,
                        format!("{}: حقل {} مطلوب", prefix, field),
                    )
                    .with_path(format!("{}.{}", path, field)),
                );
            }
        }

        if let Some(value) = fields.get(schema.enum_field) {
            let allowed = value.as_str().is_some_and(schema.allowed);
            if is_truthy(Some(value)) && !allowed {
                result.add_error(
                    ValidationError::new(
                        ValidationErrorCode::InvalidEnumValue,
                        format!(
                            "{}: قيمة {} غير صالحة: {}",
                            prefix,
                            schema.enum_field,
                            js_display(value)
                        ),
                    )
                    .with_path(format!("{}.{}", path, schema.enum_field)),
                );
            }
        }

        (schema.warnings)(fields, &prefix, &path, &mut result);
    }

    tracing::debug!(
        collection = key,
        items = items.len(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "collection validated",
    );

    result
}

fn product_warnings(
    fields: &Map<String, Value>,
    prefix: &str,
    path: &str,
    result: &mut ValidationResult,
) {
    if let Some(len) = text_len(fields, "seoTitleAr").filter(|len| *len > SEO_TITLE_MAX) {
        result.add_warning(
            ValidationWarning::new(
                ValidationWarningCode::SeoTitleTooLong,
                format!("{}: عنوان SEO العربي طويل جداً ({} حرف)", prefix, len),
            )
            .with_path(format!("{}.seoTitleAr", path)),
        );
    }
    if let Some(len) = text_len(fields, "seoDescriptionAr").filter(|len| *len > SEO_DESCRIPTION_MAX)
    {
        result.add_warning(
            ValidationWarning::new(
                ValidationWarningCode::SeoDescriptionTooLong,
                format!("{}: وصف SEO العربي طويل جداً ({} حرف)", prefix, len),
            )
            .with_path(format!("{}.seoDescriptionAr", path)),
        );
    }

    let image = fields.get("image");
    if !is_truthy(image) || image.and_then(Value::as_str) == Some(PLACEHOLDER_IMAGE) {
        result.add_warning(
            ValidationWarning::new(
                ValidationWarningCode::MissingImage,
                format!("{}: صورة المنتج مفقودة أو placeholder", prefix),
            )
            .with_path(format!("{}.image", path)),
        );
    }
}

fn article_warnings(
    fields: &Map<String, Value>,
    prefix: &str,
    path: &str,
    result: &mut ValidationResult,
) {
    if !is_truthy(fields.get("contentAr")) && !is_truthy(fields.get("contentMarkdownAr")) {
        result.add_warning(
            ValidationWarning::new(
                ValidationWarningCode::MissingContent,
                format!("{}: المحتوى العربي مفقود", prefix),
            )
            .with_path(format!("{}.contentAr", path)),
        );
    }

    if text_len(fields, "seoTitleAr").is_some_and(|len| len > SEO_TITLE_MAX) {
        result.add_warning(
            ValidationWarning::new(
                ValidationWarningCode::SeoTitleTooLong,
                format!("{}: عنوان SEO العربي طويل جداً", prefix),
            )
            .with_path(format!("{}.seoTitleAr", path)),
        );
    }
}

fn project_warnings(
    fields: &Map<String, Value>,
    prefix: &str,
    path: &str,
    result: &mut ValidationResult,
) {
    let images = fields.get("images");
    let empty_list = images
        .and_then(Value::as_array)
        .is_some_and(|list| list.is_empty());
    if !is_truthy(images) || empty_list {
        result.add_warning(
            ValidationWarning::new(
                ValidationWarningCode::MissingImages,
                format!("{}: صور المشروع مفقودة", prefix),
            )
            .with_path(format!("{}.images", path)),
        );
    }
}

// ============================================================================
// Public Validators
// ============================================================================

/// Validate a `products` collection
pub fn validate_products(products: &Value) -> ValidationResult {
    validate_collection(&PRODUCT_SCHEMA, products)
}

/// Validate an `articles` collection
pub fn validate_articles(articles: &Value) -> ValidationResult {
    validate_collection(&ARTICLE_SCHEMA, articles)
}

/// Validate a `projects` collection
pub fn validate_projects(projects: &Value) -> ValidationResult {
    validate_collection(&PROJECT_SCHEMA, projects)
}

/// Validate every collection present in a payload
///
/// A collection that is absent (or `null`, `false`, `""`, `0`) is skipped.
/// A payload that is not an object has no collections and is trivially
/// valid here; the typed parse in [`parse_import`] rejects it.
pub fn validate_all_data(data: &Value) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for schema in [&PRODUCT_SCHEMA, &ARTICLE_SCHEMA, &PROJECT_SCHEMA] {
        let collection = data.get(schema.kind.collection_key());
        if let Some(items) = collection.filter(|v| is_truthy(Some(v))) {
            result.absorb(validate_collection(schema, items));
        }
    }

    result
}

/// Validate already-typed collections (e.g. before saving an edit)
pub fn validate_content(data: &ContentData) -> ValidationResult {
    match serde_json::to_value(data) {
        Ok(value) => validate_all_data(&value),
        Err(e) => ValidationResult::refused(ValidationError::new(
            ValidationErrorCode::InvalidFormat,
            e.to_string(),
        )),
    }
}

// ============================================================================
// Parse Boundary
// ============================================================================

/// A payload that passed validation and parsed into the typed model
#[derive(Debug, Clone)]
pub struct ValidatedImport {
    pub data: ContentData,
    pub warnings: Vec<ValidationWarning>,
}

/// Why an import payload was refused
#[derive(Debug, Clone, thiserror::Error)]
#[error("import rejected with {} error(s)", errors.len())]
pub struct ImportRejection {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ImportRejection {
    fn single(code: ValidationErrorCode, message: String) -> Self {
        Self {
            errors: vec![ValidationError::new(code, message)],
            warnings: Vec::new(),
        }
    }
}

impl From<ImportRejection> for AdminError {
    fn from(rejection: ImportRejection) -> Self {
        AdminError::ImportRejected {
            count: rejection.errors.len(),
            summary: rejection
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Parse and validate import text in one step
///
/// Either every collection is accepted (with its warnings) or nothing is.
pub fn parse_import(json: &str) -> Result<ValidatedImport, ImportRejection> {
    let value: Value = serde_json::from_str(json).map_err(|e| {
        ImportRejection::single(
            ValidationErrorCode::ParseFailure,
            format!("ملف غير صالح: تأكد من أن الملف JSON صحيح ({})", e),
        )
    })?;

    let result = validate_all_data(&value);
    if !result.valid {
        return Err(ImportRejection {
            errors: result.errors,
            warnings: result.warnings,
        });
    }

    let data = content_from_value(value).map_err(|e| ImportRejection {
        errors: vec![ValidationError::new(
            ValidationErrorCode::InvalidFormat,
            format!("بنية البيانات غير صالحة: {}", e),
        )],
        warnings: result.warnings.clone(),
    })?;

    Ok(ValidatedImport {
        data,
        warnings: result.warnings,
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Truthiness of an optional JSON value, as the site's scripts judge it
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Render a JSON value the way it reads when interpolated into a message
pub(crate) fn js_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(js_display).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Length in UTF-16 code units of a string field, if it is a non-empty string
fn text_len(fields: &Map<String, Value>, field: &str) -> Option<usize> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(|s| s.encode_utf16().count())
}

// ============================================================================
// Tests
// ============================================================================
