use super::type_info::TypeInfo;
use crate::error::DocumentValidationError;
use crate::schema::SchemaLookup;

/// The `ValidationContext` carrying a reference to the schema, the [`TypeInfo`] of the node that's
/// currently visited, and a list of errors.
///
/// New errors are added to the list as validation continues, and validation of the document fails
/// if any rule added an error.
pub struct ValidationContext<'a> {
    pub schema: &'a dyn SchemaLookup<'a>,
    pub type_info: TypeInfo<'a>,
    pub(crate) errors: Vec<DocumentValidationError>,
}

impl<'a> ValidationContext<'a> {
    /// Create a new `ValidationContext` for a schema with a fresh [`TypeInfo`].
    pub fn new(schema: &'a dyn SchemaLookup<'a>) -> Self {
        ValidationContext {
            schema,
            type_info: TypeInfo::new(),
            errors: Vec::new(),
        }
    }

    /// Add an error to the list of errors in the `ValidationContext`.
    ///
    /// This is called inside of validation rules to fail validation of the currently validating
    /// document. The rule won't visit the children of the node that it reported an error for.
    #[inline]
    pub fn add_error(&mut self, error: DocumentValidationError) {
        self.errors.push(error);
    }

    /// Returns all errors that have been reported so far in document order.
    #[inline]
    pub fn errors(&self) -> &[DocumentValidationError] {
        &self.errors
    }

    #[inline]
    pub(crate) fn into_errors(self) -> Vec<DocumentValidationError> {
        self.errors
    }
}
