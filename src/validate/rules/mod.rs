//! The validation rules that this crate comes with.
//!
//! Each rule is a [`ValidationRule`](super::ValidationRule) that may be run on its own, while
//! [`default_rules`](super::default_rules) returns all of them in the order they report errors.

mod fields_on_correct_type;
mod known_fragment_names;
mod lone_anonymous_operation;
mod no_unused_fragments;
mod unique_argument_names;
mod unique_fragment_names;
mod unique_operation_names;
mod unique_variable_names;
mod variables_are_input_types;

pub use fields_on_correct_type::*;
pub use known_fragment_names::*;
pub use lone_anonymous_operation::*;
pub use no_unused_fragments::*;
pub use unique_argument_names::*;
pub use unique_fragment_names::*;
pub use unique_operation_names::*;
pub use unique_variable_names::*;
pub use variables_are_input_types::*;
