//! Macros for building schemas with minimal boilerplate.
//!
//! - [`fields!`] builds the field list of an object schema
//! - [`path!`], defined next to [`FieldPath`](crate::foundation::FieldPath),
//!   builds an error path, mostly for comparing against reported errors

/// Builds a field list for [`object`](crate::schema::object).
///
/// Every value is turned into a [`SharedValidator`](crate::foundation::SharedValidator),
/// so validators of different kinds can sit in the same list.
///
/// ```
/// use input_validator::prelude::*;
///
/// let schema = object(fields! {
///     "name" => string().min_length(1),
///     "age" => number().integer(),
///     "active" => boolean().optional(),
/// });
/// assert_eq!(schema.rule().len(), 3);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<($crate::foundation::FieldKey, $crate::foundation::SharedValidator)>::new()
    };
    ($($key:expr => $validator:expr),+ $(,)?) => {
        ::std::vec![
            $((
                $crate::foundation::FieldKey::from($key),
                $crate::foundation::ValidateExt::shared($validator),
            )),+
        ]
    };
}
