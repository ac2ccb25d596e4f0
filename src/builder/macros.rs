//! Macros for declaring attribute specifications.

/// Generate an attribute-equality specification for a record field.
///
/// The generated type is a tuple struct around the expected value; it is
/// satisfied by items whose field equals that value and describes itself
/// as `"<field> is <value>"`. The value type must implement `PartialEq`
/// and `Display`.
///
/// # Example
///
/// ```
/// use solid::attribute_spec;
/// use solid::core::Specification;
///
/// struct Book {
///     pages: u32,
/// }
///
/// attribute_spec! {
///     /// Books with an exact page count.
///     pub struct PagesSpecification for Book { pages: u32 }
/// }
///
/// let spec = PagesSpecification::new(300);
/// assert!(spec.is_satisfied(&Book { pages: 300 }));
/// assert!(!spec.is_satisfied(&Book { pages: 120 }));
/// assert_eq!(spec.describe(), "pages is 300");
/// ```
#[macro_export]
macro_rules! attribute_spec {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $item:ty { $field:ident: $value:ty $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name(pub $value);

        impl $name {
            pub fn new(value: $value) -> Self {
                Self(value)
            }
        }

        impl $crate::core::Specification<$item> for $name {
            fn is_satisfied(&self, item: &$item) -> bool {
                item.$field == self.0
            }

            fn describe(&self) -> String {
                format!("{} is {}", stringify!($field), self.0)
            }
        }
    };
}
