//! Attribute specifications over products.

use super::product::{Color, Product, Size};
use crate::attribute_spec;

attribute_spec! {
    /// Products of a given color.
    pub struct ColorSpecification for Product { color: Color }
}

attribute_spec! {
    /// Products of a given size.
    pub struct SizeSpecification for Product { size: Size }
}
