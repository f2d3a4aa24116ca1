//! Unicode utils for [`regular-patterns`](https://docs.rs/regular-patterns/).
/*!
## Features
- Case-insensitive [`char`] comparison based on [mono lowercase](case)
- Fast [ASCII](ascii) candidate search
- Char boundary stepping and `floor_char_boundary()`/`ceil_char_boundary()` polyfill ([`str`](mod@str))

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
pub mod ascii;
pub mod case;
pub mod str;

mod private {
    pub trait Sealed {}
}
use private::Sealed;

impl Sealed for str {}
impl Sealed for char {}
