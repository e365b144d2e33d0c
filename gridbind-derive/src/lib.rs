mod macros;

use proc_macro::TokenStream;

/// Derive `gridbind::Entity` for a struct with named fields.
///
/// Optional `#[column(...)]` attributes on fields carry column metadata:
/// `index = N` claims an explicit column slot, `label = "..."` sets the
/// display label, `tooltip = "..."` the tooltip, `width = N` the initial
/// width hint, and the bare `editable` flag allows writes. Fields without
/// the attribute receive synthesized descriptors in the remaining slots.
#[proc_macro_derive(Entity, attributes(column))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    macros::entity::expand(input.into()).into()
}
