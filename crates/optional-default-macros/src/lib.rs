//! Implementation of the [`optional_default!`] macro.
//!
//! The expansion runs as a small pipeline: parse the wrapped struct declaration, analyse each
//! property into a complete (name, type, default) triple, lower the triples into backing-field
//! and accessor identifiers, and generate the final token stream. Any failure is rendered as a
//! compile error anchored at the offending declaration.

use syn::Error;

use crate::{analyse::analyse, codegen::codegen, lower::lower, parse::parse};

mod analyse;
mod codegen;
mod lower;
mod parse;

/// See the `optional-default` crate documentation for usage.
#[proc_macro]
pub fn optional_default(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match expand(input.into()) {
        Ok(ts) => ts,
        Err(e) => e.into_compile_error(),
    }
    .into()
}

fn expand(input: proc_macro2::TokenStream) -> Result<proc_macro2::TokenStream, Error> {
    let ast = parse(input)?;
    let model = analyse(ast)?;
    let ir = lower(model);

    Ok(codegen(ir))
}
