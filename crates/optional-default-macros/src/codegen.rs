use proc_macro2::TokenStream;
use quote::quote;

use crate::lower::{AccessorPair, BackingField, Ir};

/// Render the expansion: the struct rebuilt around its backing fields, plus an inherent impl
/// containing the accessor pairs.
pub fn codegen(ir: Ir) -> TokenStream {
    let Ir {
        attrs,
        vis,
        ident,
        generics,
        fields,
        accessors,
    } = ir;

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = fields.iter().map(backing_field);
    let accessors = accessors.iter().map(accessor_pair);

    quote! {
        #(#attrs)*
        #vis struct #ident #generics #where_clause {
            #(#fields,)*
        }

        impl #impl_generics #ident #ty_generics #where_clause {
            #(#accessors)*
        }
    }
}

/// Accessor template: the getter coalesces the backing field with the default, the setter stores
/// the new value unless it equals the default, in which case the backing field is cleared.
fn accessor_pair(accessor: &AccessorPair) -> TokenStream {
    let AccessorPair {
        vis,
        getter,
        setter,
        backing,
        ty,
        default,
    } = accessor;

    quote! {
        #vis fn #getter(&self) -> #ty {
            self.#backing.clone().unwrap_or_else(|| #default)
        }

        #vis fn #setter(&mut self, new_value: #ty) {
            self.#backing = if new_value == #default {
                ::std::option::Option::None
            } else {
                ::std::option::Option::Some(new_value)
            };
        }
    }
}

/// Backing field template: private optional storage with no initializer.
fn backing_field(field: &BackingField) -> TokenStream {
    let BackingField { attrs, ident, ty } = field;

    quote! {
        #(#attrs)*
        #ident: #ty
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use proc_macro2::Span;
    use quote::format_ident;
    use rstest::*;
    use syn::{Expr, Ident, Type, Visibility, parse_quote};

    fn pair(name: &str, ty: Type, default: Expr) -> AccessorPair {
        AccessorPair {
            vis: Visibility::Inherited,
            getter: Ident::new(name, Span::call_site()),
            setter: format_ident!("set_{name}"),
            backing: format_ident!("_{name}"),
            ty,
            default,
        }
    }

    fn field(name: &str, ty: Type) -> BackingField {
        BackingField {
            attrs: Vec::new(),
            ident: format_ident!("_{name}"),
            ty: parse_quote!(::std::option::Option<#ty>),
        }
    }

    #[rstest]
    #[case::bool_default(
        pair("b", parse_quote!(bool), parse_quote!(false)),
        quote! {
            fn b(&self) -> bool {
                self._b.clone().unwrap_or_else(|| false)
            }

            fn set_b(&mut self, new_value: bool) {
                self._b = if new_value == false {
                    ::std::option::Option::None
                } else {
                    ::std::option::Option::Some(new_value)
                };
            }
        }
    )]
    #[case::empty_string_default(
        pair("s", parse_quote!(String), parse_quote!(String::new())),
        quote! {
            fn s(&self) -> String {
                self._s.clone().unwrap_or_else(|| String::new())
            }

            fn set_s(&mut self, new_value: String) {
                self._s = if new_value == String::new() {
                    ::std::option::Option::None
                } else {
                    ::std::option::Option::Some(new_value)
                };
            }
        }
    )]
    fn accessor_template(#[case] accessor: AccessorPair, #[case] expected: TokenStream) {
        assert_eq!(accessor_pair(&accessor).to_string(), expected.to_string());
    }

    #[rstest]
    #[case::bool_storage(
        field("b", parse_quote!(bool)),
        quote!(_b: ::std::option::Option<bool>)
    )]
    #[case::string_storage(
        field("s", parse_quote!(String)),
        quote!(_s: ::std::option::Option<String>)
    )]
    fn backing_field_template(#[case] backing: BackingField, #[case] expected: TokenStream) {
        assert_eq!(backing_field(&backing).to_string(), expected.to_string());
    }
}
