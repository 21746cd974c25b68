use proc_macro2::TokenStream;
use syn::{
    Attribute, Error, Expr, Generics, Ident, Pat, Token, Type, Visibility, braced,
    parse::{Parse, ParseStream},
};

/// Parse the provided token stream into an AST.
pub fn parse(tokens: TokenStream) -> Result<Ast, Error> {
    syn::parse2(tokens)
}

/// Simple representation of the wrapped struct declaration, suitable for further processing by
/// the macro.
#[derive(Clone, Debug)]
pub struct Ast {
    /// Attributes attached to the struct, passed through to the output.
    pub attrs: Vec<Attribute>,

    /// Visibility of the struct.
    pub vis: Visibility,

    /// Name of the struct.
    pub ident: Ident,

    /// Generics of the struct, including any `where` clause.
    pub generics: Generics,

    /// Property declarations found in the struct body.
    pub properties: Vec<PropertyDecl>,
}

impl Parse for Ast {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;

        input.parse::<Token![struct]>()?;
        let ident = input.parse()?;

        let mut generics: Generics = input.parse()?;
        if input.peek(Token![where]) {
            generics.where_clause = Some(input.parse()?);
        }

        let content;
        braced!(content in input);
        let properties = content
            .parse_terminated(PropertyDecl::parse, Token![,])?
            .into_iter()
            .collect();

        Ok(Self {
            attrs,
            vis,
            ident,
            generics,
            properties,
        })
    }
}

/// A single property declaration: a pattern, optionally followed by a type annotation and an
/// initializer. Absence of either piece is representable here, and only rejected during
/// analysis.
#[derive(Clone, Debug)]
pub struct PropertyDecl {
    /// Attributes attached to the property, passed through to the backing field.
    pub attrs: Vec<Attribute>,

    /// Visibility of the property, applied to the generated accessors.
    pub vis: Visibility,

    /// Binding pattern of the property.
    pub pattern: Pat,

    /// Declared type, when an explicit annotation was written.
    pub ty: Option<Type>,

    /// Default value expression, when an initializer was written.
    pub default: Option<Expr>,
}

impl Parse for PropertyDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;

        let pattern = Pat::parse_single(input)?;

        let ty = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Some(input.parse()?)
        } else {
            None
        };

        let default = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse()?)
        } else {
            None
        };

        Ok(Self {
            attrs,
            vis,
            pattern,
            ty,
            default,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use quote::quote;
    use rstest::*;
    use syn::parse_quote;

    #[rstest]
    #[case::bool_property(parse_quote!(b: bool = false), parse_quote!(bool), parse_quote!(false))]
    #[case::string_property(
        parse_quote!(s: String = String::new()),
        parse_quote!(String),
        parse_quote!(String::new())
    )]
    #[case::path_default(parse_quote!(mode: Mode = Mode::A), parse_quote!(Mode), parse_quote!(Mode::A))]
    fn parse_complete_property(
        #[case] decl: PropertyDecl,
        #[case] ty: Type,
        #[case] default: Expr,
    ) {
        assert!(matches!(decl.pattern, Pat::Ident(_)));
        assert_eq!(decl.ty, Some(ty));
        assert_eq!(decl.default, Some(default));
    }

    #[rstest]
    #[case::no_initializer(parse_quote!(b: bool), true, false)]
    #[case::no_annotation(parse_quote!(b = false), false, true)]
    #[case::bare_binding(parse_quote!(b), false, false)]
    fn parse_partial_property(
        #[case] decl: PropertyDecl,
        #[case] has_ty: bool,
        #[case] has_default: bool,
    ) {
        assert_eq!(decl.ty.is_some(), has_ty);
        assert_eq!(decl.default.is_some(), has_default);
    }

    #[test]
    fn parse_struct_declaration() {
        let ast = parse(quote! {
            #[derive(Default)]
            pub struct Settings {
                pub flag: bool = false,
                greeting: String = String::new(),
            }
        })
        .unwrap();

        assert_eq!(ast.ident, "Settings");
        assert!(matches!(ast.vis, Visibility::Public(_)));
        assert_eq!(ast.attrs.len(), 1);
        assert_eq!(ast.properties.len(), 2);
        assert!(matches!(ast.properties[0].vis, Visibility::Public(_)));
        assert!(matches!(ast.properties[1].vis, Visibility::Inherited));
    }

    #[test]
    fn parse_generic_struct() {
        let ast = parse(quote! {
            struct Tagged<T: Clone + PartialEq> {
                value: T = T::default(),
            }
        })
        .unwrap();

        assert_eq!(ast.generics.params.len(), 1);
    }

    #[test]
    fn parse_property_attributes_retained() {
        let ast = parse(quote! {
            struct Settings {
                #[serde(rename = "flag")]
                flag: bool = false,
            }
        })
        .unwrap();

        assert_eq!(ast.properties[0].attrs.len(), 1);
    }

    #[rstest]
    #[case::not_a_struct(quote!(enum E { A, B }))]
    #[case::missing_body(quote!(struct S))]
    fn parse_fail(#[case] tokens: TokenStream) {
        assert!(parse(tokens).is_err());
    }
}
