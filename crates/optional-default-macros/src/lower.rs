use quote::format_ident;
use syn::{Attribute, Expr, Generics, Ident, Type, Visibility, parse_quote};

use crate::analyse::{Model, Property};

/// Lower the validated model into the identifiers and types spliced into the output.
pub fn lower(model: Model) -> Ir {
    let (fields, accessors): (Vec<_>, Vec<_>) =
        model.properties.into_iter().map(lower_property).unzip();

    Ir {
        attrs: model.attrs,
        vis: model.vis,
        ident: model.ident,
        generics: model.generics,
        fields,
        accessors,
    }
}

fn lower_property(property: Property) -> (BackingField, AccessorPair) {
    // Serialization key mappings are written against this name, so the scheme must stay stable.
    let backing = format_ident!("_{}", property.name);
    let setter = format_ident!("set_{}", property.name);

    let ty = property.ty;
    let storage_ty = parse_quote!(::std::option::Option<#ty>);

    (
        BackingField {
            attrs: property.attrs,
            ident: backing.clone(),
            ty: storage_ty,
        },
        AccessorPair {
            vis: property.vis,
            getter: property.name,
            setter,
            backing,
            ty,
            default: property.default,
        },
    )
}

/// Everything codegen needs to render the expansion.
#[derive(Clone, Debug)]
pub struct Ir {
    /// Attributes attached to the struct.
    pub attrs: Vec<Attribute>,

    /// Visibility of the struct.
    pub vis: Visibility,

    /// Name of the struct.
    pub ident: Ident,

    /// Generics of the struct.
    pub generics: Generics,

    /// Backing fields, one per property.
    pub fields: Vec<BackingField>,

    /// Accessor pairs, one per property.
    pub accessors: Vec<AccessorPair>,
}

/// Private optional storage behind a property.
#[derive(Clone, Debug)]
pub struct BackingField {
    /// Attributes carried over from the property declaration.
    pub attrs: Vec<Attribute>,

    /// Field name, the property name prefixed with `_`.
    pub ident: Ident,

    /// Storage type, the optional of the declared type.
    pub ty: Type,
}

/// Getter and setter generated for a property.
#[derive(Clone, Debug)]
pub struct AccessorPair {
    /// Visibility of both accessors.
    pub vis: Visibility,

    /// Getter name, the property name itself.
    pub getter: Ident,

    /// Setter name, the property name prefixed with `set_`.
    pub setter: Ident,

    /// Name of the backing field both accessors read and write.
    pub backing: Ident,

    /// Declared type of the property.
    pub ty: Type,

    /// Default value expression.
    pub default: Expr,
}
