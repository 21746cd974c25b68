use proc_macro2::Span;
use syn::{
    Attribute, Error, Expr, Generics, Ident, Pat, PatIdent, Type, Visibility, spanned::Spanned,
};

use crate::parse::{Ast, PropertyDecl};

/// Validate every property of the AST, producing a model ready for synthesis.
///
/// The accessor and storage extractions are independent of each other, so both run for every
/// property and every failure is reported, even when the other extraction succeeded.
pub fn analyse(ast: Ast) -> Result<Model, Error> {
    let mut properties = Vec::with_capacity(ast.properties.len());
    let mut error: Option<Error> = None;

    for decl in ast.properties {
        match (accessor_input(&decl), storage_input(&decl)) {
            (Ok(accessor), Ok(storage)) => {
                properties.push(Property {
                    attrs: decl.attrs,
                    vis: decl.vis,
                    name: storage.name,
                    ty: storage.ty,
                    default: accessor.default,
                });
            }
            (accessor, storage) => {
                for err in [accessor.err(), storage.err()].into_iter().flatten() {
                    let err = Error::from(err);
                    error = Some(match error.take() {
                        Some(mut existing) => {
                            existing.combine(err);
                            existing
                        }
                        None => err,
                    });
                }
            }
        }
    }

    match error {
        Some(error) => Err(error),
        None => Ok(Model {
            attrs: ast.attrs,
            vis: ast.vis,
            ident: ast.ident,
            generics: ast.generics,
            properties,
        }),
    }
}

/// Extract the pieces accessor synthesis requires: the property name and its default value.
pub fn accessor_input(decl: &PropertyDecl) -> Result<AccessorInput, ExtractError> {
    let Pat::Ident(PatIdent { ref ident, .. }) = decl.pattern else {
        return Err(ExtractError::MissingInitialValue(decl.pattern.span()));
    };

    let Some(default) = decl.default.clone() else {
        return Err(ExtractError::MissingInitialValue(ident.span()));
    };

    Ok(AccessorInput {
        name: ident.clone(),
        default,
    })
}

/// Extract the pieces storage synthesis requires: the property name and its declared type.
pub fn storage_input(decl: &PropertyDecl) -> Result<StorageInput, ExtractError> {
    let Pat::Ident(PatIdent { ref ident, .. }) = decl.pattern else {
        return Err(ExtractError::MissingTypeAnnotation(decl.pattern.span()));
    };

    let Some(ty) = decl.ty.clone() else {
        return Err(ExtractError::MissingTypeAnnotation(ident.span()));
    };

    Ok(StorageInput {
        name: ident.clone(),
        ty,
    })
}

/// Everything accessor synthesis needs from a property declaration.
#[derive(Clone, Debug)]
pub struct AccessorInput {
    /// Property name.
    pub name: Ident,

    /// Default value expression.
    pub default: Expr,
}

/// Everything storage synthesis needs from a property declaration.
#[derive(Clone, Debug)]
pub struct StorageInput {
    /// Property name.
    pub name: Ident,

    /// Declared type of the property.
    pub ty: Type,
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum ExtractError {
    /// The binding is not a plain identifier carrying an initializer expression.
    #[error("Properties using this macro must have an initial value assigned.")]
    MissingInitialValue(Span),

    /// The binding is not a plain identifier carrying an explicit type annotation.
    #[error("Properties using this macro must have an explicit type annotation.")]
    MissingTypeAnnotation(Span),
}

impl From<ExtractError> for Error {
    fn from(err: ExtractError) -> Self {
        match &err {
            ExtractError::MissingInitialValue(span) | ExtractError::MissingTypeAnnotation(span) => {
                Error::new(*span, err.to_string())
            }
        }
    }
}

/// A struct declaration in which every property held a complete (name, type, default) triple.
#[derive(Clone, Debug)]
pub struct Model {
    /// Attributes attached to the struct.
    pub attrs: Vec<Attribute>,

    /// Visibility of the struct.
    pub vis: Visibility,

    /// Name of the struct.
    pub ident: Ident,

    /// Generics of the struct.
    pub generics: Generics,

    /// Validated properties.
    pub properties: Vec<Property>,
}

/// A fully validated property.
#[derive(Clone, Debug)]
pub struct Property {
    /// Attributes to carry over to the backing field.
    pub attrs: Vec<Attribute>,

    /// Visibility of the generated accessors.
    pub vis: Visibility,

    /// Property name.
    pub name: Ident,

    /// Declared type.
    pub ty: Type,

    /// Default value expression.
    pub default: Expr,
}
