//! Parsing of the struct and its `#[stimulus(...)]` attributes.

use heck::ToSnakeCase;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, LitStr, Type};

/// A field exposed through `Component::prop`.
#[derive(Clone)]
pub(crate) struct PropField {
    pub ident: Ident,
    pub name: String,
    pub ty: Type,
}

/// Everything the generator needs to know about the annotated struct.
pub(crate) struct ComponentInput {
    pub ident: Ident,
    pub generics: Generics,
    pub scope: String,
    pub id_field: Option<Ident>,
    pub props: Vec<PropField>,
}

#[derive(Default)]
struct FieldAttrs {
    id: bool,
    skip: bool,
}

/// Iterate all `#[stimulus(...)]` attributes once and apply a callback.
fn parse_stimulus<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("stimulus")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn parse_scope(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut scope = None;
    parse_stimulus(attrs, |meta| {
        if meta.path.is_ident("scope") {
            let lit: LitStr = meta.value()?.parse()?;
            scope = Some(lit.value());
            Ok(())
        } else {
            Err(meta.error("unsupported stimulus attribute; expected `scope = \"...\"`"))
        }
    })?;
    Ok(scope)
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_stimulus(attrs, |meta| {
        if meta.path.is_ident("id") {
            out.id = true;
            Ok(())
        } else if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else {
            Err(meta.error("unsupported stimulus field attribute; expected `id` or `skip`"))
        }
    })?;
    Ok(out)
}

/// Scope path used when the struct does not name one.
pub(crate) fn default_scope(ident: &Ident) -> String {
    ident.unraw().to_string().to_snake_case()
}

/// Collect the struct's scope, id field and exposed properties.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ComponentInput> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Component can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "Component requires named fields",
        ));
    };

    let scope = parse_scope(&input.attrs)?.unwrap_or_else(|| default_scope(&input.ident));
    let mut id_field: Option<Ident> = None;
    let mut props = Vec::new();
    for field in &named.named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.id {
            if id_field.is_some() {
                return Err(syn::Error::new_spanned(
                    &ident,
                    "only one field may be marked #[stimulus(id)]",
                ));
            }
            id_field = Some(ident.clone());
        }
        if !attrs.skip {
            props.push(PropField {
                name: ident.unraw().to_string(),
                ident,
                ty: field.ty.clone(),
            });
        }
    }

    Ok(ComponentInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        scope,
        id_field,
        props,
    })
}
