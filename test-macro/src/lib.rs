use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use std::{env, path::PathBuf};
use syn::{ItemFn, LitStr};

/// Generates one `#[test]` per file matching the glob pattern.
///
/// The pattern is relative to the crate root. The annotated function receives the absolute path
/// of the fixture and is kept as is; each generated test is named
/// `<function>_<file stem in snake case>`.
///
/// ```ignore
/// #[fixture("../test-data/*.json")]
/// fn casing<P: AsRef<Path>>(fixture_path: P) { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn fixture(attr: TokenStream, item: TokenStream) -> TokenStream {
    let pattern = syn::parse_macro_input!(attr as LitStr);
    let test_fn = syn::parse_macro_input!(item as ItemFn);

    expand(pattern, test_fn)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(pattern: LitStr, test_fn: ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let fn_name = &test_fn.sig.ident;

    let crate_root = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .map_err(|err| syn::Error::new(pattern.span(), err))?;
    let full_pattern = crate_root.join(pattern.value());

    let paths = glob::glob(&full_pattern.to_string_lossy())
        .map_err(|err| syn::Error::new(pattern.span(), format!("invalid pattern: {}", err)))?;

    let mut tests = vec![];
    for path in paths.filter_map(Result::ok) {
        let Some(stem) = path.file_stem() else {
            continue;
        };
        let test_name = format_ident!("{}_{}", fn_name, stem.to_string_lossy().to_case(Case::Snake));
        let path = path.to_string_lossy().into_owned();

        tests.push(quote! {
            #[test]
            fn #test_name() {
                #fn_name(#path);
            }
        });
    }

    if tests.is_empty() {
        return Err(syn::Error::new(
            pattern.span(),
            format!("no fixture matches {:?}", full_pattern),
        ));
    }

    Ok(quote! {
        #test_fn
        #(#tests)*
    })
}
