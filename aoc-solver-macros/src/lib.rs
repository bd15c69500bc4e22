//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span};
use quote::quote;
use syn::{DeriveInput, Lit, LitStr, parse_macro_input};

/// Derive macro implementing `Solver` by dispatching to `PartSolver<N>` impls
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts; `PartSolver<1>` through
///   `PartSolver<max_parts>` must be implemented.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AocSolver requires #[aoc_solver(max_parts = N)]")
        })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: syn::LitInt = meta.value()?.parse()?;
            max_parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    })?;

    let max_parts = max_parts
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required `max_parts`"))?;
    if max_parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`max_parts` must be at least 1"));
    }

    let arms = (1..=max_parts).map(|part| {
        let lit = Literal::u8_unsuffixed(part);
        quote! {
            #lit => <Self as ::aoc_solver::PartSolver<#lit>>::solve(shared),
        }
    });
    let parts_lit = Literal::u8_unsuffixed(max_parts);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2024)
/// - `day`: Required. The day number (1-25)
/// - `title`: The puzzle title shown in the run header (defaults to the type name)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "bfs"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If it does not, compilation
/// fails on a `MustImplementSolver` bound naming the type.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2024, day = 1, title = "Historian Hysteria", tags = ["sorting"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AutoRegisterSolver requires #[aoc(...)] attribute")
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut title: Option<LitStr> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: syn::LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: syn::LitInt = meta.value()?.parse()?;
            let parsed: u8 = value.base10_parse()?;
            if !(1..=25).contains(&parsed) {
                return Err(syn::Error::new_spanned(value, "day must be between 1 and 25"));
            }
            day = Some(parsed);
        } else if meta.path.is_ident("title") {
            title = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("tags") {
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit) => tags.push(lit),
                    other => return Err(syn::Error::new_spanned(other, "tags must be string literals")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc attribute, expected year, day, title or tags"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required `day`"))?;
    let title = title.unwrap_or_else(|| LitStr::new(&name.to_string(), Span::call_site()));

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                title: #title,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
