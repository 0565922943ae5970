// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Procedural macros for the microtest harness.
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{Error, ItemFn, parse_macro_input};

/// Marks a function as a unit test.
///
/// The function registers itself at link time and is picked up by
/// `microtest::Registry::collect()` together with every other marked
/// test; its identifier becomes the printed test name and its
/// declaration site fixes its place in the run order. The function
/// should have no input arguments and return nothing.
///
/// # Example
///
/// ```ignore
/// use microtest::unit_test;
///
/// #[unit_test]
/// fn addition() {
///     microtest::check_eq!(2 + 2, 4);
/// }
/// ```
#[proc_macro_attribute]
pub fn unit_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return Error::new(
            Span::call_site(),
            "expect an empty attribute: `#[unit_test]`",
        )
        .to_compile_error()
        .into();
    }

    let func = parse_macro_input!(item as ItemFn);

    // Test callbacks take no arguments and return nothing.
    if let syn::ReturnType::Type(..) = func.sig.output {
        return Error::new(
            Span::call_site(),
            "expect no return value for the test function",
        )
        .to_compile_error()
        .into();
    }
    if !func.sig.inputs.is_empty() {
        return Error::new(
            Span::call_site(),
            "expect no input arguments for the test function",
        )
        .to_compile_error()
        .into();
    }

    let name = &func.sig.ident;
    let name_str = name.to_string();
    let descriptor_name = format_ident!("__UNIT_TEST_{}", name_str.to_uppercase());

    let output = quote! {
        #func

        #[::microtest::__private::distributed_slice(::microtest::TESTS)]
        #[linkme(crate = ::microtest::__private::linkme)]
        #[allow(non_upper_case_globals)]
        static #descriptor_name: ::microtest::TestDescriptor =
            ::microtest::TestDescriptor::new(#name_str, #name, ::core::file!(), ::core::line!());
    };

    output.into()
}
