//! Implementation of the `#[checked]` attribute macro.
//!
//! # Design
//!
//! The attribute turns a function that returns a container into one that
//! returns `Result<Container, Error>`. The original body runs inside a
//! closure whose `?` raises into `Error`; its value is then passed through
//! `ergoflo::propagate::guard`.
//!
//! # Generated Code Structure
//!
//! For
//!
//! ```text
//! #[checked(error = Fault)]
//! fn bar(x: i32) -> Maybe<i32> {
//!     if x < 0 {
//!         return Maybe::Nothing;
//!     }
//!     Maybe::Some(foo(x)?)
//! }
//! ```
//!
//! the macro generates:
//!
//! ```text
//! fn bar(x: i32) -> ::core::result::Result<Maybe<i32>, Fault> {
//!     #[allow(clippy::redundant_closure_call)]
//!     let __ergoflo_container = (|| -> ::core::result::Result<Maybe<i32>, Fault> {
//!         ::core::result::Result::Ok({
//!             if x < 0 {
//!                 return ::core::result::Result::Ok(Maybe::Nothing);
//!             }
//!             Maybe::Some(foo(x)?)
//!         })
//!     })();
//!     ::ergoflo::propagate::guard(__ergoflo_container?)
//! }
//! ```
//!
//! Without `error = ...` the error type is
//! `<Container as ::ergoflo::container::Unwrap>::Error`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::visit_mut::{self, VisitMut};
use syn::{Block, Expr, ExprAsync, ExprClosure, ExprReturn, Ident, Item, ItemFn, ReturnType, Token, Type};

struct CheckedArguments {
    error: Option<Type>,
}

impl Parse for CheckedArguments {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(Self { error: None });
        }

        let key: Ident = input.parse()?;
        if key != "error" {
            return Err(syn::Error::new(
                key.span(),
                "#[checked] expected `error = Type`",
            ));
        }
        input.parse::<Token![=]>()?;
        let error: Type = input.parse()?;
        input.parse::<Option<Token![,]>>()?;

        if !input.is_empty() {
            return Err(input.error("#[checked] accepts a single `error = Type` argument"));
        }

        Ok(Self { error: Some(error) })
    }
}

pub fn checked_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let expanded = expand_checked(attribute.into(), item.into())
        .unwrap_or_else(|error| error.to_compile_error());

    TokenStream::from(expanded)
}

fn expand_checked(attribute: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let arguments: CheckedArguments = syn::parse2(attribute)?;
    let mut function: ItemFn = syn::parse2(item)?;

    if let Some(asyncness) = &function.sig.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "#[checked] does not support async functions",
        ));
    }

    let container = match &function.sig.output {
        ReturnType::Type(_, container) => (**container).clone(),
        ReturnType::Default => {
            return Err(syn::Error::new(
                function.sig.ident.span(),
                "#[checked] functions must return a container such as `Maybe<T>` or `Result<T, E>`",
            ));
        }
    };

    let error = arguments.error.map_or_else(
        || quote! { <#container as ::ergoflo::container::Unwrap>::Error },
        |error| quote! { #error },
    );

    let mut body: Block = *function.block;
    ReturnRewriter.visit_block_mut(&mut body);

    function.sig.output = syn::parse_quote! {
        -> ::core::result::Result<#container, #error>
    };
    function.block = Box::new(syn::parse_quote! {{
        #[allow(clippy::redundant_closure_call)]
        let __ergoflo_container = (|| -> ::core::result::Result<#container, #error> {
            ::core::result::Result::Ok(#body)
        })();
        ::ergoflo::propagate::guard(__ergoflo_container?)
    }});

    Ok(quote! { #function })
}

/// Wraps the value of every `return` belonging to the annotated function in
/// `Ok`, leaving nested closures, async blocks, and items alone.
struct ReturnRewriter;

impl VisitMut for ReturnRewriter {
    fn visit_expr_return_mut(&mut self, node: &mut ExprReturn) {
        visit_mut::visit_expr_return_mut(self, node);

        let value = node
            .expr
            .take()
            .map_or_else(|| quote! { () }, |expression| quote! { #expression });
        let wrapped: Expr = syn::parse_quote! { ::core::result::Result::Ok(#value) };
        node.expr = Some(Box::new(wrapped));
    }

    fn visit_expr_closure_mut(&mut self, _node: &mut ExprClosure) {}

    fn visit_expr_async_mut(&mut self, _node: &mut ExprAsync) {}

    fn visit_item_mut(&mut self, _node: &mut Item) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand(attribute: TokenStream2, item: TokenStream2) -> ItemFn {
        let expanded = expand_checked(attribute, item).expect("expansion should succeed");
        syn::parse2(expanded).expect("expansion should be a function")
    }

    fn normalized(tokens: impl quote::ToTokens) -> String {
        tokens.to_token_stream().to_string().replace(' ', "")
    }

    #[rstest]
    fn default_error_is_the_container_error() {
        let function = expand(
            quote! {},
            quote! {
                fn foo() -> Maybe<i32> { Maybe::Some(3) }
            },
        );

        assert_eq!(
            normalized(&function.sig.output),
            "->::core::result::Result<Maybe<i32>,<Maybe<i32>as::ergoflo::container::Unwrap>::Error>"
        );
    }

    #[rstest]
    fn explicit_error_replaces_default() {
        let function = expand(
            quote! { error = Fault },
            quote! {
                fn bar() -> Maybe<i32> { Maybe::Some(foo()?) }
            },
        );

        assert_eq!(
            normalized(&function.sig.output),
            "->::core::result::Result<Maybe<i32>,Fault>"
        );
        assert!(normalized(&function.block).contains("::ergoflo::propagate::guard"));
    }

    #[rstest]
    fn returns_are_wrapped_in_ok() {
        let function = expand(
            quote! {},
            quote! {
                fn pick(flag: bool) -> Maybe<i32> {
                    if flag {
                        return Maybe::Nothing;
                    }
                    Maybe::Some(1)
                }
            },
        );

        assert!(
            normalized(&function.block)
                .contains("return::core::result::Result::Ok(Maybe::Nothing)")
        );
    }

    #[rstest]
    fn nested_closure_returns_are_untouched() {
        let function = expand(
            quote! {},
            quote! {
                fn nested() -> Maybe<i32> {
                    let inner = |x: i32| { return x + 1; };
                    Maybe::Some(inner(1))
                }
            },
        );

        let block = normalized(&function.block);
        assert!(block.contains("returnx+1;"));
        assert!(!block.contains("Ok(x+1)"));
    }

    #[rstest]
    #[case::async_function(quote! {}, quote! { async fn foo() -> Maybe<i32> { Maybe::Nothing } }, "async")]
    #[case::missing_return_type(quote! {}, quote! { fn foo() {} }, "must return a container")]
    #[case::unknown_argument(quote! { raise = Fault }, quote! { fn foo() -> Maybe<i32> { Maybe::Nothing } }, "expected `error = Type`")]
    #[case::extra_tokens(quote! { error = Fault, extra }, quote! { fn foo() -> Maybe<i32> { Maybe::Nothing } }, "single `error = Type`")]
    fn invalid_usage_is_rejected(
        #[case] attribute: TokenStream2,
        #[case] item: TokenStream2,
        #[case] expected_message: &str,
    ) {
        let error = expand_checked(attribute, item).expect_err("expansion should fail");
        assert!(
            error.to_string().contains(expected_message),
            "unexpected error: {error}"
        );
    }
}
