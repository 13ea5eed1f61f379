//! Implementation of the `curry!` procedural macro.
//!
//! The macro turns a closure, or a function path paired with an explicit
//! arity, into a chain of unary closures.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)` (arity is the parameter count)
//! 2. Function path + arity form: `curry!(function_name, arity)`
//!
//! # Generated Code Structure
//!
//! For `curry!(add3, 3)` the macro generates:
//!
//! ```text
//! {
//!     let __pointfree_function = Rc::new(add3);
//!     move |__pointfree_argument_0| {
//!         let __pointfree_function = Rc::clone(&__pointfree_function);
//!         let __pointfree_argument_0 = Rc::new(__pointfree_argument_0);
//!         move |__pointfree_argument_1| {
//!             let __pointfree_function = Rc::clone(&__pointfree_function);
//!             let __pointfree_argument_0 = Rc::clone(&__pointfree_argument_0);
//!             let __pointfree_argument_1 = Rc::new(__pointfree_argument_1);
//!             move |__pointfree_argument_2| {
//!                 __pointfree_function(
//!                     Rc::unwrap_or_clone(Rc::clone(&__pointfree_argument_0)),
//!                     Rc::unwrap_or_clone(Rc::clone(&__pointfree_argument_1)),
//!                     __pointfree_argument_2,
//!                 )
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! Every level is an `Fn`, so partial applications can be reused. Arity 0
//! yields a thunk `move || f()`.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Token, spanned::Spanned};

pub enum CurryInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    match parse_curry_input(input) {
        Ok(CurryInput::Closure(closure)) => {
            generate_nested_closures(closure.inputs.len(), &quote! { #closure })
        }
        Ok(CurryInput::FunctionWithArity { function, arity }) => {
            generate_nested_closures(arity, &quote! { #function })
        }
        Err(error) => error.to_compile_error(),
    }
}

pub fn parse_curry_input(input: TokenStream) -> syn::Result<CurryInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;

    let mut iterator = expressions.into_iter();
    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(single), None, None) => parse_single_expression(single),
        (Some(function), Some(arity), None) => parse_function_with_arity(function, arity),
        (_, _, Some(extra)) => Err(syn::Error::new(
            extra.span(),
            "curry! takes a closure, or a function path and an arity",
        )),
        (None, _, _) => Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a closure or function name with arity",
        )),
    }
}

fn parse_single_expression(expression: Expr) -> syn::Result<CurryInput> {
    match expression {
        Expr::Closure(closure) => Ok(CurryInput::Closure(closure)),
        Expr::Path(path) => Err(syn::Error::new(
            path.span(),
            "curry! with a function name requires an arity: curry!(function_name, 2)",
        )),
        other => Err(syn::Error::new(
            other.span(),
            "curry! requires a closure or function name with arity",
        )),
    }
}

fn parse_function_with_arity(first: Expr, second: Expr) -> syn::Result<CurryInput> {
    let function = match first {
        Expr::Path(path) => path,
        Expr::Closure(closure) => {
            return Err(syn::Error::new(
                closure.span(),
                "curry! takes the arity of a closure from its parameter list",
            ));
        }
        other => {
            return Err(syn::Error::new(
                other.span(),
                "expected a function name or path",
            ));
        }
    };

    let arity = match second {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>()?,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "curry! expected an integer literal for arity",
            ));
        }
    };

    Ok(CurryInput::FunctionWithArity { function, arity })
}

fn generate_nested_closures(argument_count: usize, function_expression: &TokenStream) -> TokenStream {
    if argument_count == 0 {
        return quote! {
            {
                let __pointfree_function = #function_expression;
                move || __pointfree_function()
            }
        };
    }

    let argument_identifiers: Vec<_> = (0..argument_count)
        .map(|index| format_ident!("__pointfree_argument_{}", index))
        .collect();

    let last_index = argument_count - 1;
    let final_arguments = argument_identifiers.iter().enumerate().map(|(index, identifier)| {
        if index < last_index {
            quote! { ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#identifier)) }
        } else {
            quote! { #identifier }
        }
    });

    let mut body = quote! { __pointfree_function(#(#final_arguments),*) };

    for index in (0..argument_count).rev() {
        let identifier = &argument_identifiers[index];
        body = if index == last_index {
            quote! { move |#identifier| { #body } }
        } else {
            let earlier = &argument_identifiers[..index];
            quote! {
                move |#identifier| {
                    let __pointfree_function = ::std::rc::Rc::clone(&__pointfree_function);
                    #(let #earlier = ::std::rc::Rc::clone(&#earlier);)*
                    let #identifier = ::std::rc::Rc::new(#identifier);
                    #body
                }
            }
        };
    }

    quote! {
        {
            let __pointfree_function = ::std::rc::Rc::new(#function_expression);
            #body
        }
    }
}
