//! Proc-macros used by keyboard binaries built on [hyperkey-firmware].
extern crate proc_macro;

mod build;

/// Compile a text key layout into a `&'static [[u8; COLS]; ROWS]` of HID codes.
///
/// Each non-empty line is a matrix row; keys are separated by whitespace and named as
/// [hyperkey_common::keycodes::key_code] understands them. `_` marks a position with no key.
///
/// ```ignore
/// const LAYOUT: &[[u8; 3]] = hyperkey_macros::matrix_layout!(r#"
///     7 8 9
///     4 5 6
///     1 2 3
/// "#);
/// ```
#[proc_macro]
pub fn matrix_layout(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    build::matrix_layout(proc_macro2::TokenStream::from(input)).into()
}
