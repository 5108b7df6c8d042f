use hyperkey_common::keycodes::{key_code, key_range};
use proc_macro2::TokenStream;
use quote::quote;
use regex::Regex;
use std::{
    env,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};
use syn::{Expr, Lit, LitStr, MetaNameValue};

#[derive(Debug)]
struct BuildError(String);
impl Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for BuildError {}
impl BuildError {
    fn from_str(msg: &str) -> Self {
        Self(msg.to_owned())
    }
    fn from_error(msg: &impl std::error::Error) -> Self {
        Self(msg.to_string())
    }
}

type Result<T> = std::result::Result<T, BuildError>;

const DEFAULT_LAYOUT: &str = "layout.txt";

fn compile_error(message: &str) -> TokenStream {
    quote! {
        compile_error!(#message)
    }
}

enum LayoutSource {
    Inline(String),
    File(PathBuf),
}

pub(crate) fn matrix_layout(input: TokenStream) -> TokenStream {
    match get_layout_source(input).and_then(quote_layout) {
        Ok(s) => s,
        Err(err) => compile_error(err.0.as_str()),
    }
}

fn get_layout_source(input: TokenStream) -> Result<LayoutSource> {
    if input.is_empty() {
        return Ok(LayoutSource::File(cargo_dir()?.join(DEFAULT_LAYOUT)));
    }

    if let Ok(lit) = syn::parse2::<LitStr>(input.clone()) {
        return Ok(LayoutSource::Inline(lit.value()));
    }

    let arg: MetaNameValue = syn::parse2(input).map_err(|e| BuildError::from_error(&e))?;
    if arg.path.is_ident("file") {
        if let Expr::Lit(expr) = &arg.value {
            if let Lit::Str(lit) = &expr.lit {
                return Ok(LayoutSource::File(cargo_dir()?.join(lit.value())));
            }
        }
    }

    Err(BuildError::from_str(
        "Expected a layout string, file = \"path\" or nothing as argument",
    ))
}

fn cargo_dir() -> Result<PathBuf> {
    Ok(PathBuf::from(
        env::var_os("CARGO_MANIFEST_DIR")
            .ok_or_else(|| BuildError::from_str("CARGO_MANIFEST_DIR not found"))?,
    ))
}

fn read_layout(source_file: &Path) -> Result<String> {
    fs::read_to_string(source_file).map_err(|e| {
        BuildError(format!(
            "Can't read layout file {}, {e:?}",
            &source_file.display()
        ))
    })
}

fn quote_layout(source: LayoutSource) -> Result<TokenStream> {
    let (text, tracked) = match source {
        LayoutSource::Inline(text) => (text, None),
        LayoutSource::File(path) => {
            let text = read_layout(&path)?;
            (text, Some(path.display().to_string()))
        }
    };

    let rows = compile_layout(&text)?;
    let row_count = rows.len();
    let col_count = rows[0].len();
    let rows = rows.iter().map(|row| quote! { [#(#row),*] });

    let track = tracked.map(|path| quote! { const _: &[u8] = include_bytes!(#path); });

    Ok(quote! {
        {
            #track
            const M: [[u8; #col_count]; #row_count] = [#(#rows),*];
            &M
        }
    })
}

/// Turn layout text into rows of HID codes, checking that every key appears only once.
fn compile_layout(text: &str) -> Result<Vec<Vec<u8>>> {
    let word = Regex::new(r"\S+").map_err(|e| BuildError(e.to_string()))?;
    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut seen: Vec<(u8, &str, usize, usize)> = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = rows.len();
        let mut codes = Vec::new();

        for (col, name) in word.find_iter(line).map(|m| m.as_str()).enumerate() {
            let code = key_code(name)
                .ok_or_else(|| BuildError(format!("Unknown key name '{name}' in row {row}")))?;

            if code != key_range::NONE {
                if let Some((_, first, r, c)) = seen.iter().find(|(kc, ..)| *kc == code) {
                    return Err(BuildError(format!(
                        "Key '{name}' at ({row}, {col}) is already mapped as '{first}' at ({r}, {c})"
                    )));
                }
                seen.push((code, name, row, col));
            }
            codes.push(code);
        }

        if let Some(first) = rows.first() {
            if first.len() != codes.len() {
                return Err(BuildError(format!(
                    "Row {row} has {} keys; expected {}",
                    codes.len(),
                    first.len()
                )));
            }
        }
        rows.push(codes);
    }

    if rows.is_empty() {
        return Err(BuildError::from_str("Layout has no rows"));
    }

    Ok(rows)
}

#[cfg(test)]
#[path = "build_test.rs"]
mod test;
