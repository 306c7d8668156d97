use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_PARTIALS: &[&str] = &[
    "assets/css/tokens.css",
    "assets/css/layout.css",
    "assets/css/components.css",
    "assets/css/pages.css",
];
const BUNDLE_DIR: &str = "assets/dist";
const BUNDLE_PATH: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed={CSS_ENTRY}");
    for partial in CSS_PARTIALS {
        println!("cargo:rerun-if-changed={partial}");
    }
    println!("cargo:rerun-if-env-changed=SLASH_BACKEND_URL");
    println!("cargo:rerun-if-env-changed=SLASH_FRONTEND_URL");

    if let Err(message) = bundle_css() {
        // The `asset!` macro needs the bundle, so a broken stylesheet stops the build
        panic!("CSS bundling failed: {message}");
    }
}

/// Resolve the `@import`s of main.css, minify, and write one stylesheet.
fn bundle_css() -> Result<(), String> {
    fs::create_dir_all(BUNDLE_DIR).map_err(|e| format!("create {BUNDLE_DIR}: {e}"))?;

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .map_err(|e| format!("bundle {CSS_ENTRY}: {e}"))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify: {e}"))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("print: {e}"))?;

    fs::write(BUNDLE_PATH, css.code).map_err(|e| format!("write {BUNDLE_PATH}: {e}"))
}
