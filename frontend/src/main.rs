//! Entry point for the WASM application

pub fn main() {
    classifier_frontend::mount();
}
