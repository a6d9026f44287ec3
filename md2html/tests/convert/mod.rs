//! End to end conversion tests (markdown lines → HTML fragments)

mod documents;
mod fixtures;
