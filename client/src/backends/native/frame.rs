/// Native builds never run inside a browser frame.
pub fn is_embedded() -> bool {
    false
}
