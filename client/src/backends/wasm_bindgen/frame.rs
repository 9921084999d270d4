/// Whether this document is loaded inside another page's frame.
pub fn is_embedded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.top() {
        Ok(Some(top)) => !js_sys::Object::is(window.as_ref(), top.as_ref()),
        Ok(None) => false,
        // reading `top` across origins throws, which only happens when framed
        Err(_) => true,
    }
}
