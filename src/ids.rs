//! Fresh record ids from `Math.random()` and `Date.now()`

use class_store::compose_id;

pub fn new_id() -> String {
    compose_id(js_sys::Math::random(), js_sys::Date::now() as u64)
}
