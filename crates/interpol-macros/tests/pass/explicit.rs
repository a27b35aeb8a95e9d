// Null-safe stringification of Option values next to plain ones
use interpol::interpolate;

#[interpolate(explicit_to_string)]
fn label(id: Option<u64>, kind: &str) -> String {
    "${kind}-${id}"
}

fn main() {
    assert_eq!(label(Some(7), "item"), "item-7");
    assert_eq!(label(None, "item"), "item-null");
}
