// Opted-out declarations keep their markers verbatim
use interpol::{interpolate, no_interpolation};

#[interpolate]
mod config {
    #[no_interpolation]
    pub const TEMPLATE: &str = "${user}@${host}";

    pub fn render(user: &str, host: &str) -> String {
        "${user}@${host}"
    }
}

#[no_interpolation]
fn standalone() -> &'static str {
    "${never}"
}

fn main() {
    assert_eq!(config::TEMPLATE, "${user}@${host}");
    assert_eq!(config::render("root", "box"), "root@box");
    assert_eq!(standalone(), "${never}");
}
