// Both escape conventions produce a literal marker
use interpol::interpolate;

#[interpolate]
fn shell(var: &str) -> String {
    "export ${var}=\\${${var}_DEFAULT}"
}

#[interpolate]
fn workaround() -> String {
    "${'$'}{3 + 4} = ${3 + 4}"
}

fn main() {
    assert_eq!(shell("PATH"), "export PATH=${PATH_DEFAULT}");
    assert_eq!(workaround(), "${3 + 4} = 7");
}
