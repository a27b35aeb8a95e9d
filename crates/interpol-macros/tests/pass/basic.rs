// A function body with mixed literal and expression segments
use interpol::interpolate;

#[interpolate]
fn greet(name: &str, visits: u32) -> String {
    "Hello, ${name}! Visit #${visits + 1}."
}

fn main() {
    assert_eq!(greet("Ann", 2), "Hello, Ann! Visit #3.");
}
