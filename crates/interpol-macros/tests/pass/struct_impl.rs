// Impl blocks and struct fields in one module
use interpol::interpolate;

#[interpolate]
mod shapes {
    pub struct Rect {
        pub w: u32,
        pub h: u32,
    }

    impl Rect {
        pub fn area(&self) -> u32 {
            self.w * self.h
        }

        pub fn describe(&self) -> String {
            "${self.w}x${self.h} (area ${self.area()})"
        }
    }
}

fn main() {
    let rect = shapes::Rect { w: 3, h: 4 };
    assert_eq!(rect.describe(), "3x4 (area 12)");
}
