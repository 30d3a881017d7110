// The main crate is wasm-only, so the host-side tests compile the pure gauge
// modules directly. The tree mirrors src/core so their `super::` paths resolve.

pub mod core {
    pub mod arc {
        include!("../../src/core/arc.rs");
    }
    pub mod color {
        include!("../../src/core/color.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod markup {
        include!("../../src/core/markup.rs");
    }
    pub mod options {
        include!("../../src/core/options.rs");
    }
    pub mod transition {
        include!("../../src/core/transition.rs");
    }
    pub mod values {
        include!("../../src/core/values.rs");
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
