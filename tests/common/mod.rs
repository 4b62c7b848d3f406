// Host-side shim for the pure simulation modules.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod point {
        include!("../../src/core/point.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
    pub mod row {
        include!("../../src/core/row.rs");
    }
    pub mod palette {
        include!("../../src/core/palette.rs");
    }
    pub mod layout {
        include!("../../src/core/layout.rs");
    }
    pub mod schedule {
        include!("../../src/core/schedule.rs");
    }
    pub mod field {
        include!("../../src/core/field.rs");
    }
}

use self::core::surface::Surface;
use glam::DVec2;

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    BezierTo(DVec2, DVec2, DVec2),
    ClosePath,
    Fill(String),
}

/// Surface that records every call instead of rasterizing.
pub struct Recorder {
    pub extent: DVec2,
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            extent: DVec2::new(width, height),
            ops: Vec::new(),
        }
    }

    /// Fill colors in paint order.
    pub fn fills(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn extent(&self) -> DVec2 {
        self.extent
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, p: DVec2) {
        self.ops.push(Op::MoveTo(p));
    }
    fn line_to(&mut self, p: DVec2) {
        self.ops.push(Op::LineTo(p));
    }
    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, p: DVec2) {
        self.ops.push(Op::BezierTo(c1, c2, p));
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn fill(&mut self, color: &str) {
        self.ops.push(Op::Fill(color.to_owned()));
    }
}
