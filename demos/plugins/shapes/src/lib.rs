//! Shapes Plugin - registers a few `Shape` implementations

use classloader::{export_plugin, register_class};
use shapes_api::Shape;

#[derive(Default)]
pub struct UnitSquare;

impl Shape for UnitSquare {
    fn name(&self) -> &str {
        "unit square"
    }

    fn area(&self) -> f64 {
        1.0
    }
}

#[derive(Default)]
pub struct UnitCircle;

impl Shape for UnitCircle {
    fn name(&self) -> &str {
        "unit circle"
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI
    }
}

export_plugin!(|registrar| {
    register_class!(registrar, UnitSquare, dyn Shape);
    register_class!(registrar, UnitCircle, dyn Shape, "Circle");
});
