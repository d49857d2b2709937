//! Interface shared by the shapes plugin and the programs that load it

pub trait Shape: Send + Sync {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
}

classloader::declare_interface!(dyn Shape, "shapes.Shape");
