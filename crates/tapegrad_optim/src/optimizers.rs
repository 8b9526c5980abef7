pub mod adam;
pub mod gradient_descent;
