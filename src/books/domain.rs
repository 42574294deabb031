use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn title(&self) -> &str;
    fn authors(&self) -> &[String];
    fn category(&self) -> &str;
    fn year(&self) -> i32;
    fn price(&self) -> f64;
    fn cover(&self) -> Option<&str>;
}
