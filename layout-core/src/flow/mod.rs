pub mod grid;
pub mod linear;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}
